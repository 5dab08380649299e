//! Edge-list text provider producing [`arbor_core::Graph`] values.
//!
//! The format is whitespace tokenised. The first non-blank line holds the
//! vertex count `V` and the edge count `E`; each of the next `E` non-blank
//! lines holds one edge `u v w` with `1 <= u, v <= V` and `w >= 0`.

mod errors;
mod parse;
mod source;

pub use errors::{EdgeListError, EdgeListErrorCode};
pub use parse::{MAX_VERTICES, parse_edge_list};
pub use source::EdgeListSource;
