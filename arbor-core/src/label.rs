//! Letter labels for vertex ids.
//!
//! Vertex `n` renders as the character with code point `n + 64`, so `1` is
//! `A`, `2` is `B` and the sentinel `0` is `@`. Ids whose code point would
//! not be a valid `char` fall back to `#n`.

use std::fmt;

use crate::graph::VertexId;

const LABEL_OFFSET: u32 = 64;

/// Display adapter rendering a vertex id as its letter label.
///
/// # Examples
/// ```
/// use arbor_core::VertexLabel;
///
/// assert_eq!(VertexLabel(1).to_string(), "A");
/// assert_eq!(VertexLabel(6).to_string(), "F");
/// assert_eq!(VertexLabel(0).to_string(), "@");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VertexLabel(pub VertexId);

impl VertexLabel {
    /// Returns the label character, or `None` when the id has no character
    /// representation.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        u32::try_from(self.0)
            .ok()
            .and_then(|id| id.checked_add(LABEL_OFFSET))
            .and_then(char::from_u32)
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "#{}", self.0),
        }
    }
}
