//! Line-oriented edge-list parser.

use std::io::BufRead;
use std::str::FromStr;

use arbor_core::{EdgeRecord, Graph};
use tracing::{Span, debug, field, instrument};

use crate::errors::EdgeListError;

const HEADER_TOKENS: usize = 2;
const EDGE_TOKENS: usize = 3;

/// Largest vertex count a header may declare.
///
/// The graph allocates one adjacency list per vertex before reading any
/// edge, so the ceiling keeps a hostile header from exhausting memory.
pub const MAX_VERTICES: usize = 1 << 24;

/// Non-blank lines of a reader, paired with their 1-based line numbers.
struct ContentLines<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>, EdgeListError> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            if !text.trim().is_empty() {
                return Ok(Some((self.line, text)));
            }
        }
        Ok(None)
    }
}

/// Splits `text` into exactly `N` whitespace-separated tokens.
fn tokens<const N: usize>(line: usize, text: &str) -> Result<[&str; N], EdgeListError> {
    let found: Vec<&str> = text.split_whitespace().collect();
    <[&str; N]>::try_from(found.as_slice()).map_err(|_| EdgeListError::TokenCount {
        line,
        expected: N,
        found: found.len(),
    })
}

fn number<T: FromStr>(line: usize, what: &'static str, token: &str) -> Result<T, EdgeListError> {
    token.parse().map_err(|_| EdgeListError::InvalidToken {
        line,
        what,
        token: token.to_owned(),
    })
}

/// Parses an edge list into a [`Graph`].
///
/// Blank lines are ignored wherever they appear. Edges keep their input
/// order, so adjacency lists are filled in the order the file lists them.
///
/// # Errors
/// Returns [`EdgeListError`] when the reader fails, the header or an edge
/// line is malformed, `V` exceeds [`MAX_VERTICES`], fewer than `E` edges
/// are present, non-blank content follows the last edge, or an edge names a
/// vertex outside `1..=V`.
///
/// # Examples
/// ```
/// use arbor_providers_text::parse_edge_list;
///
/// let graph = parse_edge_list("3 2\n1 2 4\n2 3 1\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), arbor_providers_text::EdgeListError>(())
/// ```
#[instrument(
    name = "text.parse_edge_list",
    err,
    skip(reader),
    fields(vertices = field::Empty, edges = field::Empty),
)]
pub fn parse_edge_list(reader: impl BufRead) -> Result<Graph, EdgeListError> {
    let mut lines = ContentLines::new(reader);

    let (line, header) = lines.next_content()?.ok_or(EdgeListError::MissingHeader)?;
    let [vertices, edges] = tokens::<HEADER_TOKENS>(line, &header)?;
    let vertex_count: usize = number(line, "vertex count", vertices)?;
    let edge_count: usize = number(line, "edge count", edges)?;
    if vertex_count > MAX_VERTICES {
        return Err(EdgeListError::TooManyVertices {
            line,
            declared: vertex_count,
            limit: MAX_VERTICES,
        });
    }
    let span = Span::current();
    span.record("vertices", vertex_count);
    span.record("edges", edge_count);

    // The header is untrusted, so cap the up-front reservation.
    let mut records = Vec::with_capacity(edge_count.min(1 << 16));
    while records.len() < edge_count {
        let Some((line, text)) = lines.next_content()? else {
            return Err(EdgeListError::MissingEdges {
                declared: edge_count,
                found: records.len(),
            });
        };
        let [u, v, w] = tokens::<EDGE_TOKENS>(line, &text)?;
        records.push(EdgeRecord::new(
            number(line, "vertex", u)?,
            number(line, "vertex", v)?,
            number(line, "weight", w)?,
        ));
    }

    if let Some((line, _)) = lines.next_content()? {
        return Err(EdgeListError::TrailingContent { line });
    }

    let graph = Graph::from_edges(vertex_count, records)?;
    debug!(vertex_count, edge_count, "edge list parsed");
    Ok(graph)
}
