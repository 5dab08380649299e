use std::fmt;

use arbor_core::GraphError;
use thiserror::Error;

/// Errors raised while reading an edge list.
///
/// Line numbers are 1-based and count every physical line, blank or not.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The input held no non-blank line.
    #[error("edge list is empty; expected a `V E` header")]
    MissingHeader,
    /// A token was not a non-negative integer in range.
    #[error("line {line}: invalid {what} `{token}`")]
    InvalidToken {
        /// Line holding the token.
        line: usize,
        /// Which value the token should have been.
        what: &'static str,
        /// The offending token.
        token: String,
    },
    /// A line had the wrong number of tokens.
    #[error("line {line}: expected {expected} tokens but found {found}")]
    TokenCount {
        /// Line with the wrong token count.
        line: usize,
        /// Tokens required on that line.
        expected: usize,
        /// Tokens present on that line.
        found: usize,
    },
    /// The header declared more vertices than a graph may hold.
    #[error("line {line}: header declares {declared} vertices; at most {limit} are supported")]
    TooManyVertices {
        /// Header line.
        line: usize,
        /// Vertex count from the header.
        declared: usize,
        /// Largest accepted vertex count.
        limit: usize,
    },
    /// The input ended before the declared number of edges.
    #[error("header declares {declared} edges but only {found} were present")]
    MissingEdges {
        /// Edge count from the header.
        declared: usize,
        /// Edge lines actually read.
        found: usize,
    },
    /// Non-blank content followed the last declared edge.
    #[error("line {line}: unexpected content after the last edge")]
    TrailingContent {
        /// First offending line.
        line: usize,
    },
    /// The edges did not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Stable codes describing [`EdgeListError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    /// Reading failed.
    Io,
    /// No header line.
    MissingHeader,
    /// A token failed to parse.
    InvalidToken,
    /// Wrong number of tokens on a line.
    TokenCount,
    /// Vertex count above the supported maximum.
    TooManyVertices,
    /// Fewer edges than declared.
    MissingEdges,
    /// Content after the last edge.
    TrailingContent,
    /// An edge referenced a vertex outside `1..=V`.
    Graph,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "EDGE_LIST_IO",
            Self::MissingHeader => "EDGE_LIST_MISSING_HEADER",
            Self::InvalidToken => "EDGE_LIST_INVALID_TOKEN",
            Self::TokenCount => "EDGE_LIST_TOKEN_COUNT",
            Self::TooManyVertices => "EDGE_LIST_TOO_MANY_VERTICES",
            Self::MissingEdges => "EDGE_LIST_MISSING_EDGES",
            Self::TrailingContent => "EDGE_LIST_TRAILING_CONTENT",
            Self::Graph => "EDGE_LIST_GRAPH",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieve the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::Io(_) => EdgeListErrorCode::Io,
            Self::MissingHeader => EdgeListErrorCode::MissingHeader,
            Self::InvalidToken { .. } => EdgeListErrorCode::InvalidToken,
            Self::TokenCount { .. } => EdgeListErrorCode::TokenCount,
            Self::TooManyVertices { .. } => EdgeListErrorCode::TooManyVertices,
            Self::MissingEdges { .. } => EdgeListErrorCode::MissingEdges,
            Self::TrailingContent { .. } => EdgeListErrorCode::TrailingContent,
            Self::Graph(_) => EdgeListErrorCode::Graph,
        }
    }
}
