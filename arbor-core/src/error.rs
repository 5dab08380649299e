//! Error types for the Arbor core library.
//!
//! Defines the error enums exposed by the public API, their stable codes and
//! a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{graph::VertexId, heap::HeapError};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while building a [`crate::Graph`] or starting a search on
/// one.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge named a vertex outside `1..=vertex_count`.
    #[error("edge {edge} references vertex {vertex}, but vertices are numbered 1..={vertex_count}")]
    VertexOutOfRange {
        /// Zero-based position of the offending edge in the input sequence.
        edge: usize,
        /// The vertex id that fell outside the valid range.
        vertex: VertexId,
        /// Number of vertices declared for the graph.
        vertex_count: usize,
    },
    /// A search was started from a vertex that does not exist.
    #[error("source vertex {vertex} is not in 1..={vertex_count}")]
    InvalidSource {
        /// The rejected source vertex.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge named a vertex outside the declared range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// A search was started from a vertex that does not exist.
        InvalidSource => InvalidSource { .. } => "GRAPH_INVALID_SOURCE",
    }
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The heap was created without room for a single vertex.
        ZeroCapacity => ZeroCapacity => "HEAP_ZERO_CAPACITY",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Rejects `source` unless it names a vertex of a graph with `vertex_count`
/// vertices.
pub(crate) fn check_source(source: VertexId, vertex_count: usize) -> Result<()> {
    if source == 0 || source > vertex_count {
        return Err(GraphError::InvalidSource {
            vertex: source,
            vertex_count,
        });
    }
    Ok(())
}
