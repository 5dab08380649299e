//! Undirected weighted graph store.
//!
//! Edges are recorded once per endpoint in per-vertex adjacency vectors and
//! never change after construction. Vertex ids run from `1` to
//! `vertex_count`; slot `0` of the adjacency table is always empty.

use std::ops::RangeInclusive;

use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

/// Identifier of a vertex. Valid vertices are `1..=vertex_count`; `0` means
/// "no vertex".
pub type VertexId = usize;

/// Non-negative edge weight.
pub type Weight = u32;

/// One undirected edge as read from the input, `(source, target, weight)`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeRecord {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl EdgeRecord {
    /// Creates an edge record.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::EdgeRecord;
    ///
    /// let edge = EdgeRecord::new(1, 2, 7);
    /// assert_eq!((edge.source(), edge.target(), edge.weight()), (1, 2, 7));
    /// ```
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// An entry of a vertex's adjacency list: the far endpoint and the weight of
/// the connecting edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Incidence {
    vertex: VertexId,
    weight: Weight,
}

impl Incidence {
    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// Immutable undirected weighted graph held as adjacency lists.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeRecord, Graph};
///
/// let graph = Graph::from_edges(3, [EdgeRecord::new(1, 2, 4), EdgeRecord::new(2, 3, 1)])
///     .expect("edges are in range");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbours(2).len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<EdgeRecord>,
    adjacency: Vec<Vec<Incidence>>,
}

impl Graph {
    /// Builds a graph with `vertex_count` vertices from a sequence of edge
    /// records.
    ///
    /// Every edge is recorded in the adjacency lists of both endpoints, in
    /// input order. Self-loops therefore appear twice in their vertex's list
    /// and parallel edges are all kept.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for the first edge whose
    /// endpoint is `0` or greater than `vertex_count`. No graph is produced
    /// in that case.
    #[instrument(name = "core.graph_from_edges", err, skip(edges))]
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = EdgeRecord>,
    ) -> Result<Self> {
        let edges: Vec<EdgeRecord> = edges.into_iter().collect();
        let mut adjacency = vec![Vec::new(); vertex_count.saturating_add(1)];

        for (index, edge) in edges.iter().enumerate() {
            for vertex in [edge.source, edge.target] {
                if vertex == 0 || vertex > vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        edge: index,
                        vertex,
                        vertex_count,
                    });
                }
            }
            adjacency[edge.source].push(Incidence {
                vertex: edge.target,
                weight: edge.weight,
            });
            adjacency[edge.target].push(Incidence {
                vertex: edge.source,
                weight: edge.weight,
            });
        }

        debug!(vertex_count, edge_count = edges.len(), "graph constructed");
        Ok(Self {
            vertex_count,
            edges,
            adjacency,
        })
    }

    /// Returns the number of vertices, `V`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges, `E`, including self-loops and parallel
    /// edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Returns `true` when `vertex` names a vertex of this graph.
    #[must_use]
    pub const fn contains(&self, vertex: VertexId) -> bool {
        vertex != 0 && vertex <= self.vertex_count
    }

    /// Returns the valid vertex ids, `1..=V`.
    #[must_use]
    pub const fn vertices(&self) -> RangeInclusive<VertexId> {
        1..=self.vertex_count
    }

    /// Returns the edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Returns the incidences of `vertex` in insertion order.
    ///
    /// Unknown vertices, including the sentinel `0`, have no incidences.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> &[Incidence] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
