//! Dijkstra shortest-path tree over the indexed min-heap.
//!
//! Shares the heap and the relaxation shape of [`crate::prim_mst`]; the only
//! difference is that a frontier key is the path length from the source
//! rather than the weight of a single edge.

use tracing::{Span, debug, field, instrument};

use crate::{
    error::{Result, check_source},
    graph::{Graph, VertexId},
    heap::IndexedMinHeap,
};

/// Shortest paths from one source vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexId,
    parents: Vec<VertexId>,
    distances: Vec<u64>,
}

impl ShortestPathTree {
    /// Returns the vertex the paths start from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the predecessor array indexed by vertex id; the source and
    /// unreachable vertices hold `0`.
    #[must_use]
    pub fn parents(&self) -> &[VertexId] {
        &self.parents
    }

    /// Returns the length of the shortest path to `vertex`, or `None` when
    /// it is unreachable or out of range.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<u64> {
        if vertex == 0 {
            return None;
        }
        self.distances
            .get(vertex)
            .copied()
            .filter(|&distance| distance != u64::MAX)
    }

    /// Returns the vertices on the shortest path from the source to
    /// `vertex`, source first, or `None` when `vertex` is unreachable.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        self.distance(vertex)?;
        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.source {
            current = *self.parents.get(current)?;
            if current == 0 {
                return None;
            }
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Computes single-source shortest paths with Dijkstra's algorithm.
///
/// Path lengths saturate at `u64::MAX - 1`, which no realistic graph of
/// `u32` weights reaches.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidSource`] when the graph has vertices
/// and `source` is not one of them.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeRecord, Graph, shortest_path_tree};
///
/// let graph = Graph::from_edges(
///     3,
///     [
///         EdgeRecord::new(1, 2, 1),
///         EdgeRecord::new(2, 3, 2),
///         EdgeRecord::new(1, 3, 5),
///     ],
/// )
/// .expect("edges are in range");
/// let tree = shortest_path_tree(&graph, 1).expect("source exists");
/// assert_eq!(tree.distance(3), Some(3));
/// assert_eq!(tree.path_to(3), Some(vec![1, 2, 3]));
/// ```
#[instrument(
    name = "core.shortest_path_tree",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), reached = field::Empty),
)]
pub fn shortest_path_tree(graph: &Graph, source: VertexId) -> Result<ShortestPathTree> {
    let Ok(mut heap) = IndexedMinHeap::with_capacity(graph.vertex_count()) else {
        return Ok(ShortestPathTree {
            source,
            parents: vec![0],
            distances: vec![u64::MAX],
        });
    };
    check_source(source, graph.vertex_count())?;

    let size = graph.vertex_count() + 1;
    let mut distances = vec![u64::MAX; size];
    let mut parents = vec![0; size];
    let mut settled = vec![false; size];
    let mut reached = 0_usize;

    distances[source] = 0;
    heap.insert(&distances, source);
    while let Some(vertex) = heap.remove(&distances) {
        settled[vertex] = true;
        reached += 1;
        let base = distances[vertex];
        for incidence in graph.neighbours(vertex) {
            let neighbour = incidence.vertex();
            if settled[neighbour] {
                continue;
            }
            let candidate = base
                .saturating_add(u64::from(incidence.weight()))
                .min(u64::MAX - 1);
            if candidate >= distances[neighbour] {
                continue;
            }
            parents[neighbour] = vertex;
            if heap.contains(neighbour) {
                heap.decrease_key(&mut distances, neighbour, candidate);
            } else {
                distances[neighbour] = candidate;
                heap.insert(&distances, neighbour);
            }
        }
    }

    Span::current().record("reached", reached);
    debug!(reached, "shortest path tree computed");
    Ok(ShortestPathTree {
        source,
        parents,
        distances,
    })
}
