//! Depth-first and breadth-first visit orders.

use std::collections::VecDeque;

use tracing::{Span, debug, field, instrument};

use crate::{
    error::{Result, check_source},
    graph::{Graph, VertexId},
};

/// Order in which [`traverse`] visits vertices.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TraversalOrder {
    /// Follow the first unvisited neighbour as deep as possible before
    /// backtracking.
    #[default]
    DepthFirst,
    /// Visit every vertex at distance `k` before any at distance `k + 1`.
    BreadthFirst,
}

/// Returns the vertices reachable from `source` in visit order.
///
/// Neighbours are considered in adjacency order, so the result is the order
/// a recursive depth-first search (or a FIFO breadth-first search) over
/// [`Graph::neighbours`] would produce.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidSource`] when `source` is not a vertex
/// of a non-empty graph. An empty graph yields an empty order.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeRecord, Graph, TraversalOrder, traverse};
///
/// let graph = Graph::from_edges(
///     4,
///     [
///         EdgeRecord::new(1, 2, 1),
///         EdgeRecord::new(2, 3, 1),
///         EdgeRecord::new(1, 4, 1),
///     ],
/// )
/// .expect("edges are in range");
/// assert_eq!(traverse(&graph, 1, TraversalOrder::DepthFirst)?, vec![1, 2, 3, 4]);
/// assert_eq!(traverse(&graph, 1, TraversalOrder::BreadthFirst)?, vec![1, 2, 4, 3]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "core.traverse",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), visited = field::Empty),
)]
pub fn traverse(graph: &Graph, source: VertexId, order: TraversalOrder) -> Result<Vec<VertexId>> {
    if graph.is_empty() {
        return Ok(Vec::new());
    }
    check_source(source, graph.vertex_count())?;

    let visited = match order {
        TraversalOrder::DepthFirst => depth_first(graph, source),
        TraversalOrder::BreadthFirst => breadth_first(graph, source),
    };
    Span::current().record("visited", visited.len());
    debug!(visited = visited.len(), ?order, "traversal finished");
    Ok(visited)
}

fn depth_first(graph: &Graph, source: VertexId) -> Vec<VertexId> {
    let mut seen = vec![false; graph.vertex_count() + 1];
    let mut order = vec![source];
    // Each frame is a vertex and the index of its next neighbour to try.
    let mut stack = vec![(source, 0_usize)];
    seen[source] = true;

    while let Some((vertex, next)) = stack.last_mut() {
        let Some(incidence) = graph.neighbours(*vertex).get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;
        let neighbour = incidence.vertex();
        if !seen[neighbour] {
            seen[neighbour] = true;
            order.push(neighbour);
            stack.push((neighbour, 0));
        }
    }
    order
}

fn breadth_first(graph: &Graph, source: VertexId) -> Vec<VertexId> {
    let mut seen = vec![false; graph.vertex_count() + 1];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([source]);
    seen[source] = true;

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for incidence in graph.neighbours(vertex) {
            let neighbour = incidence.vertex();
            if !seen[neighbour] {
                seen[neighbour] = true;
                queue.push_back(neighbour);
            }
        }
    }
    order
}
