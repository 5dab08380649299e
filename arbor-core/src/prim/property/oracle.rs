//! Sequential Kruskal oracle for the Prim property suite.
//!
//! Any two minimum spanning forests of a graph have the same total weight,
//! so the oracle only has to agree with Prim on weights and counts, never on
//! which edges were picked.

use crate::{EdgeRecord, VertexId};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: u64,
    /// Number of forest edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Final union-find table, indexed by vertex id.
    roots: Vec<usize>,
    /// Accepted edges as `(u, v, w)`.
    accepted: Vec<(VertexId, VertexId, u64)>,
}

impl SequentialForest {
    /// Returns the weight of the forest restricted to the component that
    /// contains `vertex`.
    pub(super) fn component_weight(&self, vertex: VertexId) -> u64 {
        let mut roots = self.roots.clone();
        let target = find_root(&mut roots, vertex);
        self.accepted
            .iter()
            .filter(|(u, _, _)| find_root(&mut roots, *u) == target)
            .map(|&(_, _, w)| w)
            .sum()
    }

    /// Returns the number of vertices in the component containing `vertex`.
    pub(super) fn component_size(&self, vertex: VertexId) -> usize {
        let mut roots = self.roots.clone();
        let target = find_root(&mut roots, vertex);
        (1..roots.len())
            .filter(|&other| find_root(&mut roots, other) == target)
            .count()
    }

    /// Returns `true` when `a` and `b` share a component.
    pub(super) fn connected(&self, a: VertexId, b: VertexId) -> bool {
        let mut roots = self.roots.clone();
        find_root(&mut roots, a) == find_root(&mut roots, b)
    }
}

/// Computes a minimum spanning forest of a 1-indexed multigraph.
///
/// Self-loops never join two components and are skipped by the union-find
/// check like any other cycle-closing edge.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[EdgeRecord]) -> SequentialForest {
    let mut sorted: Vec<&EdgeRecord> = edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight());

    let mut roots: Vec<usize> = (0..=vertex_count).collect();
    let mut components = vertex_count;
    let mut accepted = Vec::new();
    let mut total_weight = 0_u64;

    for edge in sorted {
        let ra = find_root(&mut roots, edge.source());
        let rb = find_root(&mut roots, edge.target());
        if ra == rb {
            continue;
        }
        roots[ra.max(rb)] = ra.min(rb);
        components -= 1;
        total_weight += u64::from(edge.weight());
        accepted.push((edge.source(), edge.target(), u64::from(edge.weight())));
    }

    SequentialForest {
        total_weight,
        edge_count: accepted.len(),
        component_count: components,
        roots,
        accepted,
    }
}
