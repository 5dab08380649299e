use arbor_core::{EdgeRecord, Graph};

/// Builds a graph from `(u, v, w)` triples.
#[must_use]
pub fn graph(vertex_count: usize, raw: &[(usize, usize, u32)]) -> Graph {
    Graph::from_edges(
        vertex_count,
        raw.iter().map(|&(u, v, w)| EdgeRecord::new(u, v, w)),
    )
    .expect("test edges must be in range")
}

/// The six-vertex reference graph.
#[must_use]
pub fn reference_graph() -> Graph {
    graph(
        6,
        &[
            (1, 2, 1),
            (1, 3, 4),
            (2, 3, 2),
            (2, 4, 5),
            (3, 4, 3),
            (3, 5, 6),
            (4, 5, 4),
            (4, 6, 7),
            (5, 6, 2),
            (1, 6, 8),
        ],
    )
}
