//! Fixture and configuration types for the Prim property suite.

use test_strategy::Arbitrary;

use crate::{EdgeRecord, Graph, VertexId};

/// Weight distribution and topology of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    #[weight(2)]
    Varied,
    /// A pool of one to three weights shared by every edge.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus roughly `V / 2` to `V` extra edges.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph.
    #[weight(2)]
    Dense,
    /// Two to five components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Parallel edges, self-loops and zero weights on top of a sparse graph.
    #[weight(2)]
    Multigraph,
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct PrimFixture {
    /// Number of vertices, numbered `1..=vertex_count`.
    pub vertex_count: usize,
    /// Edges in input order.
    pub edges: Vec<EdgeRecord>,
    /// Vertex the single-tree run starts from.
    pub source: VertexId,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl PrimFixture {
    /// Builds the graph for this fixture.
    ///
    /// # Panics
    /// Panics when a generated edge is out of range, which indicates a bug in
    /// the strategies.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
            .expect("generated edges must be in range")
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}, source={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
            self.source,
        )
    }
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of sequential repetitions per input.
    pub repetitions: usize,
    /// Number of threads sharing one graph.
    pub threads: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from `ARBOR_PRIM_PBT_REPS` and
    /// `ARBOR_PRIM_PBT_THREADS`, defaulting to 5 and 4.
    pub(super) fn load() -> Self {
        let read = |name: &str, default: usize| {
            std::env::var(name)
                .ok()
                .and_then(|value| value.parse().ok())
                .filter(|&value: &usize| value > 0)
                .unwrap_or(default)
        };
        Self {
            repetitions: read("ARBOR_PRIM_PBT_REPS", 5),
            threads: read("ARBOR_PRIM_PBT_THREADS", 4),
        }
    }
}
