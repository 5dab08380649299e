//! Seeded synthetic graphs for benchmarks.
//!
//! Every generated graph is connected: vertex `v > 1` first attaches to a
//! random earlier vertex, then extra random edges (self-loops and parallel
//! edges included) are layered on top.

use arbor_core::{EdgeRecord, Graph, GraphError, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices, numbered `1..=vertex_count`.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning backbone.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The graph must have at least one vertex.
    #[error("vertex_count must be at least 1")]
    ZeroVertices,
    /// Weights are drawn from `1..=max_weight`, which is empty for zero.
    #[error("max_weight must be at least 1")]
    ZeroMaxWeight,
    /// The requested edge count does not fit in `usize`.
    #[error("edge count overflows: {vertex_count} vertices with {per_vertex} extra edges each")]
    EdgeCountOverflow {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested extra edges per vertex.
        per_vertex: usize,
    },
    /// The generated edges were rejected by the graph store.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A generated graph together with the configuration that produced it.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: Graph,
    config: SyntheticConfig,
}

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is degenerate.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if config.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight);
        }
        let extra = config
            .vertex_count
            .checked_mul(config.extra_edges_per_vertex)
            .ok_or(SyntheticError::EdgeCountOverflow {
                vertex_count: config.vertex_count,
                per_vertex: config.extra_edges_per_vertex,
            })?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::with_capacity(config.vertex_count.saturating_add(extra));
        for vertex in 2..=config.vertex_count {
            let parent = rng.gen_range(1..vertex);
            edges.push(EdgeRecord::new(
                parent,
                vertex,
                rng.gen_range(1..=config.max_weight),
            ));
        }
        for _ in 0..extra {
            let source = rng.gen_range(1..=config.vertex_count);
            let target = rng.gen_range(1..=config.vertex_count);
            edges.push(EdgeRecord::new(
                source,
                target,
                rng.gen_range(1..=config.max_weight),
            ));
        }

        Ok(Self {
            graph: Graph::from_edges(config.vertex_count, edges)?,
            config: config.clone(),
        })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the configuration used to generate the graph.
    #[must_use]
    pub const fn config(&self) -> &SyntheticConfig {
        &self.config
    }
}
