//! Shared test utilities for `arbor-core`.

use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{EdgeRecord, Graph, VertexId, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `ARBOR_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Converts `(u, v, w)` triples into edge records.
#[must_use]
pub(crate) fn edges(raw: &[(VertexId, VertexId, Weight)]) -> Vec<EdgeRecord> {
    raw.iter()
        .map(|&(source, target, weight)| EdgeRecord::new(source, target, weight))
        .collect()
}

/// Builds a graph from `(u, v, w)` triples, panicking on invalid endpoints.
#[must_use]
pub(crate) fn graph_from(vertex_count: usize, raw: &[(VertexId, VertexId, Weight)]) -> Graph {
    Graph::from_edges(vertex_count, edges(raw)).expect("test edges must be in range")
}

/// Six-vertex, ten-edge reference graph used throughout the suite.
#[must_use]
pub(crate) fn reference_graph() -> Graph {
    graph_from(
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
