//! Property 1: weights agree with the sequential oracle.
//!
//! The tree grown from the fixture's source must weigh exactly as much as
//! the oracle's forest restricted to that component, and the spanning forest
//! must match the oracle's total weight, edge count and component count.

use proptest::test_runner::TestCaseResult;

use crate::{minimum_spanning_forest, prim_mst};

use super::helpers::fail;
use super::oracle::sequential_kruskal;
use super::types::PrimFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &PrimFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    let tree = prim_mst(&graph, fixture.source)
        .map_err(|err| fail(fixture, format!("prim_mst failed: {err}")))?;
    let expected = oracle.component_weight(fixture.source);
    if tree.total_weight() != expected {
        return Err(fail(
            fixture,
            format!(
                "tree weight mismatch: prim={}, oracle={expected}",
                tree.total_weight()
            ),
        ));
    }
    let expected_size = oracle.component_size(fixture.source);
    if tree.component_size() != expected_size {
        return Err(fail(
            fixture,
            format!(
                "tree size mismatch: prim={}, oracle={expected_size}",
                tree.component_size()
            ),
        ));
    }

    let forest = minimum_spanning_forest(&graph);
    if forest.total_weight() != oracle.total_weight {
        return Err(fail(
            fixture,
            format!(
                "forest weight mismatch: prim={}, oracle={}",
                forest.total_weight(),
                oracle.total_weight
            ),
        ));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(fail(
            fixture,
            format!(
                "forest edge count mismatch: prim={}, oracle={}",
                forest.edges().len(),
                oracle.edge_count
            ),
        ));
    }
    if forest.component_count() != oracle.component_count {
        return Err(fail(
            fixture,
            format!(
                "component count mismatch: prim={}, oracle={}",
                forest.component_count(),
                oracle.component_count
            ),
        ));
    }
    Ok(())
}
