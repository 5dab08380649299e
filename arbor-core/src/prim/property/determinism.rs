//! Property 3: determinism across repeated and concurrent runs.
//!
//! A graph is immutable once built, so any number of threads may run Prim
//! on one shared reference. Every run must produce an identical tree.

use std::thread;

use proptest::test_runner::TestCaseResult;

use crate::{SpanningTree, prim_mst};

use super::helpers::fail;
use super::types::{DeterminismConfig, PrimFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &PrimFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let graph = fixture.graph();
    let baseline = prim_mst(&graph, fixture.source)
        .map_err(|err| fail(fixture, format!("baseline prim_mst failed: {err}")))?;

    for run in 1..config.repetitions {
        let repeat = prim_mst(&graph, fixture.source)
            .map_err(|err| fail(fixture, format!("run {run}: prim_mst failed: {err}")))?;
        compare(fixture, &baseline, &repeat, &format!("run {run}"))?;
    }

    let concurrent: Vec<crate::Result<SpanningTree>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.threads)
            .map(|_| scope.spawn(|| prim_mst(&graph, fixture.source)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("prim thread must not panic"))
            .collect()
    });
    for (index, result) in concurrent.into_iter().enumerate() {
        let tree = result
            .map_err(|err| fail(fixture, format!("thread {index}: prim_mst failed: {err}")))?;
        compare(fixture, &baseline, &tree, &format!("thread {index}"))?;
    }
    Ok(())
}

fn compare(
    fixture: &PrimFixture,
    baseline: &SpanningTree,
    other: &SpanningTree,
    label: &str,
) -> TestCaseResult {
    if other.total_weight() != baseline.total_weight() {
        return Err(fail(
            fixture,
            format!(
                "{label}: weight diverged, baseline={}, run={}",
                baseline.total_weight(),
                other.total_weight()
            ),
        ));
    }
    if other != baseline {
        return Err(fail(fixture, format!("{label}: tree differs from baseline")));
    }
    Ok(())
}
