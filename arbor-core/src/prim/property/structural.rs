//! Property 2: structural invariants of a single Prim run.
//!
//! - **Parent walks** end at the source within `V` steps.
//! - **Reachability** matches the oracle's component of the source.
//! - **Priorities** are non-positive for tree vertices, [`UNREACHED`] for
//!   the rest, and equal to the negated weight of the attaching edge.
//! - **Tree edges** exist in the graph and sum to the reported weight.

use proptest::test_runner::TestCaseResult;

use crate::{Graph, SpanningTree, UNREACHED, prim_mst};

use super::helpers::fail;
use super::oracle::sequential_kruskal;
use super::types::PrimFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &PrimFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let tree = prim_mst(&graph, fixture.source)
        .map_err(|err| fail(fixture, format!("prim_mst failed: {err}")))?;

    validate_parent_walks(fixture, &tree)?;
    validate_reachability(fixture, &tree)?;
    validate_priorities(fixture, &tree)?;
    validate_tree_edges(fixture, &graph, &tree)?;
    Ok(())
}

fn validate_parent_walks(fixture: &PrimFixture, tree: &SpanningTree) -> TestCaseResult {
    if tree.parent(fixture.source) != Some(0) {
        return Err(fail(fixture, "source has a parent"));
    }
    for vertex in 1..=fixture.vertex_count {
        if !tree.is_reachable(vertex) {
            continue;
        }
        let mut current = vertex;
        for _ in 0..=fixture.vertex_count {
            if current == fixture.source {
                break;
            }
            current = tree.parents()[current];
            if current == 0 {
                return Err(fail(
                    fixture,
                    format!("walk from {vertex} reached 0 before the source"),
                ));
            }
        }
        if current != fixture.source {
            return Err(fail(fixture, format!("walk from {vertex} never ends")));
        }
    }
    Ok(())
}

fn validate_reachability(fixture: &PrimFixture, tree: &SpanningTree) -> TestCaseResult {
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    for vertex in 1..=fixture.vertex_count {
        let expected = oracle.connected(fixture.source, vertex);
        if tree.is_reachable(vertex) != expected {
            return Err(fail(
                fixture,
                format!("vertex {vertex}: reachable={expected} per oracle"),
            ));
        }
        if !expected && tree.parents()[vertex] != 0 {
            return Err(fail(
                fixture,
                format!("unreachable vertex {vertex} has a parent"),
            ));
        }
    }
    Ok(())
}

fn validate_priorities(fixture: &PrimFixture, tree: &SpanningTree) -> TestCaseResult {
    for vertex in 1..=fixture.vertex_count {
        let Some(priority) = tree.priority(vertex) else {
            return Err(fail(fixture, format!("vertex {vertex} has no priority")));
        };
        let valid = if tree.is_reachable(vertex) {
            priority <= 0
        } else {
            priority == UNREACHED
        };
        if !valid {
            return Err(fail(
                fixture,
                format!("vertex {vertex} stored priority {priority}"),
            ));
        }
    }
    for edge in tree.edges() {
        let stored = tree.priority(edge.child()).unwrap_or(UNREACHED);
        if stored.unsigned_abs() != edge.weight() {
            return Err(fail(
                fixture,
                format!(
                    "child {} stores {stored} but its edge weighs {}",
                    edge.child(),
                    edge.weight()
                ),
            ));
        }
    }
    Ok(())
}

fn validate_tree_edges(
    fixture: &PrimFixture,
    graph: &Graph,
    tree: &SpanningTree,
) -> TestCaseResult {
    let mut sum = 0_u64;
    for edge in tree.edges() {
        if tree.parents()[edge.child()] != edge.parent() {
            return Err(fail(
                fixture,
                format!("edge into {} disagrees with parent array", edge.child()),
            ));
        }
        let present = graph.neighbours(edge.parent()).iter().any(|incidence| {
            incidence.vertex() == edge.child() && u64::from(incidence.weight()) == edge.weight()
        });
        if !present {
            return Err(fail(
                fixture,
                format!(
                    "tree edge {}-{} ({}) is not in the graph",
                    edge.parent(),
                    edge.child(),
                    edge.weight()
                ),
            ));
        }
        sum += edge.weight();
    }
    if sum != tree.total_weight() {
        return Err(fail(
            fixture,
            format!("edges sum to {sum}, tree reports {}", tree.total_weight()),
        ));
    }
    Ok(())
}
