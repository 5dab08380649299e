//! Shared helpers for the Prim property suite.

use proptest::test_runner::TestCaseError;

use super::types::PrimFixture;

/// Path-halving find over a 1-indexed parent table.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Builds a failure carrying the fixture description.
pub(super) fn fail(fixture: &PrimFixture, message: impl AsRef<str>) -> TestCaseError {
    TestCaseError::fail(format!("{} ({})", message.as_ref(), fixture.describe()))
}
