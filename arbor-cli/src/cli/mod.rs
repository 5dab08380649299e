//! Command-line interface orchestration for arbor.
//!
//! Every command loads one edge-list file, runs a single algorithm over the
//! resulting graph and renders a plain-text report.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphArgs, Outcome, SourceArgs, TraversalArg,
    TraverseArgs, run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod test_helpers;
