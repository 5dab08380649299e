//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write edge lists to temporary directories and assert
//! on rendered reports. These helpers keep the cases short.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::{Command, ExecutionSummary, GraphArgs, SourceArgs, run_command};
use super::{CliError, render_summary};

/// Edge list of the six-vertex reference graph.
pub(super) const REFERENCE: &str = "6 10\n\
1 2 1\n1 3 4\n2 3 2\n2 4 5\n3 4 3\n\
3 5 6\n4 5 4\n4 6 7\n5 6 2\n1 6 8\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) const fn graph_args(path: PathBuf) -> GraphArgs {
    GraphArgs { path, name: None }
}

pub(super) const fn source_args(path: PathBuf, source: usize) -> SourceArgs {
    SourceArgs {
        graph: graph_args(path),
        source,
    }
}

pub(super) fn run_command_expecting_error(command: Command, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_summary(summary, &mut buffer) {
        panic!("rendering into memory must succeed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("report must be UTF-8: {err}"),
    }
}
