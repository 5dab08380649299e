//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use arbor_core::{
    Graph, GraphError, ShortestPathTree, SpanningForest, SpanningTree, TraversalOrder, VertexId,
    minimum_spanning_forest, prim_mst, shortest_path_tree, traverse,
};
use arbor_providers_text::{EdgeListError, EdgeListSource};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SOURCE: VertexId = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Grow minimum spanning trees over weighted edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the graph, its Prim minimum spanning tree and the parent array.
    Mst(SourceArgs),
    /// Print the minimum spanning forest covering every component.
    Forest(GraphArgs),
    /// Print Dijkstra shortest paths from a source vertex.
    Spt(SourceArgs),
    /// Print the depth-first or breadth-first visit order from a source.
    Traverse(TraverseArgs),
    /// Print the graph without running any algorithm.
    Show(GraphArgs),
}

/// Edge-list input shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to the edge-list file (`V E` header, then `u v w` per edge).
    pub path: PathBuf,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Input plus a source vertex.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Edge-list input.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex to start from, numbered from 1.
    #[arg(long, default_value_t = DEFAULT_SOURCE)]
    pub source: VertexId,
}

/// Options accepted by the `traverse` command.
#[derive(Debug, Args, Clone)]
pub struct TraverseArgs {
    /// Edge-list input and source vertex.
    #[command(flatten)]
    pub input: SourceArgs,

    /// Visit order.
    #[arg(long, value_enum)]
    pub order: TraversalArg,
}

/// Visit orders accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TraversalArg {
    /// Depth-first search.
    Depth,
    /// Breadth-first search.
    Breadth,
}

impl From<TraversalArg> for TraversalOrder {
    fn from(value: TraversalArg) -> Self {
        match value {
            TraversalArg::Depth => Self::DepthFirst,
            TraversalArg::Breadth => Self::BreadthFirst,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The algorithm rejected its arguments.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Returns a stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Result of the algorithm a command ran.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// `show`: nothing beyond the graph itself.
    Graph,
    /// `mst`: a minimum spanning tree.
    Tree(SpanningTree),
    /// `forest`: a minimum spanning forest.
    Forest(SpanningForest),
    /// `spt`: shortest paths from a source.
    Paths(ShortestPathTree),
    /// `traverse`: vertices in visit order.
    Visit {
        /// Order requested.
        order: TraversalOrder,
        /// Vertex the traversal started from.
        source: VertexId,
        /// Visited vertices.
        vertices: Vec<VertexId>,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name the graph was loaded under.
    pub graph_name: String,
    /// The loaded graph.
    pub graph: Graph,
    /// What the command computed.
    pub outcome: Outcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be loaded or the algorithm
/// rejects the source vertex.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, GraphArgs, SourceArgs, Outcome, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n1 2 1\n2 3 2\n1 3 5\n")?;
/// let cli = Cli {
///     command: Command::Mst(SourceArgs {
///         graph: GraphArgs {
///             path: file.path().to_path_buf(),
///             name: None,
///         },
///         source: 1,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Outcome::Tree(tree) = summary.outcome else {
///     panic!("mst must produce a tree");
/// };
/// assert_eq!(tree.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let label = match &cli.command {
        Command::Mst(_) => "mst",
        Command::Forest(_) => "forest",
        Command::Spt(_) => "spt",
        Command::Traverse(_) => "traverse",
        Command::Show(_) => "show",
    };
    Span::current().record("command", field::display(label));
    run_command(cli.command)
}

/// Algorithm a command runs once its graph is loaded.
#[derive(Debug, Clone, Copy)]
enum Job {
    Show,
    Forest,
    Mst(VertexId),
    Spt(VertexId),
    Traverse(VertexId, TraversalOrder),
}

impl Job {
    const fn source(self) -> Option<VertexId> {
        match self {
            Self::Show | Self::Forest => None,
            Self::Mst(source) | Self::Spt(source) | Self::Traverse(source, _) => Some(source),
        }
    }

    fn run(self, graph: &Graph) -> Result<Outcome, GraphError> {
        Ok(match self {
            Self::Show => Outcome::Graph,
            Self::Forest => Outcome::Forest(minimum_spanning_forest(graph)),
            Self::Mst(source) => Outcome::Tree(prim_mst(graph, source)?),
            Self::Spt(source) => Outcome::Paths(shortest_path_tree(graph, source)?),
            Self::Traverse(source, order) => Outcome::Visit {
                order,
                source,
                vertices: traverse(graph, source, order)?,
            },
        })
    }
}

impl Command {
    fn into_parts(self) -> (GraphArgs, Job) {
        match self {
            Self::Show(args) => (args, Job::Show),
            Self::Forest(args) => (args, Job::Forest),
            Self::Mst(SourceArgs { graph, source }) => (graph, Job::Mst(source)),
            Self::Spt(SourceArgs { graph, source }) => (graph, Job::Spt(source)),
            Self::Traverse(TraverseArgs { input, order }) => (
                input.graph,
                Job::Traverse(input.source, TraversalOrder::from(order)),
            ),
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(graph = field::Empty, source = field::Empty),
)]
pub(super) fn run_command(command: Command) -> Result<ExecutionSummary, CliError> {
    let (args, job) = command.into_parts();
    let span = Span::current();
    if let Some(source) = job.source() {
        span.record("source", source);
    }

    let loaded = open_graph(&args.path, args.name.as_deref())?;
    span.record("graph", field::display(loaded.name()));
    let outcome = job.run(loaded.graph())?;
    info!(
        graph = loaded.name(),
        vertices = loaded.graph().vertex_count(),
        edges = loaded.graph().edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph_name: loaded.name().to_owned(),
        graph: loaded.into_graph(),
        outcome,
    })
}

#[instrument(
    name = "cli.open_graph",
    err,
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn open_graph(
    path: &Path,
    override_name: Option<&str>,
) -> Result<EdgeListSource, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(override_name.unwrap_or("<derived>")),
    );
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = derive_graph_name(path, override_name);
    Ok(EdgeListSource::try_from_reader(name, BufReader::new(file))?)
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}
