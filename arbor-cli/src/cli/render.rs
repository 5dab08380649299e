//! Plain-text rendering of command results.
//!
//! Vertices print as letters (`1` is `A`) and the sentinel `0` prints as
//! `@`, which marks roots and unreachable vertices in parent dumps.

use std::io::{self, Write};

use arbor_core::{
    Graph, ShortestPathTree, SpanningForest, SpanningTree, TraversalOrder, VertexId, VertexLabel,
};

use super::commands::{ExecutionSummary, Outcome};

/// Renders `summary` to `writer`.
///
/// Every report starts with the load echo (`V = …, E = …` and one
/// `Edge A--(w)--B` line per edge) followed by the adjacency lists; the
/// command's own result comes last.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, Outcome, render_summary};
/// # use arbor_core::{EdgeRecord, Graph};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(2, [EdgeRecord::new(1, 2, 7)])?;
/// let summary = ExecutionSummary {
///     graph_name: "demo".into(),
///     graph,
///     outcome: Outcome::Graph,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("Edge A--(7)--B"));
/// assert!(text.contains("adj[B] -> |A | 7| ->"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    render_graph(&summary.graph, &mut writer)?;
    match &summary.outcome {
        Outcome::Graph => Ok(()),
        Outcome::Tree(tree) => render_tree(tree, &mut writer),
        Outcome::Forest(forest) => render_forest(forest, &mut writer),
        Outcome::Paths(paths) => render_paths(&summary.graph, paths, &mut writer),
        Outcome::Visit {
            order,
            source,
            vertices,
        } => render_visit(*order, *source, vertices, &mut writer),
    }
}

fn render_graph(graph: &Graph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "V = {}, E = {}",
        graph.vertex_count(),
        graph.edge_count()
    )?;
    for edge in graph.edges() {
        writeln!(
            writer,
            "Edge {}--({})--{}",
            VertexLabel(edge.source()),
            edge.weight(),
            VertexLabel(edge.target())
        )?;
    }
    writeln!(writer)?;
    for vertex in graph.vertices() {
        write!(writer, "adj[{}] ->", VertexLabel(vertex))?;
        for incidence in graph.neighbours(vertex) {
            write!(
                writer,
                " |{} | {}| ->",
                VertexLabel(incidence.vertex()),
                incidence.weight()
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn render_parents(parents: &[VertexId], writer: &mut impl Write) -> io::Result<()> {
    for (vertex, parent) in parents.iter().enumerate().skip(1) {
        writeln!(writer, "{} -> {}", VertexLabel(vertex), VertexLabel(*parent))?;
    }
    Ok(())
}

fn render_tree(tree: &SpanningTree, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Weight of MST = {}", tree.total_weight())?;
    writeln!(writer)?;
    writeln!(writer, "Minimum Spanning tree parent array is:")?;
    render_parents(tree.parents(), writer)
}

fn render_forest(forest: &SpanningForest, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Components = {}", forest.component_count())?;
    writeln!(writer, "Weight of MSF = {}", forest.total_weight())?;
    writeln!(writer)?;
    writeln!(writer, "Minimum spanning forest parent array is:")?;
    render_parents(forest.parents(), writer)
}

fn render_paths(graph: &Graph, paths: &ShortestPathTree, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Shortest paths from {}:",
        VertexLabel(paths.source())
    )?;
    for vertex in graph.vertices() {
        let parent = VertexLabel(paths.parents().get(vertex).copied().unwrap_or_default());
        match paths.distance(vertex) {
            Some(distance) => writeln!(
                writer,
                "{} -> {}  distance = {distance}",
                VertexLabel(vertex),
                parent
            )?,
            None => writeln!(writer, "{} -> {}  unreachable", VertexLabel(vertex), parent)?,
        }
    }
    Ok(())
}

fn render_visit(
    order: TraversalOrder,
    source: VertexId,
    vertices: &[VertexId],
    writer: &mut impl Write,
) -> io::Result<()> {
    let label = match order {
        TraversalOrder::DepthFirst => "Depth first",
        TraversalOrder::BreadthFirst => "Breadth first",
    };
    writeln!(writer)?;
    write!(writer, "{label} visit order from {}:", VertexLabel(source))?;
    for vertex in vertices {
        write!(writer, " {}", VertexLabel(*vertex))?;
    }
    writeln!(writer)
}
