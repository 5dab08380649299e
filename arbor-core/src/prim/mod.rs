//! Prim's minimum spanning tree over an indexed min-heap.
//!
//! A run owns three arrays sized `V + 1`: the priority of every vertex, its
//! tree parent, and (inside the heap) its heap slot. Frontier vertices hold
//! the weight of the lightest known edge into the tree; untouched vertices
//! hold [`UNREACHED`]. When a vertex is extracted its priority is negated,
//! which makes every later relaxation `priority > weight` fail for it
//! without a separate "in tree" flag, because weights are never negative.

use tracing::{Span, debug, field, instrument, warn};

use crate::{
    error::{Result, check_source},
    graph::{Graph, VertexId},
    heap::IndexedMinHeap,
};

/// Key type stored in the priority array.
pub type Priority = i64;

/// Priority of a vertex no edge has reached yet (`+∞`).
pub const UNREACHED: Priority = Priority::MAX;

/// An edge accepted into a tree, oriented from the tree side to the vertex it
/// attached.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    parent: VertexId,
    child: VertexId,
    weight: u64,
}

impl TreeEdge {
    /// Returns the vertex that was already in the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> VertexId { self.parent }

    /// Returns the vertex the edge attached.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> VertexId { self.child }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }
}

/// Minimum spanning tree of the component containing a source vertex.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeRecord, Graph, prim_mst};
///
/// let graph = Graph::from_edges(
///     3,
///     [
///         EdgeRecord::new(1, 2, 1),
///         EdgeRecord::new(2, 3, 2),
///         EdgeRecord::new(1, 3, 5),
///     ],
/// )
/// .expect("edges are in range");
/// let tree = prim_mst(&graph, 1).expect("source exists");
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.parents(), &[0, 0, 1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    source: VertexId,
    total_weight: u64,
    parents: Vec<VertexId>,
    priorities: Vec<Priority>,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    fn empty(source: VertexId) -> Self {
        Self {
            source,
            total_weight: 0,
            parents: vec![0],
            priorities: vec![UNREACHED],
            edges: Vec::new(),
        }
    }

    /// Returns the vertex the tree was grown from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the number of vertices of the underlying graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parents.len().saturating_sub(1)
    }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the parent array indexed by vertex id.
    ///
    /// Slot `0` is unused. The source and every unreachable vertex have
    /// parent `0`.
    #[must_use]
    pub fn parents(&self) -> &[VertexId] {
        &self.parents
    }

    /// Returns the tree parent of `vertex`, `Some(0)` for the source and
    /// unreachable vertices, or `None` for ids outside `1..=V`.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == 0 {
            return None;
        }
        self.parents.get(vertex).copied()
    }

    /// Returns the final stored priority of `vertex`.
    ///
    /// Vertices in the tree hold the negated weight of the edge that attached
    /// them (the source holds `0`); unreachable vertices hold [`UNREACHED`].
    #[must_use]
    pub fn priority(&self, vertex: VertexId) -> Option<Priority> {
        if vertex == 0 {
            return None;
        }
        self.priorities.get(vertex).copied()
    }

    /// Returns `true` when `vertex` belongs to the tree.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.priority(vertex)
            .is_some_and(|priority| priority != UNREACHED)
    }

    /// Returns the tree edges in the order their child vertices were
    /// extracted.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Returns the number of vertices in the tree, including the source.
    #[must_use]
    pub fn component_size(&self) -> usize {
        if self.vertex_count() == 0 {
            0
        } else {
            self.edges.len() + 1
        }
    }
}

/// Minimum spanning forest covering every vertex of a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    roots: Vec<VertexId>,
    total_weight: u64,
    parents: Vec<VertexId>,
    edges: Vec<TreeEdge>,
}

impl SpanningForest {
    /// Returns the root of each component, in increasing vertex order.
    #[must_use]
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Returns the number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.roots.len() == 1
    }

    /// Returns the sum of all forest edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the parent array indexed by vertex id; roots have parent `0`.
    #[must_use]
    pub fn parents(&self) -> &[VertexId] {
        &self.parents
    }

    /// Returns the forest edges, component by component.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }
}

/// State of one Prim run: priorities, parents and the heap over them.
struct PrimRun<'g> {
    graph: &'g Graph,
    priorities: Vec<Priority>,
    parents: Vec<VertexId>,
    heap: IndexedMinHeap,
    edges: Vec<TreeEdge>,
    extractions: u64,
    relaxations: u64,
}

impl<'g> PrimRun<'g> {
    /// Returns `None` for a graph without vertices.
    fn new(graph: &'g Graph) -> Option<Self> {
        let heap = IndexedMinHeap::with_capacity(graph.vertex_count()).ok()?;
        let size = graph.vertex_count() + 1;
        Some(Self {
            graph,
            priorities: vec![UNREACHED; size],
            parents: vec![0; size],
            heap,
            edges: Vec::new(),
            extractions: 0,
            relaxations: 0,
        })
    }

    fn is_unreached(&self, vertex: VertexId) -> bool {
        self.priorities[vertex] == UNREACHED
    }

    /// Grows a tree from `source` until the heap drains and returns its
    /// weight. `source` must not have been reached by an earlier call.
    fn grow(&mut self, source: VertexId) -> u64 {
        let graph = self.graph;
        let mut total = 0_u64;

        self.priorities[source] = 0;
        self.heap.insert(&self.priorities, source);

        while let Some(vertex) = self.heap.remove(&self.priorities) {
            self.extractions += 1;
            let key = self.priorities[vertex];
            total += key.unsigned_abs();
            let parent = self.parents[vertex];
            if parent != 0 {
                self.edges.push(TreeEdge {
                    parent,
                    child: vertex,
                    weight: key.unsigned_abs(),
                });
            }
            self.priorities[vertex] = -key;

            for incidence in graph.neighbours(vertex) {
                let neighbour = incidence.vertex();
                let weight = Priority::from(incidence.weight());
                if self.priorities[neighbour] <= weight {
                    continue;
                }
                self.relaxations += 1;
                self.parents[neighbour] = vertex;
                if self.heap.contains(neighbour) {
                    self.heap
                        .decrease_key(&mut self.priorities, neighbour, weight);
                } else {
                    self.priorities[neighbour] = weight;
                    self.heap.insert(&self.priorities, neighbour);
                }
            }
        }
        total
    }

    #[cfg(feature = "metrics")]
    fn record_metrics(&self, runs: u64) {
        metrics::counter!("arbor_prim_runs_total").increment(runs);
        metrics::counter!("arbor_heap_extractions_total").increment(self.extractions);
        metrics::counter!("arbor_relaxations_total").increment(self.relaxations);
    }

    #[cfg(not(feature = "metrics"))]
    fn record_metrics(&self, _runs: u64) {}
}

/// Computes a minimum spanning tree of the component containing `source`
/// with Prim's algorithm.
///
/// Vertices outside that component keep parent `0` and priority
/// [`UNREACHED`]. A graph with no vertices yields an empty tree of weight
/// `0` for any `source`.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidSource`] when the graph has vertices
/// and `source` is not one of them.
#[instrument(
    name = "core.prim_mst",
    err,
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        total_weight = field::Empty,
    ),
)]
pub fn prim_mst(graph: &Graph, source: VertexId) -> Result<SpanningTree> {
    let Some(mut run) = PrimRun::new(graph) else {
        debug!("graph has no vertices, returning an empty tree");
        return Ok(SpanningTree::empty(source));
    };
    check_source(source, graph.vertex_count())?;

    let total_weight = run.grow(source);
    run.record_metrics(1);
    Span::current().record("total_weight", total_weight);

    let reached = run.edges.len() + 1;
    if reached < graph.vertex_count() {
        warn!(
            reached,
            vertices = graph.vertex_count(),
            "graph is disconnected; tree spans only the source component"
        );
    }
    debug!(
        reached,
        extractions = run.extractions,
        relaxations = run.relaxations,
        "minimum spanning tree computed"
    );

    Ok(SpanningTree {
        source,
        total_weight,
        parents: run.parents,
        priorities: run.priorities,
        edges: run.edges,
    })
}

/// Computes a minimum spanning forest by restarting Prim's algorithm from
/// the lowest-numbered vertex every earlier tree missed.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeRecord, Graph, minimum_spanning_forest};
///
/// let graph = Graph::from_edges(4, [EdgeRecord::new(1, 2, 5), EdgeRecord::new(3, 4, 6)])
///     .expect("edges are in range");
/// let forest = minimum_spanning_forest(&graph);
/// assert_eq!(forest.roots(), &[1, 3]);
/// assert_eq!(forest.total_weight(), 11);
/// ```
#[must_use]
#[instrument(
    name = "core.minimum_spanning_forest",
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        components = field::Empty,
    ),
)]
pub fn minimum_spanning_forest(graph: &Graph) -> SpanningForest {
    let Some(mut run) = PrimRun::new(graph) else {
        return SpanningForest {
            roots: Vec::new(),
            total_weight: 0,
            parents: vec![0],
            edges: Vec::new(),
        };
    };

    let mut roots = Vec::new();
    let mut total_weight = 0_u64;
    for vertex in graph.vertices() {
        if run.is_unreached(vertex) {
            roots.push(vertex);
            total_weight += run.grow(vertex);
        }
    }
    run.record_metrics(roots.len() as u64);
    Span::current().record("components", roots.len());
    debug!(
        components = roots.len(),
        total_weight, "minimum spanning forest computed"
    );

    SpanningForest {
        roots,
        total_weight,
        parents: run.parents,
        edges: run.edges,
    }
}
