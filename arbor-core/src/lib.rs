//! Arbor core library.
//!
//! Holds an immutable undirected weighted [`Graph`] and grows trees over it
//! with an [`IndexedMinHeap`]: Prim's minimum spanning tree and forest, and
//! Dijkstra's shortest-path tree. Vertices are numbered `1..=V`; `0` is the
//! "absent" sentinel in every parent and position array.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the tree builders emit:
//!
//! - `arbor_prim_runs_total` (counter)
//! - `arbor_heap_extractions_total` (counter)
//! - `arbor_relaxations_total` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dijkstra;
mod error;
mod graph;
mod heap;
mod label;
mod prim;
mod traversal;

#[cfg(test)]
mod test_utils;

pub use crate::{
    dijkstra::{ShortestPathTree, shortest_path_tree},
    error::{GraphError, GraphErrorCode, HeapErrorCode, Result},
    graph::{EdgeRecord, Graph, Incidence, VertexId, Weight},
    heap::{HeapError, IndexedMinHeap},
    label::VertexLabel,
    prim::{
        Priority, SpanningForest, SpanningTree, TreeEdge, UNREACHED, minimum_spanning_forest,
        prim_mst,
    },
    traversal::{TraversalOrder, traverse},
};
