//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Prim, the spanning forest, Dijkstra and the
//! indexed heap.

pub mod error;
pub mod params;
pub mod source;
