//! Benchmark instances for the maximum independent set problem on random lattices
//!
//! Lattices are carved out of a full `L × L` grid by removing sites in a seeded
//! random order while a flood fill keeps the remaining sites connected. The
//! resulting graphs are exported in several formats, and an exact frontier
//! sweep solves instances whose node ordering has a small bandwidth.

#![forbid(unsafe_code)]

/// Node/edge representation of generated instances
pub mod graph;
/// Command-line interface, exporters and error handling
pub mod io;
/// Lattice construction with guaranteed connectivity
pub mod lattice;
/// Exact profile dynamic programming over node-ordered graphs
pub mod solver;

pub use io::error::{MisError, Result};
