//! Lattice construction
//!
//! This module contains:
//! - Neighbor offsets for an interaction radius
//! - The removal-order builder and its connectivity check
//! - The labelled grid handed to graph assembly
//! - A seeded generator tying the pieces together

/// Builder driving site removal to the target density
pub mod builder;
/// Flood-fill removal check
pub mod connectivity;
/// Neighbor offsets and radius quantization
pub mod directions;
/// Seeded generation of grid and instance
pub mod generator;
/// Labelled grid with sentinel border
pub mod grid;

pub use builder::{LatticeBuilder, LatticeConfig, build_grid};
pub use directions::DirectionSet;
pub use generator::{Generated, Generator};
pub use grid::{LatticeGrid, Site};
