//! Seeded end-to-end generation of lattice MIS instances

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::instance::{Instance, InstanceParams, assemble};
use crate::io::configuration::{GENERATOR_VERSION, UNSEEDED_SEED_RANGE};
use crate::io::error::Result;
use crate::lattice::builder::{LatticeBuilder, LatticeConfig};
use crate::lattice::directions::DirectionSet;
use crate::lattice::grid::LatticeGrid;

/// Grid and instance produced by one generation run
#[derive(Debug, Clone)]
pub struct Generated {
    /// Labelled lattice with sentinel border
    pub grid: LatticeGrid,
    /// Graph derived from the lattice, parameters include the seed used
    pub instance: Instance,
}

/// Generator for a fixed lattice size, density and radius
#[derive(Debug, Clone)]
pub struct Generator {
    config: LatticeConfig,
    directions: DirectionSet,
}

impl Generator {
    /// Validate the parameters and precompute the direction set
    ///
    /// # Errors
    ///
    /// Returns an error if `side`, `density` or `radius` is out of range
    pub fn new(side: usize, density: f64, radius: f64) -> Result<Self> {
        let config = LatticeConfig::new(side, density, radius)?;
        Ok(Self::from_config(config, config.directions()?))
    }

    /// Pair an already validated configuration with its direction set
    pub const fn from_config(config: LatticeConfig, directions: DirectionSet) -> Self {
        Self { config, directions }
    }

    /// Lattice configuration
    pub const fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Neighbor offsets
    pub const fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    /// Resolve an optional seed, drawing one in `0..100000` when absent
    pub fn resolve_seed(seed: Option<u64>) -> u64 {
        seed.unwrap_or_else(|| rand::rng().random_range(0..UNSEEDED_SEED_RANGE))
    }

    /// Start an incremental build whose attempt order is seeded by `seed`
    pub fn builder(&self, seed: u64) -> LatticeBuilder<'_> {
        let mut rng = StdRng::seed_from_u64(seed);
        LatticeBuilder::new(&self.config, &self.directions, &mut rng)
    }

    /// Generate a lattice and its instance
    ///
    /// # Errors
    ///
    /// Returns an error if construction stalls above the target density
    pub fn generate(&self, seed: Option<u64>) -> Result<Generated> {
        let seed = Self::resolve_seed(seed);
        let mut builder = self.builder(seed);
        while !builder.run_pass()? {}
        Ok(self.complete(seed, builder))
    }

    /// Label a finished build and assemble its instance
    pub fn complete(&self, seed: u64, builder: LatticeBuilder<'_>) -> Generated {
        let passes = builder.passes();
        let grid = builder.finish();
        let instance = assemble(&grid, &self.directions, self.params(seed));
        info!(
            "generated {} (L={}, {} nodes, {} edges, {passes} passes)",
            instance.name(),
            self.config.side,
            instance.node_count(),
            instance.edge_count()
        );
        Generated { grid, instance }
    }

    fn params(&self, seed: u64) -> InstanceParams {
        InstanceParams {
            side: self.config.side,
            density: self.config.density,
            seed,
            radius: self.directions.radius(),
            version: GENERATOR_VERSION.to_string(),
        }
    }
}
