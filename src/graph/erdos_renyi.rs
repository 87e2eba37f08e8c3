//! Erdős–Rényi baseline instances sized like a lattice
//!
//! `N = round(L² · d)` nodes, matching the lattice generator's occupancy, and
//! each pair bonded with probability `p = d²` rounded to four decimals.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::instance::{Instance, InstanceParams, Node};
use crate::io::configuration::{DEFAULT_RADIUS, GENERATOR_VERSION};
use crate::io::error::Result;
use crate::lattice::builder::LatticeConfig;

/// Pair probability for a given density
pub fn edge_probability(density: f64) -> f64 {
    (density * density * 10_000.0).round_ties_even() / 10_000.0
}

/// Seeded `G(N, p)` graph
///
/// Nodes carry no lattice position of their own; they are laid out row-major
/// on the `L × L` lattice so every exporter can draw them. The radius in the
/// parameters is the lattice default and only names the file.
///
/// # Errors
///
/// Returns an error if `side` or `density` is out of range
pub fn erdos_renyi(side: usize, density: f64, seed: u64) -> Result<Instance> {
    let config = LatticeConfig::new(side, density, DEFAULT_RADIUS)?;
    let node_count = config.target_occupancy();
    let probability = edge_probability(density);

    let mut instance = Instance::new(InstanceParams {
        side,
        density,
        seed,
        radius: config.radius,
        version: GENERATOR_VERSION.to_string(),
    });
    for id in 0..node_count {
        instance.add_node(
            id as u32,
            Node {
                x: id / side,
                y: id % side,
            },
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for a in 0..node_count as u32 {
        for b in a + 1..node_count as u32 {
            if rng.random_bool(probability) {
                instance.add_edge(a, b);
            }
        }
    }

    info!(
        "generated {} (G(N, p) with p={probability:?}, {} edges)",
        instance.name(),
        instance.edge_count()
    );
    Ok(instance)
}
