//! Progressive random rewiring of an instance's edges
//!
//! Each rewire detaches one endpoint of a not yet touched edge and reattaches
//! it to a random node it is not bonded to. A series applies an equal share of
//! the edges per step, so the last step has rewired (almost) every edge once.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::graph::instance::Instance;
use crate::io::error::{Result, computation_error, invalid_parameter};

/// Rewire `count` edges picked from `untouched`
///
/// For a picked edge `(u, v)` the bond is replaced by `(u, w)` where `w` is
/// neither `u`, `v` nor a current neighbor of `u`. The picked edge leaves
/// `untouched`, the new one is never added to it.
///
/// # Errors
///
/// Returns an error if `untouched` runs out or `u` is bonded to every other node
pub fn rewire_edges<R: Rng + ?Sized>(
    instance: &mut Instance,
    count: usize,
    untouched: &mut Vec<(u32, u32)>,
    rng: &mut R,
) -> Result<()> {
    for _ in 0..count {
        let Some(&(u, v)) = untouched.choose(rng) else {
            return Err(computation_error("edge rewiring", &"no untouched edge left"));
        };
        instance.remove_edge(u, v);

        let candidates: Vec<u32> = instance
            .nodes()
            .keys()
            .copied()
            .filter(|&w| w != u && w != v && !instance.has_edge(u, w))
            .collect();
        let Some(&partner) = candidates.choose(rng) else {
            return Err(computation_error(
                "edge rewiring",
                &format!("node {u} has no free partner"),
            ));
        };

        instance.add_edge(u, partner);
        untouched.retain(|&edge| edge != (u, v));
    }
    Ok(())
}

/// Snapshots after each of `steps` rewiring rounds
///
/// Every round rewires `⌊E / steps⌋` edges, then forgets untouched edges that
/// no longer exist. The original instance is left unchanged.
///
/// # Errors
///
/// Returns an error if `steps` is zero or a rewire finds no partner
pub fn rewiring_series<R: Rng + ?Sized>(
    instance: &Instance,
    steps: usize,
    rng: &mut R,
) -> Result<Vec<Instance>> {
    if steps == 0 {
        return Err(invalid_parameter("steps", &steps, &"must be positive"));
    }

    let per_step = instance.edge_count() / steps;
    let mut current = instance.clone();
    let mut untouched: Vec<(u32, u32)> = instance.edges().iter().copied().collect();
    let mut series = Vec::with_capacity(steps);

    for step in 0..steps {
        rewire_edges(&mut current, per_step, &mut untouched, rng)?;
        untouched.retain(|&(a, b)| current.has_edge(a, b));
        debug!(
            "rewiring step {step}: {} edges, {} untouched",
            current.edge_count(),
            untouched.len()
        );
        series.push(current.clone());
    }

    Ok(series)
}
