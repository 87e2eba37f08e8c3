//! Random site removal down to a target density without disconnecting the lattice
//!
//! Construction starts from a fully occupied `L × L` lattice. A seeded shuffle
//! of all coordinates fixes the order in which removals are attempted; the
//! order is scanned cyclically and each still-occupied site is vacated if the
//! flood-fill check says its neighbors stay connected. Sites refused in one
//! pass may become removable after later removals, which is why several
//! passes can be needed. At low densities this retry order introduces a
//! small bias in which lattices are produced.

use log::{debug, trace};
use ndarray::Array2;
use num_traits::ToPrimitive;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::configuration::MAX_SIDE;
use crate::io::error::{MisError, Result, invalid_parameter};
use crate::lattice::connectivity::FloodFill;
use crate::lattice::directions::DirectionSet;
use crate::lattice::grid::LatticeGrid;

/// Validated lattice parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig {
    /// Lattice side length `L`
    pub side: usize,
    /// Portion of the `L²` sites left occupied
    pub density: f64,
    /// Quantized interaction radius
    pub radius: f64,
}

impl LatticeConfig {
    /// Validate parameters and quantize the radius
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `side` is not within `1..52`
    /// - `density` is not within `(0, 1]`
    /// - `round(side² · density)` is less than 2
    /// - `radius` is not within `[1, 10)`
    pub fn new(side: usize, density: f64, radius: f64) -> Result<Self> {
        if side == 0 || side >= MAX_SIDE {
            return Err(invalid_parameter(
                "L",
                &side,
                &format!("must satisfy 0 < L < {MAX_SIDE}"),
            ));
        }

        if !(density > 0.0 && density <= 1.0) {
            return Err(invalid_parameter(
                "density",
                &density,
                &"must satisfy 0 < density <= 1",
            ));
        }

        // Validates the radius range as a side effect
        let directions = DirectionSet::new(radius)?;

        let config = Self {
            side,
            density,
            radius: directions.radius(),
        };

        if config.target_occupancy() < 2 {
            return Err(invalid_parameter(
                "density",
                &density,
                &format!(
                    "round(L * L * density) must exceed 1 for L = {side}, got {}",
                    config.target_occupancy()
                ),
            ));
        }

        Ok(config)
    }

    /// Number of sites in the full lattice
    pub const fn site_count(&self) -> usize {
        self.side * self.side
    }

    /// Sites left occupied after construction
    ///
    /// Uses round-half-to-even so that e.g. `5² · 0.5 = 12.5` yields 12.
    pub fn target_occupancy(&self) -> usize {
        (self.site_count() as f64 * self.density)
            .round_ties_even()
            .to_usize()
            .unwrap_or(0)
            .min(self.site_count())
    }

    /// Direction set for this configuration's radius
    ///
    /// # Errors
    ///
    /// Returns an error if the stored radius is out of range
    pub fn directions(&self) -> Result<DirectionSet> {
        DirectionSet::new(self.radius)
    }
}

/// Incremental lattice construction
///
/// Drive it with [`LatticeBuilder::run_pass`] until it reports completion,
/// then call [`LatticeBuilder::finish`] to obtain the labelled grid.
pub struct LatticeBuilder<'a> {
    directions: &'a DirectionSet,
    occupancy: Array2<bool>,
    attempt_order: Vec<[usize; 2]>,
    flood_fill: FloodFill,
    occupied: usize,
    target: usize,
    passes: usize,
}

impl<'a> LatticeBuilder<'a> {
    /// Start from a full lattice and shuffle the attempt order with `rng`
    pub fn new<R: Rng + ?Sized>(
        config: &LatticeConfig,
        directions: &'a DirectionSet,
        rng: &mut R,
    ) -> Self {
        let side = config.side;
        Self::from_parts(
            config,
            directions,
            Array2::from_elem((side, side), true),
            rng,
        )
    }

    /// Resume removal from an arbitrary occupancy mask
    ///
    /// The mask need not be connected; every pass above the target still
    /// removes at least one site since each component has a site whose
    /// removal keeps its neighbors connected.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask is not `L × L`
    pub fn with_occupancy<R: Rng + ?Sized>(
        config: &LatticeConfig,
        directions: &'a DirectionSet,
        occupancy: Array2<bool>,
        rng: &mut R,
    ) -> Result<Self> {
        if occupancy.dim() != (config.side, config.side) {
            return Err(invalid_parameter(
                "occupancy",
                &format!("{:?}", occupancy.dim()),
                &format!("must be {0} x {0}", config.side),
            ));
        }
        Ok(Self::from_parts(config, directions, occupancy, rng))
    }

    fn from_parts<R: Rng + ?Sized>(
        config: &LatticeConfig,
        directions: &'a DirectionSet,
        occupancy: Array2<bool>,
        rng: &mut R,
    ) -> Self {
        let side = config.side;
        let mut attempt_order: Vec<[usize; 2]> = (0..side)
            .flat_map(|x| (0..side).map(move |y| [x, y]))
            .collect();
        attempt_order.shuffle(rng);
        let occupied = occupancy.iter().filter(|&&cell| cell).count();

        Self {
            directions,
            occupancy,
            attempt_order,
            flood_fill: FloodFill::new(side),
            occupied,
            target: config.target_occupancy(),
            passes: 0,
        }
    }

    /// Currently occupied sites
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Occupied sites requested
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Passes over the attempt order started so far
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the target occupancy has been reached
    pub const fn is_complete(&self) -> bool {
        self.occupied <= self.target
    }

    /// Shuffled coordinates in the order removal is attempted
    pub fn attempt_order(&self) -> &[[usize; 2]] {
        &self.attempt_order
    }

    /// Current occupancy mask
    pub const fn occupancy(&self) -> &Array2<bool> {
        &self.occupancy
    }

    /// Scan the attempt order once, stopping early when the target is met
    ///
    /// Returns `true` once construction is complete.
    ///
    /// # Errors
    ///
    /// Returns [`MisError::UnsatisfiableDensity`] if the pass removes no site
    /// while the lattice is still above the target occupancy
    pub fn run_pass(&mut self) -> Result<bool> {
        if self.is_complete() {
            return Ok(true);
        }

        self.passes += 1;
        let mut removed = 0usize;

        for &site in &self.attempt_order {
            if self.occupied <= self.target {
                break;
            }

            let occupied = self.occupancy.get(site).copied().unwrap_or(false);
            if !occupied {
                continue;
            }

            if self
                .flood_fill
                .can_remove(&self.occupancy, self.directions, site)
            {
                if let Some(cell) = self.occupancy.get_mut(site) {
                    *cell = false;
                }
                self.occupied -= 1;
                removed += 1;
            } else {
                trace!("site {site:?} pinned on pass {}", self.passes);
            }
        }

        debug!(
            "pass {}: removed {removed} sites, {} occupied, target {}",
            self.passes, self.occupied, self.target
        );

        if self.is_complete() {
            return Ok(true);
        }

        if removed == 0 {
            return Err(MisError::UnsatisfiableDensity {
                occupied: self.occupied,
                target: self.target,
                pass: self.passes,
            });
        }

        Ok(false)
    }

    /// Label the occupied sites and add the sentinel border
    pub fn finish(self) -> LatticeGrid {
        LatticeGrid::from_occupancy(&self.occupancy)
    }
}

/// Build a connected lattice of the configured density
///
/// The attempt order is drawn from `rng`, so the same seeded generator always
/// reproduces the same grid.
///
/// # Errors
///
/// Returns an error if construction stalls above the target occupancy
pub fn build_grid<R: Rng + ?Sized>(
    config: &LatticeConfig,
    directions: &DirectionSet,
    rng: &mut R,
) -> Result<LatticeGrid> {
    let mut builder = LatticeBuilder::new(config, directions, rng);
    while !builder.run_pass()? {}
    Ok(builder.finish())
}
