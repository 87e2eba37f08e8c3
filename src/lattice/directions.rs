//! Integer neighbor offsets within an interaction radius

use crate::io::configuration::{MAX_RADIUS, MIN_RADIUS, RADIUS_RESOLUTION};
use crate::io::error::{Result, invalid_parameter};

const QUANTIZE_TOLERANCE: f64 = 1e-9;

/// Round a radius up to the nearest multiple of 0.001
///
/// Distances between lattice sites differ by at least 0.002 for the radii
/// accepted here, so the rounding never changes which sites are connected.
/// Values already on the 0.001 grid (up to float noise) are kept, which makes
/// quantizing twice a no-op.
pub fn quantize_radius(radius: f64) -> f64 {
    let scaled = radius * RADIUS_RESOLUTION;
    let nearest = scaled.round();
    let steps = if (scaled - nearest).abs() < QUANTIZE_TOLERANCE {
        nearest
    } else {
        scaled.ceil()
    };
    steps / RADIUS_RESOLUTION
}

/// Brute-force scan of the offsets inside the disk of `radius`
///
/// Offsets satisfy `0 < dx² + dy² <= radius²` and come out in ascending
/// `(dx, dy)` order.
pub fn generate_all_directions(radius: f64) -> Vec<[i32; 2]> {
    let reach = radius.floor() as i32;
    let limit = radius * radius;

    let mut directions = Vec::new();
    for dx in -reach..=reach {
        for dy in -reach..=reach {
            let distance = f64::from(dx * dx + dy * dy);
            if distance > 0.0 && distance <= limit {
                directions.push([dx, dy]);
            }
        }
    }
    directions
}

/// Neighbor offsets for a quantized interaction radius
///
/// Used both to derive edges and to walk the lattice during the
/// connectivity check. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSet {
    radius: f64,
    offsets: Vec<[i32; 2]>,
}

impl DirectionSet {
    /// Validate and quantize `radius`, then enumerate its offsets
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not within `[1, 10)`
    pub fn new(radius: f64) -> Result<Self> {
        if !(MIN_RADIUS..MAX_RADIUS).contains(&radius) {
            return Err(invalid_parameter(
                "radius",
                &radius,
                &format!("must satisfy {MIN_RADIUS} <= r < {MAX_RADIUS}"),
            ));
        }

        let radius = quantize_radius(radius);
        Ok(Self {
            radius,
            offsets: generate_all_directions(radius),
        })
    }

    /// Quantized radius the offsets were generated for
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Offsets in ascending `(dx, dy)` order
    pub fn offsets(&self) -> &[[i32; 2]] {
        &self.offsets
    }

    /// Number of offsets, i.e. the coordination number of a bulk site
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether there are no offsets at all
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Positions reachable from `position` that lie inside a `side` × `side` lattice
    pub fn neighbors(
        &self,
        position: [usize; 2],
        side: usize,
    ) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.offsets.iter().filter_map(move |&[dx, dy]| {
            let x = position[0].checked_add_signed(dx as isize)?;
            let y = position[1].checked_add_signed(dy as isize)?;
            (x < side && y < side).then_some([x, y])
        })
    }
}
