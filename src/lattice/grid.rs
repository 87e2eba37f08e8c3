//! Finished lattice with contiguous site ids and sentinel border
//!
//! The grid stores `(L + 1) × (L + 1)` sites. The last row and the last
//! column are always vacant, so lookups one step past the lattice edge (and
//! the ASCII renderer's look-behind at `x - 1`) land on a vacant site.

use ndarray::Array2;

/// State of a single lattice site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Site {
    /// No node at this position
    #[default]
    Vacant,
    /// Node with the given id
    Occupied(u32),
}

impl Site {
    /// Node id if the site is occupied
    pub const fn id(self) -> Option<u32> {
        match self {
            Self::Occupied(id) => Some(id),
            Self::Vacant => None,
        }
    }

    /// Whether a node sits here
    pub const fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied(_))
    }
}

/// Immutable lattice produced by the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeGrid {
    side: usize,
    sites: Array2<Site>,
}

impl LatticeGrid {
    /// Label an `L × L` occupancy mask and add the sentinel row and column
    ///
    /// Occupied sites receive ids `0..N` in row-major order (`x` outer, `y`
    /// inner).
    pub fn from_occupancy(occupancy: &Array2<bool>) -> Self {
        let (rows, cols) = occupancy.dim();
        let side = rows.max(cols);
        let mut sites = Array2::from_elem((side + 1, side + 1), Site::Vacant);

        let mut next_id = 0u32;
        for ((x, y), &occupied) in occupancy.indexed_iter() {
            if occupied {
                if let Some(site) = sites.get_mut([x, y]) {
                    *site = Site::Occupied(next_id);
                }
                next_id += 1;
            }
        }

        Self { side, sites }
    }

    /// Lattice side length `L` (excluding the sentinels)
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Site at `(x, y)`, vacant anywhere outside the stored array
    pub fn site(&self, x: usize, y: usize) -> Site {
        self.sites.get([x, y]).copied().unwrap_or_default()
    }

    /// Raw storage including the sentinel row and column
    pub const fn sites(&self) -> &Array2<Site> {
        &self.sites
    }

    /// Occupied positions and their ids in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = ([usize; 2], u32)> + '_ {
        self.sites
            .indexed_iter()
            .filter_map(|((x, y), site)| site.id().map(|id| ([x, y], id)))
    }

    /// Number of occupied sites
    pub fn occupied_count(&self) -> usize {
        self.sites.iter().filter(|site| site.is_occupied()).count()
    }

    /// Occupancy mask of the `L × L` region
    pub fn occupancy(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.side, self.side), |(x, y)| {
            self.site(x, y).is_occupied()
        })
    }

    /// Render the lattice with `o` for sites and `- | \ / X` for bonds
    ///
    /// Text rows follow `y`, text columns follow `x`. Only nearest and
    /// diagonal bonds are drawn.
    pub fn render_ascii(&self) -> String {
        let occupied = |x: Option<usize>, y: Option<usize>| match (x, y) {
            (Some(x), Some(y)) => self.site(x, y).is_occupied(),
            _ => false,
        };

        let mut ascii = String::from("\n");
        for y in 0..self.side {
            if y > 0 {
                for x in 0..self.side {
                    let up_left = occupied(x.checked_sub(1), Some(y - 1));
                    let left = occupied(x.checked_sub(1), Some(y));
                    let up = occupied(Some(x), Some(y - 1));
                    let here = occupied(Some(x), Some(y));

                    let falling = up_left && here;
                    let rising = left && up;
                    ascii.push(match (rising, falling) {
                        (true, true) => 'X',
                        (true, false) => '/',
                        (false, true) => '\\',
                        (false, false) => ' ',
                    });
                    ascii.push(if up && here { '|' } else { ' ' });
                }
                ascii.push('\n');
            }

            for x in 0..self.side {
                if !occupied(Some(x), Some(y)) {
                    ascii.push_str("  ");
                } else if occupied(x.checked_sub(1), Some(y)) {
                    ascii.push_str("-o");
                } else {
                    ascii.push_str(" o");
                }
            }
            ascii.push_str(" \n");
        }
        ascii
    }
}
