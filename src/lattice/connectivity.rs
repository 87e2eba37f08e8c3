//! Flood-fill check that a site can be vacated without splitting the lattice

use bitvec::prelude::*;
use ndarray::Array2;

use crate::lattice::directions::DirectionSet;

/// Reusable scratch space for removal checks
///
/// The occupancy grid is only read. Visited marks live in a bitset that is
/// cleared (only at the touched positions) before each check returns, so one
/// instance serves every attempt of a construction run.
#[derive(Debug, Clone)]
pub struct FloodFill {
    side: usize,
    visited: BitVec,
    queue: Vec<[usize; 2]>,
    pending: Vec<[usize; 2]>,
}

impl FloodFill {
    /// Allocate scratch space for a `side` × `side` lattice
    pub fn new(side: usize) -> Self {
        Self {
            side,
            visited: bitvec![0; side * side],
            queue: Vec::with_capacity(side * side),
            pending: Vec::new(),
        }
    }

    /// Lattice side length this buffer was sized for
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Whether vacating `site` keeps its occupied neighbors mutually reachable
    ///
    /// A site with fewer than two occupied neighbors is always removable.
    /// Otherwise a breadth-first walk starts at the first neighbor, treats
    /// `site` as vacant, and stops as soon as every other neighbor is found.
    pub fn can_remove(
        &mut self,
        occupancy: &Array2<bool>,
        directions: &DirectionSet,
        site: [usize; 2],
    ) -> bool {
        let side = self.side;
        let is_occupied = |pos: [usize; 2]| occupancy.get(pos).copied().unwrap_or(false);

        self.pending.clear();
        self.pending
            .extend(directions.neighbors(site, side).filter(|&pos| is_occupied(pos)));

        if self.pending.len() < 2 {
            return true;
        }

        let start = self.pending.swap_remove(0);
        self.queue.clear();
        self.mark(site);
        self.mark(start);
        self.queue.push(start);

        let mut head = 0;
        while head < self.queue.len() && !self.pending.is_empty() {
            let Some(&current) = self.queue.get(head) else {
                break;
            };
            head += 1;

            for next in directions.neighbors(current, side) {
                if !is_occupied(next) || self.is_marked(next) {
                    continue;
                }
                self.mark(next);
                self.queue.push(next);
                if let Some(found) = self.pending.iter().position(|&pos| pos == next) {
                    self.pending.swap_remove(found);
                }
            }
        }

        let reachable = self.pending.is_empty();
        self.reset(site);
        reachable
    }

    fn index(&self, pos: [usize; 2]) -> usize {
        pos[0] * self.side + pos[1]
    }

    fn mark(&mut self, pos: [usize; 2]) {
        let index = self.index(pos);
        self.visited.set(index, true);
    }

    fn is_marked(&self, pos: [usize; 2]) -> bool {
        self.visited.get(self.index(pos)).as_deref() == Some(&true)
    }

    fn reset(&mut self, site: [usize; 2]) {
        let side = self.side;
        self.visited.set(site[0] * side + site[1], false);
        for &[x, y] in &self.queue {
            self.visited.set(x * side + y, false);
        }
    }
}
