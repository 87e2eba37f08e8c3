//! Exact maximum independent set by a node-ordered frontier sweep
//!
//! Nodes are decided one at a time in id order. A state records, for the last
//! `window_size` decided nodes, which of them are in the set; that is all a
//! later node needs to know to decide whether it may join, provided no edge
//! spans more than `window_size` ids. States with equal keys are merged after
//! every step so at most `2^window_size` of them are alive at once.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::graph::adjacency::Adjacency;
use crate::io::configuration::{LARGE_WINDOW_WARNING, MAX_SAMPLE_ASSIGNMENTS, MAX_WINDOW_SIZE};
use crate::io::error::{MisError, Result, invalid_parameter};

/// Membership bits of the most recent decisions, bit 0 is the latest node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FrontierKey(u64);

impl FrontierKey {
    /// Key with no decisions
    pub const EMPTY: Self = Self(0);

    /// Append a decision, dropping bits older than `mask` allows
    #[must_use]
    pub const fn push(self, included: bool, mask: u64) -> Self {
        Self(((self.0 << 1) | included as u64) & mask)
    }

    /// Whether the node decided `distance` steps ago is included
    ///
    /// `distance` is 1 for the previous node.
    pub const fn includes(self, distance: usize) -> bool {
        distance >= 1 && distance <= 64 && (self.0 >> (distance - 1)) & 1 == 1
    }

    /// Raw packed bits
    pub const fn bits(self) -> u64 {
        self.0
    }
}

/// Best partial solutions sharing one frontier key
///
/// Besides the optimum it counts assignments one short of it, which is all
/// the first excited level needs: a later node never widens the gap between
/// two assignments that share a key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierRecord {
    score: usize,
    count: BigUint,
    excited: BigUint,
    samples: Vec<BitVec>,
}

impl FrontierRecord {
    fn empty() -> Self {
        Self {
            score: 0,
            count: BigUint::zero(),
            excited: BigUint::zero(),
            samples: Vec::new(),
        }
    }

    fn extended(&self, included: bool) -> Self {
        let samples = self
            .samples
            .iter()
            .map(|sample| {
                let mut sample = sample.clone();
                sample.push(included);
                sample
            })
            .collect();

        Self {
            score: self.score + usize::from(included),
            count: self.count.clone(),
            excited: self.excited.clone(),
            samples,
        }
    }

    fn absorb(&mut self, other: Self) {
        if other.score > self.score + 1 {
            *self = other;
        } else if other.score == self.score + 1 {
            // The old optimum becomes the excited level of the new one
            let demoted = std::mem::take(&mut self.count);
            self.excited = demoted + other.excited;
            self.count = other.count;
            self.score = other.score;
            self.samples = other.samples;
        } else if other.score == self.score {
            self.count += other.count;
            self.excited += other.excited;
            let room = MAX_SAMPLE_ASSIGNMENTS.saturating_sub(self.samples.len());
            self.samples.extend(other.samples.into_iter().take(room));
        } else if other.score + 1 == self.score {
            self.excited += other.count;
        }
    }
}

/// Result of a completed sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Size of a maximum independent set
    pub best_score: usize,
    /// Number of distinct maximum independent sets
    pub degeneracy: BigUint,
    /// Number of independent sets of size `best_score - 1`
    pub first_excited: BigUint,
    /// Up to five optimal sets, each as ascending node ids
    pub samples: Vec<Vec<u32>>,
}

/// Step-by-step frontier dynamic program
///
/// Call [`FrontierSweep::step`] until it returns `false`, then
/// [`FrontierSweep::finish`]. [`solve`] does both.
pub struct FrontierSweep<'a> {
    adjacency: &'a Adjacency,
    window_size: usize,
    mask: u64,
    next_node: usize,
    states: BTreeMap<FrontierKey, FrontierRecord>,
}

impl<'a> FrontierSweep<'a> {
    /// Validate the window against the graph and set up the initial state
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `window_size` is zero or exceeds 64
    /// - an edge spans more ids than `window_size`
    pub fn new(adjacency: &'a Adjacency, window_size: usize) -> Result<Self> {
        if window_size == 0 || window_size > MAX_WINDOW_SIZE {
            return Err(invalid_parameter(
                "window_size",
                &window_size,
                &format!("must satisfy 0 < window <= {MAX_WINDOW_SIZE}"),
            ));
        }

        if let Some((from, to)) = adjacency.first_edge_longer_than(window_size) {
            return Err(MisError::WindowViolation {
                from,
                to,
                window_size,
            });
        }

        if window_size > LARGE_WINDOW_WARNING {
            warn!("window size {window_size} may need up to 2^{window_size} frontier states");
        }

        let mask = if window_size == MAX_WINDOW_SIZE {
            u64::MAX
        } else {
            (1u64 << window_size) - 1
        };

        let mut states = BTreeMap::new();
        states.insert(
            FrontierKey::EMPTY,
            FrontierRecord {
                score: 0,
                count: BigUint::one(),
                excited: BigUint::zero(),
                samples: vec![BitVec::new()],
            },
        );

        Ok(Self {
            adjacency,
            window_size,
            mask,
            next_node: 0,
            states,
        })
    }

    /// Declared window size
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Nodes decided so far
    pub const fn processed(&self) -> usize {
        self.next_node
    }

    /// Nodes in the graph
    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    /// Distinct frontier keys currently alive
    pub fn live_states(&self) -> usize {
        self.states.len()
    }

    /// Decide the next node, returns `false` once every node is decided
    pub fn step(&mut self) -> bool {
        let node = self.next_node;
        if node >= self.node_count() {
            return false;
        }

        let previous = std::mem::take(&mut self.states);
        let mut next: BTreeMap<FrontierKey, FrontierRecord> = BTreeMap::new();

        for (key, record) in previous {
            let blocked = self
                .adjacency
                .earlier_neighbors(node)
                .any(|j| key.includes(node - j));

            if !blocked {
                merge(
                    &mut next,
                    key.push(true, self.mask),
                    record.extended(true),
                );
            }
            merge(
                &mut next,
                key.push(false, self.mask),
                record.extended(false),
            );
        }

        self.states = next;
        self.next_node += 1;
        debug!("node {node}: {} frontier states", self.states.len());
        true
    }

    /// Finish any remaining steps and collect the optimum
    pub fn finish(mut self) -> Solution {
        while self.step() {}

        let mut best = FrontierRecord::empty();
        for record in std::mem::take(&mut self.states).into_values() {
            best.absorb(record);
        }

        Solution {
            best_score: best.score,
            degeneracy: best.count,
            first_excited: best.excited,
            samples: best
                .samples
                .iter()
                .map(|sample| sample.iter_ones().map(|i| i as u32).collect())
                .collect(),
        }
    }
}

fn merge(
    states: &mut BTreeMap<FrontierKey, FrontierRecord>,
    key: FrontierKey,
    record: FrontierRecord,
) {
    match states.get_mut(&key) {
        Some(existing) => existing.absorb(record),
        None => {
            states.insert(key, record);
        }
    }
}

/// Exact maximum independent set size, degeneracy, first excited count and
/// sample solutions
///
/// `window_size` must bound the id distance of every edge; lattice graphs of
/// side `L` with radius below 2 use `L + 1`.
///
/// # Errors
///
/// Returns an error if the window is out of range or an edge spans more ids
/// than the window
pub fn solve(adjacency: &Adjacency, window_size: usize) -> Result<Solution> {
    Ok(FrontierSweep::new(adjacency, window_size)?.finish())
}
