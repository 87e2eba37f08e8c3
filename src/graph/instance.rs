//! MIS instance: node coordinates, deduplicated edges and generation metadata

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::adjacency::Adjacency;
use crate::io::configuration::INSTANCE_DESCRIPTION;
use crate::io::error::Result;
use crate::lattice::directions::DirectionSet;
use crate::lattice::grid::LatticeGrid;

/// Parameters an instance was generated from
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceParams {
    /// Lattice side length `L`
    pub side: usize,
    /// Requested density
    pub density: f64,
    /// Seed of the attempt-order shuffle
    pub seed: u64,
    /// Quantized interaction radius
    pub radius: f64,
    /// Generator schema version
    pub version: String,
}

/// Lattice coordinate of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// Row of the site
    pub x: usize,
    /// Column of the site
    pub y: usize,
}

/// Unweighted MIS instance
///
/// Edges are stored with the smaller id first; ordered containers keep every
/// export deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    params: InstanceParams,
    nodes: BTreeMap<u32, Node>,
    edges: BTreeSet<(u32, u32)>,
}

impl Instance {
    /// Create an instance without nodes or edges
    pub const fn new(params: InstanceParams) -> Self {
        Self {
            params,
            nodes: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Generation metadata
    pub const fn params(&self) -> &InstanceParams {
        &self.params
    }

    /// File stem encoding size, density, seed and radius, e.g. `N4_d0.5_s123_r1.0`
    pub fn name(&self) -> String {
        format!(
            "N{}_d{:?}_s{}_r{:?}",
            self.nodes.len(),
            self.params.density,
            self.params.seed,
            self.params.radius
        )
    }

    /// Human readable description
    pub const fn description(&self) -> &'static str {
        INSTANCE_DESCRIPTION
    }

    /// Register a node, replacing any previous coordinate for `id`
    pub fn add_node(&mut self, id: u32, node: Node) {
        self.nodes.insert(id, node);
    }

    /// Add an undirected edge, returns whether it was new
    ///
    /// Self-loops are ignored.
    pub fn add_edge(&mut self, a: u32, b: u32) -> bool {
        if a == b {
            return false;
        }
        self.edges.insert((a.min(b), a.max(b)))
    }

    /// Remove an undirected edge, returns whether it was present
    pub fn remove_edge(&mut self, a: u32, b: u32) -> bool {
        self.edges.remove(&(a.min(b), a.max(b)))
    }

    /// Whether `a` and `b` are bonded
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.edges.contains(&(a.min(b), a.max(b)))
    }

    /// Drop all nodes and edges, keeping the parameters
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Nodes by id
    pub const fn nodes(&self) -> &BTreeMap<u32, Node> {
        &self.nodes
    }

    /// Edges as `(smaller, larger)` pairs in ascending order
    pub const fn edges(&self) -> &BTreeSet<(u32, u32)> {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adjacency lists over ids `0..node_count`
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references an id outside the node range
    pub fn adjacency(&self) -> Result<Adjacency> {
        Adjacency::from_edges(self.node_count(), self.edges.iter().copied())
    }
}

/// Convert a finished grid into an instance
///
/// Every occupied site becomes a node keyed by its id. Every offset that lands
/// on another occupied site inside the lattice yields an edge; both directions
/// of a bond collapse into one entry.
pub fn assemble(grid: &LatticeGrid, directions: &DirectionSet, params: InstanceParams) -> Instance {
    let side = grid.side();
    let mut instance = Instance::new(params);

    for ([x, y], center) in grid.occupied() {
        if x >= side || y >= side {
            continue;
        }
        instance.add_node(center, Node { x, y });
        for [u, v] in directions.neighbors([x, y], side) {
            if let Some(neighbor) = grid.site(u, v).id() {
                instance.add_edge(neighbor, center);
            }
        }
    }

    instance
}
