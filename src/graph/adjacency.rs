//! Validated adjacency lists for node-ordered sweeps

use crate::io::error::{Result, invalid_input};

/// Sorted, deduplicated neighbor lists over ids `0..node_count`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adjacency {
    neighbors: Vec<Vec<u32>>,
    edge_count: usize,
}

impl Adjacency {
    /// Build adjacency lists for exactly `node_count` nodes
    ///
    /// Duplicate edges (in either orientation) are merged.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is a self-loop or references an id
    /// outside `0..node_count`
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self> {
        let mut neighbors = vec![Vec::new(); node_count];

        for (a, b) in edges {
            if a == b {
                return Err(invalid_input(&format!("self-loop on node {a}")));
            }
            for id in [a, b] {
                if id as usize >= node_count {
                    return Err(invalid_input(&format!(
                        "edge ({a}, {b}) references node {id} outside 0..{node_count}"
                    )));
                }
            }
            if let Some(list) = neighbors.get_mut(a as usize) {
                list.push(b);
            }
            if let Some(list) = neighbors.get_mut(b as usize) {
                list.push(a);
            }
        }

        let mut degree_sum = 0;
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
            degree_sum += list.len();
        }

        Ok(Self {
            neighbors,
            edge_count: degree_sum / 2,
        })
    }

    /// Build adjacency lists sized by the largest id mentioned
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is a self-loop
    pub fn from_edge_list(edges: &[(u32, u32)]) -> Result<Self> {
        let node_count = edges
            .iter()
            .map(|&(a, b)| a.max(b) as usize + 1)
            .max()
            .unwrap_or(0);
        Self::from_edges(node_count, edges.iter().copied())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of distinct undirected edges
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `node` in ascending order, empty for unknown ids
    pub fn neighbors(&self, node: usize) -> &[u32] {
        match self.neighbors.get(node) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Neighbors with a smaller id than `node`
    pub fn earlier_neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(node)
            .iter()
            .map(|&j| j as usize)
            .take_while(move |&j| j < node)
    }

    /// Largest id difference across any edge (the bandwidth of this ordering)
    pub fn bandwidth(&self) -> usize {
        self.neighbors
            .iter()
            .enumerate()
            .filter_map(|(i, list)| list.last().map(|&j| (j as usize).saturating_sub(i)))
            .max()
            .unwrap_or(0)
    }

    /// First edge `(i, j)` with `j - i > limit`, if any
    pub fn first_edge_longer_than(&self, limit: usize) -> Option<(u32, u32)> {
        self.neighbors.iter().enumerate().find_map(|(i, list)| {
            list.last()
                .filter(|&&j| (j as usize).saturating_sub(i) > limit)
                .map(|&j| (i as u32, j))
        })
    }
}
