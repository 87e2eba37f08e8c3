//! METIS 4.0 adjacency lists (as read by `KaMIS`)

use std::fmt;

use log::warn;

use crate::graph::adjacency::Adjacency;
use crate::graph::instance::Instance;
use crate::io::error::{MisError, Result};

/// Comment prefix carrying the lattice side in files written here
const SIDE_PREFIX: &str = "%% L=";

/// Header comments followed by the size line and one-based neighbor lists
struct MetisGraph<'a> {
    instance: &'a Instance,
    adjacency: Adjacency,
}

impl MetisGraph<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = self.instance;
        let params = instance.params();
        writeln!(f, "% {}", instance.description())?;
        writeln!(f, "% format: METIS 4.0 (metis4.pdf p16 fig.8a)")?;
        writeln!(f, "% {} v{}", env!("CARGO_PKG_NAME"), params.version)?;
        writeln!(f, "% name={}", instance.name())?;
        writeln!(f, "%\n% params:")?;
        writeln!(f, "{SIDE_PREFIX}{}", params.side)?;
        writeln!(f, "%% density={:?}", params.density)?;
        writeln!(f, "%% seed={}", params.seed)?;
        writeln!(f, "%% r={:?}", params.radius)?;
        writeln!(f, "%")?;
        writeln!(f, "% NOTE: Metis node ids start at 1!\n%")
    }
}

impl fmt::Display for MetisGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        writeln!(
            f,
            "{} {} 0",
            self.instance.node_count(),
            self.instance.edge_count()
        )?;

        for node in 0..self.adjacency.node_count() {
            for (position, &j) in self.adjacency.neighbors(node).iter().enumerate() {
                if position > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", j + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render an instance in METIS 4.0 format
///
/// Node ids are shifted to start at 1. Every node must have at least one
/// neighbor since the format cannot express isolated nodes.
///
/// # Errors
///
/// Returns [`MisError::IsolatedNode`] for a node without neighbors
pub fn to_metis(instance: &Instance) -> Result<String> {
    let adjacency = instance.adjacency()?;
    if let Some(node) = (0..adjacency.node_count()).find(|&node| adjacency.neighbors(node).is_empty())
    {
        return Err(MisError::IsolatedNode { id: node as u32 });
    }

    Ok(MetisGraph {
        instance,
        adjacency,
    }
    .to_string())
}

/// Graph read back from a METIS file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetisFile {
    /// Lattice side from the `%% L=` comment, when present
    pub side: Option<usize>,
    /// Zero-based adjacency lists
    pub adjacency: Adjacency,
}

impl MetisFile {
    /// Window size the frontier solver needs for this graph
    ///
    /// Lattice files use `L + 1`. Without the side comment the bandwidth of
    /// the graph is used instead.
    pub fn window_size(&self) -> usize {
        match self.side {
            Some(side) => side + 1,
            None => {
                let bandwidth = self.adjacency.bandwidth().max(1);
                warn!("no '{SIDE_PREFIX}' comment, using bandwidth {bandwidth} as window");
                bandwidth
            }
        }
    }
}

fn source_error(reason: String) -> MisError {
    MisError::InvalidSourceData { reason }
}

fn parse_field<T: std::str::FromStr>(field: &str, what: &str, line: usize) -> Result<T> {
    field
        .parse()
        .map_err(|_| source_error(format!("line {line}: '{field}' is not a valid {what}")))
}

/// Parse a METIS 4.0 graph
///
/// Empty lines and `%` comments are skipped. The first data line holds
/// `N E` and an optional format field, which must be `0` (unweighted). Every
/// following data line lists the one-based neighbors of the next node.
///
/// # Errors
///
/// Returns an error if:
/// - The size line is missing or malformed, or declares weights
/// - A neighbor id is not in `1..=N`
/// - The number of neighbor lines or distinct edges differs from the size line
pub fn parse_metis(text: &str) -> Result<MetisFile> {
    let mut side = None;
    let mut size: Option<(usize, usize)> = None;
    let mut edges = Vec::new();
    let mut node = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(value) = line.strip_prefix(SIDE_PREFIX) {
            side = Some(parse_field(value.trim(), "lattice side", line_number)?);
            continue;
        }
        if line.starts_with('%') {
            continue;
        }

        let Some((node_count, _)) = size else {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (nodes, edge_count, format) = match fields.as_slice() {
                [nodes, edges] => (*nodes, *edges, "0"),
                [nodes, edges, format] => (*nodes, *edges, *format),
                _ => {
                    return Err(source_error(format!(
                        "line {line_number}: expected 'N E [format]'"
                    )));
                }
            };
            if format != "0" {
                return Err(source_error(format!(
                    "line {line_number}: weighted format '{format}' is not supported"
                )));
            }
            size = Some((
                parse_field(nodes, "node count", line_number)?,
                parse_field(edge_count, "edge count", line_number)?,
            ));
            continue;
        };

        if node >= node_count {
            return Err(source_error(format!(
                "line {line_number}: more neighbor lists than the {node_count} declared nodes"
            )));
        }
        for field in line.split_whitespace() {
            let neighbor: usize = parse_field(field, "node id", line_number)?;
            if neighbor == 0 || neighbor > node_count {
                return Err(source_error(format!(
                    "line {line_number}: node id {neighbor} outside 1..={node_count}"
                )));
            }
            edges.push((node as u32, (neighbor - 1) as u32));
        }
        node += 1;
    }

    let Some((node_count, edge_count)) = size else {
        return Err(source_error("missing 'N E' size line".to_string()));
    };
    if node != node_count {
        return Err(source_error(format!(
            "{node} neighbor lists for {node_count} declared nodes"
        )));
    }

    let adjacency = Adjacency::from_edges(node_count, edges)?;
    if adjacency.edge_count() != edge_count {
        return Err(source_error(format!(
            "{} distinct edges, {edge_count} declared",
            adjacency.edge_count()
        )));
    }

    Ok(MetisFile { side, adjacency })
}
