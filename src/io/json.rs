//! JSON edge-list documents, written by `generate` and read by `solve`

use serde::{Deserialize, Serialize};

use crate::graph::adjacency::Adjacency;
use crate::graph::instance::Instance;
use crate::io::error::{MisError, Result};

/// Problem type tag of MIS documents
pub const PROBLEM_TYPE: &str = "mis";

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    problem: Problem,
}

#[derive(Debug, Serialize, Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    meta: Meta,
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generator: Option<GeneratorInfo>,
    params: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<Size>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneratorInfo {
    name: String,
    version: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Params {
    #[serde(rename = "L")]
    side: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(default, rename = "r", skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Size {
    nodes: usize,
    edges: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    ids: [u32; 2],
}

/// Render an instance as a single-line JSON document with trailing newline
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json(instance: &Instance) -> Result<String> {
    let params = instance.params();
    let document = Document {
        problem: Problem {
            kind: PROBLEM_TYPE.to_string(),
            meta: Meta {
                name: Some(instance.name()),
                description: Some(instance.description().to_string()),
                generator: Some(GeneratorInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: params.version.clone(),
                }),
                params: Params {
                    side: params.side,
                    density: Some(params.density),
                    seed: Some(params.seed),
                    radius: Some(params.radius),
                },
                size: Some(Size {
                    nodes: instance.node_count(),
                    edges: instance.edge_count(),
                }),
            },
            edges: instance
                .edges()
                .iter()
                .map(|&(a, b)| EdgeRecord { ids: [a, b] })
                .collect(),
        },
    };

    let mut json = serde_json::to_string(&document).map_err(|source| MisError::Serialization {
        operation: "encode instance",
        source,
    })?;
    json.push('\n');
    Ok(json)
}

/// Edge list and lattice side read back from a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemFile {
    /// Lattice side length `L` from the parameters
    pub side: usize,
    /// Node count from `meta.size`, when present
    pub node_count: Option<usize>,
    /// Edges as listed
    pub edges: Vec<(u32, u32)>,
}

impl ProblemFile {
    /// Window size the frontier solver needs for this lattice
    pub const fn window_size(&self) -> usize {
        self.side + 1
    }

    /// Adjacency lists, sized by `meta.size.nodes` when given
    ///
    /// # Errors
    ///
    /// Returns an error on self-loops or ids outside the node range
    pub fn adjacency(&self) -> Result<Adjacency> {
        match self.node_count {
            Some(count) => Adjacency::from_edges(count, self.edges.iter().copied()),
            None => Adjacency::from_edge_list(&self.edges),
        }
    }
}

/// Parse a JSON MIS document
///
/// Only `problem.type`, `problem.meta.params.L` and `problem.edges` are
/// required.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the problem type is not `mis`
pub fn parse_problem(text: &str) -> Result<ProblemFile> {
    let document: Document =
        serde_json::from_str(text).map_err(|source| MisError::Serialization {
            operation: "decode instance",
            source,
        })?;
    let problem = document.problem;

    if problem.kind != PROBLEM_TYPE {
        return Err(MisError::InvalidSourceData {
            reason: format!(
                "problem type is '{}', expected '{PROBLEM_TYPE}'",
                problem.kind
            ),
        });
    }

    Ok(ProblemFile {
        side: problem.meta.params.side,
        node_count: problem.meta.size.map(|size| size.nodes),
        edges: problem
            .edges
            .into_iter()
            .map(|EdgeRecord { ids: [a, b] }| (a, b))
            .collect(),
    })
}
