//! Dense `N × N` adjacency matrix, stored as nested JSON arrays

use ndarray::Array2;

use crate::graph::adjacency::Adjacency;
use crate::graph::instance::Instance;
use crate::io::error::{MisError, Result};

/// Symmetric 0/1 matrix with `matrix[[a, b]] == 1` for every edge
pub fn adjacency_matrix(adjacency: &Adjacency) -> Array2<u8> {
    let count = adjacency.node_count();
    let mut matrix = Array2::zeros((count, count));
    for a in 0..count {
        for &b in adjacency.neighbors(a) {
            if let Some(cell) = matrix.get_mut([a, b as usize]) {
                *cell = 1;
            }
        }
    }
    matrix
}

/// Serialize the adjacency matrix as one JSON array per row
///
/// # Errors
///
/// Returns an error if an edge references an unknown node or encoding fails
pub fn to_matrix_json(instance: &Instance) -> Result<String> {
    let matrix = adjacency_matrix(&instance.adjacency()?);
    let rows: Vec<Vec<u8>> = matrix.rows().into_iter().map(|row| row.to_vec()).collect();

    let mut json = serde_json::to_string(&rows).map_err(|source| MisError::Serialization {
        operation: "encode adjacency matrix",
        source,
    })?;
    json.push('\n');
    Ok(json)
}
