//! Tests for the adjacency matrix export

#[cfg(test)]
mod tests {
    use crate::io::square_instance;
    use mislattice::graph::adjacency::Adjacency;
    use mislattice::io::matrix::{adjacency_matrix, to_matrix_json};
    use ndarray::array;

    // Tests that every edge sets both symmetric cells
    // Verified by the unit square fixture
    #[test]
    fn test_square_matrix() {
        let adjacency = square_instance().adjacency().unwrap();
        let matrix = adjacency_matrix(&adjacency);
        assert_eq!(
            matrix,
            array![[0u8, 1, 1, 0], [1, 0, 0, 1], [1, 0, 0, 1], [0, 1, 1, 0]]
        );
        assert_eq!(matrix, matrix.t());
        assert_eq!(matrix.iter().map(|&cell| usize::from(cell)).sum::<usize>(), 8);
    }

    // Tests the JSON row layout
    // Verified by decoding the rows back into nested vectors
    #[test]
    fn test_matrix_json() {
        let json = to_matrix_json(&square_instance()).unwrap();
        assert!(json.ends_with('\n'));
        let rows: Vec<Vec<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![0, 1, 1, 0],
                vec![1, 0, 0, 1],
                vec![1, 0, 0, 1],
                vec![0, 1, 1, 0],
            ]
        );
    }

    // Tests isolated nodes and the empty graph
    // Verified by all-zero rows
    #[test]
    fn test_edgeless_matrix() {
        let isolated = adjacency_matrix(&Adjacency::from_edges(2, std::iter::empty()).unwrap());
        assert_eq!(isolated, array![[0u8, 0], [0, 0]]);
        assert_eq!(adjacency_matrix(&Adjacency::default()).len(), 0);
    }
}
