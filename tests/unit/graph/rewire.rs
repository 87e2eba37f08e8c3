//! Tests for edge rewiring

#[cfg(test)]
mod tests {
    use mislattice::MisError;
    use mislattice::graph::instance::{Instance, InstanceParams, Node};
    use mislattice::graph::rewire::{rewire_edges, rewiring_series};
    use mislattice::lattice::generator::Generator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::SQRT_2;

    fn instance(node_count: u32, edges: &[(u32, u32)]) -> Instance {
        let mut instance = Instance::new(InstanceParams {
            side: 3,
            density: 0.5,
            seed: 0,
            radius: 1.0,
            version: "0.2".to_string(),
        });
        for id in 0..node_count {
            instance.add_node(id, Node { x: 0, y: id as usize });
        }
        for &(a, b) in edges {
            instance.add_edge(a, b);
        }
        instance
    }

    // Tests a single rewire on a four-cycle
    // Verified by the edge count, the untouched list and the new bond
    #[test]
    fn test_single_rewire() {
        let mut square = instance(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut untouched: Vec<(u32, u32)> = square.edges().iter().copied().collect();
        let before = square.clone();

        rewire_edges(&mut square, 1, &mut untouched, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(square.edge_count(), 4);
        assert_eq!(untouched.len(), 3);
        let removed: Vec<_> = before.edges().difference(square.edges()).collect();
        let added: Vec<_> = square.edges().difference(before.edges()).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(added.len(), 1);
        assert!(!untouched.contains(removed[0]));
        assert!(square.edges().iter().all(|&(a, b)| a < b));
    }

    // Tests a node that is bonded to everyone else
    // Verified by a star whose hub has no free partner
    #[test]
    fn test_no_free_partner() {
        let mut star = instance(3, &[(0, 1), (0, 2)]);
        let mut untouched = vec![(0, 1)];
        assert!(matches!(
            rewire_edges(&mut star, 1, &mut untouched, &mut StdRng::seed_from_u64(0)),
            Err(MisError::Computation { .. })
        ));
    }

    // Tests running out of untouched edges
    // Verified by requesting a rewire with an empty list
    #[test]
    fn test_untouched_exhausted() {
        let mut square = instance(4, &[(0, 1)]);
        assert!(matches!(
            rewire_edges(&mut square, 1, &mut Vec::new(), &mut StdRng::seed_from_u64(0)),
            Err(MisError::Computation { .. })
        ));
        assert!(matches!(
            rewiring_series(&square, 0, &mut StdRng::seed_from_u64(0)),
            Err(MisError::InvalidParameter { .. })
        ));
    }

    // Tests a series on a generated lattice
    // Verified by snapshot count, preserved sizes and reproducibility
    #[test]
    fn test_rewiring_series() {
        let lattice = Generator::new(6, 0.8, SQRT_2)
            .unwrap()
            .generate(Some(3))
            .unwrap()
            .instance;

        let series = rewiring_series(&lattice, 20, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(series.len(), 20);
        for snapshot in &series {
            assert_eq!(snapshot.node_count(), lattice.node_count());
            assert_eq!(snapshot.edge_count(), lattice.edge_count());
            assert_eq!(snapshot.params(), lattice.params());
        }
        assert_ne!(series[19].edges(), lattice.edges());

        let again = rewiring_series(&lattice, 20, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(series, again);
    }
}
