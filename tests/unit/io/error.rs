//! Tests for error messages and sources

#[cfg(test)]
mod tests {
    use mislattice::MisError;
    use mislattice::io::error::{computation_error, invalid_input, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the parameter error message
    // Verified by formatting a rejected side length
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("L", &60, &"must satisfy 0 < L < 52");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'L' = '60': must satisfy 0 < L < 52"
        );
        assert!(err.source().is_none());
    }

    // Tests construction and solver error messages
    // Verified by formatting each variant
    #[test]
    fn test_domain_error_display() {
        let stall = MisError::UnsatisfiableDensity {
            occupied: 10,
            target: 8,
            pass: 3,
        };
        assert_eq!(
            stall.to_string(),
            "Lattice construction stalled on pass 3: 10 sites occupied, target 8"
        );

        let window = MisError::WindowViolation {
            from: 2,
            to: 9,
            window_size: 4,
        };
        assert_eq!(
            window.to_string(),
            "Edge (2, 9) spans 7 ids but the window size is 4"
        );

        assert_eq!(
            MisError::IsolatedNode { id: 5 }.to_string(),
            "Node 5 has no neighbors"
        );
        assert_eq!(
            invalid_input(&"self-loop on node 1").to_string(),
            "Invalid solver input: self-loop on node 1"
        );
        assert_eq!(
            computation_error("edge rewiring", &"no untouched edge left").to_string(),
            "Computation error in edge rewiring: no untouched edge left"
        );
    }

    // Tests that wrapped errors are exposed as sources
    // Verified by converting an I/O error
    #[test]
    fn test_wrapped_sources() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MisError::FileSystem {
            path: PathBuf::from("instances/a.json"),
            operation: "read",
            source: io_error,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("instances/a.json"));

        let converted: MisError = std::io::Error::other("boom").into();
        assert!(matches!(converted, MisError::FileSystem { .. }));

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MisError::Serialization {
            operation: "decode instance",
            source: json_error,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Serialization error during decode instance"));
    }
}
