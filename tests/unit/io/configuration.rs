//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use mislattice::io::configuration::{
        ASCII_RADIUS_LIMIT, DEFAULT_DENSITY, DEFAULT_RADIUS, LARGE_WINDOW_WARNING, MAX_RADIUS,
        MAX_SAMPLE_ASSIGNMENTS, MAX_SIDE, MAX_WINDOW_SIZE, MIN_RADIUS, UNSEEDED_SEED_RANGE,
    };
    use mislattice::lattice::directions::quantize_radius;

    // Tests that the defaults lie inside the accepted ranges
    // Verified by comparing against the bounds
    #[test]
    fn test_defaults_within_bounds() {
        assert!(DEFAULT_DENSITY > 0.0 && DEFAULT_DENSITY <= 1.0);
        assert!((MIN_RADIUS..MAX_RADIUS).contains(&DEFAULT_RADIUS));
        assert!((DEFAULT_RADIUS * DEFAULT_RADIUS - 2.0).abs() < 1e-12);
        assert!(MAX_SIDE > 1);
        assert_eq!(UNSEEDED_SEED_RANGE, 100_000);
    }

    // Tests solver limits
    // Verified by the width of the packed frontier key
    #[test]
    fn test_solver_limits() {
        assert_eq!(MAX_WINDOW_SIZE, u64::BITS as usize);
        assert!(LARGE_WINDOW_WARNING < MAX_WINDOW_SIZE);
        assert_eq!(MAX_SAMPLE_ASSIGNMENTS, 5);
    }

    // Tests that the quantized Union-Jack radius still gets ASCII bonds
    // Verified by quantizing the default radius
    #[test]
    fn test_ascii_limit_covers_union_jack() {
        assert!(quantize_radius(DEFAULT_RADIUS) < ASCII_RADIUS_LIMIT);
        assert!(ASCII_RADIUS_LIMIT < 2.0);
    }
}
