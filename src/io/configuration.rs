//! Generator constants and runtime configuration defaults

// Lattice parameter bounds
/// Exclusive upper bound on the lattice side length
pub const MAX_SIDE: usize = 52;
/// Inclusive lower bound on the interaction radius
pub const MIN_RADIUS: f64 = 1.0;
/// Exclusive upper bound on the interaction radius
pub const MAX_RADIUS: f64 = 10.0;
/// Radii are rounded up to a multiple of `1 / RADIUS_RESOLUTION`
pub const RADIUS_RESOLUTION: f64 = 1000.0;

// Default values for configurable parameters
/// Portion of sites left occupied
pub const DEFAULT_DENSITY: f64 = 0.8;
/// Union-Jack interaction radius (orthogonal and diagonal neighbors)
pub const DEFAULT_RADIUS: f64 = std::f64::consts::SQRT_2;
/// Seeds drawn for unseeded runs lie in `0..UNSEEDED_SEED_RANGE`
pub const UNSEEDED_SEED_RANGE: u64 = 100_000;
/// Output folder template, `{L}`, `{d}`, `{s}` and `{r}` are substituted
pub const DEFAULT_OUTPUT_FOLDER: &str = "instances/L{L}";
/// Folder template for rewired series, `{L}` is substituted
pub const DEFAULT_REWIRED_FOLDER: &str = "instances/L{L}/rewired";
/// Folder template for Erdős–Rényi instances, `{L}` is substituted
pub const DEFAULT_ERDOS_RENYI_FOLDER: &str = "instances/L{L}/ER";
/// Rewiring rounds, each touching a twentieth of the edges
pub const DEFAULT_REWIRING_STEPS: usize = 20;

// Instance metadata
/// Schema version recorded in every generated instance
pub const GENERATOR_VERSION: &str = "0.2";
/// Human readable instance description
pub const INSTANCE_DESCRIPTION: &str = "Unweighted MIS instance on Union Jack Grid";

// Solver limits
/// Representative optimal assignments kept per frontier state
pub const MAX_SAMPLE_ASSIGNMENTS: usize = 5;
/// Frontier keys are packed into a `u64`
pub const MAX_WINDOW_SIZE: usize = 64;
/// Windows above this size are accepted but logged as expensive
pub const LARGE_WINDOW_WARNING: usize = 24;

// Rendering settings
/// ASCII art only shows bonds for radii below this value
pub const ASCII_RADIUS_LIMIT: f64 = 2.0 - 0.001;
/// Pixels per lattice unit in SVG output
pub const SVG_SCALE: f64 = 20.0;
/// Objective terms per line in LP output
pub const LP_TERMS_PER_LINE: usize = 10;
/// Pixels per site edge in PNG output
pub const PNG_SITE_PIXELS: u32 = 8;
/// Occupied site color in PNG output
pub const PNG_OCCUPIED_COLOR: [u8; 4] = [32, 128, 64, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
