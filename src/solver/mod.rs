/// Frontier sweep over a fixed node order
pub mod frontier;

pub use frontier::{FrontierSweep, Solution, solve};
