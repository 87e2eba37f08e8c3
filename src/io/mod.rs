/// Command-line interface and subcommand drivers
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Plain edge list export
pub mod edgelist;
/// Error types
pub mod error;
/// PNG occupancy export
pub mod image;
/// JSON edge-list documents
pub mod json;
/// CPLEX LP export
pub mod lp;
/// Dense adjacency matrix export
pub mod matrix;
/// METIS adjacency export and reading
pub mod metis;
/// Progress bars
pub mod progress;
/// SVG export
pub mod svg;
