/// Sorted neighbor lists with input validation
pub mod adjacency;
/// Random graphs with the node count of a lattice
pub mod erdos_renyi;
/// Instances and assembly from a finished lattice
pub mod instance;
/// Progressive random edge rewiring
pub mod rewire;

pub use adjacency::Adjacency;
pub use instance::{Instance, InstanceParams, Node, assemble};
