//! Plain `a, b` edge list

use crate::graph::instance::Instance;

/// One `a, b` line per edge, no trailing newline
pub fn to_edgelist(instance: &Instance) -> String {
    instance
        .edges()
        .iter()
        .map(|(a, b)| format!("{a}, {b}"))
        .collect::<Vec<_>>()
        .join("\n")
}
