//! Error types for lattice generation, solving and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator and solver operations
#[derive(Debug)]
pub enum MisError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Site removal stalled above the target occupancy
    ///
    /// Occurs when a full pass over the attempt order removes nothing,
    /// i.e. every remaining site would disconnect the lattice.
    UnsatisfiableDensity {
        /// Occupied sites when the stall was detected
        occupied: usize,
        /// Requested number of occupied sites
        target: usize,
        /// Pass over the attempt order that made no progress
        pass: usize,
    },

    /// Malformed solver input (self-loop or out-of-range id)
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// An edge reaches further back than the frontier remembers
    WindowViolation {
        /// Smaller endpoint of the offending edge
        from: u32,
        /// Larger endpoint of the offending edge
        to: u32,
        /// Declared window size
        window_size: usize,
    },

    /// A node without neighbors cannot be written in adjacency formats
    IsolatedNode {
        /// Id of the isolated node
        id: u32,
    },

    /// Source document doesn't describe a usable instance
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Operation being performed
        operation: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for MisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsatisfiableDensity {
                occupied,
                target,
                pass,
            } => {
                write!(
                    f,
                    "Lattice construction stalled on pass {pass}: {occupied} sites occupied, target {target}"
                )
            }
            Self::InvalidInput { reason } => write!(f, "Invalid solver input: {reason}"),
            Self::WindowViolation {
                from,
                to,
                window_size,
            } => {
                write!(
                    f,
                    "Edge ({from}, {to}) spans {} ids but the window size is {window_size}",
                    to - from
                )
            }
            Self::IsolatedNode { id } => write!(f, "Node {id} has no neighbors"),
            Self::InvalidSourceData { reason } => write!(f, "Invalid source data: {reason}"),
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Serialization { operation, source } => {
                write!(f, "Serialization error during {operation}: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, MisError>;

impl From<std::io::Error> for MisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MisError {
    MisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MisError {
    MisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an input validation error for the solver
pub fn invalid_input(reason: &impl ToString) -> MisError {
    MisError::InvalidInput {
        reason: reason.to_string(),
    }
}
