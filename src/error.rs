//! Error taxonomy for dataset loading, hashing, and counting.

use std::path::PathBuf;

/// Errors that can occur while loading a dataset, hashing a motif, counting
/// motifs, or writing results.
#[derive(Debug, thiserror::Error)]
pub enum HeterogeneousMotifError {
    /// Missing/unreadable dataset files, malformed edge or node line,
    /// non-integer id, or id out of bounds.
    #[error("invalid input in {path}: {reason}")]
    InvalidInput {
        /// The file the bad input came from.
        path: PathBuf,
        /// A human-readable description of the problem.
        reason: String,
    },
    /// An orbit id outside `[1, 12]` was passed to the hasher.
    #[error("invalid orbit id {orbit} (must be in [1, 12])")]
    InvalidOrbit {
        /// The offending orbit id.
        orbit: u8,
    },
    /// The post-pass global-count correction found a non-zero remainder,
    /// signalling an algorithmic bug.
    #[error(
        "invariant violation while correcting global count for motif hash {motif_hash}: \
         count {count} is not evenly divisible by {edges_in_motif} edges"
    )]
    InvariantViolation {
        /// The motif hash whose correction failed.
        motif_hash: String,
        /// The raw (pre-correction) count.
        count: u64,
        /// The expected number of edges in that motif.
        edges_in_motif: u64,
    },
    /// The output directory could not be written to.
    #[error("cannot write to output directory {path}: {source}")]
    IOFailure {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeterogeneousMotifError>;
