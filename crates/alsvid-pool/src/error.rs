//! Error types for the pool protocol.

use alsvid_types::{OutputSet, TypeError};
use alsvid_wire::WireError;
use thiserror::Error;

/// Errors surfaced by a transport implementation.
///
/// All of them are fatal to the affected process: the protocol has no
/// retry or partial-rollback path once a transfer has started.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The peer rank does not name another process in the pool.
    #[error("invalid peer rank {rank} for a pool of {size} processes")]
    InvalidRank {
        /// The offending rank.
        rank: usize,
        /// Pool size.
        size: usize,
    },

    /// The peer's endpoint no longer exists.
    #[error("peer rank {rank} disconnected")]
    Disconnected {
        /// Rank of the vanished peer.
        rank: usize,
    },

    /// Failure inside an external transport backend.
    #[error("transport backend error: {0}")]
    Backend(String),
}

/// Errors produced by the reporting/aggregation protocol.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PoolError {
    /// The underlying transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A received buffer was malformed relative to its declared sizes.
    #[error("malformed wire payload: {0}")]
    Wire(#[from] WireError),

    /// Merging a decoded structure violated a data-model invariant.
    #[error("result merge failed: {0}")]
    Merge(#[from] TypeError),

    /// An envelope header had the wrong length.
    #[error("envelope header must be exactly one word, got {got}")]
    MalformedHeader {
        /// Words actually received.
        got: usize,
    },

    /// An envelope header carried bits naming no known output field.
    #[error("unknown output-set bits {0:#x} in envelope header")]
    UnknownOutputBits(u64),

    /// A worker was configured with a different output set than the
    /// supervisor.
    #[error("worker {rank} reported output set {got:?}, supervisor expects {expected:?}")]
    OutputSetMismatch {
        /// Rank of the mismatched worker.
        rank: usize,
        /// The supervisor's own output set.
        expected: OutputSet,
        /// The set the worker announced.
        got: OutputSet,
    },

    /// A dense field from a worker had the wrong length.
    #[error("worker {rank} sent {field} with {got} entries, expected {expected}")]
    DenseLengthMismatch {
        /// Rank of the offending worker.
        rank: usize,
        /// Which dense field disagreed.
        field: &'static str,
        /// Entry count on the supervisor's side.
        expected: usize,
        /// Entry count received.
        got: usize,
    },

    /// A gradient matrix from a worker had the wrong shape.
    #[error("worker {rank} sent a {got:?} gradient matrix, expected {expected:?}")]
    GradientShapeMismatch {
        /// Rank of the offending worker.
        rank: usize,
        /// Shape on the supervisor's side (rows, cols).
        expected: (usize, usize),
        /// Shape received.
        got: (usize, usize),
    },

    /// The external shot executor failed.
    #[error("shot executor failed: {0}")]
    Executor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for pool protocol operations.
pub type PoolResult<T> = Result<T, PoolError>;
