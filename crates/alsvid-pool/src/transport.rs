//! The transport contract the pool protocol is written against.

use crate::error::TransportError;

/// Point-to-point transport between the processes of a pool.
///
/// This is the entire surface the protocol requires: rank/size enumeration
/// and blocking transfer of `u64` buffers between two processes. No
/// collective primitive (broadcast, reduce, all-to-all) is assumed.
///
/// # Semantics
///
/// Both transfer methods are rendezvous operations: [`send`](Self::send)
/// blocks until the destination consumes the buffer and
/// [`recv`](Self::recv) blocks until the named source sends one. The
/// supervisor's strictly rank-ordered receive loop therefore acts as an
/// implicit barrier — a worker that finishes early simply blocks in `send`
/// until its turn.
///
/// # Lifecycle
///
/// Implementations tie resource acquisition to construction and release to
/// `Drop`, not to process-exit hooks: dropping an endpoint must cause
/// peers blocked on it to fail with [`TransportError::Disconnected`]
/// rather than hang.
pub trait Transport {
    /// This process's 0-based rank within the pool.
    fn rank(&self) -> usize;

    /// Number of processes in the pool.
    fn size(&self) -> usize;

    /// Deliver `buffer` to `dest`, blocking until it is consumed.
    ///
    /// Zero-length buffers are valid transfers (an empty histogram is an
    /// empty buffer).
    fn send(&self, dest: usize, buffer: &[u64]) -> Result<(), TransportError>;

    /// Block until `source` sends a buffer, and return it.
    fn recv(&self, source: usize) -> Result<Vec<u64>, TransportError>;
}
