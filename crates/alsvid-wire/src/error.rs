//! Error types for the wire codec.

use alsvid_types::TypeError;
use thiserror::Error;

/// Errors produced while decoding a wire buffer.
///
/// Every variant is a protocol error: the payload is malformed relative to
/// its declared sizes and the receiving process has no recovery path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WireError {
    /// The buffer ended before a declared entry was complete.
    #[error("wire buffer truncated: entry at word {offset} needs {needed} more words, {left} left")]
    Truncated {
        /// Word offset of the entry being decoded.
        offset: usize,
        /// Words the entry still required.
        needed: usize,
        /// Words remaining in the buffer.
        left: usize,
    },

    /// An entry declared a chunk count inconsistent with the key width.
    #[error("entry declares {got} key chunks but a {bits}-bit key needs {expected}")]
    ChunkCountMismatch {
        /// Key width from the buffer header.
        bits: usize,
        /// Chunk count implied by the key width.
        expected: usize,
        /// Chunk count the entry declared.
        got: usize,
    },

    /// A count value does not fit the 32-bit count range.
    #[error("count value {0} exceeds the 32-bit count range")]
    CountOverflow(u64),

    /// A gradient buffer's length contradicts its declared shape.
    #[error("gradient header declares {rows}x{cols} values but buffer holds {got}")]
    GradientShape {
        /// Declared outer (parameter) dimension.
        rows: usize,
        /// Declared inner (basis-state) dimension.
        cols: usize,
        /// Value words actually present.
        got: usize,
    },

    /// A decoded key violated a histogram invariant.
    #[error(transparent)]
    Key(#[from] TypeError),
}

/// Result type for wire codec operations.
pub type WireResult<T> = Result<T, WireError>;
