//! Error types for the result data model.

use thiserror::Error;

use crate::bitstring::BitString;

/// Errors produced by the result data model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TypeError {
    /// A key of the wrong width was offered to a fixed-width histogram.
    #[error("bit-string width mismatch: histogram holds {expected}-bit keys, got {got}")]
    WidthMismatch {
        /// Key width the histogram was created with.
        expected: usize,
        /// Width of the offending key.
        got: usize,
    },

    /// A basis-state index does not fit in the requested bit width.
    #[error("basis index {index} does not fit in {width} bits")]
    BasisIndexOutOfRange {
        /// The offending index.
        index: u64,
        /// Requested bit-string width.
        width: usize,
    },

    /// Accumulating a count pushed an outcome past the 32-bit range.
    #[error("count for outcome {key} overflows the 32-bit count range")]
    CountOverflow {
        /// The outcome whose count overflowed.
        key: BitString,
    },

    /// A bit string was parsed from text containing a character other
    /// than '0' or '1'.
    #[error("invalid bit character {0:?}, expected '0' or '1'")]
    InvalidBit(char),
}

/// Result type for data-model operations.
pub type TypeResult<T> = Result<T, TypeError>;
