//! `alsvid-wire` — flat integer wire codec for shot-sampling results.
//!
//! Pure, stateless conversions between the in-memory result types of
//! [`alsvid_types`] and transport-ready `u64` buffers. A buffer is the only
//! thing ever physically moved between processes; there is no envelope,
//! magic number, or checksum at this layer — framing belongs to the
//! transport and field identity to the pool protocol above.
//!
//! - [`pack_counts`] / [`unpack_counts`] — sparse histograms, in the
//!   chunked MSB-first layout documented in [`sparse`].
//! - [`pack_gradients`] / [`unpack_gradients`] — gradient matrices with a
//!   two-word shape header.
//! - [`pack_dense_counts`] / [`pack_probabilities`] and their inverses —
//!   headerless dense vectors.
//!
//! Decoding failures are unrecoverable protocol errors ([`WireError`]).

pub mod dense;
pub mod error;
pub mod sparse;

pub use dense::{
    pack_dense_counts, pack_gradients, pack_probabilities, unpack_dense_counts,
    unpack_gradients, unpack_probabilities,
};
pub use error::{WireError, WireResult};
pub use sparse::{pack_counts, unpack_counts};

/// Bits per wire word.
pub const WORD_BITS: usize = u64::BITS as usize;
