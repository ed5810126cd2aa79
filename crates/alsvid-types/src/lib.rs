//! `alsvid-types` — result data model for distributed shot sampling.
//!
//! The types a pool of cooperating processes produces and merges when a
//! fixed total number of shots is split across the pool:
//!
//! - [`BitString`] — one measurement outcome, fixed width, index 0 is the
//!   protocol-wide reference bit.
//! - [`Counts`] — sparse outcome histogram with a fixed key width.
//! - [`ExecutionOutputs`] — one process's partial results: the histogram
//!   plus the optional native histogram, dense counts, probabilities, and
//!   probability gradients.
//! - [`OutputSet`] — bitmask describing which optional fields a process
//!   emits; every rank in a pool must use the same set.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_types::{BitString, Counts};
//!
//! let mut counts = Counts::new(2);
//! counts.add("00".parse()?, 5)?;
//! counts.add("11".parse()?, 3)?;
//! assert_eq!(counts.total(), 8);
//!
//! let (top, n) = counts.most_frequent().unwrap();
//! assert_eq!((top.to_string().as_str(), n), ("00", 5));
//! # Ok::<(), alsvid_types::TypeError>(())
//! ```

pub mod bitstring;
pub mod counts;
pub mod error;
pub mod outputs;

pub use bitstring::BitString;
pub use counts::Counts;
pub use error::{TypeError, TypeResult};
pub use outputs::{ExecutionOutputs, OutputSet};
