//! `alsvid-pool` — distributing a fixed shot budget across a process pool.
//!
//! A pool is a fixed set of cooperating processes identified by 0-based
//! ranks. Rank 0 is the supervisor; every other rank is a worker. A run
//! has three phases:
//!
//! 1. **Partition** — [`shots_for_process`] gives every rank its quota of
//!    the total shot count. The supervisor gets the (tied-)minimum quota,
//!    since it also pays for collection.
//! 2. **Execute** — every rank, supervisor included, runs its quota
//!    through an external [`ShotExecutor`].
//! 3. **Aggregate** — workers send their packed partial results to the
//!    supervisor ([`report_to_supervisor`]); the supervisor receives from
//!    each worker rank in ascending order and merges
//!    ([`collect_from_workers`]): histogram counts are summed,
//!    probabilities and gradients combine as a shot-weighted mixture.
//!
//! [`run_pool`] ties the phases together for one process. Communication
//! goes through the [`Transport`] trait — blocking point-to-point
//! send/receive only, no collectives — with [`LocalPool`] providing an
//! in-process implementation for tests and single-host pools.
//!
//! # Example: a pool of threads
//!
//! ```rust
//! use alsvid_pool::{run_pool, LocalPool, ShotExecutor};
//! use alsvid_types::{BitString, Counts, ExecutionOutputs};
//! use std::thread;
//!
//! /// Toy executor: every shot lands on the all-zeros outcome.
//! struct ZeroExecutor {
//!     bits: usize,
//! }
//!
//! impl ShotExecutor for ZeroExecutor {
//!     type Error = std::convert::Infallible;
//!
//!     fn execute(&mut self, shots: u32) -> Result<ExecutionOutputs, Self::Error> {
//!         let mut counts = Counts::new(self.bits);
//!         if shots > 0 {
//!             counts.add(BitString::new(vec![false; self.bits]), shots).unwrap();
//!         }
//!         Ok(ExecutionOutputs::new(counts))
//!     }
//! }
//!
//! let handles: Vec<_> = LocalPool::endpoints(3)
//!     .into_iter()
//!     .map(|transport| {
//!         thread::spawn(move || {
//!             run_pool(&transport, &mut ZeroExecutor { bits: 2 }, 10).unwrap()
//!         })
//!     })
//!     .collect();
//!
//! let merged = handles
//!     .into_iter()
//!     .filter_map(|h| h.join().unwrap())
//!     .next()
//!     .expect("the supervisor returns the merged results");
//! assert_eq!(merged.counts.total(), 10);
//! ```

pub mod collect;
pub mod envelope;
pub mod error;
pub mod executor;
pub mod local;
pub mod partition;
pub mod report;
pub mod run;
pub mod transport;

pub use collect::collect_from_workers;
pub use error::{PoolError, PoolResult, TransportError};
pub use executor::ShotExecutor;
pub use local::{LocalPool, LocalTransport};
pub use partition::{quotas, shots_for_process};
pub use report::report_to_supervisor;
pub use run::run_pool;
pub use transport::Transport;

/// Rank of the designated supervisor process.
pub const SUPERVISOR_RANK: usize = 0;
