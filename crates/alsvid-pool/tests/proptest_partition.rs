//! Property-based tests for shot-count partitioning.

use alsvid_pool::{quotas, shots_for_process, SUPERVISOR_RANK};
use proptest::prelude::*;

proptest! {
    /// Quotas always sum to the requested total.
    #[test]
    fn partition_conserves_shots(pool_size in 1usize..=64, total in 0u32..=100_000) {
        let sum: u64 = quotas(pool_size, total).iter().map(|&q| u64::from(q)).sum();
        prop_assert_eq!(sum, u64::from(total));
    }

    /// No two quotas differ by more than one shot.
    #[test]
    fn partition_is_fair(pool_size in 1usize..=64, total in 0u32..=100_000) {
        let q = quotas(pool_size, total);
        let min = *q.iter().min().unwrap();
        let max = *q.iter().max().unwrap();
        prop_assert!(max - min <= 1);
    }

    /// The supervisor never carries more shots than any worker.
    #[test]
    fn supervisor_quota_is_tied_minimum(pool_size in 1usize..=64, total in 0u32..=100_000) {
        let q = quotas(pool_size, total);
        prop_assert_eq!(q[SUPERVISOR_RANK], *q.iter().min().unwrap());
    }

    /// Per-rank lookups agree with the full table.
    #[test]
    fn per_rank_lookup_matches_table(pool_size in 1usize..=32, total in 0u32..=10_000) {
        let table = quotas(pool_size, total);
        for (rank, &quota) in table.iter().enumerate() {
            prop_assert_eq!(shots_for_process(pool_size, total, rank), quota);
        }
    }
}
