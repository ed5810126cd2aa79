//! Shot-count partitioning across a process pool.

use crate::SUPERVISOR_RANK;

/// Shot quota for one process in a pool.
///
/// `base = total_shots / pool_size` with `remainder = total_shots mod
/// pool_size`. The supervisor always receives exactly `base`: it already
/// carries the synchronization cost of collecting and merging every
/// worker's report, so giving it no extra shots keeps it from also being
/// the slowest to finish. The remainder is handed out round-robin over the
/// worker ranks in ascending order; `remainder < pool_size` always holds,
/// so the round-robin never actually wraps.
///
/// Pure arithmetic, total over `pool_size >= 1`, `rank < pool_size`:
/// quotas sum to `total_shots`, differ by at most 1 across the pool, and a
/// quota of 0 is legitimate when `total_shots < pool_size`.
pub fn shots_for_process(pool_size: usize, total_shots: u32, rank: usize) -> u32 {
    debug_assert!(pool_size >= 1, "pool must contain at least one process");
    debug_assert!(rank < pool_size, "rank {rank} outside pool of {pool_size}");
    if pool_size <= 1 {
        return total_shots;
    }
    let base = total_shots / pool_size as u32;
    let remainder = total_shots % pool_size as u32;
    if rank == SUPERVISOR_RANK {
        return base;
    }
    let workers = (pool_size - 1) as u32;
    let worker_index = (rank - 1) as u32;
    base + remainder / workers + u32::from(worker_index < remainder % workers)
}

/// Every process's quota, indexed by rank.
pub fn quotas(pool_size: usize, total_shots: u32) -> Vec<u32> {
    (0..pool_size)
        .map(|rank| shots_for_process(pool_size, total_shots, rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_processes_ten_shots() {
        // base = 3, remainder = 1: the extra shot goes to rank 1.
        assert_eq!(quotas(3, 10), vec![3, 4, 3]);
    }

    #[test]
    fn single_process_takes_everything() {
        assert_eq!(shots_for_process(1, 10, 0), 10);
        assert_eq!(shots_for_process(1, 0, 0), 0);
    }

    #[test]
    fn exact_division_gives_equal_quotas() {
        assert_eq!(quotas(4, 12), vec![3, 3, 3, 3]);
    }

    #[test]
    fn fewer_shots_than_processes() {
        // base = 0: the supervisor legitimately runs zero shots.
        assert_eq!(quotas(4, 2), vec![0, 1, 1, 0]);
    }

    #[test]
    fn remainder_fills_every_worker() {
        // remainder = pool_size - 1: every worker gets one extra.
        assert_eq!(quotas(4, 7), vec![1, 2, 2, 2]);
    }

    #[test]
    fn zero_shots_means_zero_everywhere() {
        assert_eq!(quotas(5, 0), vec![0; 5]);
    }
}
