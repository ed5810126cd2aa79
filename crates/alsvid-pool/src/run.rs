//! One distributed run, seen from a single pool member.

use alsvid_types::ExecutionOutputs;

use crate::collect::collect_from_workers;
use crate::error::{PoolError, PoolResult};
use crate::executor::ShotExecutor;
use crate::partition::shots_for_process;
use crate::report::report_to_supervisor;
use crate::transport::Transport;
use crate::SUPERVISOR_RANK;

/// Execute this process's share of `total_shots` and take part in the
/// aggregation protocol.
///
/// Every rank (the supervisor included) executes its own quota locally.
/// Workers then report their partial results and return `None`; the
/// supervisor collects every worker's report in ascending rank order and
/// returns the merged result set.
pub fn run_pool<T, E>(
    transport: &T,
    executor: &mut E,
    total_shots: u32,
) -> PoolResult<Option<ExecutionOutputs>>
where
    T: Transport,
    E: ShotExecutor,
{
    let rank = transport.rank();
    let size = transport.size();
    let quota = shots_for_process(size, total_shots, rank);
    tracing::debug!(rank, size, total_shots, quota, "executing local shot quota");

    let outputs = executor
        .execute(quota)
        .map_err(|e| PoolError::Executor(Box::new(e)))?;

    if rank == SUPERVISOR_RANK {
        let merged = collect_from_workers(transport, total_shots, quota, outputs)?;
        tracing::debug!(total = merged.counts.total(), "pool run merged");
        Ok(Some(merged))
    } else {
        report_to_supervisor(transport, SUPERVISOR_RANK, &outputs)?;
        Ok(None)
    }
}
