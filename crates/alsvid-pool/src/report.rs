//! Worker-side reporting: pack and send partial results to the supervisor.

use alsvid_types::ExecutionOutputs;
use alsvid_wire::{pack_counts, pack_dense_counts, pack_gradients, pack_probabilities};

use crate::envelope;
use crate::error::PoolResult;
use crate::transport::Transport;

/// Send this process's partial results to the supervisor.
///
/// Opens with the envelope header, then sends each enabled field in the
/// fixed protocol order: corrected histogram, native histogram, dense
/// counts, probabilities, gradients. Every send is a blocking rendezvous,
/// so this call returns only once the supervisor has consumed the whole
/// report — the supervisor's rank-ordered collection loop makes that an
/// implicit barrier for workers that finish early.
pub fn report_to_supervisor<T: Transport>(
    transport: &T,
    supervisor_rank: usize,
    outputs: &ExecutionOutputs,
) -> PoolResult<()> {
    let set = outputs.output_set();
    tracing::debug!(
        rank = transport.rank(),
        supervisor = supervisor_rank,
        output_set = ?set,
        shots = outputs.counts.total(),
        "reporting partial results"
    );

    transport.send(supervisor_rank, &envelope::encode(set))?;
    transport.send(supervisor_rank, &pack_counts(&outputs.counts))?;
    if let Some(native) = &outputs.native_counts {
        transport.send(supervisor_rank, &pack_counts(native))?;
    }
    if let Some(out_counts) = &outputs.out_counts {
        transport.send(supervisor_rank, &pack_dense_counts(out_counts))?;
    }
    if let Some(probs) = &outputs.out_probs {
        transport.send(supervisor_rank, &pack_probabilities(probs))?;
    }
    if let Some(gradients) = &outputs.prob_gradients {
        transport.send(supervisor_rank, &pack_gradients(gradients))?;
    }

    tracing::trace!(rank = transport.rank(), "report consumed by supervisor");
    Ok(())
}
