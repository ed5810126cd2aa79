//! Supervisor-side collection: receive every worker's report and merge.

use alsvid_types::{ExecutionOutputs, OutputSet};
use alsvid_wire::{unpack_counts, unpack_dense_counts, unpack_gradients, unpack_probabilities};

use crate::envelope;
use crate::error::{PoolError, PoolResult};
use crate::partition::shots_for_process;
use crate::transport::Transport;
use crate::SUPERVISOR_RANK;

/// Collect and merge every worker's partial results into the supervisor's.
///
/// Seeds the merge with the supervisor's own outputs, then blocks on each
/// worker rank in strictly ascending order — never concurrently, never out
/// of order. Per field:
///
/// - histograms (corrected and native): key union, counts summed;
/// - dense counts: elementwise sum;
/// - probabilities and gradients: each process's values weighted by its
///   shot fraction (`process_shots / total_shots`) and summed, giving the
///   shot-weighted mixture. The supervisor's own values enter the mixture
///   with weight `own_shots / total_shots`. The rule is also safe when an
///   executor computes these analytically: weighted averaging of identical
///   values leaves them unchanged.
///
/// Worker quotas are recomputed from the partitioner, which is
/// deterministic and shared by every rank.
///
/// A worker whose announced output set differs from the supervisor's, or
/// whose payload is malformed, aborts collection with an error; there is
/// no partial-recovery mode. A worker that never reports leaves this call
/// blocked — the protocol has no timeout.
pub fn collect_from_workers<T: Transport>(
    transport: &T,
    total_shots: u32,
    own_shots: u32,
    own_outputs: ExecutionOutputs,
) -> PoolResult<ExecutionOutputs> {
    debug_assert_eq!(
        transport.rank(),
        SUPERVISOR_RANK,
        "only the supervisor collects"
    );
    let expected = own_outputs.output_set();
    let size = transport.size();
    let mut merged = own_outputs;

    // Seed: the mixture fields enter pre-weighted by the supervisor's own
    // shot fraction.
    let own_weight = shot_weight(own_shots, total_shots);
    if let Some(probs) = merged.out_probs.as_mut() {
        for p in probs.iter_mut() {
            *p *= own_weight;
        }
    }
    if let Some(gradients) = merged.prob_gradients.as_mut() {
        gradients.mapv_inplace(|v| v * own_weight);
    }

    for rank in 1..size {
        tracing::debug!(rank, "waiting for worker report");
        let set = envelope::decode(&transport.recv(rank)?)?;
        if set != expected {
            return Err(PoolError::OutputSetMismatch {
                rank,
                expected,
                got: set,
            });
        }
        let worker_shots = shots_for_process(size, total_shots, rank);
        let weight = shot_weight(worker_shots, total_shots);

        let counts = unpack_counts(&transport.recv(rank)?)?;
        merged.counts.merge(&counts)?;

        if set.contains(OutputSet::NATIVE_COUNTS) {
            let native = unpack_counts(&transport.recv(rank)?)?;
            if let Some(acc) = merged.native_counts.as_mut() {
                acc.merge(&native)?;
            }
        }

        if set.contains(OutputSet::OUT_COUNTS) {
            let dense = unpack_dense_counts(&transport.recv(rank)?)?;
            if let Some(acc) = merged.out_counts.as_mut() {
                if dense.len() != acc.len() {
                    return Err(PoolError::DenseLengthMismatch {
                        rank,
                        field: "out_counts",
                        expected: acc.len(),
                        got: dense.len(),
                    });
                }
                for (a, v) in acc.iter_mut().zip(&dense) {
                    *a += v;
                }
            }
        }

        if set.contains(OutputSet::OUT_PROBS) {
            let probs = unpack_probabilities(&transport.recv(rank)?);
            if let Some(acc) = merged.out_probs.as_mut() {
                if probs.len() != acc.len() {
                    return Err(PoolError::DenseLengthMismatch {
                        rank,
                        field: "out_probs",
                        expected: acc.len(),
                        got: probs.len(),
                    });
                }
                for (a, v) in acc.iter_mut().zip(&probs) {
                    *a += v * weight;
                }
            }
        }

        if set.contains(OutputSet::PROB_GRADIENTS) {
            let gradients = unpack_gradients(&transport.recv(rank)?)?;
            if let Some(acc) = merged.prob_gradients.as_mut() {
                if gradients.dim() != acc.dim() {
                    return Err(PoolError::GradientShapeMismatch {
                        rank,
                        expected: acc.dim(),
                        got: gradients.dim(),
                    });
                }
                acc.zip_mut_with(&gradients, |a, &v| *a += v * weight);
            }
        }

        tracing::debug!(rank, worker_shots, "merged worker report");
    }

    let merged_total = merged.counts.total();
    if merged_total != u64::from(total_shots) {
        tracing::warn!(
            merged_total,
            total_shots,
            "merged histogram total does not match the requested shot count"
        );
    }
    Ok(merged)
}

/// A process's weight in the probability/gradient mixture.
fn shot_weight(shots: u32, total_shots: u32) -> f64 {
    if total_shots == 0 {
        0.0
    } else {
        f64::from(shots) / f64::from(total_shots)
    }
}
