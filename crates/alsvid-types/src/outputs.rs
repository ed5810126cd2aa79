//! Per-process execution outputs and the output-set descriptor.

use std::fmt;
use std::ops::BitOr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::counts::Counts;

/// Bitmask naming the optional output fields a process emits.
///
/// The corrected histogram is always emitted and has no flag. The mask is
/// the first word of every report envelope, so the supervisor can verify
/// that a worker was configured with the same output set instead of
/// silently misreading the field stream.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputSet(u8);

impl OutputSet {
    /// Raw, non-SPAM-corrected histogram.
    pub const NATIVE_COUNTS: OutputSet = OutputSet(1);
    /// Dense per-basis-state counts.
    pub const OUT_COUNTS: OutputSet = OutputSet(1 << 1);
    /// Dense per-basis-state probabilities.
    pub const OUT_PROBS: OutputSet = OutputSet(1 << 2);
    /// Probability gradients, parameter × basis state.
    pub const PROB_GRADIENTS: OutputSet = OutputSet(1 << 3);

    const ALL: u8 = 0b1111;

    /// The set with no optional fields.
    pub const fn empty() -> Self {
        OutputSet(0)
    }

    /// True if every flag of `other` is enabled in `self`.
    pub const fn contains(self, other: OutputSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw mask value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Reconstruct a set from its raw mask, rejecting unknown bits.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL == 0 {
            Some(OutputSet(bits))
        } else {
            None
        }
    }
}

impl BitOr for OutputSet {
    type Output = OutputSet;

    fn bitor(self, rhs: OutputSet) -> OutputSet {
        OutputSet(self.0 | rhs.0)
    }
}

impl fmt::Debug for OutputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::NATIVE_COUNTS, "NATIVE_COUNTS"),
            (Self::OUT_COUNTS, "OUT_COUNTS"),
            (Self::OUT_PROBS, "OUT_PROBS"),
            (Self::PROB_GRADIENTS, "PROB_GRADIENTS"),
        ];
        let mut first = true;
        f.write_str("OutputSet(")?;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("empty")?;
        }
        f.write_str(")")
    }
}

/// One process's partial results for its shot quota.
///
/// All fields are transient: produced by one shot-batch execution,
/// serialized, transported, merged into the pool-wide result, and dropped.
/// Which optional fields are populated is fixed by the executor
/// configuration and must be identical on every rank of a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutputs {
    /// Outcome histogram (SPAM-corrected when correction is enabled).
    /// Counts sum to the producing process's shot quota.
    pub counts: Counts,
    /// Raw histogram, kept alongside the corrected one when enabled.
    pub native_counts: Option<Counts>,
    /// Dense counts, one entry per basis state (`2^n` entries).
    pub out_counts: Option<Vec<u32>>,
    /// Dense probabilities, one per basis state; sums to ≈1 per process.
    pub out_probs: Option<Vec<f64>>,
    /// d(probability)/d(parameter), rows = parameters, cols = basis states.
    pub prob_gradients: Option<Array2<f64>>,
}

impl ExecutionOutputs {
    /// Outputs carrying only the corrected histogram.
    pub fn new(counts: Counts) -> Self {
        Self {
            counts,
            native_counts: None,
            out_counts: None,
            out_probs: None,
            prob_gradients: None,
        }
    }

    /// Attach the raw histogram.
    pub fn with_native_counts(mut self, native: Counts) -> Self {
        self.native_counts = Some(native);
        self
    }

    /// Attach dense counts.
    pub fn with_out_counts(mut self, out_counts: Vec<u32>) -> Self {
        self.out_counts = Some(out_counts);
        self
    }

    /// Attach dense probabilities.
    pub fn with_out_probs(mut self, out_probs: Vec<f64>) -> Self {
        self.out_probs = Some(out_probs);
        self
    }

    /// Attach probability gradients.
    pub fn with_prob_gradients(mut self, gradients: Array2<f64>) -> Self {
        self.prob_gradients = Some(gradients);
        self
    }

    /// The output-set descriptor implied by the populated fields.
    pub fn output_set(&self) -> OutputSet {
        let mut set = OutputSet::empty();
        if self.native_counts.is_some() {
            set = set | OutputSet::NATIVE_COUNTS;
        }
        if self.out_counts.is_some() {
            set = set | OutputSet::OUT_COUNTS;
        }
        if self.out_probs.is_some() {
            set = set | OutputSet::OUT_PROBS;
        }
        if self.prob_gradients.is_some() {
            set = set | OutputSet::PROB_GRADIENTS;
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bits_rejects_unknown_flags() {
        assert!(OutputSet::from_bits(0b1111).is_some());
        assert!(OutputSet::from_bits(0b1_0000).is_none());
    }

    #[test]
    fn bits_round_trip() {
        let set = OutputSet::NATIVE_COUNTS | OutputSet::PROB_GRADIENTS;
        assert_eq!(OutputSet::from_bits(set.bits()), Some(set));
    }

    #[test]
    fn output_set_reflects_populated_fields() {
        let outputs = ExecutionOutputs::new(Counts::new(2))
            .with_out_probs(vec![0.5, 0.0, 0.0, 0.5]);
        assert_eq!(outputs.output_set(), OutputSet::OUT_PROBS);
    }

    #[test]
    fn outputs_round_trip_through_json() {
        use ndarray::array;

        let mut counts = Counts::new(2);
        counts.add("01".parse().unwrap(), 3).unwrap();
        counts.add("10".parse().unwrap(), 7).unwrap();
        let outputs = ExecutionOutputs::new(counts.clone())
            .with_native_counts(counts)
            .with_out_counts(vec![0, 3, 7, 0])
            .with_out_probs(vec![0.0, 0.3, 0.7, 0.0])
            .with_prob_gradients(array![[0.1, -0.2, 0.0, 0.4]]);

        let json = serde_json::to_string(&outputs).unwrap();
        let decoded: ExecutionOutputs = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, outputs);
    }

    #[test]
    fn counts_only_outputs_round_trip_through_json() {
        let outputs = ExecutionOutputs::new(Counts::new(3));
        let json = serde_json::to_string(&outputs).unwrap();
        let decoded: ExecutionOutputs = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, outputs);
        assert_eq!(decoded.output_set(), OutputSet::empty());
    }

    #[test]
    fn debug_lists_flag_names() {
        let set = OutputSet::NATIVE_COUNTS | OutputSet::OUT_PROBS;
        assert_eq!(format!("{set:?}"), "OutputSet(NATIVE_COUNTS | OUT_PROBS)");
        assert_eq!(format!("{:?}", OutputSet::empty()), "OutputSet(empty)");
    }
}
