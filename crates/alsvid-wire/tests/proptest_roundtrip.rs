//! Property-based round-trip tests for the wire codec.

use alsvid_types::{BitString, Counts};
use alsvid_wire::{
    pack_counts, pack_dense_counts, pack_gradients, unpack_counts, unpack_dense_counts,
    unpack_gradients,
};
use ndarray::Array2;
use proptest::prelude::*;

/// Generate a histogram with a uniform key width and 0–32 distinct keys.
fn arb_counts() -> impl Strategy<Value = Counts> {
    (1usize..=70).prop_flat_map(|width| {
        prop::collection::btree_map(
            prop::collection::vec(any::<bool>(), width),
            1u32..=100_000,
            0..32,
        )
        .prop_map(move |entries| {
            let mut counts = Counts::new(width);
            for (bits, count) in entries {
                counts.add(BitString::new(bits), count).unwrap();
            }
            counts
        })
    })
}

/// Generate a rectangular gradient matrix.
fn arb_gradients() -> impl Strategy<Value = Array2<f64>> {
    (1usize..=8, 1usize..=16).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1e3f64..1e3, rows * cols)
            .prop_map(move |values| Array2::from_shape_vec((rows, cols), values).unwrap())
    })
}

proptest! {
    #[test]
    fn counts_round_trip(counts in arb_counts()) {
        let decoded = unpack_counts(&pack_counts(&counts)).unwrap();
        prop_assert_eq!(decoded, counts);
    }

    #[test]
    fn gradients_round_trip(g in arb_gradients()) {
        let decoded = unpack_gradients(&pack_gradients(&g)).unwrap();
        prop_assert_eq!(decoded, g);
    }

    #[test]
    fn dense_counts_round_trip(values in prop::collection::vec(any::<u32>(), 0..256)) {
        let decoded = unpack_dense_counts(&pack_dense_counts(&values)).unwrap();
        prop_assert_eq!(decoded, values);
    }

    /// Cutting into the final entry of a histogram buffer yields an error,
    /// never a silently different histogram. (Cuts of one or two words can
    /// never remove a whole entry, which is at least three words.)
    #[test]
    fn truncation_never_decodes(counts in arb_counts(), cut in 1usize..=2) {
        let buf = pack_counts(&counts);
        prop_assume!(!buf.is_empty());
        prop_assert!(unpack_counts(&buf[..buf.len() - cut]).is_err());
    }
}
