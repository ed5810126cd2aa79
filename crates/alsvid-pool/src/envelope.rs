//! Report envelope: the one-word header announcing a report's field set.
//!
//! The wire layout of the individual fields has no type tags, so both
//! sides must agree on which optional fields follow the histogram. Rather
//! than leaving that agreement implicit in out-of-band configuration, every
//! report opens with this header; the supervisor checks it against its own
//! output set and fails fast on drift instead of misreading the stream.

use alsvid_types::OutputSet;

use crate::error::{PoolError, PoolResult};

/// Encode the header announcing `set`.
pub fn encode(set: OutputSet) -> Vec<u64> {
    vec![u64::from(set.bits())]
}

/// Decode a header, rejecting wrong lengths and unknown flag bits.
pub fn decode(buf: &[u64]) -> PoolResult<OutputSet> {
    if buf.len() != 1 {
        return Err(PoolError::MalformedHeader { got: buf.len() });
    }
    u8::try_from(buf[0])
        .ok()
        .and_then(OutputSet::from_bits)
        .ok_or(PoolError::UnknownOutputBits(buf[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let set = OutputSet::OUT_PROBS | OutputSet::PROB_GRADIENTS;
        assert_eq!(decode(&encode(set)).unwrap(), set);
        assert_eq!(decode(&encode(OutputSet::empty())).unwrap(), OutputSet::empty());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(decode(&[]), Err(PoolError::MalformedHeader { got: 0 })));
        assert!(matches!(
            decode(&[0, 0]),
            Err(PoolError::MalformedHeader { got: 2 })
        ));
    }

    #[test]
    fn unknown_bits_are_rejected() {
        assert!(matches!(
            decode(&[1 << 60]),
            Err(PoolError::UnknownOutputBits(_))
        ));
        assert!(matches!(
            decode(&[0b10000]),
            Err(PoolError::UnknownOutputBits(0b10000))
        ));
    }
}
