//! Sparse histogram codec.
//!
//! Layout (all elements are `u64` wire words):
//!
//! ```text
//! [ bits_per_key ]
//! repeated once per (key, count) entry, in sorted key order:
//!   [ chunk_count ] [ chunk_0 ] … [ chunk_{chunk_count-1} ] [ count ]
//! ```
//!
//! Chunks pack key bits MSB-first, index 0 first: `acc = acc << 1 | bit`.
//! A partial final chunk occupies the low bits of its word.
//! `chunk_count = ceil(bits_per_key / 64)`. An empty histogram packs to an
//! empty buffer; the absence of payload is itself the empty-map signal.

use alsvid_types::{BitString, Counts};

use crate::error::{WireError, WireResult};
use crate::WORD_BITS;

/// Pack a histogram into a wire buffer.
pub fn pack_counts(counts: &Counts) -> Vec<u64> {
    if counts.is_empty() {
        return Vec::new();
    }
    let bits = counts.num_bits();
    let chunks = bits.div_ceil(WORD_BITS);
    let mut buf = Vec::with_capacity(1 + counts.len() * (2 + chunks));
    buf.push(bits as u64);
    for (key, count) in counts.iter() {
        buf.push(chunks as u64);
        let mut acc = 0u64;
        let mut filled = 0;
        for bit in key.bits() {
            acc = (acc << 1) | u64::from(bit);
            filled += 1;
            if filled == WORD_BITS {
                buf.push(acc);
                acc = 0;
                filled = 0;
            }
        }
        if filled > 0 {
            buf.push(acc);
        }
        buf.push(u64::from(count));
    }
    buf
}

/// Unpack a histogram from a wire buffer.
///
/// The exact inverse of [`pack_counts`]. An empty buffer decodes to an
/// empty histogram. Any inconsistency between the declared sizes and the
/// buffer length is a [`WireError`].
pub fn unpack_counts(buf: &[u64]) -> WireResult<Counts> {
    if buf.is_empty() {
        return Ok(Counts::new(0));
    }
    let bits = buf[0] as usize;
    let expected_chunks = bits.div_ceil(WORD_BITS);
    // pack_counts never emits a header without entries: the empty
    // histogram is the zero-length buffer.
    if buf.len() == 1 {
        return Err(WireError::Truncated {
            offset: 1,
            needed: expected_chunks + 2,
            left: 0,
        });
    }
    let mut counts = Counts::new(bits);
    let mut offset = 1;
    while offset < buf.len() {
        let declared = buf[offset] as usize;
        if declared != expected_chunks {
            return Err(WireError::ChunkCountMismatch {
                bits,
                expected: expected_chunks,
                got: declared,
            });
        }
        // chunk words plus the trailing count
        let needed = declared + 1;
        let left = buf.len() - offset - 1;
        if needed > left {
            return Err(WireError::Truncated {
                offset,
                needed,
                left,
            });
        }
        offset += 1;

        let mut key_bits = Vec::with_capacity(bits);
        let mut remaining = bits;
        for chunk_index in 0..declared {
            let word = buf[offset + chunk_index];
            let take = remaining.min(WORD_BITS);
            for shift in (0..take).rev() {
                key_bits.push((word >> shift) & 1 == 1);
            }
            remaining -= take;
        }
        offset += declared;

        let raw_count = buf[offset];
        offset += 1;
        let count =
            u32::try_from(raw_count).map_err(|_| WireError::CountOverflow(raw_count))?;
        counts.add(BitString::new(key_bits), count)?;
    }
    Ok(counts)
}
