//! Sparse shot-outcome histograms.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bitstring::BitString;
use crate::error::{TypeError, TypeResult};

/// Sparse histogram of shot outcomes: [`BitString`] → occurrence count.
///
/// Every key has the same fixed width, set at construction. Keys iterate in
/// sorted order (the map is a `BTreeMap`), which is also the order the wire
/// codec emits entries in.
///
/// Invariant for a histogram produced by one process: the counts sum to that
/// process's shot quota.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Counts {
    num_bits: usize,
    entries: BTreeMap<BitString, u32>,
}

impl Counts {
    /// Create an empty histogram for `num_bits`-bit keys.
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            entries: BTreeMap::new(),
        }
    }

    /// Key width in bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add `count` occurrences of `key`, creating the entry if needed.
    ///
    /// Returns [`TypeError::WidthMismatch`] if the key width differs from
    /// the histogram's, and [`TypeError::CountOverflow`] if the entry's
    /// count would leave the 32-bit range — a histogram never silently
    /// wraps, since a wrapped count would corrupt the merged totals.
    pub fn add(&mut self, key: BitString, count: u32) -> TypeResult<()> {
        if key.len() != self.num_bits {
            return Err(TypeError::WidthMismatch {
                expected: self.num_bits,
                got: key.len(),
            });
        }
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let summed = occupied.get().checked_add(count).ok_or_else(|| {
                    TypeError::CountOverflow {
                        key: occupied.key().clone(),
                    }
                })?;
                *occupied.get_mut() = summed;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(count);
            }
        }
        Ok(())
    }

    /// Record a single occurrence of `key`.
    pub fn record(&mut self, key: BitString) -> TypeResult<()> {
        self.add(key, 1)
    }

    /// Count recorded for `key`, zero if absent.
    pub fn get(&self, key: &BitString) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }

    /// Iterate `(key, count)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&BitString, u32)> {
        self.entries.iter().map(|(k, &c)| (k, c))
    }

    /// Sum of all counts. Equals the producing process's shot quota for a
    /// single-process histogram, or the pool's total after a full merge.
    pub fn total(&self) -> u64 {
        self.entries.values().map(|&c| u64::from(c)).sum()
    }

    /// The outcome with the highest count, if any.
    pub fn most_frequent(&self) -> Option<(&BitString, u32)> {
        self.entries
            .iter()
            .max_by_key(|&(_, &c)| c)
            .map(|(k, &c)| (k, c))
    }

    /// Fold `other` into `self`: union of keys, counts summed per key.
    ///
    /// Merging an empty histogram is a no-op; merging into an empty
    /// histogram adopts the other's key width. Otherwise the widths must
    /// match. On a [`TypeError::CountOverflow`] the histogram may hold a
    /// partial merge — merge failures are fatal protocol errors, never
    /// recovered from.
    pub fn merge(&mut self, other: &Counts) -> TypeResult<()> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            self.num_bits = other.num_bits;
        } else if self.num_bits != other.num_bits {
            return Err(TypeError::WidthMismatch {
                expected: self.num_bits,
                got: other.num_bits,
            });
        }
        for (key, &count) in &other.entries {
            self.add(key.clone(), count)?;
        }
        Ok(())
    }
}

// Two empty histograms compare equal regardless of declared width: an empty
// histogram decoded off the wire carries no width information.
impl PartialEq for Counts {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
            && (self.entries.is_empty() || self.num_bits == other.num_bits)
    }
}
