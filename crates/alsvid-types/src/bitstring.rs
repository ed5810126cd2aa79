//! Fixed-length measurement outcomes.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TypeError, TypeResult};

/// One measurement outcome: an ordered, fixed-length sequence of booleans.
///
/// Index 0 is the protocol-wide reference bit. It is rendered leftmost by
/// [`Display`](fmt::Display) and is the most significant bit of the
/// basis-state index, so the derived lexicographic ordering of bit strings
/// matches the numeric ordering of their basis indices.
///
/// The length equals the number of classical bits in the circuit under test
/// and is constant across every key of a given [`Counts`](crate::Counts)
/// histogram.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitString(Vec<bool>);

impl BitString {
    /// Create a bit string from its bits, index 0 first.
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// Build the `width`-bit string whose basis-state index is `index`.
    ///
    /// Returns [`TypeError::BasisIndexOutOfRange`] if `index` needs more
    /// than `width` bits.
    pub fn from_basis_index(index: u64, width: usize) -> TypeResult<Self> {
        if width < u64::BITS as usize && index >> width != 0 {
            return Err(TypeError::BasisIndexOutOfRange { index, width });
        }
        let bits = (0..width)
            .map(|i| {
                let shift = width - 1 - i;
                shift < u64::BITS as usize && (index >> shift) & 1 == 1
            })
            .collect();
        Ok(Self(bits))
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the string has no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the bits in order, index 0 first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Interpret the bits as a basis-state index, bit 0 most significant.
    ///
    /// Returns `None` for strings wider than 64 bits, whose index does not
    /// fit a `u64`.
    pub fn basis_index(&self) -> Option<u64> {
        if self.0.len() > u64::BITS as usize {
            return None;
        }
        Some(self.0.iter().fold(0u64, |acc, &b| (acc << 1) | u64::from(b)))
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        Self(bits.to_vec())
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(TypeError::InvalidBit(other)),
            })
            .collect::<TypeResult<Vec<bool>>>()
            .map(Self)
    }
}

// Serialized as the "0101" text form so histograms keyed by bit strings
// stay valid JSON maps.
impl Serialize for BitString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
