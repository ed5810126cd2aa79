//! Dense output codecs: per-basis-state counts, probabilities, and
//! probability gradients.
//!
//! Dense vectors have no header: the transport's message boundary carries
//! the length. Gradients carry a two-word shape header,
//! `[rows, cols, row-major values…]`, because the 2D shape cannot be
//! recovered from the flat length alone. Floating-point values travel as
//! `f64::to_bits` words.

use ndarray::Array2;

use crate::error::{WireError, WireResult};

/// Pack dense per-basis-state counts.
pub fn pack_dense_counts(values: &[u32]) -> Vec<u64> {
    values.iter().map(|&v| u64::from(v)).collect()
}

/// Unpack dense per-basis-state counts, checking the 32-bit count range.
pub fn unpack_dense_counts(buf: &[u64]) -> WireResult<Vec<u32>> {
    buf.iter()
        .map(|&word| u32::try_from(word).map_err(|_| WireError::CountOverflow(word)))
        .collect()
}

/// Pack dense per-basis-state probabilities.
pub fn pack_probabilities(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}

/// Unpack dense per-basis-state probabilities.
pub fn unpack_probabilities(buf: &[u64]) -> Vec<f64> {
    buf.iter().map(|&word| f64::from_bits(word)).collect()
}

/// Pack a gradient matrix as `[rows, cols, row-major values…]`.
///
/// An empty matrix packs to an empty buffer.
pub fn pack_gradients(gradients: &Array2<f64>) -> Vec<u64> {
    if gradients.is_empty() {
        return Vec::new();
    }
    let mut buf = Vec::with_capacity(2 + gradients.len());
    buf.push(gradients.nrows() as u64);
    buf.push(gradients.ncols() as u64);
    buf.extend(gradients.iter().map(|v| v.to_bits()));
    buf
}

/// Unpack a gradient matrix.
///
/// Enforces `rows * cols + 2 == buffer length`; an empty buffer decodes to
/// a 0×0 matrix.
pub fn unpack_gradients(buf: &[u64]) -> WireResult<Array2<f64>> {
    if buf.is_empty() {
        return Ok(Array2::zeros((0, 0)));
    }
    if buf.len() < 2 {
        return Err(WireError::Truncated {
            offset: 0,
            needed: 2,
            left: buf.len(),
        });
    }
    let rows = buf[0] as usize;
    let cols = buf[1] as usize;
    let got = buf.len() - 2;
    let expected = rows
        .checked_mul(cols)
        .ok_or(WireError::GradientShape { rows, cols, got })?;
    if expected != got {
        return Err(WireError::GradientShape { rows, cols, got });
    }
    let values = buf[2..].iter().map(|&word| f64::from_bits(word)).collect();
    // Shape and length agree at this point, so construction cannot fail.
    Array2::from_shape_vec((rows, cols), values)
        .map_err(|_| WireError::GradientShape { rows, cols, got })
}
