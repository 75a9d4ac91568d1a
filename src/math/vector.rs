//! Slice-level vector operations.
//!
//! These work on vectors of any length (Cartesian or homogeneous) and report
//! size mismatches instead of silently truncating. The fixed-size
//! [`Vec3`](super::vec3::Vec3) and [`Vec4`](super::vec4::Vec4) types cover the
//! hot path; these are the general kernel, and only [`norm`] is called from
//! the pipeline (through `Vec3::magnitude`).

use crate::error::{RenderError, Result};

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(RenderError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Cross product, defined only for 3-component vectors.
pub fn cross3(a: &[f32], b: &[f32]) -> Result<[f32; 3]> {
    for v in [a, b] {
        if v.len() != 3 {
            return Err(RenderError::DimensionMismatch {
                expected: 3,
                found: v.len(),
            });
        }
    }
    Ok([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// Euclidean length.
pub fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scales `v` to unit length.
///
/// Fails with [`RenderError::DegenerateVector`] when the norm is zero or not
/// finite, rather than producing NaN components.
pub fn normalize(v: &[f32]) -> Result<Vec<f32>> {
    let n = norm(v);
    if n == 0.0 || !n.is_finite() {
        return Err(RenderError::DegenerateVector("normalize"));
    }
    Ok(v.iter().map(|x| x / n).collect())
}
