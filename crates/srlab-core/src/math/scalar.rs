//! Scalar helpers shared by every color stage

/// One full turn in radians
pub const TAU: f64 = std::f64::consts::TAU;

/// General float tolerance
pub const EPSILON: f32 = 0.000001;

/// Chroma below which a color is treated as gray
///
/// Compared as `a² + b² < CHROMA_EPSILON²`.
pub const CHROMA_EPSILON: f32 = 0.00005;

/// Clamp to [0, 1]; NaN maps to 0
#[inline]
pub fn clamp01(x: f32) -> f32 {
    // f32::max returns the non-NaN operand
    x.max(0.0).min(1.0)
}

/// Wrap into [0, 1)
///
/// Values whose fractional part rounds up to 1.0 in f32 (tiny negatives)
/// return 0.0. Non-finite input returns 0.0.
#[inline]
pub fn mod1(x: f32) -> f32 {
    let r = x - x.floor();
    if r.is_nan() || r >= 1.0 { 0.0 } else { r }
}

/// Linear interpolation `(1 - t) * a + t * b`
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}
