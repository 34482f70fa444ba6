//! sRGB gamma companding
//!
//! Per-channel transfer functions between gamma-encoded sRGB and
//! linear light. Constants are the IEC 61966-2-1 values with the
//! divisions folded into reciprocals, evaluated in f64 and stored as f32.

/// `1 / 12.92`
const INV_12_92: f64 = 0.07739938080495357;
/// `1 / 1.055`
const INV_1_055: f64 = 0.9478672985781991;
/// `1 / 2.4`
const INV_2_4: f64 = 0.4166666666666667;

/// sRGB gamma decode, kept in f64 for callers that weight channels before
/// rounding
#[inline]
pub(crate) fn srgb_to_linear_f64(c: f32) -> f64 {
    if c <= 0.04045 {
        c as f64 * INV_12_92
    } else {
        ((c as f64 + 0.055) * INV_1_055).powf(2.4)
    }
}

/// sRGB gamma decode (encoded → linear)
///
/// Defined for every real input: values at or below the knee take the
/// linear segment, so negatives never reach `powf`.
#[inline]
pub fn srgb_to_linear_channel(c: f32) -> f32 {
    srgb_to_linear_f64(c) as f32
}

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn linear_to_srgb_channel(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        ((c as f64).powf(INV_2_4) * 1.055 - 0.055) as f32
    }
}
