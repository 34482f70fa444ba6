//! Batch sRGB companding
//!
//! Channel forms work on flat `f32` buffers, such as a `&[Rgb]` viewed
//! through `bytemuck::cast_slice`.

use multiversion::multiversion;
use tracing::trace;

use crate::color::Rgb;
use crate::convert::{linear_to_srgb, srgb_to_linear};
use crate::math::{linear_to_srgb_channel, srgb_to_linear_channel};

/// sRGB decode (encoded → linear) of every value
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_to_linear_f32_batch(input: &[f32], output: &mut [f32]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = srgb_to_linear_channel(*inp);
    }
}

/// sRGB encode (linear → encoded) of every value
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn linear_to_srgb_f32_batch(input: &[f32], output: &mut [f32]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = linear_to_srgb_channel(*inp);
    }
}

/// sRGB decode of a color buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_to_linear_batch(input: &[Rgb], output: &mut [Rgb], include_alpha: bool) {
    assert!(output.len() >= input.len());
    trace!(len = input.len(), include_alpha, "srgb_to_linear_batch");

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = srgb_to_linear(*inp, include_alpha);
    }
}

/// sRGB encode of a color buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn linear_to_srgb_batch(input: &[Rgb], output: &mut [Rgb], include_alpha: bool) {
    assert!(output.len() >= input.len());
    trace!(len = input.len(), include_alpha, "linear_to_srgb_batch");

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = linear_to_srgb(*inp, include_alpha);
    }
}
