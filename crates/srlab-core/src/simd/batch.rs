//! Batch conversions and mixing over color buffers

use multiversion::multiversion;
use tracing::trace;

use crate::color::{Lab, Lch, Rgb};
use crate::convert::{sr_lab2_to_srgb, sr_lch_to_srgb, srgb_to_sr_lab2, srgb_to_sr_lch};
use crate::mix::{MixSpace, mix_rgb};

/// sRGB → SR LAB 2 over a buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_to_sr_lab2_batch(input: &[Rgb], output: &mut [Lab]) {
    assert!(output.len() >= input.len());
    trace!(len = input.len(), "srgb_to_sr_lab2_batch");

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = srgb_to_sr_lab2(*inp);
    }
}

/// SR LAB 2 → sRGB over a buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sr_lab2_to_srgb_batch(input: &[Lab], output: &mut [Rgb]) {
    assert!(output.len() >= input.len());
    trace!(len = input.len(), "sr_lab2_to_srgb_batch");

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = sr_lab2_to_srgb(*inp);
    }
}

/// sRGB → SR LCH over a buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_to_sr_lch_batch(input: &[Rgb], output: &mut [Lch]) {
    assert!(output.len() >= input.len());
    trace!(len = input.len(), "srgb_to_sr_lch_batch");

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = srgb_to_sr_lch(*inp);
    }
}

/// SR LCH → sRGB over a buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sr_lch_to_srgb_batch(input: &[Lch], output: &mut [Rgb]) {
    assert!(output.len() >= input.len());
    trace!(len = input.len(), "sr_lch_to_srgb_batch");

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = sr_lch_to_srgb(*inp);
    }
}

/// Interleaved RGBA8 pixels → SR LAB 2
///
/// `src` holds four bytes per pixel in r, g, b, a order.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb8_to_sr_lab2_batch(src: &[u8], dst: &mut [Lab]) {
    assert!(src.len() % 4 == 0);
    assert!(dst.len() >= src.len() / 4);
    trace!(pixels = src.len() / 4, "srgb8_to_sr_lab2_batch");

    for (px, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *out = srgb_to_sr_lab2(Rgb::from_bytes(px[0], px[1], px[2], px[3]));
    }
}

/// Mix pairs from two buffers
///
/// `orig` and `dest` are read pairwise; `output` must be at least as long
/// as the shorter of the two.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn mix_batch(orig: &[Rgb], dest: &[Rgb], step: f32, space: MixSpace, output: &mut [Rgb]) {
    let len = orig.len().min(dest.len());
    assert!(output.len() >= len);
    trace!(len, ?space, "mix_batch");

    for ((o, d), out) in orig.iter().zip(dest).zip(output.iter_mut()) {
        *out = mix_rgb(*o, *d, step, space);
    }
}
