//! Mixing two sRGB colors through a chosen working space
//!
//! - [`MixSpace::Srgb`]: per-channel lerp of the encoded values
//! - [`MixSpace::LinearRgb`]: lerp in linear light
//! - [`MixSpace::SrLab2`]: lerp of l, a, b and alpha
//! - [`MixSpace::SrLch`]: lerp of l and c, hue by [`HuePolicy`]
//!
//! Every space returns the origin unchanged at step 0 and the destination
//! unchanged at step 1. A NaN step is replaced by 0.5.

use tracing::debug;

use crate::color::{Lab, Rgb};
use crate::convert::{
    linear_to_srgb, sr_lab2_to_srgb, sr_lch_to_srgb, srgb_to_linear, srgb_to_sr_lab2,
    srgb_to_sr_lch,
};
use crate::error::{Error, Result};
use crate::hue::HuePolicy;
use crate::math::mix;
use crate::simd::mix_batch;

/// Working space for [`mix_rgb`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MixSpace {
    /// Gamma-encoded sRGB; fast, perceptually uneven
    Srgb,
    /// Linear RGB, optionally companding alpha too
    LinearRgb { include_alpha: bool },
    /// SR LAB 2 Cartesian
    SrLab2,
    /// SR LCH polar
    SrLch(HuePolicy),
}

impl Default for MixSpace {
    fn default() -> Self {
        MixSpace::SrLch(HuePolicy::Near)
    }
}

/// Options for mixing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixOptions {
    /// Working space
    pub space: MixSpace,
}

impl MixOptions {
    /// Options mixing in the given space
    pub const fn new(space: MixSpace) -> Self {
        Self { space }
    }
}

#[inline]
fn lerp_rgb(o: &Rgb, d: &Rgb, t: f32) -> Rgb {
    Rgb::new(
        mix(o.r, d.r, t),
        mix(o.g, d.g, t),
        mix(o.b, d.b, t),
        mix(o.a, d.a, t),
    )
}

/// Mix `orig` toward `dest` by `step` in `space`
///
/// The result is not clamped to the sRGB gamut.
pub fn mix_rgb(orig: Rgb, dest: Rgb, step: f32, space: MixSpace) -> Rgb {
    let t = if step.is_nan() {
        debug!("NaN mix step, using 0.5");
        0.5
    } else {
        step
    };

    if t <= 0.0 {
        return orig;
    }
    if t >= 1.0 {
        return dest;
    }

    match space {
        MixSpace::Srgb => lerp_rgb(&orig, &dest, t),
        MixSpace::LinearRgb { include_alpha } => {
            let o = srgb_to_linear(orig, include_alpha);
            let d = srgb_to_linear(dest, include_alpha);
            linear_to_srgb(lerp_rgb(&o, &d, t), include_alpha)
        }
        MixSpace::SrLab2 => {
            let o: Lab = srgb_to_sr_lab2(orig);
            let d = srgb_to_sr_lab2(dest);
            sr_lab2_to_srgb(o.mix(&d, t))
        }
        MixSpace::SrLch(policy) => {
            let o = srgb_to_sr_lch(orig);
            let d = srgb_to_sr_lch(dest);
            sr_lch_to_srgb(o.mix(&d, t, policy))
        }
    }
}

/// Mix in sRGB
pub fn mix_srgb(orig: Rgb, dest: Rgb, step: f32) -> Rgb {
    mix_rgb(orig, dest, step, MixSpace::Srgb)
}

/// Mix in linear RGB
pub fn mix_linear_rgb(orig: Rgb, dest: Rgb, step: f32, include_alpha: bool) -> Rgb {
    mix_rgb(orig, dest, step, MixSpace::LinearRgb { include_alpha })
}

/// Mix in SR LAB 2
pub fn mix_sr_lab2(orig: Rgb, dest: Rgb, step: f32) -> Rgb {
    mix_rgb(orig, dest, step, MixSpace::SrLab2)
}

/// Mix in SR LCH
pub fn mix_sr_lch(orig: Rgb, dest: Rgb, step: f32, policy: HuePolicy) -> Rgb {
    mix_rgb(orig, dest, step, MixSpace::SrLch(policy))
}

/// A configured mixer
///
/// Holds [`MixOptions`] so that repeated mixes and buffer mixes share
/// one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mixer {
    options: MixOptions,
}

impl Mixer {
    /// Create a mixer
    pub const fn new(options: MixOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &MixOptions {
        &self.options
    }

    /// Mix two colors
    #[inline]
    pub fn mix(&self, orig: Rgb, dest: Rgb, step: f32) -> Rgb {
        mix_rgb(orig, dest, step, self.options.space)
    }

    /// Mix pairs from two buffers into `out`
    ///
    /// All three buffers must have the same length.
    pub fn mix_slices(&self, orig: &[Rgb], dest: &[Rgb], step: f32, out: &mut [Rgb]) -> Result<()> {
        if dest.len() != orig.len() {
            return Err(Error::BufferSize {
                expected: orig.len(),
                actual: dest.len(),
            });
        }
        if out.len() != orig.len() {
            return Err(Error::BufferSize {
                expected: orig.len(),
                actual: out.len(),
            });
        }
        mix_batch(orig, dest, step, self.options.space, out);
        Ok(())
    }

    /// `count` evenly spaced colors from `orig` to `dest`, both included
    ///
    /// A count of 1 yields only `orig`.
    pub fn gradient(&self, orig: Rgb, dest: Rgb, count: usize) -> Vec<Rgb> {
        match count {
            0 => Vec::new(),
            1 => vec![orig],
            _ => {
                let denom = (count - 1) as f32;
                (0..count)
                    .map(|i| self.mix(orig, dest, i as f32 / denom))
                    .collect()
            }
        }
    }
}
