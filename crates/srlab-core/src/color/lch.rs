//! SR LCH, the cylindrical form of SR LAB 2
//!
//! - l: Lightness, shared with [`Lab`]
//! - c: Chroma, distance from the gray axis (never negative)
//! - h: Hue in turns, [0, 1)

use crate::color::Lab;
use crate::convert::{sr_lab2_to_sr_lch, sr_lch_to_sr_lab2};
use crate::hue::HuePolicy;
use crate::math::{CHROMA_EPSILON, clamp01, mix, mod1};

/// Hue assigned to black-ish grays
pub const SR_HUE_SHADOW: f32 = 0.874676;
/// Hue assigned to white-ish grays
pub const SR_HUE_LIGHT: f32 = 0.306391;

/// SR LCH color coordinates with alpha
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Lch {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Chroma (0 to about 120 inside sRGB)
    pub c: f32,
    /// Hue in turns
    pub h: f32,
    /// Opacity (0 to 1)
    pub alpha: f32,
}

impl Lch {
    /// Largest chroma reached by an sRGB color
    pub const SR_CHROMA_MAX: f32 = 119.431305;
    /// Mean chroma of the sRGB gamut
    pub const SR_CHROMA_MEAN: f32 = 56.141006;
    pub const C_TO_BYTE: f32 = 2.0;
    pub const C_FROM_BYTE: f32 = 0.5;
    pub const H_TO_BYTE: f32 = 255.0;

    pub const SR_RED: Self = Self::new(53.225975, 103.4373, 0.1135622, 1.0);
    pub const SR_GREEN: Self = Self::new(87.51519, 117.3746, 0.3749225, 1.0);
    pub const SR_BLUE: Self = Self::new(30.64395, 111.4585, 0.7327945, 1.0);
    pub const SR_CYAN: Self = Self::new(90.6247, 46.30219, 0.5525401, 1.0);
    pub const SR_MAGENTA: Self = Self::new(60.25521, 119.4313, 0.91468, 1.0);
    pub const SR_YELLOW: Self = Self::new(97.34526, 102.1809, 0.3092284, 1.0);

    /// Create a new Lch color
    ///
    /// Stores the values as given; use [`Lch::normalized`] to clamp chroma
    /// and wrap hue.
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    /// Copy with chroma clamped to >= 0 (NaN to 0) and hue wrapped into [0, 1)
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.l, self.c.max(0.0), mod1(self.h), self.alpha)
    }

    /// Create Lch from an array `[l, c, h, alpha]`
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array `[l, c, h, alpha]`
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.l, self.c, self.h, self.alpha]
    }

    /// Gray of the given lightness
    ///
    /// Hue is not meaningful for grays; it is interpolated from
    /// [`SR_HUE_SHADOW`] at black to [`SR_HUE_LIGHT`] at white so that
    /// mixing toward a gray still has a stable target.
    pub fn gray_of(l: f32, alpha: f32) -> Self {
        let t = clamp01(l * 0.01);
        let h = mod1((1.0 - t) * SR_HUE_SHADOW + t * (SR_HUE_LIGHT + 1.0));
        Self::new(l, 0.0, h, alpha)
    }

    /// Drop chroma, keeping lightness and alpha
    #[inline]
    pub fn gray(&self) -> Self {
        Self::gray_of(self.l, self.alpha)
    }

    /// Check whether chroma is too small for hue to be meaningful
    #[inline]
    pub fn is_gray(&self) -> bool {
        let c_sq = self.c * self.c;
        c_sq.is_nan() || c_sq < CHROMA_EPSILON * CHROMA_EPSILON
    }

    /// Blend toward `dest`, hue following `policy`
    ///
    /// Gray endpoints have no usable hue:
    /// - both gray: lightness and alpha blend, hue comes from [`Lch::gray_of`]
    /// - one gray: the blend happens on the a/b plane, with the gray side
    ///   at the origin, and is converted back to polar form
    ///
    /// A step at or below 0 returns `self` unchanged, at or above 1 `dest`.
    /// A NaN step is treated as 0.5. Between those, both endpoints are
    /// [normalized](Lch::normalized) first, so negative chroma counts as 0.
    pub fn mix(&self, dest: &Self, t: f32, policy: HuePolicy) -> Self {
        let t = if t.is_nan() { 0.5 } else { t };
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *dest;
        }

        let (orig, dest) = (self.normalized(), dest.normalized());
        let l = mix(orig.l, dest.l, t);
        let alpha = mix(orig.alpha, dest.alpha, t);

        match (orig.is_gray(), dest.is_gray()) {
            (true, true) => Self::gray_of(l, alpha),
            (false, false) => Self::new(
                l,
                mix(orig.c, dest.c, t),
                policy.apply(orig.h, dest.h, t),
                alpha,
            ),
            (o_gray, d_gray) => {
                let o = if o_gray { orig.gray() } else { orig };
                let d = if d_gray { dest.gray() } else { dest };
                let (o, d) = (sr_lch_to_sr_lab2(o), sr_lch_to_sr_lab2(d));
                let mixed = o.mix(&d, t);
                sr_lab2_to_sr_lch(Lab::new(l, mixed.a, mixed.b, alpha))
            }
        }
    }

    /// Unpack `0xTTLLCCHH`
    pub fn from_hex_int(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xff) as f32 * Lab::L_FROM_BYTE,
            ((hex >> 8) & 0xff) as f32 * Self::C_FROM_BYTE,
            (hex & 0xff) as f32 / Self::H_TO_BYTE,
            ((hex >> 24) & 0xff) as f32 / 255.0,
        )
    }

    /// Pack into `0xTTLLCCHH` after clamping lightness, chroma and alpha
    pub fn to_hex_int_sat(&self) -> u32 {
        Self::new(
            self.l.max(0.0).min(100.0),
            self.c.max(0.0).min(127.5),
            self.h,
            clamp01(self.alpha),
        )
        .to_hex_int_wrap()
    }

    /// Pack into `0xTTLLCCHH` without clamping
    ///
    /// Hue is always wrapped first.
    pub fn to_hex_int_wrap(&self) -> u32 {
        let t = (self.alpha * 255.0 + 0.5) as i32;
        let l = (self.l * Lab::L_TO_BYTE + 0.5) as i32;
        let c = (self.c * Self::C_TO_BYTE + 0.5) as i32;
        let h = (mod1(self.h) * Self::H_TO_BYTE + 0.5) as i32;
        [t, l, c, h]
            .iter()
            .fold(0u32, |acc, &v| acc << 8 | (v as u32 & 0xff))
    }

    /// Equality after saturating conversion to bytes
    pub fn eq_sat(&self, other: &Self) -> bool {
        self.to_hex_int_sat() == other.to_hex_int_sat()
    }

    /// Check if approximately equal to another Lch color
    ///
    /// Hue is compared on the circle, so 0.999 and 0.001 are close.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        let dh = (mod1(self.h) - mod1(other.h)).abs();
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && dh.min(1.0 - dh) < epsilon
            && (self.alpha - other.alpha).abs() < epsilon
    }
}
