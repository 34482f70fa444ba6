//! RGB Color Primitives
//!
//! Gamma-encoded sRGB with a straight (non-premultiplied) alpha channel.
//! Channels are nominally in [0, 1] but out-of-gamut values pass through
//! untouched until a saturating conversion is requested.

use crate::math::gamma::srgb_to_linear_f64;
use crate::math::{clamp01, linear_to_srgb_channel};

/// RGBA color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f32,
    /// Green component (0.0 to 1.0)
    pub g: f32,
    /// Blue component (0.0 to 1.0)
    pub b: f32,
    /// Alpha component (0.0 to 1.0)
    pub a: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const CLEAR_BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const CLEAR_WHITE: Self = Self::new(1.0, 1.0, 1.0, 0.0);

    /// Create a new RGBA color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create RGBA from an array
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array `[r, g, b, a]`
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Convert to 8-bit values `[r, g, b, a]`, clamping first
    #[inline]
    pub fn to_bytes_sat(&self) -> [u8; 4] {
        self.to_array().map(|c| (clamp01(c) * 255.0 + 0.5) as u8)
    }

    /// Create from 16-bit values (0-65535)
    #[inline]
    pub fn from_shorts(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self::new(
            r as f32 / 65535.0,
            g as f32 / 65535.0,
            b as f32 / 65535.0,
            a as f32 / 65535.0,
        )
    }

    /// Convert to 16-bit values `[r, g, b, a]`, clamping first
    #[inline]
    pub fn to_shorts_sat(&self) -> [u16; 4] {
        self.to_array().map(|c| (clamp01(c) * 65535.0 + 0.5) as u16)
    }

    /// Unpack `0xAARRGGBB`
    pub fn from_hex_int(hex: u32) -> Self {
        Self::from_bytes(
            (hex >> 16) as u8,
            (hex >> 8) as u8,
            hex as u8,
            (hex >> 24) as u8,
        )
    }

    /// Pack into `0xAARRGGBB`, clamping each channel to [0, 1]
    pub fn to_hex_int_sat(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes_sat();
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Pack into `0xAARRGGBB` without clamping
    ///
    /// Out-of-gamut channels wrap modulo 256.
    pub fn to_hex_int_wrap(&self) -> u32 {
        let q = |c: f32| (c * 255.0 + 0.5) as i32 as u32 & 0xff;
        q(self.a) << 24 | q(self.r) << 16 | q(self.g) << 8 | q(self.b)
    }

    /// Unpack `0xAAAARRRRGGGGBBBB`
    pub fn from_hex_long(hex: u64) -> Self {
        Self::from_shorts(
            (hex >> 32) as u16,
            (hex >> 16) as u16,
            hex as u16,
            (hex >> 48) as u16,
        )
    }

    /// Pack into `0xAAAARRRRGGGGBBBB`, clamping each channel to [0, 1]
    pub fn to_hex_long_sat(&self) -> u64 {
        let [r, g, b, a] = self.to_shorts_sat();
        (a as u64) << 48 | (r as u64) << 32 | (g as u64) << 16 | b as u64
    }

    /// Pack into `0xAAAARRRRGGGGBBBB` without clamping
    pub fn to_hex_long_wrap(&self) -> u64 {
        let q = |c: f32| (c * 65535.0 + 0.5) as i64 as u64 & 0xffff;
        q(self.a) << 48 | q(self.r) << 32 | q(self.g) << 16 | q(self.b)
    }

    /// Clamp all four channels to [0, 1]
    #[inline]
    pub fn clamp01(&self) -> Self {
        Self::new(clamp01(self.r), clamp01(self.g), clamp01(self.b), clamp01(self.a))
    }

    /// Check whether r, g and b lie within `[-tol, 1 + tol]`
    ///
    /// Alpha is not considered.
    pub fn is_in_gamut(&self, tol: f32) -> bool {
        let hi = 1.0 + tol;
        [self.r, self.g, self.b]
            .iter()
            .all(|&c| c >= -tol && c <= hi)
    }

    /// Multiply color channels by alpha
    pub fn premul(&self) -> Self {
        if self.a <= 0.0 {
            Self::CLEAR_BLACK
        } else if self.a >= 1.0 {
            Self::new(self.r, self.g, self.b, 1.0)
        } else {
            Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
        }
    }

    /// Divide color channels by alpha
    pub fn unpremul(&self) -> Self {
        if self.a <= 0.0 {
            Self::CLEAR_BLACK
        } else if self.a >= 1.0 {
            Self::new(self.r, self.g, self.b, 1.0)
        } else {
            let inv = 1.0 / self.a;
            Self::new(self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Posterize all four channels to `|levels|` steps
    ///
    /// Levels of -1, 0 or 1 return the color unchanged.
    pub fn quantize(&self, levels: i32) -> Self {
        if levels.unsigned_abs() <= 1 {
            return *self;
        }
        let levf = levels.unsigned_abs() as f32;
        let delta = 1.0 / (levf - 1.0);
        let q = |c: f32| (((c * levf).ceil() - 1.0) * delta).max(0.0);
        Self::new(q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Rec. 709 relative luminance of a gamma-encoded color
    ///
    /// Decodes to linear in f64 before weighting.
    pub fn srgb_luminance(&self) -> f32 {
        (0.21264934272065283 * srgb_to_linear_f64(self.r)
            + 0.7151691357059038 * srgb_to_linear_f64(self.g)
            + 0.07218152157344333 * srgb_to_linear_f64(self.b)) as f32
    }

    /// Rec. 709 relative luminance of a color already in linear RGB
    #[inline]
    pub fn linear_luminance(&self) -> f32 {
        0.21264935 * self.r + 0.71516913 * self.g + 0.07218152 * self.b
    }

    /// Gray with the same perceived luminance, alpha preserved
    pub fn to_gray(&self) -> Self {
        let v = linear_to_srgb_channel(self.srgb_luminance());
        Self::new(v, v, v, self.a)
    }

    /// Apply `f` to r, g and b, keeping alpha
    #[inline]
    pub(crate) fn map_rgb(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Check if approximately equal to another color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }

    /// Equality after saturating conversion to bytes
    #[inline]
    pub fn eq_sat(&self, other: &Self) -> bool {
        self.to_bytes_sat() == other.to_bytes_sat()
    }
}

impl From<[f32; 4]> for Rgb {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f32; 4] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Self::from_hex_int(hex)
    }
}
