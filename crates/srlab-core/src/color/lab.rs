//! SR LAB 2 Color Space
//!
//! A perceptually uniform Lab-like space fitted to sRGB. Equal distances
//! correspond to roughly equal perceived differences, and hue lines stay
//! straighter through blue than in CIELAB.
//!
//! - l: Lightness (0 = black, 100 = white)
//! - a: Green-red axis (negative = green, positive = red)
//! - b: Blue-yellow axis (negative = blue, positive = yellow)

use rand::Rng;

use crate::math::{EPSILON, TAU, clamp01, mix, mod1};

/// SR LAB 2 color coordinates with alpha
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Green-red axis (sRGB gamut spans about -83 to 104)
    pub a: f32,
    /// Blue-yellow axis (sRGB gamut spans about -111 to 95)
    pub b: f32,
    /// Opacity (0 to 1)
    pub alpha: f32,
}

impl Lab {
    /// Smallest `a` reached by an sRGB color
    pub const SR_A_MIN: f32 = -82.955986;
    /// Largest `a` reached by an sRGB color
    pub const SR_A_MAX: f32 = 104.49946;
    /// Smallest `b` reached by an sRGB color
    pub const SR_B_MIN: f32 = -110.8078;
    /// Largest `b` reached by an sRGB color
    pub const SR_B_MAX: f32 = 95.18662;
    /// Lightness bounds used by [`Lab::random`]
    pub const RNG_L_MIN: f32 = 5.0;
    pub const RNG_L_MAX: f32 = 95.0;
    /// Lightness to byte scale
    pub const L_TO_BYTE: f32 = 2.55;
    /// Byte to lightness scale
    pub const L_FROM_BYTE: f32 = 0.39215687;
    /// Weight of alpha in distance metrics
    pub const DEFAULT_ALPHA_SCALAR: f32 = 100.0;

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(100.0, 0.0, 0.0, 1.0);
    pub const CLEAR_BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const CLEAR_WHITE: Self = Self::new(100.0, 0.0, 0.0, 0.0);

    /// sRGB primaries and secondaries, measured in SR LAB 2
    pub const SR_RED: Self = Self::new(53.225975, 78.204285, 67.700615, 1.0);
    pub const SR_GREEN: Self = Self::new(87.51519, -82.95597, 83.03678, 1.0);
    pub const SR_BLUE: Self = Self::new(30.64395, -12.0258045, -110.8078, 1.0);
    pub const SR_CYAN: Self = Self::new(90.6247, -43.80204, -15.009125, 1.0);
    pub const SR_MAGENTA: Self = Self::new(60.25521, 102.67709, -61.002052, 1.0);
    pub const SR_YELLOW: Self = Self::new(97.34526, -37.154266, 95.18662, 1.0);

    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Self { l, a, b, alpha }
    }

    /// Create Lab from an array `[l, a, b, alpha]`
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array `[l, a, b, alpha]`
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.l, self.a, self.b, self.alpha]
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f32 {
        self.chroma_sq().sqrt()
    }

    /// Get squared chroma
    #[inline]
    pub fn chroma_sq(&self) -> f32 {
        let (a, b) = (self.a as f64, self.b as f64);
        (a * a + b * b) as f32
    }

    /// Get hue in turns, [0, 1)
    ///
    /// Gray colors report 0.
    #[inline]
    pub fn hue(&self) -> f32 {
        mod1(((self.b as f64).atan2(self.a as f64) / TAU) as f32)
    }

    /// Drop chroma, keeping lightness and alpha
    #[inline]
    pub fn gray(&self) -> Self {
        Self::new(self.l, 0.0, 0.0, self.alpha)
    }

    /// Rotate a and b by `turns`
    pub fn rotate_hue(&self, turns: f32) -> Self {
        let (sin, cos) = (turns as f64 * TAU).sin_cos();
        let (a, b) = (self.a as f64, self.b as f64);
        Self::new(
            self.l,
            (cos * a - sin * b) as f32,
            (cos * b + sin * a) as f32,
            self.alpha,
        )
    }

    /// Multiply a and b by `scalar`
    #[inline]
    pub fn scale_chroma(&self, scalar: f32) -> Self {
        Self::new(self.l, self.a * scalar, self.b * scalar, self.alpha)
    }

    /// Set chroma to `chroma`, keeping hue
    ///
    /// A color with no measurable chroma has no hue to keep and comes back
    /// gray.
    pub fn rescale_chroma(&self, chroma: f32) -> Self {
        let (a, b) = (self.a as f64, self.b as f64);
        let c_sq = a * a + b * b;
        if c_sq > EPSILON as f64 {
            let s = chroma as f64 / c_sq.sqrt();
            Self::new(self.l, (a * s) as f32, (b * s) as f32, self.alpha)
        } else {
            self.gray()
        }
    }

    /// Weighted city-block distance
    ///
    /// `|100·Δalpha| + |Δl| + √(Δa² + Δb²)`
    pub fn dist(&self, other: &Self) -> f32 {
        let da = (other.a - self.a) as f64;
        let db = (other.b - self.b) as f64;
        ((Self::DEFAULT_ALPHA_SCALAR as f64 * (other.alpha - self.alpha) as f64).abs()
            + ((other.l - self.l) as f64).abs()
            + (da * da + db * db).sqrt()) as f32
    }

    /// Euclidean distance over all four channels, alpha weighted by `alpha_scalar`
    pub fn dist_euclidean_alpha(&self, other: &Self, alpha_scalar: f32) -> f32 {
        let dt = alpha_scalar as f64 * (other.alpha - self.alpha) as f64;
        let dl = (other.l - self.l) as f64;
        let da = (other.a - self.a) as f64;
        let db = (other.b - self.b) as f64;
        (dt * dt + dl * dl + da * da + db * db).sqrt() as f32
    }

    /// Euclidean distance ignoring alpha
    pub fn dist_euclidean(&self, other: &Self) -> f32 {
        self.dist_euclidean_alpha(other, 0.0)
    }

    /// Linear blend of all four channels
    #[inline]
    pub fn mix(&self, dest: &Self, t: f32) -> Self {
        Self::new(
            mix(self.l, dest.l, t),
            mix(self.a, dest.a, t),
            mix(self.b, dest.b, t),
            mix(self.alpha, dest.alpha, t),
        )
    }

    /// Random opaque color inside the sRGB bounding box of SR LAB 2
    ///
    /// Lightness is kept within [`Lab::RNG_L_MIN`, `Lab::RNG_L_MAX`]. The
    /// result may still fall outside the sRGB gamut.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_in(
            rng,
            &Self::new(Self::RNG_L_MIN, Self::SR_A_MIN, Self::SR_B_MIN, 1.0),
            &Self::new(Self::RNG_L_MAX, Self::SR_A_MAX, Self::SR_B_MAX, 1.0),
        )
    }

    /// Random color with each channel drawn between two bounds
    pub fn random_in<R: Rng + ?Sized>(rng: &mut R, lower: &Self, upper: &Self) -> Self {
        let mut pick = |lo: f32, hi: f32| {
            let t: f32 = rng.r#gen();
            (1.0 - t) * lo + t * hi
        };
        Self::new(
            pick(lower.l, upper.l),
            pick(lower.a, upper.a),
            pick(lower.b, upper.b),
            pick(lower.alpha, upper.alpha),
        )
    }

    /// Unpack `0xTTLLAABB`
    pub fn from_hex_int(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xff) as f32 * Self::L_FROM_BYTE,
            ((hex >> 8) & 0xff) as f32 - 128.0,
            (hex & 0xff) as f32 - 128.0,
            ((hex >> 24) & 0xff) as f32 / 255.0,
        )
    }

    /// Pack into `0xTTLLAABB` after clamping each channel to its byte range
    pub fn to_hex_int_sat(&self) -> u32 {
        Self::new(
            self.l.max(0.0).min(100.0),
            self.a.max(-127.5).min(127.5),
            self.b.max(-127.5).min(127.5),
            clamp01(self.alpha),
        )
        .to_hex_int_wrap()
    }

    /// Pack into `0xTTLLAABB` without clamping
    ///
    /// Out-of-range channels wrap modulo 256.
    pub fn to_hex_int_wrap(&self) -> u32 {
        let t = (self.alpha * 255.0 + 0.5) as i32;
        let l = (self.l * Self::L_TO_BYTE + 0.5) as i32;
        let a = 128 + self.a.floor() as i32;
        let b = 128 + self.b.floor() as i32;
        [t, l, a, b]
            .iter()
            .fold(0u32, |acc, &c| acc << 8 | (c as u32 & 0xff))
    }

    /// Unpack `0xTTTTLLLLAAAABBBB`
    pub fn from_hex_long(hex: u64) -> Self {
        Self::new(
            ((hex >> 32) & 0xffff) as f32 * (100.0 / 65535.0),
            (((hex >> 16) & 0xffff) as f32 - 32768.0) / 257.0,
            ((hex & 0xffff) as f32 - 32768.0) / 257.0,
            ((hex >> 48) & 0xffff) as f32 / 65535.0,
        )
    }

    /// Pack into `0xTTTTLLLLAAAABBBB` after clamping each channel
    pub fn to_hex_long_sat(&self) -> u64 {
        Self::new(
            self.l.max(0.0).min(100.0),
            self.a.max(-127.5).min(127.5),
            self.b.max(-127.5).min(127.5),
            clamp01(self.alpha),
        )
        .to_hex_long_wrap()
    }

    /// Pack into `0xTTTTLLLLAAAABBBB` without clamping
    pub fn to_hex_long_wrap(&self) -> u64 {
        let t = (self.alpha as f64 * 65535.0 + 0.5) as i64;
        let l = (self.l as f64 * 655.35 + 0.5) as i64;
        let a = 0x8000 + (self.a as f64 * 257.0).floor() as i64;
        let b = 0x8000 + (self.b as f64 * 257.0).floor() as i64;
        [t, l, a, b]
            .iter()
            .fold(0u64, |acc, &c| acc << 16 | (c as u64 & 0xffff))
    }

    /// Equality after saturating conversion to bytes
    pub fn eq_sat(&self, other: &Self) -> bool {
        self.to_hex_int_sat() == other.to_hex_int_sat()
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.alpha - other.alpha).abs() < epsilon
    }
}

impl From<[f32; 4]> for Lab {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f32; 4] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
