//! Conversions between sRGB, linear RGB, SR XYZ, SR LAB 2 and SR LCH
//!
//! Every chained conversion walks each intermediate stage in order:
//!
//! ```text
//! sRGB ⇄ linear RGB ⇄ SR XYZ ⇄ SR LAB 2 ⇄ SR LCH
//! ```
//!
//! Matrix, perceptual and polar stages compute in f64 and store f32.
//! Alpha rides along unchanged except where a gamma flag asks otherwise.
//!
//! The matrices and perceptual coefficients are fixed published values
//! rather than exact inverses of one another, so sRGB → SR LAB 2 → sRGB
//! returns saturated primaries to within about 1.2e-3 per channel, and
//! grays to within about 5e-5.

use crate::color::{Lab, Lch, Rgb, Xyz};
use crate::math::{
    CHROMA_EPSILON, LRGB_TO_SR_XYZ, SR_XYZ_TO_LRGB, TAU, linear_to_srgb_channel, mod1,
    srgb_to_linear_channel,
};

/// `216 / 24389`, the knee of the perceptual companding curve
const PERCEPTUAL_KNEE: f64 = 216.0 / 24389.0;
/// `24389 / 2700`, slope of the linear segment
const PERCEPTUAL_SLOPE: f64 = 24389.0 / 2700.0;
/// `2700 / 24389`, inverse slope
const PERCEPTUAL_SLOPE_INV: f64 = 2700.0 / 24389.0;

/// sRGB gamma decode of r, g and b
///
/// Alpha is decoded as well when `include_alpha` is set.
pub fn srgb_to_linear(c: Rgb, include_alpha: bool) -> Rgb {
    let mut out = c.map_rgb(srgb_to_linear_channel);
    if include_alpha {
        out.a = srgb_to_linear_channel(c.a);
    }
    out
}

/// sRGB gamma encode of r, g and b
///
/// Alpha is encoded as well when `include_alpha` is set.
pub fn linear_to_srgb(c: Rgb, include_alpha: bool) -> Rgb {
    let mut out = c.map_rgb(linear_to_srgb_channel);
    if include_alpha {
        out.a = linear_to_srgb_channel(c.a);
    }
    out
}

/// Linear RGB → SR XYZ
pub fn linear_to_sr_xyz(c: Rgb) -> Xyz {
    let [x, y, z] = LRGB_TO_SR_XYZ * [c.r as f64, c.g as f64, c.b as f64];
    Xyz::new(x as f32, y as f32, z as f32, c.a)
}

/// SR XYZ → linear RGB
pub fn sr_xyz_to_linear(v: Xyz) -> Rgb {
    let [r, g, b] = SR_XYZ_TO_LRGB * [v.x as f64, v.y as f64, v.z as f64];
    Rgb::new(r as f32, g as f32, b as f32, v.alpha)
}

#[inline]
fn perceptual_compand(v: f64) -> f64 {
    if v <= PERCEPTUAL_KNEE {
        v * PERCEPTUAL_SLOPE
    } else {
        1.16 * v.cbrt() - 0.16
    }
}

#[inline]
fn perceptual_expand(v: f64) -> f64 {
    if v <= 0.08 {
        v * PERCEPTUAL_SLOPE_INV
    } else {
        let t = (v + 0.16) / 1.16;
        t * t * t
    }
}

/// SR XYZ → SR LAB 2
pub fn sr_xyz_to_sr_lab2(v: Xyz) -> Lab {
    let x = perceptual_compand(v.x as f64);
    let y = perceptual_compand(v.y as f64);
    let z = perceptual_compand(v.z as f64);

    Lab::new(
        (37.095 * x + 62.9054 * y - 0.0008 * z) as f32,
        (663.4684 * x - 750.5078 * y + 87.0328 * z) as f32,
        (63.9569 * x + 108.4576 * y - 172.4152 * z) as f32,
        v.alpha,
    )
}

/// SR LAB 2 → SR XYZ
pub fn sr_lab2_to_sr_xyz(lab: Lab) -> Xyz {
    let l = lab.l as f64 * 0.01;
    let a = lab.a as f64;
    let b = lab.b as f64;

    let x = l + 0.000904127 * a + 0.000456344 * b;
    let y = l - 0.000533159 * a - 0.000269178 * b;
    let z = l - 0.0058 * b;

    Xyz::new(
        perceptual_expand(x) as f32,
        perceptual_expand(y) as f32,
        perceptual_expand(z) as f32,
        lab.alpha,
    )
}

/// SR LAB 2 → SR LCH
///
/// Colors with `a² + b² < CHROMA_EPSILON²` get zero chroma and the
/// lightness-dependent gray hue from [`Lch::gray_of`].
pub fn sr_lab2_to_sr_lch(lab: Lab) -> Lch {
    let a = lab.a as f64;
    let b = lab.b as f64;
    let c_sq = a * a + b * b;
    let eps = CHROMA_EPSILON as f64;

    if c_sq.is_nan() || c_sq < eps * eps {
        return Lch::gray_of(lab.l, lab.alpha);
    }

    Lch::new(
        lab.l,
        c_sq.sqrt() as f32,
        mod1((b.atan2(a) / TAU) as f32),
        lab.alpha,
    )
}

/// SR LCH → SR LAB 2
///
/// Negative or NaN chroma is treated as zero; hue is wrapped first.
pub fn sr_lch_to_sr_lab2(lch: Lch) -> Lab {
    let lch = lch.normalized();
    let c = lch.c as f64;
    let (sin, cos) = (lch.h as f64 * TAU).sin_cos();
    Lab::new(lch.l, (c * cos) as f32, (c * sin) as f32, lch.alpha)
}

/// sRGB → SR XYZ
pub fn srgb_to_sr_xyz(c: Rgb) -> Xyz {
    linear_to_sr_xyz(srgb_to_linear(c, false))
}

/// SR XYZ → sRGB
pub fn sr_xyz_to_srgb(v: Xyz) -> Rgb {
    linear_to_srgb(sr_xyz_to_linear(v), false)
}

/// sRGB → SR LAB 2
pub fn srgb_to_sr_lab2(c: Rgb) -> Lab {
    sr_xyz_to_sr_lab2(srgb_to_sr_xyz(c))
}

/// SR LAB 2 → sRGB
///
/// The result is not clamped; out-of-gamut Lab values produce channels
/// outside [0, 1].
pub fn sr_lab2_to_srgb(lab: Lab) -> Rgb {
    sr_xyz_to_srgb(sr_lab2_to_sr_xyz(lab))
}

/// sRGB → SR LCH
pub fn srgb_to_sr_lch(c: Rgb) -> Lch {
    sr_lab2_to_sr_lch(srgb_to_sr_lab2(c))
}

/// SR LCH → sRGB
pub fn sr_lch_to_srgb(lch: Lch) -> Rgb {
    sr_lab2_to_srgb(sr_lch_to_sr_lab2(lch))
}

/// sRGB → SR LAB 2 over a slice
pub fn srgb_to_sr_lab2_slice(src: &[Rgb]) -> Vec<Lab> {
    src.iter().copied().map(srgb_to_sr_lab2).collect()
}

/// SR LAB 2 → sRGB over a slice
pub fn sr_lab2_to_srgb_slice(src: &[Lab]) -> Vec<Rgb> {
    src.iter().copied().map(sr_lab2_to_srgb).collect()
}

/// sRGB → SR LCH over a slice
pub fn srgb_to_sr_lch_slice(src: &[Rgb]) -> Vec<Lch> {
    src.iter().copied().map(srgb_to_sr_lch).collect()
}

/// SR LCH → sRGB over a slice
pub fn sr_lch_to_srgb_slice(src: &[Lch]) -> Vec<Rgb> {
    src.iter().copied().map(sr_lch_to_srgb).collect()
}

/// SR LAB 2 → SR LCH over a slice
pub fn sr_lab2_to_sr_lch_slice(src: &[Lab]) -> Vec<Lch> {
    src.iter().copied().map(sr_lab2_to_sr_lch).collect()
}

/// SR LCH → SR LAB 2 over a slice
pub fn sr_lch_to_sr_lab2_slice(src: &[Lch]) -> Vec<Lab> {
    src.iter().copied().map(sr_lch_to_sr_lab2).collect()
}

/// Treats the source as gamma-encoded sRGB
impl From<Rgb> for Lab {
    fn from(c: Rgb) -> Self {
        srgb_to_sr_lab2(c)
    }
}

impl From<Lab> for Rgb {
    fn from(lab: Lab) -> Self {
        sr_lab2_to_srgb(lab)
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        sr_lab2_to_sr_lch(lab)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        sr_lch_to_sr_lab2(lch)
    }
}

/// Treats the source as gamma-encoded sRGB
impl From<Rgb> for Lch {
    fn from(c: Rgb) -> Self {
        srgb_to_sr_lch(c)
    }
}

impl From<Lch> for Rgb {
    fn from(lch: Lch) -> Self {
        sr_lch_to_srgb(lch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{SR_HUE_LIGHT, SR_HUE_SHADOW};

    /// f32 result vs f64 reference
    const REF_EPSILON: f32 = 2e-3;

    fn assert_lab_close(got: Lab, l: f32, a: f32, b: f32, eps: f32) {
        assert!(
            (got.l - l).abs() < eps && (got.a - a).abs() < eps && (got.b - b).abs() < eps,
            "expected ({}, {}, {}), got {:?}",
            l,
            a,
            b,
            got
        );
    }

    #[test]
    fn test_srgb_to_linear_mid_gray() {
        let lin = srgb_to_linear(Rgb::new(0.5, 0.5, 0.5, 1.0), false);
        for c in [lin.r, lin.g, lin.b] {
            assert!((c - 0.214).abs() < 1e-3, "linear mid gray = {}", c);
        }
        assert_eq!(lin.a, 1.0);
    }

    #[test]
    fn test_alpha_flag() {
        let c = Rgb::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(srgb_to_linear(c, false).a, 0.5);
        assert!((srgb_to_linear(c, true).a - 0.214).abs() < 1e-3);
        assert_eq!(linear_to_srgb(c, false).a, 0.5);
        assert!(linear_to_srgb(c, true).a > 0.7);
    }

    #[test]
    fn test_primaries_match_reference() {
        let cases = [
            (Rgb::RED, Lab::SR_RED),
            (Rgb::GREEN, Lab::SR_GREEN),
            (Rgb::BLUE, Lab::SR_BLUE),
            (Rgb::CYAN, Lab::SR_CYAN),
            (Rgb::MAGENTA, Lab::SR_MAGENTA),
            (Rgb::YELLOW, Lab::SR_YELLOW),
        ];
        for (rgb, expected) in cases {
            let got = srgb_to_sr_lab2(rgb);
            assert_lab_close(got, expected.l, expected.a, expected.b, REF_EPSILON);
            assert_eq!(got.alpha, 1.0);
        }
    }

    #[test]
    fn test_known_lab_values() {
        assert_lab_close(
            srgb_to_sr_lab2(Rgb::new(0.2, 0.4, 0.6, 1.0)),
            41.67819,
            -8.57083,
            -33.46038,
            REF_EPSILON,
        );
        assert_lab_close(srgb_to_sr_lab2(Rgb::WHITE), 99.99972, -0.003744, -0.000495, REF_EPSILON);
        assert_lab_close(srgb_to_sr_lab2(Rgb::BLACK), 0.0, 0.0, 0.0, 1e-6);
    }

    #[test]
    fn test_xyz_stage_roundtrip() {
        let lin = Rgb::new(0.3, 0.6, 0.1, 0.75);
        let back = sr_xyz_to_linear(linear_to_sr_xyz(lin));
        assert!(back.approx_eq(&lin, 5e-4), "{:?}", back);
        assert_eq!(back.a, 0.75);
    }

    #[test]
    fn test_srgb_lab_roundtrip() {
        let steps = 8;
        for ri in 0..=steps {
            for gi in 0..=steps {
                for bi in 0..=steps {
                    let c = Rgb::new(
                        ri as f32 / steps as f32,
                        gi as f32 / steps as f32,
                        bi as f32 / steps as f32,
                        1.0,
                    );
                    let back = sr_lab2_to_srgb(srgb_to_sr_lab2(c));
                    assert!(back.approx_eq(&c, 2e-3), "{:?} → {:?}", c, back);
                }
            }
        }
    }

    #[test]
    fn test_gray_roundtrip_is_tight() {
        for i in 0..=20 {
            let v = i as f32 / 20.0;
            let c = Rgb::new(v, v, v, 1.0);
            let back = sr_lab2_to_srgb(srgb_to_sr_lab2(c));
            assert!(back.approx_eq(&c, 1e-4), "{:?} → {:?}", c, back);
        }
    }

    #[test]
    fn test_lab_xyz_roundtrip() {
        for lab in [
            Lab::new(50.0, 20.0, -20.0, 1.0),
            Lab::new(25.0, -10.0, 30.0, 0.5),
            Lab::new(75.0, 5.0, 5.0, 1.0),
        ] {
            let back = sr_xyz_to_sr_lab2(sr_lab2_to_sr_xyz(lab));
            assert!(back.approx_eq(&lab, 1e-2), "{:?} → {:?}", lab, back);
        }
    }

    #[test]
    fn test_polar_roundtrip() {
        let lab = Lab::new(60.0, 30.0, -40.0, 0.8);
        let lch = sr_lab2_to_sr_lch(lab);
        assert!((lch.c - 50.0).abs() < 1e-4);
        assert!((0.0..1.0).contains(&lch.h));
        let back = sr_lch_to_sr_lab2(lch);
        assert!(back.approx_eq(&lab, 1e-4), "{:?}", back);
    }

    #[test]
    fn test_gray_lab_to_lch() {
        for l in [0.0, 25.0, 50.0, 100.0] {
            let lch = sr_lab2_to_sr_lch(Lab::new(l, 0.0, 0.0, 1.0));
            assert_eq!(lch.c, 0.0);
            assert!(!lch.h.is_nan());
            assert_eq!(lch.h, Lch::gray_of(l, 1.0).h);
        }
        assert!((sr_lab2_to_sr_lch(Lab::new(0.0, 0.0, 0.0, 1.0)).h - SR_HUE_SHADOW).abs() < 1e-5);
        assert!((sr_lab2_to_sr_lch(Lab::new(100.0, 0.0, 0.0, 1.0)).h - SR_HUE_LIGHT).abs() < 1e-5);
    }

    #[test]
    fn test_near_gray_threshold() {
        let below = sr_lab2_to_sr_lch(Lab::new(50.0, 0.00003, 0.00003, 1.0));
        assert_eq!(below.c, 0.0);
        let above = sr_lab2_to_sr_lch(Lab::new(50.0, 0.0001, 0.0, 1.0));
        assert!(above.c > 0.0);
        assert_eq!(above.h, 0.0);
    }

    #[test]
    fn test_negative_chroma_clamped() {
        let lab = sr_lch_to_sr_lab2(Lch::new(50.0, -20.0, 0.3, 1.0));
        assert_eq!((lab.a, lab.b), (0.0, 0.0));
        let lab = sr_lch_to_sr_lab2(Lch::new(50.0, f32::NAN, 0.3, 1.0));
        assert_eq!((lab.a, lab.b), (0.0, 0.0));
    }

    #[test]
    fn test_hue_wrapped_before_polar() {
        let a = sr_lch_to_sr_lab2(Lch::new(50.0, 10.0, 1.25, 1.0));
        let b = sr_lch_to_sr_lab2(Lch::new(50.0, 10.0, 0.25, 1.0));
        assert!(a.approx_eq(&b, 1e-4));
    }

    #[test]
    fn test_slices_match_scalar() {
        let src = [Rgb::RED, Rgb::new(0.2, 0.4, 0.6, 0.5), Rgb::BLACK];
        let labs = srgb_to_sr_lab2_slice(&src);
        let lchs = srgb_to_sr_lch_slice(&src);
        for ((rgb, lab), lch) in src.iter().zip(&labs).zip(&lchs) {
            assert_eq!(*lab, srgb_to_sr_lab2(*rgb));
            assert_eq!(*lch, srgb_to_sr_lch(*rgb));
        }
        assert_eq!(sr_lab2_to_srgb_slice(&labs)[1], sr_lab2_to_srgb(labs[1]));
        assert_eq!(sr_lch_to_srgb_slice(&lchs)[0], sr_lch_to_srgb(lchs[0]));
        assert_eq!(sr_lab2_to_sr_lch_slice(&labs), lchs);
        assert_eq!(sr_lch_to_sr_lab2_slice(&lchs)[2], sr_lch_to_sr_lab2(lchs[2]));
    }

    #[test]
    fn test_from_impls() {
        let c = Rgb::new(0.2, 0.4, 0.6, 1.0);
        assert_eq!(Lab::from(c), srgb_to_sr_lab2(c));
        assert_eq!(Lch::from(c), srgb_to_sr_lch(c));
        let lab = Lab::from(c);
        assert_eq!(Rgb::from(lab), sr_lab2_to_srgb(lab));
        assert_eq!(Lch::from(lab), sr_lab2_to_sr_lch(lab));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_gamma_roundtrip(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0) {
                let c = Rgb::new(r, g, b, 1.0);
                let back = linear_to_srgb(srgb_to_linear(c, false), false);
                prop_assert!(back.approx_eq(&c, 1e-5), "{:?} → {:?}", c, back);
            }

            #[test]
            fn prop_srgb_lab_roundtrip(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0) {
                let c = Rgb::new(r, g, b, 1.0);
                let back = sr_lab2_to_srgb(srgb_to_sr_lab2(c));
                prop_assert!(back.approx_eq(&c, 2e-3), "{:?} → {:?}", c, back);
            }

            #[test]
            fn prop_polar_roundtrip(
                l in 0.0f32..=100.0,
                a in -110.0f32..=110.0,
                b in -110.0f32..=110.0,
            ) {
                let lab = Lab::new(l, a, b, 1.0);
                prop_assume!(a * a + b * b >= CHROMA_EPSILON * CHROMA_EPSILON);
                let back = sr_lch_to_sr_lab2(sr_lab2_to_sr_lch(lab));
                let tol = 1e-5 * lab.chroma().max(1.0) * 4.0;
                prop_assert!((back.a - a).abs() <= tol && (back.b - b).abs() <= tol,
                    "{:?} → {:?}", lab, back);
                prop_assert_eq!(back.l, l);
            }

            #[test]
            fn prop_lch_hue_in_range(
                l in 0.0f32..=100.0,
                a in -110.0f32..=110.0,
                b in -110.0f32..=110.0,
            ) {
                let lch = sr_lab2_to_sr_lch(Lab::new(l, a, b, 1.0));
                prop_assert!((0.0..1.0).contains(&lch.h));
                prop_assert!(lch.c >= 0.0);
            }
        }
    }
}
