//! Round trips through the conversion chain

use proptest::prelude::*;
use srlab_core::{
    Lab, Lch, Rgb, linear_to_srgb, simd, sr_lab2_to_sr_lch, sr_lab2_to_srgb, sr_lch_to_sr_lab2,
    sr_lch_to_srgb, sr_xyz_to_srgb, srgb_to_linear, srgb_to_sr_lab2, srgb_to_sr_lch, srgb_to_sr_xyz,
};
use srlab_tests::accuracy::compare_rgb_buffers;
use srlab_tests::patterns::{TestPattern, generate_colors, generate_rgba8, sizes};

/// The two fixed matrices are inverses only to about 3e-4.
const RGB_TOLERANCE: f64 = 2e-3;

fn roundtrip_stats(pattern: TestPattern, count: usize, f: impl Fn(Rgb) -> Rgb) -> f64 {
    let colors = generate_colors(pattern, count);
    let back: Vec<Rgb> = colors.iter().map(|&c| f(c)).collect();
    compare_rgb_buffers(&colors, &back).max
}

#[test]
fn test_srgb_lab_roundtrip_patterns() {
    for pattern in [
        TestPattern::Grayscale,
        TestPattern::ColorCube,
        TestPattern::HueRamp,
        TestPattern::GamutBoundary,
        TestPattern::Lattice(9),
        TestPattern::Random(1),
    ] {
        let max = roundtrip_stats(pattern, sizes::SMALL, |c| sr_lab2_to_srgb(srgb_to_sr_lab2(c)));
        assert!(max < RGB_TOLERANCE, "{:?}: max error {}", pattern, max);
    }
}

#[test]
fn test_srgb_lch_roundtrip_patterns() {
    for pattern in [TestPattern::HueRamp, TestPattern::Random(2)] {
        let max = roundtrip_stats(pattern, sizes::SMALL, |c| sr_lch_to_srgb(srgb_to_sr_lch(c)));
        assert!(max < RGB_TOLERANCE, "{:?}: max error {}", pattern, max);
    }
}

#[test]
fn test_xyz_waypoint_roundtrip() {
    let max = roundtrip_stats(TestPattern::Random(3), sizes::SMALL, |c| {
        sr_xyz_to_srgb(srgb_to_sr_xyz(c))
    });
    assert!(max < RGB_TOLERANCE, "max error {}", max);
}

#[test]
fn test_linear_roundtrip_exact() {
    let max = roundtrip_stats(TestPattern::Random(4), sizes::SMALL, |c| {
        linear_to_srgb(srgb_to_linear(c, true), true)
    });
    assert!(max < 1e-5, "max error {}", max);
}

#[test]
fn test_alpha_passes_through() {
    let c = Rgb::new(0.3, 0.6, 0.9, 0.25);
    assert_eq!(srgb_to_sr_lab2(c).alpha, 0.25);
    assert_eq!(srgb_to_sr_lch(c).alpha, 0.25);
    assert_eq!(sr_lch_to_srgb(srgb_to_sr_lch(c)).a, 0.25);
}

#[test]
fn test_rgba8_batch_matches_float_path() {
    let bytes = generate_rgba8(17, sizes::TINY);
    let mut labs = vec![Lab::default(); sizes::TINY];
    simd::srgb8_to_sr_lab2_batch(&bytes, &mut labs);

    for (px, lab) in bytes.chunks_exact(4).zip(&labs) {
        let expected = srgb_to_sr_lab2(Rgb::from_bytes(px[0], px[1], px[2], px[3]));
        assert!(lab.approx_eq(&expected, 1e-6), "{:?} vs {:?}", lab, expected);
    }
}

#[test]
fn test_batch_lch_roundtrip() {
    let colors = generate_colors(TestPattern::Random(5), sizes::SMALL);
    let mut lch = vec![Lch::default(); colors.len()];
    let mut back = vec![Rgb::default(); colors.len()];

    simd::srgb_to_sr_lch_batch(&colors, &mut lch);
    simd::sr_lch_to_srgb_batch(&lch, &mut back);

    let stats = compare_rgb_buffers(&colors, &back);
    assert!(stats.within(RGB_TOLERANCE), "max error {}", stats.max);
}

proptest! {
    #[test]
    fn prop_polar_roundtrip(l in 0.0f32..100.0, a in -100.0f32..100.0, b in -100.0f32..100.0) {
        let lab = Lab::new(l, a, b, 1.0);
        let back = sr_lch_to_sr_lab2(sr_lab2_to_sr_lch(lab));
        prop_assert!(back.approx_eq(&lab, 1e-3), "{:?} -> {:?}", lab, back);
    }

    #[test]
    fn prop_lch_hue_in_range(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let lch = srgb_to_sr_lch(Rgb::new(r, g, b, 1.0));
        prop_assert!((0.0..1.0).contains(&lch.h));
        prop_assert!(lch.c >= 0.0);
    }

    #[test]
    fn prop_conversions_finite(r in -0.5f32..1.5, g in -0.5f32..1.5, b in -0.5f32..1.5) {
        let lab = srgb_to_sr_lab2(Rgb::new(r, g, b, 1.0));
        prop_assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
    }
}
