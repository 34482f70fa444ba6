//! Hue policy behavior through the public mixing surface

use srlab_core::{
    HuePolicy, Lch, MixOptions, MixSpace, Mixer, Rgb, SR_HUE_LIGHT, SR_HUE_SHADOW, mix_rgb,
    srgb_to_sr_lch,
};
use srlab_tests::reference::hue_distance;

const HUE_EPSILON: f64 = 1e-4;

fn assert_hue(actual: f32, expected: f64, what: &str) {
    let d = hue_distance(actual as f64, expected);
    assert!(d < HUE_EPSILON, "{}: hue {} expected {}", what, actual, expected);
}

#[test]
fn test_red_to_blue_midpoint_per_policy() {
    // Red sits near 0.1136 turns and blue near 0.7328.
    let cases = [
        (HuePolicy::Near, 0.92318),
        (HuePolicy::Far, 0.42318),
        (HuePolicy::Cw, 0.92318),
        (HuePolicy::Ccw, 0.42318),
    ];

    for (policy, expected) in cases {
        let mid = Lch::SR_RED.mix(&Lch::SR_BLUE, 0.5, policy);
        assert_hue(mid.h, expected, &format!("{:?}", policy));
    }
}

#[test]
fn test_cw_and_ccw_cover_the_circle() {
    let o = srgb_to_sr_lch(Rgb::YELLOW);
    let d = srgb_to_sr_lch(Rgb::CYAN);

    let cw = Lch::new(50.0, 50.0, o.h, 1.0).mix(&Lch::new(50.0, 50.0, d.h, 1.0), 0.25, HuePolicy::Cw);
    let ccw =
        Lch::new(50.0, 50.0, o.h, 1.0).mix(&Lch::new(50.0, 50.0, d.h, 1.0), 0.25, HuePolicy::Ccw);

    // Yellow is below cyan in turns, so counter-clockwise walks up directly
    // and clockwise walks down through red.
    let arc = (d.h - o.h) as f64;
    assert_hue(ccw.h, o.h as f64 + 0.25 * arc, "ccw");
    assert_hue(cw.h, (o.h as f64 - 0.25 * (1.0 - arc)).rem_euclid(1.0), "cw");
}

#[test]
fn test_gray_endpoint_mix_keeps_chromatic_hue() {
    let gray = Lch::gray_of(50.0, 1.0);
    assert!(gray.is_gray());

    for policy in HuePolicy::ALL {
        let mid = gray.mix(&Lch::SR_RED, 0.5, policy);
        assert_hue(mid.h, Lch::SR_RED.h as f64, "gray→red");
        assert!((mid.c - Lch::SR_RED.c * 0.5).abs() < 1e-3, "c={}", mid.c);
        assert!((mid.l - (50.0 + Lch::SR_RED.l) * 0.5).abs() < 1e-4);
    }
}

#[test]
fn test_two_grays_mix_to_gray() {
    let mid = Lch::gray_of(0.0, 1.0).mix(&Lch::gray_of(100.0, 0.0), 0.5, HuePolicy::Far);
    assert!(mid.is_gray());
    assert_eq!(mid, Lch::gray_of(50.0, 0.5));
}

#[test]
fn test_gray_hue_endpoints() {
    assert!((Lch::gray_of(0.0, 1.0).h - SR_HUE_SHADOW).abs() < 1e-6);
    assert!((Lch::gray_of(100.0, 1.0).h - SR_HUE_LIGHT).abs() < 1e-6);
}

#[test]
fn test_mix_endpoints_every_space() {
    let spaces = [
        MixSpace::Srgb,
        MixSpace::LinearRgb { include_alpha: true },
        MixSpace::SrLab2,
        MixSpace::SrLch(HuePolicy::Near),
        MixSpace::SrLch(HuePolicy::Far),
        MixSpace::SrLch(HuePolicy::Cw),
        MixSpace::SrLch(HuePolicy::Ccw),
    ];
    let o = Rgb::new(0.1, 0.7, 0.3, 0.5);
    let d = Rgb::new(0.9, 0.2, 0.6, 1.0);

    for space in spaces {
        assert_eq!(mix_rgb(o, d, 0.0, space), o, "{:?}", space);
        assert_eq!(mix_rgb(o, d, 1.0, space), d, "{:?}", space);
        assert_eq!(mix_rgb(o, d, -2.0, space), o, "{:?}", space);
        assert_eq!(mix_rgb(o, d, 3.0, space), d, "{:?}", space);
        assert_eq!(
            mix_rgb(o, d, f32::NAN, space),
            mix_rgb(o, d, 0.5, space),
            "{:?}",
            space
        );
    }
}

#[test]
fn test_gradient_hue_monotonic_ccw() {
    let mixer = Mixer::new(MixOptions::new(MixSpace::SrLch(HuePolicy::Ccw)));
    let ramp = mixer.gradient(Rgb::RED, Rgb::BLUE, 9);
    assert_eq!(ramp.len(), 9);
    assert_eq!(ramp[0], Rgb::RED);
    assert_eq!(ramp[8], Rgb::BLUE);

    let hues: Vec<f32> = ramp.iter().map(|&c| srgb_to_sr_lch(c).h).collect();
    for pair in hues.windows(2) {
        assert!(pair[1] > pair[0] - 1e-3, "hues not increasing: {:?}", hues);
    }
}
