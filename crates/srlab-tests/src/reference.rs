//! Double-precision reference rendition of the SR LAB 2 pipeline
//!
//! Written independently of `srlab-core` from the published coefficients,
//! with no intermediate rounding to f32. Used to bound the error the core
//! crate accumulates from its f32 storage between stages.

use std::f64::consts::TAU;

const LRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.32053, 0.63692, 0.04256],
    [0.161987, 0.756636, 0.081376],
    [0.017228, 0.10866, 0.874112],
];

const XYZ_TO_LRGB: [[f64; 3]; 3] = [
    [5.435679, -4.599131, 0.163593],
    [-1.16809, 2.327977, -0.159798],
    [0.03784, -0.198564, 1.160644],
];

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// sRGB transfer function, encoded → linear
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function, linear → encoded
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn compand(v: f64) -> f64 {
    if v <= 216.0 / 24389.0 {
        v * 24389.0 / 2700.0
    } else {
        1.16 * v.cbrt() - 0.16
    }
}

fn expand(v: f64) -> f64 {
    if v <= 0.08 {
        v * 2700.0 / 24389.0
    } else {
        ((v + 0.16) / 1.16).powi(3)
    }
}

/// sRGB → SR LAB 2
pub fn srgb_to_sr_lab2(rgb: [f64; 3]) -> [f64; 3] {
    let lin = rgb.map(srgb_to_linear);
    let [x, y, z] = mul(&LRGB_TO_XYZ, lin).map(compand);
    [
        37.095 * x + 62.9054 * y - 0.0008 * z,
        663.4684 * x - 750.5078 * y + 87.0328 * z,
        63.9569 * x + 108.4576 * y - 172.4152 * z,
    ]
}

/// SR LAB 2 → sRGB, unclamped
pub fn sr_lab2_to_srgb(lab: [f64; 3]) -> [f64; 3] {
    let l = lab[0] * 0.01;
    let (a, b) = (lab[1], lab[2]);
    let xyz = [
        l + 0.000904127 * a + 0.000456344 * b,
        l - 0.000533159 * a - 0.000269178 * b,
        l - 0.0058 * b,
    ]
    .map(expand);
    mul(&XYZ_TO_LRGB, xyz).map(linear_to_srgb)
}

/// SR LAB 2 → SR LCH with hue in turns
pub fn sr_lab2_to_sr_lch(lab: [f64; 3]) -> [f64; 3] {
    let c = lab[1].hypot(lab[2]);
    let h = (lab[2].atan2(lab[1]) / TAU).rem_euclid(1.0);
    [lab[0], c, h]
}

/// Shortest distance between two hues in turns
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}
