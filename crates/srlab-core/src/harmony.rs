//! Color harmonies
//!
//! Closed-form hue rotations on the a/b plane (for [`Lab`]) or hue
//! offsets in turns (for [`Lch`]). Lightness is reflected or pulled
//! toward a fixed target so that related colors stay distinguishable.
//!
//! | harmony     | hue offsets        | lightness                 |
//! |-------------|--------------------|---------------------------|
//! | complement  | 180°               | 100 − l                   |
//! | analogous   | ±30°               | (2l + 50) / 3             |
//! | split       | ±150°              | (250 − 2l) / 3            |
//! | square      | 90°, 180°, 270°    | 50, 100 − l, 50           |
//! | triadic     | ±120°              | (200 − l) / 3             |
//! | tetradic    | 120°, 180°, 300°   | (200 − l)/3, 100 − l, (100 + l)/3 |

use crate::color::{Lab, Lch};
use crate::math::mod1;

/// √3 / 2, sine of 60° and 120°
const SQRT_3_2: f64 = 0.8660254037844386;

/// Harmony kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Harmony {
    Analogous,
    Complement,
    Split,
    Square,
    Tetradic,
    Triadic,
}

impl Harmony {
    pub const ALL: [Harmony; 6] = [
        Harmony::Analogous,
        Harmony::Complement,
        Harmony::Split,
        Harmony::Square,
        Harmony::Tetradic,
        Harmony::Triadic,
    ];

    /// Number of colors produced
    pub const fn len(self) -> usize {
        match self {
            Harmony::Complement => 1,
            Harmony::Analogous | Harmony::Split | Harmony::Triadic => 2,
            Harmony::Square | Harmony::Tetradic => 3,
        }
    }

    /// Apply to a Lab color
    pub fn apply_lab(self, o: &Lab) -> Vec<Lab> {
        match self {
            Harmony::Analogous => analogous_lab(o).to_vec(),
            Harmony::Complement => vec![complement_lab(o)],
            Harmony::Split => split_lab(o).to_vec(),
            Harmony::Square => square_lab(o).to_vec(),
            Harmony::Tetradic => tetradic_lab(o).to_vec(),
            Harmony::Triadic => triadic_lab(o).to_vec(),
        }
    }

    /// Apply to an Lch color
    pub fn apply_lch(self, o: &Lch) -> Vec<Lch> {
        match self {
            Harmony::Analogous => analogous_lch(o).to_vec(),
            Harmony::Complement => vec![complement_lch(o)],
            Harmony::Split => split_lch(o).to_vec(),
            Harmony::Square => square_lch(o).to_vec(),
            Harmony::Tetradic => tetradic_lch(o).to_vec(),
            Harmony::Triadic => triadic_lch(o).to_vec(),
        }
    }
}

/// Rotate (a, b) by ±30° about the gray axis
pub fn analogous_lab(o: &Lab) -> [Lab; 2] {
    let l = ((o.l as f64 * 2.0 + 50.0) / 3.0) as f32;
    let (a, b) = (o.a as f64, o.b as f64);
    let (rt32a, rt32b) = (SQRT_3_2 * a, SQRT_3_2 * b);
    let (half_a, half_b) = (0.5 * a, 0.5 * b);
    [
        Lab::new(l, (rt32a - half_b) as f32, (rt32b + half_a) as f32, o.alpha),
        Lab::new(l, (rt32a + half_b) as f32, (rt32b - half_a) as f32, o.alpha),
    ]
}

/// Negate (a, b) and reflect lightness about 50
pub fn complement_lab(o: &Lab) -> Lab {
    Lab::new((100.0 - o.l as f64) as f32, -o.a, -o.b, o.alpha)
}

/// Rotate (a, b) by ±150°
pub fn split_lab(o: &Lab) -> [Lab; 2] {
    let l = ((250.0 - o.l as f64 * 2.0) / 3.0) as f32;
    let (a, b) = (o.a as f64, o.b as f64);
    let (rt32a, rt32b) = (-SQRT_3_2 * a, -SQRT_3_2 * b);
    let (half_a, half_b) = (0.5 * a, 0.5 * b);
    [
        Lab::new(l, (rt32a - half_b) as f32, (rt32b + half_a) as f32, o.alpha),
        Lab::new(l, (rt32a + half_b) as f32, (rt32b - half_a) as f32, o.alpha),
    ]
}

/// Rotate (a, b) by 90°, 180° and 270°
pub fn square_lab(o: &Lab) -> [Lab; 3] {
    [
        Lab::new(50.0, -o.b, o.a, o.alpha),
        complement_lab(o),
        Lab::new(50.0, o.b, -o.a, o.alpha),
    ]
}

/// Rotate (a, b) by 120°, 180° and 300°
pub fn tetradic_lab(o: &Lab) -> [Lab; 3] {
    let l = o.l as f64;
    let (a, b) = (o.a as f64, o.b as f64);
    let (rt32a, rt32b) = (SQRT_3_2 * a, SQRT_3_2 * b);
    let (half_a, half_b) = (0.5 * a, 0.5 * b);
    [
        Lab::new(
            ((200.0 - l) / 3.0) as f32,
            (-half_a - rt32b) as f32,
            (-half_b + rt32a) as f32,
            o.alpha,
        ),
        complement_lab(o),
        Lab::new(
            ((100.0 + l) / 3.0) as f32,
            (half_a + rt32b) as f32,
            (half_b - rt32a) as f32,
            o.alpha,
        ),
    ]
}

/// Rotate (a, b) by ±120°
pub fn triadic_lab(o: &Lab) -> [Lab; 2] {
    let l = ((200.0 - o.l as f64) / 3.0) as f32;
    let (a, b) = (o.a as f64, o.b as f64);
    let (rt32a, rt32b) = (SQRT_3_2 * a, SQRT_3_2 * b);
    let (half_a, half_b) = (-0.5 * a, -0.5 * b);
    [
        Lab::new(l, (half_a - rt32b) as f32, (half_b + rt32a) as f32, o.alpha),
        Lab::new(l, (half_a + rt32b) as f32, (half_b - rt32a) as f32, o.alpha),
    ]
}

/// Negative chroma is clamped to 0
#[inline]
fn offset(o: &Lch, l: f32, turns: f32) -> Lch {
    Lch::new(l, o.c.max(0.0), mod1(o.h + turns), o.alpha)
}

/// Hue ±30°
pub fn analogous_lch(o: &Lch) -> [Lch; 2] {
    let l = (o.l * 2.0 + 50.0) / 3.0;
    [offset(o, l, 1.0 / 12.0), offset(o, l, -1.0 / 12.0)]
}

/// Hue + 180°, lightness reflected about 50
pub fn complement_lch(o: &Lch) -> Lch {
    offset(o, 100.0 - o.l, 0.5)
}

/// Hue ±150°
pub fn split_lch(o: &Lch) -> [Lch; 2] {
    let l = (250.0 - o.l * 2.0) / 3.0;
    [offset(o, l, 5.0 / 12.0), offset(o, l, -5.0 / 12.0)]
}

/// Hue + 90°, 180°, 270°
pub fn square_lch(o: &Lch) -> [Lch; 3] {
    [
        offset(o, 50.0, 0.25),
        complement_lch(o),
        offset(o, 50.0, -0.25),
    ]
}

/// Hue + 120°, 180°, 300°
pub fn tetradic_lch(o: &Lch) -> [Lch; 3] {
    [
        offset(o, (200.0 - o.l) / 3.0, 1.0 / 3.0),
        complement_lch(o),
        offset(o, (100.0 + o.l) / 3.0, -1.0 / 6.0),
    ]
}

/// Hue ±120°
pub fn triadic_lch(o: &Lch) -> [Lch; 2] {
    let l = (200.0 - o.l) / 3.0;
    [offset(o, l, 1.0 / 3.0), offset(o, l, -1.0 / 3.0)]
}
