//! Hue interpolation policies
//!
//! Hue is periodic, so blending two hues has to pick a direction around
//! the circle. Each policy is a pure function of the two endpoint hues
//! and the step; all outputs are wrapped into [0, 1).

use tracing::debug;

use crate::math::{mix, mod1};

/// Direction taken around the hue circle when blending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HuePolicy {
    /// Shortest arc
    #[default]
    Near,
    /// Longest arc
    Far,
    /// Clockwise: hue decreases, wrapping past 0.0 when needed
    Cw,
    /// Counter-clockwise: hue increases, wrapping past 1.0 when needed
    Ccw,
}

impl HuePolicy {
    /// Every policy, in declaration order
    pub const ALL: [HuePolicy; 4] = [HuePolicy::Near, HuePolicy::Far, HuePolicy::Cw, HuePolicy::Ccw];

    /// Blend hue `orig` toward `dest` by `step`
    ///
    /// Both hues are wrapped into [0, 1) first. A step at or below 0
    /// returns the wrapped origin, at or above 1 the wrapped destination.
    /// A NaN step is treated as 0.5.
    pub fn apply(self, orig: f32, dest: f32, step: f32) -> f32 {
        let step = if step.is_nan() {
            debug!("NaN hue step, using 0.5");
            0.5
        } else {
            step
        };

        let o = mod1(orig);
        let d = mod1(dest);
        if step <= 0.0 {
            return o;
        }
        if step >= 1.0 {
            return d;
        }

        let diff = d - o;
        let o_lt_d = o < d;
        let o_gt_d = o > d;
        let blend = |a: f32, b: f32| mod1(mix(a, b, step));

        match self {
            HuePolicy::Near => {
                if diff == 0.0 {
                    o
                } else if o_lt_d && diff > 0.5 {
                    blend(o + 1.0, d)
                } else if o_gt_d && diff < -0.5 {
                    blend(o, d + 1.0)
                } else {
                    blend(o, d)
                }
            }
            HuePolicy::Far => {
                if diff == 0.0 || (o_lt_d && diff < 0.5) {
                    blend(o + 1.0, d)
                } else if o_gt_d && diff > -0.5 {
                    blend(o, d + 1.0)
                } else {
                    blend(o, d)
                }
            }
            HuePolicy::Cw => {
                if diff == 0.0 {
                    d
                } else if o_lt_d {
                    blend(o + 1.0, d)
                } else {
                    blend(o, d)
                }
            }
            HuePolicy::Ccw => {
                if diff == 0.0 {
                    o
                } else if o_gt_d {
                    blend(o, d + 1.0)
                } else {
                    blend(o, d)
                }
            }
        }
    }
}
