//! Test pattern generation
//!
//! Deterministic color sets for sweeping conversions and mixes.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use srlab_core::Rgb;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Grayscale ramp black to white
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Regular lattice with `n` steps per channel
    Lattice(usize),
    /// Random opaque colors with seed
    Random(u64),
    /// Saturated colors near gamut boundary
    GamutBoundary,
}

/// Generate `count` colors for a pattern
///
/// [`TestPattern::Lattice`] ignores `count` and yields `n³` colors.
pub fn generate_colors(pattern: TestPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ramp(i, count);
                Rgb::new(v, v, v, 1.0)
            })
            .collect(),
        TestPattern::ColorCube => {
            let corners = [
                Rgb::BLACK,
                Rgb::RED,
                Rgb::GREEN,
                Rgb::BLUE,
                Rgb::YELLOW,
                Rgb::MAGENTA,
                Rgb::CYAN,
                Rgb::WHITE,
            ];
            (0..count).map(|i| corners[i % 8]).collect()
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| hsv_to_rgb(i as f32 / count.max(1) as f32))
            .collect(),
        TestPattern::Lattice(n) => {
            let mut out = Vec::with_capacity(n * n * n);
            for r in 0..n {
                for g in 0..n {
                    for b in 0..n {
                        out.push(Rgb::new(ramp(r, n), ramp(g, n), ramp(b, n), 1.0));
                    }
                }
            }
            out
        }
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), 1.0))
                .collect()
        }
        TestPattern::GamutBoundary => {
            let colors = [
                Rgb::RED,
                Rgb::GREEN,
                Rgb::BLUE,
                Rgb::YELLOW,
                Rgb::MAGENTA,
                Rgb::CYAN,
                Rgb::new(1.0, 0.5, 0.0, 1.0),
                Rgb::new(0.5, 0.0, 1.0, 1.0),
            ];
            (0..count).map(|i| colors[i % 8]).collect()
        }
    }
}

/// Generate random interleaved RGBA8 bytes
pub fn generate_rgba8(seed: u64, pixel_count: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; pixel_count * 4];
    rng.fill_bytes(&mut data);
    data
}

fn ramp(i: usize, n: usize) -> f32 {
    if n <= 1 {
        0.0
    } else {
        i as f32 / (n - 1) as f32
    }
}

fn hsv_to_rgb(h: f32) -> Rgb {
    let h6 = h * 6.0;
    let x = 1.0 - (h6 % 2.0 - 1.0).abs();

    let (r, g, b) = if h6 < 1.0 {
        (1.0, x, 0.0)
    } else if h6 < 2.0 {
        (x, 1.0, 0.0)
    } else if h6 < 3.0 {
        (0.0, 1.0, x)
    } else if h6 < 4.0 {
        (0.0, x, 1.0)
    } else if h6 < 5.0 {
        (x, 0.0, 1.0)
    } else {
        (1.0, 0.0, x)
    };

    Rgb::new(r, g, b, 1.0)
}

/// Standard sweep sizes
pub mod sizes {
    pub const TINY: usize = 64;
    pub const SMALL: usize = 4096;
    pub const MEDIUM: usize = 65536;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_endpoints() {
        let data = generate_colors(TestPattern::Grayscale, 11);
        assert_eq!(data[0], Rgb::BLACK);
        assert_eq!(data[10], Rgb::WHITE);
    }

    #[test]
    fn test_lattice_size() {
        let data = generate_colors(TestPattern::Lattice(5), 0);
        assert_eq!(data.len(), 125);
        assert!(data.iter().all(|c| c.is_in_gamut(0.0)));
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_colors(TestPattern::Random(42), 100);
        let b = generate_colors(TestPattern::Random(42), 100);
        assert_eq!(a, b);
        assert_eq!(generate_rgba8(7, 10), generate_rgba8(7, 10));
    }

    #[test]
    fn test_hue_ramp_saturated() {
        for c in generate_colors(TestPattern::HueRamp, 60) {
            let max = c.r.max(c.g).max(c.b);
            let min = c.r.min(c.g).min(c.b);
            assert_eq!(max, 1.0);
            assert_eq!(min, 0.0);
        }
    }
}
