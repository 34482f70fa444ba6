//! Accuracy measurement for conversion round trips
//!
//! SR LAB 2 is built to be perceptually uniform, so plain Euclidean
//! distance in it serves as the color difference metric.

use srlab_core::{Lab, Rgb};

/// Statistics from a buffer comparison
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean error across all samples
    pub mean: f64,
    /// Maximum error
    pub max: f64,
    /// 95th percentile error
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Build statistics from raw per-sample errors
    pub fn from_errors(mut errors: Vec<f64>) -> Self {
        errors.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = errors.len();
        let mean = if count == 0 {
            0.0
        } else {
            errors.iter().sum::<f64>() / count as f64
        };
        let max = errors.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = errors.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// True when every sample is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Euclidean distance between two SR LAB 2 colors, alpha ignored
pub fn delta_e_lab(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dl = a[0] - b[0];
    let da = a[1] - b[1];
    let db = a[2] - b[2];
    (dl * dl + da * da + db * db).sqrt()
}

/// Compare two Lab buffers by ΔE
pub fn compare_lab_buffers(reference: &[Lab], result: &[Lab]) -> ErrorStats {
    assert_eq!(reference.len(), result.len());

    let errors = reference
        .iter()
        .zip(result)
        .map(|(r, o)| {
            delta_e_lab(
                [r.l as f64, r.a as f64, r.b as f64],
                [o.l as f64, o.a as f64, o.b as f64],
            )
        })
        .collect();

    ErrorStats::from_errors(errors)
}

/// Compare two RGB buffers by their largest per-channel difference
pub fn compare_rgb_buffers(reference: &[Rgb], result: &[Rgb]) -> ErrorStats {
    assert_eq!(reference.len(), result.len());

    let errors = reference
        .iter()
        .zip(result)
        .map(|(r, o)| {
            let dr = (r.r - o.r).abs();
            let dg = (r.g - o.g).abs();
            let db = (r.b - o.b).abs();
            dr.max(dg).max(db) as f64
        })
        .collect();

    ErrorStats::from_errors(errors)
}
