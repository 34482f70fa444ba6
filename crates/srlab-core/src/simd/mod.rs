//! Batch color conversions with runtime CPU dispatch
//!
//! Every function here has a scalar counterpart in [`crate::convert`] or
//! [`crate::mix`] and produces bit-identical results; the batch forms
//! exist so the compiler can vectorize the loop for the detected target
//! via the `multiversion` crate.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! Output buffers must be at least as long as the input; shorter buffers
//! panic.

mod batch;
mod gamma;

pub use batch::{
    mix_batch, sr_lab2_to_srgb_batch, sr_lch_to_srgb_batch, srgb_to_sr_lab2_batch,
    srgb_to_sr_lch_batch, srgb8_to_sr_lab2_batch,
};
pub use gamma::{
    linear_to_srgb_batch, linear_to_srgb_f32_batch, srgb_to_linear_batch, srgb_to_linear_f32_batch,
};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_features() {
        let features = active_features();
        println!("Active SIMD features: {}", features);
        assert!(["AVX2", "SSE4.1", "NEON", "scalar"].contains(&features));
    }
}
