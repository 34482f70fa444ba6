//! # srlab - SR LAB 2 color conversion and mixing
//!
//! Conversions between sRGB, linear RGB and the perceptually uniform
//! SR LAB 2 space and its polar form SR LCH, plus hue-aware mixing,
//! harmonies, hex text forms and palette export.
//!
//! ## Goals
//!
//! - **Reproducible**: every chained conversion visits each intermediate
//!   stage in the same order with the same fixed coefficients
//! - **Total**: numeric paths never panic or return NaN for finite input;
//!   degenerate cases fall back to defined values
//! - **Fast**: batch forms dispatch to AVX2, SSE4.1 or NEON at runtime
//!
//! ## Quick Start
//!
//! ```
//! use srlab_core::{HuePolicy, MixSpace, Rgb, mix_rgb, srgb_to_sr_lch};
//!
//! let orange: Rgb = "#ff8000".parse().unwrap();
//! let lch = srgb_to_sr_lch(orange);
//! assert!(lch.c > 0.0);
//!
//! let purple = mix_rgb(Rgb::RED, Rgb::BLUE, 0.5, MixSpace::SrLch(HuePolicy::Near));
//! assert!(purple.a == 1.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the color types and options

pub mod color;
pub mod convert;
pub mod error;
pub mod harmony;
pub mod hex;
pub mod hue;
pub mod math;
pub mod mix;
pub mod palette;
pub mod simd;

pub use color::{Lab, Lch, Rgb, SR_HUE_LIGHT, SR_HUE_SHADOW, Xyz};
pub use convert::{
    linear_to_sr_xyz, linear_to_srgb, sr_lab2_to_sr_lch, sr_lab2_to_sr_xyz, sr_lab2_to_srgb,
    sr_lch_to_sr_lab2, sr_lch_to_srgb, sr_xyz_to_linear, sr_xyz_to_sr_lab2, sr_xyz_to_srgb,
    srgb_to_linear, srgb_to_sr_lab2, srgb_to_sr_lch, srgb_to_sr_xyz,
};
pub use error::{Error, Result};
pub use harmony::Harmony;
pub use hex::{parse_hex, to_hex_string, to_hex_web};
pub use hue::HuePolicy;
pub use mix::{MixOptions, MixSpace, Mixer, mix_rgb};
pub use palette::{GplOptions, to_ase_bytes, to_gpl_string, to_pal_string};

/// Version of srlab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
