//! Mathematical operations for SR LAB 2 conversions
//!
//! This module provides foundational math operations used throughout srlab:
//! - Scalar helpers (clamp01, mod1, mix) and epsilon constants
//! - sRGB gamma companding
//! - 3x3 matrix operations for linear RGB↔SR XYZ transforms

pub mod gamma;
pub mod matrix;
pub mod scalar;

pub use gamma::{linear_to_srgb_channel, srgb_to_linear_channel};
pub use matrix::{LRGB_TO_SR_XYZ, Matrix3x3, SR_XYZ_TO_LRGB};
pub use scalar::{CHROMA_EPSILON, EPSILON, TAU, clamp01, mix, mod1};
