//! Color value types
//!
//! This module provides:
//! - [`Rgb`]: gamma-encoded sRGB, also used for linear RGB
//! - [`Xyz`]: the SR XYZ waypoint between linear RGB and SR LAB 2
//! - [`Lab`]: SR LAB 2
//! - [`Lch`]: SR LCH, the polar form of SR LAB 2
//!
//! All four are `#[repr(C)]` quadruples of `f32` and can be viewed as
//! `&[f32]` through `bytemuck`.

pub mod lab;
pub mod lch;
pub mod rgb;
pub mod xyz;

pub use lab::Lab;
pub use lch::{Lch, SR_HUE_LIGHT, SR_HUE_SHADOW};
pub use rgb::Rgb;
pub use xyz::Xyz;
