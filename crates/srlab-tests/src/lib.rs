//! # srlab-tests
//!
//! Accuracy and integration testing for srlab.
//!
//! This crate provides:
//! - An independent f64 rendition of the SR LAB 2 pipeline
//! - Error statistics for comparing buffers of converted colors
//! - Deterministic test patterns
//! - Loading of the JSON reference fixtures under `testdata/`
//!
//! ## Test Categories
//!
//! 1. **Reference Parity**: f32 core against the f64 reference and fixtures
//! 2. **Round Trips**: sRGB ⇄ SR LAB 2 ⇄ SR LCH over dense sweeps
//! 3. **Hue Policies**: mixing behavior under each policy
//! 4. **Palette Export**: GPL, PAL and ASE documents
//! 5. **Serde**: JSON round trips of color values and options

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_lab_buffers, compare_rgb_buffers, delta_e_lab};
pub use fixtures::{ReferenceFixtures, load_reference_fixtures};
