//! JSON reference fixtures
//!
//! `testdata/sr_lab2_reference.json` holds conversions computed in double
//! precision outside this workspace.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// One forward conversion sample
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardCase {
    pub name: String,
    pub rgb: [f64; 3],
    pub lab: [f64; 3],
    pub lch: [f64; 3],
}

/// One inverse conversion sample
#[derive(Debug, Clone, Deserialize)]
pub struct InverseCase {
    pub name: String,
    pub lab: [f64; 3],
    pub rgb: [f64; 3],
}

/// All reference fixtures
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceFixtures {
    pub srgb_to_sr_lab2: Vec<ForwardCase>,
    pub sr_lab2_to_srgb: Vec<InverseCase>,
}

/// Path to the crate's `testdata` directory
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Load and parse the reference fixtures
pub fn load_reference_fixtures() -> Result<ReferenceFixtures> {
    let path = testdata_dir().join("sr_lab2_reference.json");
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let fixtures = load_reference_fixtures().unwrap();
        assert_eq!(fixtures.srgb_to_sr_lab2.len(), 10);
        assert_eq!(fixtures.sr_lab2_to_srgb.len(), 2);
        assert!(fixtures.srgb_to_sr_lab2.iter().any(|c| c.name == "steel"));
    }
}
