//! `brandtone.toml` loading.
//!
//! ```toml
//! [palette]
//! enforce_semantic_contrast = true
//! semantic_min_contrast = 4.5
//!
//! [overrides.dark]
//! accent = "#F97316"
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use brandtone_palette::{PaletteOptions, PaletteOverrides};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BrandtoneConfig {
    pub palette: PaletteOptions,
    pub overrides: PaletteOverrides,
}

impl BrandtoneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
