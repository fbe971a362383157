//! Generator options.

use derive_builder::Builder;

/// Default values for [`PaletteOptions`].
pub struct PaletteDefaults;

impl PaletteDefaults {
    /// Semantic colors keep their tuned lightness unless asked otherwise.
    pub const ENFORCE_SEMANTIC_CONTRAST: bool = false;
    /// Minimum semantic-on-surface contrast when enforcement is on.
    pub const SEMANTIC_MIN_CONTRAST: f64 = 3.0;
}

/// Options for [`PaletteGenerator`](crate::PaletteGenerator).
///
/// With the `serde` feature every field is optional when deserializing, so a
/// configuration file only needs the keys it changes:
///
/// ```toml
/// enforce_semantic_contrast = true
/// semantic_min_contrast = 4.5
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(pattern = "owned")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PaletteOptions {
    /// Route `success`, `warning` and `error` through the contrast
    /// hill-climb against `surface`.
    ///
    /// Off by default: turning it on shifts the lightness of every brand's
    /// status colors.
    #[builder(default = "PaletteDefaults::ENFORCE_SEMANTIC_CONTRAST")]
    pub enforce_semantic_contrast: bool,
    /// Target ratio used when `enforce_semantic_contrast` is on.
    #[builder(default = "PaletteDefaults::SEMANTIC_MIN_CONTRAST")]
    pub semantic_min_contrast: f64,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            enforce_semantic_contrast: PaletteDefaults::ENFORCE_SEMANTIC_CONTRAST,
            semantic_min_contrast: PaletteDefaults::SEMANTIC_MIN_CONTRAST,
        }
    }
}
