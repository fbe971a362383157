//! Contrast report for a finished palette.
//!
//! Useful after overrides have been applied, since manual edits are not
//! held to the generator's guarantees.

use brandtone_color::contrast_ratio;

use crate::{
    on_color::ON_COLOR_MIN_CONTRAST,
    options::{PaletteDefaults, PaletteOptions},
    palette::ColorPalette,
    role::ColorRole,
    surface::{TEXT_MIN_CONTRAST, TEXT_MUTED_MIN_CONTRAST},
};

/// One foreground/background pair of an [`audit`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ContrastCheck {
    /// Role drawn on top.
    pub foreground: ColorRole,
    /// Role drawn underneath.
    pub background: ColorRole,
    /// Measured contrast ratio.
    pub ratio: f64,
    /// Ratio the pair should reach.
    pub minimum: f64,
}

impl ContrastCheck {
    /// Returns `true` when `ratio` reaches `minimum`.
    pub fn passes(&self) -> bool {
        self.ratio >= self.minimum
    }
}

const FIXED_PAIRS: [(ColorRole, ColorRole, f64); 6] = [
    (ColorRole::Text, ColorRole::Bg, TEXT_MIN_CONTRAST),
    (ColorRole::TextMuted, ColorRole::Bg, TEXT_MUTED_MIN_CONTRAST),
    (ColorRole::OnPrimary, ColorRole::Primary, ON_COLOR_MIN_CONTRAST),
    (ColorRole::OnSecondary, ColorRole::Secondary, ON_COLOR_MIN_CONTRAST),
    (ColorRole::OnTertiary, ColorRole::Tertiary, ON_COLOR_MIN_CONTRAST),
    (ColorRole::OnAccent, ColorRole::Accent, ON_COLOR_MIN_CONTRAST),
];

const SEMANTIC_ROLES: [ColorRole; 3] = [ColorRole::Success, ColorRole::Warning, ColorRole::Error];

/// Measures every readability pair of `palette`, grading status colors
/// against `surface` at [`PaletteDefaults::SEMANTIC_MIN_CONTRAST`].
///
/// Status colors are reported but not adjusted by default generation, so a
/// failing `warning` check on a light palette is expected unless
/// [`PaletteOptions::enforce_semantic_contrast`] was set.
pub fn audit(palette: &ColorPalette) -> Vec<ContrastCheck> {
    checks(palette, PaletteDefaults::SEMANTIC_MIN_CONTRAST)
}

/// Like [`audit`], but grades status colors at
/// `options.semantic_min_contrast`.
pub fn audit_with(palette: &ColorPalette, options: &PaletteOptions) -> Vec<ContrastCheck> {
    checks(palette, options.semantic_min_contrast)
}

fn checks(palette: &ColorPalette, semantic_minimum: f64) -> Vec<ContrastCheck> {
    let semantic = SEMANTIC_ROLES.map(|role| (role, ColorRole::Surface, semantic_minimum));
    FIXED_PAIRS
        .iter()
        .chain(semantic.iter())
        .map(|&(foreground, background, minimum)| ContrastCheck {
            foreground,
            background,
            ratio: contrast_ratio(palette.get(foreground), palette.get(background)),
            minimum,
        })
        .collect()
}
