//! Status colors that stay recognizable while leaning toward the brand hue.

use brandtone_color::{HexColor, Oklch, contrast_ratio, ensure_contrast, normalize_hue};
use tracing::debug;

use crate::{options::PaletteOptions, palette::Mode};

/// Canonical green hue for `success`.
pub const SUCCESS_HUE: f64 = 142.0;
/// Canonical amber hue for `warning`.
pub const WARNING_HUE: f64 = 75.0;
/// Canonical red hue for `error`.
pub const ERROR_HUE: f64 = 25.0;
/// Share of the brand hue mixed into each semantic hue.
pub const BRAND_HUE_INFLUENCE: f64 = 0.2;

/// Mixes `brand_hue` into `semantic_hue` at [`BRAND_HUE_INFLUENCE`].
///
/// The mix is a weighted average of the raw angles, not the shortest arc,
/// so a brand hue of 350° pulls `error` (25°) up to 90°. The result is
/// normalized into `[0, 360)`.
pub fn blend_hue(semantic_hue: f64, brand_hue: f64) -> f64 {
    normalize_hue(semantic_hue * (1.0 - BRAND_HUE_INFLUENCE) + brand_hue * BRAND_HUE_INFLUENCE)
}

#[derive(Clone, Copy, Debug)]
struct Tone {
    l: f64,
    c: f64,
}

#[derive(Clone, Copy, Debug)]
struct SemanticTones {
    success: Tone,
    warning: Tone,
    error: Tone,
}

const LIGHT: SemanticTones = SemanticTones {
    success: Tone { l: 0.50, c: 0.15 },
    warning: Tone { l: 0.52, c: 0.14 },
    error: Tone { l: 0.52, c: 0.16 },
};

const DARK: SemanticTones = SemanticTones {
    success: Tone { l: 0.68, c: 0.16 },
    warning: Tone { l: 0.76, c: 0.16 },
    error: Tone { l: 0.66, c: 0.18 },
};

impl SemanticTones {
    const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Light => LIGHT,
            Mode::Dark => DARK,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SemanticColors {
    pub(crate) success: HexColor,
    pub(crate) warning: HexColor,
    pub(crate) error: HexColor,
}

impl SemanticColors {
    pub(crate) fn derive(
        mode: Mode,
        brand_hue: f64,
        surface: &HexColor,
        options: &PaletteOptions,
    ) -> Self {
        let tones = SemanticTones::for_mode(mode);
        let pick = |tone: Tone, canonical: f64| {
            let color = Oklch::new(tone.l, tone.c, blend_hue(canonical, brand_hue)).to_hex();
            if !options.enforce_semantic_contrast {
                return color;
            }
            let fixed = ensure_contrast(
                &color,
                surface,
                options.semantic_min_contrast,
                mode.contrast_direction(),
            );
            if fixed != color {
                debug!(
                    %mode,
                    from = %color,
                    to = %fixed,
                    ratio = contrast_ratio(&fixed, surface),
                    "semantic color adjusted for contrast"
                );
            }
            fixed
        };

        Self {
            success: pick(tones.success, SUCCESS_HUE),
            warning: pick(tones.warning, WARNING_HUE),
            error: pick(tones.error, ERROR_HUE),
        }
    }
}
