//! Backgrounds, borders and text tinted with the brand hue.

use brandtone_color::{HexColor, Oklch, ensure_contrast};

use crate::palette::Mode;

/// Minimum contrast of `text` against `bg`.
pub const TEXT_MIN_CONTRAST: f64 = 4.5;
/// Minimum contrast of `text_muted` against `bg`.
pub const TEXT_MUTED_MIN_CONTRAST: f64 = 3.0;

/// Lightness and the share of brand chroma kept by one role.
#[derive(Clone, Copy, Debug)]
struct Tone {
    l: f64,
    chroma_factor: f64,
}

impl Tone {
    const fn new(l: f64, chroma_factor: f64) -> Self {
        Self { l, chroma_factor }
    }

    fn resolve(self, hue: f64, tint_chroma: f64) -> HexColor {
        Oklch::new(self.l, tint_chroma * self.chroma_factor, hue).to_hex()
    }
}

#[derive(Clone, Copy, Debug)]
struct SurfaceTones {
    bg: Tone,
    surface: Tone,
    surface_raised: Tone,
    border: Tone,
    text: Tone,
    text_muted: Tone,
}

const LIGHT: SurfaceTones = SurfaceTones {
    bg: Tone::new(0.985, 0.012),
    surface: Tone::new(0.993, 0.008),
    surface_raised: Tone::new(0.998, 0.005),
    border: Tone::new(0.91, 0.02),
    text: Tone::new(0.13, 0.03),
    text_muted: Tone::new(0.50, 0.02),
};

const DARK: SurfaceTones = SurfaceTones {
    bg: Tone::new(0.14, 0.06),
    surface: Tone::new(0.19, 0.05),
    surface_raised: Tone::new(0.23, 0.04),
    border: Tone::new(0.27, 0.04),
    text: Tone::new(0.93, 0.04),
    text_muted: Tone::new(0.62, 0.03),
};

#[derive(Clone, Debug)]
pub(crate) struct Surfaces {
    pub(crate) bg: HexColor,
    pub(crate) surface: HexColor,
    pub(crate) surface_raised: HexColor,
    pub(crate) border: HexColor,
    pub(crate) text: HexColor,
    pub(crate) text_muted: HexColor,
}

impl Surfaces {
    /// `tint_chroma` is zero for neutral brands, which yields pure grays.
    pub(crate) fn derive(mode: Mode, hue: f64, tint_chroma: f64) -> Self {
        let tones = match mode {
            Mode::Light => LIGHT,
            Mode::Dark => DARK,
        };
        let direction = mode.contrast_direction();
        let bg = tones.bg.resolve(hue, tint_chroma);

        let text = ensure_contrast(
            &tones.text.resolve(hue, tint_chroma),
            &bg,
            TEXT_MIN_CONTRAST,
            direction,
        );
        let text_muted = ensure_contrast(
            &tones.text_muted.resolve(hue, tint_chroma),
            &bg,
            TEXT_MUTED_MIN_CONTRAST,
            direction,
        );

        Self {
            surface: tones.surface.resolve(hue, tint_chroma),
            surface_raised: tones.surface_raised.resolve(hue, tint_chroma),
            border: tones.border.resolve(hue, tint_chroma),
            bg,
            text,
            text_muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use brandtone_color::{contrast_ratio, relative_luminance};

    use super::*;

    #[test]
    fn test_zero_chroma_gives_grays() {
        for mode in Mode::ALL {
            let surfaces = Surfaces::derive(mode, 264.0, 0.0);
            for color in [
                &surfaces.bg,
                &surfaces.surface,
                &surfaces.surface_raised,
                &surfaces.border,
                &surfaces.text,
                &surfaces.text_muted,
            ] {
                let [r, g, b] = color.rgb();
                assert!(r == g && g == b, "{mode}: {color}");
            }
        }
    }

    #[test]
    fn test_light_surfaces_stack_upward() {
        let surfaces = Surfaces::derive(Mode::Light, 264.0, 0.2);
        let bg = relative_luminance(&surfaces.bg);
        assert!(bg > 0.95);
        assert!(relative_luminance(&surfaces.surface) >= bg);
        assert!(relative_luminance(&surfaces.border) < bg);
    }

    #[test]
    fn test_dark_surfaces_stack_upward() {
        let surfaces = Surfaces::derive(Mode::Dark, 264.0, 0.2);
        let bg = relative_luminance(&surfaces.bg);
        assert!(bg < 0.05);
        assert!(relative_luminance(&surfaces.surface) > bg);
        assert!(relative_luminance(&surfaces.surface_raised) > relative_luminance(&surfaces.surface));
    }

    #[test]
    fn test_text_floors() {
        for mode in Mode::ALL {
            for hue in [0.0, 90.0, 180.0, 270.0] {
                let surfaces = Surfaces::derive(mode, hue, 0.37);
                assert!(contrast_ratio(&surfaces.text, &surfaces.bg) >= TEXT_MIN_CONTRAST);
                assert!(
                    contrast_ratio(&surfaces.text_muted, &surfaces.bg) >= TEXT_MUTED_MIN_CONTRAST
                );
            }
        }
    }
}
