//! Solid and gradient palette generation.

use brandtone_color::{HexColor, InvalidColorError, Oklch, normalize_hue};
use tracing::debug;

use crate::{
    on_color::on_color_for,
    options::PaletteOptions,
    palette::{ColorPalette, GeneratedPalettes, Mode},
    semantic::SemanticColors,
    surface::Surfaces,
};

/// Chroma below which a brand color counts as neutral.
///
/// Neutral brands get warm and cool grays instead of hue-rotated brand
/// colors, and untinted surfaces.
pub const NEUTRAL_CHROMA: f64 = 0.03;
/// Lightness of the derived accent.
pub const ACCENT_LIGHTNESS: f64 = 0.65;
/// Chroma floor of the derived accent.
pub const ACCENT_MIN_CHROMA: f64 = 0.12;

const NEUTRAL_ACCENT: Oklch = Oklch::new(ACCENT_LIGHTNESS, 0.15, 40.0);
const NEUTRAL_GRAY_CHROMA: f64 = 0.02;
const WARM_GRAY_HUE: f64 = 40.0;
const COOL_GRAY_HUE: f64 = 220.0;

/// The parsed brand color every other role is derived from.
#[derive(Clone, Debug)]
struct Seed {
    hex: HexColor,
    color: Oklch,
}

impl Seed {
    fn parse(input: &str) -> Result<Self, InvalidColorError> {
        let hex = HexColor::parse(input)?;
        let color = Oklch::from_hex(&hex);
        Ok(Self { hex, color })
    }

    fn is_neutral(&self) -> bool {
        self.color.c < NEUTRAL_CHROMA
    }

    /// Chroma that surfaces and text are tinted with.
    fn tint_chroma(&self) -> f64 {
        if self.is_neutral() { 0.0 } else { self.color.c }
    }

    fn secondary(&self) -> HexColor {
        let Oklch { l, c, h } = self.color;
        if self.is_neutral() {
            Oklch::new(l * 0.85, NEUTRAL_GRAY_CHROMA, WARM_GRAY_HUE).to_hex()
        } else {
            Oklch::new(l * 0.95, c * 0.80, normalize_hue(h + 30.0)).to_hex()
        }
    }

    fn tertiary(&self) -> HexColor {
        let Oklch { l, c, h } = self.color;
        if self.is_neutral() {
            Oklch::new(l * 0.70, NEUTRAL_GRAY_CHROMA, COOL_GRAY_HUE).to_hex()
        } else {
            Oklch::new(l * 0.85, c * 0.65, normalize_hue(h - 60.0)).to_hex()
        }
    }

    fn accent(&self) -> HexColor {
        let Oklch { c, h, .. } = self.color;
        if self.is_neutral() {
            NEUTRAL_ACCENT.to_hex()
        } else {
            Oklch::new(
                ACCENT_LIGHTNESS,
                c.max(ACCENT_MIN_CHROMA),
                normalize_hue(h + 180.0),
            )
            .to_hex()
        }
    }
}

/// Brand colors shared by the light and dark palettes.
#[derive(Clone, Debug)]
struct BrandColors {
    primary: HexColor,
    secondary: HexColor,
    tertiary: HexColor,
    accent: HexColor,
}

/// Generates palette pairs with a fixed set of [`PaletteOptions`].
///
/// The free functions [`generate_palette`] and [`generate_gradient_palette`]
/// use [`PaletteOptions::default`].
///
/// ```
/// use brandtone_palette::{PaletteGenerator, PaletteOptionsBuilder};
///
/// let options = PaletteOptionsBuilder::default()
///     .enforce_semantic_contrast(true)
///     .build()?;
/// let palettes = PaletteGenerator::new(options).generate("#2563EB")?;
/// assert_eq!(palettes.light.primary.as_str(), "#2563EB");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteGenerator {
    options: PaletteOptions,
}

impl PaletteGenerator {
    /// Creates a generator.
    pub fn new(options: PaletteOptions) -> Self {
        Self { options }
    }

    /// The options this generator was built with.
    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    /// Derives both palettes from one brand color.
    ///
    /// `primary` is stored exactly as given; secondary, tertiary and accent
    /// are rotated around the hue wheel from it.
    pub fn generate(&self, primary: &str) -> Result<GeneratedPalettes, InvalidColorError> {
        let seed = Seed::parse(primary)?;
        let brand = BrandColors {
            secondary: seed.secondary(),
            tertiary: seed.tertiary(),
            accent: seed.accent(),
            primary: seed.hex.clone(),
        };
        Ok(self.build(&seed, brand))
    }

    /// Derives both palettes from gradient stops.
    ///
    /// The second and third stops become `secondary` and `tertiary`; a
    /// missing stop falls back to the previous brand color. Surfaces, text
    /// and accent follow `primary` as in [`generate`](Self::generate).
    /// Every stop is validated, used or not.
    pub fn generate_gradient<S: AsRef<str>>(
        &self,
        stops: &[S],
        primary: &str,
    ) -> Result<GeneratedPalettes, InvalidColorError> {
        let seed = Seed::parse(primary)?;
        let stops = stops
            .iter()
            .map(|stop| HexColor::parse(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let secondary = stops.get(1).cloned().unwrap_or_else(|| seed.hex.clone());
        let tertiary = stops.get(2).cloned().unwrap_or_else(|| secondary.clone());
        let brand = BrandColors {
            accent: seed.accent(),
            primary: seed.hex.clone(),
            secondary,
            tertiary,
        };
        Ok(self.build(&seed, brand))
    }

    fn build(&self, seed: &Seed, brand: BrandColors) -> GeneratedPalettes {
        GeneratedPalettes {
            light: self.build_mode(Mode::Light, seed, &brand),
            dark: self.build_mode(Mode::Dark, seed, &brand),
        }
    }

    fn build_mode(&self, mode: Mode, seed: &Seed, brand: &BrandColors) -> ColorPalette {
        debug!(
            primary = %seed.hex,
            %mode,
            neutral = seed.is_neutral(),
            "generating palette"
        );
        let hue = seed.color.h;
        let surfaces = Surfaces::derive(mode, hue, seed.tint_chroma());
        let semantic = SemanticColors::derive(mode, hue, &surfaces.surface, &self.options);

        ColorPalette {
            on_primary: on_color_for(&brand.primary),
            on_secondary: on_color_for(&brand.secondary),
            on_tertiary: on_color_for(&brand.tertiary),
            on_accent: on_color_for(&brand.accent),
            primary: brand.primary.clone(),
            secondary: brand.secondary.clone(),
            tertiary: brand.tertiary.clone(),
            accent: brand.accent.clone(),
            bg: surfaces.bg,
            surface: surfaces.surface,
            surface_raised: surfaces.surface_raised,
            border: surfaces.border,
            text: surfaces.text,
            text_muted: surfaces.text_muted,
            success: semantic.success,
            warning: semantic.warning,
            error: semantic.error,
        }
    }
}

/// Derives light and dark palettes from one brand color with default
/// options.
pub fn generate_palette(primary: &str) -> Result<GeneratedPalettes, InvalidColorError> {
    PaletteGenerator::default().generate(primary)
}

/// Derives light and dark palettes from gradient stops with default
/// options. See [`PaletteGenerator::generate_gradient`].
pub fn generate_gradient_palette<S: AsRef<str>>(
    stops: &[S],
    primary: &str,
) -> Result<GeneratedPalettes, InvalidColorError> {
    PaletteGenerator::default().generate_gradient(stops, primary)
}

#[cfg(test)]
mod tests {
    use brandtone_color::{contrast_ratio, relative_luminance};
    use proptest::prelude::*;

    use super::*;
    use crate::{
        ColorRole,
        surface::{TEXT_MIN_CONTRAST, TEXT_MUTED_MIN_CONTRAST},
    };

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).expect("valid hex")
    }

    fn assert_floors(palette: &ColorPalette) {
        assert!(contrast_ratio(&palette.text, &palette.bg) >= TEXT_MIN_CONTRAST);
        assert!(contrast_ratio(&palette.text_muted, &palette.bg) >= TEXT_MUTED_MIN_CONTRAST);
        for role in ColorRole::BRAND {
            let on = role.on_role().expect("brand roles have on-roles");
            assert!(contrast_ratio(palette.get(on), palette.get(role)) >= 4.5, "{on}");
        }
    }

    #[test]
    fn test_blue_brand_scenario() {
        let palettes = generate_palette("#2563EB").expect("valid hex");
        assert_eq!(palettes.light.primary.as_str(), "#2563EB");
        assert_eq!(palettes.dark.primary.as_str(), "#2563EB");
        assert!(relative_luminance(&palettes.light.bg) > 0.95);
        assert!(relative_luminance(&palettes.dark.bg) < 0.05);
        assert_floors(&palettes.light);
        assert_floors(&palettes.dark);
        assert_eq!(palettes.light.on_primary, HexColor::WHITE);
    }

    #[test]
    fn test_brand_colors_shared_across_modes() {
        let palettes = generate_palette("#E11D48").expect("valid hex");
        for role in ColorRole::BRAND {
            assert_eq!(palettes.light.get(role), palettes.dark.get(role), "{role}");
        }
        assert_ne!(palettes.light.bg, palettes.dark.bg);
        assert_ne!(palettes.light.success, palettes.dark.success);
    }

    #[test]
    fn test_gray_brand_is_neutral() {
        let palettes = generate_palette("#808080").expect("valid hex");
        for palette in [&palettes.light, &palettes.dark] {
            for color in [&palette.bg, &palette.surface, &palette.border, &palette.text] {
                let [r, g, b] = color.rgb();
                assert!(r == g && g == b, "{color}");
            }
            assert!(Oklch::from_hex(&palette.secondary).c < 0.03);
            assert!(Oklch::from_hex(&palette.tertiary).c < 0.03);
            assert!(Oklch::from_hex(&palette.accent).c > 0.1);
        }
    }

    #[test]
    fn test_extremes_keep_floors() {
        for input in ["#000000", "#FFFFFF", "#ff0000", "#00ff00", "#0000ff", "#ffff00"] {
            let palettes = generate_palette(input).expect("valid hex");
            assert_floors(&palettes.light);
            assert_floors(&palettes.dark);
        }
    }

    #[test]
    fn test_secondary_hue_wraps() {
        assert_eq!(normalize_hue(350.0 + 30.0), 20.0);

        // #EC4899 sits near 354°, so the +30 rotation wraps past zero.
        let seed = Seed::parse("#EC4899").expect("valid hex");
        assert!(seed.color.h > 340.0, "{}", seed.color.h);
        let secondary = Oklch::from_hex(&seed.secondary());
        let expected = normalize_hue(seed.color.h + 30.0);
        assert!(expected < 40.0);
        assert!((secondary.h - expected).abs() < 10.0, "{} vs {}", secondary.h, expected);
    }

    #[test]
    fn test_accent_is_complementary() {
        // A muted steel blue keeps the accent inside the sRGB gamut.
        let seed = Seed::parse("#5a7d9a").expect("valid hex");
        let accent = Oklch::from_hex(&seed.accent());
        let expected = normalize_hue(seed.color.h + 180.0);
        let diff = (accent.h - expected).abs();
        assert!(diff.min(360.0 - diff) < 8.0, "{} vs {}", accent.h, expected);
        assert!((accent.l - ACCENT_LIGHTNESS).abs() < 0.01);
    }

    #[test]
    fn test_invalid_input_rejected() {
        for input in ["not-a-color", "#ZZZZZZ", "#fff", "", "2563EB"] {
            let err = generate_palette(input).expect_err("must fail");
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn test_gradient_stops_map_to_brand_roles() {
        let stops = ["#2563EB", "#9333EA", "#DB2777"];
        let palettes = generate_gradient_palette(&stops, "#2563EB").expect("valid stops");
        assert_eq!(palettes.light.secondary.as_str(), "#9333EA");
        assert_eq!(palettes.light.tertiary.as_str(), "#DB2777");
        let solid = generate_palette("#2563EB").expect("valid hex");
        assert_eq!(palettes.light.accent, solid.light.accent);
        assert_eq!(palettes.dark.bg, solid.dark.bg);
    }

    #[test]
    fn test_gradient_fallbacks() {
        let single = generate_gradient_palette(&["#2563EB"], "#2563EB").expect("valid");
        assert_eq!(single.light.secondary, single.light.primary);
        assert_eq!(single.light.tertiary, single.light.primary);

        let pair = generate_gradient_palette(&["#2563EB", "#9333EA"], "#2563EB").expect("valid");
        assert_eq!(pair.light.tertiary, hex("#9333EA"));

        let empty: [&str; 0] = [];
        let none = generate_gradient_palette(&empty, "#2563EB").expect("valid");
        assert_eq!(none.dark.tertiary.as_str(), "#2563EB");
    }

    #[test]
    fn test_gradient_rejects_bad_stop() {
        let err = generate_gradient_palette(&["#2563EB", "#9333EA", "#DB27", "#ffffff"], "#2563EB")
            .expect_err("bad stop");
        assert_eq!(err.input(), "#DB27");

        let stops = vec![String::from("#2563EB"), String::from("bogus")];
        assert!(generate_gradient_palette(stops.as_slice(), "#2563EB").is_err());
        assert!(generate_gradient_palette(&["#2563EB"], "nope").is_err());
    }

    #[test]
    fn test_generator_keeps_options() {
        let options = PaletteOptions {
            enforce_semantic_contrast: true,
            semantic_min_contrast: 4.5,
        };
        let generator = PaletteGenerator::new(options.clone());
        assert_eq!(generator.options(), &options);
        let palettes = generator.generate("#FACC15").expect("valid hex");
        for palette in [&palettes.light, &palettes.dark] {
            for color in [&palette.success, &palette.warning, &palette.error] {
                assert!(contrast_ratio(color, &palette.surface) >= 4.5, "{color}");
            }
        }
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(rgb in any::<[u8; 3]>()) {
            let input = HexColor::from_rgb(rgb[0], rgb[1], rgb[2]);
            let a = generate_palette(input.as_str()).expect("valid hex");
            let b = generate_palette(input.as_str()).expect("valid hex");
            prop_assert_eq!(a, b);
        }

        #[test]
        fn every_palette_meets_floors(rgb in any::<[u8; 3]>()) {
            let input = HexColor::from_rgb(rgb[0], rgb[1], rgb[2]);
            let palettes = generate_palette(input.as_str()).expect("valid hex");
            for palette in [&palettes.light, &palettes.dark] {
                prop_assert_eq!(palette.iter().count(), ColorRole::LEN);
                prop_assert_eq!(&palette.primary, &input);
                prop_assert!(contrast_ratio(&palette.text, &palette.bg) >= TEXT_MIN_CONTRAST);
                prop_assert!(
                    contrast_ratio(&palette.text_muted, &palette.bg) >= TEXT_MUTED_MIN_CONTRAST
                );
                for role in ColorRole::BRAND {
                    let on = role.on_role().expect("brand roles have on-roles");
                    prop_assert!(contrast_ratio(palette.get(on), palette.get(role)) >= 4.5);
                }
            }
        }
    }
}
