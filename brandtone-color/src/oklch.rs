//! Conversion between hex sRGB and OKLCH.
//!
//! OKLCH is the cylindrical form of Björn Ottosson's Oklab space: lightness
//! `l` in `[0, 1]`, chroma `c >= 0` and hue `h` in degrees. Equal steps in
//! `l` look like equal brightness steps whatever the hue, which is what the
//! palette engine relies on when it builds tints and shades.
//!
//! The color math itself is the `palette` crate's. Projection back to sRGB
//! gamut-maps by clamping each encoded channel to `[0, 1]` before rounding
//! to 8 bits. Derived colors are often slightly out of gamut by
//! construction; they never fail.

use palette::{Clamp, FromColor, Srgb};

use crate::hex::HexColor;

/// Chroma below which a color is treated as achromatic and its hue as `0`.
///
/// Exact grays come out of the Oklab conversion with chroma around `1e-8`,
/// whose hue angle is pure rounding noise.
pub const ACHROMATIC_CHROMA: f64 = 1e-6;

/// A color in OKLCH coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Perceptual lightness, `0.0` black to `1.0` white.
    pub l: f64,
    /// Chroma, `0.0` for grays.
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

impl Oklch {
    /// Creates a color from raw coordinates.
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Converts a hex color into OKLCH.
    pub fn from_hex(color: &HexColor) -> Self {
        let [r, g, b] = color.rgb();
        let oklch = palette::Oklch::<f64>::from_color(Srgb::<u8>::new(r, g, b).into_format::<f64>());
        let c = oklch.chroma;
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            normalize_hue(oklch.hue.into_positive_degrees())
        };
        Self { l: oklch.l, c, h }
    }

    /// Projects the color onto the nearest 8-bit sRGB hex.
    pub fn to_hex(self) -> HexColor {
        let srgb = Srgb::<f64>::from_color(palette::Oklch::new(self.l, self.c, self.h))
            .clamp()
            .into_format::<u8>();
        HexColor::from_rgb(srgb.red, srgb.green, srgb.blue)
    }

    /// Returns the same chroma and hue at lightness `l`.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Returns `true` when hue carries no meaning for this color.
    pub fn is_achromatic(self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }
}

/// Parses a `#RRGGBB` string into OKLCH; `None` when it does not parse.
pub fn to_perceptual(hex: &str) -> Option<Oklch> {
    HexColor::parse(hex).ok().map(|color| Oklch::from_hex(&color))
}

/// Converts OKLCH coordinates to the nearest in-gamut hex color.
pub fn from_perceptual(l: f64, c: f64, h: f64) -> HexColor {
    Oklch::new(l, c, h).to_hex()
}

/// Wraps a hue angle into `[0, 360)`.
///
/// The double modulo keeps tiny negative inputs from rounding up to exactly
/// `360.0`.
pub fn normalize_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_black_and_white_endpoints() {
        let white = to_perceptual("#FFFFFF").expect("valid hex");
        assert!((white.l - 1.0).abs() < 1e-4);
        assert!(white.is_achromatic());
        assert_eq!(white.h, 0.0);

        let black = to_perceptual("#000000").expect("valid hex");
        assert!(black.l.abs() < 1e-6);
        assert_eq!(black.c, 0.0);
    }

    #[test]
    fn test_grays_are_achromatic() {
        for gray in ["#808080", "#111111", "#eeeeee", "#010101"] {
            let color = to_perceptual(gray).expect("valid hex");
            assert!(color.is_achromatic(), "{gray}: {color:?}");
            assert_eq!(color.h, 0.0);
        }
    }

    #[test]
    fn test_known_hues() {
        // Oklab places pure sRGB red near 29° and pure blue near 264°.
        let red = to_perceptual("#ff0000").expect("valid hex");
        assert!((red.h - 29.23).abs() < 0.5, "{red:?}");
        assert!((red.l - 0.628).abs() < 0.005, "{red:?}");

        let blue = to_perceptual("#0000ff").expect("valid hex");
        assert!((blue.h - 264.05).abs() < 0.5, "{blue:?}");
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(to_perceptual("not-a-color").is_none());
        assert!(to_perceptual("#ZZZZZZ").is_none());
    }

    #[test]
    fn test_zero_chroma_projects_to_gray() {
        for l in [0.14, 0.5, 0.91, 0.985, 0.998] {
            let [r, g, b] = from_perceptual(l, 0.0, 217.0).rgb();
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let vivid = from_perceptual(0.65, 0.4, 150.0);
        let dark = from_perceptual(0.0, 0.3, 10.0);
        let bright = from_perceptual(1.0, 0.3, 10.0);
        assert_eq!(vivid.as_str().len(), 7);
        assert_eq!(dark.as_str().len(), 7);
        assert_eq!(bright.as_str().len(), 7);
    }

    #[test]
    fn test_grid_matches_palette_projection() {
        for li in 0..=20 {
            for ci in 0..=8 {
                for hi in 0..36 {
                    let (l, c, h) = (li as f64 / 20.0, ci as f64 * 0.05, hi as f64 * 10.0);
                    let expected = Srgb::<f64>::from_color(palette::Oklch::new(l, c, h))
                        .clamp()
                        .into_format::<u8>();
                    assert_eq!(
                        from_perceptual(l, c, h).rgb(),
                        [expected.red, expected.green, expected.blue],
                        "({l}, {c}, {h})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_decomposition_matches_palette() {
        for hex in ["#2563EB", "#E11D48", "#FACC15", "#16a34a", "#9333EA", "#5a7d9a"] {
            let color = to_perceptual(hex).expect("valid hex");
            let [r, g, b] = HexColor::parse(hex).expect("valid hex").rgb();
            let expected =
                palette::Oklch::<f64>::from_color(Srgb::<u8>::new(r, g, b).into_format::<f64>());
            assert!((color.l - expected.l).abs() < 1e-12, "{hex}");
            assert!((color.c - expected.chroma).abs() < 1e-12, "{hex}");
            assert!((color.h - expected.hue.into_positive_degrees()).abs() < 1e-9, "{hex}");
        }
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(350.0 + 30.0), 20.0);
        assert_eq!(normalize_hue(-60.0), 300.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(0.0), 0.0);
        let tiny = normalize_hue(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    proptest! {
        #[test]
        fn hex_round_trips_through_oklch(rgb in any::<[u8; 3]>()) {
            let color = HexColor::from_rgb(rgb[0], rgb[1], rgb[2]);
            let back = Oklch::from_hex(&color).to_hex();
            prop_assert_eq!(back, color);
        }

        #[test]
        fn hue_is_always_normalized(rgb in any::<[u8; 3]>()) {
            let color = Oklch::from_hex(&HexColor::from_rgb(rgb[0], rgb[1], rgb[2]));
            prop_assert!((0.0..360.0).contains(&color.h));
        }

        #[test]
        fn projection_never_panics(l in 0.0f64..=1.0, c in 0.0f64..0.5, h in 0.0f64..360.0) {
            let hex = from_perceptual(l, c, h);
            prop_assert!(crate::is_hex_color(hex.as_str()));
        }
    }
}
