//! Palette records returned by the engine.

use std::{fmt, str::FromStr};

use brandtone_color::{Direction, HexColor};

use crate::{error::ParseNameError, overrides::PaletteOverrides, role::ColorRole};

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// Near-white surfaces, dark text.
    #[default]
    Light,
    /// Near-black surfaces, light text.
    Dark,
}

impl Mode {
    /// Both modes, light first.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Lowercase name, `light` or `dark`.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Which way foregrounds move to gain contrast against this mode's
    /// surfaces.
    pub const fn contrast_direction(self) -> Direction {
        match self {
            Mode::Light => Direction::Darken,
            Mode::Dark => Direction::Lighten,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => Err(ParseNameError::UnknownMode(s.to_owned())),
        }
    }
}

/// A complete set of UI color roles for one mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ColorPalette {
    /// The caller's brand color, unaltered.
    pub primary: HexColor,
    /// Second brand color.
    pub secondary: HexColor,
    /// Third brand color.
    pub tertiary: HexColor,
    /// Complementary highlight color.
    pub accent: HexColor,
    /// Page background.
    pub bg: HexColor,
    /// Card and panel background.
    pub surface: HexColor,
    /// Raised surfaces such as menus and dialogs.
    pub surface_raised: HexColor,
    /// Dividers and outlines.
    pub border: HexColor,
    /// Readable foreground on `primary`.
    pub on_primary: HexColor,
    /// Readable foreground on `secondary`.
    pub on_secondary: HexColor,
    /// Readable foreground on `tertiary`.
    pub on_tertiary: HexColor,
    /// Readable foreground on `accent`.
    pub on_accent: HexColor,
    /// Body text, at least 4.5:1 against `bg`.
    pub text: HexColor,
    /// Secondary text, at least 3:1 against `bg`.
    pub text_muted: HexColor,
    /// Positive status.
    pub success: HexColor,
    /// Cautionary status.
    pub warning: HexColor,
    /// Error status.
    pub error: HexColor,
}

impl ColorPalette {
    /// Returns the color assigned to `role`.
    pub fn get(&self, role: ColorRole) -> &HexColor {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Tertiary => &self.tertiary,
            ColorRole::Accent => &self.accent,
            ColorRole::Bg => &self.bg,
            ColorRole::Surface => &self.surface,
            ColorRole::SurfaceRaised => &self.surface_raised,
            ColorRole::Border => &self.border,
            ColorRole::OnPrimary => &self.on_primary,
            ColorRole::OnSecondary => &self.on_secondary,
            ColorRole::OnTertiary => &self.on_tertiary,
            ColorRole::OnAccent => &self.on_accent,
            ColorRole::Text => &self.text,
            ColorRole::TextMuted => &self.text_muted,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
        }
    }

    pub(crate) fn get_mut(&mut self, role: ColorRole) -> &mut HexColor {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Tertiary => &mut self.tertiary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Bg => &mut self.bg,
            ColorRole::Surface => &mut self.surface,
            ColorRole::SurfaceRaised => &mut self.surface_raised,
            ColorRole::Border => &mut self.border,
            ColorRole::OnPrimary => &mut self.on_primary,
            ColorRole::OnSecondary => &mut self.on_secondary,
            ColorRole::OnTertiary => &mut self.on_tertiary,
            ColorRole::OnAccent => &mut self.on_accent,
            ColorRole::Text => &mut self.text,
            ColorRole::TextMuted => &mut self.text_muted,
            ColorRole::Success => &mut self.success,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Error => &mut self.error,
        }
    }

    /// Returns a copy with `role` replaced by `color`.
    pub fn with_role(&self, role: ColorRole, color: HexColor) -> Self {
        let mut palette = self.clone();
        *palette.get_mut(role) = color;
        palette
    }

    /// Iterates over every role and its color, in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &HexColor)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// The light and dark palettes generated for one brand color.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedPalettes {
    /// Palette for light mode.
    pub light: ColorPalette,
    /// Palette for dark mode.
    pub dark: ColorPalette,
}

impl GeneratedPalettes {
    /// Returns the palette for `mode`.
    pub fn palette(&self, mode: Mode) -> &ColorPalette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Returns the palette for `mode` with `overrides` laid on top.
    ///
    /// The generated palettes are left untouched.
    pub fn resolve(&self, mode: Mode, overrides: &PaletteOverrides) -> ColorPalette {
        overrides.apply(mode, self.palette(mode))
    }
}
