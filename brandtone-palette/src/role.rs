//! The seventeen palette roles and their stable names.
//!
//! Role names are the vocabulary exporters and stored projects bind to, so
//! they never change: camelCase in JSON, kebab-case as design tokens.

use std::{fmt, str::FromStr};

use crate::error::ParseNameError;

/// A named color role of a [`ColorPalette`](crate::ColorPalette).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ColorRole {
    /// The caller's brand color.
    Primary,
    /// Second brand color.
    Secondary,
    /// Third brand color.
    Tertiary,
    /// Complementary highlight color.
    Accent,
    /// Page background.
    Bg,
    /// Card and panel background.
    Surface,
    /// Raised surfaces such as menus and dialogs.
    SurfaceRaised,
    /// Dividers and outlines.
    Border,
    /// Foreground on `primary`.
    OnPrimary,
    /// Foreground on `secondary`.
    OnSecondary,
    /// Foreground on `tertiary`.
    OnTertiary,
    /// Foreground on `accent`.
    OnAccent,
    /// Body text.
    Text,
    /// Secondary text.
    TextMuted,
    /// Positive status.
    Success,
    /// Cautionary status.
    Warning,
    /// Error status.
    Error,
}

impl ColorRole {
    /// Number of roles.
    pub const LEN: usize = 17;

    /// Every role, in palette order.
    pub const ALL: [ColorRole; ColorRole::LEN] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Tertiary,
        ColorRole::Accent,
        ColorRole::Bg,
        ColorRole::Surface,
        ColorRole::SurfaceRaised,
        ColorRole::Border,
        ColorRole::OnPrimary,
        ColorRole::OnSecondary,
        ColorRole::OnTertiary,
        ColorRole::OnAccent,
        ColorRole::Text,
        ColorRole::TextMuted,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
    ];

    /// The four brand roles.
    pub const BRAND: [ColorRole; 4] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Tertiary,
        ColorRole::Accent,
    ];

    /// The camelCase name used in JSON, e.g. `surfaceRaised`.
    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Tertiary => "tertiary",
            ColorRole::Accent => "accent",
            ColorRole::Bg => "bg",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceRaised => "surfaceRaised",
            ColorRole::Border => "border",
            ColorRole::OnPrimary => "onPrimary",
            ColorRole::OnSecondary => "onSecondary",
            ColorRole::OnTertiary => "onTertiary",
            ColorRole::OnAccent => "onAccent",
            ColorRole::Text => "text",
            ColorRole::TextMuted => "textMuted",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
        }
    }

    /// The kebab-case design-token name, e.g. `surface-raised`.
    pub const fn token_name(self) -> &'static str {
        match self {
            ColorRole::SurfaceRaised => "surface-raised",
            ColorRole::OnPrimary => "on-primary",
            ColorRole::OnSecondary => "on-secondary",
            ColorRole::OnTertiary => "on-tertiary",
            ColorRole::OnAccent => "on-accent",
            ColorRole::TextMuted => "text-muted",
            other => other.name(),
        }
    }

    /// The foreground role paired with a brand role.
    pub const fn on_role(self) -> Option<ColorRole> {
        match self {
            ColorRole::Primary => Some(ColorRole::OnPrimary),
            ColorRole::Secondary => Some(ColorRole::OnSecondary),
            ColorRole::Tertiary => Some(ColorRole::OnTertiary),
            ColorRole::Accent => Some(ColorRole::OnAccent),
            _ => None,
        }
    }

    /// Returns `true` for `success`, `warning` and `error`.
    pub const fn is_semantic(self) -> bool {
        matches!(
            self,
            ColorRole::Success | ColorRole::Warning | ColorRole::Error
        )
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ParseNameError;

    /// Accepts either the camelCase or the kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == s || role.token_name() == s)
            .ok_or_else(|| ParseNameError::UnknownRole(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ColorRole::ALL.iter().map(|r| r.name()).collect();
        let tokens: HashSet<_> = ColorRole::ALL.iter().map(|r| r.token_name()).collect();
        assert_eq!(names.len(), ColorRole::LEN);
        assert_eq!(tokens.len(), ColorRole::LEN);
    }

    #[test]
    fn test_parse_both_spellings() {
        assert_eq!("surfaceRaised".parse(), Ok(ColorRole::SurfaceRaised));
        assert_eq!("surface-raised".parse(), Ok(ColorRole::SurfaceRaised));
        assert_eq!("on-accent".parse(), Ok(ColorRole::OnAccent));
        assert_eq!("bg".parse(), Ok(ColorRole::Bg));
        assert_eq!(
            "background".parse::<ColorRole>(),
            Err(ParseNameError::UnknownRole("background".to_owned()))
        );
    }

    #[test]
    fn test_on_roles_cover_brand() {
        for role in ColorRole::BRAND {
            assert!(role.on_role().is_some());
        }
        assert_eq!(ColorRole::Text.on_role(), None);
    }

    #[test]
    fn test_semantic_roles() {
        let semantic: Vec<_> = ColorRole::ALL.into_iter().filter(|r| r.is_semantic()).collect();
        assert_eq!(
            semantic,
            [ColorRole::Success, ColorRole::Warning, ColorRole::Error]
        );
    }
}
