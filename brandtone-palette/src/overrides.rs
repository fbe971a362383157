//! Sparse per-role overrides kept beside a generated palette.
//!
//! Overrides are merged at read time and never written back into the
//! generated [`ColorPalette`], so regenerating from a new brand color keeps
//! the user's manual edits intact.

use std::collections::BTreeMap;

use brandtone_color::HexColor;

use crate::{
    palette::{ColorPalette, Mode},
    role::ColorRole,
};

/// Manual role edits for the light and dark palettes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PaletteOverrides {
    light: BTreeMap<ColorRole, HexColor>,
    dark: BTreeMap<ColorRole, HexColor>,
}

impl PaletteOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, mode: Mode) -> &BTreeMap<ColorRole, HexColor> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    fn map_mut(&mut self, mode: Mode) -> &mut BTreeMap<ColorRole, HexColor> {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    /// Overrides `role` in `mode`, returning the previous override.
    pub fn set(&mut self, mode: Mode, role: ColorRole, color: HexColor) -> Option<HexColor> {
        self.map_mut(mode).insert(role, color)
    }

    /// Removes the override of `role` in `mode`.
    pub fn reset(&mut self, mode: Mode, role: ColorRole) -> Option<HexColor> {
        self.map_mut(mode).remove(&role)
    }

    /// Removes every override of `mode`.
    pub fn clear(&mut self, mode: Mode) {
        self.map_mut(mode).clear();
    }

    /// The override of `role` in `mode`, if any.
    pub fn get(&self, mode: Mode, role: ColorRole) -> Option<&HexColor> {
        self.map(mode).get(&role)
    }

    /// Iterates the overrides of `mode` in role order.
    pub fn iter(&self, mode: Mode) -> impl Iterator<Item = (ColorRole, &HexColor)> + '_ {
        self.map(mode).iter().map(|(role, color)| (*role, color))
    }

    /// Returns `true` when neither mode has an override.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// Returns `base` with the overrides of `mode` applied.
    pub fn apply(&self, mode: Mode, base: &ColorPalette) -> ColorPalette {
        let mut palette = base.clone();
        for (role, color) in self.iter(mode) {
            *palette.get_mut(role) = color.clone();
        }
        palette
    }
}
