//! Palette serialization for stdout.

use anyhow::{Context, Result};
use brandtone_palette::{ColorPalette, GeneratedPalettes, Mode, PaletteOverrides};

/// Both palettes with `overrides` merged in.
pub fn resolve(palettes: &GeneratedPalettes, overrides: &PaletteOverrides) -> GeneratedPalettes {
    GeneratedPalettes {
        light: palettes.resolve(Mode::Light, overrides),
        dark: palettes.resolve(Mode::Dark, overrides),
    }
}

pub fn to_json(palettes: &GeneratedPalettes) -> Result<String> {
    serde_json::to_string_pretty(palettes).context("Failed to serialize palettes")
}

/// CSS custom properties: light on `:root`, dark under `[data-theme="dark"]`.
pub fn to_css(palettes: &GeneratedPalettes) -> String {
    [
        css_block(":root", &palettes.light),
        css_block(r#"[data-theme="dark"]"#, &palettes.dark),
    ]
    .join("\n")
}

fn css_block(selector: &str, palette: &ColorPalette) -> String {
    let declarations: String = palette
        .iter()
        .map(|(role, color)| format!("  --color-{}: {};\n", role.token_name(), color))
        .collect();
    format!("{selector} {{\n{declarations}}}\n")
}
