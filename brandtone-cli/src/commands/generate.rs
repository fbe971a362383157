use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result, anyhow};
use brandtone_palette::{
    ColorPalette, ColorRole, HexColor, Mode, PaletteGenerator, PaletteOptions, PaletteOverrides,
    audit_with,
};
use clap::ValueEnum;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::{config::BrandtoneConfig, output, render};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{ "light": {...}, "dark": {...} }`
    Json,
    /// CSS custom properties
    Css,
}

/// A `--set mode.role=#RRGGBB` argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleOverride {
    pub mode: Mode,
    pub role: ColorRole,
    pub color: HexColor,
}

impl FromStr for RoleOverride {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (target, color) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected MODE.ROLE=HEX, got `{s}`"))?;
        let (mode, role) = target
            .split_once('.')
            .ok_or_else(|| anyhow!("expected MODE.ROLE before `=`, got `{target}`"))?;
        Ok(Self {
            mode: mode.parse()?,
            role: role.parse()?,
            color: HexColor::parse(color)?,
        })
    }
}

pub enum PaletteSource {
    Solid(String),
    Gradient {
        stops: Vec<String>,
        primary: Option<String>,
    },
}

pub struct GenerateOptions {
    pub format: OutputFormat,
    pub overrides: Vec<RoleOverride>,
    pub audit: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(source: PaletteSource, options: GenerateOptions) -> Result<()> {
    let config = match &options.config {
        Some(path) => BrandtoneConfig::load(path)?,
        None => BrandtoneConfig::default(),
    };
    let generator = PaletteGenerator::new(config.palette);

    let palettes = match &source {
        PaletteSource::Solid(color) => {
            output::status("Generating", format!("palettes from {color}"));
            generator
                .generate(color)
                .with_context(|| format!("Failed to generate palettes from `{color}`"))?
        }
        PaletteSource::Gradient { stops, primary } => {
            let primary = primary
                .as_deref()
                .or_else(|| stops.first().map(String::as_str))
                .ok_or_else(|| anyhow!("a gradient needs at least one stop"))?;
            output::status(
                "Generating",
                format!("palettes from {} stops, primary {primary}", stops.len()),
            );
            generator
                .generate_gradient(stops.as_slice(), primary)
                .context("Failed to generate gradient palettes")?
        }
    };

    let overrides = merge_overrides(config.overrides, &options.overrides);
    if !overrides.is_empty() {
        let count = Mode::ALL.iter().map(|&mode| overrides.iter(mode).count()).sum::<usize>();
        output::note(format!("applying {count} role override(s)"));
    }
    let resolved = render::resolve(&palettes, &overrides);

    if options.audit {
        for mode in Mode::ALL {
            print_audit(mode, resolved.palette(mode), generator.options());
        }
    }

    match options.format {
        OutputFormat::Json => println!("{}", render::to_json(&resolved)?),
        OutputFormat::Css => print!("{}", render::to_css(&resolved)),
    }
    Ok(())
}

/// Command-line overrides win over the config file.
fn merge_overrides(mut base: PaletteOverrides, args: &[RoleOverride]) -> PaletteOverrides {
    for entry in args {
        base.set(entry.mode, entry.role, entry.color.clone());
    }
    base
}

fn print_audit(mode: Mode, palette: &ColorPalette, options: &PaletteOptions) {
    let checks = audit_with(palette, options);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(format!("{mode} foreground")).fg(Color::Cyan),
            Cell::new("Background").fg(Color::Cyan),
            Cell::new("Ratio").fg(Color::Cyan),
            Cell::new("Minimum").fg(Color::Cyan),
            Cell::new("Result").fg(Color::Cyan),
        ]);
    for check in &checks {
        table.add_row(vec![
            Cell::new(check.foreground),
            Cell::new(check.background),
            Cell::new(format!("{:.2}", check.ratio)),
            Cell::new(format!("{:.1}", check.minimum)),
            Cell::new(output::verdict(check.passes())),
        ]);
    }
    eprintln!("{table}");

    let failing = checks.iter().filter(|check| !check.passes()).count();
    if failing > 0 {
        output::warn(format!("{failing} {mode} pair(s) below their minimum contrast"));
    }
}
