//! Accessible light and dark UI palettes from a single brand color.
//!
//! Pick a brand color, or a few gradient stops, and get back two complete
//! [`ColorPalette`]s with seventeen named roles each. Derivation happens in
//! OKLCH so tints and shades look even across hues, and every palette holds
//! these guarantees:
//!
//! - `primary` is exactly the color that was passed in.
//! - `text` reaches 4.5:1 and `text_muted` 3:1 against `bg`.
//! - every `on_*` role reaches 4.5:1 against its brand color.
//!
//! Generation is pure and deterministic. Manual edits live in
//! [`PaletteOverrides`] and are merged at read time with
//! [`GeneratedPalettes::resolve`].
//!
//! # Example
//!
//! ```
//! use brandtone_palette::{
//!     ColorRole, Mode, PaletteOverrides, audit, generate_palette, HexColor,
//! };
//!
//! let palettes = generate_palette("#2563EB")?;
//! assert_eq!(palettes.light.primary.as_str(), "#2563EB");
//! assert_eq!(palettes.dark.on_primary, HexColor::WHITE);
//!
//! let mut overrides = PaletteOverrides::new();
//! overrides.set(Mode::Dark, ColorRole::Accent, HexColor::parse("#F97316")?);
//! let dark = palettes.resolve(Mode::Dark, &overrides);
//! assert_eq!(dark.accent.as_str(), "#F97316");
//!
//! for check in audit(&dark) {
//!     println!(
//!         "{} on {}: {:.2} ({})",
//!         check.foreground,
//!         check.background,
//!         check.ratio,
//!         if check.passes() { "ok" } else { "low" }
//!     );
//! }
//! # Ok::<(), brandtone_palette::InvalidColorError>(())
//! ```
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod audit;
mod error;
pub mod generate;
pub mod on_color;
pub mod options;
mod overrides;
mod palette;
mod role;
pub mod semantic;
pub mod surface;

pub use brandtone_color::{HexColor, Oklch, contrast_ratio, relative_luminance};

pub use crate::{
    audit::{ContrastCheck, audit, audit_with},
    error::{InvalidColorError, ParseNameError},
    generate::{PaletteGenerator, generate_gradient_palette, generate_palette},
    on_color::on_color_for,
    options::{PaletteDefaults, PaletteOptions, PaletteOptionsBuilder, PaletteOptionsBuilderError},
    overrides::PaletteOverrides,
    palette::{ColorPalette, GeneratedPalettes, Mode},
    role::ColorRole,
};
