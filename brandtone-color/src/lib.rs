//! Color-space utilities for the brandtone palette engine.
//!
//! This crate is the only place where hex sRGB meets the perceptual math:
//!
//! - [`HexColor`] parses and formats `#RRGGBB` strings.
//! - [`Oklch`], [`to_perceptual`] and [`from_perceptual`] move between hex
//!   and OKLCH, gamut-mapping on the way back.
//! - [`relative_luminance`] and [`contrast_ratio`] implement the WCAG
//!   formulas, and [`ensure_contrast`] nudges lightness until a minimum
//!   ratio is met.
//!
//! # Example
//!
//! ```
//! use brandtone_color::{Direction, HexColor, contrast_ratio, ensure_contrast};
//!
//! let background = HexColor::parse("#FFFFFF")?;
//! let gray = HexColor::parse("#999999")?;
//! assert!(contrast_ratio(&gray, &background) < 4.5);
//!
//! let readable = ensure_contrast(&gray, &background, 4.5, Direction::Darken);
//! assert!(contrast_ratio(&readable, &background) >= 4.5);
//! # Ok::<(), brandtone_color::InvalidColorError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod contrast;
mod hex;
mod oklch;

pub use contrast::{
    CONTRAST_MAX_ITERATIONS, CONTRAST_STEP, ContrastOutcome, ContrastSearch, Direction,
    WHITE_TEXT_LUMINANCE_THRESHOLD, contrast_ratio, ensure_contrast, relative_luminance,
    should_use_white_text,
};
pub use hex::{HexColor, InvalidColorError, is_hex_color};
pub use oklch::{ACHROMATIC_CHROMA, Oklch, from_perceptual, normalize_hue, to_perceptual};
