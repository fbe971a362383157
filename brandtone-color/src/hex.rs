//! Validated `#RRGGBB` colors.
//!
//! [`HexColor`] is the public currency of the engine: every palette role is
//! one. A parsed color keeps the exact text it was created from, so a
//! caller-supplied primary comes back byte-for-byte. Colors produced by the
//! engine itself are formatted as lowercase hex.

use std::{borrow::Cow, fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a string is not a `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {input}")]
pub struct InvalidColorError {
    input: String,
}

impl InvalidColorError {
    /// Creates an error for the rejected `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An opaque sRGB color written as `#RRGGBB`.
///
/// Upper and lower case digits are accepted; shorthand (`#fff`) and alpha
/// (`#ffffffff`) are not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor {
    rgb: [u8; 3],
    text: Cow<'static, str>,
}

impl HexColor {
    /// `#ffffff`
    pub const WHITE: HexColor = HexColor::from_static([0xff, 0xff, 0xff], "#ffffff");
    /// `#111111`, the dark foreground used on light brand colors.
    pub const NEAR_BLACK: HexColor = HexColor::from_static([0x11, 0x11, 0x11], "#111111");
    /// `#000000`
    pub const BLACK: HexColor = HexColor::from_static([0x00, 0x00, 0x00], "#000000");

    const fn from_static(rgb: [u8; 3], text: &'static str) -> Self {
        Self {
            rgb,
            text: Cow::Borrowed(text),
        }
    }

    /// Parses `#RRGGBB`, keeping `input` verbatim as the color's text.
    pub fn parse(input: &str) -> Result<Self, InvalidColorError> {
        match parse_channels(input) {
            Some(rgb) => Ok(Self {
                rgb,
                text: Cow::Owned(input.to_owned()),
            }),
            None => Err(InvalidColorError::new(input)),
        }
    }

    /// Creates a color from 8-bit channels, formatted as lowercase hex.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            text: Cow::Owned(format!("#{r:02x}{g:02x}{b:02x}")),
        }
    }

    /// The 8-bit red, green and blue channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// The color as written, e.g. `#2563EB`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` when both colors have the same channels, ignoring the
    /// letter case they were written in.
    pub fn same_rgb(&self, other: &HexColor) -> bool {
        self.rgb == other.rgb
    }
}

/// Returns `true` if `input` matches `^#[0-9A-Fa-f]{6}$`.
pub fn is_hex_color(input: &str) -> bool {
    parse_channels(input).is_some()
}

fn parse_channels(input: &str) -> Option<[u8; 3]> {
    let digits = input.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for HexColor {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match parse_channels(&value) {
            Some(rgb) => Ok(Self {
                rgb,
                text: Cow::Owned(value),
            }),
            None => Err(InvalidColorError::new(value)),
        }
    }
}

impl TryFrom<&str> for HexColor {
    type Error = InvalidColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.text.into_owned()
    }
}
