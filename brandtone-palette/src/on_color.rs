//! Foreground colors for text placed on brand colors.
//!
//! Brand colors are caller-owned and never adjusted, so only the foreground
//! adapts: white on dark brands, near-black on light ones.

use brandtone_color::{HexColor, contrast_ratio, should_use_white_text};

/// Minimum contrast an on-color keeps against its brand color.
pub const ON_COLOR_MIN_CONTRAST: f64 = 4.5;

/// Picks the readable foreground for `background`.
///
/// The luminance threshold of [`should_use_white_text`] gives the first
/// pick: white below 0.4, `#111111` otherwise. This is not a plain
/// threshold rule, though. The 4.5:1 floor wins over the threshold, so when
/// the first pick misses it the other one is tried, then pure black. A
/// mid gray such as `#808080` therefore gets `#111111` even though it sits
/// below 0.4, and between roughly 18% and 20% luminance only pure black is
/// readable. One of white and pure black always reaches 4.58:1 against any
/// sRGB color.
pub fn on_color_for(background: &HexColor) -> HexColor {
    let (preferred, alternate) = if should_use_white_text(background) {
        (HexColor::WHITE, HexColor::NEAR_BLACK)
    } else {
        (HexColor::NEAR_BLACK, HexColor::WHITE)
    };

    [preferred, alternate, HexColor::BLACK]
        .into_iter()
        .find(|candidate| contrast_ratio(candidate, background) >= ON_COLOR_MIN_CONTRAST)
        .unwrap_or(HexColor::BLACK)
}
