//! WCAG luminance, contrast ratio and the lightness hill-climb.
//!
//! Readability is measured in sRGB relative luminance (the WCAG
//! definition), while adjustments move OKLCH lightness so each step looks
//! the same size whatever the hue.

use tracing::{debug, trace};

use crate::{hex::HexColor, oklch::Oklch};

/// Lightness moved per hill-climb iteration.
pub const CONTRAST_STEP: f64 = 0.02;

/// Hill-climb iterations before giving up.
pub const CONTRAST_MAX_ITERATIONS: u32 = 50;

/// Backgrounds with relative luminance below this take white text.
pub const WHITE_TEXT_LUMINANCE_THRESHOLD: f64 = 0.4;

/// Which way [`ensure_contrast`] moves the foreground's lightness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Raise lightness, for foregrounds on dark backgrounds.
    Lighten,
    /// Lower lightness, for foregrounds on light backgrounds.
    Darken,
}

impl Direction {
    fn signum(self) -> f64 {
        match self {
            Direction::Lighten => 1.0,
            Direction::Darken => -1.0,
        }
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(color: &HexColor) -> f64 {
    let [r, g, b] = color.rgb();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio in `[1, 21]`; argument order does not matter.
pub fn contrast_ratio(a: &HexColor, b: &HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Returns `true` when white text should be used on `background`.
pub fn should_use_white_text(background: &HexColor) -> bool {
    relative_luminance(background) < WHITE_TEXT_LUMINANCE_THRESHOLD
}

/// Nudges `foreground` lightness toward `direction` until it reaches
/// `min_ratio` against `background`.
///
/// This is a bounded hill-climb, not an analytic solve: it moves by
/// [`CONTRAST_STEP`] for at most [`CONTRAST_MAX_ITERATIONS`] steps. For
/// impossible requests (lightening a color already near white on a white
/// background) it returns the best color it reached instead of failing.
pub fn ensure_contrast(
    foreground: &HexColor,
    background: &HexColor,
    min_ratio: f64,
    direction: Direction,
) -> HexColor {
    ContrastSearch::default()
        .run(foreground, background, min_ratio, direction)
        .color
}

/// Tunable parameters of the contrast hill-climb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastSearch {
    /// Lightness moved per iteration.
    pub step: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for ContrastSearch {
    fn default() -> Self {
        Self {
            step: CONTRAST_STEP,
            max_iterations: CONTRAST_MAX_ITERATIONS,
        }
    }
}

/// Result of a [`ContrastSearch::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastOutcome {
    /// The chosen foreground.
    pub color: HexColor,
    /// Contrast of `color` against the background.
    pub ratio: f64,
    /// Iterations spent; `0` when the input already passed.
    pub iterations: u32,
    /// Whether `ratio` meets the requested minimum.
    pub reached: bool,
}

impl ContrastSearch {
    /// Runs the hill-climb. Only lightness changes; chroma and hue of the
    /// foreground are kept and lightness is clamped to `[0, 1]`.
    pub fn run(
        &self,
        foreground: &HexColor,
        background: &HexColor,
        min_ratio: f64,
        direction: Direction,
    ) -> ContrastOutcome {
        let initial = contrast_ratio(foreground, background);
        if initial >= min_ratio {
            return ContrastOutcome {
                color: foreground.clone(),
                ratio: initial,
                iterations: 0,
                reached: true,
            };
        }

        let mut current = Oklch::from_hex(foreground);
        let mut best = (foreground.clone(), initial);
        for iteration in 1..=self.max_iterations {
            let l = (current.l + direction.signum() * self.step).clamp(0.0, 1.0);
            current = current.with_lightness(l);
            let candidate = current.to_hex();
            let ratio = contrast_ratio(&candidate, background);
            if ratio >= min_ratio {
                trace!(
                    foreground = %foreground,
                    background = %background,
                    result = %candidate,
                    ratio,
                    iteration,
                    "contrast target reached"
                );
                return ContrastOutcome {
                    color: candidate,
                    ratio,
                    iterations: iteration,
                    reached: true,
                };
            }
            if ratio > best.1 {
                best = (candidate, ratio);
            }
        }

        debug!(
            foreground = %foreground,
            background = %background,
            min_ratio,
            best_ratio = best.1,
            "contrast budget exhausted"
        );
        ContrastOutcome {
            color: best.0,
            ratio: best.1,
            iterations: self.max_iterations,
            reached: false,
        }
    }
}
