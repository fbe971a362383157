use anyhow::{Context, Result};
use brandtone_palette::{HexColor, contrast_ratio};

use crate::output;

/// WCAG 2.x thresholds reported by `brandtone contrast`.
const LEVELS: [(&str, f64); 4] = [
    ("AA", 4.5),
    ("AA large", 3.0),
    ("AAA", 7.0),
    ("AAA large", 4.5),
];

pub fn execute(foreground: &str, background: &str) -> Result<()> {
    let fg = HexColor::parse(foreground).context("Invalid foreground color")?;
    let bg = HexColor::parse(background).context("Invalid background color")?;
    let ratio = contrast_ratio(&fg, &bg);

    println!("{ratio:.2}:1");
    for (level, minimum) in LEVELS {
        output::status(level, output::verdict(ratio >= minimum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_colors() {
        assert!(execute("#000000", "white").is_err());
        assert!(execute("#12345", "#ffffff").is_err());
    }

    #[test]
    fn test_accepts_valid_pair() {
        assert!(execute("#767676", "#FFFFFF").is_ok());
    }
}
