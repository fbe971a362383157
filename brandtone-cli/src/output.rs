//! Styled progress and diagnostics on stderr; stdout carries only palettes.

use console::{StyledObject, style};

const LABEL_WIDTH: usize = 12;

fn status_line(label: &str, message: &str) -> String {
    format!(
        "{:>width$} {message}",
        style(label).green().bold(),
        width = LABEL_WIDTH
    )
}

fn tagged_line(tag: StyledObject<&str>, message: &str) -> String {
    format!("{tag}: {message}")
}

/// Right-aligned green label, e.g. `  Generating palettes from #2563EB`.
pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!("{}", status_line(label, message.as_ref()));
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{}",
        tagged_line(style("warning").yellow().bold(), message.as_ref())
    );
}

pub fn note(message: impl AsRef<str>) {
    eprintln!("{}", tagged_line(style("note").blue().bold(), message.as_ref()));
}

/// Colors a contrast pass/fail verdict.
pub fn verdict(passes: bool) -> String {
    if passes {
        style("pass").green().to_string()
    } else {
        style("fail").red().bold().to_string()
    }
}
