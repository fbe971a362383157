use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod config;
mod output;
mod render;

use commands::generate::{GenerateOptions, OutputFormat, PaletteSource, RoleOverride};

#[derive(Parser, Debug)]
#[command(name = "brandtone")]
#[command(version, about = "Accessible light and dark palettes from one brand color", long_about = None)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate palettes from a single brand color
    Solid {
        /// Brand color as #RRGGBB
        color: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate palettes from gradient stops
    Gradient {
        /// Gradient stops as #RRGGBB, first to last
        #[arg(required = true)]
        stops: Vec<String>,
        /// Brand color surfaces are derived from (defaults to the first stop)
        #[arg(long)]
        primary: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the WCAG contrast ratio between two colors
    Contrast {
        /// Foreground color
        foreground: String,
        /// Background color
        background: String,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Override a role, e.g. `dark.accent=#F97316` (repeatable)
    #[arg(long = "set", value_name = "MODE.ROLE=HEX")]
    overrides: Vec<RoleOverride>,
    /// Print a contrast report to stderr
    #[arg(long)]
    audit: bool,
    /// TOML file with generator options and overrides
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl OutputArgs {
    fn into_options(self) -> GenerateOptions {
        GenerateOptions {
            format: self.format,
            overrides: self.overrides,
            audit: self.audit,
            config: self.config,
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "error,brandtone=debug"
    } else {
        "error,brandtone=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

fn main() -> Result<()> {
    let Cli { verbose, command } = Cli::parse();
    init_tracing(verbose);

    match command {
        Commands::Solid { color, output } => {
            commands::generate::execute(PaletteSource::Solid(color), output.into_options())?;
        }
        Commands::Gradient {
            stops,
            primary,
            output,
        } => {
            commands::generate::execute(
                PaletteSource::Gradient { stops, primary },
                output.into_options(),
            )?;
        }
        Commands::Contrast {
            foreground,
            background,
        } => {
            commands::contrast::execute(&foreground, &background)?;
        }
    }

    Ok(())
}
