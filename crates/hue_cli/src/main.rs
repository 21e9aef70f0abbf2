//! Hue CLI
//!
//! Inspect, validate, and export design-token themes.
//!
//! - `hue presets` lists registered themes
//! - `hue check <file>` validates a theme file, including WCAG contrast
//! - `hue show` prints resolved tokens for an accessibility context
//! - `hue export` writes a theme as CSS variables, JSON, or TOML

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hue_theme::{SizeCategory, WcagLevel};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Design-token theme tool
#[derive(Parser, Debug)]
#[command(name = "hue")]
#[command(about = "Inspect, validate, and export design-token themes")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./hue.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available themes
    Presets,

    /// Validate a theme file
    Check {
        /// Theme file to validate
        file: PathBuf,

        /// WCAG level to check contrast against
        #[arg(long, value_enum, default_value_t = Level::Aa)]
        level: Level,
    },

    /// Print resolved tokens
    Show {
        #[command(flatten)]
        source: ThemeSource,

        #[command(flatten)]
        accessibility: AccessibilityArgs,

        /// Custom token override, e.g. `colors.primary=#FF5500`
        #[arg(long = "set", value_name = "PATH=VALUE")]
        overrides: Vec<String>,

        /// Single token to print, e.g. `typography.bodyMedium`
        path: Option<String>,
    },

    /// Export a theme
    Export {
        #[command(flatten)]
        source: ThemeSource,

        #[command(flatten)]
        accessibility: AccessibilityArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Css)]
        format: Format,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Which theme a command operates on
#[derive(Args, Debug, Default)]
pub struct ThemeSource {
    /// Registered theme id (see `hue presets`)
    #[arg(long, conflicts_with = "file")]
    pub theme: Option<String>,

    /// Theme file to load
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Accessibility overrides on top of the configured context
#[derive(Args, Debug, Default)]
pub struct AccessibilityArgs {
    /// Dynamic Type size category, e.g. `large` or `accessibilityMedium`
    #[arg(long)]
    pub size_category: Option<SizeCategory>,

    /// Use bold legibility weight
    #[arg(long)]
    pub bold: bool,

    /// Collapse motion tokens to instant
    #[arg(long)]
    pub reduce_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Level {
    Aa,
    Aaa,
}

impl From<Level> for WcagLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Aa => WcagLevel::AA,
            Level::Aaa => WcagLevel::AAA,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Css,
    Json,
    Toml,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::HueConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Presets => commands::presets(&config),
        Command::Check { file, level } => commands::check(&config, &file, level.into()),
        Command::Show {
            source,
            accessibility,
            overrides,
            path,
        } => commands::show(&config, &source, &accessibility, &overrides, path.as_deref()),
        Command::Export {
            source,
            accessibility,
            format,
            output,
        } => commands::export(&config, &source, &accessibility, format, output.as_deref()),
    }
}
