//! Tinct CLI
//!
//! Builds design token themes and prints them for other tools to consume.
//!
//! ```text
//! tinct build --base-font-size 16 --format toml
//! tinct get fontSizes lg
//! tinct families
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build and inspect Tinct design token themes
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(about = "Build and inspect design token themes")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a theme and print every scale
    Build {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print a single token
    Get {
        /// Scale name (e.g. fontSizes, colors, spacing)
        scale: String,

        /// Token key within the scale (e.g. lg, gray-500, 1/2)
        key: String,

        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// List the color families merged into every theme
    Families,
}

/// Options shared by commands that build a theme
#[derive(Args, Debug)]
struct ThemeArgs {
    /// Theme config file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base font size, overrides the config file
    #[arg(short, long)]
    base_font_size: Option<f64>,

    /// Display scale factor used for the hairline width
    #[arg(short, long, default_value_t = 1.0, value_parser = commands::parse_scale_factor)]
    scale_factor: f64,
}

impl From<ThemeArgs> for commands::ThemeOptions {
    fn from(args: ThemeArgs) -> Self {
        Self {
            config: args.config,
            base_font_size: args.base_font_size,
            scale_factor: args.scale_factor,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Command::Build { theme, format } => commands::build(&theme.into(), format)?,
        Command::Get { scale, key, theme } => commands::get(&theme.into(), &scale, &key)?,
        Command::Families => commands::families(),
    };

    println!("{output}");
    Ok(())
}
