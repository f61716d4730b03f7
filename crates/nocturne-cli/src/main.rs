//! Command-line front end for nocturne themes.
//!
//! Usage:
//! - `nocturne css [--prefix SEL] [--theme FILE]` - print the stylesheet
//! - `nocturne toml [--theme FILE]` - print the theme as TOML
//! - `nocturne swatch [--theme FILE]` - ANSI preview of every styled category
//! - `nocturne check FILE` - validate a TOML theme file

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nocturne::css::{CssOptions, stylesheet_with_options};
use nocturne::{Theme, ansi, builtin};
use owo_colors::OwoColorize;

/// Dark code theme tooling for generated documentation
#[derive(Debug, Parser)]
#[command(name = "nocturne", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the theme as a stylesheet
    Css {
        /// Selector prefix for every rule
        #[arg(long, default_value = ".highlight")]
        prefix: String,

        /// TOML theme file (defaults to the built-in dark theme)
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// Print the theme as a TOML document
    Toml {
        /// TOML theme file (defaults to the built-in dark theme)
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// Render an ANSI preview of every styled category
    Swatch {
        /// TOML theme file (defaults to the built-in dark theme)
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// Validate a TOML theme file
    Check {
        /// Theme file to validate
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Css { prefix, theme } => {
            let theme = load_theme(theme.as_deref())?;
            let options = CssOptions { prefix };
            print!("{}", stylesheet_with_options(&theme, &options));
        }
        Command::Toml { theme } => {
            let theme = load_theme(theme.as_deref())?;
            print!("{}", theme.to_toml_string());
        }
        Command::Swatch { theme } => {
            let theme = load_theme(theme.as_deref())?;
            print!("{}", ansi::swatch(&theme));
        }
        Command::Check { file } => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match Theme::from_toml_str(&input) {
                Ok(theme) => {
                    println!(
                        "{} {} ({} styled categories)",
                        "ok:".green().bold(),
                        theme.name,
                        theme.effective().len()
                    );
                }
                Err(e) => {
                    eprintln!("{} {}: {e}", "invalid:".red().bold(), file.display());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        None => Ok(builtin::dark()),
        Some(path) => {
            let input = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Theme::from_toml_str(&input)
                .with_context(|| format!("failed to parse {}", path.display()))
        }
    }
}
