//! Command-line argument parsing for chatrow.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

/// Options of a render run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderArgs {
    /// Fixture JSON; the built-in sample list when absent
    pub input: Option<PathBuf>,
    /// PNG to write
    pub output: Option<PathBuf>,
    /// Overrides the configured width
    pub width: Option<i32>,
    pub narrow: bool,
    pub compact: bool,
    /// Draw the list into the terminal
    pub preview: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Render a list (default)
    Render(RenderArgs),
    /// Arguments could not be understood
    Invalid(String),
}

/// Usage text printed by `--help` and after invalid arguments
pub const USAGE: &str = "\
Usage: chatrow [OPTIONS]

Options:
  -i, --input <FILE>    Fixture JSON describing the list (default: built-in sample)
  -o, --output <FILE>   Write the rendered list as PNG
  -w, --width <PX>      List width in pixels
      --narrow          Avatar-only layout
      --compact         Compact row variant
  -p, --preview         Draw the list in the terminal
  -V, --version         Print version
  -h, --help            Print this help";

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use chatrow::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chatrow".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut render = RenderArgs::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--narrow" => render.narrow = true,
            "--compact" => render.compact = true,
            "--preview" | "-p" => render.preview = true,
            "--input" | "-i" => match args.next() {
                Some(value) => render.input = Some(PathBuf::from(value)),
                None => return missing_value(&arg),
            },
            "--output" | "-o" => match args.next() {
                Some(value) => render.output = Some(PathBuf::from(value)),
                None => return missing_value(&arg),
            },
            "--width" | "-w" => match args.next().map(|v| v.parse::<i32>()) {
                Some(Ok(width)) if width > 0 => render.width = Some(width),
                Some(_) => return CliCommand::Invalid(format!("{} expects a positive number", arg)),
                None => return missing_value(&arg),
            },
            other => return CliCommand::Invalid(format!("unknown argument '{}'", other)),
        }
    }
    CliCommand::Render(render)
}

fn missing_value(flag: &str) -> CliCommand {
    CliCommand::Invalid(format!("{} expects a value", flag))
}
