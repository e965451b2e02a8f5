//! CLI module for chatrow.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Rendering a list fixture to PNG or the terminal
//!
//! # Usage
//!
//! ```ignore
//! use chatrow::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Err(e) = run_cli_command(command) {
//!     eprintln!("Error: {}", e);
//!     std::process::exit(1);
//! }
//! ```

pub mod args;
pub mod render;
pub mod version;

pub use args::{parse_args, CliCommand, RenderArgs, USAGE};
pub use render::{handle_render_command, render_image};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::{eyre, Result};

/// Run a parsed CLI command.
///
/// Library errors are reported with their user-facing message and error
/// code attached.
pub fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Invalid(message) => Err(eyre!("{}\n\n{}", message, USAGE)),
        CliCommand::Render(args) => handle_render_command(&args).map_err(|e| {
            let code = e.error_code();
            let message = e.user_message();
            eyre!(e).wrap_err(format!("[{}] {}", code, message))
        }),
    }
}
