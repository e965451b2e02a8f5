use chatrow::cli::{parse_args, run_cli_command};

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `CHATROW_LOG=chatrow=debug`
const LOG_ENV: &str = "CHATROW_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_cli_command(parse_args(std::env::args()))
}
