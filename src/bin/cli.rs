// src/bin/cli.rs
use proposal_desk::cli;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    cli::run().map_err(|e| color_eyre::eyre::eyre!(e.to_string()))
}
