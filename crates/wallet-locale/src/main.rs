//! wallet-text: inspect and preview wallet widget text overrides

mod cli;
mod report;

use clap::Parser;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = cli::Cli::parse();
    tracing::debug!(?cli, "starting wallet-text");
    cli::run(cli)
}
