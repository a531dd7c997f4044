//! Boardmeta CLI - Arduino board and library metadata publisher
//!
//! Entry point for the boardmeta command-line application.

use clap::Parser;

use boardmeta::cli::output::display_error;
use boardmeta::cli::Cli;
use boardmeta::error::AggregateError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let output = cli.output_config();

    // Logs share stderr with error reports; stdout carries progress only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli.run().await {
        display_error(&e);
        let code = e
            .downcast_ref::<AggregateError>()
            .map_or(1, AggregateError::exit_code);
        std::process::exit(code);
    }
}
