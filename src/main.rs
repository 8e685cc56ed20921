use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

use marquee::cli::Cli;

const LOG_ENV: &str = "MARQUEE_LOG";

/// Logs go to stderr. A full-screen command only logs when asked to.
fn init_tracing(interactive: bool) {
    let filter = match tracing_subscriber::EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) if interactive => return,
        Err(_) => tracing_subscriber::EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.command.is_interactive());

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
