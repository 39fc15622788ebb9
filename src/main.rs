// Entrypoint for the `publish` CLI.
// - Logs go to stderr; stdout carries the upload report only.
// - Every failure is printed once and mapped to exit code 1.

use clap::Parser;
use mcp_hive_publish::{cli::Args, config::PublishConfig, run, ui};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("failed to initialise logging: {e}");
    }

    let args = Args::parse();
    tracing::debug!(hive_id = %args.hive_id, base_url = %args.base_url, "arguments parsed");

    let outcome = PublishConfig::from_args(args).and_then(|config| run(&config));
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, status = ?e.status(), "publish failed");
            ui::print_failure(&e);
            ExitCode::FAILURE
        }
    }
}
