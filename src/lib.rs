// Library root
// -----------
// The `publish` binary parses its arguments into a `PublishConfig` and hands
// it to `run`, which performs exactly one upload and reports the outcome.
//
// Module responsibilities:
// - `cli`: clap argument surface.
// - `config`: local validation (files exist, payload parses).
// - `api`: the multipart PUT and interpretation of the reply.
// - `wire`: JSON layout of the `data` form field.
// - `ui`: console output.
// - `error`: the failure taxonomy shared by all of the above.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod wire;

use api::{HiveClient, HiveRef};
use config::PublishConfig;
use error::Result;
use serde_json::Value;

/// Upload the package described by `config` and return the parsed reply.
pub fn run(config: &PublishConfig) -> Result<Value> {
    ui::print_summary(config);

    let client = HiveClient::new(config.base_url.clone(), config.api_key.clone())?;

    let spinner = ui::upload_spinner();
    let sent = client.update_hive_from_mcp_server(&config.hive_id, &config.zip_path, &config.payload);
    spinner.finish_and_clear();
    let raw = sent?;

    ui::print_response_head(&raw);
    let body = api::parse_body(raw.status, &raw.body)?;
    ui::print_response_body(&body);
    api::check_status(raw.status, &body)?;

    ui::print_success(&HiveRef::from_response(&body));
    Ok(body)
}
