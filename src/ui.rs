// Console layer: everything the user sees on stdout.
// Output goes through `println!` like the rest of the CLI's flows; colour is
// only applied when stdout is a terminal so piped output stays plain.

use crate::api::{HiveRef, RawResponse};
use crate::config::PublishConfig;
use crate::error::PublishError;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::HeaderMap;
use serde_json::{Map, Value};
use std::time::Duration;

const SEPARATOR_WIDTH: usize = 50;

fn colour_enabled() -> bool {
    std::io::stdout().is_tty()
}

fn green(text: String) -> String {
    if colour_enabled() {
        text.green().to_string()
    } else {
        text
    }
}

fn red(text: String) -> String {
    if colour_enabled() {
        text.red().to_string()
    } else {
        text
    }
}

/// Render an optional JSON field for display. Strings are shown without
/// quotes; anything absent or null is `Unknown`.
pub fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "Unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Header map as a JSON object; repeated headers are joined with ", ".
pub fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        map.insert(name.as_str().to_string(), Value::String(joined));
    }
    Value::Object(map)
}

/// Configuration summary printed before the request goes out.
pub fn print_summary(config: &PublishConfig) {
    println!("🚀 Updating MCP Hive...");
    println!("📁 Zip file: {}", config.zip_path.display());
    println!("📋 Payload file: {}", config.payload_path.display());
    println!("🆔 Hive ID: {}", config.hive_id);
    println!("📋 Version: {}", config.payload_version());
    println!("📋 Payload content: {}", pretty(&config.payload));
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

pub fn print_response_head(res: &RawResponse) {
    println!("Status Code: {}", res.status.as_u16());
    println!("Response Headers: {}", headers_to_json(&res.headers));
}

pub fn print_response_body(body: &Value) {
    println!("Response Body: {}", pretty(body));
}

pub fn print_success(hive: &HiveRef) {
    println!("{}", green("✅ Success!".to_string()));
    println!();
    println!("🎉 Hive updated successfully!");
    println!("Hive ID: {}", display_field(hive.id.as_ref()));
    println!("Version: {}", display_field(hive.version.as_ref()));
}

/// One-line failure report for any error that ends the run.
pub fn failure_line(err: &PublishError) -> String {
    match err {
        PublishError::InvalidResponse { .. } => format!("❌ {err}"),
        e if e.is_unexpected() => format!("❌ Unexpected error: {e}"),
        e => format!("❌ Error: {e}"),
    }
}

pub fn print_failure(err: &PublishError) {
    println!("{}", red(failure_line(err)));
}

/// Spinner shown on stderr while the upload is in flight. indicatif hides it
/// when stderr is not a terminal.
pub fn upload_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Uploading...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
