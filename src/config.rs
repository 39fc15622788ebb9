// Validated configuration for one publish run.
// Built from the parsed CLI arguments; all local checks happen here so that
// nothing reaches the network unless both input files are usable.

use crate::cli::Args;
use crate::error::{InputFile, PublishError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// API origin without trailing slashes.
    pub base_url: String,
    /// Sent as `x-api-key` when present.
    pub api_key: Option<String>,
    pub hive_id: String,
    pub zip_path: PathBuf,
    pub payload_path: PathBuf,
    /// Contents of the payload file, parsed once.
    pub payload: Value,
}

impl PublishConfig {
    /// Check that both files exist (zip first), then load the payload.
    pub fn from_args(args: Args) -> Result<Self> {
        ensure_exists(&args.zip_path, InputFile::Zip)?;
        ensure_exists(&args.custom_payload, InputFile::Payload)?;

        let payload = load_payload(&args.custom_payload)?;
        let api_key = Some(args.api_key).filter(|k| !k.is_empty());

        Ok(PublishConfig {
            base_url: normalize_base_url(&args.base_url),
            api_key,
            hive_id: args.hive_id,
            zip_path: args.zip_path,
            payload_path: args.custom_payload,
            payload,
        })
    }

    /// `version` field of the payload, for display.
    pub fn payload_version(&self) -> String {
        crate::ui::display_field(self.payload.get("version"))
    }
}

fn ensure_exists(path: &Path, kind: InputFile) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PublishError::MissingFile {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Read and parse the payload file. Any JSON value is accepted.
pub fn load_payload(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| PublishError::FileRead {
        kind: InputFile::Payload,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| PublishError::PayloadParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
