// API client module: a small blocking HTTP client for the MCP Hive service.
// It builds the multipart upload and turns the raw reply into JSON; printing
// is left to `ui` so the interpretation steps can be tested on their own.

use crate::error::{InputFile, PublishError, Result};
use crate::wire;
use reqwest::blocking::{multipart, Client};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Content type declared for the zip part.
pub const ZIP_MIME: &str = "application/zip";

/// Blocking client bound to one API origin and an optional API key.
pub struct HiveClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Raw reply from the upload endpoint, before any interpretation.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// The `hive` object returned on success. Both fields are kept as
/// `serde_json::Value` because the service may send strings or numbers.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct HiveRef {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub version: Option<Value>,
}

impl HiveRef {
    /// Extract `hive` from a response body, empty when absent or malformed.
    pub fn from_response(body: &Value) -> Self {
        body.get("hive")
            .cloned()
            .and_then(|h| serde_json::from_value(h).ok())
            .unwrap_or_default()
    }
}

impl HiveClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HiveClient {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// `PUT` target for updating a hive from an MCP server package.
    pub fn update_url(&self, hive_id: &str) -> String {
        format!("{}/api/hives/{}/from-mcp-server", self.base_url, hive_id)
    }

    /// Upload the zip and the payload in one multipart PUT.
    pub fn update_hive_from_mcp_server(
        &self,
        hive_id: &str,
        zip_path: &Path,
        payload: &Value,
    ) -> Result<RawResponse> {
        let url = self.update_url(hive_id);

        let zip_bytes = fs::read(zip_path).map_err(|source| PublishError::FileRead {
            kind: InputFile::Zip,
            path: zip_path.to_path_buf(),
            source,
        })?;
        let file_name = zip_file_name(zip_path);
        tracing::debug!(%url, %file_name, zip_len = zip_bytes.len(), "building multipart upload");

        let part = multipart::Part::bytes(zip_bytes)
            .file_name(file_name)
            .mime_str(ZIP_MIME)?;
        let form = multipart::Form::new()
            .part("zipFile", part)
            .text("data", wire::encode_form_json(payload)?);

        let mut req = self.client.put(&url).multipart(form);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let res = req.send()?;
        let status = res.status();
        let headers = res.headers().clone();
        let body = res.text()?;
        tracing::info!(status = status.as_u16(), body_len = body.len(), "upload request completed");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Base name of the zip path, as sent in the multipart `filename`.
pub fn zip_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "package.zip".to_string())
}

/// Decode the reply body as JSON, keeping the raw text on failure.
pub fn parse_body(status: StatusCode, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|_| PublishError::InvalidResponse {
        status: status.as_u16(),
        body: body.to_string(),
    })
}

/// Turn a status >= 400 into an `Api` error carrying the body's `error`.
pub fn check_status(status: StatusCode, body: &Value) -> Result<()> {
    if status.as_u16() < 400 {
        return Ok(());
    }
    let message = match body.get("error") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "Unknown error".to_string(),
        Some(other) => other.to_string(),
    };
    tracing::info!(status = status.as_u16(), %message, "hive API rejected the upload");
    Err(PublishError::Api {
        status: status.as_u16(),
        message,
    })
}
