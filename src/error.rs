// Error types for the publish flow.
// Every failure ends the process with exit code 1; `main` decides how each
// variant is rendered on the console.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PublishError>;

/// Which of the two local inputs a file error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    Zip,
    Payload,
}

impl std::fmt::Display for InputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFile::Zip => f.write_str("Zip"),
            InputFile::Payload => f.write_str("Payload"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PublishError {
    /// A path given on the command line does not exist.
    #[error("{kind} file not found: {}", path.display())]
    MissingFile { kind: InputFile, path: PathBuf },

    /// The path exists but could not be read.
    #[error("Failed to read {kind} file {}: {source}", path.display())]
    FileRead {
        kind: InputFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload file is not valid JSON.
    #[error("Invalid JSON in payload file {}: {source}", path.display())]
    PayloadParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a body that is not JSON.
    #[error("Invalid JSON response: {body}")]
    InvalidResponse { status: u16, body: String },

    /// The service answered with status >= 400.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The payload could not be re-serialised for the `data` field.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// Connection, DNS, timeout or request construction failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl PublishError {
    /// True for failures the user did not cause directly.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, PublishError::Transport(_) | PublishError::Encode(_))
    }

    /// HTTP status of the reply, for failures that got one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PublishError::InvalidResponse { status, .. } | PublishError::Api { status, .. } => {
                Some(*status)
            }
            PublishError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
