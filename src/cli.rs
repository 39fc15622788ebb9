// Command line surface of the `publish` binary.

use clap::Parser;
use std::path::PathBuf;

/// Default origin of the MCP Hive API.
pub const DEFAULT_BASE_URL: &str = "https://mcp-hive.ti.trilogy.com";

/// Update an MCP Hive with a custom payload and a zipped MCP server package.
#[derive(Parser, Debug, Clone)]
#[command(name = "publish", version, about = "Update MCP Hive with custom payload")]
pub struct Args {
    /// API key for authentication
    #[arg(long, value_name = "KEY")]
    pub api_key: String,

    /// Hive ID to update
    #[arg(long, value_name = "ID")]
    pub hive_id: String,

    /// Path to the zip file
    #[arg(long, value_name = "PATH")]
    pub zip_path: PathBuf,

    /// Path to custom JSON payload file
    #[arg(long, value_name = "PATH")]
    pub custom_payload: PathBuf,

    /// Base URL for the API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
