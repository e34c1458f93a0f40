//! API credential resolution
//!
//! Credentials are resolved from multiple sources in priority order:
//! 1. Command line flags (`--username` / `--api-key`)
//! 2. Environment variables (`SL_USERNAME` / `SL_API_KEY`)
//! 3. Credentials file (`~/.softlayer/config.json`)

use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, SlError};

/// A resolved username / API key pair
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

/// Shape of `~/.softlayer/config.json`
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    username: Option<String>,
    api_key: Option<String>,
}

/// Resolves API credentials from flags, environment, and the credentials file
pub struct CredentialsResolver {
    cli_username: Option<String>,
    cli_api_key: Option<String>,
}

impl CredentialsResolver {
    pub fn new(cli_username: Option<String>, cli_api_key: Option<String>) -> Self {
        Self {
            cli_username,
            cli_api_key,
        }
    }

    /// Resolve credentials using the priority chain.
    ///
    /// Username and key resolve independently, so a flag can override just
    /// one half of a file-based pair.
    pub fn resolve(&self) -> Result<Credentials> {
        let file = Self::credentials_path().and_then(|p| Self::read_file(&p).ok());

        let username = self
            .cli_username
            .clone()
            .or_else(|| std::env::var(credentials::USERNAME_ENV_VAR).ok())
            .or_else(|| file.as_ref().and_then(|f| f.username.clone()));
        let api_key = self
            .cli_api_key
            .clone()
            .or_else(|| std::env::var(credentials::API_KEY_ENV_VAR).ok())
            .or_else(|| file.as_ref().and_then(|f| f.api_key.clone()));

        match (username, api_key) {
            (Some(username), Some(api_key)) => {
                debug!("Resolved credentials for user '{}'", username);
                Ok(Credentials { username, api_key })
            }
            _ => Err(SlError::Credentials(format!(
                "No API credentials found. Provide --username/--api-key, set {}/{}, or create ~/{}",
                credentials::USERNAME_ENV_VAR,
                credentials::API_KEY_ENV_VAR,
                credentials::FILE_PATH,
            ))),
        }
    }

    /// Default credentials file location under the home directory
    fn credentials_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(credentials::FILE_PATH))
    }

    /// Read and parse a credentials file
    fn read_file(path: &Path) -> Result<CredentialsFile> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SlError::Credentials(format!(
                "Failed to parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
