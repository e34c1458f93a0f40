use std::fmt;

/// Custom error type for classic infrastructure operations
#[derive(Debug)]
pub enum SlError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A requested display column is not in the command's allowed set
    UnsupportedColumn { name: String, allowed: String },
    /// The requested sort key is not sortable for this command
    UnsupportedSortKey { key: String, allowed: String },
    /// Bad command usage (missing/invalid arguments)
    InvalidUsage(String),
    /// Credentials could not be resolved or parsed
    Credentials(String),
    /// Order construction failed (unknown datacenter, size, or price)
    Ordering(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for SlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SlError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            SlError::UnsupportedColumn { name, allowed } => {
                write!(
                    f,
                    "--column '{}' is not supported. Available columns: {}",
                    name, allowed
                )
            }
            SlError::UnsupportedSortKey { key, allowed } => {
                write!(
                    f,
                    "--sortby '{}' is not supported. Sortable columns: {}",
                    key, allowed
                )
            }
            SlError::InvalidUsage(msg) => write!(f, "Incorrect usage: {}", msg),
            SlError::Credentials(msg) => write!(f, "{}", msg),
            SlError::Ordering(msg) => write!(f, "{}", msg),
            SlError::Json(msg) => write!(f, "JSON error: {}", msg),
            SlError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SlError {
    fn from(err: reqwest::Error) -> Self {
        SlError::Http(err)
    }
}

impl From<serde_json::Error> for SlError {
    fn from(err: serde_json::Error) -> Self {
        SlError::Json(err.to_string())
    }
}

impl From<std::io::Error> for SlError {
    fn from(err: std::io::Error) -> Self {
        SlError::Credentials(err.to_string())
    }
}

impl From<dialoguer::Error> for SlError {
    fn from(err: dialoguer::Error) -> Self {
        SlError::Config(err.to_string())
    }
}

/// Result type alias for classic infrastructure operations
pub type Result<T> = std::result::Result<T, SlError>;
