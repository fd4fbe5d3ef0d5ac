//! Error types for zotmeta

use thiserror::Error;

/// Main error type for the zotmeta application
#[derive(Debug, Error)]
pub enum ZotmetaError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Malformed tag filter: '{0}'")]
    MalformedFilter(String),

    #[error("Input error: {0}")]
    InputFormat(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("{failed} of {attempted} tag updates failed")]
    PartialUpdate { failed: usize, attempted: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ZotmetaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ZotmetaError::Authentication(_) => 2,
            ZotmetaError::MalformedFilter(_) => 3,
            ZotmetaError::InputFormat(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ZotmetaError::Authentication(msg) => {
                format!(
                    "Authentication failed: {}\n\n\
                    Suggestions:\n\
                    • Check that --key is a valid Zotero API key\n\
                    • Check that --library-id and --library-type match the key's library\n\
                    • Write operations require a key with write access\n\
                    • Keys can also be supplied via ZOTMETA_KEY or the config file",
                    msg
                )
            }
            ZotmetaError::MalformedFilter(raw) => {
                format!(
                    "Malformed tag filter: '{}'\n\n\
                    A filter is a tag prefix, optionally preceded by '-' to exclude,\n\
                    with '||' between alternative prefixes:\n\
                    • --tag-filter 'theme_'\n\
                    • --tag-filter '-#exclude'\n\
                    • --tag-filter 'Asia || Europe'\n\
                    At least one non-empty prefix must remain after trimming.",
                    raw
                )
            }
            ZotmetaError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\n\
                    Suggestions:\n\
                    • Pass --library-id and --library-type on the command line\n\
                    • Or set ZOTMETA_LIBRARY_ID and ZOTMETA_LIBRARY_TYPE\n\
                    • Or create a config file (default: ~/.config/zotmeta/config.toml)",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ZotmetaError
pub type Result<T> = std::result::Result<T, ZotmetaError>;
