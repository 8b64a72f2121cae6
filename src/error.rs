use std::path::PathBuf;

/// Errors raised while loading a configuration or writing test cases
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Config file not found: {0:?}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// `group` is the 1-based position of the offending group
    #[error("Invalid group #{group}: {reason}")]
    InvalidGroup { group: usize, reason: String },

    #[error("Invalid sampling parameters: {0}")]
    InvalidParameters(String),

    #[error("File name template {0:?} has no {{index}} placeholder")]
    InvalidTemplate(String),

    #[error("Failed to write {path:?}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
