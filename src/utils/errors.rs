use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error opening file '{}': {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("You must provide the name of the file to process")]
    MissingInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}
