//! Error types for hookconf-core

use std::path::PathBuf;

/// Result type for hookconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or reading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration root path not set! Call configure() first")]
    NotConfigured,

    #[error("Cannot reconfigure configuration path. Already set to {current}")]
    AlreadyConfigured { current: String },

    #[error("No configuration file found for {name} at {path}")]
    FileNotFound { name: String, path: PathBuf },

    #[error("No value set for required {section}.{key}")]
    MissingValue { section: String, key: String },

    #[error("Non-numeric value {value:?} provided for {section}.{key}")]
    TypeConversion {
        section: String,
        key: String,
        value: String,
    },

    #[error("Illegal state: {message}")]
    IllegalState { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Environment error: {message}")]
    Environment { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    /// Root, file and required-value failures.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured
                | Self::AlreadyConfigured { .. }
                | Self::FileNotFound { .. }
                | Self::MissingValue { .. }
        )
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeConversion { .. })
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }
}
