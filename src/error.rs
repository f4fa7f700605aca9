//! Error types for forecast-config.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for forecast-config.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required directory could not be created.
    #[error("failed to create directory '{path}'")]
    DirectoryCreate {
        /// Path of the directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The process-wide configuration failed to initialize earlier.
    #[error("configuration is unavailable: {message}")]
    Initialization {
        /// Diagnostic from the failed initialization.
        message: String,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Unsupported figure format.
    #[error("unsupported figure format: {value}")]
    InvalidFigureFormat {
        /// Rejected value.
        value: String,
    },

    /// Unknown standardization mode.
    #[error("invalid standardization type: {value} (expected 'expanding' or 'rolling')")]
    InvalidStandardization {
        /// Rejected value.
        value: String,
    },

    /// File name cannot be joined onto a configured directory.
    #[error("invalid file name '{filename}': {reason}")]
    InvalidFileName {
        /// Offending file name.
        filename: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Failed to read a parameters file.
    #[error("failed to read parameters file '{path}'")]
    ConfigRead {
        /// Path to the parameters file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a parameters file.
    #[error("failed to parse parameters file '{path}'")]
    ConfigParse {
        /// Path to the parameters file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to serialize the configuration snapshot.
    #[error("failed to serialize configuration snapshot")]
    SnapshotSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
