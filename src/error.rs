use thiserror::Error;

/// Main error type for the morph-batcher library
#[derive(Error, Debug)]
pub enum MorphError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pair processing error: {0}")]
    Pair(#[from] PairError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These are the only fatal errors in the system: they abort the run before
/// any pair is processed and make the process exit non-zero.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Image root not found: {path}")]
    ImageRootMissing { path: String },

    #[error("No categories to process under the image root")]
    NoCategories,

    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },
}

/// Pair-level errors
///
/// A pair failure is recoverable at the batch level: it is tallied and logged
/// with the offending pair identifier, and the batch continues with the next
/// pair.
#[derive(Error, Debug)]
pub enum PairError {
    #[error("Failed to read image: {path}")]
    ImageUnreadable { path: String },

    #[error("Failed to write frame: {path}")]
    FrameWriteFailed { path: String },

    #[error("Failed to create output directory: {path}")]
    OutputDirFailed { path: String },
}

/// Convenience type alias for Results using MorphError
pub type Result<T> = std::result::Result<T, MorphError>;
