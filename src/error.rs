//! Centralized error handling for rigsmith

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for the fallible edges of rigsmith (config and preset lookup).
///
/// Building itself never fails: every builder step and recipe is total.
#[derive(Debug, Error)]
pub enum RigsmithError {
    /// I/O errors (reading or writing the config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file exists but is not valid TOML for our schema
    #[error("failed to parse config file `{}`: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration errors that are not parse failures
    #[error("config error: {0}")]
    Config(String),

    /// No preset registered under the requested name
    #[error("unknown preset `{name}` (available: {available})")]
    UnknownPreset { name: String, available: String },

    /// A preset declared in the config violates the data model
    #[error("invalid preset `{name}`: {reason}")]
    InvalidPreset { name: String, reason: String },

    /// Rendering a configuration as TOML failed
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Type alias for Results in rigsmith
pub type Result<T> = std::result::Result<T, RigsmithError>;
