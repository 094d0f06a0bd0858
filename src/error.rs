//! Error types for yamlrun

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for yamlrun operations
pub type Result<T> = std::result::Result<T, YamlrunError>;

/// Main error type for yamlrun
#[derive(Error, Debug)]
pub enum YamlrunError {
    /// Document and structure errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Script execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Document loading and validation errors
///
/// All of these are raised before any variable is resolved.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("YAML file is empty: {}", .0.display())]
    Empty(PathBuf),

    #[error("`structure` should end with the segment \"yaml\" (received: \"{0}\")")]
    InvalidStructure(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Script execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command `{command}` failed with exit code {}:\n{output}", display_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Failed to start command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot split command into words (unbalanced quotes?): {0}")]
    InvalidCommand(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // Killed by a signal
        None => "none".to_string(),
    }
}
