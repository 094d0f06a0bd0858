//! Document loading

use crate::config::types::Document;
use crate::error::{ConfigError, YamlrunError};
use std::fs;
use std::path::Path;

/// Parse a document file from a path
pub fn parse_document_file(path: &Path) -> Result<Document, YamlrunError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read file: {}", e)))?;

    parse_document(&contents, Some(path))
}

/// Parse a document from a string
///
/// `path` is only used to name the document in errors.
pub fn parse_document(yaml: &str, path: Option<&Path>) -> Result<Document, YamlrunError> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    if value.is_null() {
        let path = path.unwrap_or_else(|| Path::new("<string>"));
        return Err(ConfigError::Empty(path.to_path_buf()).into());
    }

    Ok(serde_yaml::from_value(value)?)
}
