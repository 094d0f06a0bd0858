//! Document validation

use crate::config::types::Document;
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete document
pub fn validate_document(document: &Document) -> ConfigResult<()> {
    validate_structure(&document.structure)
}

/// Validate a structure descriptor
///
/// The last `/`-separated segment must be `yaml` and no segment may be empty.
pub fn validate_structure(descriptor: &str) -> ConfigResult<()> {
    let mut segments = descriptor.split('/');
    if segments.next_back() != Some("yaml") {
        return Err(ConfigError::InvalidStructure(descriptor.to_string()));
    }

    if segments.any(str::is_empty) {
        return Err(ConfigError::Invalid(format!(
            "`structure` has an empty segment: \"{}\"",
            descriptor
        )));
    }

    Ok(())
}
