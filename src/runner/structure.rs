//! Structure variables
//!
//! A `structure` descriptor such as `project/package/yaml` names the document
//! and each of its ancestor directories, innermost last. Every named level
//! contributes a `{section}_name` and a `{section}_path` variable.

use crate::config::validate_structure;
use crate::error::{ConfigError, ConfigResult};
use crate::runner::value::{Value, VariableTable};
use crate::utils::{absolute_path, base_name};
use std::path::{Path, PathBuf};

/// One named level of the document's location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePath {
    /// Section label from the descriptor, e.g. `package`
    pub section: String,
    /// Base name of the file or directory
    pub name: String,
    /// Absolute path of the file or directory
    pub path: PathBuf,
}

/// Name every level of `descriptor`, starting from the document itself
///
/// The result is ordered outermost first, matching the descriptor.
pub fn resolve_structure(document: &Path, descriptor: &str) -> ConfigResult<Vec<StructurePath>> {
    validate_structure(descriptor)?;
    if !document.exists() {
        return Err(ConfigError::NotFound(document.to_path_buf()));
    }

    let mut current = absolute_path(document).map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?;

    let mut sections = descriptor.rsplit('/');
    // validate_structure guarantees the last segment is `yaml`
    let last = sections.next().unwrap_or("yaml");
    let mut paths = vec![StructurePath {
        section: last.to_string(),
        name: base_name(&current),
        path: current.clone(),
    }];

    for section in sections {
        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        }
        paths.push(StructurePath {
            section: section.to_string(),
            name: base_name(&current),
            path: current.clone(),
        });
    }

    paths.reverse();
    Ok(paths)
}

/// Seed a variable table with the structure variables
///
/// Binds `structure`, then every `{section}_name`, then every `{section}_path`.
pub fn seed_structure(descriptor: &str, paths: &[StructurePath], vars: &mut VariableTable) {
    vars.insert("structure".to_string(), Value::from(descriptor));
    for entry in paths {
        vars.insert(format!("{}_name", entry.section), Value::from(entry.name.as_str()));
    }
    for entry in paths {
        vars.insert(
            format!("{}_path", entry.section),
            Value::from(entry.path.display().to_string()),
        );
    }
}
