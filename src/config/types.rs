//! Core document types
//!
//! This module defines the data structures that represent a yamlrun document.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Default structure descriptor: only the document itself is named
pub const DEFAULT_STRUCTURE: &str = "yaml";

/// Default working directory template for the script
pub const DEFAULT_CD: &str = "$yaml_path";

/// Top-level document structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Document {
    /// Names of the document and its ancestor directories, e.g. `project/package/yaml`
    #[serde(default = "default_structure")]
    pub structure: String,

    /// Variable declarations, resolved in order
    #[serde(default, deserialize_with = "deserialize_variables")]
    pub variables: Vec<Mapping>,

    /// Commands to run once variables are resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
}

/// The `script` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Script {
    /// Working directory template
    #[serde(default = "default_cd")]
    pub cd: String,

    /// Command line templates
    #[serde(default, deserialize_with = "deserialize_run_items")]
    pub run: Vec<String>,
}

fn default_structure() -> String {
    DEFAULT_STRUCTURE.to_string()
}

fn default_cd() -> String {
    DEFAULT_CD.to_string()
}

/// Custom deserializer for variables that handles a list of mappings or a single mapping
fn deserialize_variables<'de, D>(deserializer: D) -> Result<Vec<Mapping>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // A single mapping of declarations
        Value::Mapping(map) => Ok(vec![map]),
        // Array of single-key mappings
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| match item {
                Value::Mapping(map) => Ok(map),
                Value::Null => Ok(Mapping::new()),
                _ => Err(D::Error::custom(
                    "each variables entry must be a mapping like `- name: value`",
                )),
            })
            .collect(),
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("variables must be a list or a mapping")),
    }
}

/// Custom deserializer for run items that handles both single values and arrays
fn deserialize_run_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Single string command
        Value::String(s) => Ok(vec![s]),
        // Array of commands
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| String::deserialize(item).map_err(D::Error::custom))
            .collect(),
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("run must be a string or array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let doc: Document = serde_yaml::from_str("script:\n  run: echo hi\n").unwrap();
        assert_eq!(doc.structure, "yaml");
        assert!(doc.variables.is_empty());
        let script = doc.script.unwrap();
        assert_eq!(script.cd, "$yaml_path");
        assert_eq!(script.run, vec!["echo hi"]);
    }

    #[test]
    fn test_deserialize_complete_document() {
        let yaml = r#"
structure: project/package/yaml
variables:
  - build: $project_path/build
  - flags: [-O2, -g]
script:
  cd: $build
  run:
    - make
    - make install
"#;
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.structure, "project/package/yaml");
        assert_eq!(doc.variables.len(), 2);
        let script = doc.script.unwrap();
        assert_eq!(script.cd, "$build");
        assert_eq!(script.run, vec!["make", "make install"]);
    }

    #[test]
    fn test_variables_as_single_mapping() {
        let doc: Document = serde_yaml::from_str("variables:\n  a: 1\n  b: 2\n").unwrap();
        assert_eq!(doc.variables.len(), 1);
        assert_eq!(doc.variables[0].len(), 2);
    }

    #[test]
    fn test_variables_reject_scalars() {
        let result: Result<Document, _> = serde_yaml::from_str("variables:\n  - just a string\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_run_rejects_mapping() {
        let result: Result<Document, _> = serde_yaml::from_str("script:\n  run:\n    a: b\n");
        assert!(result.is_err());
    }
}
