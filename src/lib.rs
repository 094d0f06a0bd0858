//! yamlrun - run the script of a YAML document
//!
//! A document declares variables and a list of commands. Variables derived
//! from the document's location (`$yaml_path`, `$package_name`, ...) and the
//! declared ones are substituted into the commands before they run.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, YamlrunError};

/// Current version of yamlrun
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
