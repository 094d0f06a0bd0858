//! Document parsing and validation
//!
//! This module handles loading yamlrun documents and validating their
//! structure descriptor.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
