//! Variable resolution and script execution
//!
//! This module derives structure variables, resolves variable references in
//! templates and runs the resulting commands.

pub mod command;
pub mod context;
pub mod interpolate;
pub mod reference;
pub mod structure;
pub mod task;
pub mod value;

// Re-export main types
pub use command::*;
pub use context::*;
pub use interpolate::*;
pub use reference::*;
pub use structure::*;
pub use task::*;
pub use value::*;
