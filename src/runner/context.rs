//! Execution context for a run
//!
//! The context owns the variable table for the whole run and decides what
//! gets printed.

use crate::runner::value::{Value, VariableTable};
use colored::Colorize;

/// State threaded through one run of a document
pub struct Context {
    /// Resolved variables, seeded from the structure and grown per declaration
    pub vars: VariableTable,

    /// Whether unknown names fall back to environment variables
    pub use_environment: bool,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            vars: VariableTable::new(),
            use_environment: true,
            verbosity: Verbosity::Normal,
        }
    }

    /// Enable or disable the environment fallback
    pub fn with_environment(mut self, use_environment: bool) -> Self {
        self.use_environment = use_environment;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set a single variable
    pub fn set_var(&mut self, key: String, value: Value) {
        self.vars.insert(key, value);
    }

    /// Get a variable value
    pub fn get_var(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Whether diagnostics (tables, `[RUN]` lines) should be shown
    pub fn shows_diagnostics(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    /// Print a diagnostic block as is
    pub fn print_block(&self, block: &str) {
        if self.shows_diagnostics() {
            eprintln!("{}", block);
        }
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[INFO]".green(), message);
        }
    }

    /// Print the command about to run
    pub fn print_run(&self, command: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[RUN]".cyan().bold(), command);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }

    /// Print captured command output
    pub fn print_output(&self, output: &str) {
        if self.verbosity >= Verbosity::Quiet && !output.is_empty() {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
