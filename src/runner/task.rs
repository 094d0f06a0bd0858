//! Runtime document representation and the run sequence
//!
//! A run happens in three strictly ordered steps:
//!
//! 1. the structure descriptor seeds the variable table with name/path variables;
//! 2. each declared variable is resolved against the table so far and added to it;
//! 3. the working directory and every command line are resolved, then the
//!    commands run one after another until one fails.

use crate::config::{self, parse_document_file, validate_document, DEFAULT_CD};
use crate::error::{ConfigResult, Result};
use crate::runner::{
    execute_command, resolve, resolve_structure, resolve_to_string, seed_structure, yaml_key,
    Context, StructurePath, Value,
};
use crate::ui;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Runtime task representation
///
/// This differs from config::Document by having the variable declarations
/// merged and the document path attached.
#[derive(Debug, Clone)]
pub struct Task {
    /// Path to the document, as given
    pub path: PathBuf,

    /// Structure descriptor
    pub structure: String,

    /// Declared variables, unresolved, in declaration order
    pub variables: IndexMap<String, Value>,

    /// Working directory template
    pub cd: String,

    /// Command line templates
    pub run: Vec<String>,
}

/// A script whose templates have all been resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScript {
    pub working_dir: PathBuf,
    pub commands: Vec<String>,
}

impl Task {
    /// Load and validate a document file
    pub fn load(path: &Path) -> Result<Self> {
        let document = parse_document_file(path)?;
        Ok(Self::from_config(path.to_path_buf(), document)?)
    }

    /// Create a new task from a parsed document
    pub fn from_config(path: PathBuf, document: config::Document) -> ConfigResult<Self> {
        validate_document(&document)?;

        // Later declarations override the value but keep the first position
        let mut variables = IndexMap::new();
        for declaration in document.variables {
            for (name, value) in declaration {
                variables.insert(yaml_key(name), Value::from(value));
            }
        }

        let (cd, run) = match document.script {
            Some(script) => (script.cd, script.run),
            None => (DEFAULT_CD.to_string(), Vec::new()),
        };

        Ok(Task {
            path,
            structure: document.structure,
            variables,
            cd,
            run,
        })
    }

    /// Execute the whole run in the given context
    pub fn execute(&self, ctx: &mut Context) -> Result<()> {
        self.seed_structure(ctx)?;
        self.resolve_variables(ctx);
        let script = self.resolve_script(ctx);
        self.run_script(&script, ctx)
    }

    /// Derive the structure variables and add them to the context
    pub fn seed_structure(&self, ctx: &mut Context) -> ConfigResult<Vec<StructurePath>> {
        let paths = resolve_structure(&self.path, &self.structure)?;
        seed_structure(&self.structure, &paths, &mut ctx.vars);

        ctx.print_info("Detected structure:");
        ctx.print_block(&ui::render_structure_table(&paths));
        Ok(paths)
    }

    /// Resolve declared variables in order, adding each to the context
    ///
    /// Only string values are templates. A variable can use any variable
    /// declared before it; names declared later are not visible yet.
    pub fn resolve_variables(&self, ctx: &mut Context) {
        for (name, value) in &self.variables {
            let resolved = match value {
                Value::String(template) => resolve(template, &ctx.vars, ctx.use_environment, false),
                other => other.clone(),
            };
            ctx.print_debug(&format!("{} = {}", name, resolved));
            ctx.set_var(name.clone(), resolved);
        }

        if !self.variables.is_empty() {
            ctx.print_info("Parsed variables:");
            let resolved = self
                .variables
                .keys()
                .filter_map(|name| ctx.vars.get_key_value(name.as_str()));
            ctx.print_block(&ui::render_variables(resolved));
        }
    }

    /// Resolve the working directory and command lines against the context
    ///
    /// Collections inside command lines are quoted so each stays one word.
    pub fn resolve_script(&self, ctx: &Context) -> ResolvedScript {
        let cd = resolve_to_string(&self.cd, &ctx.vars, ctx.use_environment, false);
        let mut working_dir = PathBuf::from(cd);
        // `cd` may point at a file, as the default `$yaml_path` does
        if working_dir.is_file() {
            if let Some(parent) = working_dir.parent() {
                working_dir = parent.to_path_buf();
            }
        }

        let commands = self
            .run
            .iter()
            .map(|line| resolve_to_string(line, &ctx.vars, ctx.use_environment, true))
            .collect();

        ResolvedScript {
            working_dir,
            commands,
        }
    }

    /// Run resolved commands in order, stopping at the first failure
    pub fn run_script(&self, script: &ResolvedScript, ctx: &Context) -> Result<()> {
        if script.commands.is_empty() {
            ctx.print_debug("No commands to run");
            return Ok(());
        }

        ctx.print_debug(&format!(
            "Working directory: {}",
            script.working_dir.display()
        ));
        ctx.print_info("Running script:");
        for command in &script.commands {
            execute_command(command, &script.working_dir, ctx)?;
        }
        Ok(())
    }
}
