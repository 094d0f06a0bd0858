//! Command execution
//!
//! This module splits resolved command lines into words and runs them.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::Context;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};

/// Split a command line into words, honouring shell quoting
pub fn split_command(line: &str) -> ExecutionResult<Vec<String>> {
    shlex::split(line).ok_or_else(|| ExecutionError::InvalidCommand(line.to_string()))
}

/// Run a resolved command line in `working_dir` and wait for it
///
/// stdout and stderr are captured through a single pipe, in the order the
/// command wrote them, and printed once the command exits. A non-zero exit
/// aborts with the command, its code and its output.
pub fn execute_command(line: &str, working_dir: &Path, ctx: &Context) -> ExecutionResult<()> {
    let argv = split_command(line)?;
    let Some((program, args)) = argv.split_first() else {
        ctx.print_debug("Skipping empty command");
        return Ok(());
    };

    ctx.print_run(line);

    let spawn_error = |source: io::Error| ExecutionError::Spawn {
        command: line.to_string(),
        source,
    };

    // Both streams share one pipe so their lines keep the order they were written in
    let (mut reader, writer) = io::pipe().map_err(spawn_error)?;
    let mut child = {
        let mut command = StdCommand::new(program);
        command
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(writer.try_clone().map_err(spawn_error)?)
            .stderr(writer);
        command.spawn().map_err(spawn_error)?
    };

    let mut captured = Vec::new();
    reader.read_to_end(&mut captured).map_err(spawn_error)?;
    let status = child.wait().map_err(spawn_error)?;
    let merged = String::from_utf8_lossy(&captured).into_owned();

    if !status.success() {
        return Err(ExecutionError::CommandFailed {
            command: line.to_string(),
            code: status.code(),
            output: merged,
        });
    }

    ctx.print_output(&merged);
    Ok(())
}
