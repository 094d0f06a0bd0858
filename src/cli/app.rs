//! Main CLI application

use crate::runner::{Context, Task, Verbosity};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    /// Create a new app
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the process arguments
    pub fn run(self) -> anyhow::Result<()> {
        let matches = self.command.clone().get_matches();
        self.run_matches(&matches)
    }

    fn run_matches(mut self, matches: &ArgMatches) -> anyhow::Result<()> {
        if let Some(shell) = matches.get_one::<Shell>("completions") {
            let name = self.command.get_name().to_string();
            clap_complete::generate(*shell, &mut self.command, name, &mut io::stdout());
            return Ok(());
        }

        let path = matches
            .get_one::<PathBuf>("document")
            .context("no YAML document given")?;

        let task = Task::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        let mut ctx = Context::new()
            .with_verbosity(get_verbosity(matches))
            .with_environment(!matches.get_flag("noenv"));

        task.execute(&mut ctx)
            .with_context(|| format!("failed to run {}", path.display()))?;

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("yamlrun")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run the script of a YAML document with variables derived from its location")
        .arg(
            Arg::new("document")
                .value_name("YAML")
                .help("The YAML document to run")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("completions"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("noenv")
                .long("noenv")
                .help("Do not look up unknown $variables in the environment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit")
                .value_parser(value_parser!(Shell)),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<()> {
    App::new().run()
}
