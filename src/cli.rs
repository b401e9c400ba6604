//! Command line surface of mock-generator.

#![deny(missing_docs)]

use crate::error::UsageError;
use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;

/// Name the tool is invoked as in usage text.
pub const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Tasks selectable by the first command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    /// Regenerate every mock listed in the mocks file.
    MockAll,
    /// Regenerate mocks whose interfaces changed between two commits.
    CheckMocksAutogen,
    /// Stage and commit regenerated mocks that are not committed yet.
    CommitUnstagedMocks,
}

impl Command {
    /// Literal flag token for this command.
    pub const fn flag(self) -> &'static str {
        match self {
            Command::MockAll => "--mock-all",
            Command::CheckMocksAutogen => "--check-mocks-autogen",
            Command::CommitUnstagedMocks => "--commit-unstaged-mocks",
        }
    }

    /// Flag followed by the positional arguments it is documented with.
    pub const fn usage(self) -> &'static str {
        match self {
            Command::MockAll => "--mock-all",
            Command::CheckMocksAutogen => "--check-mocks-autogen <CommitSHA1> <CommitSHA2>",
            Command::CommitUnstagedMocks => "--commit-unstaged-mocks",
        }
    }

    /// One-line description, shown as the clap help for the value.
    pub const fn about(self) -> &'static str {
        match self {
            Command::MockAll => "Mock all interfaces listed in existing_mocks.txt",
            Command::CheckMocksAutogen => {
                "Regenerate existing mocks touched between two commits"
            }
            Command::CommitUnstagedMocks => "Stage and commit regenerated mocks",
        }
    }

    /// All commands, in usage order.
    pub fn all() -> &'static [Command] {
        Command::value_variants()
    }
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Command::MockAll,
            Command::CheckMocksAutogen,
            Command::CommitUnstagedMocks,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.flag()).help(self.about()))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.flag())
    }
}

/// Raw command line: a task flag, then anything.
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about = "Regenerate interface mocks and commit them",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Task to run.
    #[arg(value_enum, allow_hyphen_values = true, value_name = "FLAG")]
    pub command: Option<Command>,

    /// Positional arguments for the task, passed through unvalidated.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse `argv` (program name first) into a command and its trailing
    /// arguments. Every clap failure and a missing flag are usage errors.
    pub fn parse_invocation<I, T>(argv: I) -> Result<(Command, Vec<String>), UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(argv).map_err(|_| UsageError)?;
        let command = cli.command.ok_or(UsageError)?;
        Ok((command, cli.args))
    }
}

/// Usage text reported when no known command was given.
pub fn usage_message() -> String {
    let usages: Vec<String> = Command::all()
        .iter()
        .map(|c| format!("`{BIN_NAME} {}`", c.usage()))
        .collect();
    format!(
        "Invalid usage, usages: {} aborting...",
        usages.join(" or ")
    )
}
