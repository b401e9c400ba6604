// src/dispatch.rs
//! Map the first command-line token to a task and run it.

#![deny(missing_docs)]

use crate::cli::{Cli, Command};
use crate::error::UsageError;
use crate::log::Logger;
use crate::tasks;
use std::collections::BTreeMap;
use std::ffi::OsString;

/// What a task sees when it runs.
pub struct TaskContext<'a> {
    /// Shared output.
    pub logger: &'a Logger,
    /// Positional arguments after the flag, unvalidated. Real
    /// implementations read their inputs from here (e.g. the two commit
    /// ids of `--check-mocks-autogen`).
    pub args: &'a [String],
}

/// Handler bound to a command.
pub type Action = fn(&TaskContext<'_>);

/// Immutable command-to-handler table.
#[derive(Clone)]
pub struct Registry {
    actions: BTreeMap<Command, Action>,
}

impl Registry {
    /// Table with the built-in handler for every command.
    pub fn new() -> Self {
        let actions = Command::all()
            .iter()
            .map(|&cmd| (cmd, Self::builtin(cmd)))
            .collect();
        Self { actions }
    }

    /// Replace the handler for `cmd`.
    pub fn with_action(mut self, cmd: Command, action: Action) -> Self {
        self.actions.insert(cmd, action);
        self
    }

    /// Handler for `cmd`.
    pub fn action(&self, cmd: Command) -> Option<Action> {
        self.actions.get(&cmd).copied()
    }

    fn builtin(cmd: Command) -> Action {
        match cmd {
            Command::MockAll => tasks::mock_all,
            Command::CheckMocksAutogen => tasks::check_mocks_autogen,
            Command::CommitUnstagedMocks => tasks::commit_unstaged_mocks,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs at most one task per invocation.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    logger: &'a Logger,
}

impl<'a> Dispatcher<'a> {
    /// Dispatcher over `registry`, logging to `logger`.
    pub fn new(registry: &'a Registry, logger: &'a Logger) -> Self {
        Self { registry, logger }
    }

    /// Run the task named by the first argument of `argv` (program name
    /// first, as clap expects).
    ///
    /// Anything after the flag is handed to the task untouched, including
    /// further flags.
    pub fn run<I, T>(&self, argv: I) -> Result<Command, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let (cmd, args) = Cli::parse_invocation(argv)?;
        let action = self.registry.action(cmd).ok_or(UsageError)?;
        action(&TaskContext {
            logger: self.logger,
            args: &args,
        });
        Ok(cmd)
    }
}
