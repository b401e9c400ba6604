//! Task announcements.
//!
//! None of these regenerate or commit anything yet; each reports that it
//! ran and what it is meant to do.

#![deny(missing_docs)]

use crate::cli::Command;
use crate::dispatch::TaskContext;

/// Announce `--mock-all`.
pub fn mock_all(ctx: &TaskContext<'_>) {
    ctx.logger.success(&format!(
        "Yeeey! You've successfully run script with {} flag. Now I am supposed to regenerate all defined mocks again...",
        Command::MockAll
    ));
}

/// Announce `--check-mocks-autogen`. The two commit ids are carried in
/// `ctx.args` but not read.
pub fn check_mocks_autogen(ctx: &TaskContext<'_>) {
    ctx.logger.success(&format!(
        "Yeeey! You've successfully run script with {} flag. Now I am supposed to check differences between SHAs passed and look for if any changes made on any existing mock.",
        Command::CheckMocksAutogen
    ));
}

/// Announce `--commit-unstaged-mocks`.
pub fn commit_unstaged_mocks(ctx: &TaskContext<'_>) {
    ctx.logger.success(&format!(
        "Yeeey! You've successfully run script with {} flag. Now I am supposed to look for any regenerated but uncommitted mocks, if I find any I am going to commit them.",
        Command::CommitUnstagedMocks
    ));
}
