// src/error.rs
//! Error handling for mock-generator.

#![deny(missing_docs)]

use crate::cli;
use thiserror::Error;

/// MockResult is alias for anyhow
pub type MockResult<T> = anyhow::Result<T>;

/// The command line did not name a known task.
///
/// Raised for an empty argument list and for an unknown first token alike,
/// so both render the same usage text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", cli::usage_message())]
pub struct UsageError;
