// src/lib.rs
//! Mock generator library.

#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod log;
pub mod tasks;
