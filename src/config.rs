// src/config.rs
//! Configuration file for mock-generator

#![deny(missing_docs)]

use crate::error::MockResult;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".mock-generator.toml";

/// When log lines carry ANSI color escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always emit escapes, even into pipes and files.
    #[default]
    Always,
    /// Never emit escapes.
    Never,
    /// Emit escapes only on a terminal with `NO_COLOR` unset.
    Auto,
}

/// Config struct for mock-generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color policy for log lines.
    pub color: ColorChoice,
    /// Prefix every log line with a local `YYYY/MM/DD HH:MM:SS` stamp.
    pub timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorChoice::Always,
            timestamps: true,
        }
    }
}

impl Config {
    /// Load `.mock-generator.toml` from `dir` (or its parent if `dir` is a file).
    /// If missing, return defaults. Unreadable files and unknown keys are
    /// errors; the binary downgrades them to a warning.
    pub fn load_or_default(dir: &Path) -> MockResult<Self> {
        let file = Self::path_in(dir);
        if !file.exists() {
            return Ok(Config::default());
        }
        let s = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let cfg: Config =
            toml::from_str(&s).with_context(|| format!("invalid config {}", file.display()))?;
        Ok(cfg)
    }

    fn path_in(dir: &Path) -> PathBuf {
        let base = if dir.is_file() {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };
        base.join(CONFIG_FILE)
    }
}
