// src/bin/mock-generator.rs
//! Mock generator CLI binary.

#![deny(missing_docs)]

use std::path::Path;
use std::process::ExitCode;

use mock_generator::config::Config;
use mock_generator::dispatch::{Dispatcher, Registry};
use mock_generator::log::Logger;

fn main() -> ExitCode {
    let (cfg, cfg_err) = match Config::load_or_default(Path::new(".")) {
        Ok(cfg) => (cfg, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let logger = Logger::stderr(&cfg);
    if let Some(err) = cfg_err {
        logger.warn(&format!("{err:#}; using defaults"));
    }

    let registry = Registry::new();
    match Dispatcher::new(&registry, &logger).run(std::env::args_os()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            logger.fatal(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
