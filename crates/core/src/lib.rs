// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Add 'Em Up hand parsing, scoring and winner resolution.
//!
//! The pipeline reads a file with one player hand per line, scores each
//! hand and writes the winners to an output file:
//!
//! ```
//! # use addemup_core::{parser, resolver};
//! let players = parser::parse("Matt:AS,2H\r\nJohn:KS").unwrap();
//! let outcome = resolver::resolve(&players).unwrap();
//! assert_eq!(outcome.to_string(), "John:13");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::{error, info};
use std::{fs, path::PathBuf};

pub mod error;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod score;

pub use error::{Error, ParseError, Result};
pub use output::ERROR_SENTINEL;
pub use parser::{Player, PlayerSet};
pub use resolver::Outcome;
pub use score::Score;

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The input file path.
    pub input: PathBuf,
    /// The output file path.
    pub output: PathBuf,
    /// Log progress of each step.
    ///
    /// The pipeline logs through the `log` facade unconditionally, this flag
    /// is read by the binary to pick the log level filter.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("in.txt"),
            output: PathBuf::from("out.txt"),
            verbose: false,
        }
    }
}

/// Reads, parses and resolves the input file.
pub fn evaluate(config: &Config) -> Result<Outcome> {
    info!("Reading {}", config.input.display());
    let text = fs::read_to_string(&config.input).map_err(|source| Error::Io {
        path: config.input.clone(),
        source,
    })?;

    let players = parser::parse(&text)?;
    for player in players.iter() {
        let score = player.score();
        info!(
            "{} - faceScore: {} - suitScore: {}",
            player.name(),
            score.face,
            score.suit
        );
    }

    resolver::resolve(&players)
}

/// Runs the pipeline and writes the result to the output file.
///
/// A pipeline error is logged and [ERROR_SENTINEL] is written in place of
/// the result, only an output write error is returned.
pub fn run(config: &Config) -> Result<()> {
    let output = match evaluate(config) {
        Ok(outcome) => output::format(&outcome),
        Err(e) => {
            error!("{e}");
            ERROR_SENTINEL.to_string()
        }
    };

    output::write(&config.output, &output)?;
    info!("Output written: {output}");

    Ok(())
}
