// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Add 'Em Up command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, Log, error};
use std::path::PathBuf;

use addemup_core::Config;

#[derive(Debug, Parser)]
#[command(name = "addemup", about = "Finds the winners of a card hands file.")]
struct Cli {
    /// Input file.
    #[clap(long = "in", default_value = "in.txt")]
    input: PathBuf,
    /// Output file.
    #[clap(long = "out", default_value = "out.txt")]
    output: PathBuf,
    /// Print each step progress to standard output.
    #[clap(long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            output: cli.output,
            verbose: cli.verbose,
        }
    }
}

/// The output stream for a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Warnings and errors go to stderr, progress records to stdout.
fn stream_for(level: log::Level) -> Stream {
    if level <= log::Level::Warn {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// A logger that routes records by level to stdout or stderr.
struct SplitLogger {
    stdout: env_logger::Logger,
    stderr: env_logger::Logger,
}

impl SplitLogger {
    fn new(level: LevelFilter) -> Self {
        let build = |target: env_logger::Target| {
            env_logger::builder()
                .filter_level(level)
                .target(target)
                .format_target(false)
                .format_timestamp_millis()
                .build()
        };

        Self {
            stdout: build(env_logger::Target::Stdout),
            stderr: build(env_logger::Target::Stderr),
        }
    }

    fn logger(&self, level: log::Level) -> &env_logger::Logger {
        match stream_for(level) {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        }
    }
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger(metadata.level()).enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        self.logger(record.level()).log(record);
    }

    fn flush(&self) {
        self.stdout.flush();
        self.stderr.flush();
    }
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = level_filter(verbose);
    log::set_boxed_logger(Box::new(SplitLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    addemup_core::run(config).context("Cannot write result")
}

fn main() {
    let config = Config::from(Cli::parse());
    if let Err(e) = init_logger(config.verbose) {
        eprintln!("Cannot initialize logger: {e}");
    }

    // Failures are logged, the exit status is always zero.
    if let Err(e) = run(&config) {
        error!("{e:#}");
    }
}
