// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Result formatting and output file writing.
use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
};

use crate::{
    error::{Error, Result},
    resolver::Outcome,
};

/// Written in place of a result when the pipeline fails.
pub const ERROR_SENTINEL: &str = "ERROR";

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { name, score } => write!(f, "{name}:{score}"),
            Outcome::Tie { names, score } => write!(f, "{}:{score}", names.join(",")),
        }
    }
}

/// Formats an outcome as `name:score` or `name1,name2:score`.
pub fn format(outcome: &Outcome) -> String {
    outcome.to_string()
}

/// Creates or truncates the file at `path` and writes `contents` to it.
///
/// The file is closed when this function returns, on success and on error.
pub fn write<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}
