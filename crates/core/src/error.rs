// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the pipeline.
use std::{io, path::PathBuf};
use thiserror::Error;

use addemup_cards::CardError;

/// A pipeline error.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The file path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The input text is malformed.
    #[error("line {line}: {source}")]
    Parse {
        /// The 1-based line number.
        line: usize,
        /// What is wrong with the line.
        #[source]
        source: ParseError,
    },
    /// The input has no players.
    #[error("no players found in input")]
    EmptyInput,
}

/// Errors in a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no `name:cards` separator.
    #[error("missing ':' separator in '{0}'")]
    MissingSeparator(String),
    /// The player name is empty.
    #[error("empty player name in '{0}'")]
    EmptyName(String),
    /// A card token is empty, as in `Matt:` or `Matt:AS,,2H`.
    #[error("empty card for player '{0}'")]
    EmptyCard(String),
    /// A card token is not a valid card.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Result type for the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
