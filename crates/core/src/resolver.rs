// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winner resolution.
//!
//! The players with the best face score win. Ties are broken by the best
//! suit score among the leaders, and any tie left after that is reported
//! with all the tied players.
use log::info;

use crate::{
    error::{Error, Result},
    parser::{Player, PlayerSet},
};

/// The result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single winner.
    Winner {
        /// The winner name.
        name: String,
        /// The face score, or the suit score if the face score was tied.
        score: u32,
    },
    /// Players tied on both face and suit scores.
    Tie {
        /// The tied players in input order.
        names: Vec<String>,
        /// The shared suit score.
        score: u32,
    },
}

impl Outcome {
    /// The winning score.
    pub fn score(&self) -> u32 {
        match self {
            Outcome::Winner { score, .. } | Outcome::Tie { score, .. } => *score,
        }
    }

    /// The winners names.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Outcome::Winner { name, .. } => vec![name.as_str()],
            Outcome::Tie { names, .. } => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Resolves the winners of a player set.
pub fn resolve(players: &PlayerSet) -> Result<Outcome> {
    let max_face = players
        .iter()
        .map(|p| p.score().face)
        .max()
        .ok_or(Error::EmptyInput)?;
    info!("Best face score: {max_face}");

    let leaders = players
        .iter()
        .filter(|p| p.score().face == max_face)
        .collect::<Vec<_>>();
    info!("Face score leaders: {}", join_names(&leaders));

    if let [winner] = leaders.as_slice() {
        return Ok(Outcome::Winner {
            name: winner.name().to_string(),
            score: max_face,
        });
    }

    let max_suit = leaders
        .iter()
        .map(|p| p.score().suit)
        .max()
        .ok_or(Error::EmptyInput)?;
    info!("Best suit score among leaders: {max_suit}");

    let winners = leaders
        .into_iter()
        .filter(|p| p.score().suit == max_suit)
        .collect::<Vec<_>>();
    info!("Winners: {}", join_names(&winners));

    let outcome = match winners.as_slice() {
        [winner] => Outcome::Winner {
            name: winner.name().to_string(),
            score: max_suit,
        },
        _ => Outcome::Tie {
            names: winners.iter().map(|p| p.name().to_string()).collect(),
            score: max_suit,
        },
    };

    Ok(outcome)
}

fn join_names(players: &[&Player]) -> String {
    players
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(",")
}
