// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Input text parsing.
//!
//! Each input line holds a player name and the player's cards:
//!
//! ```text
//! Matt:AS,2H
//! John:KS
//! ```
use ahash::AHashMap;
use log::warn;
use std::fmt;

use addemup_cards::Card;

use crate::{
    error::{Error, ParseError, Result},
    score::Score,
};

/// A player and its scored hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: Score,
}

impl Player {
    /// Creates a player and scores its hand.
    pub fn new(name: impl Into<String>, hand: Vec<Card>) -> Self {
        let score = Score::of(&hand);
        Self {
            name: name.into(),
            hand,
            score,
        }
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player cards in input order.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The player hand score.
    pub fn score(&self) -> Score {
        self.score
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for (idx, card) in self.hand.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// The players in a file keyed by name, in first appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSet {
    players: Vec<Player>,
    index: AHashMap<String, usize>,
}

impl PlayerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a player.
    ///
    /// A player with the same name is replaced in place and returned.
    pub fn insert(&mut self, player: Player) -> Option<Player> {
        match self.index.get(player.name()) {
            Some(&idx) => Some(std::mem::replace(&mut self.players[idx], player)),
            None => {
                self.index.insert(player.name.clone(), self.players.len());
                self.players.push(player);
                None
            }
        }
    }

    /// Gets a player by name.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&idx| &self.players[idx])
    }

    /// Iterates players in first appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Checks if there are no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl fmt::Display for PlayerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, player) in self.players.iter().enumerate() {
            if idx > 0 {
                f.write_str("\r\n")?;
            }
            write!(f, "{player}")?;
        }
        Ok(())
    }
}

/// Parses the input text into a player set.
///
/// Blank lines are skipped, any other malformed line fails the whole parse.
pub fn parse(text: &str) -> Result<PlayerSet> {
    let mut players = PlayerSet::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let player = parse_line(line).map_err(|source| Error::Parse {
            line: idx + 1,
            source,
        })?;

        if let Some(prev) = players.insert(player) {
            warn!("Line {}: player {} replaces an earlier hand", idx + 1, prev.name());
        }
    }

    Ok(players)
}

fn parse_line(line: &str) -> std::result::Result<Player, ParseError> {
    let (name, cards) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MissingSeparator(line.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyName(line.to_string()));
    }

    let hand = cards
        .split(',')
        .map(|token| -> std::result::Result<Card, ParseError> {
            let token = token.trim();
            if token.is_empty() {
                Err(ParseError::EmptyCard(name.to_string()))
            } else {
                Ok(token.parse::<Card>()?)
            }
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Player::new(name, hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use addemup_cards::{CardError, Face, Suit};

    fn parse_err(text: &str) -> (usize, ParseError) {
        match parse(text) {
            Err(Error::Parse { line, source }) => (line, source),
            res => panic!("Expected parse error, got {res:?}"),
        }
    }

    #[test]
    fn parse_players() {
        let players = parse("Matt:AS,2H\r\nJohn:KS\r\n").unwrap();
        assert_eq!(players.len(), 2);

        let matt = players.get("Matt").unwrap();
        assert_eq!(
            matt.hand(),
            &[
                Card::new(Face::Ace, Suit::Spades),
                Card::new(Face::Two, Suit::Hearts)
            ]
        );
        assert_eq!(matt.score(), Score { face: 3, suit: 7 });

        let john = players.get("John").unwrap();
        assert_eq!(john.hand(), &[Card::new(Face::King, Suit::Spades)]);
        assert_eq!(john.score(), Score { face: 13, suit: 4 });

        let names = players.iter().map(Player::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Matt", "John"]);
    }

    #[test]
    fn parse_line_endings_and_blanks() {
        let players = parse("Matt:AS\n\nJohn:10D\r\n  \r\n").unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players.get("John").unwrap().score(), Score { face: 10, suit: 2 });

        let players = parse(" Matt : AS , 2H ").unwrap();
        assert_eq!(players.get("Matt").unwrap().hand().len(), 2);

        assert!(parse("").unwrap().is_empty());
        assert!(parse("\r\n\r\n").unwrap().is_empty());
    }

    #[test]
    fn parse_duplicate_names() {
        let players = parse("Matt:AS\r\nJohn:KS\r\nMatt:QH,2C").unwrap();
        assert_eq!(players.len(), 2);

        // Last hand wins, first position is kept.
        let names = players.iter().map(Player::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Matt", "John"]);
        assert_eq!(players.get("Matt").unwrap().score(), Score { face: 14, suit: 4 });
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_err("Matt:AS\r\nJohn KS"),
            (2, ParseError::MissingSeparator("John KS".into()))
        );
        assert_eq!(
            parse_err(":AS"),
            (1, ParseError::EmptyName(":AS".into()))
        );
        assert_eq!(parse_err("Matt:"), (1, ParseError::EmptyCard("Matt".into())));
        assert_eq!(
            parse_err("Matt:AS,,2H"),
            (1, ParseError::EmptyCard("Matt".into()))
        );
        assert_eq!(
            parse_err("Matt:X"),
            (1, ParseError::Card(CardError::Malformed("X".into())))
        );
        assert!(matches!(
            parse_err("Matt:AS\r\n\r\nJohn:ZS"),
            (3, ParseError::Card(CardError::UnknownFace { .. }))
        ));
        assert!(matches!(
            parse_err("Matt:AX"),
            (1, ParseError::Card(CardError::UnknownSuit { suit: 'X', .. }))
        ));
    }

    #[test]
    fn parse_round_trip() {
        let text = "Matt:AS,2H,10C\r\nJohn:KS,QD\r\nAnn:JH";
        let players = parse(text).unwrap();
        assert_eq!(players.to_string(), text);
        assert_eq!(parse(&players.to_string()).unwrap(), players);
    }
}
