// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is too short to hold a face and a suit.
    #[error("card '{0}' needs a face and a suit")]
    Malformed(String),
    /// The face symbol is not one of A, 2..10, J, Q, K.
    #[error("unknown face '{face}' in card '{card}'")]
    UnknownFace {
        /// The face symbol.
        face: String,
        /// The whole card token.
        card: String,
    },
    /// The suit symbol is not one of C, D, H, S.
    #[error("unknown suit '{suit}' in card '{card}'")]
    UnknownSuit {
        /// The suit symbol.
        suit: char,
        /// The whole card token.
        card: String,
    },
}

/// A playing card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Create a card given a face and suit.
    pub fn new(face: Face, suit: Suit) -> Card {
        Self { face, suit }
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The face weight of this card.
    #[inline]
    pub fn face_value(&self) -> u32 {
        self.face.value()
    }

    /// The suit weight of this card.
    #[inline]
    pub fn suit_value(&self) -> u32 {
        self.suit.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card token, the last character is the suit and everything
    /// before it is the face.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| CardError::Malformed(s.to_string()))?;
        let face_str = chars.as_str();
        if face_str.is_empty() {
            return Err(CardError::Malformed(s.to_string()));
        }

        let face = Face::from_symbol(face_str).ok_or_else(|| CardError::UnknownFace {
            face: face_str.to_string(),
            card: s.to_string(),
        })?;
        let suit = Suit::from_symbol(suit_char).ok_or_else(|| CardError::UnknownSuit {
            suit: suit_char,
            card: s.to_string(),
        })?;

        Ok(Card::new(face, suit))
    }
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Ace
    Ace = 1,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Face {
    /// Returns all faces, Ace low.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Ace, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// The face weight, Ace is 1 and King is 13.
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// The symbol used in the input text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Face::Ace => "A",
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
        }
    }

    fn from_symbol(s: &str) -> Option<Face> {
        Face::faces().find(|f| f.symbol() == s)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Hearts suit.
    Hearts = 3,
    /// Spades suit.
    Spades = 4,
}

impl Suit {
    /// Returns all suits, Clubs low.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit weight, Clubs is 1 and Spades is 4.
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// The symbol used in the input text.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        Suit::suits().find(|s| s.symbol() == c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_values() {
        let values = Face::faces().map(|f| f.value()).collect::<Vec<_>>();
        assert_eq!(values, (1..=13).collect::<Vec<_>>());

        let values = Suit::suits().map(|s| s.value()).collect::<Vec<_>>();
        assert_eq!(values, vec![1, 2, 3, 4]);

        let card = Card::new(Face::Queen, Suit::Diamonds);
        assert_eq!(card.face_value(), 12);
        assert_eq!(card.suit_value(), 2);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Face::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Face::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Face::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Face::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("AS".parse(), Ok(Card::new(Face::Ace, Suit::Spades)));
        assert_eq!("10C".parse(), Ok(Card::new(Face::Ten, Suit::Clubs)));
        assert_eq!("JH".parse(), Ok(Card::new(Face::Jack, Suit::Hearts)));

        // Every card survives a render and parse.
        for suit in Suit::suits() {
            for face in Face::faces() {
                let card = Card::new(face, suit);
                assert_eq!(card.to_string().parse(), Ok(card));
            }
        }
    }

    #[test]
    fn card_from_str_errors() {
        assert_eq!("".parse::<Card>(), Err(CardError::Malformed(String::new())));
        assert_eq!("S".parse::<Card>(), Err(CardError::Malformed("S".into())));
        assert!(matches!(
            "ZS".parse::<Card>(),
            Err(CardError::UnknownFace { face, .. }) if face == "Z"
        ));
        assert!(matches!(
            "TS".parse::<Card>(),
            Err(CardError::UnknownFace { .. })
        ));
        assert!(matches!(
            "as".parse::<Card>(),
            Err(CardError::UnknownFace { .. })
        ));
        assert!(matches!(
            "AX".parse::<Card>(),
            Err(CardError::UnknownSuit { suit: 'X', .. })
        ));
        assert!(matches!(
            "11H".parse::<Card>(),
            Err(CardError::UnknownFace { .. })
        ));
    }
}
