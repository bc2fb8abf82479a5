// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scoring.
use addemup_cards::Card;
use std::ops;

/// The scores of a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Sum of the cards face weights.
    pub face: u32,
    /// Sum of the cards suit weights.
    pub suit: u32,
}

impl Score {
    /// Scores a hand, an empty hand scores zero.
    pub fn of(hand: &[Card]) -> Score {
        hand.iter().fold(Score::default(), |acc, card| acc + *card)
    }
}

impl ops::Add<Card> for Score {
    type Output = Self;

    fn add(self, card: Card) -> Self::Output {
        Score {
            face: self.face.saturating_add(card.face_value()),
            suit: self.suit.saturating_add(card.suit_value()),
        }
    }
}
