// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Add 'Em Up card types.
//!
//! A [Card] is a [Face] and a [Suit], each with a fixed weight used for
//! scoring a hand:
//!
//! ```
//! # use addemup_cards::{Card, Face, Suit};
//! let ks = Card::new(Face::King, Suit::Spades);
//! assert_eq!(ks.face_value(), 13);
//! assert_eq!(ks.suit_value(), 4);
//! ```
//!
//! cards are parsed from and rendered to their text symbols, a face symbol
//! followed by a single suit character:
//!
//! ```
//! # use addemup_cards::{Card, Face, Suit};
//! let card = "10H".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Face::Ten, Suit::Hearts));
//! assert_eq!(card.to_string(), "10H");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Face, Suit};
