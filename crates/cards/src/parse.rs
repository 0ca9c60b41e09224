// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Short form cards parsing.
//!
//! Cards are written as a rank followed by a suit, `Ah` is the ace of hearts,
//! `Th` or `10h` the ten of hearts, multiple cards are written unseparated
//! (`AhAsAcAd9s`) or separated by spaces or commas.
use std::{iter::Peekable, str::Chars, str::FromStr};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Cards parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input has no cards.
    #[error("no cards in input")]
    Empty,
    /// Unknown rank character.
    #[error("invalid rank '{0}'")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
    /// A rank without a suit at the end of the input.
    #[error("missing suit after rank '{0}'")]
    MissingSuit(Rank),
    /// A card id outside `0..52`.
    #[error("invalid card id {0}")]
    InvalidCardId(u8),
    /// The input has a different number of cards than expected.
    #[error("expected {expected} cards, found {actual}")]
    CardsCount {
        /// Expected number of cards.
        expected: usize,
        /// Number of cards found.
        actual: usize,
    },
}

/// Parses a sequence of cards in short form.
///
/// ```
/// # use equichart_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("Th9s").unwrap();
/// assert_eq!(cards, vec![
///     Card::new(Rank::Ten, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Spades),
/// ]);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseError> {
    let mut chars = s.chars().peekable();
    let mut cards = Vec::new();

    while let Some(card) = next_card(&mut chars)? {
        cards.push(card);
    }

    Ok(cards)
}

fn next_card(chars: &mut Peekable<Chars<'_>>) -> Result<Option<Card>, ParseError> {
    let Some(c) = chars.find(|c| !c.is_whitespace() && *c != ',') else {
        return Ok(None);
    };

    let rank = if c == '1' && chars.peek() == Some(&'0') {
        chars.next();
        Rank::Ten
    } else {
        Rank::from_char(c).ok_or(ParseError::InvalidRank(c))?
    };

    let c = chars.next().ok_or(ParseError::MissingSuit(rank))?;
    let suit = Suit::from_char(c).ok_or(ParseError::InvalidSuit(c))?;

    Ok(Some(Card::new(rank, suit)))
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            [] => Err(ParseError::Empty),
            [card] => Ok(*card),
            cards => Err(ParseError::CardsCount {
                expected: 1,
                actual: cards.len(),
            }),
        }
    }
}
