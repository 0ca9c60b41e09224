// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hole cards, board and streets.
use equichart_cards::{Card, ParseError, parse_cards};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::EquityError;

/// Two hole cards.
///
/// The cards order doesn't matter, a hand created from (A, B) is equal to a
/// hand created from (B, A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; 2]")]
pub struct Hand([Card; 2]);

impl Hand {
    /// Creates a hand from two different cards.
    pub fn new(c1: Card, c2: Card) -> Result<Self, EquityError> {
        if c1 == c2 {
            Err(EquityError::DuplicateCard(c1))
        } else {
            Ok(Self::from_distinct(c1, c2))
        }
    }

    /// Creates a hand from two cards known to be different.
    pub(crate) fn from_distinct(c1: Card, c2: Card) -> Self {
        if c1 > c2 { Self([c1, c2]) } else { Self([c2, c1]) }
    }

    /// The hand cards, the card with the higher id comes first.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl TryFrom<[Card; 2]> for Hand {
    type Error = EquityError;

    fn try_from([c1, c2]: [Card; 2]) -> Result<Self, Self::Error> {
        Hand::new(c1, c2)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for Hand {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            &[c1, c2] => Hand::new(c1, c2),
            cards => Err(ParseError::CardsCount {
                expected: 2,
                actual: cards.len(),
            }
            .into()),
        }
    }
}

/// A betting street, identified by the number of board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// Three board cards, turn and river to come.
    Flop,
    /// Four board cards, river to come.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// Returns the street for a board size.
    pub fn from_board_len(len: usize) -> Option<Street> {
        match len {
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// The number of board cards at this street.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The number of board cards still to be dealt.
    pub fn undealt(&self) -> usize {
        Board::MAX_LEN - self.board_len()
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{street}")
    }
}

/// The community cards.
///
/// A board has no repeated cards and has 0, 3, 4, or 5 cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    /// The maximum number of board cards.
    pub const MAX_LEN: usize = 5;

    /// Creates a board with the given cards.
    pub fn new(cards: Vec<Card>) -> Result<Self, EquityError> {
        if !matches!(cards.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::invalid_board_size(cards.len()));
        }

        check_distinct(&cards)?;
        Ok(Self(cards))
    }

    /// Parses a board in short form, e.g. `AhKd2c`.
    pub fn parse(s: &str) -> Result<Self, EquityError> {
        Board::new(parse_cards(s)?)
    }

    /// Adds the next street card to the board.
    ///
    /// The board must have at least a flop and no more than a turn.
    pub fn push(&mut self, card: Card) -> Result<(), EquityError> {
        if !matches!(self.0.len(), 3 | 4) {
            return Err(EquityError::invalid_board_size(self.0.len() + 1));
        }

        if self.0.contains(&card) {
            return Err(EquityError::DuplicateCard(card));
        }

        self.0.push(card);
        Ok(())
    }

    /// The board cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// The number of board cards.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if no cards have been dealt.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The board street, `None` before the flop.
    pub fn street(&self) -> Option<Street> {
        Street::from_board_len(self.0.len())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.0 {
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

/// Fails with the first card that appears more than once.
pub(crate) fn check_distinct<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<u64, EquityError> {
    cards.into_iter().try_fold(0u64, |used, card| {
        if used & card.mask() != 0 {
            Err(EquityError::DuplicateCard(*card))
        } else {
            Ok(used | card.mask())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use equichart_cards::{Rank, Suit};

    #[test]
    fn hand_is_order_independent() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ks = Card::new(Rank::King, Suit::Spades);

        let h1 = Hand::new(ah, ks).unwrap();
        let h2 = Hand::new(ks, ah).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.cards(), h2.cards());
        assert_eq!("AhKs".parse::<Hand>().unwrap(), "KsAh".parse::<Hand>().unwrap());
    }

    #[test]
    fn hand_errors() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert!(matches!(Hand::new(ah, ah), Err(EquityError::DuplicateCard(c)) if c == ah));
        assert!(matches!(
            "AhKsQd".parse::<Hand>(),
            Err(EquityError::Parse(ParseError::CardsCount { expected: 2, actual: 3 }))
        ));
        assert!(matches!("AhXs".parse::<Hand>(), Err(EquityError::Parse(_))));
    }

    #[test]
    fn deserialize_checks_cards() {
        let hand = serde_json::from_str::<Hand>("[50, 47]").unwrap();
        assert_eq!(hand.to_string(), "AhKs");
        assert_eq!(serde_json::to_string(&hand).unwrap(), "[50,47]");

        // Out of range card ids.
        assert!(serde_json::from_str::<Hand>("[60, 60]").is_err());
        assert!(serde_json::from_str::<Hand>("[50, 52]").is_err());

        // Same card twice.
        assert!(serde_json::from_str::<Hand>("[50, 50]").is_err());
    }

    #[test]
    fn board_streets() {
        assert_eq!(Board::default().street(), None);
        assert_eq!(Board::parse("AdKd2c").unwrap().street(), Some(Street::Flop));
        assert_eq!(Board::parse("AdKd2c7h").unwrap().street(), Some(Street::Turn));
        assert_eq!(Board::parse("AdKd2c7h3s").unwrap().street(), Some(Street::River));

        assert_eq!(Street::Flop.undealt(), 2);
        assert_eq!(Street::Turn.undealt(), 1);
        assert_eq!(Street::River.undealt(), 0);
    }

    #[test]
    fn board_errors() {
        assert!(matches!(
            Board::parse("AdKd"),
            Err(EquityError::InvalidBoardSize {
                expected: 3,
                actual: 2
            })
        ));
        assert!(matches!(
            Board::parse("AdKd2c7h3s4s"),
            Err(EquityError::InvalidBoardSize {
                expected: 5,
                actual: 6
            })
        ));
        assert!(matches!(
            Board::parse("AdKdAd"),
            Err(EquityError::DuplicateCard(c)) if c == Card::new(Rank::Ace, Suit::Diamonds)
        ));
    }

    #[test]
    fn board_push() {
        let mut board = Board::parse("AdKd2c").unwrap();
        let seven = Card::new(Rank::Seven, Suit::Hearts);

        assert!(matches!(
            board.push(Card::new(Rank::Deuce, Suit::Clubs)),
            Err(EquityError::DuplicateCard(_))
        ));

        board.push(seven).unwrap();
        board.push(Card::new(Rank::Trey, Suit::Spades)).unwrap();
        assert_eq!(board.to_string(), "AdKd2c7h3s");

        assert!(matches!(
            board.push(Card::new(Rank::Four, Suit::Spades)),
            Err(EquityError::InvalidBoardSize {
                expected: 5,
                actual: 6
            })
        ));
    }
}
