// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical starting hands.
//!
//! The 1326 two cards hands collapse to 169 classes: 13 pairs, 78 suited and
//! 78 offsuit hands. Classes are laid out on a 13x13 grid with aces in the
//! top left corner, suited hands above the diagonal, offsuit hands below it,
//! and pairs on the diagonal.
use equichart_cards::{Card, Rank};
use std::{fmt, str::FromStr};

use crate::{EquityError, Hand};

/// Whether the two cards of a class share a suit or a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suitedness {
    /// Same suit.
    Suited,
    /// Different suits and ranks.
    Offsuit,
    /// Same rank.
    Pair,
}

/// A canonical starting hand class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandClass {
    high: Rank,
    low: Rank,
    kind: Suitedness,
}

impl HandClass {
    /// The number of classes.
    pub const COUNT: usize = 169;

    /// The grid side.
    pub const GRID_SIZE: usize = Rank::COUNT;

    /// Classifies two cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        let kind = if c1.suit() == c2.suit() {
            Suitedness::Suited
        } else if c1.rank() == c2.rank() {
            Suitedness::Pair
        } else {
            Suitedness::Offsuit
        };

        let (high, low) = if c1.rank() > c2.rank() {
            (c1.rank(), c2.rank())
        } else {
            (c2.rank(), c1.rank())
        };

        Self { high, low, kind }
    }

    /// The class at the given grid position.
    pub fn at(row: usize, col: usize) -> Option<HandClass> {
        let top = Self::GRID_SIZE - 1;
        let rank = |pos: usize| top.checked_sub(pos).and_then(Rank::from_index);

        let class = if row < col {
            HandClass {
                high: rank(row)?,
                low: rank(col)?,
                kind: Suitedness::Suited,
            }
        } else if row > col {
            HandClass {
                high: rank(col)?,
                low: rank(row)?,
                kind: Suitedness::Offsuit,
            }
        } else {
            HandClass {
                high: rank(row)?,
                low: rank(col)?,
                kind: Suitedness::Pair,
            }
        };

        Some(class)
    }

    /// All the classes in grid order, row by row.
    pub fn all() -> impl Iterator<Item = HandClass> {
        (0..Self::GRID_SIZE).flat_map(|row| {
            (0..Self::GRID_SIZE).filter_map(move |col| HandClass::at(row, col))
        })
    }

    /// The class grid position as (row, col).
    pub fn grid_pos(&self) -> (usize, usize) {
        let top = Self::GRID_SIZE - 1;
        let (high, low) = (top - self.high.index(), top - self.low.index());
        match self.kind {
            Suitedness::Suited => (high, low),
            Suitedness::Offsuit | Suitedness::Pair => (low, high),
        }
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank, equal to the higher rank for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// The class kind.
    pub fn kind(&self) -> Suitedness {
        self.kind
    }

    /// The number of concrete two cards hands in this class.
    pub fn combos(&self) -> usize {
        match self.kind {
            Suitedness::Suited => 4,
            Suitedness::Offsuit => 12,
            Suitedness::Pair => 6,
        }
    }
}

impl From<&Hand> for HandClass {
    fn from(hand: &Hand) -> Self {
        let [c1, c2] = hand.cards();
        HandClass::new(c1, c2)
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Suitedness::Suited => write!(f, "{}{}s", self.high, self.low),
            Suitedness::Offsuit => write!(f, "{}{}o", self.high, self.low),
            Suitedness::Pair => write!(f, "{}{}", self.high, self.low),
        }
    }
}

impl FromStr for HandClass {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EquityError::InvalidHandClass(s.to_string());

        let mut chars = s.trim().chars();
        let r1 = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let r2 = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let kind = match (chars.next().map(|c| c.to_ascii_lowercase()), r1 == r2) {
            (None, true) => Suitedness::Pair,
            (Some('s'), false) => Suitedness::Suited,
            (Some('o'), false) => Suitedness::Offsuit,
            _ => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(HandClass {
            high: r1.max(r2),
            low: r1.min(r2),
            kind,
        })
    }
}
