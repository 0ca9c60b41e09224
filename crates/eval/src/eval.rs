// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand is reduced to a 13 bits ranks mask per suit and to per rank counts,
//! the best category is searched from the straight flush down to the high card
//! and the first match wins. The value packs the category in the high bits
//! followed by up to five 4 bits rank indices:
//!
//! ```text
//!   +--------+--------+--------+--------+
//!   |xxxxxxxx|cccckkkk|kkkkkkkk|kkkkkkkk|
//!   +--------+--------+--------+--------+
//!   c = hand category (high card=0,...,straight flush=8)
//!   k = ranks that break ties within the category, most significant first
//! ```
use equichart_cards::{Card, Rank};
use std::fmt;
use thiserror::Error;

/// The wheel straight ranks mask (A, 2, 3, 4, 5).
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Bits position of the category in the hand value.
const CATEGORY_SHIFT: u32 = 20;

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have 5, 6, or 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The hand contains the same card more than once.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
}

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}

/// A hand value, a greater value beats a lower value and equal values split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EvalError::InvalidHandSize(cards.len()));
        }

        let mut hand = Hand::default();
        for &card in cards {
            if hand.used & card.mask() != 0 {
                return Err(EvalError::DuplicateCard(card));
            }

            hand.used |= card.mask();
            hand.suits[card.suit() as usize] |= 1 << card.rank().index();
            hand.counts[card.rank().index()] += 1;
        }

        hand.ranks = hand.suits.iter().fold(0, |acc, s| acc | s);

        Ok(hand.find_value())
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        match self.0 >> CATEGORY_SHIFT {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            _ => HandRank::StraightFlush,
        }
    }

    /// Packs a category and its tie breaking ranks.
    fn new(rank: HandRank, kickers: impl IntoIterator<Item = usize>) -> Self {
        let kickers = kickers
            .into_iter()
            .take(5)
            .chain(std::iter::repeat(0))
            .take(5)
            .fold(0u32, |acc, k| (acc << 4) | k as u32);
        Self(((rank as u32) << CATEGORY_SHIFT) | kickers)
    }
}

/// Bit masks view of a hand.
#[derive(Default)]
struct Hand {
    used: u64,
    suits: [u16; 4],
    ranks: u16,
    counts: [u8; Rank::COUNT],
}

impl Hand {
    fn find_value(&self) -> HandValue {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_four_of_a_kind())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_three_of_a_kind())
            .or_else(|| self.find_pairs())
            .unwrap_or_else(|| HandValue::new(HandRank::HighCard, top_ranks(self.ranks, 5)))
    }

    fn find_straight_flush(&self) -> Option<HandValue> {
        let suit = self.flush_suit()?;
        straight_high(suit).map(|high| HandValue::new(HandRank::StraightFlush, [high]))
    }

    fn find_four_of_a_kind(&self) -> Option<HandValue> {
        let quads = self.rank_of_count(4, None)?;
        let kicker = top_ranks(self.ranks & !(1 << quads), 1);
        Some(HandValue::new(HandRank::FourOfAKind, [quads].into_iter().chain(kicker)))
    }

    fn find_full_house(&self) -> Option<HandValue> {
        let trips = self.rank_of_count(3, None)?;
        let pair = self.rank_of_count(2, Some(trips))?;
        Some(HandValue::new(HandRank::FullHouse, [trips, pair]))
    }

    fn find_flush(&self) -> Option<HandValue> {
        let suit = self.flush_suit()?;
        Some(HandValue::new(HandRank::Flush, top_ranks(suit, 5)))
    }

    fn find_straight(&self) -> Option<HandValue> {
        straight_high(self.ranks).map(|high| HandValue::new(HandRank::Straight, [high]))
    }

    fn find_three_of_a_kind(&self) -> Option<HandValue> {
        let trips = self.rank_of_count(3, None)?;
        let kickers = top_ranks(self.ranks & !(1 << trips), 2);
        Some(HandValue::new(HandRank::ThreeOfAKind, [trips].into_iter().chain(kickers)))
    }

    fn find_pairs(&self) -> Option<HandValue> {
        let high = self.rank_of_count(2, None)?;
        match self.rank_of_count(2, Some(high)) {
            Some(low) => {
                let kicker = top_ranks(self.ranks & !(1 << high) & !(1 << low), 1);
                Some(HandValue::new(HandRank::TwoPair, [high, low].into_iter().chain(kicker)))
            }
            None => {
                let kickers = top_ranks(self.ranks & !(1 << high), 3);
                Some(HandValue::new(HandRank::OnePair, [high].into_iter().chain(kickers)))
            }
        }
    }

    /// The ranks mask of the flush suit if any.
    fn flush_suit(&self) -> Option<u16> {
        self.suits.iter().copied().find(|s| s.count_ones() >= 5)
    }

    /// The highest rank with at least n cards, excluding `skip`.
    fn rank_of_count(&self, n: u8, skip: Option<usize>) -> Option<usize> {
        (0..Rank::COUNT)
            .rev()
            .filter(|&r| Some(r) != skip)
            .find(|&r| self.counts[r] >= n)
    }
}

/// The highest rank of a straight in the ranks mask.
fn straight_high(ranks: u16) -> Option<usize> {
    let mut bits = ranks;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;

    if bits != 0 {
        Some(15 - bits.leading_zeros() as usize)
    } else if ranks & WHEEL == WHEEL {
        Some(Rank::Five.index())
    } else {
        None
    }
}

/// The n highest ranks in the ranks mask, highest first.
fn top_ranks(ranks: u16, n: usize) -> impl Iterator<Item = usize> {
    (0..Rank::COUNT).rev().filter(move |&r| ranks & (1 << r) != 0).take(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equichart_cards::{Deck, parse_cards};
    use rand::prelude::*;

    fn value(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn hand_categories() {
        assert_eq!(value("AsKhQdJc9s").rank(), HandRank::HighCard);
        assert_eq!(value("AsAhKdQcJs").rank(), HandRank::OnePair);
        assert_eq!(value("AsAhKdKcQs").rank(), HandRank::TwoPair);
        assert_eq!(value("AsAhAdKcQs").rank(), HandRank::ThreeOfAKind);
        assert_eq!(value("TsJhQdKcAs").rank(), HandRank::Straight);
        assert_eq!(value("As2h3d4c5s").rank(), HandRank::Straight);
        assert_eq!(value("2s4s6s8sTs").rank(), HandRank::Flush);
        assert_eq!(value("AsAhAdKcKs").rank(), HandRank::FullHouse);
        assert_eq!(value("AsAhAdAcKs").rank(), HandRank::FourOfAKind);
        assert_eq!(value("9sTsJsQsKs").rank(), HandRank::StraightFlush);
        assert_eq!(value("As2s3s4s5s").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn seven_cards_best_hand() {
        // Flush beats the straight on the same cards.
        assert_eq!(value("2h3h4h5d6h9hKc").rank(), HandRank::Flush);
        // Two trips make a full house.
        assert_eq!(value("AsAhAd2c2s2hKd").rank(), HandRank::FullHouse);
        // Three pairs are two pairs with the best kicker.
        assert_eq!(value("AsAhKdKc2s2hQd"), value("AsAhKdKcQd3h4c"));
        // Straight flush is found on seven cards.
        assert_eq!(value("Ah2h3h4h5hKdKs").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn hand_ordering() {
        // Kickers break ties.
        assert!(value("AsAhKdQcJs") > value("AsAhKdQc9s"));
        assert!(value("AsKhQdJc9s") > value("AsKhQdJc8s"));
        assert!(value("KsKhKdAcAs") < value("AsAhAd2c2s"));
        // The wheel is the lowest straight.
        assert!(value("As2h3d4c5s") < value("2h3d4c5s6h"));
        assert!(value("As2s3s4s5s") < value("2s3s4s5s6s"));
        // Suits don't matter.
        assert_eq!(value("AsKhQdJc9s"), value("AhKsQcJd9h"));
        // Categories order.
        assert!(value("2s3s4s5s7s") > value("TsJhQdKcAs"));
    }

    #[test]
    fn eval_errors() {
        let cards = parse_cards("AsKhQdJc9s8d7c2h").unwrap();
        assert_eq!(
            HandValue::eval(&cards[..4]),
            Err(EvalError::InvalidHandSize(4))
        );
        assert_eq!(HandValue::eval(&cards), Err(EvalError::InvalidHandSize(8)));

        let dup = parse_cards("AsKhQdJcAs").unwrap();
        assert_eq!(HandValue::eval(&dup), Err(EvalError::DuplicateCard(dup[0])));
    }

    #[test]
    fn five_cards_distribution() {
        let mut counts = [0usize; 9];
        Deck::default().for_each(5, |hand| {
            let rank = HandValue::eval(hand).unwrap().rank();
            counts[rank as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
    }

    #[test]
    fn seven_cards_is_best_five() {
        let mut rng = StdRng::seed_from_u64(101);
        for _ in 0..500 {
            let cards = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();

            let mut best = None;
            for i in 0..7 {
                for j in (i + 1)..7 {
                    let five = cards
                        .iter()
                        .enumerate()
                        .filter(|&(idx, _)| idx != i && idx != j)
                        .map(|(_, c)| *c)
                        .collect::<Vec<_>>();
                    let v = HandValue::eval(&five).unwrap();
                    best = best.max(Some(v));
                }
            }

            assert_eq!(Some(HandValue::eval(&cards).unwrap()), best);
        }
    }
}
