// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::ControlFlow};

use crate::{
    ParseError,
    subsets::{self, MAX_K},
};

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// A card is stored as a dense index in `0..52`, with the rank in the high
/// bits and the suit in the two low bits:
///
/// ```text
///   +--------+
///   |rrrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id in `0..52`.
    #[inline]
    pub fn id(&self) -> usize {
        self.0 as usize
    }

    /// A 64 bits mask with only this card bit set.
    #[inline]
    pub fn mask(&self) -> u64 {
        1 << self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 >> 2 {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank 0x{:x}", self.0),
        }
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < Deck::SIZE {
            Ok(Card(id))
        } else {
            Err(ParseError::InvalidCardId(id))
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
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
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + ExactSizeIterator {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for a `0..13` index, deuce is 0 and ace is 12.
    pub fn from_index(idx: usize) -> Option<Rank> {
        Rank::ranks().nth(idx)
    }

    /// The rank index in `0..13`.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The rank face value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Parses a rank character, `T` is a ten.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A cards Deck.
///
/// A deck never holds the same card twice, removing cards returns or updates
/// a deck that is a strict subset of the standard 52 cards deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The deck cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the deck cards, the iteration can be restarted any number of
    /// times and always yields the same order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Removes a card from the deck, does nothing if the card is not in the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns a new deck without the given cards, cards that are not in this
    /// deck are ignored.
    pub fn without(&self, cards: &[Card]) -> Deck {
        let used = cards.iter().fold(0u64, |mask, c| mask | c.mask());
        let cards = self
            .cards
            .iter()
            .filter(|c| c.mask() & used == 0)
            .copied()
            .collect();
        Deck { cards }
    }

    /// Calls the `f` closure for each k-cards subset of the deck.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let _ = self.try_for_each::<(), _>(k, |cards| {
            f(cards);
            Ok(())
        });
    }

    /// Calls the `f` closure for each k-cards subset of the deck and stops at
    /// the first error.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn try_for_each<E, F>(&self, k: usize, mut f: F) -> Result<(), E>
    where
        F: FnMut(&[Card]) -> Result<(), E>,
    {
        assert!(1 <= k && k <= MAX_K, "1 <= k <= {MAX_K}");

        let n = self.cards.len();
        if k > n {
            return Ok(());
        }

        let mut h = [Card::default(); MAX_K];
        let res = subsets::for_each_ksubset(n, k, 0, subsets::nck(n, k), |p| {
            for (idx, &pos) in p.iter().enumerate() {
                h[idx] = self.cards[pos];
            }

            match f(&h[..k]) {
                Ok(()) => ControlFlow::Continue(()),
                Err(e) => ControlFlow::Break(e),
            }
        });

        match res {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(e) => Err(e),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_from_id() {
        for card in Deck::default() {
            assert_eq!(Card::try_from(card.id() as u8), Ok(card));
        }

        assert_eq!(Card::try_from(52u8), Err(ParseError::InvalidCardId(52)));
        assert_eq!(Card::try_from(255u8), Err(ParseError::InvalidCardId(255)));

        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(serde_json::to_string(&ah).unwrap(), "50");
        assert_eq!(serde_json::from_str::<Card>("50").unwrap(), ah);
        assert!(serde_json::from_str::<Card>("60").is_err());
        assert!(serde_json::from_str::<Vec<Card>>("[50, 64]").is_err());
    }

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let deck = Deck::new_and_shuffled(&mut rand::rng());

        for card in &deck {
            assert_eq!(Card::new(card.rank(), card.suit()), *card);
            assert!(card.id() < Deck::SIZE);
            assert_eq!(card.mask().count_ones(), 1);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.rank(), Rank::King);
        assert_eq!(kd.suit(), Suit::Diamonds);
        assert_eq!(kd.rank().value(), 13);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Deuce.value(), 2);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(Ah)");
    }

    #[test]
    fn deck_iter_is_restartable() {
        let deck = Deck::default();
        let first = deck.iter().copied().collect::<Vec<_>>();
        let second = deck.iter().copied().collect::<Vec<_>>();
        assert_eq!(first.len(), Deck::SIZE);
        assert_eq!(first, second);
    }

    #[test]
    fn deck_remove_is_idempotent() {
        let ad = Card::new(Rank::Ace, Suit::Diamonds);

        let mut deck = Deck::default();
        deck.remove(ad);
        assert_eq!(deck.count(), 51);
        assert!(!deck.contains(ad));

        deck.remove(ad);
        assert_eq!(deck.count(), 51);

        let other = deck.without(&[ad, ad]);
        assert_eq!(other, deck);
    }

    #[test]
    fn deck_without_is_pure() {
        let deck = Deck::default();
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ks = Card::new(Rank::King, Suit::Spades);

        let reduced = deck.without(&[ah, ks]);
        assert_eq!(deck.count(), Deck::SIZE);
        assert!(deck.contains(ah));
        assert_eq!(reduced.count(), 50);
        assert!(!reduced.contains(ah));
        assert!(!reduced.contains(ks));

        // Deck order is preserved.
        let expected = deck
            .iter()
            .filter(|&&c| c != ah && c != ks)
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(reduced.cards(), expected.as_slice());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(1, |cards| {
            assert_eq!(cards.len(), 1);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 52);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            assert_ne!(cards[0], cards[1]);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_try_for_each_stops() {
        let deck = Deck::default();

        let mut count = 0;
        let res = deck.try_for_each(2, |cards| {
            count += 1;
            if cards.contains(&Card::new(Rank::Ace, Suit::Spades)) {
                Err(count)
            } else {
                Ok(())
            }
        });

        assert_eq!(res, Err(count));
        assert!(count < 1_326);
    }

    #[test]
    fn deck_for_each_short_deck() {
        let deck = Deck::default().without(&Deck::default().cards()[1..]);
        assert_eq!(deck.count(), 1);

        let mut count = 0;
        deck.for_each(2, |_| count += 1);
        assert_eq!(count, 0);
    }
}
