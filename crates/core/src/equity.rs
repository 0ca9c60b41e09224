// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive equity enumeration.
//!
//! For each street the engine walks every remaining runout and, for each
//! complete board, every two cards opponent hand left in the deck:
//!
//! - river: C(n, 2) opponent hands
//! - turn: n river cards times C(n - 1, 2) opponent hands
//! - flop: n turn cards times n - 1 river cards times C(n - 2, 2) opponent hands
//!
//! Turn and river cards are dealt in order from a shrinking deck, so on the
//! flop each unordered runout is visited twice; this doesn't change the
//! probabilities as every runout gets the same weight.
//!
//! The first undealt card (or the opponent hands on the river) is split across
//! tasks, each branch works on its own copy of the deck without the dealt
//! cards and appends its outcomes to its task sink.
use equichart_cards::{Card, Deck};
use log::{debug, info};
use std::time::Instant;

use crate::{
    Config, EquityError, Evaluator, Hand, Probabilities, Street, hand::check_distinct,
    sink::TaskSinks,
};

/// A showdown against one opponent hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// The opponent hand.
    pub hand: Hand,
    /// The player hand is strictly stronger, a tie is not a win.
    pub we_beat: bool,
}

/// The equity engine.
#[derive(Debug, Clone)]
pub struct Equity<E> {
    evaluator: E,
    num_tasks: usize,
}

#[cfg(feature = "eval")]
impl Default for Equity<crate::PokerEvaluator> {
    fn default() -> Self {
        Self::new(crate::PokerEvaluator, Config::default())
    }
}

impl<E: Evaluator> Equity<E> {
    /// Creates an engine with the given evaluator.
    pub fn new(evaluator: E, config: Config) -> Self {
        Self {
            evaluator,
            num_tasks: config.num_tasks.max(1),
        }
    }

    /// Equity on the flop, `board` must have 3 cards.
    pub fn flop(&self, hand: &Hand, board: &[Card], deck: &Deck) -> Result<Probabilities, EquityError> {
        self.probabilities(Street::Flop, hand, board, deck)
    }

    /// Equity on the turn, `board` must have 4 cards.
    pub fn turn(&self, hand: &Hand, board: &[Card], deck: &Deck) -> Result<Probabilities, EquityError> {
        self.probabilities(Street::Turn, hand, board, deck)
    }

    /// Equity on the river, `board` must have 5 cards.
    pub fn river(&self, hand: &Hand, board: &[Card], deck: &Deck) -> Result<Probabilities, EquityError> {
        self.probabilities(Street::River, hand, board, deck)
    }

    /// Equity for the street given by the board size.
    pub fn compute(&self, hand: &Hand, board: &[Card], deck: &Deck) -> Result<Probabilities, EquityError> {
        let street = Street::from_board_len(board.len())
            .ok_or_else(|| EquityError::invalid_board_size(board.len()))?;
        self.probabilities(street, hand, board, deck)
    }

    /// Equity for a street.
    pub fn probabilities(
        &self,
        street: Street,
        hand: &Hand,
        board: &[Card],
        deck: &Deck,
    ) -> Result<Probabilities, EquityError> {
        let outcomes = self.outcomes(street, hand, board, deck)?;
        Ok(Probabilities::from_outcomes(&outcomes))
    }

    /// Enumerates all the showdowns for a street.
    ///
    /// The deck must not contain the hand or board cards. The outcomes order
    /// depends on the deck order and on the number of tasks.
    pub fn outcomes(
        &self,
        street: Street,
        hand: &Hand,
        board: &[Card],
        deck: &Deck,
    ) -> Result<Vec<Outcome>, EquityError> {
        validate(street, hand, board, deck)?;

        debug!(
            "Enumerating {street} with {} cards in deck and {} tasks",
            deck.count(),
            self.num_tasks
        );

        let now = Instant::now();
        let sinks = TaskSinks::new(self.num_tasks);

        match street {
            Street::River => {
                let board = runout::<5>(board, &[])?;
                self.par_river(hand, &board, deck, &sinks)?;
            }
            Street::Turn => {
                deck.par_try_for_each(self.num_tasks, 1, |task_id, river| -> Result<(), EquityError> {
                    let board = runout::<5>(board, river)?;
                    let mut outcomes = Vec::new();
                    self.river_outcomes(hand, &board, &deck.without(river), &mut outcomes)?;
                    sinks.extend(task_id, outcomes);
                    Ok(())
                })?;
            }
            Street::Flop => {
                deck.par_try_for_each(self.num_tasks, 1, |task_id, turn| -> Result<(), EquityError> {
                    let board = runout::<4>(board, turn)?;
                    let mut outcomes = Vec::new();
                    self.turn_outcomes(hand, &board, &deck.without(turn), &mut outcomes)?;
                    sinks.extend(task_id, outcomes);
                    Ok(())
                })?;
            }
        }

        let outcomes = sinks.into_outcomes();
        info!(
            "Enumerated {} {street} showdowns in {:.3}s",
            outcomes.len(),
            now.elapsed().as_secs_f64()
        );

        Ok(outcomes)
    }

    /// River showdowns with the opponent hands split across tasks.
    fn par_river(&self, hand: &Hand, board: &[Card; 5], deck: &Deck, sinks: &TaskSinks) -> Result<(), EquityError> {
        let cards = showdown_cards(hand, board);
        let player = self.rank(&cards)?;

        deck.par_try_for_each(self.num_tasks, 2, |task_id, pair| -> Result<(), EquityError> {
            let mut cards = cards;
            cards[..2].copy_from_slice(pair);
            let opponent = self.rank(&cards)?;
            sinks.push(
                task_id,
                Outcome {
                    hand: Hand::from_distinct(pair[0], pair[1]),
                    we_beat: player > opponent,
                },
            );
            Ok(())
        })
    }

    /// Turn showdowns for every river card left in the deck.
    fn turn_outcomes(
        &self,
        hand: &Hand,
        board: &[Card; 4],
        deck: &Deck,
        outcomes: &mut Vec<Outcome>,
    ) -> Result<(), EquityError> {
        for &river in deck {
            let board = runout::<5>(board, &[river])?;
            self.river_outcomes(hand, &board, &deck.without(&[river]), outcomes)?;
        }

        Ok(())
    }

    /// River showdowns for every opponent hand left in the deck.
    fn river_outcomes(
        &self,
        hand: &Hand,
        board: &[Card; 5],
        deck: &Deck,
        outcomes: &mut Vec<Outcome>,
    ) -> Result<(), EquityError> {
        if deck.count() < 2 {
            return Err(EquityError::InsufficientDeck {
                required: 2,
                available: deck.count(),
            });
        }

        let mut cards = showdown_cards(hand, board);
        let player = self.rank(&cards)?;

        deck.try_for_each(2, |pair| -> Result<(), EquityError> {
            cards[..2].copy_from_slice(pair);
            let opponent = self.rank(&cards)?;
            outcomes.push(Outcome {
                hand: Hand::from_distinct(pair[0], pair[1]),
                we_beat: player > opponent,
            });
            Ok(())
        })
    }

    fn rank(&self, cards: &[Card]) -> Result<E::Strength, EquityError> {
        self.evaluator
            .rank(cards)
            .map_err(|e| EquityError::RankEvaluation(Box::new(e)))
    }
}

/// Checks the inputs before starting the enumeration.
fn validate(street: Street, hand: &Hand, board: &[Card], deck: &Deck) -> Result<(), EquityError> {
    if board.len() != street.board_len() {
        return Err(EquityError::InvalidBoardSize {
            expected: street.board_len(),
            actual: board.len(),
        });
    }

    let used = check_distinct(hand.cards().iter().chain(board))?;
    if let Some(card) = deck.iter().find(|c| c.mask() & used != 0) {
        return Err(EquityError::DuplicateCard(*card));
    }

    // The undealt board cards plus the opponent hand.
    let required = street.undealt() + 2;
    if deck.count() < required {
        return Err(EquityError::InsufficientDeck {
            required,
            available: deck.count(),
        });
    }

    Ok(())
}

/// Appends the dealt cards to a board.
fn runout<const N: usize>(board: &[Card], dealt: &[Card]) -> Result<[Card; N], EquityError> {
    let len = board.len() + dealt.len();
    if len != N {
        return Err(EquityError::InvalidBoardSize {
            expected: N,
            actual: len,
        });
    }

    let mut cards = [Card::default(); N];
    cards[..board.len()].copy_from_slice(board);
    cards[board.len()..].copy_from_slice(dealt);
    Ok(cards)
}

/// The hole cards followed by the board.
fn showdown_cards(hand: &Hand, board: &[Card; 5]) -> [Card; 7] {
    let mut cards = [Card::default(); 7];
    cards[..2].copy_from_slice(&hand.cards());
    cards[2..].copy_from_slice(board);
    cards
}
