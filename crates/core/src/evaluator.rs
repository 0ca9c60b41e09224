// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking capability.
use equichart_cards::Card;

/// Ranks a 5 to 7 cards hand.
///
/// The engine calls the evaluator with the two hole cards first followed by
/// the board cards, from multiple threads at the same time. Equal strengths
/// are a tie, the player wins only with a strictly greater strength.
pub trait Evaluator: Sync {
    /// A totally ordered hand strength.
    type Strength: Ord + Send + Sync;

    /// The error returned for invalid hands.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the strength of the best hand made with the given cards.
    fn rank(&self, cards: &[Card]) -> Result<Self::Strength, Self::Error>;
}

/// Texas Hold'em evaluator.
#[cfg(feature = "eval")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PokerEvaluator;

#[cfg(feature = "eval")]
impl Evaluator for PokerEvaluator {
    type Strength = equichart_eval::HandValue;
    type Error = equichart_eval::EvalError;

    #[inline]
    fn rank(&self, cards: &[Card]) -> Result<Self::Strength, Self::Error> {
        equichart_eval::HandValue::eval(cards)
    }
}
