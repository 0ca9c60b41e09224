// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity computation errors.
use equichart_cards::{Card, ParseError};
use thiserror::Error;

/// Errors returned by the equity engine.
///
/// Input errors are detected before the enumeration starts, evaluation errors
/// abort the whole enumeration, a partial result is never returned.
#[derive(Debug, Error)]
pub enum EquityError {
    /// The board size doesn't match the street.
    #[error("invalid board size {actual}, expected {expected} cards")]
    InvalidBoardSize {
        /// The board size for the street, or the closest valid size.
        expected: usize,
        /// The board size found.
        actual: usize,
    },
    /// A card is repeated in the hand or the board, or is still in the deck.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The deck doesn't have enough cards for the street.
    #[error("insufficient deck, {required} cards required but {available} available")]
    InsufficientDeck {
        /// Cards required by the enumeration.
        required: usize,
        /// Cards in the deck.
        available: usize,
    },
    /// The rank evaluator failed.
    #[error("rank evaluation failed: {0}")]
    RankEvaluation(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A starting hand class string is not valid.
    #[error("invalid hand class '{0}'")]
    InvalidHandClass(String),
    /// Cards parsing error.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl EquityError {
    /// A board size error for a board that matches no street.
    pub(crate) fn invalid_board_size(actual: usize) -> Self {
        let min = crate::Street::Flop.board_len();
        let max = crate::Board::MAX_LEN;
        EquityError::InvalidBoardSize {
            expected: actual.clamp(min, max),
            actual,
        }
    }
}
