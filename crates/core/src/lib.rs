// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equichart equity enumeration engine.
//!
//! Computes a player equity against every opponent starting hand by walking
//! all the board runouts and all the opponent hands left in the deck, the
//! results are grouped by [HandClass] (`AKs`, `72o`, `QQ`, ...):
//!
//! ```
//! # use equichart_core::*;
//! let hand = "AhKs".parse::<Hand>().unwrap();
//! let board = Board::parse("AdKd2c7h3s").unwrap();
//! let deck = Deck::default().without(&hand.cards()).without(board.cards());
//!
//! let equity = Equity::new(PokerEvaluator, Config::default());
//! let probs = equity.river(&hand, board.cards(), &deck).unwrap();
//! assert_eq!(probs.total_observations(), 990);
//! assert!(probs.iter().all(|(_, p)| p > 0.0 && p < 1.0));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod class;
pub mod equity;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod probs;
mod sink;

pub use class::{HandClass, Suitedness};
pub use equity::{Equity, Outcome};
pub use error::EquityError;
pub use evaluator::Evaluator;
pub use hand::{Board, Hand, Street};
pub use probs::{Probabilities, Tally};

#[cfg(feature = "eval")]
pub use evaluator::PokerEvaluator;

// Reexport cards types.
pub use equichart_cards::{Card, Deck, Rank, Suit};

/// The engine configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of parallel tasks used by the enumeration.
    pub num_tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_tasks: num_cpus::get(),
        }
    }
}
