// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equichart cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use equichart_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!("Ah".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for removing cards and iterating cards subsets.
//!
//! For example to count all the opponent hands left once the hero hand and the
//! board cards have been removed from the deck:
//!
//! ```
//! # use equichart_cards::{parse_cards, Deck};
//! let used = parse_cards("AhKsAdKd2c7h3s").unwrap();
//! let deck = Deck::default().without(&used);
//! assert_eq!(deck.count(), 45);
//!
//! let mut counter = 0;
//! deck.for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 990);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number of
//! tasks, the closure `task_id` can be used to store per task data to reduce
//! contention, the first error returned by the closure stops all the tasks:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_try_for_each() {
//! # use std::sync::atomic;
//! # use equichart_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! let res: Result<(), ()> = Deck::default().par_try_for_each(4, 2, |_task_id, hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//!     Ok(())
//! });
//! assert!(res.is_ok());
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 1_326);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
mod parse;
mod subsets;

pub use deck::{Card, Deck, Rank, Suit};
pub use parse::{ParseError, parse_cards};
