// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per class win probabilities.
use ahash::AHashMap;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{HandClass, Outcome};

/// Win counts for a hand class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Showdowns won by the player.
    pub wins: u64,
    /// All showdowns against this class.
    pub total: u64,
}

impl Tally {
    /// The smoothed win probability (wins + 1) / (total + 2).
    pub fn probability(&self) -> f64 {
        (self.wins + 1) as f64 / (self.total + 2) as f64
    }
}

/// The probability of beating each opponent hand class.
///
/// Classes that never showed up in the enumeration, because the known cards
/// block them, have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probabilities {
    tallies: AHashMap<HandClass, Tally>,
}

impl Probabilities {
    /// Aggregates showdown outcomes by class.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut tallies = AHashMap::<HandClass, Tally>::new();
        for outcome in outcomes {
            let tally = tallies.entry(HandClass::from(&outcome.hand)).or_default();
            tally.total += 1;
            tally.wins += outcome.we_beat as u64;
        }

        Self { tallies }
    }

    /// The probability of beating a class, `None` if it is not possible.
    pub fn get(&self, class: HandClass) -> Option<f64> {
        self.tallies.get(&class).map(Tally::probability)
    }

    /// The raw counts for a class.
    pub fn tally(&self, class: HandClass) -> Option<Tally> {
        self.tallies.get(&class).copied()
    }

    /// The number of possible classes.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    /// Checks if there are no possible classes.
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// The number of showdowns.
    pub fn total_observations(&self) -> u64 {
        self.tallies.values().map(|t| t.total).sum()
    }

    /// Possible classes and their probabilities in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (HandClass, f64)> + '_ {
        HandClass::all().filter_map(|class| self.get(class).map(|p| (class, p)))
    }

    /// The probabilities laid out on the 13x13 class grid.
    pub fn grid(&self) -> [[Option<f64>; HandClass::GRID_SIZE]; HandClass::GRID_SIZE] {
        let mut grid = [[None; HandClass::GRID_SIZE]; HandClass::GRID_SIZE];
        for (class, p) in self.iter() {
            let (row, col) = class.grid_pos();
            grid[row][col] = Some(p);
        }

        grid
    }
}

impl Serialize for Probabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (class, p) in self.iter() {
            map.serialize_entry(&class.to_string(), &p)?;
        }

        map.end()
    }
}
