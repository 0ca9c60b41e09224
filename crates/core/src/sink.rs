// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per task outcome sinks.
use parking_lot::Mutex;

use crate::Outcome;

/// Outcome lists indexed by task id.
///
/// Each task only appends to its own slot so the locks are never contended,
/// slots are concatenated in task id order once all tasks are done.
pub(crate) struct TaskSinks {
    slots: Vec<Mutex<Vec<Outcome>>>,
}

impl TaskSinks {
    pub fn new(num_tasks: usize) -> Self {
        Self {
            slots: (0..num_tasks).map(|_| Mutex::new(Vec::new())).collect(),
        }
    }

    pub fn push(&self, task_id: usize, outcome: Outcome) {
        self.slots[task_id].lock().push(outcome);
    }

    /// Appends a branch local outcomes.
    pub fn extend(&self, task_id: usize, outcomes: Vec<Outcome>) {
        let mut slot = self.slots[task_id].lock();
        if slot.is_empty() {
            *slot = outcomes;
        } else {
            slot.extend(outcomes);
        }
    }

    pub fn into_outcomes(self) -> Vec<Outcome> {
        let len = self.slots.iter().map(|s| s.lock().len()).sum();
        let mut outcomes = Vec::with_capacity(len);
        for slot in self.slots {
            outcomes.append(&mut slot.into_inner());
        }

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hand;
    use equichart_cards::Deck;
    use std::thread;

    #[test]
    fn concurrent_appends_are_not_lost() {
        const NUM_TASKS: usize = 8;

        let hands = {
            let mut hands = Vec::new();
            Deck::default().for_each(2, |c| hands.push(Hand::new(c[0], c[1]).unwrap()));
            hands
        };

        let sinks = TaskSinks::new(NUM_TASKS);
        thread::scope(|s| {
            for task_id in 0..NUM_TASKS {
                let (sinks, hands) = (&sinks, &hands);
                s.spawn(move || {
                    for (idx, hand) in hands.iter().enumerate() {
                        let outcome = Outcome {
                            hand: *hand,
                            we_beat: idx % 2 == 0,
                        };

                        if idx % 3 == 0 {
                            sinks.extend(task_id, vec![outcome]);
                        } else {
                            sinks.push(task_id, outcome);
                        }
                    }
                });
            }
        });

        let outcomes = sinks.into_outcomes();
        assert_eq!(outcomes.len(), NUM_TASKS * hands.len());

        // Slots are merged in task order.
        for chunk in outcomes.chunks(hands.len()) {
            let chunk_hands = chunk.iter().map(|o| o.hand).collect::<Vec<_>>();
            assert_eq!(chunk_hands, hands);
        }
    }
}
