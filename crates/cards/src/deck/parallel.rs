// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel subsets iteration.
use std::{
    ops::ControlFlow,
    panic,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use super::{Card, Deck};
use crate::subsets::{self, MAX_K};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards subset of the
    /// deck from `num_tasks` scoped threads.
    ///
    /// The subsets are split in `num_tasks` contiguous ranges, the closure takes
    /// an usize that is the task identifier (0..num_tasks) and a slice of cards
    /// of length k. When the closure fails all tasks stop and the error of the
    /// lowest task that failed is returned.
    ///
    /// Panics if k is not 1 <= k <= 7 or num_tasks is zero.
    pub fn par_try_for_each<E, F>(&self, num_tasks: usize, k: usize, f: F) -> Result<(), E>
    where
        F: Fn(usize, &[Card]) -> Result<(), E> + Send + Sync,
        E: Send,
    {
        assert!(1 <= k && k <= MAX_K, "1 <= k <= {MAX_K}");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return Ok(());
        }

        let num_subsets = subsets::nck(n, k);
        let subsets_per_task = num_subsets.div_ceil(num_tasks);
        let failed = AtomicBool::new(false);

        let results = thread::scope(|s| {
            let handles = (0..num_tasks)
                .map(|task_id| task_id * subsets_per_task)
                .take_while(|&start| start < num_subsets)
                .enumerate()
                .map(|(task_id, start)| {
                    let count = subsets_per_task.min(num_subsets - start);
                    let (f, failed) = (&f, &failed);
                    s.spawn(move || {
                        let mut h = [Card::default(); MAX_K];
                        subsets::for_each_ksubset(n, k, start, count, |p| {
                            if failed.load(Ordering::Relaxed) {
                                return ControlFlow::Break(None);
                            }

                            for (idx, &pos) in p.iter().enumerate() {
                                h[idx] = self.cards[pos];
                            }

                            match f(task_id, &h[..k]) {
                                Ok(()) => ControlFlow::Continue(()),
                                Err(e) => {
                                    failed.store(true, Ordering::Relaxed);
                                    ControlFlow::Break(Some(e))
                                }
                            }
                        })
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        results
            .into_iter()
            .find_map(|r| match r {
                ControlFlow::Break(Some(e)) => Some(e),
                _ => None,
            })
            .map_or(Ok(()), Err)
    }
}
