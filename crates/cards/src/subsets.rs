// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinations of deck positions.
use std::ops::ControlFlow;

/// The largest subset size supported by the iterators.
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; MAX_K + 1]; 52] {
    let mut t = [[0u32; MAX_K + 1]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");

    if n < k || n == 0 {
        0
    } else {
        NCKS[n - 1][k] as usize
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
pub fn nth_ksubset(mut n: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for at most `count` k-subsets of `0..n` starting
/// from the nth k-subset in lexicographic order.
///
/// Stops as soon as the closure breaks and returns the break value.
pub fn for_each_ksubset<B, F>(n: usize, k: usize, nth: usize, count: usize, mut f: F) -> ControlFlow<B>
where
    F: FnMut(&[usize]) -> ControlFlow<B>,
{
    assert!(1 <= k && k <= MAX_K, "1 <= k <= {MAX_K}");

    if k > n || count == 0 {
        return ControlFlow::Continue(());
    }

    // Algorithm L from TAOCP 4a
    let mut c = [0usize; MAX_K + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut visited = 0;
    loop {
        f(&c[1..=k])?;

        visited += 1;
        if visited == count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 45, 990, 14190, 148995, 1221759, 8145060, 45379620]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(45, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        [1, 1, 0, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(1, k), v));
    }

    #[test]
    fn test_for_each_ksubset_pairs() {
        let mut pairs = HashSet::default();
        let mut counter = 0;
        let _ = for_each_ksubset::<(), _>(45, 2, 0, nck(45, 2), |s| {
            assert!(s[0] < s[1] && s[1] < 45);
            pairs.insert((s[0], s[1]));
            counter += 1;
            ControlFlow::Continue(())
        });

        assert_eq!(counter, 990);
        assert_eq!(pairs.len(), 990);
    }

    #[test]
    fn test_for_each_ksubset_singles() {
        let mut singles = Vec::new();
        let _ = for_each_ksubset::<(), _>(6, 1, 0, 6, |s| {
            singles.push(s[0]);
            ControlFlow::Continue(())
        });

        assert_eq!(singles, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_nth_ksubset_matches_iteration() {
        for k in 1..=4 {
            let mut counter = 0;
            let count = nck(20, k);
            let _ = for_each_ksubset::<(), _>(20, k, 0, count, |s| {
                let ks = nth_ksubset(counter, k);
                assert_eq!(s, &ks[..k]);
                counter += 1;
                ControlFlow::Continue(())
            });

            assert_eq!(count, counter);
        }
    }

    #[test]
    fn test_for_each_ksubset_ranges() {
        // Splitting the subsets in ranges visits each subset once.
        let total = nck(30, 3);
        let mut seen = HashSet::default();
        let mut start = 0;
        while start < total {
            let count = 1000.min(total - start);
            let _ = for_each_ksubset::<(), _>(30, 3, start, count, |s| {
                assert!(seen.insert(s.to_vec()));
                ControlFlow::Continue(())
            });
            start += count;
        }

        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_for_each_ksubset_break() {
        let mut counter = 0;
        let res = for_each_ksubset(10, 2, 0, nck(10, 2), |_| {
            counter += 1;
            if counter == 7 {
                ControlFlow::Break(counter)
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(res, ControlFlow::Break(7));
        assert_eq!(counter, 7);
    }
}
