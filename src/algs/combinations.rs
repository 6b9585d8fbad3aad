//! Order-preserving k-subsets of a sequence.
//!
//! Subsets are produced in lexicographic order of positions: each one picks
//! an element and continues strictly after it, so a set of elements appears
//! exactly once and keeps the relative order of the input.

use crate::strata_error::StrataError;

/// Lazy iterator over all `C(n, k)` subsets of `items`.
///
/// Single-pass: once exhausted it stays exhausted.
#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

/// All size-`k` subsets of `items`, each in input order.
///
/// Fails unless `1 <= k <= items.len()`.
pub fn combinations<T>(items: &[T], k: usize) -> Result<Combinations<'_, T>, StrataError> {
    let n = items.len();
    if k == 0 || k > n {
        return Err(StrataError::InvalidCombinationSize { k, n });
    }
    Ok(Combinations {
        items,
        indices: (0..k).collect(),
        started: false,
        done: false,
    })
}

impl<T> Combinations<'_, T> {
    /// Advance `indices` to the next combination; false when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && !self.advance() {
            self.done = true;
            return None;
        }
        self.started = true;
        let items = self.items;
        Some(self.indices.iter().map(|&i| &items[i]).collect())
    }
}

impl<T> std::iter::FusedIterator for Combinations<'_, T> {}

/// `C(n, k)`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: usize = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_choose_two_in_order() {
        let names = ["A", "B", "C"];
        let got: Vec<Vec<&str>> = combinations(&names, 2)
            .unwrap()
            .map(|c| c.into_iter().copied().collect())
            .collect();
        assert_eq!(got, vec![vec!["A", "B"], vec!["A", "C"], vec!["B", "C"]]);
    }

    #[test]
    fn full_size_yields_input_once() {
        let names = ["A", "B", "C", "D"];
        let mut it = combinations(&names, 4).unwrap();
        assert_eq!(it.next().unwrap(), vec![&"A", &"B", &"C", &"D"]);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn singletons() {
        let names = ["A", "B", "C"];
        assert_eq!(combinations(&names, 1).unwrap().count(), 3);
    }

    #[test]
    fn out_of_range_sizes_fail() {
        let names = ["A", "B"];
        assert_eq!(
            combinations(&names, 0).unwrap_err(),
            StrataError::InvalidCombinationSize { k: 0, n: 2 }
        );
        assert!(combinations(&names, 3).is_err());
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(10, 0), Some(1));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(40, 20), Some(137_846_528_820));
    }
}
