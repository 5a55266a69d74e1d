//! Fixed-size subsets of a slice in lexicographic index order.
//!
//! The iterator keeps a stack of `k` ascending indices and advances the
//! rightmost index that still has room, resetting everything to its right.
//! Chosen elements always keep their relative order from the input.

/// Iterator over every `k`-element subset of a slice.
///
/// Created by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

/// Enumerate the `C(n, k)` subsets of `items` of size `k`.
///
/// Subsets are yielded in lexicographic order of their indices, so
/// `combinations(&[a, b, c], 2)` yields `[a, b]`, `[a, c]`, `[b, c]`. A size
/// of zero, or one larger than `items.len()`, yields nothing.
///
/// # Examples
/// ```
/// use feast_planner::combinations;
///
/// let pairs: Vec<Vec<&char>> = combinations(&['a', 'b', 'c'], 2).collect();
/// assert_eq!(pairs, vec![vec![&'a', &'b'], vec![&'a', &'c'], vec![&'b', &'c']]);
/// assert_eq!(combinations(&['a'], 2).count(), 0);
/// ```
#[must_use]
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        exhausted: k == 0 || k > items.len(),
    }
}

impl<T> Combinations<'_, T> {
    /// Move `indices` to the next subset, or mark the iterator exhausted.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        // Slot `i` can hold at most `n - k + i`.
        let Some(pivot) = self
            .indices
            .iter()
            .enumerate()
            .rposition(|(slot, &index)| index < n - k + slot)
        else {
            self.exhausted = true;
            return;
        };
        let mut next = 0;
        for (slot, index) in self.indices.iter_mut().enumerate().skip(pivot) {
            if slot == pivot {
                *index += 1;
            } else {
                *index = next;
            }
            next = *index + 1;
        }
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let items = self.items;
        let current = self
            .indices
            .iter()
            .filter_map(|&index| items.get(index))
            .collect();
        self.advance();
        Some(current)
    }
}
