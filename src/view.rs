//! Index-window descriptors over a shared backing store.
//!
//! A [`RangeView`] is the mechanism behind every derived set: a half-open
//! window `[from, to)` of backing indices plus a direction flag. Deriving a
//! sub-range, a prefix, a suffix, or a reversed traversal is window
//! arithmetic on the descriptor; the elements themselves are never copied.
//!
//! Logical position `i` maps to backing index `from + i` when ascending and
//! `to - i - 1` when descending. Window arithmetic composes, so views of
//! views keep addressing the original store directly.

use crate::ReferenceCounter;
use crate::order::ElementOrder;
use crate::store::BackingStore;

/// A contiguous index window into a [`BackingStore`], read in one direction.
///
/// Invariant: `from <= to <= store.len()`.
pub(crate) struct RangeView<T> {
    store: ReferenceCounter<BackingStore<T>>,
    from: usize,
    to: usize,
    ascending: bool,
}

impl<T> Clone for RangeView<T> {
    fn clone(&self) -> Self {
        Self {
            store: ReferenceCounter::clone(&self.store),
            from: self.from,
            to: self.to,
            ascending: self.ascending,
        }
    }
}

impl<T: Clone + Ord> RangeView<T> {
    /// The full ascending window over a store.
    pub(crate) fn full(store: ReferenceCounter<BackingStore<T>>) -> Self {
        let to = store.len();
        Self {
            store,
            from: 0,
            to,
            ascending: true,
        }
    }

    /// Number of elements visible through the window. O(1).
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.to - self.from
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub(crate) const fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The store's ascending order; the view's direction is not applied.
    #[inline]
    pub(crate) fn store_order(&self) -> &ElementOrder<T> {
        self.store.order()
    }

    /// Positional access in the view's logical coordinates.
    ///
    /// Returns `None` past the window. Derivation arithmetic keeps all
    /// internal callers in bounds; the public surface never observes `None`
    /// for a valid logical index.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let backing = if self.ascending {
            self.from + index
        } else {
            self.to - index - 1
        };
        self.store.as_slice().get(backing)
    }

    /// The window's elements in backing (store-ascending) order, regardless
    /// of the view's direction. Zero-copy.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.store.as_slice()[self.from..self.to]
    }

    /// Derives a sub-window in this view's logical coordinates, preserving
    /// direction. O(1).
    ///
    /// `logical_from <= logical_to <= len()` must hold.
    pub(crate) fn slice(&self, logical_from: usize, logical_to: usize) -> Self {
        debug_assert!(
            logical_from <= logical_to && logical_to <= self.len(),
            "logical window [{logical_from}, {logical_to}) exceeds view of length {}",
            self.len()
        );
        let (from, to) = if self.ascending {
            (self.from + logical_from, self.from + logical_to)
        } else {
            (self.to - logical_to, self.to - logical_from)
        };
        Self {
            store: ReferenceCounter::clone(&self.store),
            from,
            to,
            ascending: self.ascending,
        }
    }

    /// The same window read in the opposite direction. O(1).
    pub(crate) fn reversed(&self) -> Self {
        Self {
            store: ReferenceCounter::clone(&self.store),
            from: self.from,
            to: self.to,
            ascending: !self.ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn view_over(elements: Vec<i32>) -> RangeView<i32> {
        RangeView::full(BackingStore::from_collection(
            elements,
            ElementOrder::natural(),
        ))
    }

    #[rstest]
    fn test_full_view_spans_store() {
        let view = view_over(vec![1, 2, 3, 4, 5]);
        assert_eq!(view.len(), 5);
        assert!(!view.is_empty());
        assert!(view.is_ascending());
    }

    #[rstest]
    #[case(0, Some(1))]
    #[case(2, Some(3))]
    #[case(4, Some(5))]
    #[case(5, None)]
    #[case(100, None)]
    fn test_ascending_positional_access(#[case] index: usize, #[case] expected: Option<i32>) {
        let view = view_over(vec![1, 2, 3, 4, 5]);
        assert_eq!(view.get(index).copied(), expected);
    }

    #[rstest]
    #[case(0, Some(5))]
    #[case(2, Some(3))]
    #[case(4, Some(1))]
    #[case(5, None)]
    fn test_descending_positional_access(#[case] index: usize, #[case] expected: Option<i32>) {
        let view = view_over(vec![1, 2, 3, 4, 5]).reversed();
        assert_eq!(view.get(index).copied(), expected);
    }

    #[rstest]
    fn test_slice_narrows_window() {
        let view = view_over(vec![1, 2, 3, 4, 5]);
        let middle = view.slice(1, 4);
        assert_eq!(middle.len(), 3);
        assert_eq!(middle.get(0), Some(&2));
        assert_eq!(middle.get(2), Some(&4));
        assert_eq!(middle.get(3), None);
    }

    #[rstest]
    fn test_slice_of_descending_view_preserves_direction() {
        // Logical [5, 4, 3, 2, 1]; logical window [1, 4) is [4, 3, 2].
        let view = view_over(vec![1, 2, 3, 4, 5]).reversed();
        let middle = view.slice(1, 4);
        assert_eq!(middle.len(), 3);
        assert!(!middle.is_ascending());
        assert_eq!(middle.get(0), Some(&4));
        assert_eq!(middle.get(2), Some(&2));
    }

    #[rstest]
    fn test_nested_slices_compose() {
        let view = view_over((1..=10).collect());
        let outer = view.slice(2, 9); // [3..=9]
        let inner = outer.slice(1, 5); // [4..=7]
        assert_eq!(inner.len(), 4);
        assert_eq!(inner.get(0), Some(&4));
        assert_eq!(inner.get(3), Some(&7));
        assert_eq!(inner.get(4), None);
    }

    #[rstest]
    fn test_reversal_is_involution() {
        let view = view_over(vec![1, 2, 3]);
        let twice = view.reversed().reversed();
        assert!(twice.is_ascending());
        assert_eq!(twice.get(0), Some(&1));
    }

    #[rstest]
    fn test_as_slice_ignores_direction() {
        let view = view_over(vec![1, 2, 3]).reversed();
        assert_eq!(view.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_empty_slice_of_view() {
        let view = view_over(vec![1, 2, 3]);
        let empty = view.slice(1, 1);
        assert!(empty.is_empty());
        assert_eq!(empty.get(0), None);
    }

    #[rstest]
    fn test_views_share_one_store() {
        let view = view_over(vec![1, 2, 3, 4]);
        let derived = view.slice(1, 3).reversed();
        assert_eq!(ReferenceCounter::strong_count(&view.store), 2);
        assert_eq!(derived.get(0), Some(&3));
    }
}
