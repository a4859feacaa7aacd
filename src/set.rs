//! Immutable navigable set over a shared sorted sequence.
//!
//! This module provides [`SortedArraySet`], an ordered set built once from a
//! collection and backed by a sorted, deduplicated contiguous sequence.
//! Membership and navigation are binary searches; derived sets are index
//! windows into the same backing sequence.
//!
//! # Overview
//!
//! `SortedArraySet` keeps one shared backing store per construction call:
//! - Navigation (`lower`, `floor`, `ceiling`, `higher`) and membership
//!   resolve with a single binary search over the current window
//! - Derived sets (`sub_set`, `head_set`, `tail_set`, `descending_set`)
//!   allocate a new descriptor over the same store, never new element
//!   storage
//! - Views of views compose; every simultaneously-live view reads the same
//!   immutable sequence
//!
//! # Time Complexity
//!
//! | Operation        | Cost               |
//! |------------------|--------------------|
//! | `contains`       | O(log n)           |
//! | `lower`/`floor`/`ceiling`/`higher` | O(log n) |
//! | `first`/`last`   | O(1)               |
//! | `sub_set`        | O(log n)           |
//! | `head_set`/`tail_set` | O(log n)      |
//! | `descending_set` | O(1)               |
//! | `len`/`is_empty` | O(1)               |
//! | `iter`           | O(1) + O(n)        |
//!
//! All costs are relative to the current window, not the full store.
//!
//! # Examples
//!
//! ```rust
//! use navset::SortedArraySet;
//!
//! let set = SortedArraySet::from_collection([5, 1, 3, 9, 7]);
//! assert_eq!(set.to_vec(), vec![1, 3, 5, 7, 9]);
//!
//! // Navigation around an absent probe
//! assert_eq!(set.floor(&6), Some(&5));
//! assert_eq!(set.ceiling(&6), Some(&7));
//!
//! // Derived views share storage with the original
//! let sub = set.sub_set(&3, true, &7, false).unwrap();
//! assert_eq!(sub.to_vec(), vec![3, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Bound;
use std::ops::RangeBounds;

use crate::error::OrderedSetError;
use crate::order::Comparator;
use crate::order::ElementOrder;
use crate::store::BackingStore;
use crate::view::RangeView;

/// An immutable ordered set backed by a shared sorted sequence.
///
/// Built once, never mutated. Every derived set is an index window plus a
/// direction flag over the same backing sequence, so derivation is O(1) in
/// element storage and any number of views may be alive at once.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone` and `Ord`. When a
///   caller-supplied order is in effect, elements are sorted, deduplicated,
///   and searched by that order instead of `Ord`.
///
/// # Examples
///
/// ```rust
/// use navset::SortedArraySet;
///
/// let set = SortedArraySet::from_collection(["pear", "apple", "fig", "apple"]);
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&"fig"));
/// assert_eq!(set.first(), Ok(&"apple"));
/// ```
pub struct SortedArraySet<T: Clone + Ord> {
    view: RangeView<T>,
    order: ElementOrder<T>,
}

impl<T: Clone + Ord> Clone for SortedArraySet<T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: Clone + Ord> SortedArraySet<T> {
    /// Creates an empty set with natural order. O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set: SortedArraySet<i32> = SortedArraySet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(ElementOrder::natural())
    }

    /// Creates an empty set with the given order. O(1).
    #[must_use]
    pub fn with_order(order: ElementOrder<T>) -> Self {
        Self {
            view: RangeView::full(BackingStore::empty(order.clone())),
            order,
        }
    }

    /// Builds a set from an arbitrary collection using natural order.
    ///
    /// Sorts and deduplicates the input; order-equivalent duplicates keep
    /// their first occurrence. O(n log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([3, 1, 3, 2]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_collection<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_collection_with(collection, ElementOrder::natural())
    }

    /// Builds a set from an arbitrary collection using the given order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::{ElementOrder, SortedArraySet};
    ///
    /// let reversed = SortedArraySet::from_collection_with(
    ///     [1, 3, 2],
    ///     ElementOrder::by(|a: &i32, b: &i32| b.cmp(a)),
    /// );
    /// assert_eq!(reversed.to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn from_collection_with<I>(collection: I, order: ElementOrder<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            view: RangeView::full(BackingStore::from_collection(collection, order.clone())),
            order,
        }
    }

    /// Number of elements in the current view. O(1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Returns `true` if the current view contains no elements. O(1).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// The order in effect for this view, direction included.
    ///
    /// A descending view reports the reversed order, so its own navigation
    /// results are consistent with what this order says.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> &ElementOrder<T> {
        &self.order
    }

    /// The caller-supplied comparator, or `None` for natural order.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> Option<&Comparator<T>> {
        self.order.comparator()
    }

    /// Returns `true` if an order-equivalent element exists in the current
    /// view. O(log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// assert!(set.contains(&5));
    /// assert!(!set.contains(&4));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.index_search(element).is_ok()
    }

    /// The element at logical position 0 of the view.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::EmptyCollection`] if the view has no elements.
    pub fn first(&self) -> Result<&T, OrderedSetError> {
        self.view.get(0).ok_or(OrderedSetError::EmptyCollection)
    }

    /// The element at the last logical position of the view.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::EmptyCollection`] if the view has no elements.
    pub fn last(&self) -> Result<&T, OrderedSetError> {
        self.len()
            .checked_sub(1)
            .and_then(|index| self.view.get(index))
            .ok_or(OrderedSetError::EmptyCollection)
    }

    /// The largest element strictly less than `element` under the view's
    /// order, or `None` if no such element exists. O(log n).
    ///
    /// Total over the whole element domain: `element` itself need not be a
    /// member.
    #[must_use]
    pub fn lower(&self, element: &T) -> Option<&T> {
        self.element_at(self.lower_index(element))
    }

    /// The largest element less than or equal to `element` under the view's
    /// order, or `None` if no such element exists. O(log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// assert_eq!(set.floor(&6), Some(&5));
    /// assert_eq!(set.floor(&5), Some(&5));
    /// assert_eq!(set.floor(&0), None);
    /// ```
    #[must_use]
    pub fn floor(&self, element: &T) -> Option<&T> {
        self.element_at(self.floor_index(element))
    }

    /// The smallest element greater than or equal to `element` under the
    /// view's order, or `None` if no such element exists. O(log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// assert_eq!(set.ceiling(&6), Some(&7));
    /// assert_eq!(set.ceiling(&7), Some(&7));
    /// assert_eq!(set.ceiling(&10), None);
    /// ```
    #[must_use]
    pub fn ceiling(&self, element: &T) -> Option<&T> {
        self.element_at(self.ceiling_index(element))
    }

    /// The smallest element strictly greater than `element` under the view's
    /// order, or `None` if no such element exists. O(log n).
    #[must_use]
    pub fn higher(&self, element: &T) -> Option<&T> {
        self.element_at(self.higher_index(element))
    }

    /// Always fails: the set is immutable after construction.
    ///
    /// This is a deliberate capability restriction carried on the surface
    /// for contract completeness, not an oversight.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::Unsupported`], unconditionally.
    pub fn poll_first(&self) -> Result<T, OrderedSetError> {
        Err(OrderedSetError::Unsupported)
    }

    /// Always fails: the set is immutable after construction.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::Unsupported`], unconditionally.
    pub fn poll_last(&self) -> Result<T, OrderedSetError> {
        Err(OrderedSetError::Unsupported)
    }

    /// Derives the sub-set of elements between `from` and `to` under the
    /// view's order, with per-bound inclusivity. O(log n); shares storage
    /// with the receiver unless the result is empty.
    ///
    /// An empty result carries a fresh empty store rather than a window into
    /// the original, so it pins no element storage alive.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::InvalidRange`] if `from` orders after `to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// let sub = set.sub_set(&3, true, &7, false).unwrap();
    /// assert_eq!(sub.to_vec(), vec![3, 5]);
    ///
    /// assert!(set.sub_set(&7, true, &3, true).is_err());
    /// ```
    pub fn sub_set(
        &self,
        from: &T,
        from_inclusive: bool,
        to: &T,
        to_inclusive: bool,
    ) -> Result<Self, OrderedSetError> {
        if self.order.compare(from, to) == Ordering::Greater {
            return Err(OrderedSetError::InvalidRange);
        }
        let from_index = if from_inclusive {
            self.ceiling_index(from)
        } else {
            self.higher_index(from)
        };
        let to_index = if to_inclusive {
            self.floor_index(to)
        } else {
            self.lower_index(to)
        };
        match (from_index, to_index) {
            (Some(from_index), Some(to_index)) if from_index <= to_index => Ok(Self {
                view: self.view.slice(from_index, to_index + 1),
                order: self.order.clone(),
            }),
            _ => Ok(self.empty_like()),
        }
    }

    /// Derives the prefix of elements up to `to` under the view's order.
    ///
    /// Never fails: an empty receiver or a degenerate range yields the empty
    /// set instead of an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// assert_eq!(set.head_set(&5, false).to_vec(), vec![1, 3]);
    /// assert_eq!(set.head_set(&5, true).to_vec(), vec![1, 3, 5]);
    /// assert!(set.head_set(&0, true).is_empty());
    /// ```
    #[must_use]
    pub fn head_set(&self, to: &T, inclusive: bool) -> Self {
        let Ok(first) = self.first() else {
            return self.empty_like();
        };
        self.sub_set(first, true, to, inclusive)
            .unwrap_or_else(|_| self.empty_like())
    }

    /// Derives the suffix of elements from `from` under the view's order.
    ///
    /// Never fails: an empty receiver or a degenerate range yields the empty
    /// set instead of an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// assert_eq!(set.tail_set(&5, true).to_vec(), vec![5, 7, 9]);
    /// assert_eq!(set.tail_set(&5, false).to_vec(), vec![7, 9]);
    /// assert!(set.tail_set(&10, true).is_empty());
    /// ```
    #[must_use]
    pub fn tail_set(&self, from: &T, inclusive: bool) -> Self {
        let Ok(last) = self.last() else {
            return self.empty_like();
        };
        self.sub_set(from, inclusive, last, true)
            .unwrap_or_else(|_| self.empty_like())
    }

    /// Derives a set over the same window traversed in the opposite
    /// direction, carrying the reversed order. O(1).
    ///
    /// An involution: reversing twice yields a set that traverses like the
    /// original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// let descending = set.descending_set();
    /// assert_eq!(descending.to_vec(), vec![9, 7, 5, 3, 1]);
    /// assert_eq!(descending.first(), Ok(&9));
    /// assert_eq!(descending.floor(&6), Some(&7));
    /// ```
    #[must_use]
    pub fn descending_set(&self) -> Self {
        Self {
            view: self.view.reversed(),
            order: self.order.reversed(),
        }
    }

    /// Derives a sub-set from standard range syntax, mapping each bound
    /// combination onto `sub_set`, `head_set`, or `tail_set`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::InvalidRange`] if both bounds are present and the
    /// start orders after the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::SortedArraySet;
    ///
    /// let set = SortedArraySet::from_collection([1, 3, 5, 7, 9]);
    /// assert_eq!(set.range(3..=7).unwrap().to_vec(), vec![3, 5, 7]);
    /// assert_eq!(set.range(..5).unwrap().to_vec(), vec![1, 3]);
    /// assert_eq!(set.range(5..).unwrap().to_vec(), vec![5, 7, 9]);
    /// ```
    pub fn range<R>(&self, range: R) -> Result<Self, OrderedSetError>
    where
        R: RangeBounds<T>,
    {
        let derived = match (range.start_bound(), range.end_bound()) {
            (Bound::Unbounded, Bound::Unbounded) => self.clone(),
            (Bound::Unbounded, Bound::Included(to)) => self.head_set(to, true),
            (Bound::Unbounded, Bound::Excluded(to)) => self.head_set(to, false),
            (Bound::Included(from), Bound::Unbounded) => self.tail_set(from, true),
            (Bound::Excluded(from), Bound::Unbounded) => self.tail_set(from, false),
            (Bound::Included(from), Bound::Included(to)) => self.sub_set(from, true, to, true)?,
            (Bound::Included(from), Bound::Excluded(to)) => self.sub_set(from, true, to, false)?,
            (Bound::Excluded(from), Bound::Included(to)) => self.sub_set(from, false, to, true)?,
            (Bound::Excluded(from), Bound::Excluded(to)) => self.sub_set(from, false, to, false)?,
        };
        Ok(derived)
    }

    /// Returns an iterator over the view in its logical order.
    ///
    /// Lazy, restartable (a fresh iterator per call), read-only.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedArraySetIterator<'_, T> {
        SortedArraySetIterator {
            inner: if self.view.is_ascending() {
                IteratorInner::Forward(self.view.as_slice().iter())
            } else {
                IteratorInner::Backward(self.view.as_slice().iter().rev())
            },
        }
    }

    /// Returns an iterator over the view in the opposite of its logical
    /// order. Equivalent to `descending_set().iter()` without the descriptor
    /// allocation.
    #[inline]
    #[must_use]
    pub fn descending_iter(&self) -> SortedArraySetIterator<'_, T> {
        SortedArraySetIterator {
            inner: if self.view.is_ascending() {
                IteratorInner::Backward(self.view.as_slice().iter().rev())
            } else {
                IteratorInner::Forward(self.view.as_slice().iter())
            },
        }
    }

    /// Clones the view's elements into a `Vec` in logical order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// The view's window in backing (store-ascending) order, regardless of
    /// the view's direction. Zero-copy.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.view.as_slice()
    }

    /// An empty set carrying this view's order.
    fn empty_like(&self) -> Self {
        Self::with_order(self.order.clone())
    }

    /// Single binary search in the view's logical coordinates.
    ///
    /// `Ok` is the logical index of the order-equivalent match; `Err` is the
    /// insertion point that would keep the logical sequence ascending.
    fn index_search(&self, probe: &T) -> Result<usize, usize> {
        let window = self.view.as_slice();
        let base = self.view.store_order();
        let searched = window.binary_search_by(|element| base.compare(element, probe));
        if self.view.is_ascending() {
            searched
        } else {
            match searched {
                Ok(index) => Ok(window.len() - index - 1),
                Err(insertion) => Err(window.len() - insertion),
            }
        }
    }

    fn ceiling_index(&self, element: &T) -> Option<usize> {
        match self.index_search(element) {
            Ok(index) | Err(index) => Some(index),
        }
    }

    fn floor_index(&self, element: &T) -> Option<usize> {
        match self.index_search(element) {
            Ok(index) => Some(index),
            Err(insertion) => insertion.checked_sub(1),
        }
    }

    fn higher_index(&self, element: &T) -> Option<usize> {
        match self.index_search(element) {
            Ok(index) => Some(index + 1),
            Err(insertion) => Some(insertion),
        }
    }

    fn lower_index(&self, element: &T) -> Option<usize> {
        match self.index_search(element) {
            Ok(index) | Err(index) => index.checked_sub(1),
        }
    }

    /// Resolves an optional logical index to an element; indices at or past
    /// the window length resolve to `None`.
    fn element_at(&self, index: Option<usize>) -> Option<&T> {
        index.and_then(|index| self.view.get(index))
    }
}

impl<T: Clone + Ord> Default for SortedArraySet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for SortedArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_collection(iter)
    }
}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for SortedArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Ord> PartialEq for SortedArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Clone + Ord> Eq for SortedArraySet<T> {}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Iterator over references to elements of a [`SortedArraySet`] in the
/// view's logical order.
pub struct SortedArraySetIterator<'a, T> {
    inner: IteratorInner<'a, T>,
}

enum IteratorInner<'a, T> {
    Forward(std::slice::Iter<'a, T>),
    Backward(std::iter::Rev<std::slice::Iter<'a, T>>),
}

impl<'a, T> Iterator for SortedArraySetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IteratorInner::Forward(iter) => iter.next(),
            IteratorInner::Backward(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IteratorInner::Forward(iter) => iter.size_hint(),
            IteratorInner::Backward(iter) => iter.size_hint(),
        }
    }
}

impl<T> DoubleEndedIterator for SortedArraySetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IteratorInner::Forward(iter) => iter.next_back(),
            IteratorInner::Backward(iter) => iter.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for SortedArraySetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        match &self.inner {
            IteratorInner::Forward(iter) => iter.len(),
            IteratorInner::Backward(iter) => iter.len(),
        }
    }
}

impl<T> FusedIterator for SortedArraySetIterator<'_, T> {}

/// Owning iterator over cloned elements of a [`SortedArraySet`] in the
/// view's logical order.
pub struct SortedArraySetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedArraySetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedArraySetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedArraySetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedArraySetIntoIterator<T> {}

impl<T: Clone + Ord> IntoIterator for SortedArraySet<T> {
    type Item = T;
    type IntoIter = SortedArraySetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedArraySetIntoIterator {
            inner: self.to_vec().into_iter(),
        }
    }
}

impl<'a, T: Clone + Ord> IntoIterator for &'a SortedArraySet<T> {
    type Item = &'a T;
    type IntoIter = SortedArraySetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Capability Assertions
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedArraySet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedArraySet<String>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SortedArraySet<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SortedArraySet<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
