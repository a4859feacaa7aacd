//! Capability trait for navigable ordered sets.
//!
//! [`OrderedSet`] is the full navigation contract implemented by
//! [`SortedArraySet`](crate::SortedArraySet): membership, endpoint access,
//! predecessor/successor queries, derivation of sub-ranges and reversed
//! views, and the permanently unsupported mutating calls. The two-argument
//! legacy range forms are trait default methods expressed through the
//! four-argument primitive.
//!
//! # Contract
//!
//! Implementations must expose a strictly ascending logical sequence under
//! their own order, and every operation must be read-only: deriving a view
//! or iterating must never change what any other live view observes.

use crate::error::OrderedSetError;

/// A read-only, navigable set of distinct elements under a total order.
///
/// # Examples
///
/// ```rust
/// use navset::{OrderedSet, SortedArraySet};
///
/// fn endpoints<S: OrderedSet<i32>>(set: &S) -> Option<(i32, i32)> {
///     match (set.first(), set.last()) {
///         (Ok(first), Ok(last)) => Some((*first, *last)),
///         _ => None,
///     }
/// }
///
/// let set = SortedArraySet::from_collection([2, 8, 5]);
/// assert_eq!(endpoints(&set), Some((2, 8)));
/// ```
pub trait OrderedSet<T>: Sized {
    /// Borrowing iterator over the set's logical sequence.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Number of elements in the set's current view.
    fn len(&self) -> usize;

    /// Returns `true` if the current view has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an order-equivalent element is present.
    fn contains(&self, element: &T) -> bool;

    /// The smallest element of the view under its order.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::EmptyCollection`] if the view has no elements.
    fn first(&self) -> Result<&T, OrderedSetError>;

    /// The largest element of the view under its order.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::EmptyCollection`] if the view has no elements.
    fn last(&self) -> Result<&T, OrderedSetError>;

    /// The largest element strictly less than `element`, if any.
    fn lower(&self, element: &T) -> Option<&T>;

    /// The largest element less than or equal to `element`, if any.
    fn floor(&self, element: &T) -> Option<&T>;

    /// The smallest element greater than or equal to `element`, if any.
    fn ceiling(&self, element: &T) -> Option<&T>;

    /// The smallest element strictly greater than `element`, if any.
    fn higher(&self, element: &T) -> Option<&T>;

    /// Always fails; the set never mutates.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::Unsupported`], unconditionally.
    fn poll_first(&self) -> Result<T, OrderedSetError>;

    /// Always fails; the set never mutates.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::Unsupported`], unconditionally.
    fn poll_last(&self) -> Result<T, OrderedSetError>;

    /// Iterator over the view in its logical order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterator over the view in the opposite of its logical order.
    fn descending_iter(&self) -> Self::Iter<'_>;

    /// Derives the sub-set between `from` and `to` with per-bound
    /// inclusivity.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::InvalidRange`] if `from` orders after `to`.
    fn sub_set(
        &self,
        from: &T,
        from_inclusive: bool,
        to: &T,
        to_inclusive: bool,
    ) -> Result<Self, OrderedSetError>;

    /// Derives the prefix up to `to`; degenerate input yields an empty set.
    fn head_set(&self, to: &T, inclusive: bool) -> Self;

    /// Derives the suffix from `from`; degenerate input yields an empty set.
    fn tail_set(&self, from: &T, inclusive: bool) -> Self;

    /// Derives the same view traversed in the opposite direction.
    fn descending_set(&self) -> Self;

    /// Legacy two-argument sub-set: inclusive `from`, exclusive `to`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::InvalidRange`] if `from` orders after `to`.
    #[inline]
    fn sub_set_half_open(&self, from: &T, to: &T) -> Result<Self, OrderedSetError> {
        self.sub_set(from, true, to, false)
    }

    /// Legacy one-argument head-set: exclusive bound.
    #[inline]
    fn head_set_exclusive(&self, to: &T) -> Self {
        self.head_set(to, false)
    }

    /// Legacy one-argument tail-set: inclusive bound.
    #[inline]
    fn tail_set_inclusive(&self, from: &T) -> Self {
        self.tail_set(from, true)
    }
}

impl<T: Clone + Ord> OrderedSet<T> for crate::SortedArraySet<T> {
    type Iter<'a>
        = crate::SortedArraySetIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn first(&self) -> Result<&T, OrderedSetError> {
        Self::first(self)
    }

    #[inline]
    fn last(&self) -> Result<&T, OrderedSetError> {
        Self::last(self)
    }

    #[inline]
    fn lower(&self, element: &T) -> Option<&T> {
        Self::lower(self, element)
    }

    #[inline]
    fn floor(&self, element: &T) -> Option<&T> {
        Self::floor(self, element)
    }

    #[inline]
    fn ceiling(&self, element: &T) -> Option<&T> {
        Self::ceiling(self, element)
    }

    #[inline]
    fn higher(&self, element: &T) -> Option<&T> {
        Self::higher(self, element)
    }

    #[inline]
    fn poll_first(&self) -> Result<T, OrderedSetError> {
        Self::poll_first(self)
    }

    #[inline]
    fn poll_last(&self) -> Result<T, OrderedSetError> {
        Self::poll_last(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    #[inline]
    fn descending_iter(&self) -> Self::Iter<'_> {
        Self::descending_iter(self)
    }

    #[inline]
    fn sub_set(
        &self,
        from: &T,
        from_inclusive: bool,
        to: &T,
        to_inclusive: bool,
    ) -> Result<Self, OrderedSetError> {
        Self::sub_set(self, from, from_inclusive, to, to_inclusive)
    }

    #[inline]
    fn head_set(&self, to: &T, inclusive: bool) -> Self {
        Self::head_set(self, to, inclusive)
    }

    #[inline]
    fn tail_set(&self, from: &T, inclusive: bool) -> Self {
        Self::tail_set(self, from, inclusive)
    }

    #[inline]
    fn descending_set(&self) -> Self {
        Self::descending_set(self)
    }
}
