//! The shared backing sequence underlying all views.
//!
//! A [`BackingStore`] is written exactly once, at construction, and is
//! thereafter read-only for the rest of its lifetime. Every set and every
//! derived view holds a reference-counted handle to one store; derivation
//! never copies elements.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::ReferenceCounter;
use crate::order::ElementOrder;

/// Number of elements stored inline before spilling to the heap.
pub(crate) const INLINE_CAPACITY: usize = 8;

/// An immutable, strictly ascending, duplicate-free sequence of elements
/// plus the order it was built with.
///
/// The store's order is the ascending order of the physical sequence;
/// direction belongs to views, never to the store.
pub(crate) struct BackingStore<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
    order: ElementOrder<T>,
}

impl<T: Clone + Ord> BackingStore<T> {
    /// A store with no elements. O(1).
    pub(crate) fn empty(order: ElementOrder<T>) -> ReferenceCounter<Self> {
        ReferenceCounter::new(Self {
            elements: SmallVec::new(),
            order,
        })
    }

    /// Builds the ascending, duplicate-free sequence from an arbitrary
    /// collection. O(n log n).
    ///
    /// Order-equivalent duplicates keep their first occurrence: the sort is
    /// stable, and deduplication drops later members of each equivalence run.
    pub(crate) fn from_collection<I>(collection: I, order: ElementOrder<T>) -> ReferenceCounter<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: SmallVec<[T; INLINE_CAPACITY]> = collection.into_iter().collect();
        elements.sort_by(|left, right| order.compare(left, right));
        elements.dedup_by(|left, right| order.compare(left, right) == Ordering::Equal);

        #[cfg(debug_assertions)]
        debug_assert!(
            is_strictly_ascending(&elements, &order),
            "backing sequence must be strictly ascending and duplicate-free"
        );

        ReferenceCounter::new(Self { elements, order })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// The order the sequence ascends in.
    #[inline]
    pub(crate) const fn order(&self) -> &ElementOrder<T> {
        &self.order
    }
}

#[cfg(debug_assertions)]
fn is_strictly_ascending<T: Ord>(elements: &[T], order: &ElementOrder<T>) -> bool {
    elements
        .windows(2)
        .all(|window| order.compare(&window[0], &window[1]) == Ordering::Less)
}
