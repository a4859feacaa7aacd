//! Total-order selection for ordered sets.
//!
//! A set's ordering is fixed at construction time: either the element type's
//! natural [`Ord`] order, or a caller-supplied comparison function. Both are
//! resolved into an [`ElementOrder`], which every view of the set carries.
//! Descending views carry the same selector with its direction flipped, so
//! their own navigation and `first`/`last` stay self-consistent.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use navset::ElementOrder;
//!
//! let natural: ElementOrder<i32> = ElementOrder::natural();
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! let by_magnitude = ElementOrder::by(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
//! assert_eq!(by_magnitude.compare(&-3, &2), Ordering::Greater);
//!
//! let reversed = natural.reversed();
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::ReferenceCounter;

/// A shared, caller-supplied total order over `T`.
///
/// The function must implement a total order consistent with itself: for the
/// set to behave correctly it must be antisymmetric, transitive, and total.
/// It is a logic error for the function to order two values differently
/// across calls.
#[cfg(feature = "arc")]
pub type Comparator<T> = std::sync::Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A shared, caller-supplied total order over `T`.
///
/// The function must implement a total order consistent with itself: for the
/// set to behave correctly it must be antisymmetric, transitive, and total.
/// It is a logic error for the function to order two values differently
/// across calls.
#[cfg(not(feature = "arc"))]
pub type Comparator<T> = std::rc::Rc<dyn Fn(&T, &T) -> Ordering>;

/// How two elements are compared before direction is applied.
enum OrderKind<T> {
    Natural,
    By(Comparator<T>),
}

impl<T> Clone for OrderKind<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural => Self::Natural,
            Self::By(comparator) => Self::By(ReferenceCounter::clone(comparator)),
        }
    }
}

/// The order in effect for one set view.
///
/// Combines an order kind (natural or caller-supplied) with a direction
/// flag. Reversal is an involution: `order.reversed().reversed()` compares
/// exactly like `order`.
pub struct ElementOrder<T> {
    kind: OrderKind<T>,
    reversed: bool,
}

impl<T> Clone for ElementOrder<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            reversed: self.reversed,
        }
    }
}

impl<T: Ord> ElementOrder<T> {
    /// The natural order of `T`, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::ElementOrder;
    ///
    /// let order: ElementOrder<i32> = ElementOrder::natural();
    /// assert!(order.comparator().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn natural() -> Self {
        Self {
            kind: OrderKind::Natural,
            reversed: false,
        }
    }

    /// A caller-supplied total order, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use navset::ElementOrder;
    ///
    /// let order = ElementOrder::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// assert_eq!(order.compare(&"ab", &"c"), Ordering::Greater);
    /// ```
    #[cfg(feature = "arc")]
    #[must_use]
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            kind: OrderKind::By(ReferenceCounter::new(compare)),
            reversed: false,
        }
    }

    /// A caller-supplied total order, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use navset::ElementOrder;
    ///
    /// let order = ElementOrder::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// assert_eq!(order.compare(&"ab", &"c"), Ordering::Greater);
    /// ```
    #[cfg(not(feature = "arc"))]
    #[must_use]
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            kind: OrderKind::By(ReferenceCounter::new(compare)),
            reversed: false,
        }
    }

    /// The same order with its direction flipped.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            reversed: !self.reversed,
        }
    }

    /// Returns `true` if this order runs against its base direction.
    #[inline]
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns `true` if this order resolves through [`Ord`] rather than a
    /// caller-supplied comparator, regardless of direction.
    #[inline]
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        matches!(self.kind, OrderKind::Natural)
    }

    /// The caller-supplied comparator, if one is in effect.
    ///
    /// Absent means natural order. The direction flag is not represented
    /// here; use [`ElementOrder::is_reversed`] for that.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> Option<&Comparator<T>> {
        match &self.kind {
            OrderKind::Natural => None,
            OrderKind::By(comparator) => Some(comparator),
        }
    }

    /// Compares two elements under this order, direction included.
    #[inline]
    #[must_use]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        let ordering = match &self.kind {
            OrderKind::Natural => left.cmp(right),
            OrderKind::By(comparator) => comparator(left, right),
        };
        if self.reversed {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl<T: Ord> Default for ElementOrder<T> {
    #[inline]
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> fmt::Debug for ElementOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            OrderKind::Natural => "Natural",
            OrderKind::By(_) => "By",
        };
        formatter
            .debug_struct("ElementOrder")
            .field("kind", &kind)
            .field("reversed", &self.reversed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_compare(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        let order = ElementOrder::natural();
        assert_eq!(order.compare(&left, &right), expected);
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Less)]
    fn test_reversed_compare(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        let order = ElementOrder::natural().reversed();
        assert_eq!(order.compare(&left, &right), expected);
    }

    #[rstest]
    fn test_reversal_is_involution() {
        let order: ElementOrder<i32> = ElementOrder::natural().reversed().reversed();
        assert!(!order.is_reversed());
        assert_eq!(order.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn test_custom_compare() {
        let order = ElementOrder::by(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        assert_eq!(order.compare(&-5, &3), Ordering::Greater);
        assert_eq!(order.compare(&-3, &3), Ordering::Equal);
    }

    #[rstest]
    fn test_comparator_accessor() {
        let natural: ElementOrder<i32> = ElementOrder::natural();
        assert!(natural.comparator().is_none());
        assert!(natural.is_natural());

        let custom = ElementOrder::by(|a: &i32, b: &i32| a.cmp(b));
        assert!(custom.comparator().is_some());
        assert!(!custom.is_natural());
    }

    #[rstest]
    fn test_reversed_keeps_comparator() {
        let custom = ElementOrder::by(|a: &i32, b: &i32| a.cmp(b)).reversed();
        assert!(custom.comparator().is_some());
        assert!(custom.is_reversed());
        assert_eq!(custom.compare(&1, &2), Ordering::Greater);
    }

    #[rstest]
    fn test_clone_shares_comparator() {
        let order = ElementOrder::by(|a: &i32, b: &i32| a.cmp(b));
        let order_clone = order.clone();
        assert_eq!(order.compare(&1, &2), order_clone.compare(&1, &2));
    }

    #[rstest]
    fn test_debug_representation() {
        let order: ElementOrder<i32> = ElementOrder::natural();
        let rendered = format!("{order:?}");
        assert!(rendered.contains("Natural"));
        assert!(rendered.contains("reversed: false"));
    }
}
