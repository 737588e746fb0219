//! Interval algebra over a totally-ordered value domain (component C1).
//!
//! An `Interval<T>` describes a contiguous subset of `T`: bounded or
//! unbounded on either side, each bound inclusive or exclusive, or
//! explicitly empty. The only nontrivial operation is `intersect`, which is
//! how many `AND`-ed predicates on one column collapse into the single
//! bound the filtered cursor drives its seeks from.

use rangeplan_expr::TotalOrder;
use std::cmp::Ordering;

/// One bound of an interval: the value at the edge, and whether that value
/// itself is included.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    pub value: T,
    pub exclusive: bool,
}

/// A contiguous subset of `T`. The default value is the universal interval.
///
/// Unlike a four-flag encoding (`has_lower`/`has_upper`/.../`empty`), bound
/// presence is carried by `Option<Edge<T>>` — "no edge" and "unbounded" are
/// the same state, so there's no way to desynchronize a `has_lower` flag
/// from the `lower` value it's supposed to gate. `empty` remains a separate
/// flag (not derivable from the edges alone without a comparator in hand)
/// so emptiness can be asserted and checked without one.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval<T> {
    lower: Option<Edge<T>>,
    upper: Option<Edge<T>>,
    empty: bool,
}

impl<T> Default for Interval<T> {
    fn default() -> Self { Self::universe() }
}

impl<T> Interval<T> {
    /// The unbounded, non-empty interval — the identity element of `intersect`.
    pub fn universe() -> Self { Interval { lower: None, upper: None, empty: false } }

    /// The explicitly empty interval — the absorbing element of `intersect`.
    pub fn empty() -> Self { Interval { lower: None, upper: None, empty: true } }

    pub fn is_empty(&self) -> bool { self.empty }

    pub fn lower(&self) -> Option<&Edge<T>> { self.lower.as_ref() }

    pub fn upper(&self) -> Option<&Edge<T>> { self.upper.as_ref() }
}

impl<T: Clone> Interval<T> {
    /// `[v, v]`.
    pub fn single_point(v: T) -> Self {
        Interval { lower: Some(Edge { value: v.clone(), exclusive: false }), upper: Some(Edge { value: v, exclusive: false }), empty: false }
    }

    /// `(v, +inf)` if `exclusive` else `[v, +inf)`.
    pub fn lower_bounded(v: T, exclusive: bool) -> Self {
        Interval { lower: Some(Edge { value: v, exclusive }), upper: None, empty: false }
    }

    /// `(-inf, v)` if `exclusive` else `(-inf, v]`.
    pub fn upper_bounded(v: T, exclusive: bool) -> Self {
        Interval { lower: None, upper: Some(Edge { value: v, exclusive }), empty: false }
    }

    /// Dispatches to `lower_bounded`/`upper_bounded` depending on `is_upper`.
    pub fn one_sided_bound(v: T, exclusive: bool, is_upper: bool) -> Self {
        if is_upper { Self::upper_bounded(v, exclusive) } else { Self::lower_bounded(v, exclusive) }
    }

    /// Intersects `self` with `other` under the total order `cmp`.
    ///
    /// Commutative, associative, idempotent; `universe()` is the identity
    /// and `empty()` is absorbing. Tie rule: when two bounds on the same
    /// side compare equal, the result is exclusive iff *either* operand was
    /// exclusive on that side.
    pub fn intersect<C: TotalOrder<T>>(&self, other: &Self, cmp: &C) -> Self {
        if self.empty || other.empty {
            return Self::empty();
        }

        let lower = combine_lower(self.lower.as_ref(), other.lower.as_ref(), cmp);
        let upper = combine_upper(self.upper.as_ref(), other.upper.as_ref(), cmp);

        let mut result = Interval { lower, upper, empty: false };
        if let (Some(l), Some(u)) = (&result.lower, &result.upper) {
            match cmp.compare(&l.value, &u.value) {
                Ordering::Greater => result = Self::empty(),
                Ordering::Equal if l.exclusive || u.exclusive => result = Self::empty(),
                _ => {}
            }
        }
        result
    }
}

fn combine_lower<T: Clone, C: TotalOrder<T>>(a: Option<&Edge<T>>, b: Option<&Edge<T>>, cmp: &C) -> Option<Edge<T>> {
    match (a, b) {
        (None, None) => None,
        (Some(e), None) | (None, Some(e)) => Some(e.clone()),
        (Some(a), Some(b)) => Some(match cmp.compare(&a.value, &b.value) {
            Ordering::Greater => a.clone(),
            Ordering::Less => b.clone(),
            Ordering::Equal => Edge { value: a.value.clone(), exclusive: a.exclusive || b.exclusive },
        }),
    }
}

fn combine_upper<T: Clone, C: TotalOrder<T>>(a: Option<&Edge<T>>, b: Option<&Edge<T>>, cmp: &C) -> Option<Edge<T>> {
    match (a, b) {
        (None, None) => None,
        (Some(e), None) | (None, Some(e)) => Some(e.clone()),
        (Some(a), Some(b)) => Some(match cmp.compare(&a.value, &b.value) {
            Ordering::Less => a.clone(),
            Ordering::Greater => b.clone(),
            Ordering::Equal => Edge { value: a.value.clone(), exclusive: a.exclusive || b.exclusive },
        }),
    }
}
