//! Small helpers shared across the crate.

use crate::scalar::Scalar;
use crate::{vector, Point, Vector};
use core::cmp::Ordering;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The vector orthogonal to `v`, pointing to its left.
#[inline]
pub fn tangent<S: Scalar>(v: Vector<S>) -> Vector<S> {
    vector(-v.y, v.x)
}

/// Lexicographic order on (x, y), used wherever a deterministic point order
/// is needed (segment canonicalization, hull pivots, conic root ordering).
#[inline]
pub fn lexicographic_cmp<S: Scalar>(a: &Point<S>, b: &Point<S>) -> Ordering {
    match a.x.partial_cmp(&b.x) {
        Some(Ordering::Equal) | None => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        Some(ord) => ord,
    }
}

/// Whether two points coincide within the distance threshold.
#[inline]
pub fn points_coincide<S: Scalar>(a: &Point<S>, b: &Point<S>) -> bool {
    (*a - *b).length() <= S::null_distance()
}

/// Cross product of `b - a` and `c - a`, accumulated in the wide type.
///
/// Positive when `a`, `b`, `c` make a left (counter-clockwise) turn.
#[inline]
pub fn wide_cross<S: Scalar>(a: &Point<S>, b: &Point<S>, c: &Point<S>) -> S::Wide {
    let abx = (b.x - a.x).to_wide();
    let aby = (b.y - a.y).to_wide();
    let acx = (c.x - a.x).to_wide();
    let acy = (c.y - a.y).to_wide();

    abx * acy - aby * acx
}

#[test]
fn min_max_orders() {
    assert_eq!(min_max(1.0, 2.0), (1.0, 2.0));
    assert_eq!(min_max(2.0, 1.0), (1.0, 2.0));
}

#[test]
fn lexicographic() {
    use crate::point;
    assert_eq!(
        lexicographic_cmp(&point(1.0, 5.0), &point(2.0, 0.0)),
        Ordering::Less
    );
    assert_eq!(
        lexicographic_cmp(&point(1.0, 5.0), &point(1.0, 6.0)),
        Ordering::Less
    );
    assert_eq!(
        lexicographic_cmp(&point(1.0, 5.0), &point(1.0, 5.0)),
        Ordering::Equal
    );
}
