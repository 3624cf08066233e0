//! Line segments with canonicalized endpoint order.

use crate::scalar::Scalar;
use crate::traits::Transformation;
use crate::utils::{lexicographic_cmp, min_max, points_coincide};
use crate::{point, Box2D, GeomError, HLine, Point, Vector};
use core::cmp::Ordering;

/// A linear segment between two distinct points.
///
/// The endpoints are canonicalized on construction (lexicographic on x, then
/// y) so that `Segment::new(p1, p2) == Segment::new(p2, p1)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Segment<S> {
    from: Point<S>,
    to: Point<S>,
}

impl<S: Scalar> Segment<S> {
    /// A segment between two distinct points.
    ///
    /// Fails when the points coincide within the distance threshold.
    pub fn new(p1: Point<S>, p2: Point<S>) -> Result<Self, GeomError> {
        if points_coincide(&p1, &p2) {
            return Err(GeomError::DegenerateInput(
                "segment endpoints cannot coincide",
            ));
        }

        Ok(Self::new_unchecked(p1, p2))
    }

    // Precondition: distinct points; canonicalizes the order.
    pub(crate) fn new_unchecked(p1: Point<S>, p2: Point<S>) -> Self {
        if lexicographic_cmp(&p1, &p2) == Ordering::Greater {
            Segment { from: p2, to: p1 }
        } else {
            Segment { from: p1, to: p2 }
        }
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Both endpoints, in canonical order.
    #[inline]
    pub fn points(&self) -> (Point<S>, Point<S>) {
        (self.from, self.to)
    }

    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    #[inline]
    pub fn mid_point(&self) -> Point<S> {
        self.sample(S::HALF)
    }

    /// The supporting line. Infallible: the endpoints are distinct by
    /// construction.
    #[inline]
    pub fn line(&self) -> HLine<S> {
        HLine::through_points(self.from, self.to)
    }

    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    #[inline]
    pub fn bounding_range_x(&self) -> (S, S) {
        min_max(self.from.x, self.to.x)
    }

    #[inline]
    pub fn bounding_range_y(&self) -> (S, S) {
        min_max(self.from.y, self.to.y)
    }

    /// Whether a point of the supporting line falls within the segment's
    /// closed bounding interval, endpoints included (within the distance
    /// threshold).
    pub fn bounding_interval_contains(&self, p: &Point<S>) -> bool {
        let thr = S::null_distance();
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        p.x >= min_x - thr && p.x <= max_x + thr && p.y >= min_y - thr && p.y <= max_y + thr
    }

    /// Whether the point lies on the segment, endpoints included.
    pub fn contains_point(&self, p: &Point<S>) -> bool {
        self.line().distance_to_point(p) <= S::null_distance() && self.bounding_interval_contains(p)
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        let v1 = self.to - self.from;
        let v2 = p - self.from;
        let t = (v2.dot(v1) / v1.dot(v1)).max(S::ZERO).min(S::ONE);

        (self.from + v1 * t - p).length()
    }

    /// Applies the transform to both endpoints and returns the result.
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Self {
        Self::new_unchecked(
            transform.transform_point(self.from),
            transform.transform_point(self.to),
        )
    }
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn canonical_order() {
    let s1 = Segment::new(pt(2.0f64, 1.0), pt(0.0, 5.0)).unwrap();
    let s2 = Segment::new(pt(0.0f64, 5.0), pt(2.0, 1.0)).unwrap();
    assert_eq!(s1, s2);
    assert_eq!(s1.from(), pt(0.0, 5.0));

    // Same x: ordered by y.
    let s3 = Segment::new(pt(1.0f64, 3.0), pt(1.0, -1.0)).unwrap();
    assert_eq!(s3.from(), pt(1.0, -1.0));
}

#[test]
fn degenerate_rejected() {
    assert!(Segment::new(pt(1.0f64, 1.0), pt(1.0, 1.0)).is_err());
}

#[test]
fn supporting_line() {
    let s = Segment::new(pt(0.0f64, 0.0), pt(4.0, 0.0)).unwrap();
    let l = s.line();
    assert!(l.distance_to_point(&pt(2.0, 0.0)) < 1e-12);
    assert!((l.distance_to_point(&pt(2.0, 3.0)) - 3.0).abs() < 1e-12);
}

#[test]
fn point_queries() {
    let s = Segment::new(pt(0.0f64, 0.0), pt(2.0, 2.0)).unwrap();
    assert!(s.contains_point(&pt(1.0, 1.0)));
    assert!(s.contains_point(&pt(0.0, 0.0)));
    assert!(!s.contains_point(&pt(3.0, 3.0)));
    assert!(!s.contains_point(&pt(1.0, 0.0)));
    assert!((s.distance_to_point(pt(2.0, 0.0)) - core::f64::consts::SQRT_2).abs() < 1e-12);
    assert!((s.distance_to_point(pt(4.0, 2.0)) - 2.0).abs() < 1e-12);
}
