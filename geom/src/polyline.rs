//! Open polylines and closed polygons, sharing one implementation.
//!
//! The two variants differ only in whether the last vertex implicitly
//! connects back to the first; everything else (storage, invariants,
//! iteration) is common, so a single type carries a `closed` flag, like a
//! polygon path with an optional closing event.

use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::traits::Transformation;
use crate::utils::{lexicographic_cmp, points_coincide};
use crate::{point, Box2D, GeomError, Point};
use core::cmp::Ordering;

/// An ordered sequence of points, optionally closed.
///
/// Invariants: no two consecutive points coincide, the size is 0 or at least
/// 2 (3 when closed, counting the implicit closing edge).
///
/// Equality is structural for open polylines (forward or reversed), and
/// canonical for closed ones: polygons describing the same vertex cycle
/// compare equal regardless of starting offset and winding direction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polyline<S> {
    points: Vec<Point<S>>,
    closed: bool,
}

impl<S: Scalar> Polyline<S> {
    /// An open polyline.
    pub fn open(points: Vec<Point<S>>) -> Result<Self, GeomError> {
        Self::new(points, false)
    }

    /// A closed polygon. The closing edge from the last point back to the
    /// first is implicit; do not repeat the first point.
    pub fn closed(points: Vec<Point<S>>) -> Result<Self, GeomError> {
        Self::new(points, true)
    }

    pub fn new(points: Vec<Point<S>>, closed: bool) -> Result<Self, GeomError> {
        match points.len() {
            0 => return Ok(Polyline { points, closed }),
            1 => {
                return Err(GeomError::DegenerateInput(
                    "a polyline needs at least two points",
                ))
            }
            2 if closed => {
                return Err(GeomError::DegenerateInput(
                    "a closed polyline needs at least three points",
                ))
            }
            _ => {}
        }

        for w in points.windows(2) {
            if points_coincide(&w[0], &w[1]) {
                return Err(GeomError::DegenerateInput(
                    "consecutive polyline points cannot coincide",
                ));
            }
        }
        if closed && points_coincide(&points[0], &points[points.len() - 1]) {
            return Err(GeomError::DegenerateInput(
                "consecutive polyline points cannot coincide",
            ));
        }

        Ok(Polyline { points, closed })
    }

    /// Skips the invariant checks. The caller must guarantee them; meant for
    /// algorithm code that constructs vertex sequences known to be valid.
    #[doc(hidden)]
    pub fn closed_unchecked(points: Vec<Point<S>>) -> Self {
        Polyline {
            points,
            closed: true,
        }
    }

    /// See [`Polyline::closed_unchecked`].
    #[doc(hidden)]
    pub fn unchecked(points: Vec<Point<S>>, closed: bool) -> Self {
        Polyline { points, closed }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn points(&self) -> &[Point<S>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point<S>> {
        self.points
    }

    /// Number of edges (includes the closing edge when closed).
    pub fn num_edges(&self) -> usize {
        match (self.points.len(), self.closed) {
            (0, _) => 0,
            (n, true) => n,
            (n, false) => n - 1,
        }
    }

    /// Iterator over the directed edges, in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = (Point<S>, Point<S>)> + '_ {
        let n = self.num_edges();
        let points = &self.points;
        (0..n).map(move |i| (points[i], points[(i + 1) % points.len()]))
    }

    /// The edges as (canonicalized) segments.
    pub fn segments(&self) -> Vec<Segment<S>> {
        self.edges()
            .map(|(a, b)| Segment::new_unchecked(a, b))
            .collect()
    }

    /// Total length of the edges, the closing one included when closed.
    pub fn length(&self) -> S {
        self.edges()
            .fold(S::ZERO, |acc, (a, b)| acc + (b - a).length())
    }

    /// The signed shoelace sum divided by two; positive for counter-clockwise
    /// winding. Zero for open polylines, by definition.
    pub fn signed_area(&self) -> S {
        if !self.closed || self.points.len() < 3 {
            return S::ZERO;
        }

        let mut acc = S::ZERO.to_wide();
        for (a, b) in self.edges() {
            acc = acc + a.x.to_wide() * b.y.to_wide() - b.x.to_wide() * a.y.to_wide();
        }

        S::from_wide(acc) * S::HALF
    }

    #[inline]
    pub fn area(&self) -> S {
        self.signed_area().abs()
    }

    /// Whether the winding is counter-clockwise. Meaningless for open
    /// polylines (always false).
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > S::ZERO
    }

    /// The centroid of the enclosed region.
    ///
    /// Fails when the area vanishes (open polylines, collinear vertices).
    pub fn centroid(&self) -> Result<Point<S>, GeomError> {
        let a = self.signed_area();
        if a.abs() <= S::null_distance() {
            return Err(GeomError::DegenerateShape(
                "centroid of a zero-area polyline",
            ));
        }

        let mut cx = S::ZERO.to_wide();
        let mut cy = S::ZERO.to_wide();
        for (p, q) in self.edges() {
            let cross = p.x.to_wide() * q.y.to_wide() - q.x.to_wide() * p.y.to_wide();
            cx = cx + (p.x.to_wide() + q.x.to_wide()) * cross;
            cy = cy + (p.y.to_wide() + q.y.to_wide()) * cross;
        }

        let div = S::SIX.to_wide() * a.to_wide();
        Ok(point(
            S::from_wide(cx / div),
            S::from_wide(cy / div),
        ))
    }

    /// The smallest box containing all vertices. Fails on an empty polyline.
    pub fn bounding_box(&self) -> Result<Box2D<S>, GeomError> {
        let first = self.points.first().ok_or(GeomError::EmptyInput)?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Ok(Box2D { min, max })
    }

    /// Applies the transform to every vertex and returns the result.
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Self {
        Polyline {
            points: self
                .points
                .iter()
                .map(|p| transform.transform_point(*p))
                .collect(),
            closed: self.closed,
        }
    }

    // The vertex cycle rewritten to start at the lexicographically smallest
    // vertex and proceed toward its smaller neighbor, which fixes both the
    // starting offset and the winding direction.
    fn canonical_cycle(&self) -> Vec<Point<S>> {
        let n = self.points.len();
        if n == 0 {
            return Vec::new();
        }

        let start = self
            .points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| lexicographic_cmp(a, b))
            .map(|(i, _)| i)
            .unwrap_or(0);

        let next = self.points[(start + 1) % n];
        let prev = self.points[(start + n - 1) % n];
        let forward = lexicographic_cmp(&next, &prev) != Ordering::Greater;

        let mut out = Vec::with_capacity(n);
        if forward {
            for i in 0..n {
                out.push(self.points[(start + i) % n]);
            }
        } else {
            for i in 0..n {
                out.push(self.points[(start + n - i) % n]);
            }
        }

        out
    }
}

impl<S: Scalar> PartialEq for Polyline<S> {
    fn eq(&self, other: &Self) -> bool {
        if self.closed != other.closed || self.points.len() != other.points.len() {
            return false;
        }

        if self.closed {
            self.canonical_cycle() == other.canonical_cycle()
        } else {
            self.points == other.points
                || self.points.iter().eq(other.points.iter().rev())
        }
    }
}

#[cfg(test)]
use crate::point as pt;

#[cfg(test)]
fn square() -> Polyline<f64> {
    Polyline::closed(vec![
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
    ])
    .unwrap()
}

#[test]
fn invariants() {
    assert!(Polyline::<f64>::open(vec![]).unwrap().is_empty());
    assert!(Polyline::open(vec![pt(0.0, 0.0)]).is_err());
    assert!(Polyline::closed(vec![pt(0.0, 0.0), pt(1.0, 0.0)]).is_err());
    assert!(Polyline::open(vec![pt(0.0, 0.0), pt(0.0, 0.0)]).is_err());
    assert!(Polyline::closed(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 0.0)]).is_err());
}

#[test]
fn metrics() {
    let sq = square();
    assert_eq!(sq.area(), 4.0);
    assert_eq!(sq.length(), 8.0);
    assert!(sq.is_ccw());
    assert_eq!(sq.centroid().unwrap(), pt(1.0, 1.0));
    assert_eq!(sq.num_edges(), 4);

    let open = Polyline::open(vec![pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 2.0)]).unwrap();
    assert_eq!(open.area(), 0.0);
    assert_eq!(open.length(), 4.0);
    assert_eq!(open.num_edges(), 2);
    assert!(open.centroid().is_err());
}

#[test]
fn closed_equality_is_canonical() {
    let a = square();
    // Same cycle, different starting offset.
    let b = Polyline::closed(vec![
        pt(2.0, 2.0),
        pt(0.0, 2.0),
        pt(0.0, 0.0),
        pt(2.0, 0.0),
    ])
    .unwrap();
    // Same cycle, opposite winding.
    let c = Polyline::closed(vec![
        pt(0.0, 0.0),
        pt(0.0, 2.0),
        pt(2.0, 2.0),
        pt(2.0, 0.0),
    ])
    .unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);

    let d = Polyline::closed(vec![
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(2.0, 2.0),
        pt(0.0, 3.0),
    ])
    .unwrap();
    assert_ne!(a, d);
}

#[test]
fn open_equality_ignores_direction() {
    let a = Polyline::open(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)]).unwrap();
    let b = Polyline::open(vec![pt(1.0, 1.0), pt(1.0, 0.0), pt(0.0, 0.0)]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn bounding_box() {
    let sq = square();
    let bb = sq.bounding_box().unwrap();
    assert_eq!(bb.min, pt(0.0, 0.0));
    assert_eq!(bb.max, pt(2.0, 2.0));
    assert!(Polyline::<f64>::open(vec![]).unwrap().bounding_box().is_err());
}
