//! Pairwise shape intersections.
//!
//! Every supported pair of primitives gets one algorithm; the flipped
//! ordering reuses it. The result is an [`Intersection`]: an ordered,
//! deduplicated list of points. "No intersection" is a normal, empty
//! result here, never an error; the fallible duality operators of
//! [`geom::HLine`] are wrapped at this layer.
//!
//! Collinear overlapping segments deliberately report no intersection:
//! the overlap is a segment, not a point, and callers that need it
//! should compare the supporting lines themselves.

use crate::geom::utils::{lexicographic_cmp, points_coincide};
use crate::geom::{vector, Circle, FRect, HLine, Point, Polyline, Scalar, Segment, Shape};

/// The ordered, deduplicated set of points at which two shapes meet.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Intersection<S> {
    points: Vec<Point<S>>,
}

impl<S: Scalar> Intersection<S> {
    /// The empty result.
    pub fn none() -> Self {
        Intersection { points: Vec::new() }
    }

    pub fn from_point(p: Point<S>) -> Self {
        Intersection { points: vec![p] }
    }

    /// Builds a result from candidate points, dropping duplicates while
    /// preserving first-found order.
    pub fn from_points(candidates: impl IntoIterator<Item = Point<S>>) -> Self {
        let mut result = Intersection::none();
        for p in candidates {
            result.push(p);
        }

        result
    }

    /// Whether any intersection point exists.
    pub fn exists(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point<S>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point<S>> {
        self.points
    }

    /// Appends a point unless a coincident one is already recorded.
    pub fn push(&mut self, p: Point<S>) {
        if self.points.iter().all(|q| !points_coincide(q, &p)) {
            self.points.push(p);
        }
    }

    fn extend(&mut self, other: Intersection<S>) {
        for p in other.points {
            self.push(p);
        }
    }
}

/// Set equality: same number of points, each matched by a coincident one.
impl<S: Scalar> PartialEq for Intersection<S> {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .all(|p| other.points.iter().any(|q| points_coincide(p, q)))
    }
}

/// Intersection of two infinite lines. Parallel lines (including a line
/// with itself) produce the empty result.
pub fn line_line<S: Scalar>(l1: &HLine<S>, l2: &HLine<S>) -> Intersection<S> {
    match l1.meet(l2).and_then(|p| p.to_point()) {
        Ok(p) => Intersection::from_point(p),
        Err(_) => Intersection::none(),
    }
}

/// Intersection of a line with a segment.
pub fn line_segment<S: Scalar>(line: &HLine<S>, segment: &Segment<S>) -> Intersection<S> {
    match line.meet(&segment.line()).and_then(|p| p.to_point()) {
        Ok(p) if segment.bounding_interval_contains(&p) => Intersection::from_point(p),
        _ => Intersection::none(),
    }
}

/// Intersection of two segments.
///
/// The supporting lines are intersected first and the point is accepted
/// only if it lies within both segments' closed bounding intervals, so
/// two segments sharing an endpoint report exactly that point.
pub fn segment_segment<S: Scalar>(s1: &Segment<S>, s2: &Segment<S>) -> Intersection<S> {
    match s1.line().meet(&s2.line()).and_then(|p| p.to_point()) {
        Ok(p) if s1.bounding_interval_contains(&p) && s2.bounding_interval_contains(&p) => {
            Intersection::from_point(p)
        }
        _ => Intersection::none(),
    }
}

/// Intersection of a circle with a line: zero, one (tangent) or two
/// points, the lexicographically smaller point first.
pub fn circle_line<S: Scalar>(circle: &Circle<S>, line: &HLine<S>) -> Intersection<S> {
    Intersection::from_points(circle.line_intersections(line))
}

/// Intersection of a circle with a segment: the circle/line points
/// restricted to the segment's bounding interval.
pub fn circle_segment<S: Scalar>(circle: &Circle<S>, segment: &Segment<S>) -> Intersection<S> {
    Intersection::from_points(
        circle_line(circle, &segment.line())
            .into_points()
            .into_iter()
            .filter(|p| segment.bounding_interval_contains(p)),
    )
}

/// Intersection of two circles: zero, one (tangency) or two points, the
/// lexicographically smaller point first. Concentric circles never
/// intersect.
pub fn circle_circle<S: Scalar>(c1: &Circle<S>, c2: &Circle<S>) -> Intersection<S> {
    let threshold = S::null_distance();
    let center_line = c2.center() - c1.center();
    let d = center_line.length();
    let (r1, r2) = (c1.radius(), c2.radius());

    if d <= threshold || d > r1 + r2 + threshold || d < (r1 - r2).abs() - threshold {
        return Intersection::none();
    }

    let u = center_line / d;
    // Distance from c1's center to the radical line along u.
    let a = (d * d + r1 * r1 - r2 * r2) / (S::TWO * d);
    let mid = c1.center() + u * a;

    let tangent = (d - (r1 + r2)).abs() <= threshold || (d - (r1 - r2).abs()).abs() <= threshold;
    if tangent {
        return Intersection::from_point(mid);
    }

    let h = (r1 * r1 - a * a).max(S::ZERO).sqrt();
    let across = vector(-u.y, u.x);
    let mut p1 = mid + across * h;
    let mut p2 = mid - across * h;
    if lexicographic_cmp(&p2, &p1) == core::cmp::Ordering::Less {
        core::mem::swap(&mut p1, &mut p2);
    }

    Intersection::from_points([p1, p2])
}

/// Points where a line crosses a rectangle's boundary.
pub fn line_rect<S: Scalar>(line: &HLine<S>, rect: &FRect<S>) -> Intersection<S> {
    let mut result = Intersection::none();
    for edge in &rect.edges() {
        result.extend(line_segment(line, edge));
    }

    result
}

/// Points where a segment crosses a rectangle's boundary.
pub fn segment_rect<S: Scalar>(segment: &Segment<S>, rect: &FRect<S>) -> Intersection<S> {
    let mut result = Intersection::none();
    for edge in &rect.edges() {
        result.extend(segment_segment(segment, edge));
    }

    result
}

/// Points where a circle crosses a rectangle's boundary.
pub fn circle_rect<S: Scalar>(circle: &Circle<S>, rect: &FRect<S>) -> Intersection<S> {
    let mut result = Intersection::none();
    for edge in &rect.edges() {
        result.extend(circle_segment(circle, edge));
    }

    result
}

/// Points where the boundaries of two rectangles cross.
///
/// This is the boundary intersection only; see
/// [`crate::rect_ops::intersect_area`] for the overlap region.
pub fn rect_rect<S: Scalar>(r1: &FRect<S>, r2: &FRect<S>) -> Intersection<S> {
    let mut result = Intersection::none();
    for e1 in &r1.edges() {
        for e2 in &r2.edges() {
            result.extend(segment_segment(e1, e2));
        }
    }

    result
}

fn with_polyline_segments<S: Scalar>(
    polyline: &Polyline<S>,
    mut per_segment: impl FnMut(&Segment<S>) -> Intersection<S>,
) -> Intersection<S> {
    let mut result = Intersection::none();
    for segment in polyline.segments() {
        result.extend(per_segment(&segment));
    }

    result
}

pub fn line_polyline<S: Scalar>(line: &HLine<S>, polyline: &Polyline<S>) -> Intersection<S> {
    with_polyline_segments(polyline, |s| line_segment(line, s))
}

pub fn segment_polyline<S: Scalar>(segment: &Segment<S>, polyline: &Polyline<S>) -> Intersection<S> {
    with_polyline_segments(polyline, |s| segment_segment(segment, s))
}

pub fn circle_polyline<S: Scalar>(circle: &Circle<S>, polyline: &Polyline<S>) -> Intersection<S> {
    with_polyline_segments(polyline, |s| circle_segment(circle, s))
}

pub fn rect_polyline<S: Scalar>(rect: &FRect<S>, polyline: &Polyline<S>) -> Intersection<S> {
    with_polyline_segments(polyline, |s| segment_rect(s, rect))
}

pub fn polyline_polyline<S: Scalar>(p1: &Polyline<S>, p2: &Polyline<S>) -> Intersection<S> {
    with_polyline_segments(p1, |s| segment_polyline(s, p2))
}

/// Shapes that can be intersected with `Rhs`.
///
/// Implemented for every supported ordered pair; flipped orderings
/// delegate to the same algorithm, so `a.intersect(&b)` and
/// `b.intersect(&a)` are equal as sets.
pub trait Intersect<S: Scalar, Rhs = Self> {
    fn intersect(&self, other: &Rhs) -> Intersection<S>;
}

macro_rules! symmetric_intersect {
    ($lhs:ident, $rhs:ident, $f:path) => {
        impl<S: Scalar> Intersect<S, $rhs<S>> for $lhs<S> {
            fn intersect(&self, other: &$rhs<S>) -> Intersection<S> {
                $f(self, other)
            }
        }

        impl<S: Scalar> Intersect<S, $lhs<S>> for $rhs<S> {
            fn intersect(&self, other: &$lhs<S>) -> Intersection<S> {
                $f(other, self)
            }
        }
    };
}

macro_rules! self_intersect {
    ($ty:ident, $f:path) => {
        impl<S: Scalar> Intersect<S> for $ty<S> {
            fn intersect(&self, other: &$ty<S>) -> Intersection<S> {
                $f(self, other)
            }
        }
    };
}

self_intersect!(HLine, line_line);
self_intersect!(Segment, segment_segment);
self_intersect!(Circle, circle_circle);
self_intersect!(FRect, rect_rect);
self_intersect!(Polyline, polyline_polyline);

symmetric_intersect!(HLine, Segment, line_segment);
symmetric_intersect!(HLine, FRect, line_rect);
symmetric_intersect!(HLine, Polyline, line_polyline);
symmetric_intersect!(Circle, HLine, circle_line);
symmetric_intersect!(Circle, Segment, circle_segment);
symmetric_intersect!(Circle, FRect, circle_rect);
symmetric_intersect!(Circle, Polyline, circle_polyline);
symmetric_intersect!(Segment, FRect, segment_rect);
symmetric_intersect!(Segment, Polyline, segment_polyline);
symmetric_intersect!(FRect, Polyline, rect_polyline);

/// Intersection of two dynamically typed shapes.
///
/// Unsupported combinations (anything involving a lone point or an
/// ellipse) produce the empty result.
pub fn shape_shape<S: Scalar>(a: &Shape<S>, b: &Shape<S>) -> Intersection<S> {
    use Shape::*;

    match (a, b) {
        (Line(l1), Line(l2)) => line_line(l1, l2),
        (Line(l), Segment(s)) | (Segment(s), Line(l)) => line_segment(l, s),
        (Line(l), Rect(r)) | (Rect(r), Line(l)) => line_rect(l, r),
        (Line(l), Circle(c)) | (Circle(c), Line(l)) => circle_line(c, l),
        (Line(l), Polyline(p)) | (Polyline(p), Line(l)) => line_polyline(l, p),
        (Segment(s1), Segment(s2)) => segment_segment(s1, s2),
        (Segment(s), Rect(r)) | (Rect(r), Segment(s)) => segment_rect(s, r),
        (Segment(s), Circle(c)) | (Circle(c), Segment(s)) => circle_segment(c, s),
        (Segment(s), Polyline(p)) | (Polyline(p), Segment(s)) => segment_polyline(s, p),
        (Circle(c1), Circle(c2)) => circle_circle(c1, c2),
        (Circle(c), Rect(r)) | (Rect(r), Circle(c)) => circle_rect(c, r),
        (Circle(c), Polyline(p)) | (Polyline(p), Circle(c)) => circle_polyline(c, p),
        (Rect(r1), Rect(r2)) => rect_rect(r1, r2),
        (Rect(r), Polyline(p)) | (Polyline(p), Rect(r)) => rect_polyline(r, p),
        (Polyline(p1), Polyline(p2)) => polyline_polyline(p1, p2),
        _ => Intersection::none(),
    }
}

#[test]
fn crossing_segments() {
    use crate::geom::point;
    let s1 = Segment::new(point(0.0, 0.0), point(2.0, 2.0)).unwrap();
    let s2 = Segment::new(point(0.0, 2.0), point(2.0, 0.0)).unwrap();

    let result = s1.intersect(&s2);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(1.0, 1.0)));

    assert_eq!(s1.intersect(&s2), s2.intersect(&s1));
}

#[test]
fn segments_sharing_an_endpoint() {
    use crate::geom::point;
    let s1 = Segment::new(point(0.0, 0.0), point(1.0, 1.0)).unwrap();
    let s2 = Segment::new(point(1.0, 1.0), point(2.0, 0.0)).unwrap();

    let result = segment_segment(&s1, &s2);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(1.0, 1.0)));
}

#[test]
fn collinear_overlap_is_empty() {
    use crate::geom::point;
    let s1 = Segment::new(point(0.0, 0.0), point(2.0, 0.0)).unwrap();
    let s2 = Segment::new(point(1.0, 0.0), point(3.0, 0.0)).unwrap();

    assert!(!segment_segment(&s1, &s2).exists());
}

#[test]
fn disjoint_segments() {
    use crate::geom::point;
    let s1 = Segment::new(point(0.0, 0.0), point(1.0, 0.0)).unwrap();
    let s2 = Segment::new(point(0.0, 1.0), point(1.0, 2.0)).unwrap();

    assert!(!segment_segment(&s1, &s2).exists());
}

#[test]
fn tangent_circles() {
    use crate::geom::point;
    let c1 = Circle::new(point(0.0, 0.0), 1.0).unwrap();
    let c2 = Circle::new(point(2.0, 0.0), 1.0).unwrap();

    let result = circle_circle(&c1, &c2);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(1.0, 0.0)));
}

#[test]
fn overlapping_circles() {
    use crate::geom::point;
    let c1 = Circle::new(point(0.0, 0.0), 2.0).unwrap();
    let c2 = Circle::new(point(2.0, 0.0), 2.0).unwrap();

    let result = circle_circle(&c1, &c2);
    assert_eq!(result.count(), 2);
    // Smaller y first at equal x.
    assert!(points_coincide(&result.points()[0], &point(1.0, -f64::sqrt(3.0))));
    assert!(points_coincide(&result.points()[1], &point(1.0, f64::sqrt(3.0))));

    assert_eq!(circle_circle(&c1, &c2), circle_circle(&c2, &c1));
}

#[test]
fn concentric_circles() {
    use crate::geom::point;
    let c1 = Circle::new(point(0.0, 0.0), 1.0).unwrap();
    let c2 = Circle::new(point(0.0, 0.0), 2.0).unwrap();

    assert!(!circle_circle(&c1, &c2).exists());
}

#[test]
fn circle_and_line() {
    use crate::geom::point;
    let circle = Circle::new(point(0.0, 0.0), 1.0).unwrap();

    let secant = HLine::horizontal(0.0);
    let result = circle_line(&circle, &secant);
    assert_eq!(result.count(), 2);
    assert!(points_coincide(&result.points()[0], &point(-1.0, 0.0)));
    assert!(points_coincide(&result.points()[1], &point(1.0, 0.0)));

    let tangent = HLine::horizontal(1.0);
    let result = circle_line(&circle, &tangent);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(0.0, 1.0)));

    let miss = HLine::horizontal(2.0);
    assert!(!circle_line(&circle, &miss).exists());
}

#[test]
fn overlapping_rects() {
    use crate::geom::point;
    let r1 = FRect::from_coords(0.0, 0.0, 2.0, 2.0).unwrap();
    let r2 = FRect::from_coords(1.0, 1.0, 3.0, 3.0).unwrap();

    let result = rect_rect(&r1, &r2);
    assert_eq!(result.count(), 2);
    assert!(result
        .points()
        .iter()
        .any(|p| points_coincide(p, &point(2.0, 1.0))));
    assert!(result
        .points()
        .iter()
        .any(|p| points_coincide(p, &point(1.0, 2.0))));

    assert_eq!(rect_rect(&r1, &r2), rect_rect(&r2, &r1));
}

#[test]
fn corner_touching_rects() {
    use crate::geom::point;
    let r1 = FRect::from_coords(0.0, 0.0, 1.0, 1.0).unwrap();
    let r2 = FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap();

    let result = rect_rect(&r1, &r2);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(1.0, 1.0)));
}

#[test]
fn line_through_polygon() {
    use crate::geom::point;
    let square = Polyline::closed(vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();

    let result = line_polyline(&HLine::horizontal(1.0), &square);
    assert_eq!(result.count(), 2);
}
