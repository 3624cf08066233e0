//! "Is strictly inside" predicates.
//!
//! Containment is open: a point on a shape's boundary is not inside it,
//! and two shapes sharing any boundary point are not contained in one
//! another. A line is never inside anything and nothing is inside a
//! point, a line or a segment, which have no interior.

use crate::geom::{Circle, Ellipse, FRect, Point, Polyline, Scalar, Shape};
use crate::intersection;

/// Returns whether the point is strictly inside the closed polygon.
///
/// Open polylines and polygons with fewer than three vertices contain
/// nothing. Points on an edge are not inside.
pub fn point_in_polygon<S: Scalar>(p: &Point<S>, polygon: &Polyline<S>) -> bool {
    if !polygon.is_closed() || polygon.len() < 3 {
        return false;
    }

    for segment in polygon.segments() {
        if segment.contains_point(p) {
            return false;
        }
    }

    // Crossing number of the leftward horizontal ray. Each edge spans a
    // half-open y interval so a vertex exactly at p.y is counted once.
    let mut crossings = 0;
    for (from, to) in polygon.edges() {
        let min_y = from.y.min(to.y);
        let max_y = from.y.max(to.y);
        if min_y > p.y || max_y <= p.y || from.y == to.y {
            continue;
        }

        let t = (p.y - from.y) / (to.y - from.y);
        let x = from.x + (to.x - from.x) * t;
        if x < p.x {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

/// Returns whether the point is strictly inside the shape.
pub fn point_in_shape<S: Scalar>(p: &Point<S>, shape: &Shape<S>) -> bool {
    match shape {
        Shape::Point(_) | Shape::Line(_) | Shape::Segment(_) => false,
        Shape::Rect(rect) => rect.contains_point(p),
        Shape::Circle(circle) => circle.contains_point(p),
        Shape::Ellipse(ellipse) => ellipse.contains_point(p),
        Shape::Polyline(polyline) => point_in_polygon(p, polyline),
    }
}

fn all_inside<S: Scalar>(points: &[Point<S>], shape: &Shape<S>) -> bool {
    !points.is_empty() && points.iter().all(|p| point_in_shape(p, shape))
}

/// Circle inside circle, resolved algebraically.
///
/// The generic vertex test does not apply here: the inner circle's only
/// defining point is its center, which can sit inside the other circle
/// in either nesting order.
pub fn circle_in_circle<S: Scalar>(inner: &Circle<S>, outer: &Circle<S>) -> bool {
    let d = (outer.center() - inner.center()).length();
    d + inner.radius() < outer.radius() - S::null_distance()
}

pub fn circle_in_rect<S: Scalar>(circle: &Circle<S>, rect: &FRect<S>) -> bool {
    let threshold = S::null_distance();
    let c = circle.center();
    let r = circle.radius();
    c.x - r > rect.min().x + threshold
        && c.x + r < rect.max().x - threshold
        && c.y - r > rect.min().y + threshold
        && c.y + r < rect.max().y - threshold
}

pub fn circle_in_polygon<S: Scalar>(circle: &Circle<S>, polygon: &Polyline<S>) -> bool {
    // Every edge must stay clear of the full disk, not just of the
    // center. A polygon entirely inside the circle passes the center
    // test without any boundary crossing.
    point_in_polygon(&circle.center(), polygon)
        && polygon
            .segments()
            .iter()
            .all(|s| s.distance_to_point(circle.center()) > circle.radius() + S::null_distance())
}

/// Circle inside ellipse, conservative (never a false positive).
///
/// The circle's center is brought into the ellipse's canonical frame,
/// where the disk image is bounded by a disk of radius `r / minor`
/// around the mapped center after dividing out the axes. Exact when
/// the ellipse is circular.
pub fn circle_in_ellipse<S: Scalar>(circle: &Circle<S>, ellipse: &Ellipse<S>) -> bool {
    let (sin, cos) = ellipse.angle().sin_cos();
    let d = circle.center() - ellipse.center();
    let u = cos * d.x + sin * d.y;
    let v = -sin * d.x + cos * d.y;

    let q = ((u / ellipse.major()) * (u / ellipse.major())
        + (v / ellipse.minor()) * (v / ellipse.minor()))
    .sqrt();
    q + circle.radius() / ellipse.minor() < S::ONE - S::null_distance()
}

/// Whether the tight bounding rectangle of an ellipse fits inside the
/// shape. Exact against an axis-aligned rectangle, conservative (never a
/// false positive) against convex outers.
fn ellipse_box_in_shape<S: Scalar>(ellipse: &Ellipse<S>, outer: &Shape<S>) -> bool {
    let b = ellipse.bounding_box();
    match FRect::new(b.min, b.max) {
        Ok(rect) => is_inside(&Shape::Rect(rect), outer),
        Err(_) => false,
    }
}

/// Returns whether shape `a` is strictly inside shape `b`.
///
/// True only when every defining point of `a` is inside `b` and the two
/// boundaries do not intersect, so partially overlapping shapes are
/// neither inside one another nor the reverse.
pub fn is_inside<S: Scalar>(a: &Shape<S>, b: &Shape<S>) -> bool {
    use Shape::*;

    match (a, b) {
        // No interior to be inside of.
        (_, Point(_)) | (_, Line(_)) | (_, Segment(_)) => false,
        // A line extends to infinity in both directions.
        (Line(_), _) => false,

        (Point(p), outer) => point_in_shape(p, outer),

        (Circle(inner), Circle(outer)) => circle_in_circle(inner, outer),
        (Circle(circle), Rect(rect)) => circle_in_rect(circle, rect),
        (Circle(circle), Polyline(polygon)) => circle_in_polygon(circle, polygon),
        (Circle(circle), Ellipse(ellipse)) => circle_in_ellipse(circle, ellipse),

        (Ellipse(ellipse), outer) => ellipse_box_in_shape(ellipse, outer),

        // Polygonal shape inside a convex outer: vertex containment is
        // both necessary and sufficient.
        (Segment(s), outer @ Rect(_))
        | (Segment(s), outer @ Circle(_))
        | (Segment(s), outer @ Ellipse(_)) => {
            let (p1, p2) = s.points();
            all_inside(&[p1, p2], outer)
        }
        (Rect(r), outer @ Rect(_)) | (Rect(r), outer @ Circle(_)) | (Rect(r), outer @ Ellipse(_)) => {
            all_inside(&r.corners(), outer)
        }
        (Polyline(p), outer @ Rect(_))
        | (Polyline(p), outer @ Circle(_))
        | (Polyline(p), outer @ Ellipse(_)) => all_inside(p.points(), outer),

        // Polygon outers can be concave: vertex containment plus no
        // boundary crossing.
        (Segment(s), Polyline(polygon)) => {
            let (p1, p2) = s.points();
            all_inside(&[p1, p2], b) && !intersection::segment_polyline(s, polygon).exists()
        }
        (Rect(r), Polyline(polygon)) => {
            all_inside(&r.corners(), b) && !intersection::rect_polyline(r, polygon).exists()
        }
        (Polyline(p1), Polyline(p2)) => {
            all_inside(p1.points(), b) && !intersection::polyline_polyline(p1, p2).exists()
        }
    }
}

#[cfg(test)]
fn square<S: Scalar>(size: S) -> Polyline<S> {
    use crate::geom::point;
    Polyline::closed(vec![
        point(S::ZERO, S::ZERO),
        point(size, S::ZERO),
        point(size, size),
        point(S::ZERO, size),
    ])
    .unwrap()
}

#[test]
fn point_in_square() {
    use crate::geom::point;

    let polygon = square(2.0);
    assert!(point_in_polygon(&point(1.0, 1.0), &polygon));
    assert!(!point_in_polygon(&point(3.0, 1.0), &polygon));
    assert!(!point_in_polygon(&point(1.0, -0.5), &polygon));
    // Boundary points are not inside.
    assert!(!point_in_polygon(&point(0.0, 0.0), &polygon));
    assert!(!point_in_polygon(&point(1.0, 0.0), &polygon));
    assert!(!point_in_polygon(&point(2.0, 1.0), &polygon));
}

#[test]
fn point_in_concave_polygon() {
    use crate::geom::point;

    // A U shape: the notch is not inside.
    let polygon = Polyline::closed(vec![
        point(0.0, 0.0),
        point(3.0, 0.0),
        point(3.0, 3.0),
        point(2.0, 3.0),
        point(2.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 3.0),
        point(0.0, 3.0),
    ])
    .unwrap();

    assert!(point_in_polygon(&point(0.5, 2.0), &polygon));
    assert!(point_in_polygon(&point(2.5, 2.0), &polygon));
    assert!(!point_in_polygon(&point(1.5, 2.0), &polygon));
}

#[test]
fn open_polyline_contains_nothing() {
    use crate::geom::point;

    let polyline =
        Polyline::open(vec![point(0.0, 0.0), point(2.0, 0.0), point(2.0, 2.0)]).unwrap();
    assert!(!point_in_polygon(&point(1.5, 0.5), &polyline));
}

#[test]
fn nested_circles() {
    use crate::geom::point;

    let small = Circle::new(point(0.5, 0.0), 1.0).unwrap();
    let big = Circle::new(point(0.0, 0.0), 2.0).unwrap();

    assert!(circle_in_circle(&small, &big));
    assert!(!circle_in_circle(&big, &small));

    // Internally tangent circles are not strictly inside.
    let tangent = Circle::new(point(1.0, 0.0), 1.0).unwrap();
    assert!(!circle_in_circle(&tangent, &big));
}

#[test]
fn shapes_in_rect() {
    use crate::geom::point;
    use crate::geom::Segment;

    let outer = Shape::Rect(FRect::from_coords(0.0, 0.0, 4.0, 4.0).unwrap());

    let seg = Shape::Segment(Segment::new(point(1.0, 1.0), point(3.0, 2.0)).unwrap());
    assert!(is_inside(&seg, &outer));

    let poking_out = Shape::Segment(Segment::new(point(1.0, 1.0), point(5.0, 2.0)).unwrap());
    assert!(!is_inside(&poking_out, &outer));

    let inner = Shape::Rect(FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap());
    assert!(is_inside(&inner, &outer));
    assert!(!is_inside(&outer, &inner));

    // Sharing a boundary edge is not strict containment.
    let flush = Shape::Rect(FRect::from_coords(0.0, 1.0, 2.0, 2.0).unwrap());
    assert!(!is_inside(&flush, &outer));
}

#[test]
fn line_is_never_inside() {
    use crate::geom::HLine;

    let line = Shape::Line(HLine::horizontal(1.0));
    let outer = Shape::Rect(FRect::from_coords(0.0, 0.0, 4.0, 4.0).unwrap());
    assert!(!is_inside(&line, &outer));
}

#[test]
fn circle_inside_ellipse() {
    use crate::geom::point;

    let ellipse = Ellipse::new(point(0.0f64, 0.0), 4.0, 2.0, 0.0).unwrap();

    let nested = Circle::new(point(0.5, 0.0), 0.5).unwrap();
    let crossing = Circle::new(point(3.5, 0.0), 1.0).unwrap();
    let tangent = Circle::new(point(0.0, 0.0), 2.0).unwrap();

    assert!(circle_in_ellipse(&nested, &ellipse));
    assert!(!circle_in_ellipse(&crossing, &ellipse));
    assert!(!circle_in_ellipse(&tangent, &ellipse));

    assert!(is_inside(&Shape::Circle(nested), &Shape::Ellipse(ellipse)));

    // The major axis follows the rotation.
    let tall = Ellipse::new(point(0.0f64, 0.0), 4.0, 2.0, core::f64::consts::FRAC_PI_2).unwrap();
    assert!(circle_in_ellipse(
        &Circle::new(point(0.0, 2.0), 0.5).unwrap(),
        &tall
    ));
}

#[test]
fn circle_in_concave_polygon() {
    use crate::geom::point;

    let polygon = square(4.0);
    let inside = Circle::new(point(2.0, 2.0), 1.0).unwrap();
    let crossing = Circle::new(point(2.0, 2.0), 3.0).unwrap();
    // Swallows the polygon whole; the center is inside but the disk
    // covers every edge.
    let swallowing = Circle::new(point(2.0, 2.0), 10.0).unwrap();

    assert!(circle_in_polygon(&inside, &polygon));
    assert!(!circle_in_polygon(&crossing, &polygon));
    assert!(!circle_in_polygon(&swallowing, &polygon));
}
