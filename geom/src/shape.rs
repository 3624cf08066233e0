//! A closed sum type over the shape kinds.
//!
//! The shape-kind set is fixed, so heterogeneous collections dispatch through
//! exhaustive pattern matching rather than trait objects; a missing case is a
//! compile error.

use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{Box2D, Circle, Ellipse, FRect, GeomError, HLine, Homography, Point, Polyline};

/// Any of the supported primitives, for heterogeneous collections.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Shape<S> {
    Point(Point<S>),
    Line(HLine<S>),
    Segment(Segment<S>),
    Rect(FRect<S>),
    Circle(Circle<S>),
    Ellipse(Ellipse<S>),
    Polyline(Polyline<S>),
}

impl<S: Scalar> Shape<S> {
    /// The enclosed area. Zero for points, lines, segments and open
    /// polylines.
    pub fn area(&self) -> S {
        match self {
            Shape::Point(_) | Shape::Line(_) | Shape::Segment(_) => S::ZERO,
            Shape::Rect(r) => r.area(),
            Shape::Circle(c) => c.area(),
            Shape::Ellipse(e) => e.area(),
            Shape::Polyline(p) => p.area(),
        }
    }

    /// The boundary length (perimeter, circumference, or polyline length).
    /// Zero for points; a line has no finite length and reports zero as
    /// well.
    pub fn length(&self) -> S {
        match self {
            Shape::Point(_) | Shape::Line(_) => S::ZERO,
            Shape::Segment(s) => s.length(),
            Shape::Rect(r) => r.length(),
            Shape::Circle(c) => c.length(),
            Shape::Ellipse(e) => e.perimeter(),
            Shape::Polyline(p) => p.length(),
        }
    }

    /// Applies a homography.
    ///
    /// A rectangle loses its axis alignment and becomes a closed polyline; a
    /// circle maps to an ellipse. Fails only for lines and ellipses under a
    /// singular matrix.
    pub fn transformed(&self, h: &Homography<S>) -> Result<Shape<S>, GeomError> {
        Ok(match self {
            Shape::Point(p) => Shape::Point(h.transform_point(*p)),
            Shape::Line(l) => Shape::Line(h.transform_line(l)?),
            Shape::Segment(s) => Shape::Segment(s.transformed(h)),
            Shape::Rect(r) => Shape::Polyline(r.to_polyline().transformed(h)),
            Shape::Circle(c) => {
                let e = Ellipse::new(c.center(), c.radius(), c.radius(), S::ZERO)?;
                Shape::Ellipse(e.transformed(h)?)
            }
            Shape::Ellipse(e) => Shape::Ellipse(e.transformed(h)?),
            Shape::Polyline(p) => Shape::Polyline(p.transformed(h)),
        })
    }

    /// The shape's defining points, used by external consumers to draw or
    /// rebuild it. Empty for a line (a line has no distinguished points).
    pub fn points(&self) -> Vec<Point<S>> {
        match self {
            Shape::Point(p) => vec![*p],
            Shape::Line(_) => Vec::new(),
            Shape::Segment(s) => {
                let (a, b) = s.points();
                vec![a, b]
            }
            Shape::Rect(r) => r.corners().to_vec(),
            Shape::Circle(c) => vec![c.center()],
            Shape::Ellipse(e) => vec![e.center()],
            Shape::Polyline(p) => p.points().to_vec(),
        }
    }

    /// The shape's boundary segments. Empty for points, lines and conics.
    pub fn segments(&self) -> Vec<Segment<S>> {
        match self {
            Shape::Point(_) | Shape::Line(_) | Shape::Circle(_) | Shape::Ellipse(_) => Vec::new(),
            Shape::Segment(s) => vec![*s],
            Shape::Rect(r) => r.edges().to_vec(),
            Shape::Polyline(p) => p.segments(),
        }
    }

    /// The smallest axis-aligned box containing the shape.
    ///
    /// Fails for shapes with no finite, non-degenerate box (points, lines,
    /// empty polylines).
    pub fn bounding_box(&self) -> Result<Box2D<S>, GeomError> {
        match self {
            Shape::Point(_) => Err(GeomError::DegenerateShape(
                "a point has a zero-area bounding box",
            )),
            Shape::Line(_) => Err(GeomError::DegenerateShape(
                "a line has no finite bounding box",
            )),
            Shape::Segment(s) => Ok(s.bounding_box()),
            Shape::Rect(r) => Ok(r.bounding_box()),
            Shape::Circle(c) => Ok(c.bounding_box()),
            Shape::Ellipse(e) => Ok(e.bounding_box()),
            Shape::Polyline(p) => p.bounding_box(),
        }
    }
}

// Line and polyline equality need the comparison thresholds, so this
// cannot be derived (the derive would only ask for `S: PartialEq`).
impl<S: Scalar> PartialEq for Shape<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Point(a), Shape::Point(b)) => a == b,
            (Shape::Line(a), Shape::Line(b)) => a == b,
            (Shape::Segment(a), Shape::Segment(b)) => a == b,
            (Shape::Rect(a), Shape::Rect(b)) => a == b,
            (Shape::Circle(a), Shape::Circle(b)) => a == b,
            (Shape::Ellipse(a), Shape::Ellipse(b)) => a == b,
            (Shape::Polyline(a), Shape::Polyline(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn equality_is_variant_wise() {
    let l1 = Shape::Line(HLine::from_points(pt(0.0f64, 0.0), pt(2.0, 2.0)).unwrap());
    let l2 = Shape::Line(HLine::from_points(pt(1.0f64, 1.0), pt(3.0, 3.0)).unwrap());
    assert_eq!(l1, l2);

    let p1 = Shape::Polyline(
        Polyline::closed(vec![pt(0.0f64, 0.0), pt(2.0, 0.0), pt(2.0, 2.0)]).unwrap(),
    );
    let p2 = Shape::Polyline(
        Polyline::closed(vec![pt(2.0, 2.0), pt(0.0, 0.0), pt(2.0, 0.0)]).unwrap(),
    );
    assert_eq!(p1, p2);

    let c = Shape::Circle(Circle::new(pt(0.0, 0.0), 1.0).unwrap());
    assert_ne!(l1, c);
}

#[test]
fn dispatch() {
    let shapes: Vec<Shape<f64>> = vec![
        Shape::Point(pt(1.0, 1.0)),
        Shape::Segment(Segment::new(pt(0.0, 0.0), pt(3.0, 4.0)).unwrap()),
        Shape::Rect(FRect::from_coords(0.0, 0.0, 2.0, 1.0).unwrap()),
        Shape::Circle(Circle::new(pt(0.0, 0.0), 1.0).unwrap()),
    ];

    let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
    assert_eq!(areas[0], 0.0);
    assert_eq!(areas[1], 0.0);
    assert_eq!(areas[2], 2.0);
    assert!((areas[3] - core::f64::consts::PI).abs() < 1e-12);

    assert_eq!(shapes[1].length(), 5.0);
    assert_eq!(shapes[2].segments().len(), 4);
    assert!(shapes[0].bounding_box().is_err());
}

#[test]
fn transform_changes_kind_where_needed() {
    let h = {
        let mut h = Homography::identity();
        h.add_rotation(0.5f64);
        h
    };

    let r = Shape::Rect(FRect::from_coords(0.0, 0.0, 2.0, 1.0).unwrap());
    match r.transformed(&h).unwrap() {
        Shape::Polyline(p) => {
            assert!(p.is_closed());
            assert_eq!(p.len(), 4);
            assert!((p.area() - 2.0).abs() < 1e-9);
        }
        other => panic!("expected a polyline, got {:?}", other),
    }

    let c = Shape::Circle(Circle::new(pt(0.0, 0.0), 1.0).unwrap());
    match c.transformed(&h).unwrap() {
        Shape::Ellipse(e) => {
            assert!((e.major() - 1.0).abs() < 1e-9);
            assert!((e.minor() - 1.0).abs() < 1e-9);
        }
        other => panic!("expected an ellipse, got {:?}", other),
    }
}
