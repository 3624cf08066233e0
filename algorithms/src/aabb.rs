//! Bounding rectangle computation for shapes and groups of shapes.

use crate::geom::{Box2D, FRect, GeomError, Scalar, Shape};

fn to_rect<S: Scalar>(b: Box2D<S>) -> Result<FRect<S>, GeomError> {
    // A zero-area box cannot be represented as a rectangle.
    FRect::new(b.min, b.max).map_err(|_| GeomError::EmptyInput)
}

/// Returns the bounding rectangle of a single shape.
///
/// Fails for shapes without a finite, non-degenerate box (a point or an
/// infinite line).
pub fn bounding_rect<S: Scalar>(shape: &Shape<S>) -> Result<FRect<S>, GeomError> {
    to_rect(shape.bounding_box()?)
}

/// Returns the smallest rectangle containing both shapes.
pub fn bounding_rect_of_pair<S: Scalar>(
    a: &Shape<S>,
    b: &Shape<S>,
) -> Result<FRect<S>, GeomError> {
    to_rect(a.bounding_box()?.union(&b.bounding_box()?))
}

/// Folds the bounding boxes of all shapes in the container.
///
/// A point member extends the union by its own coordinates. Fails with
/// [`GeomError::EmptyInput`] when the container is empty, holds a line,
/// or the union is a degenerate zero-area box.
pub fn bounding_rect_of_all<'l, S, Iter>(shapes: Iter) -> Result<FRect<S>, GeomError>
where
    S: Scalar,
    Iter: IntoIterator<Item = &'l Shape<S>>,
{
    let mut acc: Option<Box2D<S>> = None;
    for shape in shapes {
        let b = match shape {
            Shape::Point(p) => Box2D { min: *p, max: *p },
            other => other.bounding_box().map_err(|_| GeomError::EmptyInput)?,
        };
        acc = Some(match acc {
            Some(prev) => prev.union(&b),
            None => b,
        });
    }

    match acc {
        Some(b) => to_rect(b),
        None => Err(GeomError::EmptyInput),
    }
}

#[test]
fn pair_union() {
    use crate::geom::{point, Circle, Segment};

    let a = Shape::Circle(Circle::new(point(0.0, 0.0), 1.0).unwrap());
    let b = Shape::Segment(Segment::new(point(2.0, 0.0), point(3.0, 4.0)).unwrap());

    let rect = bounding_rect_of_pair(&a, &b).unwrap();
    assert_eq!(rect.min(), point(-1.0, -1.0));
    assert_eq!(rect.max(), point(3.0, 4.0));
}

#[test]
fn empty_container() {
    let shapes: Vec<Shape<f64>> = Vec::new();
    assert_eq!(
        bounding_rect_of_all(shapes.iter()),
        Err(GeomError::EmptyInput)
    );
}

#[test]
fn container_fold() {
    use crate::geom::{point, FRect};

    let shapes = vec![
        Shape::Rect(FRect::from_coords(0.0, 0.0, 1.0, 1.0).unwrap()),
        Shape::Rect(FRect::from_coords(3.0, -1.0, 4.0, 2.0).unwrap()),
    ];

    let rect = bounding_rect_of_all(shapes.iter()).unwrap();
    assert_eq!(rect.min(), point(0.0, -1.0));
    assert_eq!(rect.max(), point(4.0, 2.0));
}

#[test]
fn container_with_point_and_line_members() {
    use crate::geom::{point, FRect, HLine};

    // A point member widens the union like any other shape.
    let shapes = vec![
        Shape::Rect(FRect::from_coords(0.0f64, 0.0, 1.0, 1.0).unwrap()),
        Shape::Point(point(5.0, -2.0)),
    ];
    let rect = bounding_rect_of_all(shapes.iter()).unwrap();
    assert_eq!(rect.min(), point(0.0, -2.0));
    assert_eq!(rect.max(), point(5.0, 1.0));

    // A lone point gives a zero-area union.
    let lone = vec![Shape::Point(point(1.0f64, 1.0))];
    assert_eq!(
        bounding_rect_of_all(lone.iter()),
        Err(GeomError::EmptyInput)
    );

    // A line has no finite box at all.
    let with_line = vec![
        Shape::Rect(FRect::from_coords(0.0f64, 0.0, 1.0, 1.0).unwrap()),
        Shape::Line(HLine::horizontal(0.5)),
    ];
    assert_eq!(
        bounding_rect_of_all(with_line.iter()),
        Err(GeomError::EmptyInput)
    );
}
