//! End to end scenarios exercising the kernel through the facade.

use dual2d::algorithms::intersection::{self, Intersect};
use dual2d::algorithms::{aabb, containment, hull, rect_ops, splitter};
use dual2d::geom::utils::points_coincide;
use dual2d::geom::{point, Circle, FRect, HLine, Polyline, Segment, Shape};

#[test]
fn tangent_circles_touch_at_one_point() {
    let c1 = Circle::new(point(0.0, 0.0), 1.0).unwrap();
    let c2 = Circle::new(point(2.0, 0.0), 1.0).unwrap();

    let result = c1.intersect(&c2);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(1.0, 0.0)));
}

#[test]
fn overlapping_rects_boundary_and_area() {
    let a = FRect::from_coords(0.0, 0.0, 2.0, 2.0).unwrap();
    let b = FRect::from_coords(1.0, 1.0, 3.0, 3.0).unwrap();

    let boundary = a.intersect(&b);
    assert_eq!(boundary.count(), 2);
    assert!(boundary
        .points()
        .iter()
        .any(|p| points_coincide(p, &point(2.0, 1.0))));
    assert!(boundary
        .points()
        .iter()
        .any(|p| points_coincide(p, &point(1.0, 2.0))));

    let overlap = rect_ops::intersect_area(&a, &b).unwrap();
    assert_eq!(overlap, FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap());
}

#[test]
fn corner_touching_rects_intersect_without_area() {
    let a = FRect::from_coords(0.0, 0.0, 1.0, 1.0).unwrap();
    let b = FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap();

    // One structural boundary point, yet no overlap region. Both halves
    // of this behavior are relied upon downstream.
    let boundary = a.intersect(&b);
    assert_eq!(boundary.count(), 1);
    assert!(points_coincide(&boundary.points()[0], &point(1.0, 1.0)));
    assert!(rect_ops::intersect_area(&a, &b).is_none());
}

#[test]
fn crossing_diagonals() {
    let d1 = Segment::new(point(0.0, 0.0), point(2.0, 2.0)).unwrap();
    let d2 = Segment::new(point(0.0, 2.0), point(2.0, 0.0)).unwrap();

    let result = d1.intersect(&d2);
    assert_eq!(result.count(), 1);
    assert!(points_coincide(&result.points()[0], &point(1.0, 1.0)));
}

#[test]
fn intersection_is_symmetric() {
    let circle = Circle::new(point(1.0, 1.0), 2.0).unwrap();
    let rect = FRect::from_coords(0.0, 0.0, 4.0, 4.0).unwrap();
    let segment = Segment::new(point(-2.0, 1.0), point(4.0, 1.0)).unwrap();
    let line = HLine::horizontal(1.5);
    let polygon = Polyline::closed(vec![
        point(0.0, 0.0),
        point(3.0, 0.0),
        point(3.0, 3.0),
        point(0.0, 3.0),
    ])
    .unwrap();

    assert_eq!(circle.intersect(&rect), rect.intersect(&circle));
    assert_eq!(circle.intersect(&segment), segment.intersect(&circle));
    assert_eq!(circle.intersect(&line), line.intersect(&circle));
    assert_eq!(rect.intersect(&segment), segment.intersect(&rect));
    assert_eq!(rect.intersect(&polygon), polygon.intersect(&rect));
    assert_eq!(line.intersect(&polygon), polygon.intersect(&line));
    assert_eq!(segment.intersect(&polygon), polygon.intersect(&segment));
}

#[test]
fn square_split_by_horizontal_line() {
    let square = Polyline::closed(vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();

    let parts = splitter::split_with_line(&square, &HLine::horizontal(1.0));
    assert_eq!(parts.len(), 2);

    let bottom = Polyline::closed(vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 1.0),
        point(0.0, 1.0),
    ])
    .unwrap();
    let top = Polyline::closed(vec![
        point(0.0, 1.0),
        point(2.0, 1.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();
    assert!(parts.contains(&bottom));
    assert!(parts.contains(&top));
}

#[test]
fn hull_drops_the_interior_point() {
    let points = [
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(1.0, 1.0),
        point(0.0, 2.0),
    ];

    let hull = hull::convex_hull(&points);
    assert_eq!(hull.len(), 4);
    assert!(!hull.iter().any(|p| points_coincide(p, &point(1.0, 1.0))));
    assert_eq!(hull::convex_hull(&hull), hull);
}

#[test]
fn containment_through_shapes() {
    let outer = Shape::Rect(FRect::from_coords(0.0, 0.0, 10.0, 10.0).unwrap());
    let inner = Shape::Circle(Circle::new(point(5.0, 5.0), 2.0).unwrap());
    let crossing = Shape::Circle(Circle::new(point(5.0, 5.0), 7.0).unwrap());

    assert!(containment::is_inside(&inner, &outer));
    assert!(!containment::is_inside(&outer, &inner));
    assert!(!containment::is_inside(&crossing, &outer));
}

#[test]
fn bounding_rect_over_a_scene() {
    let shapes = vec![
        Shape::Circle(Circle::new(point(0.0, 0.0), 1.0).unwrap()),
        Shape::Segment(Segment::new(point(4.0, -3.0), point(5.0, 2.0)).unwrap()),
        Shape::Rect(FRect::from_coords(-2.0, 0.0, 0.0, 1.0).unwrap()),
    ];

    let rect = aabb::bounding_rect_of_all(shapes.iter()).unwrap();
    assert_eq!(rect.min(), point(-2.0, -3.0));
    assert_eq!(rect.max(), point(5.0, 2.0));
}

#[test]
fn unit_square_sanity() {
    let square = FRect::from_coords(0.0, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(square.area(), 1.0);
    assert_eq!(square.length(), 4.0);
    assert_eq!(square.center(), point(0.5, 0.5));
}

#[test]
fn shape_level_intersection() {
    let a = Shape::Circle(Circle::new(point(0.0, 0.0), 1.0).unwrap());
    let b = Shape::Line(HLine::vertical(0.0));

    let result = intersection::shape_shape(&a, &b);
    assert_eq!(result.count(), 2);
}
