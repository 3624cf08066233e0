//! Convex hull computation (Graham scan).

use core::cmp::Ordering;

use crate::geom::utils::{points_coincide, wide_cross};
use crate::geom::{Point, Polyline, Scalar};

/// Returns the convex hull of a point set, as a counter-clockwise loop
/// starting from the pivot (lowest y, then lowest x).
///
/// Collinear boundary points are dropped. Inputs with fewer than three
/// distinct points are returned unchanged.
pub fn convex_hull<S: Scalar>(points: &[Point<S>]) -> Vec<Point<S>> {
    let mut unique: Vec<Point<S>> = Vec::with_capacity(points.len());
    for p in points {
        if unique.iter().all(|q| !points_coincide(q, p)) {
            unique.push(*p);
        }
    }

    if unique.len() < 3 {
        return unique;
    }

    let pivot_idx = lowest_point(&unique);
    let pivot = unique.swap_remove(pivot_idx);

    // Polar-angle order around the pivot, nearer point first among
    // collinear candidates so the scan drops it as redundant.
    unique.sort_by(|a, b| {
        let cross = S::from_wide(wide_cross(&pivot, a, b));
        match cross.partial_cmp(&S::ZERO) {
            Some(Ordering::Greater) => Ordering::Less,
            Some(Ordering::Less) => Ordering::Greater,
            _ => {
                let da = (*a - pivot).square_length();
                let db = (*b - pivot).square_length();
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            }
        }
    });

    let mut hull = vec![pivot];
    for p in unique {
        while hull.len() >= 2 {
            let cross = S::from_wide(wide_cross(&hull[hull.len() - 2], &hull[hull.len() - 1], &p));
            // Pop unless the walk makes a strict left turn.
            if cross <= S::null_distance() {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(p);
    }

    hull
}

/// Returns the convex hull of a polyline's vertices as a closed polygon.
///
/// Polylines whose hull degenerates below three vertices are returned
/// unchanged.
pub fn convex_hull_of<S: Scalar>(polyline: &Polyline<S>) -> Polyline<S> {
    let hull = convex_hull(polyline.points());
    if hull.len() < 3 {
        return polyline.clone();
    }

    Polyline::closed_unchecked(hull)
}

fn lowest_point<S: Scalar>(points: &[Point<S>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let q = &points[best];
        if p.y < q.y || (p.y == q.y && p.x < q.x) {
            best = i;
        }
    }

    best
}

#[cfg(test)]
fn assert_same_points<S: Scalar>(actual: &[Point<S>], expected: &[Point<S>]) {
    assert_eq!(actual.len(), expected.len());
    for p in expected {
        assert!(
            actual.iter().any(|q| points_coincide(p, q)),
            "missing point {:?}",
            p
        );
    }
}

#[test]
fn interior_point_is_dropped() {
    use crate::geom::point;

    let points = [
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(1.0, 1.0),
        point(0.0, 2.0),
    ];

    let hull = convex_hull(&points);
    assert_same_points(
        &hull,
        &[
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(2.0, 2.0),
            point(0.0, 2.0),
        ],
    );
}

#[test]
fn hull_is_idempotent() {
    use crate::geom::point;

    let points = [
        point(0.0, 0.0),
        point(4.0, 1.0),
        point(3.0, 3.0),
        point(1.0, 4.0),
        point(2.0, 2.0),
        point(1.0, 1.0),
    ];

    let hull = convex_hull(&points);
    assert_eq!(convex_hull(&hull), hull);
}

#[test]
fn collinear_points_on_an_edge() {
    use crate::geom::point;

    let points = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ];

    let hull = convex_hull(&points);
    assert_same_points(
        &hull,
        &[
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(2.0, 2.0),
            point(0.0, 2.0),
        ],
    );
}

#[test]
fn small_inputs_pass_through() {
    use crate::geom::point;

    let two = [point(0.0, 0.0), point(1.0, 1.0)];
    assert_eq!(convex_hull(&two), two.to_vec());

    let duplicated = [point(0.0, 0.0), point(0.0, 0.0), point(1.0, 1.0)];
    assert_eq!(convex_hull(&duplicated), two.to_vec());
}

#[test]
fn polyline_hull_is_closed() {
    use crate::geom::point;

    let polyline = Polyline::closed(vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(1.0, 0.5),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();

    let hull = convex_hull_of(&polyline);
    assert!(hull.is_closed());
    assert_eq!(hull.len(), 4);
}
