//! Vertex minimization: dropping insignificant polyline vertices.
//!
//! A vertex is insignificant when the chosen [`Metric`], evaluated over
//! the vertex and its two neighbors, falls below the caller's tolerance.
//! Removal repeats until the polyline is stable, with wraparound on
//! closed polygons, and never reduces a closed polygon below three
//! vertices or an open polyline below two.

use crate::geom::utils::points_coincide;
use crate::geom::{Point, Polyline, Scalar};

/// How the significance of a vertex is measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Perpendicular distance from the vertex to the chord joining its
    /// neighbors.
    Distance,
    /// [`Metric::Distance`] divided by the chord length.
    RelativeDistance,
    /// Turning angle at the vertex, in radians.
    Angle,
    /// Area of the triangle formed with the two neighbors.
    Area,
}

impl Metric {
    // The chord is never degenerate: callers skip coincident neighbors.
    fn measure<S: Scalar>(self, prev: &Point<S>, vertex: &Point<S>, next: &Point<S>) -> S {
        let chord = *next - *prev;
        let chord_length = chord.length();
        let cross = (*vertex - *prev).cross(chord).abs();

        match self {
            Metric::Distance => cross / chord_length,
            Metric::RelativeDistance => cross / (chord_length * chord_length),
            Metric::Angle => {
                let incoming = *vertex - *prev;
                let outgoing = *next - *vertex;
                incoming.angle_to(outgoing).radians.abs()
            }
            Metric::Area => cross * S::HALF,
        }
    }
}

/// Returns a copy of the polyline with insignificant vertices removed.
pub fn minimize<S: Scalar>(polyline: &Polyline<S>, metric: Metric, tolerance: S) -> Polyline<S> {
    let floor = if polyline.is_closed() { 3 } else { 2 };
    let mut points: Vec<Point<S>> = polyline.points().to_vec();

    let mut changed = true;
    while changed && points.len() > floor {
        changed = false;

        let mut i = 0;
        while i < points.len() && points.len() > floor {
            let n = points.len();
            // Open polylines keep their endpoints.
            if !polyline.is_closed() && (i == 0 || i == n - 1) {
                i += 1;
                continue;
            }

            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            // Removal must not create two coincident consecutive points.
            if points_coincide(&prev, &next) {
                i += 1;
                continue;
            }

            if metric.measure(&prev, &points[i], &next) < tolerance {
                points.remove(i);
                changed = true;
            } else {
                i += 1;
            }
        }
    }

    Polyline::unchecked(points, polyline.is_closed())
}

#[test]
fn collinear_vertex_is_removed() {
    use crate::geom::point;

    let polyline = Polyline::open(vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
    ])
    .unwrap();

    let minimized = minimize(&polyline, Metric::Distance, 1e-6);
    assert_eq!(
        minimized.points(),
        &[point(0.0, 0.0), point(2.0, 0.0), point(2.0, 2.0)]
    );
}

#[test]
fn significant_vertices_survive() {
    use crate::geom::point;

    let polyline = Polyline::open(vec![
        point(0.0, 0.0),
        point(1.0, 0.5),
        point(2.0, 0.0),
        point(2.0, 2.0),
    ])
    .unwrap();

    let minimized = minimize(&polyline, Metric::Distance, 0.1);
    assert_eq!(minimized.len(), 4);
}

#[test]
fn closed_polygon_wraps_around() {
    use crate::geom::point;

    // The near-collinear vertex sits across the seam, between the last
    // and the first true corner.
    let polygon = Polyline::closed(vec![
        point(1.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
        point(0.0, 0.0),
    ])
    .unwrap();

    let minimized = minimize(&polygon, Metric::Distance, 1e-6);
    assert!(minimized.is_closed());
    assert_eq!(minimized.len(), 4);
}

#[test]
fn never_reduced_below_the_floor() {
    use crate::geom::point;

    let triangle = Polyline::closed(vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(0.5, 0.01),
    ])
    .unwrap();

    // A huge tolerance would remove every vertex if it could.
    let minimized = minimize(&triangle, Metric::Area, 1e9);
    assert_eq!(minimized.len(), 3);

    let open = Polyline::open(vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.1)]).unwrap();
    let minimized = minimize(&open, Metric::Angle, 10.0);
    assert_eq!(minimized.len(), 2);
}

#[test]
fn angle_metric() {
    use crate::geom::point;

    let polyline = Polyline::open(vec![
        point(0.0, 0.0),
        point(1.0, 0.02),
        point(2.0, 0.0),
        point(2.0, 2.0),
    ])
    .unwrap();

    // The first interior vertex turns by well under 0.1 radians, the
    // right-angle corner stays.
    let minimized = minimize(&polyline, Metric::Angle, 0.1);
    assert_eq!(
        minimized.points(),
        &[point(0.0, 0.0), point(2.0, 0.0), point(2.0, 2.0)]
    );
}
