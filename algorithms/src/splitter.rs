//! Splitting polylines and polygons with an infinite line.

use crate::geom::utils::points_coincide;
use crate::geom::{HLine, Point, Polyline, Scalar};

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    Negative,
    On,
    Positive,
}

fn classify<S: Scalar>(line: &HLine<S>, p: &Point<S>) -> Side {
    let d = line.signed_distance_to_point(p);
    if d.abs() <= S::null_distance() {
        Side::On
    } else if d > S::ZERO {
        Side::Positive
    } else {
        Side::Negative
    }
}

/// Splits a polyline along an infinite line.
///
/// Every crossing point is inserted into the vertex sequence, then the
/// sequence is partitioned into maximal runs lying strictly on one side
/// of the line; vertices exactly on the line belong to both adjacent
/// runs. Outputs mirror the input's open/closed-ness. An input the line
/// does not cross is returned whole as the sole output.
pub fn split_with_line<S: Scalar>(polyline: &Polyline<S>, line: &HLine<S>) -> Vec<Polyline<S>> {
    if polyline.len() < 2 {
        return vec![polyline.clone()];
    }

    // Subdivide: vertices keep their side, edges with endpoints on
    // strictly opposite sides gain an interior vertex on the line.
    let mut subdivided: Vec<(Point<S>, Side)> = Vec::with_capacity(polyline.len() + 2);
    let points = polyline.points();
    let n = points.len();
    let num_edges = polyline.num_edges();

    for i in 0..n {
        let p = points[i];
        let side = classify(line, &p);
        subdivided.push((p, side));

        if i >= num_edges {
            break;
        }
        let q = points[(i + 1) % n];
        let q_side = classify(line, &q);
        if crosses(side, q_side) {
            if let Some(x) = edge_crossing(&p, &q, line) {
                subdivided.push((x, Side::On));
            }
        }
    }

    let sides_present = |s: Side| subdivided.iter().any(|&(_, side)| side == s);
    if !sides_present(Side::Positive) || !sides_present(Side::Negative) {
        return vec![polyline.clone()];
    }

    if polyline.is_closed() {
        split_closed(subdivided)
    } else {
        split_open(subdivided)
    }
}

fn crosses(a: Side, b: Side) -> bool {
    (a == Side::Positive && b == Side::Negative) || (a == Side::Negative && b == Side::Positive)
}

fn edge_crossing<S: Scalar>(p: &Point<S>, q: &Point<S>, line: &HLine<S>) -> Option<Point<S>> {
    let edge = HLine::from_points(*p, *q).ok()?;
    line.meet(&edge)
        .and_then(|x| x.to_point())
        .ok()
        .filter(|x| !points_coincide(x, p) && !points_coincide(x, q))
}

fn split_closed<S: Scalar>(mut subdivided: Vec<(Point<S>, Side)>) -> Vec<Polyline<S>> {
    // Rotate so the cycle starts at an on-line vertex, making every run
    // a contiguous slice delimited by on-line vertices.
    let first_on = subdivided.iter().position(|&(_, s)| s == Side::On);
    let first_on = match first_on {
        Some(i) => i,
        // Crossing without any on-line vertex cannot happen, every
        // crossing edge received one.
        None => return Vec::new(),
    };
    subdivided.rotate_left(first_on);

    let mut output = Vec::new();
    let n = subdivided.len();
    let mut start = 0;
    while start < n {
        let mut run = vec![subdivided[start].0];
        let mut has_interior = false;
        let mut i = start + 1;
        loop {
            let (p, side) = subdivided[i % n];
            run.push(p);
            if side != Side::On {
                has_interior = true;
            } else {
                break;
            }
            i += 1;
        }

        // Two adjacent on-line vertices delimit a sliver lying on the
        // line itself, not a region.
        if has_interior && run.len() >= 3 {
            output.push(Polyline::closed_unchecked(run));
        }

        start = i;
    }

    output
}

fn split_open<S: Scalar>(subdivided: Vec<(Point<S>, Side)>) -> Vec<Polyline<S>> {
    let mut output = Vec::new();
    let mut run: Vec<Point<S>> = Vec::new();
    let mut has_interior = false;

    for &(p, side) in &subdivided {
        run.push(p);
        if side != Side::On {
            has_interior = true;
            continue;
        }

        if has_interior && run.len() >= 2 {
            output.push(Polyline::unchecked(run.clone(), false));
        }
        // The on-line vertex also starts the next run.
        run.clear();
        run.push(p);
        has_interior = false;
    }

    if has_interior && run.len() >= 2 {
        output.push(Polyline::unchecked(run, false));
    }

    output
}

#[test]
fn square_split_in_two() {
    use crate::geom::point;

    let square = Polyline::closed(vec![
        point(0.0f64, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();

    let parts = split_with_line(&square, &HLine::horizontal(1.0));
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| p.is_closed()));

    let top = Polyline::closed(vec![
        point(0.0, 1.0),
        point(2.0, 1.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();
    let bottom = Polyline::closed(vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 1.0),
        point(0.0, 1.0),
    ])
    .unwrap();

    assert!(parts.contains(&top));
    assert!(parts.contains(&bottom));
    assert!((parts[0].area() + parts[1].area() - square.area()).abs() < 1e-9);
}

#[test]
fn line_missing_the_polygon() {
    use crate::geom::point;

    let square = Polyline::closed(vec![
        point(0.0f64, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();

    let parts = split_with_line(&square, &HLine::horizontal(5.0));
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], square);
}

#[test]
fn split_through_a_vertex() {
    use crate::geom::point;

    let diamond = Polyline::closed(vec![
        point(1.0f64, 0.0),
        point(2.0, 1.0),
        point(1.0, 2.0),
        point(0.0, 1.0),
    ])
    .unwrap();

    let parts = split_with_line(&diamond, &HLine::horizontal(1.0));
    assert_eq!(parts.len(), 2);
    for part in &parts {
        assert_eq!(part.len(), 3);
        assert!((part.area() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn open_polyline_split() {
    use crate::geom::point;

    let zigzag = Polyline::open(vec![
        point(0.0f64, 0.0),
        point(1.0, 2.0),
        point(2.0, 0.0),
        point(3.0, 2.0),
    ])
    .unwrap();

    let parts = split_with_line(&zigzag, &HLine::horizontal(1.0));
    assert_eq!(parts.len(), 4);
    assert!(parts.iter().all(|p| !p.is_closed()));
    let lengths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
    assert_eq!(lengths, [2, 3, 3, 2]);
}

#[test]
fn edge_lying_on_the_line() {
    use crate::geom::point;

    // The bottom edge lies on the cutting line; only the part above
    // remains a region.
    let square = Polyline::closed(vec![
        point(0.0f64, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();

    let parts = split_with_line(&square, &HLine::horizontal(0.0));
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], square);
}
