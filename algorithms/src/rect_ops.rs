//! Area operations on axis-aligned rectangles: overlap, union outline
//! and intersection-over-union.

use std::collections::HashMap;

use crate::geom::{point, FRect, Point, Polyline, Scalar};

/// Returns the axis-aligned overlap of two rectangles, or `None` when
/// they do not overlap with positive area.
///
/// Rectangles that merely touch along an edge or at a corner have
/// boundary intersection points but no overlap area; this asymmetry is
/// deliberate and kept stable for callers that rely on it.
pub fn intersect_area<S: Scalar>(a: &FRect<S>, b: &FRect<S>) -> Option<FRect<S>> {
    let min = point(a.min().x.max(b.min().x), a.min().y.max(b.min().y));
    let max = point(a.max().x.min(b.max().x), a.max().y.min(b.max().y));

    // Disjoint rectangles invert the interval; `FRect::new` would then
    // canonicalize the corners into a rectangle that spans the gap.
    let thr = S::null_distance();
    if max.x - min.x <= thr || max.y - min.y <= thr {
        return None;
    }

    FRect::new(min, max).ok()
}

/// Returns the outline of the union of two rectangles as a closed,
/// counter-clockwise polygon.
///
/// Disjoint rectangles produce an empty polyline, and so does a single
/// shared corner: the union would be pinched there rather than a simple
/// region.
pub fn union_area<S: Scalar>(a: &FRect<S>, b: &FRect<S>) -> Polyline<S> {
    let threshold = S::null_distance();
    let overlap_x = a.max().x.min(b.max().x) - a.min().x.max(b.min().x);
    let overlap_y = a.max().y.min(b.max().y) - a.min().y.max(b.min().y);

    let disjoint = overlap_x < -threshold || overlap_y < -threshold;
    let corner_touch = overlap_x <= threshold && overlap_y <= threshold;
    if disjoint || corner_touch {
        return Polyline::closed_unchecked(Vec::new());
    }

    let xs = grid_coords([a.min().x, a.max().x, b.min().x, b.max().x]);
    let ys = grid_coords([a.min().y, a.max().y, b.min().y, b.max().y]);

    // Cell (i, j) spans xs[i]..xs[i+1] × ys[j]..ys[j+1]; it is covered
    // when its center lies in either rectangle.
    let covered = |i: isize, j: isize| -> bool {
        if i < 0 || j < 0 || i + 1 >= xs.len() as isize || j + 1 >= ys.len() as isize {
            return false;
        }
        let (i, j) = (i as usize, j as usize);
        let center = point(
            (xs[i] + xs[i + 1]) * S::HALF,
            (ys[j] + ys[j + 1]) * S::HALF,
        );
        in_closed_rect(a, &center) || in_closed_rect(b, &center)
    };

    // Directed boundary edges between grid vertices, region on the left,
    // so the walk below goes counter-clockwise.
    let mut next: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
    for i in 0..xs.len() - 1 {
        for j in 0..ys.len() - 1 {
            if !covered(i as isize, j as isize) {
                continue;
            }
            let (i1, j1) = (i + 1, j + 1);
            if !covered(i as isize, j as isize - 1) {
                next.insert((i, j), (i1, j));
            }
            if !covered(i as isize, j as isize + 1) {
                next.insert((i1, j1), (i, j1));
            }
            if !covered(i as isize - 1, j as isize) {
                next.insert((i, j1), (i, j));
            }
            if !covered(i as isize + 1, j as isize) {
                next.insert((i1, j), (i1, j1));
            }
        }
    }

    let start = match next.keys().min() {
        Some(v) => *v,
        None => return Polyline::closed_unchecked(Vec::new()),
    };

    // Walk the loop from the lexicographically smallest vertex, which is
    // always a corner, skipping vertices interior to a straight run.
    let mut outline: Vec<(usize, usize)> = Vec::new();
    let mut current = start;
    loop {
        let following = next[&current];
        let straight_through = outline.last().map_or(false, |prev| {
            edge_direction(*prev, current) == edge_direction(current, following)
        });
        if !straight_through {
            outline.push(current);
        }
        current = following;
        if current == start {
            break;
        }
    }

    let points: Vec<Point<S>> = outline
        .into_iter()
        .map(|(i, j)| point(xs[i], ys[j]))
        .collect();

    Polyline::closed_unchecked(points)
}

/// Intersection-over-union of two rectangles, zero when they do not
/// overlap.
pub fn iou<S: Scalar>(a: &FRect<S>, b: &FRect<S>) -> S {
    match intersect_area(a, b) {
        Some(overlap) => overlap.area() / (a.area() + b.area() - overlap.area()),
        None => S::ZERO,
    }
}

fn grid_coords<S: Scalar>(mut coords: [S; 4]) -> Vec<S> {
    coords.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    let mut out: Vec<S> = Vec::with_capacity(4);
    for c in coords {
        if out.last().map_or(true, |last| c - *last > S::null_distance()) {
            out.push(c);
        }
    }

    out
}

fn in_closed_rect<S: Scalar>(rect: &FRect<S>, p: &Point<S>) -> bool {
    p.x >= rect.min().x && p.x <= rect.max().x && p.y >= rect.min().y && p.y <= rect.max().y
}

fn edge_direction(from: (usize, usize), to: (usize, usize)) -> (isize, isize) {
    (
        (to.0 as isize - from.0 as isize).signum(),
        (to.1 as isize - from.1 as isize).signum(),
    )
}

#[test]
fn overlap_rect() {
    let a = FRect::from_coords(0.0f64, 0.0, 2.0, 2.0).unwrap();
    let b = FRect::from_coords(1.0, 1.0, 3.0, 3.0).unwrap();

    let overlap = intersect_area(&a, &b).unwrap();
    assert_eq!(overlap, FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap());
}

#[test]
fn disjoint_rects_do_not_overlap() {
    let a = FRect::from_coords(0.0f64, 0.0, 2.0, 2.0).unwrap();
    let right = FRect::from_coords(5.0, 0.0, 6.0, 1.0).unwrap();
    let above = FRect::from_coords(0.0, 5.0, 2.0, 6.0).unwrap();
    let far = FRect::from_coords(10.0, 10.0, 11.0, 11.0).unwrap();

    assert!(intersect_area(&a, &right).is_none());
    assert!(intersect_area(&a, &above).is_none());
    assert!(intersect_area(&a, &far).is_none());
}

#[test]
fn corner_touch_has_no_area() {
    let a = FRect::from_coords(0.0f64, 0.0, 1.0, 1.0).unwrap();
    let b = FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap();

    // The boundaries meet at (1, 1) but the overlap is degenerate.
    assert!(intersect_area(&a, &b).is_none());
    assert!(union_area(&a, &b).is_empty());
}

#[test]
fn union_of_overlapping_rects() {
    use crate::geom::point;

    let a = FRect::from_coords(0.0f64, 0.0, 2.0, 2.0).unwrap();
    let b = FRect::from_coords(1.0, 1.0, 3.0, 3.0).unwrap();

    let outline = union_area(&a, &b);
    assert!(outline.is_closed());
    assert_eq!(outline.len(), 8);
    assert!((outline.area() - 7.0).abs() < 1e-9);
    assert!(outline.is_ccw());

    let expected = Polyline::closed(vec![
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 1.0),
        point(3.0, 1.0),
        point(3.0, 3.0),
        point(1.0, 3.0),
        point(1.0, 2.0),
        point(0.0, 2.0),
    ])
    .unwrap();
    assert_eq!(outline, expected);
}

#[test]
fn union_of_edge_touching_rects() {
    let a = FRect::from_coords(0.0f64, 0.0, 1.0, 2.0).unwrap();
    let b = FRect::from_coords(1.0, 0.0, 3.0, 2.0).unwrap();

    let outline = union_area(&a, &b);
    // The shared edge disappears, the union is a single rectangle.
    assert_eq!(outline.len(), 4);
    assert!((outline.area() - 6.0).abs() < 1e-9);
}

#[test]
fn union_of_nested_rects() {
    let outer = FRect::from_coords(0.0f64, 0.0, 4.0, 4.0).unwrap();
    let inner = FRect::from_coords(1.0, 1.0, 2.0, 2.0).unwrap();

    let outline = union_area(&outer, &inner);
    assert_eq!(outline.len(), 4);
    assert!((outline.area() - 16.0).abs() < 1e-9);
}

#[test]
fn union_of_disjoint_rects() {
    let a = FRect::from_coords(0.0f64, 0.0, 1.0, 1.0).unwrap();
    let b = FRect::from_coords(5.0, 0.0, 6.0, 1.0).unwrap();

    assert!(union_area(&a, &b).is_empty());
}

#[test]
fn iou_values() {
    let a = FRect::from_coords(0.0f64, 0.0, 2.0, 2.0).unwrap();
    let b = FRect::from_coords(1.0, 1.0, 3.0, 3.0).unwrap();
    let far = FRect::from_coords(10.0, 10.0, 11.0, 11.0).unwrap();

    // 1 of overlap over 7 of union.
    assert!((iou(&a, &b) - 1.0 / 7.0).abs() < 1e-9);
    assert_eq!(iou(&a, &far), 0.0);
    assert!((iou(&a, &a) - 1.0).abs() < 1e-9);
}
