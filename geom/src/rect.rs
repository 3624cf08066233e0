//! Axis-aligned rectangles.

use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::utils::min_max;
use crate::{point, Box2D, GeomError, Point, Polyline};

/// An axis-aligned rectangle with strictly positive width and height.
///
/// The two corners given at construction are canonicalized to the
/// (min-x, min-y) and (max-x, max-y) pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FRect<S> {
    min: Point<S>,
    max: Point<S>,
}

impl<S: Scalar> FRect<S> {
    /// A rectangle from two opposite corners, in any order.
    ///
    /// Fails when the resulting width or height is below the distance
    /// threshold.
    pub fn new(p1: Point<S>, p2: Point<S>) -> Result<Self, GeomError> {
        let (min_x, max_x) = min_max(p1.x, p2.x);
        let (min_y, max_y) = min_max(p1.y, p2.y);
        let thr = S::null_distance();

        if max_x - min_x <= thr || max_y - min_y <= thr {
            return Err(GeomError::DegenerateInput(
                "rectangle width and height must be positive",
            ));
        }

        Ok(FRect {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        })
    }

    /// A rectangle from the coordinates of two opposite corners.
    pub fn from_coords(x1: S, y1: S, x2: S, y2: S) -> Result<Self, GeomError> {
        Self::new(point(x1, y1), point(x2, y2))
    }

    #[inline]
    pub fn min(&self) -> Point<S> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point<S> {
        self.max
    }

    #[inline]
    pub fn width(&self) -> S {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> S {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> S {
        self.width() * self.height()
    }

    /// The perimeter.
    #[inline]
    pub fn length(&self) -> S {
        S::TWO * (self.width() + self.height())
    }

    #[inline]
    pub fn center(&self) -> Point<S> {
        point(
            (self.min.x + self.max.x) * S::HALF,
            (self.min.y + self.max.y) * S::HALF,
        )
    }

    /// The four corners, counter-clockwise starting from the min corner.
    pub fn corners(&self) -> [Point<S>; 4] {
        [
            self.min,
            point(self.max.x, self.min.y),
            self.max,
            point(self.min.x, self.max.y),
        ]
    }

    /// The four boundary segments, in corner order.
    pub fn edges(&self) -> [Segment<S>; 4] {
        let c = self.corners();
        [
            Segment::new_unchecked(c[0], c[1]),
            Segment::new_unchecked(c[1], c[2]),
            Segment::new_unchecked(c[2], c[3]),
            Segment::new_unchecked(c[3], c[0]),
        ]
    }

    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        Box2D {
            min: self.min,
            max: self.max,
        }
    }

    /// The boundary as a closed polyline.
    pub fn to_polyline(&self) -> Polyline<S> {
        Polyline::closed_unchecked(self.corners().to_vec())
    }

    /// Whether the point lies strictly inside (boundary excluded, within the
    /// distance threshold).
    pub fn contains_point(&self, p: &Point<S>) -> bool {
        let thr = S::null_distance();
        p.x > self.min.x + thr
            && p.x < self.max.x - thr
            && p.y > self.min.y + thr
            && p.y < self.max.y - thr
    }
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn canonical_corners() {
    let r1 = FRect::new(pt(3.0f64, 1.0), pt(0.0, 4.0)).unwrap();
    let r2 = FRect::from_coords(0.0f64, 1.0, 3.0, 4.0).unwrap();
    assert_eq!(r1, r2);
    assert_eq!(r1.min(), pt(0.0, 1.0));
    assert_eq!(r1.max(), pt(3.0, 4.0));
}

#[test]
fn degenerate_rejected() {
    assert!(FRect::from_coords(0.0f64, 0.0, 0.0, 2.0).is_err());
    assert!(FRect::from_coords(0.0f64, 1.0, 5.0, 1.0).is_err());
}

#[test]
fn unit_square_metrics() {
    let r = FRect::from_coords(0.0f64, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(r.area(), 1.0);
    assert_eq!(r.length(), 4.0);
    assert_eq!(r.center(), pt(0.5, 0.5));
}

#[test]
fn edge_decomposition() {
    let r = FRect::from_coords(0.0f64, 0.0, 2.0, 1.0).unwrap();
    let edges = r.edges();
    assert_eq!(edges.len(), 4);
    assert!((edges.iter().map(|e| e.length()).fold(0.0, |a, b| a + b) - r.length()).abs() < 1e-12);
}

#[test]
fn point_containment_is_open() {
    let r = FRect::from_coords(0.0f64, 0.0, 2.0, 2.0).unwrap();
    assert!(r.contains_point(&pt(1.0, 1.0)));
    assert!(!r.contains_point(&pt(0.0, 1.0)));
    assert!(!r.contains_point(&pt(3.0, 1.0)));
}
