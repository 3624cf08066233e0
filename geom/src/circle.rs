//! Circles.

use arrayvec::ArrayVec;

use crate::scalar::Scalar;
use crate::utils::lexicographic_cmp;
use crate::{point, Box2D, GeomError, HLine, Point};

/// A circle with a strictly positive radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Circle<S> {
    center: Point<S>,
    radius: S,
}

impl<S: Scalar> Circle<S> {
    /// Fails when the radius is below the distance threshold.
    pub fn new(center: Point<S>, radius: S) -> Result<Self, GeomError> {
        if radius <= S::null_distance() {
            return Err(GeomError::DegenerateInput(
                "circle radius must be positive",
            ));
        }

        Ok(Circle { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point<S> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> S {
        self.radius
    }

    #[inline]
    pub fn area(&self) -> S {
        S::PI() * self.radius * self.radius
    }

    /// The circumference.
    #[inline]
    pub fn length(&self) -> S {
        S::TWO * S::PI() * self.radius
    }

    pub fn bounding_box(&self) -> Box2D<S> {
        Box2D {
            min: point(self.center.x - self.radius, self.center.y - self.radius),
            max: point(self.center.x + self.radius, self.center.y + self.radius),
        }
    }

    /// Whether the point lies strictly inside (boundary excluded, within the
    /// distance threshold).
    pub fn contains_point(&self, p: &Point<S>) -> bool {
        (*p - self.center).length() < self.radius - S::null_distance()
    }

    /// The points where a line crosses this circle, lexicographically
    /// smaller point first: none, one (tangent) or two.
    pub fn line_intersections(&self, line: &HLine<S>) -> ArrayVec<Point<S>, 2> {
        let threshold = S::null_distance();
        let signed = line.signed_distance_to_point(&self.center);
        let d = signed.abs();

        let mut result = ArrayVec::new();
        if d > self.radius + threshold {
            return result;
        }

        // Foot of the perpendicular from the center onto the line.
        let foot = self.center - line.normal() * signed;
        if (d - self.radius).abs() <= threshold {
            result.push(foot);
            return result;
        }

        let half_chord = (self.radius * self.radius - d * d).max(S::ZERO).sqrt();
        let along = line.tangent() * half_chord;
        let mut p1 = foot + along;
        let mut p2 = foot - along;
        if lexicographic_cmp(&p2, &p1) == core::cmp::Ordering::Less {
            core::mem::swap(&mut p1, &mut p2);
        }
        result.push(p1);
        result.push(p2);

        result
    }
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn invalid_radius_rejected() {
    assert!(Circle::new(pt(0.0f64, 0.0), 0.0).is_err());
    assert!(Circle::new(pt(0.0f64, 0.0), -1.0).is_err());
}

#[test]
fn metrics() {
    let c = Circle::new(pt(1.0f64, 2.0), 2.0).unwrap();
    assert!((c.area() - 4.0 * core::f64::consts::PI).abs() < 1e-12);
    assert!((c.length() - 4.0 * core::f64::consts::PI).abs() < 1e-12);
    assert_eq!(c.bounding_box().min, pt(-1.0, 0.0));
    assert_eq!(c.bounding_box().max, pt(3.0, 4.0));
}

#[test]
fn containment_is_open() {
    let c = Circle::new(pt(0.0f64, 0.0), 1.0).unwrap();
    assert!(c.contains_point(&pt(0.5, 0.0)));
    assert!(!c.contains_point(&pt(1.0, 0.0)));
    assert!(!c.contains_point(&pt(2.0, 0.0)));
}

#[test]
fn chords_and_tangents() {
    let c = Circle::new(pt(0.0f64, 0.0), 1.0).unwrap();

    let chord = c.line_intersections(&HLine::horizontal(0.0));
    assert_eq!(chord.as_slice(), &[pt(-1.0, 0.0), pt(1.0, 0.0)]);

    let tangent = c.line_intersections(&HLine::horizontal(1.0));
    assert_eq!(tangent.as_slice(), &[pt(0.0, 1.0)]);

    assert!(c.line_intersections(&HLine::horizontal(2.0)).is_empty());
}
