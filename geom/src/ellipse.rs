//! Ellipses, stored as center, semi-axes and rotation angle.

use crate::homography::Homography;
use crate::scalar::Scalar;
use crate::{point, GeomError, Box2D, Point};

/// An ellipse: center, semi-major and semi-minor axis lengths and the angle
/// of the major axis with the x axis.
///
/// The invariant `major >= minor` is enforced at construction; reversed axis
/// lengths are accepted and the angle is adjusted by 90° instead.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ellipse<S> {
    center: Point<S>,
    major: S,
    minor: S,
    angle: S,
}

impl<S: Scalar> Ellipse<S> {
    /// Fails when either axis length is below the distance threshold.
    pub fn new(center: Point<S>, major: S, minor: S, angle: S) -> Result<Self, GeomError> {
        let thr = S::null_distance();
        if major <= thr || minor <= thr {
            return Err(GeomError::DegenerateInput(
                "ellipse axis lengths must be positive",
            ));
        }

        if major >= minor {
            Ok(Ellipse {
                center,
                major,
                minor,
                angle,
            })
        } else {
            Ok(Ellipse {
                center,
                major: minor,
                minor: major,
                angle: angle + S::FRAC_PI_2(),
            })
        }
    }

    #[inline]
    pub fn center(&self) -> Point<S> {
        self.center
    }

    #[inline]
    pub fn major(&self) -> S {
        self.major
    }

    #[inline]
    pub fn minor(&self) -> S {
        self.minor
    }

    /// Angle of the major axis with the x axis, radians.
    #[inline]
    pub fn angle(&self) -> S {
        self.angle
    }

    #[inline]
    pub fn area(&self) -> S {
        S::PI() * self.major * self.minor
    }

    /// The circumference, by Ramanujan's second approximation (relative
    /// error below 1e-9 for moderate eccentricities).
    pub fn perimeter(&self) -> S {
        let (a, b) = (self.major, self.minor);
        let h = ((a - b) / (a + b)) * ((a - b) / (a + b));
        S::PI() * (a + b)
            * (S::ONE + S::THREE * h / (S::TEN + (S::FOUR - S::THREE * h).sqrt()))
    }

    /// Exact axis-aligned bounding box.
    pub fn bounding_box(&self) -> Box2D<S> {
        let (sin, cos) = self.angle.sin_cos();
        let half_w = ((self.major * cos) * (self.major * cos)
            + (self.minor * sin) * (self.minor * sin))
            .sqrt();
        let half_h = ((self.major * sin) * (self.major * sin)
            + (self.minor * cos) * (self.minor * cos))
            .sqrt();

        Box2D {
            min: point(self.center.x - half_w, self.center.y - half_h),
            max: point(self.center.x + half_w, self.center.y + half_h),
        }
    }

    /// Whether the point lies strictly inside.
    ///
    /// The point is brought into the ellipse's canonical frame (centered,
    /// axes on the coordinate axes) and tested against the quadratic form.
    pub fn contains_point(&self, p: &Point<S>) -> bool {
        let (sin, cos) = self.angle.sin_cos();
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let u = cos * dx + sin * dy;
        let v = -sin * dx + cos * dy;

        let q = (u / self.major) * (u / self.major) + (v / self.minor) * (v / self.minor);
        q < S::ONE - S::null_distance()
    }

    /// The 3×3 conic matrix `Q` such that `xᵀ Q x = 0` on the boundary.
    pub fn conic_matrix(&self) -> [[S; 3]; 3] {
        let (sin, cos) = self.angle.sin_cos();
        let (cx, cy) = (self.center.x, self.center.y);
        let (a2, b2) = (self.major * self.major, self.minor * self.minor);

        let qa = a2 * sin * sin + b2 * cos * cos;
        let qb = S::TWO * (b2 - a2) * sin * cos;
        let qc = a2 * cos * cos + b2 * sin * sin;
        let qd = -S::TWO * qa * cx - qb * cy;
        let qe = -qb * cx - S::TWO * qc * cy;
        let qf = qa * cx * cx + qb * cx * cy + qc * cy * cy - a2 * b2;

        [
            [qa, qb * S::HALF, qd * S::HALF],
            [qb * S::HALF, qc, qe * S::HALF],
            [qd * S::HALF, qe * S::HALF, qf],
        ]
    }

    /// Rebuilds an ellipse from a conic matrix known to describe one.
    ///
    /// Fails when the matrix does not describe a non-degenerate ellipse.
    pub fn from_conic_matrix(q: &[[S; 3]; 3]) -> Result<Self, GeomError> {
        // A conic matrix is defined up to scale; fix the sign so the
        // quadratic part is positive definite.
        let flip = if q[0][0] + q[1][1] < S::ZERO {
            -S::ONE
        } else {
            S::ONE
        };
        let qa = q[0][0] * flip;
        let qb2 = q[0][1] * flip;
        let qc = q[1][1] * flip;
        let qd2 = q[0][2] * flip;
        let qe2 = q[1][2] * flip;
        let qf = q[2][2] * flip;

        // Determinant of the quadratic part; positive for an ellipse.
        let det33 = qa * qc - qb2 * qb2;
        if det33 <= S::null_distance() {
            return Err(GeomError::DegenerateShape(
                "conic matrix does not describe an ellipse",
            ));
        }

        // Center from the gradient: the linear system [qa qb2; qb2 qc] c = -[qd2; qe2].
        let cx = (qb2 * qe2 - qc * qd2) / det33;
        let cy = (qb2 * qd2 - qa * qe2) / det33;

        // Full 3×3 determinant, via the cofactors of the last row.
        let det = qd2 * (qb2 * qe2 - qc * qd2) + qe2 * (qb2 * qd2 - qa * qe2) + qf * det33;

        // Eigenvalues of the quadratic part.
        let half_trace = (qa + qc) * S::HALF;
        let delta = ((qa - qc) * (qa - qc) * S::HALF * S::HALF + qb2 * qb2).sqrt();
        let lambda_small = half_trace - delta;
        let lambda_big = half_trace + delta;

        let scale = -det / det33;
        if scale <= S::ZERO || lambda_small <= S::ZERO {
            return Err(GeomError::DegenerateShape(
                "conic matrix does not describe an ellipse",
            ));
        }

        // Axis lengths: the smaller eigenvalue carries the major axis.
        let major = (scale / lambda_small).sqrt();
        let minor = (scale / lambda_big).sqrt();

        let angle = if qb2.abs() <= S::null_distance() {
            if qa <= qc {
                S::ZERO
            } else {
                S::FRAC_PI_2()
            }
        } else {
            // Eigenvector of lambda_small: (qb2, lambda_small - qa). An axis
            // direction is defined modulo π, normalized into [0, π).
            let a = (lambda_small - qa).atan2(qb2);
            if a < S::ZERO {
                a + S::PI()
            } else {
                a
            }
        };

        Ellipse::new(point(cx, cy), major, minor, angle)
    }

    /// Applies a homography, through the conic matrix sandwich
    /// `H⁻ᵗ · Q · H⁻¹`.
    ///
    /// Fails when the homography is singular or maps the ellipse to another
    /// kind of conic (possible for a genuinely projective matrix).
    pub fn transformed(&self, h: &Homography<S>) -> Result<Self, GeomError> {
        let inv = h.inverse()?;
        let inv_t = inv.transpose();

        let q = Homography::from_rows(self.conic_matrix());
        let q2 = inv_t * q * inv;

        Self::from_conic_matrix(q2.rows())
    }
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn axis_swap() {
    let e = Ellipse::new(pt(0.0f64, 0.0), 1.0, 3.0, 0.0).unwrap();
    assert_eq!(e.major(), 3.0);
    assert_eq!(e.minor(), 1.0);
    assert!((e.angle() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn area_and_bounding_box() {
    let e = Ellipse::new(pt(1.0f64, 1.0), 3.0, 2.0, 0.0).unwrap();
    assert!((e.area() - 6.0 * core::f64::consts::PI).abs() < 1e-12);
    let bb = e.bounding_box();
    assert!((bb.min.x + 2.0).abs() < 1e-12);
    assert!((bb.max.x - 4.0).abs() < 1e-12);
    assert!((bb.min.y + 1.0).abs() < 1e-12);
    assert!((bb.max.y - 3.0).abs() < 1e-12);

    // Rotated by 90 degrees the extents swap.
    let e = Ellipse::new(pt(0.0f64, 0.0), 3.0, 2.0, core::f64::consts::FRAC_PI_2).unwrap();
    let bb = e.bounding_box();
    assert!((bb.max.x - 2.0).abs() < 1e-9);
    assert!((bb.max.y - 3.0).abs() < 1e-9);
}

#[test]
fn containment() {
    let e = Ellipse::new(pt(0.0f64, 0.0), 3.0, 1.0, 0.0).unwrap();
    assert!(e.contains_point(&pt(2.5, 0.0)));
    assert!(!e.contains_point(&pt(0.0, 2.5)));
    assert!(!e.contains_point(&pt(3.0, 0.0)));
}

#[test]
fn conic_round_trip() {
    let e = Ellipse::new(pt(2.0f64, -1.0), 3.0, 1.5, 0.4).unwrap();
    let back = Ellipse::from_conic_matrix(&e.conic_matrix()).unwrap();
    assert!((back.center().x - 2.0).abs() < 1e-9);
    assert!((back.center().y + 1.0).abs() < 1e-9);
    assert!((back.major() - 3.0).abs() < 1e-9);
    assert!((back.minor() - 1.5).abs() < 1e-9);
    assert!((back.angle() - 0.4).abs() < 1e-9);
}

#[test]
fn transform_under_translation_and_rotation() {
    let e = Ellipse::new(pt(0.0f64, 0.0), 2.0, 1.0, 0.0).unwrap();

    let t = Homography::translation(3.0, 4.0);
    let moved = e.transformed(&t).unwrap();
    assert!((moved.center().x - 3.0).abs() < 1e-9);
    assert!((moved.center().y - 4.0).abs() < 1e-9);
    assert!((moved.major() - 2.0).abs() < 1e-9);

    let r = Homography::rotation(core::f64::consts::FRAC_PI_2);
    let turned = e.transformed(&r).unwrap();
    assert!((turned.major() - 2.0).abs() < 1e-9);
    assert!((turned.minor() - 1.0).abs() < 1e-9);
    // Major axis now vertical.
    let bb = turned.bounding_box();
    assert!((bb.max.y - 2.0).abs() < 1e-9);
    assert!((bb.max.x - 1.0).abs() < 1e-9);
}
