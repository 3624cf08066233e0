//! 3×3 projective transformations.

use crate::scalar::Scalar;
use crate::traits::Transformation;
use crate::{point, vector, GeomError, HLine, HPoint, Point, Vector};
use core::ops::Mul;

/// An invertible 3×3 projective transformation matrix (a homography).
///
/// Elementary transforms can either replace the matrix content (`set_*`) or
/// compose with it (`add_*`). Composition pre-multiplies: the added transform
/// applies after what the matrix already does, so
/// `h.add_translation(t).add_rotation(r)` rotates the translated result.
///
/// Equality normalizes both operands first (see [`Homography::normalize`])
/// and compares entries within the distance threshold.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Homography<S> {
    m: [[S; 3]; 3],
}

impl<S: Scalar> Homography<S> {
    #[inline]
    pub fn identity() -> Self {
        Homography {
            m: [
                [S::ONE, S::ZERO, S::ZERO],
                [S::ZERO, S::ONE, S::ZERO],
                [S::ZERO, S::ZERO, S::ONE],
            ],
        }
    }

    /// Rotation around the origin by `theta` radians.
    pub fn rotation(theta: S) -> Self {
        let (sin, cos) = theta.sin_cos();
        Homography {
            m: [
                [cos, -sin, S::ZERO],
                [sin, cos, S::ZERO],
                [S::ZERO, S::ZERO, S::ONE],
            ],
        }
    }

    pub fn scaling(kx: S, ky: S) -> Self {
        Homography {
            m: [
                [kx, S::ZERO, S::ZERO],
                [S::ZERO, ky, S::ZERO],
                [S::ZERO, S::ZERO, S::ONE],
            ],
        }
    }

    pub fn translation(tx: S, ty: S) -> Self {
        Homography {
            m: [
                [S::ONE, S::ZERO, tx],
                [S::ZERO, S::ONE, ty],
                [S::ZERO, S::ZERO, S::ONE],
            ],
        }
    }

    /// Raw constructor from the nine entries, row major.
    #[inline]
    pub fn from_rows(m: [[S; 3]; 3]) -> Self {
        Homography { m }
    }

    #[inline]
    pub fn rows(&self) -> &[[S; 3]; 3] {
        &self.m
    }

    /// Replaces the content with a pure rotation.
    pub fn set_rotation(&mut self, theta: S) -> &mut Self {
        *self = Self::rotation(theta);
        self
    }

    /// Replaces the content with a pure scaling.
    pub fn set_scaling(&mut self, kx: S, ky: S) -> &mut Self {
        *self = Self::scaling(kx, ky);
        self
    }

    /// Replaces the content with a pure translation.
    pub fn set_translation(&mut self, tx: S, ty: S) -> &mut Self {
        *self = Self::translation(tx, ty);
        self
    }

    /// Composes a rotation on top of the current content.
    pub fn add_rotation(&mut self, theta: S) -> &mut Self {
        *self = Self::rotation(theta) * *self;
        self
    }

    /// Composes a scaling on top of the current content.
    pub fn add_scaling(&mut self, kx: S, ky: S) -> &mut Self {
        *self = Self::scaling(kx, ky) * *self;
        self
    }

    /// Composes a translation on top of the current content.
    pub fn add_translation(&mut self, tx: S, ty: S) -> &mut Self {
        *self = Self::translation(tx, ty) * *self;
        self
    }

    /// Normalizes the matrix in place.
    ///
    /// All entries are divided by the last entry of the bottom row whose
    /// magnitude is above the distance threshold; all signs are flipped
    /// when the pivot is negative. A matrix whose whole bottom row
    /// vanishes (it is singular) is left unchanged. Idempotent, and
    /// invoked by the equality comparison.
    pub fn normalize(&mut self) -> &mut Self {
        let thr = S::null_distance();
        let pivot = if self.m[2][2].abs() > thr {
            self.m[2][2]
        } else if self.m[2][1].abs() > thr {
            self.m[2][1]
        } else if self.m[2][0].abs() > thr {
            self.m[2][0]
        } else {
            return self;
        };

        for row in self.m.iter_mut() {
            for v in row.iter_mut() {
                *v = *v / pivot;
            }
        }

        self
    }

    /// A normalized copy.
    pub fn normalized(&self) -> Self {
        let mut h = *self;
        h.normalize();
        h
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Homography {
            m: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    /// Determinant by cofactor expansion, accumulated in the wide type.
    pub fn determinant(&self) -> S {
        let m = &self.m;
        let w = |i: usize, j: usize| m[i][j].to_wide();

        let det = w(0, 0) * (w(1, 1) * w(2, 2) - w(1, 2) * w(2, 1))
            - w(0, 1) * (w(1, 0) * w(2, 2) - w(1, 2) * w(2, 0))
            + w(0, 2) * (w(1, 0) * w(2, 1) - w(1, 1) * w(2, 0));

        S::from_wide(det)
    }

    /// The inverse, by the classical adjugate/determinant method.
    pub fn inverse(&self) -> Result<Self, GeomError> {
        let det = self.determinant();
        if det.abs() <= S::null_distance() {
            return Err(GeomError::SingularMatrix);
        }

        let m = &self.m;
        let w = |i: usize, j: usize| m[i][j].to_wide();
        let inv_det = S::ONE.to_wide() / det.to_wide();
        let cof = |a: S::Wide| S::from_wide(a * inv_det);

        Ok(Homography {
            m: [
                [
                    cof(w(1, 1) * w(2, 2) - w(1, 2) * w(2, 1)),
                    cof(w(0, 2) * w(2, 1) - w(0, 1) * w(2, 2)),
                    cof(w(0, 1) * w(1, 2) - w(0, 2) * w(1, 1)),
                ],
                [
                    cof(w(1, 2) * w(2, 0) - w(1, 0) * w(2, 2)),
                    cof(w(0, 0) * w(2, 2) - w(0, 2) * w(2, 0)),
                    cof(w(0, 2) * w(1, 0) - w(0, 0) * w(1, 2)),
                ],
                [
                    cof(w(1, 0) * w(2, 1) - w(1, 1) * w(2, 0)),
                    cof(w(0, 1) * w(2, 0) - w(0, 0) * w(2, 1)),
                    cof(w(0, 0) * w(1, 1) - w(0, 1) * w(1, 0)),
                ],
            ],
        })
    }

    /// Applies the matrix to a homogeneous point.
    pub fn transform_hpoint(&self, p: &HPoint<S>) -> HPoint<S> {
        let v = p.coords();
        let v = [v[0].to_wide(), v[1].to_wide(), v[2].to_wide()];
        let mut out = [S::ZERO; 3];

        for (i, row) in self.m.iter().enumerate() {
            let acc = row[0].to_wide() * v[0] + row[1].to_wide() * v[1] + row[2].to_wide() * v[2];
            out[i] = S::from_wide(acc);
        }

        HPoint::from_coords(out[0], out[1], out[2])
    }

    /// Applies the matrix to a cartesian point, with perspective divide.
    pub fn transform_point(&self, p: Point<S>) -> Point<S> {
        let m = &self.m;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2];
        let w = m[2][0] * p.x + m[2][1] * p.y + m[2][2];

        point(x / w, y / w)
    }

    /// Applies the matrix to a line, through the transpose of the inverse.
    ///
    /// Fails when the matrix is singular.
    pub fn transform_line(&self, line: &HLine<S>) -> Result<HLine<S>, GeomError> {
        let inv_t = self.inverse()?.transpose();
        let v = inv_t.transform_hpoint(&HPoint::from_coords(line.a(), line.b(), line.c()));
        let [a, b, c] = v.coords();

        HLine::new(a, b, c)
    }

    /// Applies the matrix to every point of a container, in place, preserving
    /// order and count.
    pub fn apply_to(&self, points: &mut [Point<S>]) {
        for p in points.iter_mut() {
            *p = self.transform_point(*p);
        }
    }
}

impl<S: Scalar> Default for Homography<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mul for Homography<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[S::ZERO; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut acc = S::ZERO.to_wide();
                for (k, col) in rhs.m.iter().enumerate() {
                    acc = acc + self.m[i][k].to_wide() * col[j].to_wide();
                }
                out[i][j] = S::from_wide(acc);
            }
        }

        Homography { m: out }
    }
}

impl<S: Scalar> Mul<HPoint<S>> for Homography<S> {
    type Output = HPoint<S>;

    fn mul(self, rhs: HPoint<S>) -> HPoint<S> {
        self.transform_hpoint(&rhs)
    }
}

impl<S: Scalar> PartialEq for Homography<S> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        let thr = S::null_distance();

        a.m.iter()
            .zip(b.m.iter())
            .all(|(ra, rb)| ra.iter().zip(rb.iter()).all(|(x, y)| (*x - *y).abs() <= thr))
    }
}

impl<S: Scalar> Transformation<S> for Homography<S> {
    #[inline]
    fn transform_point(&self, p: Point<S>) -> Point<S> {
        self.transform_point(p)
    }

    /// A vector is a point at infinity: only the linear part applies.
    #[inline]
    fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
        let m = &self.m;
        vector(
            m[0][0] * v.x + m[0][1] * v.y,
            m[1][0] * v.x + m[1][1] * v.y,
        )
    }
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn inverse_round_trip() {
    let mut h = Homography::identity();
    h.add_rotation(0.7f64).add_translation(3.0, -2.0).add_scaling(2.0, 0.5);

    let inv = h.inverse().unwrap();
    assert_eq!(h * inv, Homography::identity());
    assert_eq!(inv * h, Homography::identity());
}

#[test]
fn transpose_involution() {
    let mut h = Homography::identity();
    h.add_translation(4.0f64, 5.0).add_rotation(1.0);
    assert_eq!(h.transpose().transpose(), h);
}

#[test]
fn add_order_matters() {
    let mut a = Homography::identity();
    a.add_translation(4.0f64, 5.0).add_rotation(1.0);

    let mut b = Homography::identity();
    b.add_rotation(1.0f64).add_translation(4.0, 5.0);

    assert_ne!(a, b);

    // "add" composes after the existing content: translate then rotate
    // moves the origin's image off the translation vector.
    assert_eq!(
        a.transform_point(pt(0.0, 0.0)),
        Homography::rotation(1.0).transform_point(pt(4.0, 5.0))
    );
}

#[test]
fn singular_matrix_fails() {
    let h = Homography::from_rows([
        [1.0f64, 2.0, 3.0],
        [2.0, 4.0, 6.0],
        [0.0, 0.0, 1.0],
    ]);
    assert_eq!(h.inverse(), Err(GeomError::SingularMatrix));
}

#[test]
fn line_transform_preserves_incidence() {
    let mut h = Homography::identity();
    h.add_rotation(0.3f64).add_translation(1.0, 2.0);

    let p1 = pt(0.0f64, 0.0);
    let p2 = pt(2.0, 1.0);
    let line = HLine::from_points(p1, p2).unwrap();

    let tl = h.transform_line(&line).unwrap();
    let tp = h.transform_point(p1);
    assert!(tl.distance_to_point(&tp) < 1e-12);
    let tp2 = h.transform_point(p2);
    assert!(tl.distance_to_point(&tp2) < 1e-12);
}

#[test]
fn normalize_idempotent() {
    let mut h = Homography::from_rows([
        [2.0f64, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [0.0, 0.0, -2.0],
    ]);
    h.normalize();
    let again = *h.normalize();
    assert_eq!(h, again);
    assert_eq!(h.rows()[2][2], 1.0);
}

#[test]
fn normalize_pivot_fallback() {
    // Only the first bottom-row entry is usable as a pivot.
    let mut h = Homography::from_rows([
        [2.0f64, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [4.0, 0.0, 0.0],
    ]);
    h.normalize();
    assert_eq!(h.rows()[2][0], 1.0);
    assert_eq!(h.rows()[0][0], 0.5);

    // A vanished bottom row stays put instead of dividing by zero.
    let mut flat = Homography::from_rows([
        [1.0f64, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0],
    ]);
    flat.normalize();
    assert_eq!(flat.rows()[0][0], 1.0);
    assert!(flat.rows().iter().flatten().all(|v| v.is_finite()));
}

#[test]
fn batch_apply_preserves_order() {
    let mut pts = [pt(0.0f64, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)];
    Homography::translation(2.0, 3.0).apply_to(&mut pts);
    assert_eq!(pts, [pt(2.0, 3.0), pt(3.0, 3.0), pt(2.0, 4.0)]);
}
