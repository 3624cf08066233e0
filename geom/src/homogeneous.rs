//! Homogeneous points and lines, and the duality between them.
//!
//! A point `(x, y)` is stored as the 3-vector `[x, y, 1]`; multiplying all
//! three components by a nonzero factor denotes the same point, and a third
//! component of zero denotes a point at infinity (a direction). A line
//! `a·x + b·y + c = 0` is stored normalized: `a² + b² = 1` with `a ≥ 0`
//! (and `b > 0` when `a` vanishes), so that equal lines have equal
//! coefficients.
//!
//! The two types are dual under the cross product: the join of two points is
//! the line through them, the meet of two lines is their intersection point.

use crate::scalar::{Float, Scalar};
use crate::utils::points_coincide;
use crate::{point, vector, GeomError, Point, Vector};

/// A coordinate axis, used to pick a point on a line by one coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A 2D point in homogeneous coordinates.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HPoint<S> {
    v: [S; 3],
}

impl<S: Scalar> HPoint<S> {
    /// The point `(x, y)`, stored as `[x, y, 1]`.
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        HPoint { v: [x, y, S::ONE] }
    }

    /// Raw constructor from the three homogeneous components.
    #[inline]
    pub fn from_coords(v0: S, v1: S, v2: S) -> Self {
        HPoint { v: [v0, v1, v2] }
    }

    /// The ideal point (direction) `[dx, dy, 0]`.
    #[inline]
    pub fn at_infinity(dx: S, dy: S) -> Self {
        HPoint {
            v: [dx, dy, S::ZERO],
        }
    }

    #[inline]
    pub fn coords(&self) -> [S; 3] {
        self.v
    }

    /// Whether the third component vanishes relative to the vector magnitude.
    pub fn is_at_infinity(&self) -> bool {
        let [x, y, w] = self.v;
        let mag = (x * x + y * y).sqrt();
        w.abs() <= S::null_distance() * mag.max(S::ONE)
    }

    /// The cartesian x coordinate. Fails for points at infinity.
    ///
    /// The division by the third component is deferred to this accessor so
    /// that ideal points stay representable.
    #[inline]
    pub fn x(&self) -> Result<S, GeomError> {
        if self.is_at_infinity() {
            return Err(GeomError::PointAtInfinity);
        }
        Ok(self.v[0] / self.v[2])
    }

    /// The cartesian y coordinate. Fails for points at infinity.
    #[inline]
    pub fn y(&self) -> Result<S, GeomError> {
        if self.is_at_infinity() {
            return Err(GeomError::PointAtInfinity);
        }
        Ok(self.v[1] / self.v[2])
    }

    /// Both cartesian coordinates at once.
    pub fn to_point(&self) -> Result<Point<S>, GeomError> {
        if self.is_at_infinity() {
            return Err(GeomError::PointAtInfinity);
        }
        Ok(point(self.v[0] / self.v[2], self.v[1] / self.v[2]))
    }

    /// The line through `self` and `other`.
    ///
    /// This is the cross product of the two 3-vectors, normalized. Joining a
    /// point with itself is degenerate.
    pub fn join(&self, other: &Self) -> Result<HLine<S>, GeomError> {
        let c = cross_wide(&self.v, &other.v);
        let [a, b, _] = c;
        if (a * a + b * b).sqrt() <= S::null_distance().to_wide() {
            return Err(GeomError::DegenerateInput(
                "cannot build a line from two identical points",
            ));
        }

        Ok(HLine::normalized_from_wide(c))
    }

    /// Euclidean distance to another (finite) point.
    pub fn distance_to(&self, other: &Self) -> Result<S, GeomError> {
        let p = self.to_point()?;
        let q = other.to_point()?;

        Ok((p - q).length())
    }

    /// Distance to a line, `|a·x + b·y + c|` since the line is normalized.
    pub fn distance_to_line(&self, line: &HLine<S>) -> Result<S, GeomError> {
        Ok(line.distance_to_point(&self.to_point()?))
    }
}

impl<S: Scalar> From<Point<S>> for HPoint<S> {
    #[inline]
    fn from(p: Point<S>) -> Self {
        HPoint::new(p.x, p.y)
    }
}

impl<S: Scalar> PartialEq for HPoint<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_point(), other.to_point()) {
            (Ok(p), Ok(q)) => points_coincide(&p, &q),
            (Err(_), Err(_)) => {
                // Two ideal points are equal when their directions are
                // parallel.
                let c = self.v[0] * other.v[1] - self.v[1] * other.v[0];
                let m1 = (self.v[0] * self.v[0] + self.v[1] * self.v[1]).sqrt();
                let m2 = (other.v[0] * other.v[0] + other.v[1] * other.v[1]).sqrt();
                c.abs() <= S::null_distance() * (m1 * m2).max(S::ONE)
            }
            _ => false,
        }
    }
}

/// A 2D line in normalized homogeneous form: `a·x + b·y + c = 0` with
/// `a² + b² = 1` and a fixed sign.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HLine<S> {
    a: S,
    b: S,
    c: S,
}

impl<S: Scalar> HLine<S> {
    /// A line from raw coefficients, normalized on construction.
    ///
    /// Fails when `a` and `b` both vanish (no direction).
    pub fn new(a: S, b: S, c: S) -> Result<Self, GeomError> {
        let norm = (a * a + b * b).sqrt();
        if norm <= S::null_distance() {
            return Err(GeomError::DegenerateInput(
                "line coefficients a and b cannot both be zero",
            ));
        }

        Ok(Self::sign_fixed(a / norm, b / norm, c / norm))
    }

    /// The line through two distinct points.
    pub fn from_points(p1: Point<S>, p2: Point<S>) -> Result<Self, GeomError> {
        HPoint::from(p1).join(&HPoint::from(p2))
    }

    /// The line through the origin with direction `(dx, dy)`.
    pub fn from_direction(dx: S, dy: S) -> Result<Self, GeomError> {
        Self::new(-dy, dx, S::ZERO)
    }

    /// Horizontal line `y = y0`.
    #[inline]
    pub fn horizontal(y0: S) -> Self {
        Self::sign_fixed(S::ZERO, S::ONE, -y0)
    }

    /// Vertical line `x = x0`.
    #[inline]
    pub fn vertical(x0: S) -> Self {
        Self::sign_fixed(S::ONE, S::ZERO, -x0)
    }

    // Precondition: (p1, p2) distinct. Used where a type invariant already
    // guarantees it (e.g. a segment's endpoints).
    pub(crate) fn through_points(p1: Point<S>, p2: Point<S>) -> Self {
        debug_assert!(!points_coincide(&p1, &p2));
        let a = (p1.y - p2.y).to_wide();
        let b = (p2.x - p1.x).to_wide();
        let c = (p1.x.to_wide() * p2.y.to_wide()) - (p2.x.to_wide() * p1.y.to_wide());

        Self::normalized_from_wide([a, b, c])
    }

    fn normalized_from_wide(v: [S::Wide; 3]) -> Self {
        let [a, b, c] = v;
        let norm = (a * a + b * b).sqrt();

        Self::sign_fixed(
            S::from_wide(a / norm),
            S::from_wide(b / norm),
            S::from_wide(c / norm),
        )
    }

    // Flips all three signs if needed so that a > 0, or b > 0 when a is
    // negligible. Idempotent.
    fn sign_fixed(a: S, b: S, c: S) -> Self {
        let flip = if a.abs() <= S::null_distance() {
            b < S::ZERO
        } else {
            a < S::ZERO
        };

        if flip {
            HLine {
                a: -a,
                b: -b,
                c: -c,
            }
        } else {
            HLine { a, b, c }
        }
    }

    #[inline]
    pub fn a(&self) -> S {
        self.a
    }

    #[inline]
    pub fn b(&self) -> S {
        self.b
    }

    #[inline]
    pub fn c(&self) -> S {
        self.c
    }

    /// The intersection point of two lines, by duality.
    ///
    /// This is the cross product of the two 3-vectors, deliberately not
    /// normalized. When the third component vanishes relative to the cross
    /// product magnitude the lines are parallel and the meet is an ideal
    /// point; that case is an error here, because the caller asked for a
    /// point with cartesian coordinates. The intersection engine wraps this
    /// into its non-error "no intersection" result instead.
    pub fn meet(&self, other: &Self) -> Result<HPoint<S>, GeomError> {
        let c = cross_wide(&[self.a, self.b, self.c], &[other.a, other.b, other.c]);
        let mag = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
        if c[2].abs() <= S::null_distance().to_wide() * mag {
            return Err(GeomError::NoIntersection);
        }

        Ok(HPoint::from_coords(
            S::from_wide(c[0]),
            S::from_wide(c[1]),
            S::from_wide(c[2]),
        ))
    }

    /// Signed distance from a point, `a·x + b·y + c`.
    ///
    /// The line being normalized, no division is needed.
    #[inline]
    pub fn signed_distance_to_point(&self, p: &Point<S>) -> S {
        self.a * p.x + self.b * p.y + self.c
    }

    #[inline]
    pub fn distance_to_point(&self, p: &Point<S>) -> S {
        self.signed_distance_to_point(p).abs()
    }

    /// The point on the line with the given coordinate on the given axis.
    ///
    /// Fails when the line does not uniquely determine the other coordinate
    /// (asking for y at a given x on a vertical line, and vice versa).
    pub fn point_at(&self, axis: Axis, coord: S) -> Result<Point<S>, GeomError> {
        match axis {
            Axis::X => {
                if self.b.abs() <= S::null_distance() {
                    return Err(GeomError::DegenerateInput(
                        "cannot solve y for x on a vertical line",
                    ));
                }
                Ok(point(coord, -(self.a * coord + self.c) / self.b))
            }
            Axis::Y => {
                if self.a.abs() <= S::null_distance() {
                    return Err(GeomError::DegenerateInput(
                        "cannot solve x for y on a horizontal line",
                    ));
                }
                Ok(point(-(self.b * coord + self.c) / self.a, coord))
            }
        }
    }

    /// The line through `p` orthogonal to this one.
    pub fn orthogonal_at(&self, p: &Point<S>) -> Self {
        let (a, b) = (-self.b, self.a);
        let c = -(a * p.x + b * p.y);

        Self::sign_fixed(a, b, c).renormalized()
    }

    /// The parallel line through `p`.
    pub fn parallel_through(&self, p: &Point<S>) -> Self {
        let c = -(self.a * p.x + self.b * p.y);

        Self::sign_fixed(self.a, self.b, c)
    }

    /// The parallel line at signed distance `d` along the normal `(a, b)`.
    pub fn offset(&self, d: S) -> Self {
        HLine {
            a: self.a,
            b: self.b,
            c: self.c - d,
        }
    }

    /// A unit vector along the line.
    #[inline]
    pub fn tangent(&self) -> Vector<S> {
        vector(self.b, -self.a)
    }

    /// The unit normal of the line.
    #[inline]
    pub fn normal(&self) -> Vector<S> {
        vector(self.a, self.b)
    }

    /// The unsigned angle between the directions of two lines, in `[0, π/2]`.
    pub fn angle_to(&self, other: &Self) -> S {
        let dot = (self.a * other.a + self.b * other.b).abs().min(S::ONE);
        dot.acos()
    }

    /// Whether the two lines are parallel within the angle threshold.
    #[inline]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.angle_to(other) <= S::null_angle()
    }

    /// Re-runs normalization. Idempotent: normalizing an already normalized
    /// line leaves it unchanged within the threshold.
    pub fn renormalized(&self) -> Self {
        let norm = (self.a * self.a + self.b * self.b).sqrt();

        Self::sign_fixed(self.a / norm, self.b / norm, self.c / norm)
    }
}

impl<S: Scalar> PartialEq for HLine<S> {
    fn eq(&self, other: &Self) -> bool {
        let thr = S::null_distance();
        (self.a - other.a).abs() <= thr
            && (self.b - other.b).abs() <= thr
            && (self.c - other.c).abs() <= thr
    }
}

// Cross product of two 3-vectors, accumulated in the wide type.
fn cross_wide<S: Scalar>(u: &[S; 3], v: &[S; 3]) -> [S::Wide; 3] {
    let u = [u[0].to_wide(), u[1].to_wide(), u[2].to_wide()];
    let v = [v[0].to_wide(), v[1].to_wide(), v[2].to_wide()];

    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

#[cfg(test)]
use crate::point as pt;

#[test]
fn join_meet_round_trip() {
    let p1 = HPoint::new(0.0f64, 0.0);
    let p2 = HPoint::new(2.0, 2.0);

    let l1 = p1.join(&p2).unwrap();
    let l2 = p2.join(&p1).unwrap();
    assert_eq!(l1, l2);

    let l3 = HLine::from_points(pt(0.0, 2.0), pt(2.0, 0.0)).unwrap();
    let m1 = l1.meet(&l3).unwrap();
    let m2 = l3.meet(&l1).unwrap();
    assert_eq!(m1, m2);
    assert_eq!(m1.to_point().unwrap(), pt(1.0, 1.0));
}

#[test]
fn join_identical_points_fails() {
    let p = HPoint::new(1.0f64, 2.0);
    assert!(p.join(&p).is_err());
}

#[test]
fn meet_parallel_fails() {
    let l1 = HLine::horizontal(0.0f64);
    let l2 = HLine::horizontal(1.0);
    assert_eq!(l1.meet(&l2), Err(GeomError::NoIntersection));
    assert!(l1.is_parallel_to(&l2));
}

#[test]
fn normalization_idempotent() {
    let l = HLine::new(-3.0f64, 4.0, 5.0).unwrap();
    assert_eq!(l.renormalized(), l);
    assert_eq!(l.renormalized().renormalized(), l.renormalized());
    // Sign fixed: a >= 0.
    assert!(l.a() >= 0.0);
    // a² + b² = 1.
    assert!((l.a() * l.a() + l.b() * l.b() - 1.0).abs() < 1e-12);
}

#[test]
fn point_at_infinity() {
    let d = HPoint::at_infinity(1.0f64, 0.0);
    assert!(d.is_at_infinity());
    assert_eq!(d.x(), Err(GeomError::PointAtInfinity));
    assert_eq!(d, HPoint::at_infinity(2.0, 0.0));
    assert_ne!(d, HPoint::at_infinity(0.0, 1.0));
}

#[test]
fn distance_and_derived_lines() {
    let l = HLine::from_points(pt(0.0f64, 0.0), pt(10.0, 0.0)).unwrap();
    assert!((l.distance_to_point(&pt(3.0, 2.0)) - 2.0).abs() < 1e-12);

    let ortho = l.orthogonal_at(&pt(3.0, 0.0));
    assert!((ortho.distance_to_point(&pt(3.0, 5.0))).abs() < 1e-12);
    assert!((l.angle_to(&ortho) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);

    let par = l.parallel_through(&pt(0.0, 4.0));
    assert!(par.is_parallel_to(&l));
    assert!((par.distance_to_point(&pt(7.0, 4.0))).abs() < 1e-12);

    let off = l.offset(2.0);
    assert!(off.is_parallel_to(&l));
    assert!((off.distance_to_point(&pt(0.0, 0.0)) - 2.0).abs() < 1e-12);
}

#[test]
fn point_at_coord() {
    let l = HLine::from_points(pt(0.0f64, 0.0), pt(2.0, 2.0)).unwrap();
    assert_eq!(l.point_at(Axis::X, 5.0).unwrap(), pt(5.0, 5.0));
    assert_eq!(l.point_at(Axis::Y, -1.0).unwrap(), pt(-1.0, -1.0));

    let vertical = HLine::vertical(3.0f64);
    assert!(vertical.point_at(Axis::X, 1.0).is_err());
    assert_eq!(vertical.point_at(Axis::Y, 7.0).unwrap(), pt(3.0, 7.0));
}
