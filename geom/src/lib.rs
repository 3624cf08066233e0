#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! 2D projective geometry primitives on top of euclid.
//!
//! This crate is reexported in [dual2d](https://docs.rs/dual2d/).
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - homogeneous points and lines (dual 3-vectors),
//! - homographies (3×3 projective transformations),
//! - segments, axis-aligned rectangles, circles, ellipses and polylines.
//!
//! Points and lines are two readings of the same 3-component vector: a point
//! `(x, y)` is stored as `[x, y, 1]` (any nonzero multiple denotes the same
//! point, and a zero third component denotes a direction, i.e. a point at
//! infinity), while a line `a·x + b·y + c = 0` is kept normalized so that
//! `a² + b² = 1` with a fixed sign. Joining two points yields a line and
//! meeting two lines yields a point, both through the same cross product.
//!
//! # Comparison thresholds
//!
//! Floating point geometry needs a notion of "too close to distinguish".
//! Every is-zero, is-equal and is-parallel test in the crate goes through two
//! process-wide, per-scalar-type thresholds: [`Scalar::null_distance`] and
//! [`Scalar::null_angle`]. Both can be adjusted at startup (or per test) with
//! the matching setters; the `f32` defaults are looser than the `f64` ones.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod circle;
mod ellipse;
mod errors;
mod homogeneous;
mod homography;
mod polyline;
mod rect;
mod segment;
mod shape;
pub mod utils;

#[doc(inline)]
pub use crate::circle::Circle;
#[doc(inline)]
pub use crate::ellipse::Ellipse;
#[doc(inline)]
pub use crate::errors::GeomError;
#[doc(inline)]
pub use crate::homogeneous::{Axis, HLine, HPoint};
#[doc(inline)]
pub use crate::homography::Homography;
#[doc(inline)]
pub use crate::polyline::Polyline;
#[doc(inline)]
pub use crate::rect::FRect;
#[doc(inline)]
pub use crate::segment::Segment;
#[doc(inline)]
pub use crate::shape::Shape;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
    use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

    /// The scalar type geometric values are stored as.
    ///
    /// Implemented for `f32` and `f64`. The associated [`Scalar::Wide`] type
    /// is the accumulator used for intermediate cross products and
    /// determinants: sums of products are evaluated there before being cast
    /// back, which keeps `f32` geometry usable on inputs that would otherwise
    /// lose most of their significant bits.
    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + 'static
    {
        /// Higher (or equal) precision type used for intermediate computation.
        type Wide: Float;

        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;
        const TEN: Self;

        const MIN: Self;
        const MAX: Self;

        const EPSILON: Self;

        /// Default value of the distance threshold, a small multiple of the
        /// type's machine epsilon.
        const DEFAULT_NULL_DISTANCE: Self;
        /// Default value of the angle threshold, in radians.
        const DEFAULT_NULL_ANGLE: Self;

        /// The minimum distinguishable distance.
        ///
        /// Two points closer than this are considered equal, a length smaller
        /// than this is considered zero.
        fn null_distance() -> Self;

        /// Overrides the process-wide distance threshold for this scalar type.
        ///
        /// Setting zero restores the default. Concurrent mutation is not
        /// supported; set it at startup or per test. Reads are safe.
        fn set_null_distance(value: Self);

        /// The minimum distinguishable angle, in radians.
        fn null_angle() -> Self;

        /// Overrides the process-wide angle threshold for this scalar type.
        ///
        /// Same contract as [`Scalar::set_null_distance`].
        fn set_null_angle(value: Self);

        fn to_wide(self) -> Self::Wide;
        fn from_wide(v: Self::Wide) -> Self;

        fn value(v: f32) -> Self;
    }

    // A stored bit pattern of zero means "unset, use the default", so the
    // statics do not need a const float-to-bits conversion.
    static F32_NULL_DISTANCE: AtomicU32 = AtomicU32::new(0);
    static F32_NULL_ANGLE: AtomicU32 = AtomicU32::new(0);
    static F64_NULL_DISTANCE: AtomicU64 = AtomicU64::new(0);
    static F64_NULL_ANGLE: AtomicU64 = AtomicU64::new(0);

    impl Scalar for f32 {
        type Wide = f64;

        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const TEN: Self = 10.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const EPSILON: Self = 1e-4;

        const DEFAULT_NULL_DISTANCE: Self = 1e-5;
        const DEFAULT_NULL_ANGLE: Self = 1e-4;

        fn null_distance() -> Self {
            match F32_NULL_DISTANCE.load(Ordering::Relaxed) {
                0 => Self::DEFAULT_NULL_DISTANCE,
                bits => f32::from_bits(bits),
            }
        }

        fn set_null_distance(value: Self) {
            F32_NULL_DISTANCE.store(value.to_bits(), Ordering::Relaxed);
        }

        fn null_angle() -> Self {
            match F32_NULL_ANGLE.load(Ordering::Relaxed) {
                0 => Self::DEFAULT_NULL_ANGLE,
                bits => f32::from_bits(bits),
            }
        }

        fn set_null_angle(value: Self) {
            F32_NULL_ANGLE.store(value.to_bits(), Ordering::Relaxed);
        }

        #[inline]
        fn to_wide(self) -> f64 {
            self as f64
        }

        #[inline]
        fn from_wide(v: f64) -> Self {
            v as f32
        }

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        type Wide = f64;

        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const TEN: Self = 10.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const EPSILON: Self = 1e-8;

        const DEFAULT_NULL_DISTANCE: Self = 1e-10;
        const DEFAULT_NULL_ANGLE: Self = 1e-9;

        fn null_distance() -> Self {
            match F64_NULL_DISTANCE.load(Ordering::Relaxed) {
                0 => Self::DEFAULT_NULL_DISTANCE,
                bits => f64::from_bits(bits),
            }
        }

        fn set_null_distance(value: Self) {
            F64_NULL_DISTANCE.store(value.to_bits(), Ordering::Relaxed);
        }

        fn null_angle() -> Self {
            match F64_NULL_ANGLE.load(Ordering::Relaxed) {
                0 => Self::DEFAULT_NULL_ANGLE,
                bits => f64::from_bits(bits),
            }
        }

        fn set_null_angle(value: Self) {
            F64_NULL_ANGLE.store(value.to_bits(), Ordering::Relaxed);
        }

        #[inline]
        fn to_wide(self) -> f64 {
            self
        }

        #[inline]
        fn from_wide(v: f64) -> Self {
            v
        }

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Size2D`.
pub use euclid::default::Size2D as Size;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

pub mod traits {
    use crate::{Point, Scalar, Vector};

    /// Things that can map points and vectors to points and vectors.
    ///
    /// This is the seam external transforms plug into; [`crate::Homography`]
    /// implements it for its affine use (a projective matrix maps a vector,
    /// i.e. a point at infinity, through its linear part only).
    pub trait Transformation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S>;
        fn transform_vector(&self, v: Vector<S>) -> Vector<S>;
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, S: Scalar, T: Transformation<S>> Transformation<S> for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            (*self).transform_vector(v)
        }
    }
}
