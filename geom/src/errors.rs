use thiserror::Error;

/// Construction-time invariant violations, plus the few operations whose
/// caller has no representable "empty" alternative.
///
/// Queries on well-formed shapes (intersection, containment) never return
/// these: "no geometric relationship" is a normal empty result, not an error.
#[non_exhaustive]
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Construction from coincident or insufficient points, a zero or
    /// negative radius, a zero-area rectangle.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// The meet of two parallel lines is a point at infinity.
    #[error("parallel lines have no finite intersection point")]
    NoIntersection,

    /// The matrix determinant is below the distance threshold.
    #[error("singular matrix cannot be inverted")]
    SingularMatrix,

    /// An area-dependent operation was applied to a zero-area shape.
    #[error("degenerate shape: {0}")]
    DegenerateShape(&'static str),

    /// A fold over an empty (or fully degenerate) collection.
    #[error("empty input")]
    EmptyInput,

    /// Cartesian coordinates were requested from an ideal point.
    #[error("point at infinity has no cartesian coordinates")]
    PointAtInfinity,
}
