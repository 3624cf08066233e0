#![deny(bare_trait_objects)]

//! 2D computational geometry on homogeneous coordinates.
//!
//! # Crates
//!
//! This meta-crate (`dual2d`) reexports the following sub-crates for
//! convenience:
//!
//! * **dual2d_geom** - Homogeneous points, lines, homographies and the
//!   primitive shape types.
//! * **dual2d_algorithms** - Intersection, containment and polygon
//!   algorithms over those shapes.
//!
//! Each `dual2d_<name>` crate is reexported as a `<name>` module in
//! `dual2d`. For example:
//!
//! ```ignore
//! extern crate dual2d_geom;
//! use dual2d_geom::Homography;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate dual2d;
//! use dual2d::geom::Homography;
//! ```
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled on each crate with the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Intersecting two shapes
//!
//! ```
//! use dual2d::geom::{point, Circle, FRect};
//! use dual2d::algorithms::intersection::Intersect;
//!
//! fn main() {
//!     let circle = Circle::new(point(0.0, 0.0), 1.0).unwrap();
//!     let rect = FRect::from_coords(0.0, -2.0, 3.0, 2.0).unwrap();
//!
//!     let crossings = circle.intersect(&rect);
//!     assert!(crossings.exists());
//!     for p in crossings.points() {
//!         println!("crossing at ({}, {})", p.x, p.y);
//!     }
//! }
//! ```
//!
//! ## Composing and applying a homography
//!
//! ```
//! use dual2d::geom::{point, Homography};
//!
//! fn main() {
//!     let mut transform = Homography::identity();
//!     transform.add_rotation(std::f64::consts::FRAC_PI_2).add_translation(1.0, 0.0);
//!
//!     let p = transform.transform_point(point(1.0, 0.0));
//!     assert!((p.x - 1.0).abs() < 1e-9);
//!     assert!((p.y - 1.0).abs() < 1e-9);
//! }
//! ```

pub extern crate dual2d_algorithms;
pub extern crate dual2d_geom;

pub use dual2d_algorithms as algorithms;
pub use dual2d_geom as geom;
