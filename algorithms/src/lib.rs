#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Intersection, containment and polygon manipulation algorithms for
//! [dual2d_geom](https://docs.rs/dual2d_geom/) shapes.
//!
//! This crate is reexported in [dual2d](https://docs.rs/dual2d/).

pub extern crate dual2d_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod aabb;
pub mod containment;
pub mod hull;
pub mod intersection;
pub mod minimize;
pub mod offset;
pub mod rect_ops;
pub mod splitter;

pub use crate::intersection::{Intersect, Intersection};
