//! # skua-grid
//!
//! Shared verification grid for comparing simulated and observed slick
//! footprints: a uniform lattice of square cells covering the union of both
//! extents, plus the planar geometry predicates the rasterizer needs.

mod bbox;
mod error;
pub mod geom;
mod grid;

pub use bbox::BoundingBox;
pub use error::GridError;
pub use grid::{Cell, Grid};
