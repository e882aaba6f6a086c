#![warn(missing_docs)]

//! Geometric slicing core for strata.
//!
//! Given a triangle mesh and a cutting plane, this crate computes the
//! cross-section of the mesh as one or more closed 2D polygons:
//!
//! 1. Classify each triangle against the plane and compute its
//!    intersection edges ([`intersect`]).
//! 2. Project the edges into the plane's 2D frame, dropping degenerate
//!    ones.
//! 3. Link the unordered edge pool back into closed contours by
//!    nearest-endpoint matching with directional-angle tie-breaking
//!    ([`contour`]).
//!
//! [`slice::slice_mesh`] sweeps a plane across the mesh extent at a fixed
//! layer height and runs the pipeline once per layer, in parallel.
//!
//! # Example
//!
//! ```ignore
//! use strata_mesh::stl;
//! use strata_slicer::{slice_mesh, Plane};
//!
//! let mesh = stl::load("part.stl")?;
//! let layers = slice_mesh(&mesh, &Plane::horizontal(0.0), 0.2)?;
//! println!("{} layers", layers.len());
//! ```

pub mod contour;
pub mod error;
pub mod intersect;
pub mod path;
pub mod plane;
pub mod slice;

pub use contour::{extract_loop, link_loops};
pub use error::{Result, SlicerError};
pub use intersect::{Edge2, Edge3};
pub use path::{Polygon, SimplePolygon};
pub use plane::{Line, Plane};
pub use slice::{cross_section, slice_mesh};
