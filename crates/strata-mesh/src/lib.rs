#![warn(missing_docs)]

//! Triangle mesh types and STL loading for the strata slicer.
//!
//! A [`Mesh`] is a plain triangle soup as read from an STL file: each
//! triangle carries its own three vertices plus the facet normal. The mesh
//! is built once by the parser and is read-only during slicing.

pub mod stl;

use strata_math::{Point3, Vec3};
use thiserror::Error;

/// Errors raised while loading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// File could not be opened or read.
    #[error("could not read mesh file: {0}")]
    Io(#[from] std::io::Error),

    /// Only `.stl` files are understood.
    #[error("unsupported mesh format: {0} (expected .stl)")]
    UnsupportedFormat(String),

    /// The STL data violates the expected grammar or layout.
    #[error("malformed STL: {0}")]
    Syntax(String),
}

/// Result type for mesh loading.
pub type Result<T> = std::result::Result<T, MeshError>;

/// A single mesh facet: the facet normal and three ordered vertices.
///
/// Vertex order defines the winding; the normal is carried through slicing
/// so projected cross-section edges remember which way the surface faced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Facet normal as stored in the STL file.
    pub normal: Vec3,
    /// The three corners, in file order.
    pub vertices: [Point3; 3],
}

/// An immutable triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// All facets, in file order.
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a mesh from a list of triangles.
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty
    /// mesh.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let mut verts = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *verts.next()?;
        let (mut min, mut max) = (first, first);
        for v in verts {
            min = Point3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
            max = Point3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
        }
        Some((min, max))
    }

    /// Scalar extent `(min, max)` of all vertices projected onto `axis`,
    /// or `None` for an empty mesh.
    ///
    /// The axis is normalized internally, so the result is a distance
    /// along the axis direction. This drives the layer sweep.
    pub fn extent_along(&self, axis: &Vec3) -> Option<(f64, f64)> {
        let axis = axis.normalize();
        let mut projections = self
            .triangles
            .iter()
            .flat_map(|t| t.vertices.iter())
            .map(|v| v.coords.dot(&axis));
        let first = projections.next()?;
        let (mut min, mut max) = (first, first);
        for d in projections {
            min = min.min(d);
            max = max.max(d);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
        Triangle {
            normal: Vec3::new(0.0, 0.0, 1.0),
            vertices: [
                Point3::new(a[0], a[1], a[2]),
                Point3::new(b[0], b[1], b[2]),
                Point3::new(c[0], c[1], c[2]),
            ],
        }
    }

    #[test]
    fn test_bounds() {
        let mesh = Mesh::new(vec![
            tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 3.0, 0.0]),
            tri([0.0, 0.0, -1.0], [1.0, 1.0, 5.0], [-4.0, 0.5, 0.0]),
        ]);
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, -4.0);
        assert_relative_eq!(min.y, 0.0);
        assert_relative_eq!(min.z, -1.0);
        assert_relative_eq!(max.x, 2.0);
        assert_relative_eq!(max.y, 3.0);
        assert_relative_eq!(max.z, 5.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Mesh::default().bounds().is_none());
        assert!(Mesh::default().extent_along(&Vec3::z()).is_none());
    }

    #[test]
    fn test_extent_along_unnormalized_axis() {
        let mesh = Mesh::new(vec![tri(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 4.0],
            [1.0, 0.0, 2.0],
        )]);
        // Axis length must not scale the projections.
        let (min, max) = mesh.extent_along(&Vec3::new(0.0, 0.0, 10.0)).unwrap();
        assert_relative_eq!(min, 1.0);
        assert_relative_eq!(max, 4.0);
    }
}
