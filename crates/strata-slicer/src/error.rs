//! Error types for the slicing core.

use thiserror::Error;

/// Errors that can occur while slicing.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SlicerError {
    /// Mesh has no triangles.
    #[error("mesh is empty")]
    EmptyMesh,

    /// Layer height must be positive.
    #[error("invalid layer height: {0}")]
    InvalidLayerHeight(f64),

    /// No candidate triangle straddles or touches the plane.
    #[error("plane does not intersect the mesh")]
    PlaneMissesMesh,

    /// The edge pool could not be closed into a first contour.
    #[error("could not link edges into a closed contour")]
    LinkingFailed,
}

/// Result type for slicer operations.
pub type Result<T> = std::result::Result<T, SlicerError>;
