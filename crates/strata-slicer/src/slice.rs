//! Cross-section extraction and the multi-plane layer sweep.

use rayon::prelude::*;
use strata_mesh::Mesh;
use tracing::debug;

use crate::contour::link_loops;
use crate::error::{Result, SlicerError};
use crate::intersect::{candidates, project_edge, triangle_edges};
use crate::path::Polygon;
use crate::plane::Plane;

/// Cross-section of the mesh with a single plane.
///
/// Fails with [`SlicerError::PlaneMissesMesh`] when no triangle straddles
/// or touches the plane, and with [`SlicerError::LinkingFailed`] when the
/// intersection edges cannot be closed into a first contour (degenerate
/// cross-section or a gap in the mesh).
///
/// The result is not simplified; see [`Polygon::simplify`].
pub fn cross_section(mesh: &Mesh, plane: &Plane) -> Result<Polygon> {
    let candidates = candidates(mesh, plane);
    if candidates.is_empty() {
        return Err(SlicerError::PlaneMissesMesh);
    }

    let pool: Vec<_> = candidates
        .iter()
        .flat_map(|tri| triangle_edges(plane, tri))
        .filter_map(|edge| project_edge(plane, &edge))
        .collect();

    let loops = link_loops(pool)?;
    Ok(Polygon::from_loops(loops))
}

/// Slice the mesh into layers along the plane normal.
///
/// The reference plane is swept across the mesh's scalar extent along its
/// normal, from the bottom boundary up to and including the top one, at
/// `layer_height` steps: `floor((max - min) / h) + 1` layers. Each layer
/// runs the full intersection pipeline followed by collinear
/// simplification. Layers are computed in parallel and returned
/// bottom-to-top.
///
/// A layer where nothing intersects, or where no closed contour can be
/// linked (a plane tangent to the mesh at a vertex, for instance), is
/// recorded as an empty placeholder [`Polygon`] so layer indices stay
/// dense.
pub fn slice_mesh(mesh: &Mesh, plane: &Plane, layer_height: f64) -> Result<Vec<Polygon>> {
    if !(layer_height > 0.0) {
        return Err(SlicerError::InvalidLayerHeight(layer_height));
    }

    let (min, max) = mesh
        .extent_along(&plane.normal)
        .ok_or(SlicerError::EmptyMesh)?;
    let reference = plane.point.coords.dot(&plane.normal);

    let offsets: Vec<f64> = (0..)
        .map(|layer| min + layer as f64 * layer_height)
        .take_while(|offset| *offset <= max)
        .collect();

    let layers: Vec<Polygon> = offsets
        .into_par_iter()
        .map(|offset| {
            let layer_plane = plane.offset(offset - reference);
            match cross_section(mesh, &layer_plane) {
                Ok(mut polygon) => {
                    polygon.simplify();
                    polygon
                }
                Err(error) => {
                    debug!(offset, %error, "layer has no closed contour");
                    Polygon::default()
                }
            }
        })
        .collect();

    debug!(
        layers = layers.len(),
        layer_height, "sliced mesh into layers"
    );
    Ok(layers)
}
