//! Plane-triangle intersection and projection into the slice frame.
//!
//! Each candidate triangle is classified vertex-by-vertex against the
//! plane with the shared tolerance, then produces 0 to 3 intersection
//! edges depending on how many vertices lie on the plane. Edges are
//! projected into the plane's 2D frame before loop linking; edges whose
//! projected normal (or length) degenerates are dropped because they
//! carry no boundary direction.

use strata_math::{points2_close, Point2, Point3, Vec2, Vec3, EPSILON};
use strata_mesh::{Mesh, Triangle};

use crate::plane::{Line, Plane};

/// A directed 3D cross-section edge, carrying the source facet normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge3 {
    /// Edge start.
    pub start: Point3,
    /// Edge end.
    pub end: Point3,
    /// Normal of the triangle that produced the edge.
    pub normal: Vec3,
}

/// A directed 2D cross-section edge in the plane frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2 {
    /// Edge start.
    pub start: Point2,
    /// Edge end.
    pub end: Point2,
    /// Projected facet normal.
    pub normal: Vec2,
}

/// Triangles that can intersect the plane.
///
/// A triangle strictly on one side (all signed distances above `EPSILON`
/// or all below `-EPSILON`) is skipped before classification.
pub fn candidates<'a>(mesh: &'a Mesh, plane: &Plane) -> Vec<&'a Triangle> {
    mesh.triangles
        .iter()
        .filter(|tri| {
            let d = tri.vertices.map(|v| plane.signed_distance(&v));
            !(d.iter().all(|&d| d > EPSILON) || d.iter().all(|&d| d < -EPSILON))
        })
        .collect()
}

/// Vertex side: `1` above the plane, `-1` below, `0` on it.
fn classify(distance: f64) -> i8 {
    if distance > EPSILON {
        1
    } else if distance < -EPSILON {
        -1
    } else {
        0
    }
}

const TRIANGLE_EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// Intersection edges of one triangle with the plane.
///
/// The result depends on how many vertices are classified on-plane:
///
/// - 0: one edge between the two edge-plane crossings if the triangle
///   straddles the plane, nothing otherwise.
/// - 1: one edge from the on-plane vertex to the opposite edge's crossing
///   if the other two vertices have opposite signs; a bare touch produces
///   nothing.
/// - 2: the connecting triangle edge, emitted verbatim.
/// - 3: all three edges of the coplanar triangle. They add no boundary
///   information and are filtered out again by [`project_edge`], but they
///   must not derail the reconstruction.
pub fn triangle_edges(plane: &Plane, tri: &Triangle) -> Vec<Edge3> {
    let class = tri
        .vertices
        .map(|v| classify(plane.signed_distance(&v)));
    let on_plane: Vec<usize> = (0..3).filter(|&i| class[i] == 0).collect();

    match on_plane.len() {
        0 => {
            let crossings: Vec<Point3> = TRIANGLE_EDGES
                .iter()
                .filter(|&&(a, b)| class[a] != class[b])
                .map(|&(a, b)| {
                    plane.intersect_line(&Line::through(&tri.vertices[a], &tri.vertices[b]))
                })
                .collect();
            match crossings.len() {
                // All vertices on one side within tolerance.
                0 => Vec::new(),
                2 => vec![Edge3 {
                    start: crossings[0],
                    end: crossings[1],
                    normal: tri.normal,
                }],
                n => unreachable!("triangle straddling a plane has {n} crossing edges"),
            }
        }
        1 => {
            let v = on_plane[0];
            let (a, b) = ((v + 1) % 3, (v + 2) % 3);
            if class[a] != class[b] {
                let line = Line::through(&tri.vertices[a], &tri.vertices[b]);
                vec![Edge3 {
                    start: tri.vertices[v],
                    end: plane.intersect_line(&line),
                    normal: tri.normal,
                }]
            } else {
                // The triangle only touches the plane at this vertex.
                Vec::new()
            }
        }
        2 => vec![Edge3 {
            start: tri.vertices[on_plane[0]],
            end: tri.vertices[on_plane[1]],
            normal: tri.normal,
        }],
        3 => TRIANGLE_EDGES
            .iter()
            .map(|&(a, b)| Edge3 {
                start: tri.vertices[a],
                end: tri.vertices[b],
                normal: tri.normal,
            })
            .collect(),
        n => unreachable!("invalid on-plane vertex count {n}"),
    }
}

/// Project a 3D cross-section edge into the plane's 2D frame.
///
/// Returns `None` for degenerate edges: a projected normal shorter than
/// the tolerance (the source triangle was parallel to the plane) or
/// coincident endpoints. Either would corrupt loop linking.
pub fn project_edge(plane: &Plane, edge: &Edge3) -> Option<Edge2> {
    let normal = plane.project_direction(&edge.normal);
    if normal.norm() < EPSILON {
        return None;
    }

    let start = plane.project(&edge.start);
    let end = plane.project(&edge.end);
    if points2_close(&start, &end) {
        return None;
    }

    Some(Edge2 { start, end, normal })
}
