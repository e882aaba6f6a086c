//! Contour reconstruction: linking an unordered pool of 2D edges into
//! closed polygons.
//!
//! The edges produced by per-triangle intersection carry no adjacency
//! information, so loops are rebuilt by tolerance-based endpoint matching.
//! Where several edges meet at one vertex (non-manifold junctions, places
//! where the cross-section grazes the silhouette), the traversal picks the
//! continuation with the minimum directional angle from the incoming
//! direction.
//!
//! The pool is a swap-remove `Vec`; each traversal step removes exactly
//! one edge, so a traversal always terminates.

use strata_math::{directional_angle, points2_close, Point2, Vec2};
use tracing::debug;

use crate::error::{Result, SlicerError};
use crate::intersect::Edge2;
use crate::path::SimplePolygon;

/// Extract one closed loop from the pool, consuming its edges.
///
/// Seeds at the edge with the globally largest x endpoint, so the first
/// loop traced from a fresh pool is the outer perimeter. Returns `None`
/// when the loop in progress cannot be closed; edges consumed by the
/// failed attempt stay removed, which is what lets the caller drop
/// malformed leftovers.
pub fn extract_loop(pool: &mut Vec<Edge2>) -> Option<SimplePolygon> {
    let seed = pool
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            let ax = a.start.x.max(a.end.x);
            let bx = b.start.x.max(b.end.x);
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)?;

    let seed = &pool[seed];
    let start = if seed.start.x >= seed.end.x {
        seed.start
    } else {
        seed.end
    };

    let mut points = vec![start];
    let mut current = start;
    let mut direction = Vec2::new(1.0, 0.0);

    loop {
        let next = take_best_continuation(pool, &current, &direction)?;

        if points2_close(&next, &start) {
            return Some(SimplePolygon::new(points));
        }

        direction = next - current;
        current = next;
        points.push(next);
    }
}

/// Remove and return the far endpoint of the pool edge that best continues
/// the traversal from `current`, or `None` if no edge touches it.
///
/// Best means the minimum directional angle between the incoming direction
/// and the edge's outgoing direction.
fn take_best_continuation(
    pool: &mut Vec<Edge2>,
    current: &Point2,
    direction: &Vec2,
) -> Option<Point2> {
    let mut best: Option<(usize, Point2, f64)> = None;

    for (i, edge) in pool.iter().enumerate() {
        let far = if points2_close(&edge.start, current) {
            edge.end
        } else if points2_close(&edge.end, current) {
            edge.start
        } else {
            continue;
        };

        let angle = directional_angle(direction, &(far - current));
        if best.is_none_or(|(_, _, a)| angle < a) {
            best = Some((i, far, angle));
        }
    }

    let (index, far, _) = best?;
    pool.swap_remove(index);
    Some(far)
}

/// Link the whole pool into closed loops.
///
/// The first extraction must succeed; an unclosable first loop means the
/// cross-section is degenerate or the mesh has a gap. Further loops are
/// extracted while the pool is non-empty; once no more close, the
/// remaining edges are dropped silently.
pub fn link_loops(mut pool: Vec<Edge2>) -> Result<Vec<SimplePolygon>> {
    let first = extract_loop(&mut pool).ok_or(SlicerError::LinkingFailed)?;

    let mut loops = vec![first];
    while !pool.is_empty() {
        match extract_loop(&mut pool) {
            Some(polygon) => loops.push(polygon),
            None => {
                debug!(
                    remaining = pool.len(),
                    "dropping edges that do not close a loop"
                );
                break;
            }
        }
    }

    Ok(loops)
}
