//! Cross-section polygon types.

use strata_math::{cross2, Point2, EPSILON};

/// One closed loop of a cross-section.
///
/// Vertices are stored in traversal order; the last vertex connects back
/// to the first implicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplePolygon {
    /// Loop vertices, in order.
    pub points: Vec<Point2>,
}

impl SimplePolygon {
    /// Create a loop from ordered vertices.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the loop has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive for counterclockwise winding, negative for clockwise.
    /// Consumers use the sign (or containment tests) to tell outer
    /// boundaries from holes.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }
        area / 2.0
    }

    /// Is the loop wound counterclockwise?
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Total boundary length, including the implicit closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| (self.points[(i + 1) % n] - self.points[i]).norm())
            .sum()
    }

    /// Copy of the loop with collinear vertices removed.
    ///
    /// A vertex is dropped when the cross product of its incoming and
    /// outgoing edge vectors is below tolerance, i.e. it lies on the
    /// straight line between its neighbours. Runs to a fixpoint, so
    /// applying it twice changes nothing.
    pub fn simplified(&self) -> Self {
        let mut points = self.points.clone();
        loop {
            let n = points.len();
            if n < 3 {
                return Self::new(points);
            }
            let kept: Vec<Point2> = (0..n)
                .filter(|&i| {
                    let incoming = points[i] - points[(i + n - 1) % n];
                    let outgoing = points[(i + 1) % n] - points[i];
                    cross2(&incoming, &outgoing).abs() >= EPSILON
                })
                .map(|i| points[i])
                .collect();
            if kept.len() == n {
                return Self::new(kept);
            }
            points = kept;
        }
    }
}

/// A full cross-section: an outer boundary plus zero or more holes.
///
/// The outer boundary is the first loop extracted by contour linking:
/// the max-x seed guarantees it is the outermost one. Hole winding is not
/// normalized; use [`SimplePolygon::signed_area`] when orientation
/// matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// The outer boundary.
    pub exterior: SimplePolygon,
    /// Inner loops (holes).
    pub interiors: Vec<SimplePolygon>,
}

impl Polygon {
    /// Build a polygon from extracted loops: the first becomes the
    /// exterior, the rest holes.
    pub fn from_loops(mut loops: Vec<SimplePolygon>) -> Self {
        if loops.is_empty() {
            return Self::default();
        }
        let exterior = loops.remove(0);
        Self {
            exterior,
            interiors: loops,
        }
    }

    /// True for the empty placeholder (no boundary at all).
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty() && self.interiors.is_empty()
    }

    /// All loops, exterior first.
    pub fn paths(&self) -> impl Iterator<Item = &SimplePolygon> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Remove collinear vertices from every loop.
    pub fn simplify(&mut self) {
        self.exterior = self.exterior.simplified();
        for hole in &mut self.interiors {
            *hole = hole.simplified();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(points: &[[f64; 2]]) -> SimplePolygon {
        SimplePolygon::new(points.iter().map(|p| Point2::new(p[0], p[1])).collect())
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_relative_eq!(ccw.signed_area(), 1.0);
        assert!(ccw.is_ccw());

        let cw = poly(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
        assert_relative_eq!(cw.signed_area(), -1.0);
        assert!(!cw.is_ccw());
    }

    #[test]
    fn test_perimeter_includes_closing_edge() {
        let square = poly(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
        assert_relative_eq!(square.perimeter(), 8.0);
    }

    #[test]
    fn test_simplify_removes_collinear_vertices() {
        let redundant = poly(&[
            [0.0, 0.0],
            [1.0, 0.0], // on the bottom edge
            [2.0, 0.0],
            [2.0, 2.0],
            [1.0, 1.0], // on the closing diagonal
        ]);
        let simplified = redundant.simplified();
        assert_eq!(simplified.len(), 3);
        assert_relative_eq!(
            simplified.signed_area(),
            redundant.signed_area(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let redundant = poly(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [0.0, 3.0],
        ]);
        let once = redundant.simplified();
        let twice = once.simplified();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 4);
    }

    #[test]
    fn test_simplify_keeps_true_corners() {
        let square = poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(square.simplified(), square);
    }

    #[test]
    fn test_simplify_drops_duplicate_points() {
        let duplicated = poly(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [2.0, 2.0],
            [0.0, 2.0],
        ]);
        assert_eq!(duplicated.simplified().len(), 4);
    }

    #[test]
    fn test_from_loops_tags_exterior_first() {
        let outer = poly(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
        let hole = poly(&[[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]]);
        let polygon = Polygon::from_loops(vec![outer.clone(), hole.clone()]);
        assert_eq!(polygon.exterior, outer);
        assert_eq!(polygon.interiors, vec![hole]);
        assert_eq!(polygon.paths().count(), 2);
    }

    #[test]
    fn test_empty_placeholder() {
        let placeholder = Polygon::default();
        assert!(placeholder.is_empty());
        assert!(!Polygon::from_loops(vec![poly(&[[0.0, 0.0]])]).is_empty());
    }
}
