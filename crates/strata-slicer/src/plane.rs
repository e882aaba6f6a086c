//! Cutting plane and parametric line types.

use strata_math::{Point2, Point3, Vec2, Vec3};

/// A cutting plane with an embedded 2D coordinate frame.
///
/// The frame is right-handed and orthonormal: `y_axis = normal × x_axis`.
/// `new` normalizes the normal and x-axis, so translated copies of a plane
/// keep a valid frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane, origin of the 2D frame.
    pub point: Point3,
    /// Unit plane normal.
    pub normal: Vec3,
    /// Unit in-plane x-axis.
    pub x_axis: Vec3,
}

impl Plane {
    /// Create a plane from a point, normal, and in-plane x-axis.
    ///
    /// The normal and x-axis are normalized; they must be non-zero and
    /// perpendicular to each other.
    pub fn new(point: Point3, normal: Vec3, x_axis: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            x_axis: x_axis.normalize(),
        }
    }

    /// Horizontal plane at height `z`, with the world x-axis as the
    /// in-plane x-axis.
    pub fn horizontal(z: f64) -> Self {
        Self::new(Point3::new(0.0, 0.0, z), Vec3::z(), Vec3::x())
    }

    /// The derived in-plane y-axis, `normal × x_axis`.
    pub fn y_axis(&self) -> Vec3 {
        self.normal.cross(&self.x_axis).normalize()
    }

    /// A copy of this plane translated `distance` along its normal.
    pub fn offset(&self, distance: f64) -> Self {
        Self {
            point: self.point + self.normal * distance,
            ..*self
        }
    }

    /// Signed distance from `p` to the plane (positive on the normal
    /// side).
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&(p - self.point))
    }

    /// Intersection point of a line with this plane.
    ///
    /// Assumes the line is not parallel to the plane: the caller only
    /// parameterizes mesh edges already known to cross it.
    pub fn intersect_line(&self, line: &Line) -> Point3 {
        let t = (self.point - line.point).dot(&self.normal) / line.direction.dot(&self.normal);
        line.point + line.direction * t
    }

    /// Project a 3D point into the plane's 2D frame.
    pub fn project(&self, p: &Point3) -> Point2 {
        let d = p - self.point;
        Point2::new(d.dot(&self.x_axis), d.dot(&self.y_axis()))
    }

    /// Project a 3D direction into the plane's 2D frame (no point
    /// offset).
    pub fn project_direction(&self, v: &Vec3) -> Vec2 {
        Vec2::new(v.dot(&self.x_axis), v.dot(&self.y_axis()))
    }
}

/// A parametric line: point plus direction.
///
/// Transient helper used to intersect a mesh edge with a plane; the
/// direction is not normalized so `t = 1` lands on the edge's far vertex.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    /// A point on the line.
    pub point: Point3,
    /// Line direction (not normalized).
    pub direction: Vec3,
}

impl Line {
    /// Line through `a` in the direction of `b`.
    pub fn through(a: &Point3, b: &Point3) -> Self {
        Self {
            point: *a,
            direction: b - a,
        }
    }
}
