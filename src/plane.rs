//! The cutting [`Plane`] and its side/intersection predicates.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Which side of a plane a point (or a whole untouched mesh) lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfSpace {
    /// The positive-normal half-space.
    Front,
    /// The negative-normal half-space.
    Back,
}

/// An oriented plane in normal + signed-offset form: `normal · p = offset`.
///
/// The normal is expected to be unit length; the constructors normalize it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane.
    pub normal: Vector3<Real>,
    /// Distance from the origin along `normal`.
    pub offset: Real,
}

impl Plane {
    /// Create a plane from a (not necessarily unit) normal and a signed offset.
    pub fn from_normal(normal: Vector3<Real>, offset: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            offset,
        }
    }

    /// Create a plane from a normal and a point known to lie on the plane.
    pub fn from_normal_point(normal: Vector3<Real>, point: Point3<Real>) -> Self {
        let normal = normal.normalize();
        let offset = normal.dot(&point.coords);
        Plane { normal, offset }
    }

    /// A `+Y`-facing plane at the given height; the re-slice pass cuts with
    /// a series of these.
    pub fn horizontal(height: Real) -> Self {
        Plane {
            normal: Vector3::y(),
            offset: height,
        }
    }

    /// Flip the plane's orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.offset = -self.offset;
    }

    /// Signed distance from the plane to `point` (positive on the front side).
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.offset
    }

    /// `true` when `point` lies strictly in the positive-normal half-space.
    ///
    /// Deliberately tolerance-free: a point exactly on the plane falls to the
    /// back side per the sign of the dot product, so classification is
    /// deterministic even when it is numerically fragile near-coplanar.
    #[inline]
    pub fn is_front(&self, point: &Point3<Real>) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// Classify `point` into a [`HalfSpace`].
    #[inline]
    pub fn halfspace(&self, point: &Point3<Real>) -> HalfSpace {
        if self.is_front(point) {
            HalfSpace::Front
        } else {
            HalfSpace::Back
        }
    }

    /// Intersect the segment `a -> b` with the plane, returning the hit point
    /// and the interpolation parameter `t in [0, 1]` used to lerp the other
    /// vertex attributes at the same spot.
    ///
    /// The caller must guarantee `a` and `b` straddle the plane; a segment
    /// parallel to the plane (or a zero-length segment) has no defined
    /// intersection and yields `None`.
    pub fn intersect_segment(
        &self,
        a: &Point3<Real>,
        b: &Point3<Real>,
    ) -> Option<(Point3<Real>, Real)> {
        let dir = b - a;
        let denom = self.normal.dot(&dir);
        if denom == 0.0 {
            return None;
        }
        let t = (self.offset - self.normal.dot(&a.coords)) / denom;
        Some((a + dir * t, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn side_test_is_strict() {
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        assert!(plane.is_front(&Point3::new(0.0, 1.0, 0.0)));
        assert!(!plane.is_front(&Point3::new(0.0, 0.0, 0.0)));
        // exactly on the plane falls to the back side
        assert!(!plane.is_front(&Point3::new(3.0, 0.5, -2.0)));
    }

    #[test]
    fn flip_negates_both() {
        let mut plane = Plane::from_normal(Vector3::y(), 2.0);
        plane.flip();
        assert_eq!(plane.normal, Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.offset, -2.0);
    }

    #[test]
    fn segment_intersection_parameter() {
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 2.0, 0.0);
        let (hit, t) = plane.intersect_segment(&a, &b).unwrap();
        assert_relative_eq!(t, 0.25);
        assert_relative_eq!(hit.y, 0.5);
    }

    #[test]
    fn parallel_segment_has_no_intersection() {
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        assert!(plane.intersect_segment(&a, &b).is_none());
    }
}
