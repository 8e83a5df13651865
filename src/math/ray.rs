use glam::Vec3;

use super::vector;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Expected to be unit length; projections are not rescaled.
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Parameter of the orthogonal projection of `point` onto the ray,
    /// clamped to `>= 0` so points behind the origin project onto it.
    #[must_use]
    pub fn project(&self, point: Vec3) -> f32 {
        self.direction.dot(point - self.origin).max(0.0)
    }

    /// Closest point on the ray to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        self.origin + self.direction * self.project(point)
    }

    /// Distance from `point` to the closest point on the ray.
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        vector::distance(self.closest_point(point), point)
    }
}
