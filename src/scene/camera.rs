use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::math::Ray;

/// Perspective viewer camera described by an eye point and a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(20.0, 20.0, 20.0),
            target: Vec3::new(3.0, 3.0, 3.0),
            up: Vec3::Y,
            fovy: 45.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

impl Camera {
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space ray through the pixel `cursor` of a `screen_size` viewport.
    ///
    /// The ray starts at the eye and points through the unprojected cursor;
    /// a degenerate viewport falls back to the view direction.
    #[must_use]
    pub fn screen_ray(&self, cursor: Vec2, screen_size: Vec2) -> Ray {
        let forward = (self.target - self.position).normalize_or_zero();
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return Ray::new(self.position, forward);
        }

        let ndc_x = 2.0 * cursor.x / screen_size.x - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / screen_size.y;

        let inv = self.view_projection_matrix(screen_size.x / screen_size.y).inverse();
        let unproject = |z: f32| {
            let p = inv * Vec4::new(ndc_x, ndc_y, z, 1.0);
            p.truncate() / p.w
        };

        let near_point = unproject(0.0);
        let far_point = unproject(1.0);
        let direction = (far_point - near_point).normalize_or_zero();

        if direction == Vec3::ZERO {
            Ray::new(self.position, forward)
        } else {
            Ray::new(self.position, direction)
        }
    }
}
