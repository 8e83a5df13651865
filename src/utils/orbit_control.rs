use glam::{Vec2, Vec3};

use crate::app::input::{Input, MouseButton};
use crate::scene::camera::Camera;

const PHI_EPS: f32 = 0.0001;

/// Spherical orbit around a target point.
///
/// Right-drag orbits, middle-drag pans and the wheel zooms. The camera's
/// position and target are rewritten on every update.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: false,
            min_distance: 1.0,
            max_distance: 1000.0,

            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Orbit matching the camera's current eye and target.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length();

        let mut controls = Self::new(camera.target, radius);
        if radius > 0.0 {
            controls.theta = offset.x.atan2(offset.z);
            controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        }
        controls.radius = radius.clamp(controls.min_distance, controls.max_distance);
        controls
    }

    /// Unit vector from the center towards the eye.
    fn offset_direction(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }

    pub fn update(&mut self, camera: &mut Camera, input: &Input, dt: f32) {
        let screen_height = input.screen_size().y.max(1.0);
        let cursor_delta = input.mouse_delta();

        if input.is_button_down(MouseButton::Right) {
            let rotate_per_pixel = 2.0 * std::f32::consts::PI / screen_height;
            self.rotate_delta -= cursor_delta * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);

            let delta_apply = self.rotate_delta * (1.0 - retention);
            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        self.phi = self.phi.clamp(PHI_EPS, std::f32::consts::PI - PHI_EPS);

        let scroll = input.scroll_delta().y;
        if scroll != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(scroll.abs());
            if scroll > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        if input.is_button_down(MouseButton::Middle) {
            let half_fov = camera.fovy.to_radians() / 2.0;
            let target_world_height = 2.0 * self.radius * half_fov.tan();
            let pixels_to_world_ratio = target_world_height / screen_height;

            let forward = -self.offset_direction();
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward).normalize_or_zero();

            self.center += (right * -cursor_delta.x + up * cursor_delta.y)
                * pixels_to_world_ratio
                * self.pan_speed;
        }

        camera.target = self.center;
        camera.position = self.center + self.offset_direction() * self.radius;
    }
}
