use glam::{Mat4, Vec3};

use crate::math::{matrix, vector};

/// Length of the axis indicator lines relative to the average scale.
pub const AXIS_INDICATOR_FACTOR: f32 = 0.1;

/// Model transform component.
///
/// Holds the position, Euler rotation (degrees) and scale edited by the
/// sliders and the gizmo, plus a cached world matrix with shadow-state dirty
/// checking. The drawable itself is never mutated: renderers receive the
/// composed matrix alongside a shared reference to the model.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,

    world_matrix: Mat4,

    last_position: Vec3,
    last_rotation: Vec3,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,

            world_matrix: Mat4::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Rebuilds the world matrix if any component changed since the last call.
    ///
    /// Returns whether the matrix was recomputed.
    pub fn update_world_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.world_matrix = compose_world(self.position, self.rotation, self.scale);

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Cached world matrix as of the last [`update_world_matrix`](Self::update_world_matrix).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Rotation-only matrix for the current Euler angles.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat4 {
        matrix::rotate_degrees(self.rotation)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Scale back to `(1, 1, 1)`.
    pub fn reset_scale(&mut self) {
        self.scale = Vec3::ONE;
    }

    /// Position and rotation to zero, scale to one.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.rotation = Vec3::ZERO;
        self.scale = Vec3::ONE;
    }

    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Composes the world matrix `Translate(pos) * Rotate(rot_degrees) * Scale(scale)`.
#[must_use]
pub fn compose_world(pos: Vec3, rot_degrees: Vec3, scale: Vec3) -> Mat4 {
    matrix::compose_trs(pos, rot_degrees, scale)
}

/// Local X/Y/Z direction lines drawn at `origin`.
///
/// Each line runs from `origin` along one column of the rotation matrix,
/// scaled by the average of `scale` times [`AXIS_INDICATOR_FACTOR`].
/// Returned in X, Y, Z order as `(start, end)` pairs.
#[must_use]
pub fn axis_indicators(origin: Vec3, rot_degrees: Vec3, scale: Vec3) -> [(Vec3, Vec3); 3] {
    let rot = matrix::rotate_degrees(rot_degrees);
    let length = vector::average(scale) * AXIS_INDICATOR_FACTOR;

    [
        (origin, origin + rot.x_axis.truncate() * length),
        (origin, origin + rot.y_axis.truncate() * length),
        (origin, origin + rot.z_axis.truncate() * length),
    ]
}
