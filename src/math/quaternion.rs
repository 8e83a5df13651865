//! Quaternion helpers with `w` stored last.

use glam::{Quat, Vec3};

/// Hamilton product `a * b`.
#[must_use]
pub fn multiply(a: Quat, b: Quat) -> Quat {
    Quat::from_xyzw(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// Conjugate divided by the squared norm.
///
/// Returns the identity quaternion `(0, 0, 0, 1)` when the squared norm is not
/// positive.
#[must_use]
pub fn invert(q: Quat) -> Quat {
    let norm_squared = q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w;

    if norm_squared > 0.0 {
        let inv_norm = 1.0 / norm_squared;
        Quat::from_xyzw(-q.x * inv_norm, -q.y * inv_norm, -q.z * inv_norm, q.w * inv_norm)
    } else {
        Quat::IDENTITY
    }
}

/// Builds a quaternion from pitch (`x`), yaw (`y`) and roll (`z`) in radians.
///
/// Equivalent to `yaw * pitch * roll`, i.e. `glam`'s `EulerRot::YXZ`.
#[must_use]
pub fn from_euler(angle: Vec3) -> Quat {
    let (sin_pitch, cos_pitch) = (angle.x * 0.5).sin_cos();
    let (sin_yaw, cos_yaw) = (angle.y * 0.5).sin_cos();
    let (sin_roll, cos_roll) = (angle.z * 0.5).sin_cos();

    Quat::from_xyzw(
        cos_yaw * sin_pitch * cos_roll + sin_yaw * cos_pitch * sin_roll,
        sin_yaw * cos_pitch * cos_roll - cos_yaw * sin_pitch * sin_roll,
        cos_yaw * cos_pitch * sin_roll - sin_yaw * sin_pitch * cos_roll,
        cos_yaw * cos_pitch * cos_roll + sin_yaw * sin_pitch * sin_roll,
    )
}

/// Normalizes `q`, leaving a zero-length quaternion untouched.
#[must_use]
pub fn normalize(q: Quat) -> Quat {
    let norm = (q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w).sqrt();
    if norm > 0.0 { q / norm } else { q }
}
