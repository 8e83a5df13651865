//! 4x4 matrix construction and composition.
//!
//! Every matrix is column-major: `m0..m3` is the first column and the
//! translation lives in `m12`, `m13`, `m14`. A product `a * b` applies `b`
//! to a point first.

use glam::{Mat4, Quat, Vec3};

use super::DEG2RAD;

/// Matrix product `a * b`; `b` is applied first.
#[inline]
#[must_use]
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}

/// Affine translation by `v`.
#[must_use]
pub fn translate(v: Vec3) -> Mat4 {
    #[rustfmt::skip]
    let m = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        v.x, v.y, v.z, 1.0,
    ];
    Mat4::from_cols_array(&m)
}

/// Axis-aligned scale by `v`.
#[must_use]
pub fn scale(v: Vec3) -> Mat4 {
    #[rustfmt::skip]
    let m = [
        v.x, 0.0, 0.0, 0.0,
        0.0, v.y, 0.0, 0.0,
        0.0, 0.0, v.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    Mat4::from_cols_array(&m)
}

/// Combined rotation from Euler angles in radians.
///
/// The terms are built from the *negated* angles around Z, then Y, then X.
/// The resulting matrix equals `Rx(angle.x) * Ry(angle.y) * Rz(angle.z)`,
/// i.e. a point is rotated about Z first and about X last.
#[must_use]
pub fn rotate_xyz(angle: Vec3) -> Mat4 {
    let (sinz, cosz) = (-angle.z).sin_cos();
    let (siny, cosy) = (-angle.y).sin_cos();
    let (sinx, cosx) = (-angle.x).sin_cos();

    #[rustfmt::skip]
    let m = [
        cosz * cosy,
        (cosz * siny * sinx) - (sinz * cosx),
        (cosz * siny * cosx) + (sinz * sinx),
        0.0,

        sinz * cosy,
        (sinz * siny * sinx) + (cosz * cosx),
        (sinz * siny * cosx) - (cosz * sinx),
        0.0,

        -siny,
        cosy * sinx,
        cosy * cosx,
        0.0,

        0.0, 0.0, 0.0, 1.0,
    ];
    Mat4::from_cols_array(&m)
}

/// Same as [`rotate_xyz`] with the angles given in degrees.
#[must_use]
pub fn rotate_degrees(v: Vec3) -> Mat4 {
    rotate_xyz(v * DEG2RAD)
}

/// Rotation block from a quaternion.
///
/// The input is normalized first; a zero-length quaternion is used as-is
/// (which yields the identity block). The 3x3 block is filled in row order,
/// `m1 = 2(xy - wz)`, so for a column vector the result rotates by the
/// conjugate of `q`. Translation is zero and `m15 = 1`.
#[must_use]
pub fn from_quaternion(q: Quat) -> Mat4 {
    let norm = (q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w).sqrt();
    let q = if norm > 0.0 { q / norm } else { q };

    let xx = q.x * q.x;
    let yy = q.y * q.y;
    let zz = q.z * q.z;
    let xy = q.x * q.y;
    let xz = q.x * q.z;
    let yz = q.y * q.z;
    let wx = q.w * q.x;
    let wy = q.w * q.y;
    let wz = q.w * q.z;

    #[rustfmt::skip]
    let m = [
        1.0 - 2.0 * (yy + zz),
        2.0 * (xy - wz),
        2.0 * (xz + wy),
        0.0,

        2.0 * (xy + wz),
        1.0 - 2.0 * (xx + zz),
        2.0 * (yz - wx),
        0.0,

        2.0 * (xz - wy),
        2.0 * (yz + wx),
        1.0 - 2.0 * (xx + yy),
        0.0,

        0.0, 0.0, 0.0, 1.0,
    ];
    Mat4::from_cols_array(&m)
}

/// `Translate(pos) * Rotate(rot_degrees) * Scale(scl)`: scale first, then
/// rotate, then translate.
#[must_use]
pub fn compose_trs(pos: Vec3, rot_degrees: Vec3, scl: Vec3) -> Mat4 {
    multiply(translate(pos), multiply(rotate_degrees(rot_degrees), scale(scl)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_places_offset_in_last_column() {
        let m = translate(Vec3::new(1.0, 2.0, 3.0)).to_cols_array();
        assert_eq!(&m[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn zero_quaternion_gives_identity_block() {
        let m = from_quaternion(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert_eq!(m, Mat4::IDENTITY);
    }
}
