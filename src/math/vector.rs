use glam::{Mat4, Quat, Vec3};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Rotates `v` by `q` with the sandwich product `q * v * q⁻¹`.
///
/// `v` is lifted to the pure quaternion `(v, 0)` and the conjugate stands in
/// for the inverse, so `q` is expected to be unit length.
#[must_use]
pub fn rotate_by_quaternion(v: Vec3, q: Quat) -> Vec3 {
    let conj = Quat::from_xyzw(-q.x, -q.y, -q.z, q.w);

    // q * (v, 0)
    let qv = Quat::from_xyzw(
        q.w * v.x + q.y * v.z - q.z * v.y,
        q.w * v.y + q.z * v.x - q.x * v.z,
        q.w * v.z + q.x * v.y - q.y * v.x,
        -q.x * v.x - q.y * v.y - q.z * v.z,
    );

    // (q * v) * q⁻¹
    Vec3::new(
        qv.w * conj.x + qv.x * conj.w + qv.y * conj.z - qv.z * conj.y,
        qv.w * conj.y - qv.x * conj.z + qv.y * conj.w + qv.z * conj.x,
        qv.w * conj.z + qv.x * conj.y - qv.y * conj.x + qv.z * conj.w,
    )
}

/// Applies the 3x3 block and translation of `mat` to the point `v`.
///
/// The bottom row is ignored, so `mat` must be affine.
#[must_use]
pub fn transform(v: Vec3, mat: Mat4) -> Vec3 {
    let x = mat.x_axis;
    let y = mat.y_axis;
    let z = mat.z_axis;
    let w = mat.w_axis;

    Vec3::new(
        v.x * x.x + v.y * y.x + v.z * z.x + w.x,
        v.x * x.y + v.y * y.y + v.z * z.y + w.y,
        v.x * x.z + v.y * y.z + v.z * z.z + w.z,
    )
}

/// Average of the three components, used to size markers from a non-uniform
/// scale.
#[inline]
#[must_use]
pub fn average(v: Vec3) -> f32 {
    (v.x + v.y + v.z) / 3.0
}
