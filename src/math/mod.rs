//! Linear Algebra Kernel
//!
//! Pure, allocation-free operations over the `glam` value types used by the
//! viewer: [`Vec3`](glam::Vec3) for positions, scales and Euler angles,
//! [`Quat`](glam::Quat) for orientations and [`Mat4`](glam::Mat4) for affine
//! transforms in column-major layout (`m0..m15`, translation in `m12..m14`).
//!
//! Most of the plain vector algebra (zero, one, add, subtract, component-wise
//! multiply, scale, dot) is expressed directly with `glam` operators. The
//! functions here cover the operations whose conventions matter to the rest
//! of the crate:
//!
//! - [`matrix`]: product, translate/scale construction, the negated-angle
//!   `XYZ` rotation used by the model transform, quaternion conversion.
//! - [`quaternion`]: Hamilton product, guarded inverse, Euler construction.
//! - [`vector`]: distance, quaternion sandwich rotation, affine point transform.
//! - [`Ray`]: origin + direction pair with closest-point queries.

pub mod matrix;
pub mod quaternion;
pub mod ray;
pub mod vector;

pub use ray::Ray;

/// Degrees-to-radians factor.
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;
