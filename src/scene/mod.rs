//! Scene state of the viewer: the model transform, the camera and the
//! skeleton with its per-frame pose resolution.

pub mod camera;
pub mod skeleton;
pub mod transform;

pub use camera::Camera;
pub use skeleton::{Bone, BoneSegment, Joint, Pose, Skeleton, resolve_pose};
pub use transform::{Transform, axis_indicators, compose_world};
