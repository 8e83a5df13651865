//! Skeleton and per-frame pose resolution.
//!
//! A [`Skeleton`] is a flat bone table where every bone stores its parent's
//! index (`-1` for roots). [`resolve_pose`] places each bone of one animation
//! frame in world space using the model transform and emits a
//! [`BoneSegment`] for every bone with a parent, which is what the wireframe
//! view draws.

use glam::Vec3;

use crate::animation::AnimationClip;
use crate::errors::{Result, ViewerError};
use crate::math::{matrix, vector};
use crate::scene::Transform;

/// Parent index stored on root bones.
pub const NO_PARENT: i32 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub name: String,
    /// Index of the parent bone, or [`NO_PARENT`].
    pub parent: i32,
}

impl Bone {
    #[must_use]
    pub fn new(name: impl Into<String>, parent: i32) -> Self {
        Self { name: name.into(), parent }
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent < 0
    }

    /// Parent index as `usize`, `None` for roots.
    #[inline]
    #[must_use]
    pub fn parent_index(&self) -> Option<usize> {
        usize::try_from(self.parent).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skeleton {
    pub name: String,
    pub bones: Vec<Bone>,
}

impl Skeleton {
    #[must_use]
    pub fn new(name: &str, bones: Vec<Bone>) -> Self {
        Self { name: name.to_string(), bones }
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Index of the first root bone.
    #[must_use]
    pub fn root_bone_index(&self) -> Option<usize> {
        self.bones.iter().position(Bone::is_root)
    }

    /// Checks that every parent index refers to an existing bone.
    pub fn validate(&self) -> Result<()> {
        let count = self.bones.len();
        for (i, bone) in self.bones.iter().enumerate() {
            if let Some(parent) = bone.parent_index()
                && parent >= count
            {
                return Err(ViewerError::InvalidParent { bone: i, parent: bone.parent });
            }
        }
        Ok(())
    }
}

/// World-space position of one bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub bone: usize,
    pub position: Vec3,
}

/// Line between a bone and its parent, both in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneSegment {
    pub child: usize,
    pub parent: usize,
    pub start: Vec3,
    pub end: Vec3,
}

/// World-space pose of a skeleton at one animation frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pose {
    pub joints: Vec<Joint>,
    pub segments: Vec<BoneSegment>,
}

impl Pose {
    /// Axis-aligned bounds of all joint positions, `None` for an empty pose.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.joints.is_empty() {
            return None;
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for joint in &self.joints {
            min = min.min(joint.position);
            max = max.max(joint.position);
        }
        Some((min, max))
    }
}

/// Resolves the world-space pose of `skeleton` at `frame` of `clip`.
///
/// For every bone the clip's translation is scaled component-wise, rotated by
/// the transform's Euler rotation and offset by its position. The rotation
/// matrix is built once per call and shared by all bones.
///
/// Callers are expected to clamp `frame`; out-of-range frames, bones missing
/// from the frame table and dangling parent indices are reported as errors
/// rather than read.
pub fn resolve_pose(
    clip: &AnimationClip,
    frame: usize,
    transform: &Transform,
    skeleton: &Skeleton,
) -> Result<Pose> {
    let frame_count = clip.frame_count();
    let poses = clip
        .frame(frame)
        .ok_or(ViewerError::FrameOutOfRange { frame, frame_count })?;

    let bone_count = skeleton.bone_count();
    let available = poses.len();
    if available < bone_count {
        // First bone without a pose entry.
        return Err(ViewerError::BoneOutOfRange { bone: available, bone_count });
    }

    let rot = matrix::rotate_degrees(transform.rotation);
    let place = |translation: Vec3| {
        vector::transform(translation * transform.scale, rot) + transform.position
    };

    let joints: Vec<Joint> = poses[..bone_count]
        .iter()
        .enumerate()
        .map(|(bone, pose)| Joint { bone, position: place(pose.translation) })
        .collect();

    let mut segments = Vec::with_capacity(bone_count);
    for (i, bone) in skeleton.bones.iter().enumerate() {
        let Some(parent) = bone.parent_index() else {
            continue;
        };
        let Some(parent_joint) = joints.get(parent) else {
            return Err(ViewerError::InvalidParent { bone: i, parent: bone.parent });
        };

        segments.push(BoneSegment {
            child: i,
            parent,
            start: joints[i].position,
            end: parent_joint.position,
        });
    }

    Ok(Pose { joints, segments })
}
