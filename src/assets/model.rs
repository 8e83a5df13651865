use std::path::PathBuf;

use glam::Vec3;

use crate::animation::AnimationClip;
use crate::scene::skeleton::Skeleton;

/// Triangle mesh in model space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub positions: Vec<Vec3>,
    /// Triangle list; empty for non-indexed meshes.
    pub indices: Vec<u32>,
}

impl MeshData {
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len() / 3
        } else {
            self.indices.len() / 3
        }
    }
}

/// A loaded model: meshes plus the skeleton its animations drive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub name: String,
    pub meshes: Vec<MeshData>,
    pub skeleton: Skeleton,
}

impl Model {
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshData::triangle_count).sum()
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.skeleton.bone_count()
    }
}

/// A model together with its animation clips and source path.
///
/// Owned by the session; replacing it drops the previous model and clips.
#[derive(Debug, Clone, Default)]
pub struct LoadedModel {
    pub path: PathBuf,
    pub model: Model,
    pub clips: Vec<AnimationClip>,
}

impl LoadedModel {
    #[must_use]
    pub fn clip(&self, index: usize) -> Option<&AnimationClip> {
        self.clips.get(index)
    }

    #[must_use]
    pub fn clip_names(&self) -> Vec<&str> {
        self.clips.iter().map(|c| c.name.as_str()).collect()
    }
}
