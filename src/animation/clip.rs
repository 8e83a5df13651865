use glam::{Quat, Vec3};

use crate::animation::tracks::{KeyframeCursor, KeyframeTrack};
use crate::scene::skeleton::Bone;

/// Duration of one baked frame in milliseconds.
pub const FRAME_TIME_MS: u32 = 17;

/// Translation, rotation and scale of one bone at one frame, in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonePose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl BonePose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// `self ∘ local`: places a pose expressed relative to `self`.
    #[must_use]
    pub fn compose(&self, local: &BonePose) -> BonePose {
        BonePose {
            translation: self.rotation * (self.scale * local.translation) + self.translation,
            rotation: self.rotation * local.rotation,
            scale: self.scale * local.scale,
        }
    }
}

impl Default for BonePose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Keyframe tracks animating one bone. Missing channels keep the rest pose.
#[derive(Debug, Clone, Default)]
pub struct BoneTracks {
    pub translation: Option<KeyframeTrack<Vec3>>,
    pub rotation: Option<KeyframeTrack<Quat>>,
    pub scale: Option<KeyframeTrack<Vec3>>,
}

impl BoneTracks {
    #[must_use]
    pub fn duration(&self) -> f32 {
        let t = self.translation.as_ref().map_or(0.0, KeyframeTrack::duration);
        let r = self.rotation.as_ref().map_or(0.0, KeyframeTrack::duration);
        let s = self.scale.as_ref().map_or(0.0, KeyframeTrack::duration);
        t.max(r).max(s)
    }
}

#[derive(Default)]
struct BoneCursors {
    translation: KeyframeCursor,
    rotation: KeyframeCursor,
    scale: KeyframeCursor,
}

/// A baked skeletal animation.
///
/// Holds a frame table of model-space bone poses: `frame_poses[frame][bone]`.
/// Every frame has one entry per bone in `bones`.
#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    pub name: String,
    pub bones: Vec<Bone>,
    pub frame_poses: Vec<Vec<BonePose>>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, bones: Vec<Bone>, frame_poses: Vec<Vec<BonePose>>) -> Self {
        Self { name: name.into(), bones, frame_poses }
    }

    /// Samples per-bone tracks every [`FRAME_TIME_MS`] and stores the
    /// model-space result.
    ///
    /// `rest` holds the local pose used for channels without a track;
    /// `tracks` is indexed like `bones` and may be shorter. Parent indices
    /// outside `bones` are treated as roots.
    #[must_use]
    pub fn bake(name: impl Into<String>, bones: Vec<Bone>, rest: &[BonePose], tracks: &[BoneTracks]) -> Self {
        let duration = tracks.iter().map(BoneTracks::duration).fold(0.0_f32, f32::max);
        let frame_count = baked_frame_count(duration);

        let mut cursors: Vec<BoneCursors> = tracks.iter().map(|_| BoneCursors::default()).collect();
        let mut frame_poses = Vec::with_capacity(frame_count);

        for frame in 0..frame_count {
            let time = (frame as f32 * FRAME_TIME_MS as f32) / 1000.0;

            let locals: Vec<BonePose> = (0..bones.len())
                .map(|bone| {
                    let base = rest.get(bone).copied().unwrap_or_default();
                    match (tracks.get(bone), cursors.get_mut(bone)) {
                        (Some(track), Some(cursor)) => sample_bone(track, cursor, time, base),
                        _ => base,
                    }
                })
                .collect();

            frame_poses.push(to_model_space(&bones, &locals));
        }

        Self { name: name.into(), bones, frame_poses }
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_poses.len()
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// All bone poses of `frame`.
    #[must_use]
    pub fn frame(&self, frame: usize) -> Option<&[BonePose]> {
        self.frame_poses.get(frame).map(Vec::as_slice)
    }

    #[must_use]
    pub fn pose(&self, frame: usize, bone: usize) -> Option<&BonePose> {
        self.frame(frame)?.get(bone)
    }
}

/// `duration_ms / 17 + 1` frames, so a static clip still has one frame.
#[must_use]
pub fn baked_frame_count(duration_secs: f32) -> usize {
    let duration_ms = (duration_secs.max(0.0) * 1000.0).round() as usize;
    duration_ms / FRAME_TIME_MS as usize + 1
}

fn sample_bone(tracks: &BoneTracks, cursors: &mut BoneCursors, time: f32, base: BonePose) -> BonePose {
    let translation = tracks
        .translation
        .as_ref()
        .and_then(|t| t.sample_with_cursor(time, &mut cursors.translation))
        .unwrap_or(base.translation);
    let rotation = tracks
        .rotation
        .as_ref()
        .and_then(|t| t.sample_with_cursor(time, &mut cursors.rotation))
        .unwrap_or(base.rotation);
    let scale = tracks
        .scale
        .as_ref()
        .and_then(|t| t.sample_with_cursor(time, &mut cursors.scale))
        .unwrap_or(base.scale);

    BonePose { translation, rotation, scale }
}

/// Composes local poses along the parent chain of every bone.
///
/// Bones may be listed in any order. A chain is cut after `bones.len()` steps,
/// so a parent cycle cannot loop forever.
fn to_model_space(bones: &[Bone], locals: &[BonePose]) -> Vec<BonePose> {
    let count = bones.len();
    let mut resolved: Vec<Option<BonePose>> = vec![None; count];
    let mut chain = Vec::with_capacity(count);

    for start in 0..count {
        if resolved[start].is_some() {
            continue;
        }

        chain.clear();
        let mut current = Some(start);
        let mut origin = BonePose::IDENTITY;
        while let Some(bone) = current {
            if let Some(done) = resolved[bone] {
                origin = done;
                break;
            }
            if chain.len() > count {
                break;
            }
            chain.push(bone);
            current = bones[bone].parent_index().filter(|&p| p < count);
        }

        for &bone in chain.iter().rev() {
            origin = origin.compose(&locals[bone]);
            resolved[bone] = Some(origin);
        }
    }

    resolved.into_iter().map(Option::unwrap_or_default).collect()
}
