//! Skeletal animation: keyframe tracks, baked clips and playback.

pub mod clip;
pub mod player;
pub mod tracks;
mod values;

pub use clip::{AnimationClip, BonePose, BoneTracks, FRAME_TIME_MS};
pub use player::AnimationPlayer;
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
