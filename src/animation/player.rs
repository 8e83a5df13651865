use crate::errors::{Result, ViewerError};

/// Frame-stepped playback state for the selected clip.
///
/// While playing, the frame advances by one per update and wraps at the
/// clip's frame count; the scrub slider follows it. While paused, the scrub
/// value drives the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlayer {
    pub clip_index: usize,
    pub current_frame: usize,
    /// Slider value in `[0, frame_count]`.
    pub scrub_frame: f32,
    pub playing: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self {
            clip_index: 0,
            current_frame: 0,
            scrub_frame: 0.0,
            playing: true,
        }
    }
}

impl AnimationPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps one update for a clip of `frame_count` frames and returns the
    /// frame to display, or `None` when the clip has no frames.
    pub fn advance(&mut self, frame_count: usize) -> Option<usize> {
        if frame_count == 0 {
            self.current_frame = 0;
            return None;
        }

        if self.playing {
            self.current_frame = (self.current_frame + 1) % frame_count;
            self.scrub_frame = self.current_frame as f32;
        } else {
            self.current_frame = self.scrubbed_frame(frame_count);
        }

        Some(self.current_frame)
    }

    /// Frame selected by the scrub slider, clamped to the last frame.
    #[must_use]
    pub fn scrubbed_frame(&self, frame_count: usize) -> usize {
        let frame = self.scrub_frame.max(0.0) as usize;
        frame.min(frame_count.saturating_sub(1))
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        log::debug!("Animation {}", if self.playing { "playing" } else { "paused" });
    }

    pub fn scrub(&mut self, frame: f32) {
        self.scrub_frame = frame;
    }

    /// Selects clip `index` out of `count` loaded clips and restarts it.
    pub fn select_clip(&mut self, index: usize, count: usize) -> Result<()> {
        if index >= count {
            return Err(ViewerError::ClipOutOfRange { index, count });
        }
        self.clip_index = index;
        self.current_frame = 0;
        self.scrub_frame = 0.0;
        log::debug!("Selected animation clip {index}");
        Ok(())
    }

    /// Back to the first clip and frame. Play state is kept.
    pub fn reset(&mut self) {
        self.clip_index = 0;
        self.current_frame = 0;
        self.scrub_frame = 0.0;
    }
}
