//! Viewer Session
//!
//! [`ViewerSession`] owns everything that changes while the viewer runs: the
//! model transform, the gizmo, the camera and its orbit controls, playback
//! state, the loaded model and its clips, display toggles and the pending
//! warning. The frame loop drives it with one [`update`](ViewerSession::update)
//! and one [`draw`](ViewerSession::draw) per frame; UI widgets call the
//! remaining methods with values they have already clamped.

use std::path::Path;

use glam::{Vec2, Vec3};

use crate::animation::{AnimationClip, AnimationPlayer};
use crate::app::input::{Input, MouseButton};
use crate::app::settings::{OptionList, SliderRange, ViewerSettings};
use crate::assets::{AssetLoader, LoadedModel, check_extension};
use crate::errors::{Result, ViewerError};
use crate::gizmo::Gizmo;
use crate::render::{BoneDisplay, BoneStyle, Color, MeshDraw, RenderSurface, draw_gizmo, draw_pose};
use crate::scene::camera::Camera;
use crate::scene::skeleton::{Pose, resolve_pose};
use crate::scene::transform::Transform;
use crate::utils::OrbitControls;

pub struct ViewerSession {
    pub settings: ViewerSettings,
    pub transform: Transform,
    pub gizmo: Gizmo,
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub player: AnimationPlayer,

    /// Wireframe view: mesh wires plus the skeleton overlay.
    pub wireframe: bool,
    pub bone_display: BoneDisplay,
    pub bone_style: BoneStyle,

    loaded: Option<LoadedModel>,
    clip_options: OptionList<usize>,
    warning: Option<String>,
}

impl ViewerSession {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        let gizmo = Gizmo::new(
            settings.gizmo.hit_radius,
            settings.gizmo.step,
            settings.gizmo.drag_mode,
        );
        let camera = settings.camera;
        let orbit = OrbitControls::from_camera(&camera);
        let bone_style = settings.bone_style;

        Self {
            settings,
            transform: Transform::new(),
            gizmo,
            camera,
            orbit,
            player: AnimationPlayer::new(),
            wireframe: false,
            bone_display: BoneDisplay::default(),
            bone_style,
            loaded: None,
            clip_options: OptionList::default(),
            warning: None,
        }
    }

    // ========================================================================
    // Model loading
    // ========================================================================

    /// Loads `path` through `loader`, replacing the current model.
    ///
    /// A path with an unsupported extension sets the warning message and
    /// leaves the session untouched. A failed load keeps the previous model.
    pub fn load_model(&mut self, path: impl AsRef<Path>, loader: &dyn AssetLoader) -> Result<()> {
        let path = path.as_ref();

        if let Err(err) = check_extension(path, &self.settings.extensions) {
            log::warn!("{err}");
            self.warning = Some(err.to_string());
            return Err(err);
        }

        let loaded = loader.load(path)?;

        log::info!(
            "Loaded model {} ({} bones, {} meshes)",
            path.display(),
            loaded.model.bone_count(),
            loaded.model.meshes.len()
        );
        for (i, clip) in loaded.clips.iter().enumerate() {
            log::info!("Animation {i}: {}", clip.name);
        }

        self.clip_options = OptionList::new(
            loaded
                .clips
                .iter()
                .enumerate()
                .map(|(i, clip)| (clip.name.clone(), i))
                .collect(),
            0,
        );
        self.player.reset();
        self.loaded = Some(loaded);

        Ok(())
    }

    /// Drops the current model and its clips.
    pub fn unload(&mut self) {
        if let Some(loaded) = self.loaded.take() {
            log::debug!("Unloaded {}", loaded.path.display());
        }
        self.clip_options = OptionList::default();
        self.player.reset();
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedModel> {
        self.loaded.as_ref()
    }

    /// Pending user-visible message, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    // ========================================================================
    // Frame update
    // ========================================================================

    /// One frame of camera, gizmo, transform and playback updates.
    ///
    /// The camera only moves while the right (orbit) or middle (pan) button
    /// is held, or when the wheel scrolled this frame. A left drag never
    /// moves it.
    pub fn update(&mut self, input: &Input, dt: f32) {
        if Self::camera_input(input) {
            self.orbit.update(&mut self.camera, input, dt);
        }

        let ray = self.camera.screen_ray(input.mouse_position(), input.screen_size());
        self.gizmo.update(
            &ray,
            input.is_button_down(MouseButton::Left),
            input.mouse_delta(),
            self.transform.position,
            self.camera.position,
        );
        self.gizmo.sync(&mut self.transform.position);

        self.transform.update_world_matrix();

        if let Some(frame_count) = self.current_clip().map(AnimationClip::frame_count) {
            self.player.advance(frame_count);
        }
    }

    fn camera_input(input: &Input) -> bool {
        input.is_button_down(MouseButton::Right)
            || input.is_button_down(MouseButton::Middle)
            || input.scroll_delta() != Vec2::ZERO
    }

    #[must_use]
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.loaded.as_ref()?.clip(self.player.clip_index)
    }

    /// Frame to display, clamped to the clip. `None` without frames.
    #[must_use]
    pub fn current_frame(&self) -> Option<usize> {
        let count = self.current_clip()?.frame_count();
        (count > 0).then(|| self.player.current_frame.min(count - 1))
    }

    /// World-space pose of the current frame, if a clip is playing.
    pub fn current_pose(&self) -> Result<Option<Pose>> {
        let (Some(loaded), Some(clip), Some(frame)) =
            (self.loaded.as_ref(), self.current_clip(), self.current_frame())
        else {
            return Ok(None);
        };
        resolve_pose(clip, frame, &self.transform, &loaded.model.skeleton).map(Some)
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Issues this frame's draw calls: grid, gizmo, then the model.
    ///
    /// Slider edits made since the last [`update`](Self::update) are folded
    /// into the world matrix first, so the mesh and the skeleton always share
    /// one transform.
    pub fn draw<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        self.transform.update_world_matrix();

        surface.draw_grid(self.settings.grid_slices, self.settings.grid_spacing);
        draw_gizmo(surface, &self.gizmo);

        let Some(loaded) = self.loaded.as_ref() else {
            return Ok(());
        };

        let frame_pose = self
            .current_clip()
            .zip(self.current_frame())
            .and_then(|(clip, frame)| clip.frame(frame));

        let mesh = MeshDraw {
            model: &loaded.model,
            world: *self.transform.world_matrix(),
            pose: frame_pose,
            color: Color::WHITE,
        };

        if self.wireframe {
            if self.bone_display.main_wires {
                surface.draw_model_wires(&mesh);
            }
            if let Some(pose) = self.current_pose()? {
                draw_pose(surface, &pose, &self.transform, &self.bone_display, &self.bone_style);
            }
        } else {
            surface.draw_model(&mesh);
        }

        Ok(())
    }

    // ========================================================================
    // Transform panel
    // ========================================================================

    /// Applies slider values, clamped to the configured ranges.
    pub fn apply_sliders(&mut self, position: Vec3, rotation: Vec3, scale: Vec3) {
        let clamp3 = |range: SliderRange, v: Vec3| {
            Vec3::new(range.clamp(v.x), range.clamp(v.y), range.clamp(v.z))
        };

        self.transform.set_position(clamp3(self.settings.position_range, position));
        self.transform.set_rotation(clamp3(self.settings.rotation_range, rotation));
        self.transform.set_scale(clamp3(self.settings.scale_range(), scale));
    }

    pub fn reset_scale(&mut self) {
        self.transform.reset_scale();
    }

    pub fn reset_transform(&mut self) {
        self.transform.reset();
    }

    #[must_use]
    pub fn scale_range(&self) -> SliderRange {
        self.settings.scale_range()
    }

    // ========================================================================
    // Playback and dropdowns
    // ========================================================================

    pub fn toggle_play(&mut self) {
        self.player.toggle_play();
    }

    /// Moves the frame slider, clamped to `[0, frame_count]`.
    pub fn scrub(&mut self, frame: f32) {
        let max = self.current_clip().map_or(0.0, |clip| clip.frame_count() as f32);
        self.player.scrub(frame.clamp(0.0, max));
    }

    pub fn select_clip(&mut self, index: usize) -> Result<()> {
        let count = self.clip_options.len();
        self.player.select_clip(index, count)?;
        self.clip_options.select(index);
        Ok(())
    }

    /// Clip names for the animation dropdown.
    #[must_use]
    pub fn clip_options(&self) -> Vec<(&str, usize)> {
        self.clip_options.labels()
    }

    pub fn select_max_scale(&mut self, index: usize) -> Result<()> {
        let count = self.settings.max_scale.len();
        if self.settings.max_scale.select(index) {
            Ok(())
        } else {
            Err(ViewerError::OptionOutOfRange { index, count })
        }
    }

    pub fn select_target_fps(&mut self, index: usize) -> Result<()> {
        let count = self.settings.target_fps.len();
        if self.settings.target_fps.select(index) {
            log::debug!("Target FPS set to {}", self.settings.target_fps());
            Ok(())
        } else {
            Err(ViewerError::OptionOutOfRange { index, count })
        }
    }

    /// Frame rate the frame-pacing collaborator should aim for.
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.settings.target_fps()
    }

    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ViewerSettings::default())
    }
}
