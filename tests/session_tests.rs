//! Viewer session tests
//!
//! Tests for:
//! - Model loading through an `AssetLoader`, extension checks and warnings
//! - Playback state across reloads and clip selection
//! - Transform sliders and their configured ranges, including malformed ones
//! - Camera orbit, pan and zoom gating
//! - Gizmo dragging driven by mouse input
//! - Draw call order for the shaded and wireframe views

use std::cell::Cell;
use std::path::Path;

use glam::{Vec2, Vec3};
use rigview::app::{ButtonState, Input, MouseButton, OptionList};
use rigview::assets::MeshData;
use rigview::errors::{Result, ViewerError};
use rigview::render::DrawCommand;
use rigview::scene::skeleton::NO_PARENT;
use rigview::{
    AnimationClip, AssetLoader, Bone, BonePose, Camera, Color, DrawList, GizmoAxis, Model,
    Skeleton, ViewerSession, ViewerSettings,
};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

/// In-memory loader: a two-bone arm with an "idle" and a "wave" clip.
#[derive(Default)]
struct StubLoader {
    fail: bool,
    calls: Cell<usize>,
}

impl StubLoader {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn skeleton() -> Skeleton {
        Skeleton::new("arm", vec![Bone::new("shoulder", NO_PARENT), Bone::new("hand", 0)])
    }
}

impl AssetLoader for StubLoader {
    fn load_model(&self, _path: &Path) -> Result<Model> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(ViewerError::Gltf("truncated buffer".into()));
        }
        Ok(Model {
            name: "arm".into(),
            meshes: vec![MeshData {
                name: "sleeve".into(),
                positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
                indices: vec![0, 1, 2],
            }],
            skeleton: Self::skeleton(),
        })
    }

    fn load_animations(&self, _path: &Path) -> Result<Vec<AnimationClip>> {
        let bones = Self::skeleton().bones;
        let frame = |x: f32| vec![BonePose::IDENTITY, BonePose::from_translation(Vec3::new(x, 1.0, 0.0))];

        Ok(vec![
            AnimationClip::new("idle", bones.clone(), vec![frame(1.0)]),
            AnimationClip::new("wave", bones, (0..4).map(|i| frame(i as f32)).collect()),
        ])
    }
}

fn loaded_session() -> ViewerSession {
    let mut session = ViewerSession::default();
    session.load_model("arm.glb", &StubLoader::default()).unwrap();
    session
}

/// Input with the cursor resting at the viewport center.
fn centered_input() -> Input {
    let mut input = Input::with_screen_size(800, 600);
    input.inject_mouse_position(400.0, 300.0);
    input
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn load_model_populates_clip_dropdown() {
    let session = loaded_session();
    assert!(session.loaded().is_some());
    assert_eq!(session.clip_options(), vec![("idle", 0), ("wave", 1)]);
    assert_eq!(session.current_clip().map(|c| c.name.as_str()), Some("idle"));
    assert!(session.warning().is_none());
}

#[test]
fn unsupported_extension_sets_warning_without_loading() {
    let mut session = ViewerSession::default();
    let loader = StubLoader::default();

    let err = session.load_model("arm.fbx", &loader).unwrap_err();
    assert!(matches!(err, ViewerError::UnsupportedExtension { .. }));
    assert_eq!(loader.calls.get(), 0);
    assert!(session.loaded().is_none());

    let warning = session.warning().unwrap();
    assert!(warning.contains(".glb or .gltf"), "{warning}");

    session.dismiss_warning();
    assert!(session.warning().is_none());
}

#[test]
fn uppercase_extension_is_accepted() {
    let mut session = ViewerSession::default();
    assert!(session.load_model("ARM.GLTF", &StubLoader::default()).is_ok());
}

#[test]
fn failed_load_keeps_previous_model() {
    let mut session = loaded_session();
    assert!(session.load_model("other.glb", &StubLoader::failing()).is_err());

    let loaded = session.loaded().unwrap();
    assert_eq!(loaded.path, Path::new("arm.glb"));
    assert_eq!(session.clip_options().len(), 2);
}

#[test]
fn reload_restarts_playback_on_first_clip() {
    let mut session = loaded_session();
    session.select_clip(1).unwrap();
    let input = centered_input();
    session.update(&input, 0.016);
    session.update(&input, 0.016);
    assert_eq!(session.current_frame(), Some(2));

    session.load_model("arm.glb", &StubLoader::default()).unwrap();
    assert_eq!(session.player.clip_index, 0);
    assert_eq!(session.player.current_frame, 0);
    assert_eq!(session.current_frame(), Some(0));
}

#[test]
fn unload_clears_model_and_clips() {
    let mut session = loaded_session();
    session.unload();
    assert!(session.loaded().is_none());
    assert!(session.clip_options().is_empty());
    assert!(session.current_pose().unwrap().is_none());
}

// ============================================================================
// Playback
// ============================================================================

#[test]
fn select_clip_rejects_unknown_index() {
    let mut session = loaded_session();
    let err = session.select_clip(2).unwrap_err();
    assert!(matches!(err, ViewerError::ClipOutOfRange { index: 2, count: 2 }));
    assert_eq!(session.player.clip_index, 0);
}

#[test]
fn update_loops_the_selected_clip() {
    let mut session = loaded_session();
    session.select_clip(1).unwrap();
    let input = centered_input();

    let frames: Vec<usize> = (0..5)
        .map(|_| {
            session.update(&input, 0.016);
            session.current_frame().unwrap()
        })
        .collect();
    assert_eq!(frames, vec![1, 2, 3, 0, 1]);
}

#[test]
fn paused_scrub_is_clamped_to_the_clip() {
    let mut session = loaded_session();
    session.select_clip(1).unwrap();
    session.toggle_play();

    session.scrub(100.0);
    assert!(approx_eq(session.player.scrub_frame, 4.0));
    session.update(&centered_input(), 0.016);
    assert_eq!(session.current_frame(), Some(3));

    session.scrub(-5.0);
    assert!(approx_eq(session.player.scrub_frame, 0.0));
}

#[test]
fn current_pose_places_bones_with_the_transform() {
    let mut session = loaded_session();
    session.apply_sliders(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::splat(2.0));

    let pose = session.current_pose().unwrap().unwrap();
    assert_eq!(pose.joints.len(), 2);
    assert!(vec3_approx(pose.joints[0].position, Vec3::new(0.0, 0.0, 2.0)));
    assert!(vec3_approx(pose.joints[1].position, Vec3::new(2.0, 2.0, 2.0)));
}

// ============================================================================
// Transform Panel and Dropdowns
// ============================================================================

#[test]
fn sliders_are_clamped_to_their_ranges() {
    let mut session = ViewerSession::default();
    session.apply_sliders(
        Vec3::new(80.0, -80.0, 3.0),
        Vec3::new(400.0, -10.0, -720.0),
        Vec3::new(5.0, 0.0, 1.5),
    );

    assert_eq!(session.transform.position, Vec3::new(50.0, -50.0, 3.0));
    assert_eq!(session.transform.rotation, Vec3::new(360.0, -10.0, -360.0));
    assert_eq!(session.transform.scale, Vec3::new(2.0, 0.01, 1.5));
}

#[test]
fn max_scale_option_widens_scale_range() {
    let mut session = ViewerSession::default();
    session.select_max_scale(2).unwrap();
    assert!(approx_eq(session.scale_range().max, 3.0));

    session.apply_sliders(Vec3::ZERO, Vec3::ZERO, Vec3::splat(5.0));
    assert_eq!(session.transform.scale, Vec3::splat(3.0));

    let err = session.select_max_scale(3).unwrap_err();
    assert!(matches!(err, ViewerError::OptionOutOfRange { index: 3, count: 3 }));
    assert!(approx_eq(session.scale_range().max, 3.0));
}

#[test]
fn inverted_scale_range_clamps_without_panicking() {
    let mut settings = ViewerSettings::default();
    settings.max_scale = OptionList::new(vec![("tiny".into(), 0.001)], 0);
    assert!(settings.validate().is_err());

    let mut session = ViewerSession::new(settings);
    session.apply_sliders(Vec3::ZERO, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.005));
    assert_eq!(session.transform.scale, Vec3::new(0.01, 0.001, 0.005));
}

#[test]
fn target_fps_follows_dropdown() {
    let mut session = ViewerSession::default();
    assert_eq!(session.target_fps(), 60);

    session.select_target_fps(2).unwrap();
    assert_eq!(session.target_fps(), 120);
    assert!(session.select_target_fps(9).is_err());
    assert_eq!(session.target_fps(), 120);
}

#[test]
fn reset_buttons_restore_defaults() {
    let mut session = ViewerSession::default();
    session.apply_sliders(Vec3::ONE, Vec3::splat(45.0), Vec3::splat(1.5));

    session.reset_scale();
    assert_eq!(session.transform.scale, Vec3::ONE);
    assert_eq!(session.transform.position, Vec3::ONE);

    session.reset_transform();
    assert_eq!(session.transform.position, Vec3::ZERO);
    assert_eq!(session.transform.rotation, Vec3::ZERO);
}

// ============================================================================
// Gizmo Interaction
// ============================================================================

#[test]
fn dragging_x_handle_moves_the_model() {
    let mut session = ViewerSession::default();
    // Look straight at the X handle from the front.
    session.camera = Camera {
        position: Vec3::new(4.0, 0.0, 20.0),
        target: Vec3::new(4.0, 0.0, 0.0),
        ..Camera::default()
    };

    let mut input = centered_input();
    input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed);
    session.update(&input, 0.016);
    assert!(session.gizmo.is_highlighted(GizmoAxis::X));
    assert_eq!(session.transform.position, Vec3::ZERO);

    input.start_frame();
    input.inject_mouse_position(401.0, 300.0);
    session.update(&input, 0.016);
    assert!(vec3_approx(session.transform.position, Vec3::new(0.1, 0.0, 0.0)));
    assert!(approx_eq(session.transform.world_matrix().w_axis.x, 0.1));

    input.start_frame();
    input.inject_mouse_button(MouseButton::Left, ButtonState::Released);
    session.update(&input, 0.016);
    assert!(!session.gizmo.is_highlighted(GizmoAxis::X));
    assert!(vec3_approx(session.gizmo.handle(GizmoAxis::X), Vec3::new(4.1, 0.0, 0.0)));
}

#[test]
fn slider_edits_move_the_gizmo() {
    let mut session = ViewerSession::default();
    session.apply_sliders(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::ONE);
    session.update(&centered_input(), 0.016);
    assert!(vec3_approx(session.gizmo.handle(GizmoAxis::Y), Vec3::new(0.0, 9.0, 0.0)));
}

#[test]
fn left_drag_does_not_orbit_the_camera() {
    let mut session = ViewerSession::default();
    let before = session.camera.position;

    let mut input = centered_input();
    input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed);
    input.start_frame();
    input.inject_mouse_position(500.0, 250.0);
    session.update(&input, 0.016);

    assert_eq!(session.camera.position, before);
}

#[test]
fn right_drag_orbits_the_camera() {
    let mut session = ViewerSession::default();
    let before = session.camera.position;
    let target = session.camera.target;

    let mut input = centered_input();
    input.inject_mouse_button(MouseButton::Right, ButtonState::Pressed);
    input.start_frame();
    input.inject_mouse_position(500.0, 300.0);
    session.update(&input, 0.016);

    let after = session.camera.position;
    assert_ne!(after, before);
    assert!(((after - target).length() - (before - target).length()).abs() < 1e-3);
}

#[test]
fn middle_drag_pans_without_right_button() {
    let mut session = ViewerSession::default();
    let target = session.camera.target;
    let distance = (session.camera.position - target).length();

    let mut input = centered_input();
    input.inject_mouse_button(MouseButton::Middle, ButtonState::Pressed);
    input.start_frame();
    input.inject_mouse_position(450.0, 300.0);
    session.update(&input, 0.016);

    assert_ne!(session.camera.target, target);
    assert!(approx_eq(session.camera.target.y, target.y));
    let after = (session.camera.position - session.camera.target).length();
    assert!((after - distance).abs() < 1e-3);
}

#[test]
fn wheel_zooms_without_right_button() {
    let mut session = ViewerSession::default();
    let target = session.camera.target;
    let distance = (session.camera.position - target).length();

    let mut input = centered_input();
    input.inject_scroll(0.0, 2.0);
    session.update(&input, 0.016);

    let after = (session.camera.position - target).length();
    assert!(after < distance, "{after} >= {distance}");
    assert_eq!(session.camera.target, target);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn empty_session_draws_grid_and_gizmo() {
    let mut session = ViewerSession::default();
    let mut list = DrawList::new();
    session.draw(&mut list).unwrap();

    assert_eq!(list.commands[0], DrawCommand::Grid { slices: 40, spacing: 1.0 });
    assert_eq!(list.lines().count(), 3);
    assert_eq!(list.cubes().count(), 3);
    assert_eq!(list.models().count(), 0);
}

#[test]
fn shaded_view_draws_animated_model() {
    let mut session = loaded_session();
    let mut list = DrawList::new();
    session.draw(&mut list).unwrap();

    let models: Vec<_> = list.models().collect();
    assert_eq!(models.len(), 1);
    assert!(!models[0].1);
    assert!(matches!(list.commands.last(), Some(DrawCommand::Model { animated: true, .. })));
    assert_eq!(list.spheres().count(), 0);
}

#[test]
fn wireframe_view_draws_wires_and_skeleton() {
    let mut session = loaded_session();
    session.toggle_wireframe();
    let mut list = DrawList::new();
    session.draw(&mut list).unwrap();

    let models: Vec<_> = list.models().collect();
    assert_eq!(models.len(), 1);
    assert!(models[0].1);

    // Gizmo handles plus one cube per bone.
    assert_eq!(list.cubes().count(), 3 + 2);
    assert!(list.spheres().all(|(_, radius, color)| approx_eq(radius, 0.1) && color == Color::LIME));
    assert_eq!(list.spheres().count(), 2);
    // Gizmo arms, three axis lines per bone, one parent link.
    assert_eq!(list.lines().count(), 3 + 2 * 3 + 1);
}

#[test]
fn bone_display_toggles_hide_overlay_parts() {
    let mut session = loaded_session();
    session.toggle_wireframe();
    session.bone_display.cubes = false;
    session.bone_display.transform = false;
    session.bone_display.main_wires = false;

    let mut list = DrawList::new();
    session.draw(&mut list).unwrap();

    assert_eq!(list.models().count(), 0);
    assert_eq!(list.cubes().count(), 3);
    assert_eq!(list.spheres().count(), 2);
    assert_eq!(list.lines().count(), 3 + 1);

    let link = list.lines().last().unwrap();
    assert_eq!(link.2, session.bone_style.line_color);
    assert_eq!(link.0, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(link.1, Vec3::ZERO);
}

#[test]
fn mouse_delta_is_reset_each_frame() {
    let mut input = centered_input();
    input.inject_mouse_position(410.0, 300.0);
    assert_eq!(input.mouse_delta(), Vec2::new(10.0, 0.0));
    input.start_frame();
    assert_eq!(input.mouse_delta(), Vec2::ZERO);
}

#[test]
fn slider_edit_after_update_reaches_mesh_and_skeleton() {
    let mut session = loaded_session();
    session.update(&centered_input(), 0.016);

    session.apply_sliders(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE);
    session.toggle_wireframe();

    let mut list = DrawList::new();
    session.draw(&mut list).unwrap();

    let (world, wireframe) = list.models().next().unwrap();
    assert!(wireframe);
    let mesh_origin = world.w_axis.truncate();
    let root = list.spheres().next().unwrap().0;

    assert!(vec3_approx(mesh_origin, Vec3::new(10.0, 0.0, 0.0)));
    assert!(vec3_approx(root, mesh_origin));
}
