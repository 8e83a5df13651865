//! Debug overlays drawn on top of the model: bone markers, local axis
//! indicators and the translation gizmo.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{Color, RenderSurface};
use crate::gizmo::{Gizmo, GizmoAxis};
use crate::math::vector;
use crate::scene::skeleton::Pose;
use crate::scene::transform::{Transform, axis_indicators};

/// Bone marker size relative to the model scale.
pub const BONE_MARKER_FACTOR: f32 = 0.1;

/// Colors of the skeleton overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneStyle {
    pub sphere_color: Color,
    pub cube_color: Color,
    pub line_color: Color,
}

impl Default for BoneStyle {
    fn default() -> Self {
        Self {
            sphere_color: Color::LIME,
            cube_color: Color::GREEN,
            line_color: Color::BLUE,
        }
    }
}

/// Which parts of the wireframe view are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneDisplay {
    pub cubes: bool,
    pub spheres: bool,
    pub main_wires: bool,
    pub transform: bool,
}

impl Default for BoneDisplay {
    fn default() -> Self {
        Self {
            cubes: true,
            spheres: true,
            main_wires: true,
            transform: true,
        }
    }
}

/// Red, green and blue lines along the local X, Y and Z axes at `origin`.
pub fn draw_axis_indicators<S: RenderSurface + ?Sized>(
    surface: &mut S,
    origin: Vec3,
    rot_degrees: Vec3,
    scale: Vec3,
) {
    let [x, y, z] = axis_indicators(origin, rot_degrees, scale);
    surface.draw_line(x.0, x.1, Color::RED);
    surface.draw_line(y.0, y.1, Color::GREEN);
    surface.draw_line(z.0, z.1, Color::BLUE);
}

/// Draws bone markers and parent links of a resolved pose.
///
/// Per bone: a cube, a sphere and the axis indicators (each behind its
/// toggle), then the link to its parent if it has one.
pub fn draw_pose<S: RenderSurface + ?Sized>(
    surface: &mut S,
    pose: &Pose,
    transform: &Transform,
    display: &BoneDisplay,
    style: &BoneStyle,
) {
    let cube_size = transform.scale * BONE_MARKER_FACTOR;
    let radius = vector::average(transform.scale) * BONE_MARKER_FACTOR;

    let mut segments = pose.segments.iter().peekable();

    for joint in &pose.joints {
        if display.cubes {
            surface.draw_cube(joint.position, cube_size, style.cube_color);
        }
        if display.spheres {
            surface.draw_sphere(joint.position, radius, style.sphere_color);
        }
        if display.transform {
            draw_axis_indicators(surface, joint.position, transform.rotation, transform.scale);
        }

        while let Some(segment) = segments.next_if(|s| s.child == joint.bone) {
            surface.draw_line(segment.start, segment.end, style.line_color);
        }
    }
}

/// Arm and handle cube per axis, bright while highlighted.
pub fn draw_gizmo<S: RenderSurface + ?Sized>(surface: &mut S, gizmo: &Gizmo) {
    let cube = Vec3::splat(gizmo.handle_size());

    for arm in gizmo.arms() {
        let color = axis_color(arm.axis, arm.highlighted);
        surface.draw_line(arm.start, arm.handle, color);
    }
    for arm in gizmo.arms() {
        let color = axis_color(arm.axis, arm.highlighted);
        surface.draw_cube(arm.handle, cube, color);
    }
}

#[must_use]
pub fn axis_color(axis: GizmoAxis, highlighted: bool) -> Color {
    match (axis, highlighted) {
        (GizmoAxis::X, true) => Color::RED,
        (GizmoAxis::X, false) => Color::MAROON,
        (GizmoAxis::Y, true) => Color::GREEN,
        (GizmoAxis::Y, false) => Color::DARKGREEN,
        (GizmoAxis::Z, true) => Color::BLUE,
        (GizmoAxis::Z, false) => Color::DARKBLUE,
    }
}
