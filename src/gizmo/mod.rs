//! Translation Gizmo
//!
//! A three-arm handle widget anchored at the model origin. Each arm ends in a
//! handle that can be grabbed with the primary mouse button; while a handle is
//! grabbed, every update moves all three handles by a fixed step along that
//! arm's axis and the model position is derived from the handles.
//!
//! # Update protocol
//!
//! [`Gizmo::update`] runs once per frame:
//!
//! 1. With the primary button released, all highlights are cleared.
//! 2. The axes are visited in X, Y, Z order. An axis whose handle is within
//!    the hit radius of the cursor ray (and the button is held) is
//!    highlighted and moves all handles. Later axes are tested against
//!    handles already moved this frame.
//! 3. [`Gizmo::sync`] then applies exactly one direction: handles → model
//!    position while dragging, model position → handles otherwise.
//!
//! With [`DragMode::Latched`] the axis grabbed on press stays active until
//! release, even if the cursor leaves the hit radius.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::Ray;

/// Default hit-test tolerance around a handle center.
pub const DEFAULT_HIT_RADIUS: f32 = 0.5;
/// Default movement per frame while dragging.
pub const DEFAULT_STEP: f32 = 0.1;

/// Arm length derived from the hit radius: `radius * 10 - 1`.
#[inline]
#[must_use]
pub fn arm_length_for_radius(radius: f32) -> f32 {
    radius * 10.0 - 1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    /// Unit world direction of the arm.
    #[inline]
    #[must_use]
    pub fn direction(self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }
}

/// How a drag is sustained between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    /// Every frame re-runs the hit test; leaving the radius ends the drag.
    #[default]
    PerFrameHitTest,
    /// The axis hit on press stays grabbed until the button is released.
    Latched,
}

/// Ray-vs-handle hit test.
///
/// The handle is hit when its distance to the closest point of the ray is at
/// most `radius`. Handles behind the ray origin are measured from the origin.
#[must_use]
pub fn hit_test(ray: &Ray, handle: Vec3, radius: f32) -> bool {
    ray.distance_to_point(handle) <= radius
}

/// One arm ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoArm {
    pub axis: GizmoAxis,
    pub start: Vec3,
    pub handle: Vec3,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct Gizmo {
    /// Handle positions in X, Y, Z order.
    pub handles: [Vec3; 3],
    pub hit_radius: f32,
    pub arm_length: f32,
    pub step: f32,
    pub highlighted: [bool; 3],
    pub dragging: bool,
    pub mode: DragMode,
    latched: Option<GizmoAxis>,
}

impl Default for Gizmo {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_RADIUS, DEFAULT_STEP, DragMode::default())
    }
}

impl Gizmo {
    /// Gizmo anchored at the world origin.
    #[must_use]
    pub fn new(hit_radius: f32, step: f32, mode: DragMode) -> Self {
        let arm_length = arm_length_for_radius(hit_radius);
        Self {
            handles: GizmoAxis::ALL.map(|axis| axis.direction() * arm_length),
            hit_radius,
            arm_length,
            step,
            highlighted: [false; 3],
            dragging: false,
            mode,
            latched: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn handle(&self, axis: GizmoAxis) -> Vec3 {
        self.handles[axis.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_highlighted(&self, axis: GizmoAxis) -> bool {
        self.highlighted[axis.index()]
    }

    /// Axis held by a latched drag, if any.
    #[inline]
    #[must_use]
    pub fn latched_axis(&self) -> Option<GizmoAxis> {
        self.latched
    }

    /// Runs hit testing and drag movement for one frame.
    ///
    /// `mouse_delta` is the cursor motion since the previous frame in screen
    /// pixels (y grows downwards). Only its sign matters.
    pub fn update(
        &mut self,
        ray: &Ray,
        primary_down: bool,
        mouse_delta: Vec2,
        model_pos: Vec3,
        camera_pos: Vec3,
    ) {
        if !primary_down {
            self.highlighted = [false; 3];
            self.latched = None;
        }

        self.dragging = false;

        if self.mode == DragMode::Latched
            && let Some(axis) = self.latched
        {
            self.grab(axis, mouse_delta, model_pos, camera_pos);
            return;
        }

        for axis in GizmoAxis::ALL {
            if primary_down && hit_test(ray, self.handle(axis), self.hit_radius) {
                self.grab(axis, mouse_delta, model_pos, camera_pos);
                if self.mode == DragMode::Latched {
                    self.latched = Some(axis);
                    log::debug!("Gizmo latched on {axis:?}");
                    return;
                }
            }
        }
    }

    fn grab(&mut self, axis: GizmoAxis, mouse_delta: Vec2, model_pos: Vec3, camera_pos: Vec3) {
        self.dragging = true;
        self.highlighted[axis.index()] = true;

        let amount = drag_step(axis, mouse_delta, model_pos, camera_pos) * self.step;
        if amount != 0.0 {
            let offset = axis.direction() * amount;
            for handle in &mut self.handles {
                *handle += offset;
            }
        }
    }

    /// Applies this frame's single sync direction.
    ///
    /// While dragging, `model_pos` is derived from the handles; otherwise the
    /// handles are re-anchored on `model_pos`.
    pub fn sync(&mut self, model_pos: &mut Vec3) {
        let size = self.arm_length;
        if self.dragging {
            *model_pos = Vec3::new(
                self.handles[0].x - size,
                self.handles[1].y - size,
                self.handles[2].z - size,
            );
        } else {
            self.handles = GizmoAxis::ALL.map(|axis| *model_pos + axis.direction() * size);
        }
    }

    /// Arms in X, Y, Z order, each running from `handle - arm_length * axis`
    /// to its handle.
    #[must_use]
    pub fn arms(&self) -> [GizmoArm; 3] {
        GizmoAxis::ALL.map(|axis| {
            let handle = self.handle(axis);
            GizmoArm {
                axis,
                start: handle - axis.direction() * self.arm_length,
                handle,
                highlighted: self.is_highlighted(axis),
            }
        })
    }

    /// Edge length of the cube drawn at each handle.
    #[inline]
    #[must_use]
    pub fn handle_size(&self) -> f32 {
        self.arm_length * 0.05
    }
}

/// Signed step multiplier (`-1`, `0` or `1`) for dragging `axis`.
///
/// X follows horizontal motion (right is `+`) while the model's Z is below
/// the camera's, and is flipped otherwise. Y follows vertical motion with
/// screen-up as world-up. Z prefers horizontal motion (left is `+`) and falls
/// back to vertical motion (up is `-`) while the model's X is below the
/// camera's; both are flipped otherwise.
#[must_use]
pub fn drag_step(axis: GizmoAxis, mouse_delta: Vec2, model_pos: Vec3, camera_pos: Vec3) -> f32 {
    let dx = mouse_delta.x;
    let dy = mouse_delta.y;

    match axis {
        GizmoAxis::X => {
            let sign = if model_pos.z < camera_pos.z { 1.0 } else { -1.0 };
            sign * horizontal(dx)
        }
        GizmoAxis::Y => -vertical(dy),
        GizmoAxis::Z => {
            let sign = if model_pos.x < camera_pos.x { 1.0 } else { -1.0 };
            if dx != 0.0 {
                -sign * horizontal(dx)
            } else {
                sign * vertical(dy)
            }
        }
    }
}

#[inline]
fn horizontal(dx: f32) -> f32 {
    if dx < 0.0 {
        -1.0
    } else if dx > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn vertical(dy: f32) -> f32 {
    horizontal(dy)
}
