//! Render Surface
//!
//! The viewer never rasterizes anything itself. Each frame it issues draw
//! primitives (lines, cubes, spheres, a ground grid and the model mesh with an
//! already-composed world matrix) against a [`RenderSurface`] implementation
//! supplied by the host.
//!
//! - [`DrawList`]: a surface that records commands, used by headless tools
//!   and tests.
//! - [`overlay`]: skeleton, axis-indicator and gizmo drawing on top of any
//!   surface.

pub mod draw_list;
pub mod overlay;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::BonePose;
use crate::assets::Model;

pub use draw_list::{DrawCommand, DrawList};
pub use overlay::{BoneDisplay, BoneStyle, draw_axis_indicators, draw_gizmo, draw_pose};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const LIGHTGRAY: Self = Self::rgb(200, 200, 200);
    pub const DARKGRAY: Self = Self::rgb(80, 80, 80);

    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const MAROON: Self = Self::rgb(190, 33, 55);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const DARKGREEN: Self = Self::rgb(0, 117, 44);
    pub const LIME: Self = Self::rgb(0, 158, 47);
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    pub const DARKBLUE: Self = Self::rgb(0, 82, 172);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized `[r, g, b, a]` for GPU upload.
    #[must_use]
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

/// A model ready to be drawn with its world matrix baked in.
///
/// The source model is only borrowed; `pose` carries the animated bone poses
/// of the current frame for surfaces that skin on the GPU.
#[derive(Debug, Clone, Copy)]
pub struct MeshDraw<'a> {
    pub model: &'a Model,
    pub world: Mat4,
    pub pose: Option<&'a [BonePose]>,
    pub color: Color,
}

/// Draw primitives consumed by the viewer.
pub trait RenderSurface {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color);

    /// Axis-aligned box centered on `center` with edge lengths `size`.
    fn draw_cube(&mut self, center: Vec3, size: Vec3, color: Color);

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color);

    /// Ground grid of `slices` cells per side on the XZ plane.
    fn draw_grid(&mut self, slices: u32, spacing: f32);

    fn draw_model(&mut self, mesh: &MeshDraw<'_>);

    fn draw_model_wires(&mut self, mesh: &MeshDraw<'_>);
}
