use glam::{Mat4, Vec3};

use super::{Color, MeshDraw, RenderSurface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { start: Vec3, end: Vec3, color: Color },
    Cube { center: Vec3, size: Vec3, color: Color },
    Sphere { center: Vec3, radius: f32, color: Color },
    Grid { slices: u32, spacing: f32 },
    Model {
        world: Mat4,
        triangles: usize,
        animated: bool,
        wireframe: bool,
        color: Color,
    },
}

/// A [`RenderSurface`] that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec3, Vec3, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { start, end, color } => Some((start, end, color)),
            _ => None,
        })
    }

    pub fn cubes(&self) -> impl Iterator<Item = (Vec3, Vec3, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Cube { center, size, color } => Some((center, size, color)),
            _ => None,
        })
    }

    pub fn spheres(&self) -> impl Iterator<Item = (Vec3, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Sphere { center, radius, color } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Recorded model draws as `(world, wireframe)`.
    pub fn models(&self) -> impl Iterator<Item = (&Mat4, bool)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Model { world, wireframe, .. } => Some((world, *wireframe)),
            _ => None,
        })
    }

    fn push_model(&mut self, mesh: &MeshDraw<'_>, wireframe: bool) {
        self.commands.push(DrawCommand::Model {
            world: mesh.world,
            triangles: mesh.model.triangle_count(),
            animated: mesh.pose.is_some(),
            wireframe,
            color: mesh.color,
        });
    }
}

impl RenderSurface for DrawList {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.commands.push(DrawCommand::Line { start, end, color });
    }

    fn draw_cube(&mut self, center: Vec3, size: Vec3, color: Color) {
        self.commands.push(DrawCommand::Cube { center, size, color });
    }

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Sphere { center, radius, color });
    }

    fn draw_grid(&mut self, slices: u32, spacing: f32) {
        self.commands.push(DrawCommand::Grid { slices, spacing });
    }

    fn draw_model(&mut self, mesh: &MeshDraw<'_>) {
        self.push_model(mesh, false);
    }

    fn draw_model_wires(&mut self, mesh: &MeshDraw<'_>) {
        self.push_model(mesh, true);
    }
}
