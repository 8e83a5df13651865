//! Viewer configuration.
//!
//! Every field has a default, so a settings file only needs to name what it
//! overrides:
//!
//! ```json
//! { "window": { "width": 1920, "height": 1080 }, "gizmo": { "drag_mode": "Latched" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ViewerError};
use crate::gizmo::{DEFAULT_HIT_RADIUS, DEFAULT_STEP, DragMode, arm_length_for_radius};
use crate::render::BoneStyle;
use crate::scene::camera::Camera;

/// Closed `[min, max]` range enforced by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range.
    ///
    /// Never panics: inverted bounds are swapped and a NaN bound is ignored.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        let (lo, hi) = if self.max < self.min { (self.max, self.min) } else { (self.min, self.max) };
        value.max(lo).min(hi)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Ordered labeled choices with one selected entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionList<T> {
    pub options: Vec<(String, T)>,
    pub selected: usize,
}

impl<T> Default for OptionList<T> {
    fn default() -> Self {
        Self { options: Vec::new(), selected: 0 }
    }
}

impl<T> OptionList<T> {
    #[must_use]
    pub fn new(options: Vec<(String, T)>, selected: usize) -> Self {
        Self { options, selected }
    }

    /// `(label, index)` pairs for a dropdown.
    #[must_use]
    pub fn labels(&self) -> Vec<(&str, usize)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, (label, _))| (label.as_str(), i))
            .collect()
    }

    /// Selects `index`; out-of-range indices are ignored and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<&T> {
        self.options.get(self.selected).map(|(_, value)| value)
    }

    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.options.get(self.selected).map(|(label, _)| label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { width: 1080, height: 720 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    pub hit_radius: f32,
    pub step: f32,
    pub drag_mode: DragMode,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
            step: DEFAULT_STEP,
            drag_mode: DragMode::default(),
        }
    }
}

impl GizmoSettings {
    #[must_use]
    pub fn arm_length(&self) -> f32 {
        arm_length_for_radius(self.hit_radius)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub window: WindowSettings,
    pub target_fps: OptionList<u32>,
    pub max_scale: OptionList<f32>,
    pub position_range: SliderRange,
    pub rotation_range: SliderRange,
    /// Lower bound of the scale sliders; the upper bound is the selected max scale.
    pub min_scale: f32,
    pub camera: Camera,
    pub gizmo: GizmoSettings,
    pub bone_style: BoneStyle,
    /// Accepted model extensions, with the leading dot.
    pub extensions: Vec<String>,
    /// Ground grid cells per side and spacing.
    pub grid_slices: u32,
    pub grid_spacing: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            target_fps: OptionList::new(
                vec![("30".into(), 30), ("60".into(), 60), ("120".into(), 120)],
                1,
            ),
            max_scale: OptionList::new(
                vec![("1.0".into(), 1.0), ("2.0".into(), 2.0), ("3.0".into(), 3.0)],
                1,
            ),
            position_range: SliderRange::new(-50.0, 50.0),
            rotation_range: SliderRange::new(-360.0, 360.0),
            min_scale: 0.01,
            camera: Camera::default(),
            gizmo: GizmoSettings::default(),
            bone_style: BoneStyle::default(),
            extensions: vec![".glb".into(), ".gltf".into()],
            grid_slices: 40,
            grid_spacing: 1.0,
        }
    }
}

impl ViewerSettings {
    /// Parses and validates settings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded viewer settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every slider range is well formed and every max scale
    /// option lies above `min_scale`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ViewerError::InvalidSettings(msg));

        for (name, range) in [("position_range", self.position_range), ("rotation_range", self.rotation_range)] {
            if !range.is_valid() {
                return invalid(format!("{name} [{}, {}] is not a finite ascending range", range.min, range.max));
            }
        }

        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return invalid(format!("min_scale {} must be positive", self.min_scale));
        }
        for (label, max) in &self.max_scale.options {
            if !(max.is_finite() && *max >= self.min_scale) {
                return invalid(format!("max_scale option \"{label}\" ({max}) is below min_scale {}", self.min_scale));
            }
        }

        if let Some((label, _)) = self.target_fps.options.iter().find(|(_, fps)| *fps == 0) {
            return invalid(format!("target_fps option \"{label}\" is zero"));
        }

        if !(self.gizmo.hit_radius.is_finite() && self.gizmo.hit_radius > 0.0) {
            return invalid(format!("gizmo hit_radius {} must be positive", self.gizmo.hit_radius));
        }
        if !self.gizmo.step.is_finite() {
            return invalid(format!("gizmo step {} is not finite", self.gizmo.step));
        }

        Ok(())
    }

    /// Scale slider range for the selected max scale.
    #[must_use]
    pub fn scale_range(&self) -> SliderRange {
        let max = self.max_scale.selected_value().copied().unwrap_or(2.0);
        SliderRange::new(self.min_scale, max)
    }

    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps.selected_value().copied().unwrap_or(60)
    }
}
