//! Platform-agnostic input snapshot
//!
//! The viewer polls mouse state once per frame rather than reacting to an
//! event stream. Platform adapters (see [`input_adapter`](super::input_adapter))
//! inject raw events; [`Input::start_frame`] clears the per-frame transients.

use std::collections::HashSet;

use glam::Vec2;

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Per-frame mouse and window state.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pressed_mouse: HashSet<MouseButton>,
    just_pressed_mouse: HashSet<MouseButton>,
    just_released_mouse: HashSet<MouseButton>,

    mouse_position: Vec2,
    mouse_delta: Vec2,
    scroll_delta: Vec2,
    has_position: bool,

    screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for a window of `width` x `height` pixels.
    #[must_use]
    pub fn with_screen_size(width: u32, height: u32) -> Self {
        let mut input = Self::new();
        input.inject_resize(width, height);
        input
    }

    // ========== System API (called by the frame loop / adapter) ==========

    /// Clears transient state at the start of each frame.
    pub fn start_frame(&mut self) {
        self.just_pressed_mouse.clear();
        self.just_released_mouse.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_mouse.insert(button) {
                    self.just_pressed_mouse.insert(button);
                }
            }
            ButtonState::Released => {
                if self.pressed_mouse.remove(&button) {
                    self.just_released_mouse.insert(button);
                }
            }
        }
    }

    /// Moves the cursor; motion since the last frame accumulates into the delta.
    ///
    /// The first position ever injected produces no delta.
    pub fn inject_mouse_position(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        if self.has_position {
            self.mouse_delta += new_pos - self.mouse_position;
        }
        self.mouse_position = new_pos;
        self.has_position = true;
    }

    pub fn inject_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta += Vec2::new(delta_x, delta_y);
    }

    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    // ========== Queries ==========

    #[must_use]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.pressed_mouse.contains(&button)
    }

    #[must_use]
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed_mouse.contains(&button)
    }

    #[must_use]
    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released_mouse.contains(&button)
    }

    #[inline]
    #[must_use]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    #[inline]
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    #[inline]
    #[must_use]
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }

    #[inline]
    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}
