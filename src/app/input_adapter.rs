//! Winit input event adapter
//!
//! Translates winit window events into the viewer's platform-agnostic
//! [`Input`] snapshot.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use crate::app::input::{ButtonState, Input, MouseButton};

/// Pixel scroll deltas are scaled to roughly match one wheel line.
const PIXEL_SCALE: f32 = 0.01;

#[must_use]
pub fn translate_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Back,
        winit::event::MouseButton::Forward => MouseButton::Forward,
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[must_use]
pub fn translate_element_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

/// Converts a wheel delta into line units.
#[must_use]
pub fn scroll_lines(delta: MouseScrollDelta) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (x, y),
        MouseScrollDelta::PixelDelta(pos) => (pos.x as f32 * PIXEL_SCALE, pos.y as f32 * PIXEL_SCALE),
    }
}

/// Feeds a winit window event into `input`. Unrelated events are ignored.
pub fn process_window_event(input: &mut Input, event: &WindowEvent) {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            input.inject_mouse_position(position.x as f32, position.y as f32);
        }

        WindowEvent::MouseInput { state, button, .. } => {
            input.inject_mouse_button(translate_mouse_button(*button), translate_element_state(*state));
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = scroll_lines(*delta);
            input.inject_scroll(dx, dy);
        }

        WindowEvent::Resized(size) => {
            input.inject_resize(size.width, size.height);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn pixel_scroll_is_scaled_to_lines() {
        let (x, y) = scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(100.0, -200.0)));
        assert!((x - 1.0).abs() < 1e-6);
        assert!((y + 2.0).abs() < 1e-6);
    }

    #[test]
    fn buttons_translate_one_to_one() {
        assert_eq!(translate_mouse_button(winit::event::MouseButton::Right), MouseButton::Right);
        assert_eq!(translate_element_state(ElementState::Released), ButtonState::Released);
    }
}
