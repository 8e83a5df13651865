//! Application layer: input snapshot, winit adapter, settings and the
//! per-session state the frame loop drives.

pub mod input;
pub mod input_adapter;
pub mod session;
pub mod settings;

pub use input::{ButtonState, Input, MouseButton};
pub use input_adapter::process_window_event;
pub use session::ViewerSession;
pub use settings::{GizmoSettings, OptionList, SliderRange, ViewerSettings, WindowSettings};
