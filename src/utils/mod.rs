//! Utility Module
//!
//! - [`OrbitControls`]: camera orbit controller for interactive viewing

pub mod orbit_control;

pub use orbit_control::OrbitControls;
