//! Croquis engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the sketch
//! application: window/event loop, device and surface management, input
//! translation, frame timing, and the 2D/3D renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
