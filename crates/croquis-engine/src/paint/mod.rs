//! Paint model shared between the app and renderers.
//!
//! Croquis fills are always solid, so draw commands carry [`Color`] directly
//! rather than a paint-source enum. Geometry types remain in `coords`.

mod color;

pub use color::Color;
