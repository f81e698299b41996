//! Shape-specific draw command payloads and `DrawList` push helpers.

pub mod rect;
pub mod stroke;

pub use rect::{RectCmd, RectStyle};
pub use stroke::StrokeCmd;
