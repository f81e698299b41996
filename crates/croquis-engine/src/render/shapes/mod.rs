//! 2D shape renderers consuming the scene draw stream.

mod common;
mod rect;
mod stroke;

pub use rect::RectRenderer;
pub use stroke::StrokeRenderer;
