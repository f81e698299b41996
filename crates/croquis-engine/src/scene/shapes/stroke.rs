use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Freehand stroke draw payload: a polyline with round caps and joins.
///
/// A single-point stroke renders as a dot (one cap disc).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub points: Vec<Vec2>,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl StrokeCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, width: f32, color: Color) -> Self {
        Self { points, width, color }
    }
}

impl DrawList {
    /// Records a polyline stroke draw command.
    ///
    /// Empty point lists are dropped here rather than handed to the renderer.
    #[inline]
    pub fn push_stroke(&mut self, z: ZIndex, points: Vec<Vec2>, width: f32, color: Color) {
        if points.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Stroke(StrokeCmd::new(points, width, color)));
    }
}
