use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Fill style for rectangle commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RectStyle {
    /// Solid interior fill.
    Fill,
    /// Stroked border of the given width (logical px), drawn inside-out
    /// around the rect edges.
    Outline { width: f32 },
}

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub style: RectStyle,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color, style: RectStyle) -> Self {
        Self { rect, color, style }
    }
}

impl DrawList {
    /// Records a filled rectangle draw command.
    #[inline]
    pub fn push_filled_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color, RectStyle::Fill)));
    }

    /// Records an outlined rectangle draw command.
    #[inline]
    pub fn push_outline_rect(&mut self, z: ZIndex, rect: Rect, width: f32, color: Color) {
        self.push(
            z,
            DrawCmd::Rect(RectCmd::new(rect, color, RectStyle::Outline { width })),
        );
    }
}
