//! Toolbar strip across the top of the window.
//!
//! Layout and hit-testing are plain geometry over button slots; recording
//! produces rectangle draw commands only, so the toolbar renders through the
//! same pipeline as everything else.

use croquis_engine::coords::{Rect, Vec2};
use croquis_engine::paint::Color;
use croquis_engine::scene::{DrawList, ZIndex};

use crate::app::ViewMode;
use crate::canvas::Tool;

pub const TOOLBAR_HEIGHT: f32 = 48.0;

const BUTTON_WIDTH: f32 = 72.0;
const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 8.0;
const PADDING: f32 = 8.0;

const BAR_COLOR: Color = Color::from_premul(0.85, 0.85, 0.85, 1.0);
const ACTIVE_OUTLINE: Color = Color::BLACK;

/// What a toolbar press asks the app to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ToolbarAction {
    SelectTool(Tool),
    ToggleCube,
    Clear,
}

/// Fixed button order, left to right.
const BUTTONS: &[(ToolbarAction, Color)] = &[
    (ToolbarAction::SelectTool(Tool::Freehand), Color::BLACK),
    (
        ToolbarAction::SelectTool(Tool::Rectangle),
        Color::from_premul(0.2, 0.4, 0.9, 1.0),
    ),
    (
        ToolbarAction::SelectTool(Tool::Eraser),
        Color::from_premul(0.95, 0.75, 0.8, 1.0),
    ),
    (
        ToolbarAction::ToggleCube,
        Color::from_premul(0.55, 0.3, 0.8, 1.0),
    ),
    (ToolbarAction::Clear, Color::from_premul(0.85, 0.25, 0.25, 1.0)),
];

#[derive(Debug, Default)]
pub struct Toolbar;

impl Toolbar {
    pub fn new() -> Self {
        Self
    }

    /// Toolbar background bounds for a window of logical width `width`.
    pub fn bounds(&self, width: f32) -> Rect {
        Rect::new(0.0, 0.0, width, TOOLBAR_HEIGHT)
    }

    fn button_rect(&self, index: usize) -> Rect {
        let x = PADDING + index as f32 * (BUTTON_WIDTH + BUTTON_GAP);
        let y = (TOOLBAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
        Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT)
    }

    /// Maps a pointer position (window-local logical pixels) to an action.
    /// Presses on the bar background or outside the bar return `None`.
    pub fn hit(&self, p: Vec2, width: f32) -> Option<ToolbarAction> {
        if !self.bounds(width).contains(p) {
            return None;
        }
        BUTTONS
            .iter()
            .enumerate()
            .find(|(i, _)| self.button_rect(*i).contains(p))
            .map(|(_, (action, _))| *action)
    }

    /// Records the bar and its buttons. The active tool (or the cube button
    /// while the 3D view is showing) gets an outline highlight.
    pub fn record(&self, list: &mut DrawList, width: f32, active_tool: Tool, mode: ViewMode) {
        let z = ZIndex::new(0);

        list.push_filled_rect(z, self.bounds(width), BAR_COLOR);

        for (i, (action, fill)) in BUTTONS.iter().enumerate() {
            let rect = self.button_rect(i);
            list.push_filled_rect(z, rect, *fill);

            let highlighted = match action {
                ToolbarAction::SelectTool(t) => mode == ViewMode::Canvas && *t == active_tool,
                ToolbarAction::ToggleCube => mode == ViewMode::Cube,
                ToolbarAction::Clear => false,
            };
            if highlighted {
                list.push_outline_rect(z, rect, 2.0, ACTIVE_OUTLINE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn hit_first_button_selects_freehand() {
        let bar = Toolbar::new();
        // First button spans x [8, 80), y [8, 40).
        assert_eq!(
            bar.hit(v(10.0, 20.0), 800.0),
            Some(ToolbarAction::SelectTool(Tool::Freehand))
        );
    }

    #[test]
    fn hit_last_button_is_clear() {
        let bar = Toolbar::new();
        // Fifth button starts at 8 + 4 * 80 = 328.
        assert_eq!(bar.hit(v(330.0, 20.0), 800.0), Some(ToolbarAction::Clear));
    }

    #[test]
    fn hit_in_gap_is_background() {
        let bar = Toolbar::new();
        // Between button 0 (ends at 80) and button 1 (starts at 88).
        assert_eq!(bar.hit(v(84.0, 20.0), 800.0), None);
    }

    #[test]
    fn hit_below_bar_misses() {
        let bar = Toolbar::new();
        assert_eq!(bar.hit(v(10.0, TOOLBAR_HEIGHT + 1.0), 800.0), None);
    }

    #[test]
    fn record_emits_bar_and_button_rects() {
        let bar = Toolbar::new();
        let mut list = DrawList::new();
        bar.record(&mut list, 800.0, Tool::Freehand, ViewMode::Canvas);

        // Background + 5 buttons + 1 active highlight outline.
        assert_eq!(list.items().len(), 7);
    }
}
