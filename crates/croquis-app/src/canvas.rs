//! Sketch canvas model.
//!
//! Pure input-to-geometry state: pointer gestures become committed canvas
//! items, and the app turns those items into draw commands. No GPU types
//! appear here, which keeps every gesture rule unit-testable.

use croquis_engine::coords::{Rect, Vec2};
use croquis_engine::paint::Color;

/// Side length of the square stamped by the eraser, logical pixels.
pub const ERASER_SIDE: f32 = 100.0;

/// The canvas background; eraser stamps are filled with the same color so
/// erasing reads as "removed" rather than painted-over.
pub const CANVAS_BACKGROUND: Color = Color::WHITE;

const BRUSH_WIDTH_MIN: f32 = 1.0;
const BRUSH_WIDTH_MAX: f32 = 64.0;
const BRUSH_WIDTH_DEFAULT: f32 = 10.0;

/// Active drawing tool.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tool {
    Freehand,
    Rectangle,
    Eraser,
}

/// A committed mark on the canvas, kept in insertion order. Later items
/// paint over earlier ones, which is what makes the eraser work.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    Stroke {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },
    RectOutline {
        rect: Rect,
        width: f32,
        color: Color,
    },
    EraseStamp {
        rect: Rect,
    },
}

/// Gesture in progress between pointer down and pointer up.
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Freehand { points: Vec<Vec2> },
    Rectangle { anchor: Vec2, cursor: Vec2 },
    /// Stamps commit immediately on down/move; the gesture only tracks that
    /// the button is still held.
    Erasing,
}

/// Retained sketch state: committed items plus at most one active gesture.
#[derive(Debug)]
pub struct SketchCanvas {
    tool: Tool,
    brush_width: f32,
    brush_color: Color,

    items: Vec<CanvasItem>,
    gesture: Option<Gesture>,
}

impl Default for SketchCanvas {
    fn default() -> Self {
        Self {
            tool: Tool::Freehand,
            brush_width: BRUSH_WIDTH_DEFAULT,
            brush_color: Color::BLACK,
            items: Vec::new(),
            gesture: None,
        }
    }
}

impl SketchCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Switches tools. An in-progress gesture is dropped rather than
    /// committed; switching mid-drag should not leave half a mark behind.
    /// Picking Freehand returns the brush to the default black.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            self.gesture = None;
        }
        if tool == Tool::Freehand {
            self.brush_color = Color::BLACK;
        }
        self.tool = tool;
    }

    /// Adjusts brush thickness by `delta` logical pixels, clamped.
    pub fn adjust_brush_width(&mut self, delta: f32) {
        self.brush_width = (self.brush_width + delta).clamp(BRUSH_WIDTH_MIN, BRUSH_WIDTH_MAX);
    }

    /// Begins a gesture at `p` (canvas-local logical pixels).
    pub fn pointer_down(&mut self, p: Vec2) {
        match self.tool {
            Tool::Freehand => {
                self.gesture = Some(Gesture::Freehand { points: vec![p] });
            }
            Tool::Rectangle => {
                self.gesture = Some(Gesture::Rectangle {
                    anchor: p,
                    cursor: p,
                });
            }
            Tool::Eraser => {
                self.stamp(p);
                self.gesture = Some(Gesture::Erasing);
            }
        }
    }

    /// Extends the active gesture. No-op when the pointer is not down.
    pub fn pointer_move(&mut self, p: Vec2) {
        match &mut self.gesture {
            None => {}
            Some(Gesture::Freehand { points }) => {
                // Duplicate consecutive points add zero-length segments; skip.
                if points.last() != Some(&p) {
                    points.push(p);
                }
            }
            Some(Gesture::Rectangle { cursor, .. }) => {
                *cursor = p;
            }
            Some(Gesture::Erasing) => {
                self.stamp(p);
            }
        }
    }

    /// Ends the active gesture, committing its result.
    pub fn pointer_up(&mut self, p: Vec2) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        match gesture {
            Gesture::Freehand { mut points } => {
                if points.last() != Some(&p) {
                    points.push(p);
                }
                // A click without movement is a single-point stroke: a dot.
                self.items.push(CanvasItem::Stroke {
                    points,
                    width: self.brush_width,
                    color: self.brush_color,
                });
            }
            Gesture::Rectangle { anchor, .. } => {
                let rect = Rect::from_points(anchor, p);
                if !rect.is_empty() {
                    self.items.push(CanvasItem::RectOutline {
                        rect,
                        width: self.brush_width,
                        color: self.brush_color,
                    });
                }
            }
            // Stamps were committed on down/move; release adds nothing.
            Gesture::Erasing => {}
        }
    }

    /// Drops the in-progress gesture without committing (Escape).
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// Removes all committed items. Any active gesture is dropped too.
    pub fn clear(&mut self) {
        self.items.clear();
        self.gesture = None;
    }

    /// Preview of the active gesture as a canvas item, for rendering on top
    /// of the committed items.
    pub fn preview(&self) -> Option<CanvasItem> {
        match self.gesture.as_ref()? {
            Gesture::Freehand { points } => Some(CanvasItem::Stroke {
                points: points.clone(),
                width: self.brush_width,
                color: self.brush_color,
            }),
            Gesture::Rectangle { anchor, cursor } => {
                let rect = Rect::from_points(*anchor, *cursor);
                Some(CanvasItem::RectOutline {
                    rect,
                    width: self.brush_width,
                    color: self.brush_color,
                })
            }
            // Stamps are already committed as they happen.
            Gesture::Erasing => None,
        }
    }

    fn stamp(&mut self, center: Vec2) {
        let rect = Rect::centered_square(center, ERASER_SIDE);

        // Dragging within the same spot floods the item list; skip exact repeats.
        if self.items.last() == Some(&CanvasItem::EraseStamp { rect }) {
            return;
        }
        self.items.push(CanvasItem::EraseStamp { rect });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn freehand_drag_commits_polyline() {
        let mut canvas = SketchCanvas::new();
        canvas.pointer_down(v(0.0, 0.0));
        canvas.pointer_move(v(10.0, 0.0));
        canvas.pointer_move(v(10.0, 10.0));
        canvas.pointer_up(v(20.0, 10.0));

        assert_eq!(canvas.items().len(), 1);
        match &canvas.items()[0] {
            CanvasItem::Stroke { points, .. } => {
                assert_eq!(
                    points,
                    &vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(20.0, 10.0)]
                );
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn freehand_click_commits_single_point_dot() {
        let mut canvas = SketchCanvas::new();
        canvas.pointer_down(v(5.0, 5.0));
        canvas.pointer_up(v(5.0, 5.0));

        match &canvas.items()[0] {
            CanvasItem::Stroke { points, .. } => assert_eq!(points, &vec![v(5.0, 5.0)]),
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn freehand_skips_duplicate_consecutive_points() {
        let mut canvas = SketchCanvas::new();
        canvas.pointer_down(v(0.0, 0.0));
        canvas.pointer_move(v(0.0, 0.0));
        canvas.pointer_move(v(1.0, 0.0));
        canvas.pointer_up(v(1.0, 0.0));

        match &canvas.items()[0] {
            CanvasItem::Stroke { points, .. } => assert_eq!(points.len(), 2),
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_commits_normalized_from_any_corner_order() {
        let mut canvas = SketchCanvas::new();
        canvas.set_tool(Tool::Rectangle);
        canvas.pointer_down(v(50.0, 60.0));
        canvas.pointer_move(v(30.0, 20.0));
        canvas.pointer_up(v(10.0, 20.0));

        match &canvas.items()[0] {
            CanvasItem::RectOutline { rect, .. } => {
                assert_eq!(*rect, Rect::new(10.0, 20.0, 40.0, 40.0));
            }
            other => panic!("expected rect outline, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_rectangle_is_dropped() {
        let mut canvas = SketchCanvas::new();
        canvas.set_tool(Tool::Rectangle);
        canvas.pointer_down(v(10.0, 10.0));
        canvas.pointer_up(v(10.0, 10.0));

        assert!(canvas.items().is_empty());
    }

    #[test]
    fn eraser_stamps_centered_squares_along_drag() {
        let mut canvas = SketchCanvas::new();
        canvas.set_tool(Tool::Eraser);
        canvas.pointer_down(v(100.0, 100.0));
        canvas.pointer_move(v(150.0, 100.0));
        canvas.pointer_up(v(200.0, 100.0));

        // Down stamp and move stamp; release commits nothing.
        assert_eq!(canvas.items().len(), 2);
        assert_eq!(
            canvas.items()[0],
            CanvasItem::EraseStamp {
                rect: Rect::new(50.0, 50.0, 100.0, 100.0)
            }
        );
        assert_eq!(
            canvas.items()[1],
            CanvasItem::EraseStamp {
                rect: Rect::new(100.0, 50.0, 100.0, 100.0)
            }
        );
    }

    #[test]
    fn eraser_move_without_press_does_not_stamp() {
        let mut canvas = SketchCanvas::new();
        canvas.set_tool(Tool::Eraser);
        canvas.pointer_move(v(100.0, 100.0));
        assert!(canvas.items().is_empty());
    }

    #[test]
    fn escape_cancels_gesture_without_commit() {
        let mut canvas = SketchCanvas::new();
        canvas.pointer_down(v(0.0, 0.0));
        canvas.pointer_move(v(10.0, 10.0));
        canvas.cancel_gesture();
        canvas.pointer_up(v(20.0, 20.0));

        assert!(canvas.items().is_empty());
    }

    #[test]
    fn tool_switch_drops_in_progress_gesture() {
        let mut canvas = SketchCanvas::new();
        canvas.pointer_down(v(0.0, 0.0));
        canvas.set_tool(Tool::Rectangle);
        canvas.pointer_up(v(10.0, 10.0));

        assert!(canvas.items().is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut canvas = SketchCanvas::new();
        canvas.pointer_down(v(0.0, 0.0));
        canvas.pointer_up(v(1.0, 1.0));
        assert_eq!(canvas.items().len(), 1);

        canvas.clear();
        assert!(canvas.items().is_empty());
    }

    #[test]
    fn brush_width_clamps_at_both_ends() {
        let mut canvas = SketchCanvas::new();
        canvas.adjust_brush_width(-1000.0);
        assert_eq!(canvas.brush_width(), 1.0);

        canvas.adjust_brush_width(1000.0);
        assert_eq!(canvas.brush_width(), 64.0);
    }

    #[test]
    fn preview_tracks_rubber_band_rectangle() {
        let mut canvas = SketchCanvas::new();
        canvas.set_tool(Tool::Rectangle);
        canvas.pointer_down(v(10.0, 10.0));
        canvas.pointer_move(v(40.0, 30.0));

        match canvas.preview() {
            Some(CanvasItem::RectOutline { rect, .. }) => {
                assert_eq!(rect, Rect::new(10.0, 10.0, 30.0, 20.0));
            }
            other => panic!("expected rect preview, got {other:?}"),
        }

        canvas.pointer_up(v(40.0, 30.0));
        assert!(canvas.preview().is_none());
    }
}
