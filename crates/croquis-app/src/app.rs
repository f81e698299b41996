//! Application state and frame loop.
//!
//! `SketchApp` routes input to the canvas/toolbar, owns the 2D renderers and
//! the cube viewer, and decides what each frame draws depending on the
//! active view.

use winit::window::CursorIcon;

use croquis_engine::coords::{Rect, Vec2};
use croquis_engine::core::{App, AppControl, FrameCtx};
use croquis_engine::input::{InputEvent, Key, MouseButton, MouseButtonState};
use croquis_engine::paint::Color;
use croquis_engine::render::shapes::{RectRenderer, StrokeRenderer};
use croquis_engine::render::{RenderCtx, RenderHooks, RenderTarget};
use croquis_engine::scene::{DrawList, ZIndex};

use crate::canvas::{CanvasItem, SketchCanvas, Tool, CANVAS_BACKGROUND};
use crate::toolbar::{Toolbar, ToolbarAction, TOOLBAR_HEIGHT};
use crate::viewer::CubeViewer;

/// Window chrome behind the canvas, visible when the canvas region is empty
/// (zero-height window) and behind the toolbar gap.
const CHROME_COLOR: Color = Color::from_premul(0.92, 0.92, 0.92, 1.0);

/// Which of the two main views is showing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewMode {
    Canvas,
    Cube,
}

/// Strokes and rectangles go through different pipelines, so a single draw
/// list cannot interleave them. Canvas items are batched into runs of one
/// kind and flushed at every boundary, which keeps a later eraser stamp
/// painting over an earlier stroke.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ItemKind {
    Rect,
    Stroke,
}

fn item_kind(item: &CanvasItem) -> ItemKind {
    match item {
        CanvasItem::Stroke { .. } => ItemKind::Stroke,
        CanvasItem::RectOutline { .. } | CanvasItem::EraseStamp { .. } => ItemKind::Rect,
    }
}

pub struct SketchApp {
    mode: ViewMode,
    canvas: SketchCanvas,
    toolbar: Toolbar,
    viewer: CubeViewer,

    rect_renderer: RectRenderer,
    stroke_renderer: StrokeRenderer,
    batch: DrawList,

    /// Physical surface size last reported to the viewer.
    surface_size: (u32, u32),

    /// True while a left-button drag that started on the canvas is active.
    drawing: bool,
}

impl SketchApp {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Canvas,
            canvas: SketchCanvas::new(),
            toolbar: Toolbar::new(),
            viewer: CubeViewer::new(),
            rect_renderer: RectRenderer::new(),
            stroke_renderer: StrokeRenderer::new(),
            batch: DrawList::new(),
            surface_size: (0, 0),
            drawing: false,
        }
    }

    fn toggle_mode(&mut self) {
        match self.mode {
            ViewMode::Canvas => {
                self.canvas.cancel_gesture();
                self.drawing = false;

                // The 3D surface comes into existence when toggled visible;
                // run its create/resize phases before the first frame.
                self.viewer.on_create();
                let (w, h) = self.surface_size;
                self.viewer.on_resize(w, h);

                self.mode = ViewMode::Cube;
            }
            ViewMode::Cube => {
                self.mode = ViewMode::Canvas;
            }
        }
    }

    fn apply_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SelectTool(tool) => {
                if self.mode == ViewMode::Cube {
                    self.mode = ViewMode::Canvas;
                }
                self.canvas.set_tool(tool);
            }
            ToolbarAction::ToggleCube => self.toggle_mode(),
            ToolbarAction::Clear => self.canvas.clear(),
        }
    }

    fn handle_input(&mut self, ctx: &FrameCtx<'_, '_>) {
        let (win_w, _) = ctx.window.logical_size();

        for key in ctx.input_frame.keys_pressed.clone() {
            match key {
                Key::F => self.apply_toolbar_action(ToolbarAction::SelectTool(Tool::Freehand)),
                Key::R => self.apply_toolbar_action(ToolbarAction::SelectTool(Tool::Rectangle)),
                Key::E => self.apply_toolbar_action(ToolbarAction::SelectTool(Tool::Eraser)),
                Key::Tab => self.toggle_mode(),
                Key::Delete => self.canvas.clear(),
                Key::Escape => match self.mode {
                    ViewMode::Cube => self.mode = ViewMode::Canvas,
                    ViewMode::Canvas => {
                        self.canvas.cancel_gesture();
                        self.drawing = false;
                    }
                },
                Key::Unknown(_) => {}
            }
        }

        let wheel = ctx.input_frame.wheel_lines_y;
        if wheel != 0.0 && self.mode == ViewMode::Canvas {
            self.canvas.adjust_brush_width(wheel);
        }

        // Pointer events are replayed in arrival order so a press, drag and
        // release landing in the same frame still form one gesture.
        for ev in ctx.input_frame.events.clone() {
            match ev {
                InputEvent::PointerButton(pb) if pb.button == MouseButton::Left => {
                    let p = Vec2::new(pb.x, pb.y);
                    match pb.state {
                        MouseButtonState::Pressed => {
                            if let Some(action) = self.toolbar.hit(p, win_w) {
                                self.apply_toolbar_action(action);
                            } else if self.mode == ViewMode::Canvas && p.y >= TOOLBAR_HEIGHT {
                                self.canvas.pointer_down(p);
                                self.drawing = true;
                            }
                        }
                        MouseButtonState::Released => {
                            if self.drawing {
                                self.canvas.pointer_up(p);
                                self.drawing = false;
                            }
                        }
                    }
                }

                InputEvent::PointerMoved(m) if self.drawing => {
                    self.canvas.pointer_move(Vec2::new(m.x, m.y));
                }

                InputEvent::Focused(false) => {
                    self.canvas.cancel_gesture();
                    self.drawing = false;
                }

                _ => {}
            }
        }
    }

    fn update_cursor(&self, ctx: &FrameCtx<'_, '_>) {
        let over_canvas = self.mode == ViewMode::Canvas
            && ctx
                .input
                .pointer_pos
                .is_some_and(|(_, y)| y >= TOOLBAR_HEIGHT);

        let cursor = if over_canvas {
            CursorIcon::Crosshair
        } else {
            CursorIcon::Default
        };
        ctx.window.set_cursor(cursor);
    }

    fn render_canvas_view(
        &mut self,
        rctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        win_w: f32,
        win_h: f32,
    ) {
        let z = ZIndex::new(0);
        let canvas_rect = Rect::new(
            0.0,
            TOOLBAR_HEIGHT,
            win_w,
            (win_h - TOOLBAR_HEIGHT).max(0.0),
        );

        let list = &mut self.batch;
        list.clear();
        list.push_clip(canvas_rect);
        list.push_filled_rect(z, canvas_rect, CANVAS_BACKGROUND);

        let preview = self.canvas.preview();
        let mut last_kind = ItemKind::Rect;

        for item in self.canvas.items().iter().chain(preview.iter()) {
            let kind = item_kind(item);
            if kind != last_kind {
                self.rect_renderer.render(rctx, target, list);
                self.stroke_renderer.render(rctx, target, list);
                list.clear();
                list.push_clip(canvas_rect);
                last_kind = kind;
            }

            match item {
                CanvasItem::Stroke {
                    points,
                    width,
                    color,
                } => list.push_stroke(z, points.clone(), *width, *color),
                CanvasItem::RectOutline { rect, width, color } => {
                    list.push_outline_rect(z, *rect, *width, *color)
                }
                CanvasItem::EraseStamp { rect } => {
                    list.push_filled_rect(z, *rect, CANVAS_BACKGROUND)
                }
            }
        }

        self.rect_renderer.render(rctx, target, list);
        self.stroke_renderer.render(rctx, target, list);

        self.record_toolbar(rctx, target, win_w);
    }

    fn render_cube_view(
        &mut self,
        rctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        win_w: f32,
    ) {
        self.viewer.on_frame(rctx, target);
        self.record_toolbar(rctx, target, win_w);
    }

    /// The toolbar draws last, over either view.
    fn record_toolbar(&mut self, rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, win_w: f32) {
        let list = &mut self.batch;
        list.clear();
        self.toolbar
            .record(list, win_w, self.canvas.tool(), self.mode);
        self.rect_renderer.render(rctx, target, list);
        list.clear();
    }
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SketchApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Track drawable size for the cube projection. The resize hook runs
        // in every mode so toggling into the 3D view never shows a frame
        // with a stale aspect ratio.
        let size = ctx.gpu.size();
        let size = (size.width, size.height);
        if size != self.surface_size {
            self.surface_size = size;
            self.viewer.on_resize(size.0, size.1);
        }

        self.handle_input(ctx);
        self.update_cursor(ctx);

        let (win_w, win_h) = ctx.window.logical_size();

        let clear = match self.mode {
            ViewMode::Canvas => CHROME_COLOR,
            ViewMode::Cube => Color::BLACK,
        };

        let mode = self.mode;
        let this = &mut *self;
        ctx.render(clear, |rctx, target| match mode {
            ViewMode::Canvas => this.render_canvas_view(rctx, target, win_w, win_h),
            ViewMode::Cube => this.render_cube_view(rctx, target, win_w),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_enters_and_leaves_cube_view() {
        let mut app = SketchApp::new();
        app.surface_size = (800, 600);

        app.toggle_mode();
        assert_eq!(app.mode, ViewMode::Cube);

        app.toggle_mode();
        assert_eq!(app.mode, ViewMode::Canvas);
    }

    #[test]
    fn entering_cube_view_resets_rotation() {
        let mut app = SketchApp::new();
        app.surface_size = (800, 600);

        app.toggle_mode();
        assert_eq!(app.viewer.transform().angles_deg(), (0.0, 0.0));
    }

    #[test]
    fn selecting_tool_from_cube_view_returns_to_canvas() {
        let mut app = SketchApp::new();
        app.surface_size = (800, 600);
        app.toggle_mode();

        app.apply_toolbar_action(ToolbarAction::SelectTool(Tool::Rectangle));
        assert_eq!(app.mode, ViewMode::Canvas);
        assert_eq!(app.canvas.tool(), Tool::Rectangle);
    }

    #[test]
    fn toggle_cancels_in_progress_gesture() {
        let mut app = SketchApp::new();
        app.surface_size = (800, 600);
        app.canvas.pointer_down(Vec2::new(100.0, 100.0));
        app.drawing = true;

        app.toggle_mode();
        assert!(!app.canvas.gesture_active());
        assert!(!app.drawing);
    }

    #[test]
    fn clear_action_empties_canvas() {
        let mut app = SketchApp::new();
        app.canvas.pointer_down(Vec2::new(100.0, 100.0));
        app.canvas.pointer_up(Vec2::new(110.0, 110.0));
        assert_eq!(app.canvas.items().len(), 1);

        app.apply_toolbar_action(ToolbarAction::Clear);
        assert!(app.canvas.items().is_empty());
    }

    #[test]
    fn canvas_items_batch_by_pipeline_kind() {
        assert_eq!(
            item_kind(&CanvasItem::Stroke {
                points: vec![Vec2::new(0.0, 0.0)],
                width: 1.0,
                color: Color::BLACK,
            }),
            ItemKind::Stroke
        );
        assert_eq!(
            item_kind(&CanvasItem::EraseStamp {
                rect: Rect::new(0.0, 0.0, 1.0, 1.0)
            }),
            ItemKind::Rect
        );
    }
}
