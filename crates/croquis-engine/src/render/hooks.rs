use super::{RenderCtx, RenderTarget};

/// Host-driven render lifecycle.
///
/// The runtime (or the app, for a toggleable sub-view) invokes the three
/// phases in order on the render thread:
///
/// - `on_create` once when the drawing surface comes (back) into existence,
/// - `on_resize` whenever the drawable size changes,
/// - `on_frame` once per rendered frame.
///
/// Implementations own all mutable per-frame state; no synchronization is
/// required since every call happens on the render thread.
pub trait RenderHooks {
    /// Resets implementation state for a fresh surface. Re-invoking this must
    /// not leak state from a previous surface.
    fn on_create(&mut self);

    /// Reports a new drawable size in physical pixels. Implementations must
    /// tolerate zero dimensions (minimized window).
    fn on_resize(&mut self, width: u32, height: u32);

    /// Renders one frame.
    fn on_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>);
}
