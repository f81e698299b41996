use crate::coords::Viewport;

/// Renderer-facing context (device/queue + surface format + viewport).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical px.
    pub viewport: Viewport,
    /// Surface size in physical pixels, taken from the configured surface.
    ///
    /// Kept separately from `viewport` because re-deriving it as
    /// `viewport * scale_factor` truncates at fractional scale factors, and
    /// scissor rects and depth attachments must match the surface exactly.
    physical: (u32, u32),
    /// Logical-to-physical pixel ratio.
    pub scale_factor: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        physical: (u32, u32),
        scale_factor: f32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
            physical,
            scale_factor,
        }
    }

    /// Surface size in physical pixels, never zero.
    #[inline]
    pub fn physical_size(&self) -> (u32, u32) {
        (self.physical.0.max(1), self.physical.1.max(1))
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
