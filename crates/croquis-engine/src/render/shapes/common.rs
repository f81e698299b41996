//! Shared GPU types and utilities used by the 2D shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

/// Returns the `wgpu` minimum binding size for the viewport uniform buffer.
///
/// `ViewportUniform` is 16 bytes so its size is always non-zero. Centralising
/// this avoids `.unwrap()` at each renderer's pipeline-creation site.
pub(super) fn viewport_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
        .expect("ViewportUniform has non-zero size by construction")
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── scissor rect ──────────────────────────────────────────────────────────

/// Converts a logical-pixel clip rect to physical scissor rect arguments for wgpu.
///
/// `physical` is the surface size in physical pixels; scissor bounds are
/// clamped to it so the scissor never exceeds the render attachment even when
/// the logical-to-physical conversion rounds.
///
/// Returns `None` if the clip rect is zero-area (renderer should skip the draw call).
/// Returns `Some((x, y, w, h))` in physical pixels, clamped to the surface.
///
/// `clip = None` means "no scissor" → returns the full surface rect.
pub(super) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    physical: (u32, u32),
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let phys_vw = physical.0.max(1);
    let phys_vh = physical.1.max(1);

    let (x, y, w, h) = match clip {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let x  = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
            let y  = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
            let x2 = (((r.origin.x + r.size.x) * scale).max(0.0) as u32).min(phys_vw);
            let y2 = (((r.origin.y + r.size.y) * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: (u32, u32) = (200, 100);

    #[test]
    fn no_clip_covers_full_surface() {
        assert_eq!(
            logical_clip_to_scissor(None, SURFACE, 2.0),
            Some((0, 0, 200, 100))
        );
    }

    #[test]
    fn no_clip_matches_surface_at_fractional_scale() {
        // At scale 1.75 a 31x117 px surface maps to logical 17.714x66.857;
        // multiplying back and truncating would give 30x116. The scissor must
        // use the real surface size, not a re-derived one.
        assert_eq!(
            logical_clip_to_scissor(None, (31, 117), 1.75),
            Some((0, 0, 31, 117))
        );
    }

    #[test]
    fn clip_is_scaled_to_physical() {
        let clip = Rect::new(10.0, 5.0, 20.0, 10.0);
        assert_eq!(
            logical_clip_to_scissor(Some(clip), SURFACE, 2.0),
            Some((20, 10, 40, 20))
        );
    }

    #[test]
    fn clip_clamps_to_surface() {
        let clip = Rect::new(90.0, 40.0, 50.0, 50.0);
        assert_eq!(
            logical_clip_to_scissor(Some(clip), (100, 50), 1.0),
            Some((90, 40, 10, 10))
        );
    }

    #[test]
    fn oversized_clip_clamps_at_fractional_scale() {
        // A clip covering the whole logical viewport must clamp to the exact
        // surface extent, never past it.
        let clip = Rect::new(0.0, 0.0, 18.0, 67.0);
        assert_eq!(
            logical_clip_to_scissor(Some(clip), (31, 117), 1.75),
            Some((0, 0, 31, 117))
        );
    }

    #[test]
    fn zero_area_clip_is_none() {
        let clip = Rect::new(10.0, 10.0, 0.0, 10.0);
        assert_eq!(logical_clip_to_scissor(Some(clip), (100, 50), 1.0), None);
    }

    #[test]
    fn fully_outside_clip_is_none() {
        let clip = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert_eq!(logical_clip_to_scissor(Some(clip), (100, 50), 1.0), None);
    }
}
