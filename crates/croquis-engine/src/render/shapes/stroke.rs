use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::StrokeCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    ViewportUniform, logical_clip_to_scissor, premul_alpha_blend, viewport_ubo_min_binding_size,
};

/// Segments per cap/join disc. Sixteen keeps round caps visually smooth at
/// typical brush widths without ballooning vertex counts.
const DISC_SEGMENTS: u32 = 16;

/// Freehand stroke renderer.
///
/// Polylines are tessellated on the CPU into a flat triangle list (one quad
/// per segment plus a disc at every point for round caps and joins) and
/// streamed into a dynamically grown vertex buffer. The vertex shader converts
/// logical px to NDC via the viewport uniform, same as the rect pipeline.
#[derive(Default)]
pub struct StrokeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    /// CPU-side vertex scratch, reused across frames.
    vertices: Vec<StrokeVertex>,
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders strokes contained in `draw_list` into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        // Tessellate in paint order, recording a vertex range per clip group.
        self.vertices.clear();
        let mut groups: Vec<(std::ops::Range<u32>, Option<Rect>)> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Stroke(cmd) = &item.cmd else { continue };

            let start = self.vertices.len() as u32;
            tessellate_stroke(cmd, &mut self.vertices);
            let end = self.vertices.len() as u32;
            if start == end {
                continue;
            }

            // Merge with the previous group when the clip is unchanged.
            match groups.last_mut() {
                Some((range, clip)) if *clip == item.clip_rect => range.end = end,
                _ => groups.push((start..end, item.clip_rect)),
            }
        }

        if self.vertices.is_empty() {
            return;
        }

        self.write_viewport_uniform(ctx);
        self.ensure_vbo_capacity(ctx, self.vertices.len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("croquis stroke pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        for (range, clip) in groups {
            if let Some((sx, sy, sw, sh)) =
                logical_clip_to_scissor(clip, ctx.physical_size(), ctx.scale_factor)
            {
                rpass.set_scissor_rect(sx, sy, sw, sh);
                rpass.draw(range, 0..1);
            }
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/stroke.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("croquis stroke shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("croquis stroke bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(viewport_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("croquis stroke pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("croquis stroke pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[StrokeVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("croquis stroke viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("croquis stroke bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_vbo_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(1024);
        let new_size = (new_cap * std::mem::size_of::<StrokeVertex>()) as u64;

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("croquis stroke vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct StrokeVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl StrokeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos (logical px)
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StrokeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Tessellates a polyline stroke into triangles.
///
/// Per segment: one quad straddling the centerline by half the width.
/// Per point: one disc for the round cap/join. Degenerate (zero-length)
/// segments are skipped; a single-point stroke still produces its disc, which
/// is how a tap renders as a dot.
fn tessellate_stroke(cmd: &StrokeCmd, out: &mut Vec<StrokeVertex>) {
    let half = (cmd.width / 2.0).max(0.5);
    let color = [cmd.color.r, cmd.color.g, cmd.color.b, cmd.color.a];

    let v = |p: Vec2| StrokeVertex { pos: [p.x, p.y], color };

    for pair in cmd.points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let Some(dir) = (p1 - p0).normalized() else { continue };
        let n = dir.perp() * half;

        let (a, b) = (p0 + n, p0 - n);
        let (c, d) = (p1 + n, p1 - n);

        out.extend_from_slice(&[v(a), v(b), v(c), v(c), v(b), v(d)]);
    }

    // Round caps and joins.
    for &p in &cmd.points {
        push_disc(p, half, color, out);
    }
}

fn push_disc(center: Vec2, radius: f32, color: [f32; 4], out: &mut Vec<StrokeVertex>) {
    let v = |p: Vec2| StrokeVertex { pos: [p.x, p.y], color };

    let mut prev = Vec2::new(center.x + radius, center.y);
    for i in 1..=DISC_SEGMENTS {
        let theta = (i as f32) / (DISC_SEGMENTS as f32) * std::f32::consts::TAU;
        let next = Vec2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin());
        out.extend_from_slice(&[v(center), v(prev), v(next)]);
        prev = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn stroke(points: &[(f32, f32)], width: f32) -> StrokeCmd {
        StrokeCmd::new(
            points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
            width,
            Color::BLACK,
        )
    }

    #[test]
    fn two_point_stroke_has_segment_and_caps() {
        let mut verts = Vec::new();
        tessellate_stroke(&stroke(&[(0.0, 0.0), (10.0, 0.0)], 4.0), &mut verts);

        // 6 quad vertices + 2 discs.
        let expected = 6 + 2 * (DISC_SEGMENTS as usize) * 3;
        assert_eq!(verts.len(), expected);
    }

    #[test]
    fn segment_quad_straddles_centerline() {
        let mut verts = Vec::new();
        tessellate_stroke(&stroke(&[(0.0, 0.0), (10.0, 0.0)], 4.0), &mut verts);

        // First two vertices are the ±half offsets at the start point.
        assert_eq!(verts[0].pos, [0.0, 2.0]);
        assert_eq!(verts[1].pos, [0.0, -2.0]);
    }

    #[test]
    fn single_point_stroke_is_a_dot() {
        let mut verts = Vec::new();
        tessellate_stroke(&stroke(&[(5.0, 5.0)], 10.0), &mut verts);

        assert_eq!(verts.len(), (DISC_SEGMENTS as usize) * 3);
        // All disc vertices stay within the radius of the center.
        for vert in &verts {
            let dx = vert.pos[0] - 5.0;
            let dy = vert.pos[1] - 5.0;
            assert!((dx * dx + dy * dy).sqrt() <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn duplicate_points_skip_degenerate_segments() {
        let mut verts = Vec::new();
        tessellate_stroke(&stroke(&[(1.0, 1.0), (1.0, 1.0)], 4.0), &mut verts);

        // No quad, two (coincident) cap discs.
        assert_eq!(verts.len(), 2 * (DISC_SEGMENTS as usize) * 3);
    }

    #[test]
    fn minimum_half_width_is_enforced() {
        let mut verts = Vec::new();
        tessellate_stroke(&stroke(&[(0.0, 0.0), (10.0, 0.0)], 0.0), &mut verts);
        // Hairline strokes still get half a pixel of body.
        assert_eq!(verts[0].pos, [0.0, 0.5]);
    }
}
