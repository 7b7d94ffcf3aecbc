use crate::render::{RenderCtx, RenderTarget};

use super::batch::{ShapeBatch, ShapeVertex};

/// GPU renderer for batched shape geometry.
///
/// Owns one pipeline per topology (triangles, lines, points) sharing a single
/// passthrough shader, plus one vertex buffer holding the frame's geometry as
/// three consecutive ranges. Pipelines are (re)created lazily when the
/// surface format changes; the vertex buffer grows by powers of two.
#[derive(Default)]
pub struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    triangle_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    point_pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the batch into `target`.
    ///
    /// Pass order is triangles, then lines, then points, so line work and
    /// point clusters stay visible over filled shapes.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        batch: &ShapeBatch,
    ) {
        if batch.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);

        let tri_count = batch.triangles().len();
        let line_count = batch.lines().len();
        let point_count = batch.points().len();
        let total = tri_count + line_count + point_count;

        self.ensure_vbo_capacity(ctx, total);
        let Some(vbo) = self.vbo.as_ref() else { return };

        // One upload: [triangles | lines | points].
        let mut vertices: Vec<ShapeVertex> = Vec::with_capacity(total);
        vertices.extend_from_slice(batch.triangles());
        vertices.extend_from_slice(batch.lines());
        vertices.extend_from_slice(batch.points());
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&vertices));

        let Some(triangle_pipeline) = self.triangle_pipeline.as_ref() else { return };
        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return };
        let Some(point_pipeline) = self.point_pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("croquis shape pass"),
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

        rpass.set_vertex_buffer(0, vbo.slice(..));

        let tri_end = tri_count as u32;
        let line_end = tri_end + line_count as u32;
        let point_end = line_end + point_count as u32;

        if tri_count > 0 {
            rpass.set_pipeline(triangle_pipeline);
            rpass.draw(0..tri_end, 0..1);
        }
        if line_count > 0 {
            rpass.set_pipeline(line_pipeline);
            rpass.draw(tri_end..line_end, 0..1);
        }
        if point_count > 0 {
            rpass.set_pipeline(point_pipeline);
            rpass.draw(line_end..point_end, 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.triangle_pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/shape.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("croquis shape shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("croquis shape pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        self.triangle_pipeline = Some(make_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::TriangleList,
            "croquis triangle pipeline",
        ));
        self.line_pipeline = Some(make_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::LineList,
            "croquis line pipeline",
        ));
        self.point_pipeline = Some(make_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::PointList,
            "croquis point pipeline",
        ));

        self.pipeline_format = Some(ctx.surface_format);
    }

    fn ensure_vbo_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(256);
        let new_size = (new_cap * std::mem::size_of::<ShapeVertex>()) as u64;

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("croquis shape vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

fn make_pipeline(
    ctx: &RenderCtx<'_>,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    ctx.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[ShapeVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology,
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
        })
}

fn alpha_blend() -> wgpu::BlendState {
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
