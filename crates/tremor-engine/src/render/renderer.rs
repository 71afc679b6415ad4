use wgpu::util::DeviceExt;

use crate::draw::DrawList;
use crate::paint::Color;

use super::batch::{BatchKind, CircleInstance, FrameBatches, QuadInstance};
use super::pipeline::{self, InstanceBuffer, PipelineDesc, QUAD_INDEX_COUNT, UnitQuad, ViewportUniform};
use super::text::TextRenderer;
use super::{FontSystem, RenderCtx, RenderTarget};

/// Draws a whole [`DrawList`] in one render pass.
///
/// Pipelines are built for one surface format; recreate the renderer if the
/// format changes.
pub struct Renderer {
    format: wgpu::TextureFormat,
    quad: UnitQuad,
    viewport_ubo: wgpu::Buffer,
    shape_bind_group: wgpu::BindGroup,

    quads: wgpu::RenderPipeline,
    circles: wgpu::RenderPipeline,
    text: TextRenderer,

    quad_instances: InstanceBuffer,
    circle_instances: InstanceBuffer,
    batches: FrameBatches,
}

impl Renderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let viewport_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tremor viewport ubo"),
            contents: bytemuck::bytes_of(&ViewportUniform {
                viewport: [1.0, 1.0],
                _pad: [0.0; 2],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let shape_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tremor shape bgl"),
            entries: &[pipeline::viewport_layout_entry(0)],
        });
        let shape_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tremor shape bind group"),
            layout: &shape_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let quads = pipeline::create_pipeline(
            device,
            format,
            PipelineDesc {
                label: "tremor quad pipeline",
                shader: include_str!("shaders/quad.wgsl"),
                bind_group_layout: &shape_bgl,
                instance_layout: QuadInstance::layout(),
            },
        );
        let circles = pipeline::create_pipeline(
            device,
            format,
            PipelineDesc {
                label: "tremor circle pipeline",
                shader: include_str!("shaders/circle.wgsl"),
                bind_group_layout: &shape_bgl,
                instance_layout: CircleInstance::layout(),
            },
        );
        let text = TextRenderer::new(device, format, &viewport_ubo);

        Self {
            format,
            quad: UnitQuad::new(device),
            viewport_ubo,
            shape_bind_group,
            quads,
            circles,
            text,
            quad_instances: InstanceBuffer::new("tremor quad instances"),
            circle_instances: InstanceBuffer::new("tremor circle instances"),
            batches: FrameBatches::new(),
        }
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Clears the target to `clear` and draws `list` into the letterboxed viewport.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &mut DrawList,
        fonts: &FontSystem,
        clear: Color,
    ) {
        self.batches.rebuild(list);
        self.text.prepare(ctx, self.batches.texts(), fonts);

        ctx.queue.write_buffer(
            &self.viewport_ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform {
                viewport: [ctx.viewport.width, ctx.viewport.height],
                _pad: [0.0; 2],
            }),
        );
        self.quad_instances.upload(ctx.device, ctx.queue, self.batches.quads());
        self.circle_instances.upload(ctx.device, ctx.queue, self.batches.circles());

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tremor frame pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: f64::from(clear.r),
                        g: f64::from(clear.g),
                        b: f64::from(clear.b),
                        a: f64::from(clear.a),
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let lb = ctx.letterbox;
        rpass.set_viewport(lb.x, lb.y, lb.width, lb.height, 0.0, 1.0);
        self.quad.bind(&mut rpass);

        for batch in self.batches.batches() {
            match batch.kind {
                BatchKind::Quads => {
                    let Some(instances) = self.quad_instances.slice() else {
                        continue;
                    };
                    rpass.set_pipeline(&self.quads);
                    rpass.set_bind_group(0, &self.shape_bind_group, &[]);
                    rpass.set_vertex_buffer(1, instances);
                    rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, batch.range.clone());
                }
                BatchKind::Circles => {
                    let Some(instances) = self.circle_instances.slice() else {
                        continue;
                    };
                    rpass.set_pipeline(&self.circles);
                    rpass.set_bind_group(0, &self.shape_bind_group, &[]);
                    rpass.set_vertex_buffer(1, instances);
                    rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, batch.range.clone());
                }
                BatchKind::Text => {
                    let glyphs = self.text.glyphs_for(batch.range.clone());
                    self.text.draw(&mut rpass, glyphs);
                }
            }
        }
    }
}
