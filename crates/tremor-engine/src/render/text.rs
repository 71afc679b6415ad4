use std::collections::HashMap;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::draw::TextAlign;

use super::pipeline::{self, InstanceBuffer, PipelineDesc, QUAD_INDEX_COUNT};
use super::{FontSystem, RenderCtx, TextRun};

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2], // logical px
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4 // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Glyph renderer for [`TextRun`]s.
///
/// Maintains a 2048 × 2048 R8Unorm glyph atlas filled by shelf packing.
/// Glyphs are rasterized on first use, keyed by `GlyphRasterConfig` (font,
/// glyph, pixel size). When the atlas fills up it is wiped at the start of
/// the next frame and refilled with whatever that frame needs.
pub(super) struct TextRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,

    atlas: wgpu::Texture,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    atlas_full: bool,
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    layout: Layout<()>,
    glyphs: Vec<GlyphInstance>,
    /// Glyph range per text run of the current frame.
    runs: Vec<Range<u32>>,
    instances: InstanceBuffer,
    warned_no_font: bool,
}

impl TextRenderer {
    pub(super) fn new(device: &wgpu::Device, format: wgpu::TextureFormat, viewport_ubo: &wgpu::Buffer) -> Self {
        let atlas = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tremor glyph atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tremor glyph sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tremor text bgl"),
            entries: &[
                pipeline::viewport_layout_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tremor text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline = pipeline::create_pipeline(
            device,
            format,
            PipelineDesc {
                label: "tremor text pipeline",
                shader: include_str!("shaders/text.wgsl"),
                bind_group_layout: &bgl,
                instance_layout: GlyphInstance::layout(),
            },
        );

        Self {
            pipeline,
            bind_group,
            atlas,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            atlas_full: false,
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            glyphs: Vec::new(),
            runs: Vec::new(),
            instances: InstanceBuffer::new("tremor glyph instances"),
            warned_no_font: false,
        }
    }

    /// Lays out every run, rasterizes missing glyphs and uploads instances.
    ///
    /// Always records one glyph range per run, empty when nothing is drawn.
    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>, runs: &[TextRun], fonts: &FontSystem) {
        self.glyphs.clear();
        self.runs.clear();

        if self.atlas_full {
            self.reset_atlas();
        }

        let Some(font) = fonts.primary() else {
            if !runs.is_empty() && !self.warned_no_font {
                log::warn!("no font loaded; skipping {} text run(s)", runs.len());
                self.warned_no_font = true;
            }
            self.runs.extend(runs.iter().map(|_| 0..0));
            return;
        };

        let scale = raster_scale(ctx.letterbox.scale);
        for run in runs {
            let start = self.glyphs.len() as u32;
            self.push_run(ctx, font, run, scale);
            self.runs.push(start..self.glyphs.len() as u32);
        }

        self.instances.upload(ctx.device, ctx.queue, &self.glyphs);
    }

    /// Glyph instances covering text runs `runs`.
    #[inline]
    pub(super) fn glyphs_for(&self, runs: Range<u32>) -> Range<u32> {
        glyph_span(&self.runs, runs)
    }

    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, glyphs: Range<u32>) {
        if glyphs.is_empty() {
            return;
        }
        let Some(instances) = self.instances.slice() else {
            return;
        };
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(1, instances);
        rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, glyphs);
    }

    fn push_run(&mut self, ctx: &RenderCtx<'_>, font: &fontdue::Font, run: &TextRun, scale: f32) {
        // Rasterize at physical size so glyphs stay crisp under letterbox scaling.
        let px = run.size * scale;
        self.layout.reset(&LayoutSettings::default());
        self.layout.append(&[font], &TextStyle::new(&run.text, px, 0));

        // Snapshot so the borrow on `self.layout` ends before atlas writes.
        let placed: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();

        let width = placed
            .iter()
            .map(|&(_, x, _, w, _)| x + w as f32)
            .fold(0.0_f32, f32::max)
            / scale;
        let line = font.horizontal_line_metrics(px).map_or(px * 1.2, |m| m.new_line_size) / scale;

        let left = aligned_left(run.origin.x, run.align, width);
        let top = run.origin.y - line / 2.0;
        let color = [run.color.r, run.color.g, run.color.b, run.color.a];

        for (key, x, y, w, h) in placed {
            if !self.glyph_cache.contains_key(&key) {
                let (metrics, bitmap) = font.rasterize_config(key);
                if metrics.width == 0 || metrics.height == 0 {
                    continue;
                }
                if let Some(entry) = self.try_place_glyph(ctx, &bitmap, metrics.width as u32, metrics.height as u32) {
                    self.glyph_cache.insert(key, entry);
                }
            }
            let Some(cached) = self.glyph_cache.get(&key) else {
                continue;
            };

            self.glyphs.push(GlyphInstance {
                dst_min: [left + x / scale, top + y / scale],
                dst_max: [left + (x + w as f32) / scale, top + (y + h as f32) / scale],
                uv_min: cached.uv_min,
                uv_max: cached.uv_max,
                color,
            });
        }
    }

    // ── atlas ──────────────────────────────────────────────────────────────

    fn try_place_glyph(&mut self, ctx: &RenderCtx<'_>, bitmap: &[u8], w: u32, h: u32) -> Option<CachedGlyph> {
        if self.atlas_full {
            return None;
        }

        // New shelf row when the glyph doesn't fit horizontally.
        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            log::warn!("glyph atlas is full ({ATLAS_SIZE}×{ATLAS_SIZE}); it will be rebuilt next frame");
            self.atlas_full = true;
            return None;
        }

        let (gx, gy) = (self.cursor_x, self.cursor_y);
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );

        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);

        let atlas_f = ATLAS_SIZE as f32;
        Some(CachedGlyph {
            uv_min: [gx as f32 / atlas_f, gy as f32 / atlas_f],
            uv_max: [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
        })
    }

    fn reset_atlas(&mut self) {
        log::debug!("glyph atlas reset ({} cached glyphs dropped)", self.glyph_cache.len());
        self.glyph_cache.clear();
        self.cursor_x = GLYPH_PADDING;
        self.cursor_y = GLYPH_PADDING;
        self.row_height = 0;
        self.atlas_full = false;
    }
}

/// Quantizes the raster scale to 0.25 steps so a live resize does not fill
/// the atlas with near-identical sizes.
fn raster_scale(scale: f32) -> f32 {
    ((scale * 4.0).round() / 4.0).max(0.25)
}

/// Left edge of a run of `width` anchored at `x`.
fn aligned_left(x: f32, align: TextAlign, width: f32) -> f32 {
    match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    }
}

fn glyph_span(per_run: &[Range<u32>], runs: Range<u32>) -> Range<u32> {
    let start = per_run.get(runs.start as usize).map_or(0, |r| r.start);
    let end = runs
        .end
        .checked_sub(1)
        .and_then(|last| per_run.get(last as usize))
        .map_or(start, |r| r.end);
    start..end.max(start)
}
