//! Translation of a [`DrawList`] into GPU instance runs.
//!
//! Items are walked in paint order. Consecutive items that share a pipeline
//! collapse into one [`Batch`]; a kind change starts a new one, so paint
//! order holds across primitive kinds.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2, Viewport};
use crate::draw::{Border, DrawCmd, DrawList, TextAlign};
use crate::paint::Color;

/// Sprite handles carry no pixels here; a sprite shows as an outlined
/// placeholder of its rect.
const SPRITE_FILL: Color = Color::from_premul(0.86, 0.86, 0.86, 1.0);
const SPRITE_OUTLINE: Color = Color::from_premul(0.18, 0.18, 0.18, 1.0);
const SPRITE_OUTLINE_WIDTH: f32 = 2.0;

#[inline]
fn rgba(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, c.a]
}

fn border_parts(border: Option<&Border>) -> (f32, [f32; 4]) {
    border
        .filter(|b| b.width > 0.0)
        .map_or((0.0, [0.0; 4]), |b| (b.width, rgba(b.color)))
}

// ── instances ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub border_color: [f32; 4],
    pub border_width: f32,
    pub _pad: [f32; 3],
}

impl QuadInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // color
        4 => Float32x4, // border_color
        5 => Float32   // border_width
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn new(rect: Rect, color: Color, border: Option<&Border>) -> Self {
        let (border_width, border_color) = border_parts(border);
        Self {
            origin: [rect.origin.x, rect.origin.y],
            size: [rect.size.x, rect.size.y],
            color: rgba(color),
            border_color,
            border_width,
            _pad: [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    /// `[radius, border_width]`
    pub radius_border: [f32; 2],
    pub color: [f32; 4],
    pub border_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius, border_width
        3 => Float32x4, // color
        4 => Float32x4 // border_color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Text still to be laid out against a font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
    pub align: TextAlign,
}

// ── batches ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchKind {
    Quads,
    Circles,
    Text,
}

/// A run of consecutive same-kind items.
///
/// `range` indexes the instance (or text run) array of that kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Batch {
    pub kind: BatchKind,
    pub range: Range<u32>,
}

/// Per-frame instance data, reused across frames.
#[derive(Debug, Default)]
pub struct FrameBatches {
    quads: Vec<QuadInstance>,
    circles: Vec<CircleInstance>,
    texts: Vec<TextRun>,
    batches: Vec<Batch>,
}

impl FrameBatches {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refills from `list` in paint order. Degenerate items are skipped.
    pub fn rebuild(&mut self, list: &mut DrawList) {
        self.quads.clear();
        self.circles.clear();
        self.texts.clear();
        self.batches.clear();

        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => {
                    if cmd.rect.is_empty() {
                        continue;
                    }
                    self.quads.push(QuadInstance::new(cmd.rect, cmd.color, cmd.border.as_ref()));
                    extend(&mut self.batches, BatchKind::Quads, self.quads.len());
                }
                DrawCmd::Sprite(cmd) => {
                    if cmd.rect.is_empty() {
                        continue;
                    }
                    let outline = Border::new(SPRITE_OUTLINE_WIDTH, SPRITE_OUTLINE);
                    self.quads.push(QuadInstance::new(cmd.rect, SPRITE_FILL, Some(&outline)));
                    extend(&mut self.batches, BatchKind::Quads, self.quads.len());
                }
                DrawCmd::Circle(cmd) => {
                    if cmd.radius <= 0.0 {
                        continue;
                    }
                    let (border_width, border_color) = border_parts(cmd.border.as_ref());
                    self.circles.push(CircleInstance {
                        center: [cmd.center.x, cmd.center.y],
                        radius_border: [cmd.radius, border_width],
                        color: rgba(cmd.color),
                        border_color,
                    });
                    extend(&mut self.batches, BatchKind::Circles, self.circles.len());
                }
                DrawCmd::Text(cmd) => {
                    if cmd.size <= 0.0 || cmd.text.trim().is_empty() {
                        continue;
                    }
                    self.texts.push(TextRun {
                        text: cmd.text.clone(),
                        size: cmd.size,
                        color: cmd.color,
                        origin: cmd.origin,
                        align: cmd.align,
                    });
                    extend(&mut self.batches, BatchKind::Text, self.texts.len());
                }
            }
        }
    }

    #[inline]
    pub fn quads(&self) -> &[QuadInstance] {
        &self.quads
    }

    #[inline]
    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    #[inline]
    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    #[inline]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }
}

/// Records the instance just pushed (`len - 1`) into the trailing batch.
fn extend(batches: &mut Vec<Batch>, kind: BatchKind, len: usize) {
    let end = len as u32;
    match batches.last_mut() {
        Some(last) if last.kind == kind && last.range.end + 1 == end => last.range.end = end,
        _ => batches.push(Batch {
            kind,
            range: end - 1..end,
        }),
    }
}

// ── letterbox ─────────────────────────────────────────────────────────────

/// Placement of the game viewport on the surface, physical px.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Letterbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Physical pixels per logical pixel.
    pub scale: f32,
}

/// Largest aspect-preserving fit of `viewport` centered on the surface.
///
/// `None` when either side is empty (minimized window, invalid viewport).
pub fn letterbox(surface_width: u32, surface_height: u32, viewport: Viewport) -> Option<Letterbox> {
    if surface_width == 0 || surface_height == 0 || !viewport.is_valid() {
        return None;
    }

    let (sw, sh) = (surface_width as f32, surface_height as f32);
    let scale = (sw / viewport.width).min(sh / viewport.height);
    let x = ((sw - viewport.width * scale) / 2.0).floor().max(0.0);
    let y = ((sh - viewport.height * scale) / 2.0).floor().max(0.0);

    Some(Letterbox {
        x,
        y,
        width: (viewport.width * scale).min(sw - x),
        height: (viewport.height * scale).min(sh - y),
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ImageHandle, ZIndex};

    fn grey() -> Color {
        Color::from_premul(0.5, 0.5, 0.5, 1.0)
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn mixed_list_becomes_batches_in_paint_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::BACKGROUND, Rect::new(0.0, 0.0, 800.0, 600.0), grey());
        list.push_solid_rect(ZIndex::WORLD, Rect::new(10.0, 10.0, 50.0, 50.0), Color::WHITE);
        list.push_solid_circle(ZIndex::WORLD, Vec2::new(100.0, 100.0), 20.0, Color::WHITE);
        list.push_text(ZIndex::HUD, "Score: 3", 24.0, Color::WHITE, Vec2::new(20.0, 20.0), TextAlign::Left);
        list.push_sprite(ZIndex::WORLD, ImageHandle(7), Rect::new(200.0, 300.0, 64.0, 96.0), false);

        let mut batches = FrameBatches::new();
        batches.rebuild(&mut list);

        // The sprite sorts into the world layer, before the HUD text.
        assert_eq!(
            batches.batches(),
            &[
                Batch { kind: BatchKind::Quads, range: 0..2 },
                Batch { kind: BatchKind::Circles, range: 0..1 },
                Batch { kind: BatchKind::Quads, range: 2..3 },
                Batch { kind: BatchKind::Text, range: 0..1 },
            ]
        );
        assert_eq!(batches.quads().len(), 3);
        assert_eq!(batches.texts()[0].text, "Score: 3");
    }

    #[test]
    fn rect_border_and_sprite_outline_reach_instances() {
        let mut list = DrawList::new();
        let outline = Border::new(3.0, Color::BLACK);
        list.push_rect(ZIndex::WORLD, Rect::new(1.0, 2.0, 30.0, 40.0), grey(), Some(outline));
        list.push_sprite(ZIndex::WORLD, ImageHandle(1), Rect::new(0.0, 0.0, 8.0, 8.0), true);

        let mut batches = FrameBatches::new();
        batches.rebuild(&mut list);

        let rect = batches.quads()[0];
        assert_eq!(rect.origin, [1.0, 2.0]);
        assert_eq!(rect.size, [30.0, 40.0]);
        assert_eq!(rect.border_width, 3.0);
        assert_eq!(rect.border_color, rgba(Color::BLACK));

        let sprite = batches.quads()[1];
        assert_eq!(sprite.color, rgba(SPRITE_FILL));
        assert_eq!(sprite.border_width, SPRITE_OUTLINE_WIDTH);
    }

    #[test]
    fn degenerate_items_are_dropped() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::WORLD, Rect::new(0.0, 0.0, 0.0, 10.0), grey());
        list.push_solid_circle(ZIndex::WORLD, Vec2::zero(), 0.0, grey());
        list.push_text(ZIndex::HUD, "  ", 20.0, grey(), Vec2::zero(), TextAlign::Center);

        let mut batches = FrameBatches::new();
        batches.rebuild(&mut list);
        assert!(batches.batches().is_empty());
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::WORLD, Vec2::new(5.0, 5.0), 4.0, grey());
        let mut batches = FrameBatches::new();
        batches.rebuild(&mut list);

        list.clear();
        list.push_solid_rect(ZIndex::WORLD, Rect::new(0.0, 0.0, 4.0, 4.0), grey());
        batches.rebuild(&mut list);

        assert!(batches.circles().is_empty());
        assert_eq!(batches.batches(), &[Batch { kind: BatchKind::Quads, range: 0..1 }]);
    }

    // ── letterbox ─────────────────────────────────────────────────────────

    #[test]
    fn letterbox_centers_and_keeps_aspect() {
        let lb = letterbox(1920, 1200, Viewport::new(1280.0, 720.0)).unwrap();
        assert_eq!(lb.scale, 1.5);
        assert_eq!((lb.x, lb.y), (0.0, 60.0));
        assert_eq!((lb.width, lb.height), (1920.0, 1080.0));

        let pillar = letterbox(1000, 360, Viewport::new(1280.0, 720.0)).unwrap();
        assert_eq!(pillar.scale, 0.5);
        assert_eq!(pillar.x, 180.0);
    }

    #[test]
    fn letterbox_rejects_empty_surface() {
        assert!(letterbox(0, 600, Viewport::new(800.0, 600.0)).is_none());
        assert!(letterbox(800, 600, Viewport::new(0.0, 600.0)).is_none());
    }
}
