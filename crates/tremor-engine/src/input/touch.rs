use std::collections::BTreeMap;

use crate::coords::{Rect, Vec2, Viewport};
use crate::draw::{Border, DrawCtx, DrawList, TextAlign, ZIndex};
use crate::entity::{Body, Component};
use crate::paint::Color;

use super::snapshot::Input;
use super::types::{Key, TouchEvent, TouchPhase};

/// Fingers currently on the touch surface, keyed by finger id.
#[derive(Debug, Default, Clone)]
pub struct ActiveTouches {
    points: BTreeMap<u64, Vec2>,
}

impl ActiveTouches {
    pub fn apply(&mut self, ev: &TouchEvent) {
        match ev.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.points.insert(ev.id, ev.position);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.points.remove(&ev.id);
            }
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.values().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Screen-space hit area of a virtual button.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HitArea {
    Rect(Rect),
    /// `hit_radius` may exceed the drawn `radius` to forgive imprecise thumbs.
    Circle { center: Vec2, radius: f32, hit_radius: f32 },
}

impl HitArea {
    pub fn hit(&self, p: Vec2) -> bool {
        match *self {
            HitArea::Rect(rect) => rect.contains(p),
            HitArea::Circle { center, hit_radius, .. } => p.distance(center) < hit_radius,
        }
    }
}

/// On-screen button that asserts `key` while a finger covers it.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualButton {
    pub area: HitArea,
    pub key: Key,
    pub label: String,
    active: bool,
}

impl VirtualButton {
    pub fn new(area: HitArea, key: Key, label: impl Into<String>) -> Self {
        Self { area, key, label: label.into(), active: false }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Touch-to-keyboard bridge.
///
/// Each touch update first releases every key the controls own, then presses
/// exactly those covered by an active finger. Touch input therefore has the
/// same level-triggered semantics as the keyboard, with no debouncing.
/// Keys the controls do not own are never touched.
#[derive(Debug, Default, Clone)]
pub struct TouchControls {
    buttons: Vec<VirtualButton>,
}

const DPAD_STEP: f32 = 70.0;
const DPAD_BUTTON: f32 = 60.0;
const DPAD_PADDING: f32 = 30.0;
const ACTION_RADIUS: f32 = 40.0;

impl TouchControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, button: VirtualButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Standard layout: arrow D-pad bottom-left, round `E` action button
    /// bottom-right.
    ///
    /// ```text
    ///    [U]
    /// [L][D][R]             (E)
    /// ```
    pub fn dpad(viewport: Viewport) -> Self {
        let x0 = DPAD_PADDING;
        let y0 = viewport.height - DPAD_STEP * 3.0 - DPAD_PADDING;
        let square = |x: f32, y: f32| HitArea::Rect(Rect::new(x, y, DPAD_BUTTON, DPAD_BUTTON));

        Self::new()
            .with_button(VirtualButton::new(square(x0, y0 + DPAD_STEP), Key::ArrowLeft, "<"))
            .with_button(VirtualButton::new(square(x0 + DPAD_STEP * 2.0, y0 + DPAD_STEP), Key::ArrowRight, ">"))
            .with_button(VirtualButton::new(square(x0 + DPAD_STEP, y0), Key::ArrowUp, "^"))
            .with_button(VirtualButton::new(square(x0 + DPAD_STEP, y0 + DPAD_STEP), Key::ArrowDown, "v"))
            .with_button(VirtualButton::new(
                HitArea::Circle {
                    center: Vec2::new(viewport.width - 80.0, viewport.height - 100.0),
                    radius: ACTION_RADIUS,
                    hit_radius: ACTION_RADIUS * 1.5,
                },
                Key::E,
                "E",
            ))
    }

    pub fn buttons(&self) -> &[VirtualButton] {
        &self.buttons
    }

    pub fn is_active(&self, key: Key) -> bool {
        self.buttons.iter().any(|b| b.key == key && b.active)
    }

    /// Re-derives the owned keys from the current finger positions.
    pub fn apply<I>(&mut self, input: &mut Input, touches: I)
    where
        I: IntoIterator<Item = Vec2>,
    {
        for button in &mut self.buttons {
            button.active = false;
            input.set_key(button.key, false);
        }

        for p in touches {
            for button in &mut self.buttons {
                if button.area.hit(p) {
                    button.active = true;
                }
            }
        }

        for button in &self.buttons {
            if button.active {
                input.set_key(button.key, true);
            }
        }
    }

    /// Draws the overlay in screen space, above everything else.
    pub fn draw_overlay(&self, list: &mut DrawList) {
        let idle = Color::from_srgb_u8(0x42, 0x42, 0x42, 153);
        let lit = Color::WHITE.with_alpha(0.6);
        let outline = Some(Border::new(2.0, Color::WHITE.with_alpha(0.6)));

        for button in &self.buttons {
            match button.area {
                HitArea::Rect(rect) => {
                    let fill = if button.active { lit } else { idle };
                    list.push_rect(ZIndex::OVERLAY, rect, fill, outline.clone());
                    let text = if button.active { Color::BLACK } else { Color::WHITE };
                    list.push_text(ZIndex::OVERLAY, button.label.as_str(), 30.0, text, rect.center(), TextAlign::Center);
                }
                HitArea::Circle { center, radius, .. } => {
                    let fill = if button.active {
                        Color::from_srgb_u8(0xFF, 0xEB, 0x3B, 153)
                    } else {
                        Color::from_srgb_u8(0xD3, 0x2F, 0x2F, 153)
                    };
                    list.push_circle(ZIndex::OVERLAY, center, radius, fill, Some(Border::new(3.0, Color::WHITE)));
                    list.push_text(ZIndex::OVERLAY, button.label.as_str(), 30.0, Color::WHITE, center, TextAlign::Center);
                }
            }
        }
    }
}

/// Attached to an entity, the controls draw as the screen-space overlay and
/// receive touch routing from the game loop.
impl Component for TouchControls {
    fn draw(&self, _owner: &Body, ctx: &mut DrawCtx<'_>) {
        self.draw_overlay(ctx.list);
    }
}
