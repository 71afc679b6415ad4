use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Touch, TouchPhase as WinitTouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::coords::Vec2;
use crate::input::{InputEvent, Key, KeyState, TouchEvent, TouchPhase};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` converts physical touch positions into logical pixels.
/// Returns `None` for events the input subsystem does not represent.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        WindowEvent::Touch(touch) => Some(InputEvent::Touch(map_touch(scale_factor, touch))),

        _ => None,
    }
}

/// Visibility signal carried by a window event, if any.
///
/// `Some(true)` means the window became hidden (occluded / minimized).
pub fn visibility_change(event: &WindowEvent) -> Option<bool> {
    match event {
        WindowEvent::Occluded(hidden) => Some(*hidden),
        _ => None,
    }
}

fn map_touch(scale_factor: f64, touch: &Touch) -> TouchEvent {
    let phase = match touch.phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    };

    TouchEvent {
        id: touch.id,
        phase,
        position: to_logical(scale_factor, touch.location),
    }
}

fn to_logical(scale_factor: f64, pos: PhysicalPosition<f64>) -> Vec2 {
    let logical = pos.to_logical::<f64>(scale_factor);
    Vec2::new(logical.x as f32, logical.y as f32)
}

/// Maps a physical key position to the engine's logical key.
pub fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        // NativeKeyCode carries no stable numeric in winit 0.30.
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_gameplay_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowLeft)), Key::ArrowLeft);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyE)), Key::E);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)), Key::Shift);
    }

    #[test]
    fn unmapped_codes_stay_distinct() {
        let f5 = map_key(PhysicalKey::Code(KeyCode::F5));
        let f6 = map_key(PhysicalKey::Code(KeyCode::F6));
        assert!(matches!(f5, Key::Unknown(_)));
        assert_ne!(f5, f6);
    }

    #[test]
    fn focus_and_occlusion() {
        assert_eq!(
            translate_window_event(1.0, &WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
        assert_eq!(visibility_change(&WindowEvent::Occluded(true)), Some(true));
        assert_eq!(visibility_change(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn touch_positions_are_logical() {
        let p = to_logical(2.0, PhysicalPosition::new(200.0, 100.0));
        assert_eq!(p, Vec2::new(100.0, 50.0));
    }
}
