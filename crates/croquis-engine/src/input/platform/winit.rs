use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `pointer_pos` is the last tracked cursor position (logical pixels); winit
/// button events do not carry coordinates, so the runtime threads it through.
///
/// Returns `None` for events not represented by the input subsystem. Key
/// repeats are dropped: a held key acts once, on the initial press.
pub(crate) fn translate_window_event(
    window: &Window,
    pointer_pos: Option<(f32, f32)>,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };

            let (x, y) = pointer_pos.unwrap_or((0.0, 0.0));

            Some(InputEvent::PointerButton {
                button: map_mouse_button(*button),
                state: st,
                x,
                y,
            })
        }

        WindowEvent::KeyboardInput { event, .. } => {
            if event.repeat {
                return None;
            }

            let st = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            let (key, code) = map_key(event.physical_key);

            Some(InputEvent::Key { key, state: st, code })
        }

        _ => None,
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Space => Key::Space,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::KeyC => Key::C,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyT => Key::T,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}
