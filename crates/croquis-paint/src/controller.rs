use croquis_engine::coords::{Rgb, Vec2, Viewport, ViewTransform};
use croquis_engine::core::AppControl;
use croquis_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use croquis_engine::scene::{PrimitiveMode, Scene};

use crate::shapes::{circle, rect};

const CLICK_RECT: Rgb = Rgb::new(255, 255, 0);
const STAMP_RECT: Rgb = Rgb::new(200, 200, 200);
const CIRCLE_STROKE: Rgb = Rgb::new(255, 68, 0);
const BRUSH: Rgb = Rgb::white();

const PAN_STEP: f32 = 0.2;

/// What the frame shows: the drawing itself, or the palette strip while the
/// space key is held.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisplayMode {
    Drawing,
    PaletteView,
}

/// Maps input events to scene mutations and view-transform updates.
///
/// The display mode is the only persistent state here; every other event is
/// stateless command dispatch. Unrecognized keys and events are no-ops.
pub struct Controller {
    mode: DisplayMode,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::Drawing,
        }
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn handle_event(
        &mut self,
        ev: &InputEvent,
        scene: &mut Scene,
        transform: &mut ViewTransform,
        viewport: Viewport,
    ) -> AppControl {
        match *ev {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                code,
            } => {
                log::debug!("key pressed (code = {code})");
                return self.handle_key_press(key, scene, transform);
            }

            InputEvent::Key {
                key: Key::Space,
                state: KeyState::Released,
                ..
            } => {
                self.mode = DisplayMode::Drawing;
            }

            InputEvent::PointerButton {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
            } => {
                log::debug!("click at ({x}, {y})");
                // The cursor position is used as-is, without mapping into the
                // [-1, 1] world range.
                rect::push(scene, x, y, 0.3, 0.2, CLICK_RECT);
            }

            InputEvent::PointerButton {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x,
                y,
            } => {
                let p = window_to_world(x, y, viewport);
                scene.current_mut().push_vertex(p, BRUSH);
            }

            _ => {}
        }

        AppControl::Continue
    }

    fn handle_key_press(
        &mut self,
        key: Key,
        scene: &mut Scene,
        transform: &mut ViewTransform,
    ) -> AppControl {
        match key {
            Key::Q => return AppControl::Exit,

            Key::Space => self.mode = DisplayMode::PaletteView,

            Key::O => {
                transform.translate(0.2, 0.1);
                circle::push(scene, CIRCLE_STROKE);
            }

            Key::N => {
                transform.translate(0.2, 0.0);
                transform.rotate(-45.0);
                rect::push(scene, 0.2, 0.7, 0.3, 0.2, STAMP_RECT);
            }

            Key::ArrowUp => transform.translate(0.0, PAN_STEP),
            Key::ArrowDown => transform.translate(0.0, -PAN_STEP),
            Key::ArrowLeft => transform.translate(-PAN_STEP, 0.0),
            Key::ArrowRight => transform.translate(PAN_STEP, 0.0),

            Key::P => {
                scene.prepend_primitive(PrimitiveMode::Points);
            }
            Key::L => {
                scene.prepend_primitive(PrimitiveMode::Lines);
            }
            Key::T => {
                scene.prepend_primitive(PrimitiveMode::Triangles);
            }

            Key::C => scene.clear(),

            Key::Unknown(_) => {}
        }

        AppControl::Continue
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a window position (logical pixels, top-left origin) to world
/// coordinates (center origin, y up), both axes spanning [-1, 1].
fn window_to_world(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(
        -1.0 + 2.0 * x / viewport.width,
        -(-1.0 + 2.0 * y / viewport.height),
    )
}
