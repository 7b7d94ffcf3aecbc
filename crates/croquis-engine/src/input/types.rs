/// Keyboard key identifier.
///
/// Deliberately small: only the keys the drawing tool maps, plus a stable
/// passthrough for everything else. Unmapped keys reach the application as
/// `Key::Unknown` and are ignored there.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    C,
    L,
    N,
    O,
    P,
    Q,
    T,

    /// Platform key code without a dedicated variant.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Stable platform scancode, kept for diagnostics.
        code: u32,
    },

    /// Pointer moved; coordinates in logical pixels.
    PointerMoved { x: f32, y: f32 },

    /// Button transition, with the pointer position at the time of the event.
    PointerButton {
        button: MouseButton,
        state: MouseButtonState,
        x: f32,
        y: f32,
    },

    /// Pointer left the window surface.
    PointerLeft,
}
