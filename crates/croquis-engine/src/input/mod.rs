//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into [`InputEvent`]s and collects
//! them into a per-frame [`InputFrame`] for the application to drain.

mod frame;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
