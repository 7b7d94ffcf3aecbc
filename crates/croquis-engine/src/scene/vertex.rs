use crate::coords::{Rgb, Vec2};

/// A single colored point of a [`Primitive`](super::Primitive).
///
/// Immutable once constructed; primitives grow by appending new vertices,
/// never by editing existing ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    pub color: Rgb,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec2, color: Rgb) -> Self {
        Self { pos, color }
    }
}
