use super::{Primitive, PrimitiveMode};

/// The full drawing: an ordered, owned sequence of primitives.
///
/// Ordering is front-first: new primitives are inserted at the front, and the
/// renderer walks the sequence front to back. The front primitive is the
/// *current* primitive, the default target for freehand vertex appends.
///
/// Invariant: a scene always holds at least one primitive, so the current
/// primitive is always a valid append target. `new()` seeds an empty
/// line-strip; [`clear`](Self::clear) re-seeds an empty points primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates a scene holding one empty line-strip primitive.
    pub fn new() -> Self {
        Self {
            primitives: vec![Primitive::new(PrimitiveMode::LineStrip)],
        }
    }

    /// Inserts an empty primitive of the given mode at the front and returns
    /// it for population. The new primitive becomes the current one.
    pub fn prepend_primitive(&mut self, mode: PrimitiveMode) -> &mut Primitive {
        self.primitives.insert(0, Primitive::new(mode));
        &mut self.primitives[0]
    }

    /// The current (front-most, most recently inserted) primitive.
    #[inline]
    pub fn current_mut(&mut self) -> &mut Primitive {
        &mut self.primitives[0]
    }

    /// Drops every primitive (and all owned vertices) and reinitializes to a
    /// single empty points primitive, ready for freehand input.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.primitives.push(Primitive::new(PrimitiveMode::Points));
    }

    /// Primitives in draw order (front to back = most recent first).
    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
