//! Shape builders and transient overlays.
//!
//! Builders are pure constructors: they take geometric parameters and either
//! prepend fully-formed primitives to the scene (circle, rect) or emit
//! straight to a [`PaintSurface`] for content that is recomputed every frame
//! and never stored (palette strip, landmarks).
//!
//! Keeping them out of the scene module isolates "what a shape looks like"
//! from "how shapes are stored and drawn".

pub mod circle;
pub mod landmarks;
pub mod palette;
pub mod rect;

#[cfg(test)]
pub(crate) mod testing {
    use croquis_engine::coords::{Rgb, Vec2};
    use croquis_engine::render::PaintSurface;
    use croquis_engine::scene::PrimitiveMode;

    /// Records the emitted call stream for overlay tests.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Begin(PrimitiveMode),
        Vertex(Vec2, Rgb),
        End,
    }

    impl Recorder {
        pub fn vertices(&self) -> Vec<(Vec2, Rgb)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Vertex(p, col) => Some((*p, *col)),
                    _ => None,
                })
                .collect()
        }
    }

    impl PaintSurface for Recorder {
        fn begin_shape(&mut self, mode: PrimitiveMode) {
            self.calls.push(Call::Begin(mode));
        }
        fn vertex(&mut self, pos: Vec2, color: Rgb) {
            self.calls.push(Call::Vertex(pos, color));
        }
        fn end_shape(&mut self) {
            self.calls.push(Call::End);
        }
    }
}
