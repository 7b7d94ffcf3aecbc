use crate::coords::{Rgb, Vec2};

use super::Vertex;

/// Draw mode of a primitive, mirroring the classic immediate-mode shape kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    Quads,
}

/// One drawable shape: a fixed draw mode plus an ordered, append-only vertex
/// list.
///
/// Vertex-count expectations (multiple of 2 for `Lines`, of 4 for `Quads`)
/// are soft: builders produce complete groups, and the renderer draws
/// whatever count is present, discarding incomplete trailing groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    mode: PrimitiveMode,
    vertices: Vec<Vertex>,
}

impl Primitive {
    /// Creates an empty primitive. The mode is fixed for its lifetime.
    #[inline]
    pub fn new(mode: PrimitiveMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends one vertex at the end of the primitive.
    #[inline]
    pub fn push_vertex(&mut self, pos: Vec2, color: Rgb) {
        self.vertices.push(Vertex::new(pos, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_append_in_order() {
        let mut prim = Primitive::new(PrimitiveMode::Lines);
        prim.push_vertex(Vec2::new(0.0, 0.0), Rgb::white());
        prim.push_vertex(Vec2::new(1.0, 0.0), Rgb::white());

        let xs: Vec<f32> = prim.vertices().iter().map(|v| v.pos.x).collect();
        assert_eq!(xs, [0.0, 1.0]);
    }

    #[test]
    fn mode_is_fixed_at_construction() {
        let prim = Primitive::new(PrimitiveMode::Quads);
        assert_eq!(prim.mode(), PrimitiveMode::Quads);
        assert!(prim.is_empty());
    }
}
