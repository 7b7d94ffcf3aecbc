use crate::coords::{Rgb, Vec2};
use crate::scene::{PrimitiveMode, Scene};

/// Immediate-mode drawing capability.
///
/// The scene walk and the transient overlays (landmarks, palette) emit
/// bracketed shape streams into this trait; the GPU batch is the production
/// implementation. Every `begin_shape` must be balanced by an `end_shape`.
pub trait PaintSurface {
    fn begin_shape(&mut self, mode: PrimitiveMode);
    fn vertex(&mut self, pos: Vec2, color: Rgb);
    fn end_shape(&mut self);
}

/// Walks the scene front to back, emitting one bracket per primitive.
///
/// No culling, no validation: empty primitives still produce an (empty)
/// bracket, and vertex counts are passed through as-is. Draw order equals
/// sequence order: the front (most recent) primitive is emitted first.
pub fn render_scene(scene: &Scene, surface: &mut impl PaintSurface) {
    for prim in scene.primitives() {
        surface.begin_shape(prim.mode());
        for v in prim.vertices() {
            surface.vertex(v.pos, v.color);
        }
        surface.end_shape();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the emitted call stream for assertions.
    #[derive(Debug, Default, PartialEq)]
    struct Recorder {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Begin(PrimitiveMode),
        Vertex(Vec2, Rgb),
        End,
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

    fn brackets(rec: &Recorder) -> Vec<PrimitiveMode> {
        rec.calls
            .iter()
            .filter_map(|c| match c {
                Call::Begin(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_bracket_per_primitive_in_reverse_insertion_order() {
        let mut scene = Scene::new();
        scene.prepend_primitive(PrimitiveMode::Points);
        scene.prepend_primitive(PrimitiveMode::Lines);
        scene.prepend_primitive(PrimitiveMode::Quads);

        let mut rec = Recorder::default();
        render_scene(&scene, &mut rec);

        // Most recently inserted comes first; the startup line-strip is last.
        assert_eq!(
            brackets(&rec),
            [
                PrimitiveMode::Quads,
                PrimitiveMode::Lines,
                PrimitiveMode::Points,
                PrimitiveMode::LineStrip,
            ]
        );

        let ends = rec.calls.iter().filter(|c| matches!(c, Call::End)).count();
        assert_eq!(ends, 4);
    }

    #[test]
    fn empty_primitives_emit_empty_brackets() {
        let scene = Scene::new();

        let mut rec = Recorder::default();
        render_scene(&scene, &mut rec);

        assert_eq!(
            rec.calls,
            [Call::Begin(PrimitiveMode::LineStrip), Call::End]
        );
    }

    #[test]
    fn cleared_scene_renders_one_empty_points_bracket() {
        let mut scene = Scene::new();
        scene
            .prepend_primitive(PrimitiveMode::Quads)
            .push_vertex(Vec2::new(0.1, 0.1), Rgb::white());
        scene.clear();

        let mut rec = Recorder::default();
        render_scene(&scene, &mut rec);

        assert_eq!(rec.calls, [Call::Begin(PrimitiveMode::Points), Call::End]);
    }

    #[test]
    fn rendering_is_read_only_and_deterministic() {
        let mut scene = Scene::new();
        let prim = scene.prepend_primitive(PrimitiveMode::Lines);
        prim.push_vertex(Vec2::new(0.0, 0.0), Rgb::new(255, 0, 0));
        prim.push_vertex(Vec2::new(0.5, 0.5), Rgb::new(0, 255, 0));

        let mut first = Recorder::default();
        render_scene(&scene, &mut first);
        let mut second = Recorder::default();
        render_scene(&scene, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn vertices_are_emitted_in_append_order_with_their_colors() {
        let mut scene = Scene::new();
        let prim = scene.prepend_primitive(PrimitiveMode::Points);
        prim.push_vertex(Vec2::new(0.1, 0.2), Rgb::new(1, 2, 3));
        prim.push_vertex(Vec2::new(0.3, 0.4), Rgb::new(4, 5, 6));

        let mut rec = Recorder::default();
        render_scene(&scene, &mut rec);

        assert_eq!(
            rec.calls[..4],
            [
                Call::Begin(PrimitiveMode::Points),
                Call::Vertex(Vec2::new(0.1, 0.2), Rgb::new(1, 2, 3)),
                Call::Vertex(Vec2::new(0.3, 0.4), Rgb::new(4, 5, 6)),
                Call::End,
            ]
        );
    }
}
