use croquis_engine::coords::{Rgb, Vec2};
use croquis_engine::render::PaintSurface;
use croquis_engine::scene::PrimitiveMode;

/// The fixed palette, in swatch order.
const COLORS: [Rgb; 8] = [
    Rgb::new(255, 255, 255),
    Rgb::new(0, 0, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 255),
];

/// Draws the palette strip: one quad per color, eight equal bins across
/// x ∈ [-1, 1], spanning the full vertical range.
///
/// Transient: emitted straight to the surface while the palette view is
/// active, never stored in the scene.
pub fn draw(surface: &mut impl PaintSurface) {
    let dx = 2.0 / COLORS.len() as f32;

    surface.begin_shape(PrimitiveMode::Quads);
    for (i, &color) in COLORS.iter().enumerate() {
        let x0 = -1.0 + i as f32 * dx;
        let x1 = -1.0 + (i + 1) as f32 * dx;

        surface.vertex(Vec2::new(x0, -1.0), color);
        surface.vertex(Vec2::new(x1, -1.0), color);
        surface.vertex(Vec2::new(x1, 1.0), color);
        surface.vertex(Vec2::new(x0, 1.0), color);
    }
    surface.end_shape();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::testing::{Call, Recorder};

    #[test]
    fn emits_one_quads_bracket_with_four_vertices_per_color() {
        let mut rec = Recorder::default();
        draw(&mut rec);

        assert_eq!(rec.calls.first(), Some(&Call::Begin(PrimitiveMode::Quads)));
        assert_eq!(rec.calls.last(), Some(&Call::End));
        assert_eq!(rec.vertices().len(), 32);
    }

    #[test]
    fn bins_partition_the_horizontal_range() {
        let mut rec = Recorder::default();
        draw(&mut rec);

        let verts = rec.vertices();

        // First bin starts at the left edge, last bin ends at the right edge.
        assert_eq!(verts[0].0, Vec2::new(-1.0, -1.0));
        assert!((verts[1].0.x - -0.75).abs() < 1e-6);
        assert!((verts[31].0.x - 0.75).abs() < 1e-6);
        assert!((verts[30].0.x - 1.0).abs() < 1e-6);

        // Every quad spans the full vertical range.
        for quad in verts.chunks_exact(4) {
            assert_eq!(quad[0].0.y, -1.0);
            assert_eq!(quad[1].0.y, -1.0);
            assert_eq!(quad[2].0.y, 1.0);
            assert_eq!(quad[3].0.y, 1.0);
        }
    }

    #[test]
    fn swatches_use_the_palette_colors_in_order() {
        let mut rec = Recorder::default();
        draw(&mut rec);

        let verts = rec.vertices();
        for (i, quad) in verts.chunks_exact(4).enumerate() {
            assert!(quad.iter().all(|(_, c)| *c == COLORS[i]));
        }
    }
}
