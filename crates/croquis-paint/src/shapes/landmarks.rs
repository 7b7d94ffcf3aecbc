use croquis_engine::coords::{Rgb, Vec2};
use croquis_engine::render::PaintSurface;
use croquis_engine::scene::PrimitiveMode;

const TICK: Rgb = Rgb::new(255, 255, 255);
const X_AXIS: Rgb = Rgb::new(255, 0, 0);
const Y_AXIS: Rgb = Rgb::new(0, 255, 0);

/// Draws tick crosses every 0.1 unit across [-1, 1) on both axes.
///
/// Stateless decoration, recomputed every frame and never stored in the
/// scene.
pub fn grid(surface: &mut impl PaintSurface) {
    surface.begin_shape(PrimitiveMode::Lines);
    for step in 0..20 {
        let i = -1.0 + step as f32 * 0.1;

        surface.vertex(Vec2::new(i, -0.01), TICK);
        surface.vertex(Vec2::new(i, 0.01), TICK);
        surface.vertex(Vec2::new(-0.01, i), TICK);
        surface.vertex(Vec2::new(0.01, i), TICK);
    }
    surface.end_shape();
}

/// Draws the axis crosshair: red x axis, green y axis, both spanning [-1, 1].
pub fn axes(surface: &mut impl PaintSurface) {
    surface.begin_shape(PrimitiveMode::Lines);

    surface.vertex(Vec2::new(-1.0, 0.0), X_AXIS);
    surface.vertex(Vec2::new(1.0, 0.0), X_AXIS);

    surface.vertex(Vec2::new(0.0, -1.0), Y_AXIS);
    surface.vertex(Vec2::new(0.0, 1.0), Y_AXIS);

    surface.end_shape();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::testing::{Call, Recorder};

    #[test]
    fn grid_emits_twenty_tick_crosses() {
        let mut rec = Recorder::default();
        grid(&mut rec);

        assert_eq!(rec.calls.first(), Some(&Call::Begin(PrimitiveMode::Lines)));
        assert_eq!(rec.calls.last(), Some(&Call::End));

        let verts = rec.vertices();
        // 20 steps × two segments (4 endpoints) each.
        assert_eq!(verts.len(), 80);
        assert!(verts.iter().all(|(_, c)| *c == TICK));

        // Ticks start at the left edge and stop short of +1.
        assert_eq!(verts[0].0, Vec2::new(-1.0, -0.01));
        let last_step = verts[76].0.x;
        assert!((last_step - 0.9).abs() < 1e-5);
    }

    #[test]
    fn axes_are_colored_per_direction() {
        let mut rec = Recorder::default();
        axes(&mut rec);

        let verts = rec.vertices();
        assert_eq!(verts.len(), 4);

        assert_eq!(verts[0], (Vec2::new(-1.0, 0.0), X_AXIS));
        assert_eq!(verts[1], (Vec2::new(1.0, 0.0), X_AXIS));
        assert_eq!(verts[2], (Vec2::new(0.0, -1.0), Y_AXIS));
        assert_eq!(verts[3], (Vec2::new(0.0, 1.0), Y_AXIS));
    }
}
