use croquis_engine::coords::{Rgb, Vec2};
use croquis_engine::scene::{PrimitiveMode, Scene};

/// Prepends an axis-aligned quad to the scene.
///
/// `width` extends along +y and `height` along +x; callers rely on this
/// swapped mapping. Corner winding: (x, y), (x+height, y),
/// (x+height, y+width), (x, y+width).
pub fn push(scene: &mut Scene, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
    let x2 = x + height;
    let y2 = y + width;

    let quad = scene.prepend_primitive(PrimitiveMode::Quads);
    quad.push_vertex(Vec2::new(x, y), color);
    quad.push_vertex(Vec2::new(x2, y), color);
    quad.push_vertex(Vec2::new(x2, y2), color);
    quad.push_vertex(Vec2::new(x, y2), color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_the_swapped_axis_mapping() {
        let mut scene = Scene::new();
        push(&mut scene, 0.0, 0.0, 0.3, 0.2, Rgb::new(255, 255, 0));

        let quad = &scene.primitives()[0];
        assert_eq!(quad.mode(), PrimitiveMode::Quads);

        let corners: Vec<Vec2> = quad.vertices().iter().map(|v| v.pos).collect();
        assert_eq!(
            corners,
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(0.2, 0.0),
                Vec2::new(0.2, 0.3),
                Vec2::new(0.0, 0.3),
            ]
        );
    }

    #[test]
    fn all_corners_share_the_color() {
        let mut scene = Scene::new();
        let color = Rgb::new(255, 255, 0);
        push(&mut scene, 0.1, 0.4, 0.3, 0.2, color);

        let quad = &scene.primitives()[0];
        assert_eq!(quad.vertices().len(), 4);
        assert!(quad.vertices().iter().all(|v| v.color == color));
    }

    #[test]
    fn offsets_apply_from_the_given_origin() {
        let mut scene = Scene::new();
        push(&mut scene, 0.2, 0.7, 0.3, 0.2, Rgb::new(200, 200, 200));

        let corners: Vec<Vec2> = scene.primitives()[0]
            .vertices()
            .iter()
            .map(|v| v.pos)
            .collect();
        assert_eq!(corners[0], Vec2::new(0.2, 0.7));
        assert!((corners[2].x - 0.4).abs() < 1e-6);
        assert!((corners[2].y - 1.0).abs() < 1e-6);
    }
}
