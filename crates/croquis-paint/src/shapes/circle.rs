use std::f32::consts::TAU;

use croquis_engine::coords::{Rgb, Vec2};
use croquis_engine::scene::{PrimitiveMode, Scene};

/// Number of segments approximating the outline.
const SEGMENTS: u32 = 100;

/// Prepends a unit-circle outline to the scene.
///
/// Vertices sit at angle `i * 2π/SEGMENTS` for i = 0..SEGMENTS. The first
/// vertex is not duplicated at the end; the line-loop mode closes the shape.
/// A fresh empty points primitive is prepended on top, so the outline never
/// becomes the freehand append target.
pub fn push(scene: &mut Scene, color: Rgb) {
    let outline = scene.prepend_primitive(PrimitiveMode::LineLoop);

    let delta = TAU / SEGMENTS as f32;
    for i in 0..SEGMENTS {
        let angle = i as f32 * delta;
        outline.push_vertex(Vec2::new(angle.cos(), angle.sin()), color);
    }

    scene.prepend_primitive(PrimitiveMode::Points);
}
