use bytemuck::{Pod, Zeroable};

use crate::coords::{Rgb, Vec2, ViewTransform};
use crate::scene::PrimitiveMode;

use super::surface::PaintSurface;

/// GPU vertex: transformed position (world units = NDC) + linear RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side frame batch implementing [`PaintSurface`].
///
/// Applies the view transform to every vertex, then tessellates each closed
/// bracket into one of the three topologies wgpu can draw directly:
/// - `Points` → point list
/// - `Lines` / `LineStrip` / `LineLoop` → line list
/// - `Triangles` / `Quads` → triangle list
///
/// Incomplete trailing groups (a dangling line endpoint, a partial quad) are
/// discarded, matching fixed-function behavior. Rebuilt from scratch every
/// frame; buffers keep their capacity across frames when reused via
/// [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct ShapeBatch {
    transform: ViewTransform,

    points: Vec<ShapeVertex>,
    lines: Vec<ShapeVertex>,
    triangles: Vec<ShapeVertex>,

    // In-flight bracket state.
    scratch: Vec<ShapeVertex>,
    mode: Option<PrimitiveMode>,
}

impl ShapeBatch {
    pub fn new(transform: ViewTransform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    /// Clears batched geometry (keeping allocations) and installs the view
    /// transform for the coming frame.
    pub fn reset(&mut self, transform: ViewTransform) {
        self.transform = transform;
        self.points.clear();
        self.lines.clear();
        self.triangles.clear();
        self.scratch.clear();
        self.mode = None;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.triangles.is_empty()
    }

    pub(super) fn points(&self) -> &[ShapeVertex] {
        &self.points
    }

    pub(super) fn lines(&self) -> &[ShapeVertex] {
        &self.lines
    }

    pub(super) fn triangles(&self) -> &[ShapeVertex] {
        &self.triangles
    }

    fn tessellate(&mut self, mode: PrimitiveMode) {
        let verts = &self.scratch;
        match mode {
            PrimitiveMode::Points => self.points.extend_from_slice(verts),

            PrimitiveMode::Lines => {
                for pair in verts.chunks_exact(2) {
                    self.lines.extend_from_slice(pair);
                }
            }

            PrimitiveMode::LineStrip => {
                for pair in verts.windows(2) {
                    self.lines.extend_from_slice(pair);
                }
            }

            PrimitiveMode::LineLoop => {
                for pair in verts.windows(2) {
                    self.lines.extend_from_slice(pair);
                }
                // The loop mode closes the shape; no duplicated vertex needed
                // in the source data.
                if verts.len() >= 3 {
                    self.lines.push(verts[verts.len() - 1]);
                    self.lines.push(verts[0]);
                }
            }

            PrimitiveMode::Triangles => {
                for tri in verts.chunks_exact(3) {
                    self.triangles.extend_from_slice(tri);
                }
            }

            PrimitiveMode::Quads => {
                for quad in verts.chunks_exact(4) {
                    self.triangles
                        .extend_from_slice(&[quad[0], quad[1], quad[2]]);
                    self.triangles
                        .extend_from_slice(&[quad[0], quad[2], quad[3]]);
                }
            }
        }
    }
}

impl PaintSurface for ShapeBatch {
    fn begin_shape(&mut self, mode: PrimitiveMode) {
        debug_assert!(self.mode.is_none(), "begin_shape inside an open bracket");
        self.mode = Some(mode);
        self.scratch.clear();
    }

    fn vertex(&mut self, pos: Vec2, color: Rgb) {
        let p = self.transform.apply(pos);
        self.scratch.push(ShapeVertex {
            pos: [p.x, p.y],
            color: color.to_linear(),
        });
    }

    fn end_shape(&mut self) {
        let Some(mode) = self.mode.take() else {
            debug_assert!(false, "end_shape without begin_shape");
            return;
        };
        self.tessellate(mode);
        self.scratch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(batch: &mut ShapeBatch, mode: PrimitiveMode, positions: &[(f32, f32)]) {
        batch.begin_shape(mode);
        for &(x, y) in positions {
            batch.vertex(Vec2::new(x, y), Rgb::white());
        }
        batch.end_shape();
    }

    // ── points / lines ────────────────────────────────────────────────────

    #[test]
    fn points_pass_through() {
        let mut batch = ShapeBatch::default();
        emit(&mut batch, PrimitiveMode::Points, &[(0.0, 0.0), (0.5, 0.5)]);
        assert_eq!(batch.points().len(), 2);
        assert!(batch.lines().is_empty() && batch.triangles().is_empty());
    }

    #[test]
    fn lines_drop_dangling_endpoint() {
        let mut batch = ShapeBatch::default();
        emit(
            &mut batch,
            PrimitiveMode::Lines,
            &[(0.0, 0.0), (1.0, 0.0), (0.5, 0.5)],
        );
        // One complete segment; the third vertex has no partner.
        assert_eq!(batch.lines().len(), 2);
    }

    #[test]
    fn line_strip_links_consecutive_vertices() {
        let mut batch = ShapeBatch::default();
        emit(
            &mut batch,
            PrimitiveMode::LineStrip,
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
        );
        // Two segments, each as an explicit pair.
        assert_eq!(batch.lines().len(), 4);
    }

    // ── line loop ─────────────────────────────────────────────────────────

    #[test]
    fn line_loop_adds_closing_segment() {
        let mut batch = ShapeBatch::default();
        emit(
            &mut batch,
            PrimitiveMode::LineLoop,
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
        );
        // Two strip segments plus the closing one.
        assert_eq!(batch.lines().len(), 6);
        let closing = &batch.lines()[4..6];
        assert_eq!(closing[0].pos, [1.0, 1.0]);
        assert_eq!(closing[1].pos, [0.0, 0.0]);
    }

    #[test]
    fn two_vertex_loop_does_not_double_its_segment() {
        let mut batch = ShapeBatch::default();
        emit(&mut batch, PrimitiveMode::LineLoop, &[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(batch.lines().len(), 2);
    }

    // ── triangles / quads ─────────────────────────────────────────────────

    #[test]
    fn quads_become_two_triangles() {
        let mut batch = ShapeBatch::default();
        emit(
            &mut batch,
            PrimitiveMode::Quads,
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        );
        assert_eq!(batch.triangles().len(), 6);
        // Fan split: (0,1,2) and (0,2,3).
        assert_eq!(batch.triangles()[3].pos, [0.0, 0.0]);
        assert_eq!(batch.triangles()[4].pos, [1.0, 1.0]);
        assert_eq!(batch.triangles()[5].pos, [0.0, 1.0]);
    }

    #[test]
    fn incomplete_quad_group_is_discarded() {
        let mut batch = ShapeBatch::default();
        emit(
            &mut batch,
            PrimitiveMode::Quads,
            &[
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (2.0, 2.0), // partial second quad
            ],
        );
        assert_eq!(batch.triangles().len(), 6);
    }

    #[test]
    fn empty_bracket_produces_nothing() {
        let mut batch = ShapeBatch::default();
        emit(&mut batch, PrimitiveMode::Points, &[]);
        assert!(batch.is_empty());
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn view_transform_is_applied_to_emitted_vertices() {
        let mut transform = ViewTransform::identity();
        transform.translate(0.2, 0.1);

        let mut batch = ShapeBatch::new(transform);
        emit(&mut batch, PrimitiveMode::Points, &[(0.0, 0.0)]);

        let v = batch.points()[0];
        assert!((v.pos[0] - 0.2).abs() < 1e-6);
        assert!((v.pos[1] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn reset_keeps_nothing_from_the_previous_frame() {
        let mut batch = ShapeBatch::default();
        emit(&mut batch, PrimitiveMode::Points, &[(0.0, 0.0)]);
        batch.reset(ViewTransform::identity());
        assert!(batch.is_empty());
    }
}
