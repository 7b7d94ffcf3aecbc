//! Rendering subsystem.
//!
//! Split in two layers:
//! - [`PaintSurface`] + [`render_scene`]: the abstract immediate-mode stream
//!   (begin shape / vertex / end shape) the scene walk emits into.
//! - [`ShapeBatch`] + [`ShapeRenderer`]: the GPU implementation. The batch
//!   applies the view transform and tessellates legacy draw modes into the
//!   point/line/triangle topologies wgpu supports, the renderer uploads and
//!   draws via one pipeline per topology.

mod batch;
mod ctx;
mod shape;
mod surface;

pub use batch::{ShapeBatch, ShapeVertex};
pub use ctx::{RenderCtx, RenderTarget};
pub use shape::ShapeRenderer;
pub use surface::{render_scene, PaintSurface};
