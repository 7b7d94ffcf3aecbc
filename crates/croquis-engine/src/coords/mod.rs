//! Coordinate and color types shared across the scene model and renderers.
//!
//! Canonical CPU space:
//! - World units, origin at the center of the view
//! - x ∈ [-1, 1] left to right, y ∈ [-1, 1] bottom to top
//!
//! The view transform is applied on the CPU before upload; world coordinates
//! map directly to NDC in the shader.

mod color;
mod transform;
mod vec2;
mod viewport;

pub use color::Rgb;
pub use transform::ViewTransform;
pub use vec2::Vec2;
pub use viewport::Viewport;
