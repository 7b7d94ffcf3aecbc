//! Scene data model.
//!
//! Responsibilities:
//! - own the drawing as an ordered tree: Scene → Primitives → Vertices
//! - keep insertion order deterministic (front = most recently added)
//! - expose the append-only mutation surface used by input handling

mod list;
mod primitive;
mod vertex;

pub use list::Scene;
pub use primitive::{Primitive, PrimitiveMode};
pub use vertex::Vertex;
