//! Croquis engine crate.
//!
//! This crate owns the platform + GPU runtime pieces as well as the scene
//! data model consumed by the drawing application.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod scene;
