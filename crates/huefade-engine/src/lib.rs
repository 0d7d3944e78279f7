//! Huefade engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! the paint model, geometry, frame timing, the draw stream and logger setup.
//! Rasterization lives with whoever consumes the `DrawList`.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
