//! Geometry types shared by the paint model, the UI layer and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Gradient endpoints supplied by widgets are unit points (`0..=1` across the
//! view rect) and are mapped into pixel space with [`Rect::point_at`].

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
