//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha) and hex literals
//! - paint sources (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod error;
pub mod gradient;

pub use color::Color;
pub use error::ColorParseError;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
