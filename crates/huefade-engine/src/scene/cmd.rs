use crate::coords::Rect;
use crate::paint::{LinearGradient, Paint};

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Gradient(GradientCmd),
}

/// Rectangle filled with any paint source.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

/// Rectangle filled with a linear gradient whose stops may change every frame.
///
/// `accelerated` is a hint from the producer: when set, the renderer may keep
/// the previous frame's output and only repaint when the gradient changed.
/// When clear, the renderer repaints the rect on every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCmd {
    pub rect: Rect,
    pub gradient: LinearGradient,
    pub accelerated: bool,
}
