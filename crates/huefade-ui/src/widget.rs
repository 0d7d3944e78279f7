use std::time::Duration;

use huefade_engine::coords::Rect;

use crate::painter::Painter;

/// The core trait every UI component implements.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use huefade_ui::prelude::*;
///
/// pub struct Swatch { color: Color }
///
/// impl Widget for Swatch {
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_rect(rect, self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Advance time-based state by `dt`.
    ///
    /// Return `true` when the output changed and another frame should be
    /// painted. The default implementation is static.
    fn tick(&mut self, _dt: Duration) -> bool {
        false
    }
}
