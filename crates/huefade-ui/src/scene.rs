use std::time::Duration;

use huefade_engine::coords::{Rect, Vec2};
use huefade_engine::scene::DrawList;

use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns the draw list across frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut clock = FrameClock::new();
/// loop {
///     let ft = clock.tick();
///     let draw_list = ui.frame(&mut view, viewport, ft.dt);
///     renderer.render(draw_list);
///     if !ui.needs_redraw() { /* wait for the next input */ }
/// }
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    draw_list: DrawList,
    needs_redraw: bool,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks `root` by `dt`, then paints it over the whole viewport.
    pub fn frame(&mut self, root: &mut dyn Widget, viewport: Vec2, dt: Duration) -> &DrawList {
        self.needs_redraw = root.tick(dt);
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }
        &self.draw_list
    }

    /// Whether the last [`frame`](Self::frame) reported ongoing animation.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Draw list populated by the most recent frame.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }
}
