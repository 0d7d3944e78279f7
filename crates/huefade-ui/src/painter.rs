use huefade_engine::coords::Rect;
use huefade_engine::paint::{LinearGradient, Paint};
use huefade_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and hands out increasing z-indices so later
/// calls paint on top of earlier ones.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Axis-aligned rectangle with any paint source.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    /// Rectangle filled with a gradient in pixel space.
    ///
    /// `accelerated` is forwarded untouched; see `GradientCmd`.
    pub fn fill_gradient(&mut self, rect: Rect, gradient: LinearGradient, accelerated: bool) {
        let z = self.next_z();
        self.draw_list.push_gradient(z, rect, gradient, accelerated);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
