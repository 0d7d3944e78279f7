use super::Vec2;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment test: `[min, max)` on both axes.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.x
            && p.y < self.origin.y + self.size.y
    }

    /// Maps a unit point (`(0, 0)` top-left, `(1, 1)` bottom-right) into this rect.
    ///
    /// Values outside `0..=1` are not clamped; they land outside the rect.
    #[inline]
    pub fn point_at(&self, unit: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * unit.x,
            self.origin.y + self.size.y * unit.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── point_at ──────────────────────────────────────────────────────────

    #[test]
    fn point_at_maps_unit_corners() {
        let rect = r(20.0, 10.0, 200.0, 100.0);
        assert_eq!(rect.point_at(Vec2::new(0.0, 0.0)), Vec2::new(20.0, 10.0));
        assert_eq!(rect.point_at(Vec2::new(1.0, 1.0)), Vec2::new(220.0, 110.0));
        assert_eq!(rect.point_at(Vec2::new(0.5, 0.0)), Vec2::new(120.0, 10.0));
    }

    #[test]
    fn point_at_does_not_clamp() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.point_at(Vec2::new(-1.0, 2.0)), Vec2::new(-10.0, 20.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
