use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Folds an unbounded axis position into `[0, 1]`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t - t.floor(),
            SpreadMode::Reflect => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected sorted by `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Builds stops from `colors`, spaced evenly over `[0, 1]`.
    pub fn evenly_spaced(
        start: Vec2,
        end: Vec2,
        colors: impl IntoIterator<Item = Color>,
        spread: SpreadMode,
    ) -> Self {
        let colors: Vec<Color> = colors.into_iter().collect();
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| ColorStop::new(i as f32 / last, color))
            .collect();
        Self::new(start, end, stops, spread)
    }

    /// Evaluates the gradient at `point`.
    ///
    /// The point is projected onto the `start → end` axis, folded by `spread`
    /// and interpolated between the surrounding stops. A degenerate axis
    /// evaluates as position 0. No stops yields transparent.
    pub fn sample(&self, point: Vec2) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::transparent();
        };

        let axis = self.end - self.start;
        let len2 = axis.length_squared();
        let raw = if len2 <= f32::EPSILON { 0.0 } else { (point - self.start).dot(axis) / len2 };
        let t = self.spread.apply(raw);

        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                let f = if span <= f32::EPSILON { 1.0 } else { (t - a.t) / span };
                return a.color.lerp(b.color, f);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white() -> LinearGradient {
        LinearGradient::evenly_spaced(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            [Color::gray(0.0), Color::gray(1.0)],
            SpreadMode::Pad,
        )
    }

    #[test]
    fn evenly_spaced_positions() {
        let g = LinearGradient::evenly_spaced(
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            [Color::gray(0.0), Color::gray(0.5), Color::gray(1.0)],
            SpreadMode::Pad,
        );
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn single_stop_sits_at_zero_and_fills_the_axis() {
        let g = LinearGradient::evenly_spaced(Vec2::zero(), Vec2::new(1.0, 0.0), [Color::gray(0.3)], SpreadMode::Pad);
        assert_eq!(g.stops[0].t, 0.0);
        assert_eq!(g.sample(Vec2::new(0.8, 0.0)), Color::gray(0.3));
    }

    #[test]
    fn sample_interpolates_along_axis() {
        let g = black_to_white();
        assert_eq!(g.sample(Vec2::new(0.0, 0.0)).to_srgb_u8(), [0, 0, 0, 255]);
        assert_eq!(g.sample(Vec2::new(50.0, 100.0)).to_srgb_u8(), [255, 255, 255, 255]);
        let mid = g.sample(Vec2::new(7.0, 50.0)).to_srgb_u8();
        assert!(mid[0] == 127 || mid[0] == 128);
    }

    #[test]
    fn pad_clamps_outside_axis() {
        let g = black_to_white();
        assert_eq!(g.sample(Vec2::new(0.0, -40.0)).to_srgb_u8(), [0, 0, 0, 255]);
        assert_eq!(g.sample(Vec2::new(0.0, 400.0)).to_srgb_u8(), [255, 255, 255, 255]);
    }

    #[test]
    fn spread_modes_fold_positions() {
        assert_eq!(SpreadMode::Repeat.apply(1.25), 0.25);
        assert_eq!(SpreadMode::Reflect.apply(1.25), 0.75);
        assert_eq!(SpreadMode::Reflect.apply(-0.25), 0.25);
        assert_eq!(SpreadMode::Pad.apply(-3.0), 0.0);
    }

    #[test]
    fn empty_gradient_samples_transparent() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0), Vec::new(), SpreadMode::Pad);
        assert_eq!(g.sample(Vec2::zero()), Color::transparent());
    }
}
