use std::time::Duration;

use log::{debug, warn};

use huefade_engine::coords::{Rect, Vec2};
use huefade_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};

use crate::animation::AnimationConfig;
use crate::error::TransitionError;
use crate::painter::Painter;
use crate::transition::{self, GradientState, Phase, StopValue};
use crate::widget::Widget;

/// A linear gradient that eases between color lists instead of snapping.
///
/// `start`, `end`, `locations` and `spread` are handed to the renderer as-is;
/// only `colors` is animated.
///
/// # Example
/// ```rust,ignore
/// let mut view = GradientTransitionView::from_hex(&["#2b32b2", "#1488cc"])?
///     .start(Vec2::new(0.0, 0.0))
///     .end(Vec2::new(1.0, 1.0))
///     .on_transition_end(|| println!("settled"));
///
/// view.set_colors(parse_stops(&["#F37144", "#F0A148"])?)?;
/// ```
pub struct GradientTransitionView {
    state: GradientState,
    animation: AnimationConfig,
    /// Unit point inside the view rect.
    start: Vec2,
    /// Unit point inside the view rect.
    end: Vec2,
    locations: Option<Vec<f32>>,
    spread: SpreadMode,
    on_transition_end: Option<Box<dyn FnMut()>>,
}

impl GradientTransitionView {
    pub fn new(colors: Vec<StopValue>) -> Result<Self, TransitionError> {
        transition::validate_stops(&colors)?;
        Ok(Self {
            state: GradientState::new(colors),
            animation: AnimationConfig::default(),
            start: Vec2::new(0.5, 0.0),
            end: Vec2::new(0.5, 1.0),
            locations: None,
            spread: SpreadMode::Pad,
            on_transition_end: None,
        })
    }

    /// Convenience constructor from stop literals (`"#rrggbb"` or numbers).
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, TransitionError> {
        Self::new(transition::parse_stops(colors)?)
    }

    pub fn animation(mut self, v: AnimationConfig) -> Self { self.animation = v; self }
    pub fn start(mut self, v: Vec2) -> Self { self.start = v; self }
    pub fn end(mut self, v: Vec2) -> Self { self.end = v; self }
    pub fn locations(mut self, v: Vec<f32>) -> Self { self.locations = Some(v); self }
    pub fn spread(mut self, v: SpreadMode) -> Self { self.spread = v; self }
    pub fn on_transition_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_transition_end = Some(Box::new(f));
        self
    }

    /// Replaces the color list, starting a transition when it differs.
    ///
    /// Returns `Ok(true)` when a new transition started. A rejected list
    /// leaves the view exactly as it was.
    pub fn set_colors(&mut self, colors: Vec<StopValue>) -> Result<bool, TransitionError> {
        if let Err(err) = transition::validate_stops(&colors) {
            warn!("gradient update rejected: {err}");
            return Err(err);
        }
        if colors.as_slice() == self.state.current() {
            return Ok(false);
        }
        let state = std::mem::take(&mut self.state);
        self.state = transition::reduce(state, &colors, &self.animation);
        Ok(true)
    }

    /// Timing for transitions started after this call.
    pub fn set_animation(&mut self, v: AnimationConfig) {
        self.animation = v;
    }

    /// Target colors (the `colors` property as last set).
    #[inline]
    pub fn colors(&self) -> &[StopValue] {
        self.state.current()
    }

    /// The per-stop values the renderer receives this frame.
    pub fn interpolated_colors(&self) -> Vec<StopValue> {
        transition::resolve(&self.state)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[inline]
    pub fn state(&self) -> &GradientState {
        &self.state
    }

    /// Builds the pixel-space gradient for `rect` from `colors`.
    ///
    /// `locations` are honored only when they match the stop count, otherwise
    /// stops are spaced evenly.
    fn gradient_for(&self, rect: Rect, colors: Vec<Color>) -> LinearGradient {
        let start = rect.point_at(self.start);
        let end = rect.point_at(self.end);
        match &self.locations {
            Some(locs) if locs.len() == colors.len() => {
                let stops = locs
                    .iter()
                    .zip(colors)
                    .map(|(&t, color)| ColorStop::new(t.clamp(0.0, 1.0), color))
                    .collect();
                LinearGradient::new(start, end, stops, self.spread)
            }
            _ => LinearGradient::evenly_spaced(start, end, colors, self.spread),
        }
    }
}

impl Widget for GradientTransitionView {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let colors: Vec<Color> = self
            .interpolated_colors()
            .into_iter()
            .map(StopValue::to_color)
            .collect();

        match colors.len() {
            0 => {}
            1 => painter.fill_rect(rect, Paint::Solid(colors[0])),
            _ => {
                let gradient = self.gradient_for(rect, colors);
                painter.fill_gradient(rect, gradient, self.animation.accelerated);
            }
        }
    }

    fn tick(&mut self, dt: Duration) -> bool {
        if !self.state.is_transitioning() {
            return false;
        }
        let running = transition::advance(&mut self.state, dt);
        if !running {
            debug!("gradient transition settled on {} stops", self.state.current().len());
            if let Some(f) = &mut self.on_transition_end {
                f();
            }
        }
        true
    }
}
