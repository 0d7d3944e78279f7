use std::time::Duration;

use log::{debug, trace};

use crate::animation::{AnimationConfig, ProgressTracker};

use super::StopValue;

/// Whether a view is at rest or animating towards its current colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Everything one view needs to render an in-flight color transition.
///
/// Invariant: `progress.len() == current.len()`.
#[derive(Debug, Clone, Default)]
pub struct GradientState {
    current: Vec<StopValue>,
    previous: Vec<StopValue>,
    progress: Vec<ProgressTracker>,
}

impl GradientState {
    /// State at rest on `colors`: no transition pending, every tracker settled.
    pub fn new(colors: Vec<StopValue>) -> Self {
        let progress = colors.iter().map(|_| ProgressTracker::settled()).collect();
        Self { previous: colors.clone(), current: colors, progress }
    }

    /// Colors the view is at, or transitioning to.
    #[inline]
    pub fn current(&self) -> &[StopValue] {
        &self.current
    }

    /// Colors in effect when the current transition started.
    #[inline]
    pub fn previous(&self) -> &[StopValue] {
        &self.previous
    }

    #[inline]
    pub fn progress(&self) -> &[ProgressTracker] {
        &self.progress
    }

    pub fn phase(&self) -> Phase {
        if self.progress.iter().any(ProgressTracker::is_running) {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase() == Phase::Transitioning
    }
}

/// Applies a color-list update.
///
/// Equal lists leave the state untouched. Otherwise the current list becomes
/// the baseline, progress restarts from 0 for every stop (even mid-flight)
/// and every tracker starts with the same `config`.
pub fn reduce(state: GradientState, next: &[StopValue], config: &AnimationConfig) -> GradientState {
    if state.current == next {
        return state;
    }

    let GradientState { current, mut progress, .. } = state;

    if progress.len() == next.len() {
        trace!("reusing {} progress trackers", progress.len());
        progress.iter_mut().for_each(ProgressTracker::reset);
    } else {
        trace!("recreating progress trackers: {} -> {}", progress.len(), next.len());
        progress = next.iter().map(|_| ProgressTracker::new(0.0)).collect();
    }

    for tracker in &mut progress {
        tracker.start(config);
    }

    debug!(
        "gradient transition: {} -> {} stops over {:?}",
        current.len(),
        next.len(),
        config.duration
    );

    GradientState { previous: current, current: next.to_vec(), progress }
}

/// Advances every running tracker by `dt`. Returns `true` while any is still running.
pub fn advance(state: &mut GradientState, dt: Duration) -> bool {
    let mut running = false;
    for tracker in &mut state.progress {
        running |= tracker.advance(dt);
    }
    running
}

/// Interpolated value of every stop, in stop order.
///
/// Stop `i` eases from `previous[i]` to `current[i]`; an index past the end of
/// either list uses that list's last stop. With no baseline the stop resolves
/// to its end value.
pub fn resolve(state: &GradientState) -> Vec<StopValue> {
    state
        .progress
        .iter()
        .enumerate()
        .filter_map(|(i, tracker)| {
            let end = stop_at(&state.current, i)?;
            let start = stop_at(&state.previous, i).unwrap_or(end);
            Some(start.interpolate(end, tracker.value()))
        })
        .collect()
}

#[inline]
fn stop_at(stops: &[StopValue], i: usize) -> Option<StopValue> {
    stops.get(i).or_else(|| stops.last()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::parse_stops;
    use huefade_engine::paint::Color;

    fn stops(literals: &[&str]) -> Vec<StopValue> {
        parse_stops(literals).unwrap()
    }

    fn hexes(values: &[StopValue]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    fn linear_500() -> AnimationConfig {
        AnimationConfig::default().duration_ms(500)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_state_is_idle_at_its_colors() {
        let s = GradientState::new(stops(&["#2b32b2", "#1488cc"]));
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.progress().len(), 2);
        assert_eq!(hexes(&resolve(&s)), ["#2b32b2", "#1488cc"]);
    }

    // ── reduce ────────────────────────────────────────────────────────────

    #[test]
    fn equal_colors_do_not_restart() {
        let a = stops(&["#2b32b2", "#1488cc"]);
        let mut s = reduce(GradientState::new(stops(&["#000000", "#000000"])), &a, &linear_500());
        advance(&mut s, ms(400));
        let before = resolve(&s);

        let mut s = reduce(s, &a, &linear_500());
        assert_eq!(resolve(&s), before);
        assert!(advance(&mut s, ms(50)));
        assert!(!advance(&mut s, ms(50)));
    }

    #[test]
    fn same_length_change_interpolates_index_wise() {
        let a = stops(&["#000000", "#ffffff"]);
        let b = stops(&["#ffffff", "#000000"]);
        let mut s = reduce(GradientState::new(a.clone()), &b, &linear_500());

        assert_eq!(s.phase(), Phase::Transitioning);
        assert_eq!(s.previous(), a.as_slice());
        assert_eq!(resolve(&s), a);

        advance(&mut s, ms(500));
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(hexes(&resolve(&s)), ["#ffffff", "#000000"]);
    }

    #[test]
    fn documented_scenario_midpoint() {
        let a = stops(&["#2b32b2", "#1488cc"]);
        let b = stops(&["#F37144", "#F0A148"]);
        let mut s = reduce(GradientState::new(a.clone()), &b, &linear_500());

        assert_eq!(hexes(&resolve(&s)), ["#2b32b2", "#1488cc"]);

        advance(&mut s, ms(250));
        for (i, mid) in resolve(&s).into_iter().enumerate() {
            let (r0, g0, b0, _) = a[i].to_color().to_straight();
            let (r1, g1, b1, _) = b[i].to_color().to_straight();
            let (r, g, bl, alpha) = mid.to_color().to_straight();
            assert!((r - (r0 + r1) / 2.0).abs() < 1e-5);
            assert!((g - (g0 + g1) / 2.0).abs() < 1e-5);
            assert!((bl - (b0 + b1) / 2.0).abs() < 1e-5);
            assert_eq!(alpha, 1.0);
        }

        advance(&mut s, ms(250));
        assert_eq!(hexes(&resolve(&s)), ["#f37144", "#f0a148"]);
    }

    #[test]
    fn shorter_list_drops_trackers_and_stops() {
        let a = stops(&["#000000", "#808080", "#ffffff"]);
        let b = stops(&["#ff0000", "#00ff00"]);
        let s = reduce(GradientState::new(a), &b, &linear_500());

        assert_eq!(s.progress().len(), 2);
        assert!(s.progress().iter().all(|t| t.value() == 0.0 && t.is_running()));
        assert_eq!(hexes(&resolve(&s)), ["#000000", "#808080"]);
    }

    #[test]
    fn longer_list_clamps_start_to_previous_last_stop() {
        let a = stops(&["#000000", "#0000ff"]);
        let b = stops(&["#ff0000", "#00ff00", "#ffffff"]);
        let mut s = reduce(GradientState::new(a), &b, &linear_500());

        assert_eq!(s.progress().len(), 3);
        assert_eq!(hexes(&resolve(&s)), ["#000000", "#0000ff", "#0000ff"]);

        advance(&mut s, ms(500));
        assert_eq!(hexes(&resolve(&s)), ["#ff0000", "#00ff00", "#ffffff"]);
    }

    #[test]
    fn change_mid_flight_restarts_from_current_list() {
        let a = stops(&["#000000"]);
        let b = stops(&["#ffffff"]);
        let c = stops(&["#ff0000"]);

        let mut s = reduce(GradientState::new(a), &b, &linear_500());
        advance(&mut s, ms(250));

        let mut s = reduce(s, &c, &linear_500());
        assert_eq!(s.previous(), b.as_slice());
        assert!(s.progress().iter().all(|t| t.value() == 0.0));
        // Snaps to the old target, not the mid-flight gray.
        assert_eq!(hexes(&resolve(&s)), ["#ffffff"]);

        assert!(advance(&mut s, ms(250)));
        assert!(!advance(&mut s, ms(250)));
        assert_eq!(hexes(&resolve(&s)), ["#ff0000"]);
    }

    #[test]
    fn empty_colors_resolve_to_nothing() {
        let s = reduce(GradientState::new(stops(&["#000000"])), &[], &linear_500());
        assert!(s.progress().is_empty());
        assert!(resolve(&s).is_empty());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn first_colors_after_empty_snap_to_end() {
        let b = stops(&["#123456", "#abcdef"]);
        let s = reduce(GradientState::new(Vec::new()), &b, &linear_500());
        assert_eq!(resolve(&s), b);
    }

    #[test]
    fn overshooting_easing_never_passes_the_end_value() {
        let config = linear_500().easing(crate::animation::Easing::CubicBezier(0.3, 1.8, 0.7, 1.8));
        let mut s = reduce(GradientState::new(vec![StopValue::Number(0.0)]), &[StopValue::Number(1.0)], &config);
        advance(&mut s, ms(150));
        let resolved = resolve(&s);
        let [StopValue::Number(n)] = resolved.as_slice() else { panic!("expected one numeric stop") };
        assert!((0.0..=1.0).contains(n), "resolved {n}");
        assert!(s.progress().iter().all(|t| (0.0..=1.0).contains(&t.value())));
    }

    #[test]
    fn numeric_stops_interpolate_and_kind_change_snaps() {
        let mut s = reduce(
            GradientState::new(vec![StopValue::Number(0.0)]),
            &[StopValue::Number(1.0)],
            &linear_500(),
        );
        advance(&mut s, ms(250));
        assert_eq!(resolve(&s), vec![StopValue::Number(0.5)]);

        let red = StopValue::Color(Color::from_srgb_u8(255, 0, 0, 255));
        let s = reduce(s, &[red], &linear_500());
        assert_eq!(resolve(&s), vec![red]);
    }
}
