use std::time::Duration;

use super::{AnimationConfig, Easing, TARGET_PROGRESS};

#[derive(Debug, Clone, Copy)]
struct Timing {
    from: f32,
    duration: Duration,
    easing: Easing,
}

/// A scalar in `[0, 1]` that eases towards [`TARGET_PROGRESS`] over a fixed duration.
///
/// Trackers are advanced explicitly with frame deltas; nothing runs in the
/// background. A tracker is *running* between [`start`](Self::start) and the
/// [`advance`](Self::advance) call that reaches the end of its duration.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    value: f32,
    elapsed: Duration,
    timing: Option<Timing>,
}

impl ProgressTracker {
    /// A tracker at rest holding `value`.
    pub fn new(value: f32) -> Self {
        Self { value, elapsed: Duration::ZERO, timing: None }
    }

    /// A tracker at rest at the target.
    pub fn settled() -> Self {
        Self::new(TARGET_PROGRESS)
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.timing.is_some()
    }

    /// Stops any running timeline and snaps the value back to 0.
    pub fn reset(&mut self) {
        *self = Self::new(0.0);
    }

    /// Begins easing from the current value to the target.
    pub fn start(&mut self, config: &AnimationConfig) {
        self.elapsed = Duration::ZERO;
        self.timing = Some(Timing {
            from: self.value,
            duration: config.duration,
            easing: config.easing,
        });
    }

    /// Jumps to the target and stops.
    pub fn settle(&mut self) {
        *self = Self::settled();
    }

    /// Advances the timeline by `dt`. Returns `true` while still running.
    ///
    /// A zero duration completes on the first advance.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(timing) = self.timing else {
            return false;
        };

        self.elapsed = self.elapsed.saturating_add(dt);
        let fraction = if timing.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / timing.duration.as_secs_f32()).min(1.0)
        };

        if fraction >= 1.0 {
            self.settle();
            return false;
        }

        let eased = timing.easing.transform(fraction);
        self.value = timing.from + (TARGET_PROGRESS - timing.from) * eased;
        true
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::settled()
    }
}
