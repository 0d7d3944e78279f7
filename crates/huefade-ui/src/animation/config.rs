use std::time::Duration;

use super::Easing;

/// Value every progress tracker animates towards.
pub const TARGET_PROGRESS: f32 = 1.0;

/// Timing shared by all progress trackers of one transition.
///
/// # Example
/// ```rust,ignore
/// AnimationConfig::default()
///     .duration_ms(800)
///     .easing(Easing::EaseInOut)
///     .accelerated(false)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub easing: Easing,
    /// Forwarded to the renderer as a repaint hint; see `GradientCmd::accelerated`.
    pub accelerated: bool,
}

impl AnimationConfig {
    pub fn duration(mut self, v: Duration) -> Self { self.duration = v; self }
    pub fn duration_ms(mut self, ms: u64) -> Self { self.duration = Duration::from_millis(ms); self }
    pub fn easing(mut self, v: Easing) -> Self { self.easing = v; self }
    pub fn accelerated(mut self, v: bool) -> Self { self.accelerated = v; self }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: Easing::Linear,
            accelerated: true,
        }
    }
}
