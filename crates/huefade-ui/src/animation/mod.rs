//! Time-based progress animation: easing curves, timing config and the
//! per-stop progress tracker driven by frame deltas.

mod config;
mod easing;
mod tracker;

pub use config::{AnimationConfig, TARGET_PROGRESS};
pub use easing::Easing;
pub use tracker::ProgressTracker;
