//! Color interpolation engine.
//!
//! Split in two halves so the algorithm stays testable without a frame loop:
//! - [`reduce`]: pure `(state, next colors, config) -> state` on every update
//! - [`advance`] / [`resolve`]: the per-frame effect and the per-stop colors
//!   it yields

mod state;
mod stop;

pub use state::{advance, reduce, resolve, GradientState, Phase};
pub use stop::{parse_stops, validate_stops, StopKind, StopValue};
