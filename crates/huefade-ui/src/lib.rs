//! Huefade UI — a linear gradient view that animates color changes.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use huefade_ui::prelude::*;
//!
//! let mut view = GradientTransitionView::from_hex(&["#2b32b2", "#1488cc"])?
//!     .animation(AnimationConfig::default().duration_ms(500));
//! let mut scene = UiScene::new();
//!
//! // Later, e.g. on a button press:
//! view.set_colors(parse_stops(&["#F37144", "#F0A148"])?)?;
//!
//! // Once per frame:
//! let draw_list = scene.frame(&mut view, viewport, frame_time.dt);
//! renderer.render(draw_list);
//! ```
//!
//! The interpolation itself is a pure reducer in [`transition`]; the widget
//! only owns the state and forwards frame deltas to it.

pub mod animation;
pub mod error;
pub mod painter;
pub mod scene;
pub mod transition;
pub mod widget;
pub mod widgets;

/// Everything needed to build and drive a gradient transition.
pub mod prelude {
    pub use crate::animation::{AnimationConfig, Easing, ProgressTracker};
    pub use crate::error::TransitionError;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::transition::{parse_stops, GradientState, Phase, StopKind, StopValue};
    pub use crate::widget::Widget;
    pub use crate::widgets::gradient_transition::GradientTransitionView;

    pub use huefade_engine::coords::{Rect, Vec2};
    pub use huefade_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
}
