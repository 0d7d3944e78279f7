//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to any runtime.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame and hand `FrameTime::dt` to the UI

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
