//! Shared test doubles and fixtures for the haptic crates.

mod clock;
mod fixtures;
mod held;
mod scheduler;
mod sink;

pub use clock::SteppedClock;
pub use fixtures::{constant_pattern, triangle_curve, triangle_pattern};
pub use held::MockHeldObject;
pub use scheduler::{RecordedPattern, RecordingScheduler};
pub use sink::RecordingSink;
