//! Haptic Scheduler: per-frame aggregation of vibration requests.
//!
//! Collects single-frame vibration requests and running pattern playbacks
//! from any number of callers, then on every `tick` sums them per device,
//! clamps the result and emits one impulse per device.

pub mod requests;
pub mod scheduler;
pub mod shared;

pub use scheduler::{Scheduler, SchedulerState, TickSummary};
pub use shared::SharedScheduler;
