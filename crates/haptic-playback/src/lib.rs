//! Haptic Playback: pattern playback on devices and held objects.
//!
//! Responsible for routing pattern playback to the hands holding an object,
//! incremental (gradual) playback sessions and loading authored pattern
//! assets.

pub mod application;
pub mod domain;
pub mod library;

pub use application::playback::{play_over_time, play_over_time_on_held};
pub use domain::gradual::GradualPlayback;
pub use domain::hands::{Hands, resolve_hands};
pub use library::PatternLibrary;
