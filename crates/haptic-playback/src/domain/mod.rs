//! Domain layer for pattern playback.

pub mod gradual;
pub mod hands;
