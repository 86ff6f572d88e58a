//! Application layer for pattern playback.

pub mod playback;
