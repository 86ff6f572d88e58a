//! Haptic Core: shared haptic abstractions.
//!
//! This crate defines the curve evaluator, the pattern definition and the
//! seams every other crate depends on: the frame clock, the device output
//! sink, the held-object contract and the scheduler trait. It contains no
//! scheduling state.

pub mod clock;
pub mod curve;
pub mod device;
pub mod error;
pub mod held;
pub mod pattern;
pub mod scheduler;
