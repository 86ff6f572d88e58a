//! Route modules organized by resource.

pub mod devices;
pub mod health;
pub mod patterns;
pub mod vibrations;
