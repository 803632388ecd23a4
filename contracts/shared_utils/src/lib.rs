#![no_std]

//! Shared utility library for the circle lending contracts
//!
//! This library provides common functions and patterns used by the
//! lending contracts including:
//! - Math utilities (checked arithmetic, ray fixed point, bps/percent)
//! - Time utilities (timestamps, durations)
//! - Validation predicates
//! - Event emission patterns

pub mod events;
pub mod math;
pub mod time;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use events::Events;
pub use math::*;
pub use time::*;
pub use validation::*;
