//! Goalkeeper AI for the free-kick simulator.
//!
//! Implements the dive prediction, per-frame easing state machine,
//! and difficulty-driven keeper profiles.

pub mod fsm;
pub mod profiles;

pub use freekick_core as core;

#[cfg(test)]
mod tests;
