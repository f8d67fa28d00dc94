//! Shot simulation for the free-kick game.
//!
//! Owns the ball, wall and keeper, advances one shot per `step(dt)`,
//! and produces `SimSnapshot`s for the renderer. Headless and
//! deterministic for a given seed.

pub mod engine;
pub mod scenario;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::{ShotSimulator, SimConfig};
pub use freekick_core as core;
