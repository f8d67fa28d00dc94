//! Core types and definitions for the free-kick simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! pitch types, shot parameters, tuning, projection, events, snapshots
//! and constants. It has no dependency on any runtime or rendering layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod projection;
pub mod state;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
