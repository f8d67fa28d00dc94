//! Level progression for the free-kick game.
//!
//! Level definitions, per-level shot sessions, and the persisted
//! unlocked-level progress file.

pub mod levels;
pub mod progress;
pub mod session;

pub use levels::{default_levels, select_level, LevelDef, LevelError, TargetZone};
pub use progress::{Progress, ProgressError};
pub use session::{LevelSession, SessionStatus};

#[cfg(test)]
mod tests;
