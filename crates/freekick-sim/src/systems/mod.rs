//! Per-step systems operating on the simulator's entities.
//!
//! Systems are pure functions over borrowed state. They do not own
//! anything; the engine decides the order they run in.

pub mod bounds;
pub mod flight;
pub mod goal_line;
pub mod keeper;
pub mod snapshot;
pub mod wall;
