//! Player input mapping for the free-kick simulator.
//!
//! Turns pointer drags or a three-press shot meter into `ShotParameters`.
//! Pure state machines: no windowing or event-loop dependency.

pub mod drag;
pub mod meter;

pub use drag::{AimPreview, DragAim};
pub use meter::{MeterPhase, ShotMeter};
