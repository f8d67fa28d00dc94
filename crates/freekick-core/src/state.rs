//! Simulator snapshot: the complete visible state handed to a renderer each step.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{PitchPoint, PitchVelocity, ScreenPoint, SimTime};

/// Complete simulator state after a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: ShotPhase,
    pub ball: BallView,
    pub keeper: KeeperView,
    pub wall: Vec<DefenderView>,
    pub score: ScoreView,
    /// Lateral wind for the current shot.
    pub wind: f64,
    pub last_outcome: Option<Outcome>,
    /// Seconds until the ball returns to the spot (only while Resolved).
    pub reset_in_secs: Option<f64>,
    pub events: Vec<SimEvent>,
}

/// Ball position, in pitch space and on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub position: PitchPoint,
    pub velocity: PitchVelocity,
    pub spin: f64,
    pub mode: ShotMode,
    pub flying: bool,
    /// Projected position including the height lift.
    pub screen: ScreenPoint,
    /// Projected shadow (height ignored).
    pub shadow: ScreenPoint,
}

/// Goalkeeper position for drawing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeeperView {
    /// Lateral position as a fraction of the goal mouth.
    pub u: f64,
    pub target_u: f64,
    pub diving: bool,
    /// Screen x of the keeper's center.
    pub screen_x: f64,
}

/// One defender in the wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenderView {
    pub u: f64,
    pub v: f64,
    pub screen: ScreenPoint,
}

/// Running totals for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: i64,
    pub streak: u32,
    pub shots: u32,
    pub goals: u32,
}
