//! Events emitted by the simulator for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{MouthPoint, PitchPoint};

/// One-shot notifications, drained into the next snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Ball struck.
    ShotLaunched { mode: ShotMode, power: f64 },
    /// Keeper committed to a dive.
    KeeperDive { target_u: f64 },
    /// Ball hit a defender in the wall.
    WallHit { u: f64 },
    /// Ball crossed the line inside the mouth, past the keeper.
    GoalScored { points: i64, streak: u32 },
    /// Keeper got a hand to it.
    ShotSaved,
    /// Ball reached the goal line outside the mouth.
    ShotMissed,
    /// Ball left the pitch or stopped short.
    BallOut,
    /// Ball returned to the kick spot.
    BallReset,
}

/// Terminal result of one shot. Exactly one is produced per launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    pub outcome: Outcome,
    /// Score change actually applied (after the score floor).
    pub score_delta: i64,
    /// True for every outcome except a goal.
    pub streak_reset: bool,
    pub streak_after: u32,
    /// Ball position at the moment of resolution, before any deflection.
    pub final_position: PitchPoint,
    /// Where the ball crossed the mouth, for goal-line outcomes inside it.
    pub mouth_point: Option<MouthPoint>,
}
