//! Goal-line resolution: save, goal or miss, in that order.

use freekick_core::components::Ball;
use freekick_core::constants::*;
use freekick_core::enums::Outcome;
use freekick_core::projection::{GoalFrame, PitchProjection};
use freekick_core::types::{MouthPoint, PitchPoint};
use freekick_keeper::fsm::{effective_reach, KeeperState};
use freekick_keeper::profiles::KeeperProfile;

/// Result of a ball reaching the goal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCrossing {
    pub outcome: Outcome,
    /// Set when the ball was inside the mouth.
    pub mouth_point: Option<MouthPoint>,
}

/// Where the step from `prev` to `now` crossed the goal line. A step that
/// started short of the line is interpolated back onto it.
pub fn crossing_point(prev: &PitchPoint, now: &PitchPoint, goal_line_v: f64) -> PitchPoint {
    if prev.v <= goal_line_v && now.v > prev.v {
        let t = (goal_line_v - prev.v) / (now.v - prev.v);
        prev.lerp(now, t)
    } else {
        *now
    }
}

/// Resolve the shot once the ball passes `goal_line_v`, judging it where
/// the step from `prev` crossed the line. A saved ball is pushed back off
/// the keeper. Returns `None` while the ball is short.
pub fn resolve(
    ball: &mut Ball,
    prev: &PitchPoint,
    keeper: &KeeperState,
    profile: &KeeperProfile,
    projection: &PitchProjection,
    goal: &GoalFrame,
    goal_line_v: f64,
) -> Option<LineCrossing> {
    if ball.position.v <= goal_line_v {
        return None;
    }
    ball.flying = false;

    let at = crossing_point(prev, &ball.position, goal_line_v);
    let z = at.z;
    let screen = projection.project(at.u, at.v);
    if !goal.in_mouth(&screen, z) {
        return Some(LineCrossing {
            outcome: Outcome::Missed,
            mouth_point: None,
        });
    }

    let mouth_point = Some(goal.mouth_point(&screen, z));
    let kx = goal.keeper_x(keeper.u);
    let reach = effective_reach(profile, goal.config().w, z);

    if (screen.x - kx).abs() < reach {
        ball.position.u += if screen.x < kx { -SAVE_NUDGE_U } else { SAVE_NUDGE_U };
        ball.position.v -= SAVE_PUSHBACK_V;
        ball.velocity.du *= SAVE_LATERAL_DAMPING;
        ball.velocity.dv = SAVE_REBOUND_DV;
        return Some(LineCrossing {
            outcome: Outcome::Saved,
            mouth_point,
        });
    }

    Some(LineCrossing {
        outcome: Outcome::Goal,
        mouth_point,
    })
}
