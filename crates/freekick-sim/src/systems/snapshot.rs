//! Snapshot system: builds a `SimSnapshot` from simulator state.
//!
//! Read-only apart from taking ownership of the drained events.

use freekick_core::components::{Ball, Defender};
use freekick_core::enums::{Outcome, ShotPhase};
use freekick_core::events::SimEvent;
use freekick_core::projection::{GoalFrame, PitchProjection};
use freekick_core::state::*;
use freekick_core::types::SimTime;
use freekick_keeper::fsm::KeeperState;

use crate::scoring::ScoreState;

/// Everything the snapshot needs, borrowed from the engine.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub phase: ShotPhase,
    pub ball: &'a Ball,
    pub keeper: &'a KeeperState,
    pub wall: &'a [Defender],
    pub score: &'a ScoreState,
    pub projection: &'a PitchProjection,
    pub goal: &'a GoalFrame,
    pub wind: f64,
    pub last_outcome: Option<Outcome>,
    pub reset_in_secs: Option<f64>,
}

/// Build a complete snapshot.
pub fn build_snapshot(input: SnapshotInput<'_>, events: Vec<SimEvent>) -> SimSnapshot {
    SimSnapshot {
        time: input.time,
        phase: input.phase,
        ball: build_ball(input.ball, input.projection),
        keeper: build_keeper(input.keeper, input.goal),
        wall: build_wall(input.wall, input.projection),
        score: input.score.view(),
        wind: input.wind,
        last_outcome: input.last_outcome,
        reset_in_secs: input.reset_in_secs,
        events,
    }
}

fn build_ball(ball: &Ball, projection: &PitchProjection) -> BallView {
    BallView {
        position: ball.position,
        velocity: ball.velocity,
        spin: ball.spin,
        mode: ball.mode,
        flying: ball.flying,
        screen: projection.project_ball(&ball.position),
        shadow: projection.project(ball.position.u, ball.position.v),
    }
}

fn build_keeper(keeper: &KeeperState, goal: &GoalFrame) -> KeeperView {
    KeeperView {
        u: keeper.u,
        target_u: keeper.target_u,
        diving: keeper.diving,
        screen_x: goal.keeper_x(keeper.u),
    }
}

fn build_wall(wall: &[Defender], projection: &PitchProjection) -> Vec<DefenderView> {
    wall.iter()
        .map(|d| DefenderView {
            u: d.u,
            v: d.v,
            screen: projection.project(d.u, d.v),
        })
        .collect()
}
