//! Shot simulator: the core of the game.
//!
//! `ShotSimulator` owns the ball, wall, keeper and score, runs the systems
//! in a fixed order every step, and produces `SimSnapshot`s. Completely
//! headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use freekick_core::commands::ShotParameters;
use freekick_core::components::{Ball, Defender};
use freekick_core::constants::DT;
use freekick_core::enums::{Difficulty, Outcome, ShotPhase};
use freekick_core::events::{ShotResult, SimEvent};
use freekick_core::projection::{GoalFrame, PitchProjection};
use freekick_core::state::SimSnapshot;
use freekick_core::tuning::{Tuning, WallConfig};
use freekick_core::types::{MouthPoint, PitchPoint, SimTime};
use freekick_keeper::fsm::KeeperState;

use crate::scenario;
use crate::scoring::ScoreState;
use crate::systems;
use crate::systems::snapshot::SnapshotInput;
use crate::world_setup;

/// Safety cap for [`ShotSimulator::play_shot`], in simulated seconds.
const MAX_SHOT_SECS: f64 = 20.0;

/// Configuration for a new simulator.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same simulation.
    pub seed: u64,
    /// Preset used when `tuning` is `None`.
    pub difficulty: Difficulty,
    /// Explicit tuning, overriding the difficulty preset. Expected to be
    /// validated already.
    pub tuning: Option<Tuning>,
    /// Return the ball to the spot automatically after the result delay.
    pub auto_reset: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::default(),
            tuning: None,
            auto_reset: true,
        }
    }
}

/// One free-kick setup: ball, wall, keeper, goal and score.
pub struct ShotSimulator {
    tuning: Tuning,
    projection: PitchProjection,
    goal: GoalFrame,
    ball: Ball,
    keeper: KeeperState,
    wall: Vec<Defender>,
    wind: f64,
    phase: ShotPhase,
    time: SimTime,
    rng: ChaCha8Rng,
    auto_reset: bool,
    reset_timer: f64,
    score: ScoreState,
    last_outcome: Option<Outcome>,
    result: Option<ShotResult>,
    events: Vec<SimEvent>,
}

impl ShotSimulator {
    /// Create a simulator with the ball on the spot and the wall in place.
    pub fn new(config: SimConfig) -> Self {
        let tuning = config
            .tuning
            .unwrap_or_else(|| scenario::build_tuning(config.difficulty));
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let wall = world_setup::build_wall(&tuning.wall, &mut rng);
        let wind = world_setup::roll_wind(tuning.flight.random_wind_max, &mut rng).unwrap_or(0.0);

        Self {
            projection: PitchProjection::new(tuning.pitch.clone()),
            goal: GoalFrame::new(tuning.goal.clone()),
            ball: world_setup::spot_ball(&tuning.launch),
            keeper: KeeperState::default(),
            wall,
            wind,
            phase: ShotPhase::Idle,
            time: SimTime::default(),
            rng,
            auto_reset: config.auto_reset,
            reset_timer: 0.0,
            score: ScoreState::default(),
            last_outcome: None,
            result: None,
            events: Vec::new(),
            tuning,
        }
    }

    /// Return the ball to the kick spot, recenter the keeper and rebuild the wall.
    pub fn reset(&mut self) {
        self.ball = world_setup::spot_ball(&self.tuning.launch);
        self.keeper = KeeperState::default();
        self.wall = world_setup::build_wall(&self.tuning.wall, &mut self.rng);
        if let Some(wind) = world_setup::roll_wind(self.tuning.flight.random_wind_max, &mut self.rng) {
            self.wind = wind;
        }
        self.phase = ShotPhase::Idle;
        self.reset_timer = 0.0;
        self.events.push(SimEvent::BallReset);
        log::debug!(
            "ball reset: {} defenders, wind {:.2}",
            self.wall.len(),
            self.wind
        );
    }

    /// Strike the ball. Ignored (returns false) while a shot is in flight.
    /// A resolved shot still on display is cleared first.
    pub fn launch(&mut self, params: ShotParameters) -> bool {
        match self.phase {
            ShotPhase::Flying => return false,
            ShotPhase::Resolved => self.reset(),
            ShotPhase::Idle => {}
        }

        let params = params.clamped_to(&self.tuning.launch);
        systems::flight::strike(&mut self.ball, &params, &self.tuning.launch);
        systems::keeper::on_launch(
            &mut self.keeper,
            &self.tuning.keeper,
            params.aim.lateral,
            &mut self.rng,
            &mut self.events,
        );
        self.phase = ShotPhase::Flying;
        self.events.push(SimEvent::ShotLaunched {
            mode: params.mode,
            power: params.power,
        });
        log::debug!(
            "shot launched: {:?} power {:.2} aim ({:.2}, {:.2})",
            params.mode,
            params.power,
            params.aim.lateral,
            params.aim.vertical
        );
        true
    }

    /// Advance by `dt` seconds (clamped to `[0, max_step_secs]`).
    pub fn step(&mut self, dt: f64) {
        let dt = if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.tuning.flight.max_step_secs)
        };

        self.time.advance(dt);
        systems::keeper::run(&mut self.keeper, &self.tuning.keeper, dt);

        match self.phase {
            ShotPhase::Idle => {}
            ShotPhase::Resolved => self.count_down(dt),
            ShotPhase::Flying => self.run_flight(dt),
        }
    }

    /// Launch and step at the nominal frame rate until the shot resolves.
    /// Returns `None` if the launch was ignored.
    pub fn play_shot(&mut self, params: ShotParameters) -> Option<ShotResult> {
        if !self.launch(params) {
            return None;
        }
        let mut elapsed = 0.0;
        while self.phase == ShotPhase::Flying && elapsed < MAX_SHOT_SECS {
            self.step(DT);
            elapsed += DT;
        }
        if self.phase != ShotPhase::Resolved {
            return None;
        }
        self.take_result()
    }

    /// Build a snapshot, draining pending events.
    pub fn snapshot(&mut self) -> SimSnapshot {
        let events = std::mem::take(&mut self.events);
        let reset_in_secs =
            (self.phase == ShotPhase::Resolved && self.auto_reset).then_some(self.reset_timer);
        systems::snapshot::build_snapshot(
            SnapshotInput {
                time: self.time,
                phase: self.phase,
                ball: &self.ball,
                keeper: &self.keeper,
                wall: &self.wall,
                score: &self.score,
                projection: &self.projection,
                goal: &self.goal,
                wind: self.wind,
                last_outcome: self.last_outcome,
                reset_in_secs,
            },
            events,
        )
    }

    /// The result of the last resolved shot. Each result is returned once.
    pub fn take_result(&mut self) -> Option<ShotResult> {
        self.result.take()
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn keeper(&self) -> &KeeperState {
        &self.keeper
    }

    pub fn wall(&self) -> &[Defender] {
        &self.wall
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn wind(&self) -> f64 {
        self.wind
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn projection(&self) -> &PitchProjection {
        &self.projection
    }

    pub fn goal(&self) -> &GoalFrame {
        &self.goal
    }

    /// Set the lateral wind. Random wind, when enabled, replaces it on reset.
    pub fn set_wind(&mut self, wind: f64) {
        self.wind = wind;
    }

    /// Change the wall layout. Takes effect on the next reset.
    pub fn set_wall(&mut self, config: WallConfig) {
        self.tuning.wall = config;
    }

    fn run_flight(&mut self, dt: f64) {
        let prev = self.ball.position;
        systems::flight::integrate(
            &mut self.ball,
            &self.tuning.flight,
            self.tuning.goal.crossbar_z,
            self.wind,
            &mut self.rng,
            dt,
        );
        let at = self.ball.position;

        // Wall before goal line before bounds.
        if let Some(contact) =
            systems::wall::check(&prev, &at, &self.wall, &self.tuning.wall)
        {
            systems::wall::deflect(&mut self.ball, &mut self.rng);
            self.events.push(SimEvent::WallHit { u: contact.point.u });
            self.resolve(Outcome::Blocked, contact.point, None);
            return;
        }

        if let Some(crossing) = systems::goal_line::resolve(
            &mut self.ball,
            &prev,
            &self.keeper,
            &self.tuning.keeper,
            &self.projection,
            &self.goal,
            self.tuning.flight.goal_line_v,
        ) {
            self.resolve(crossing.outcome, at, crossing.mouth_point);
            return;
        }

        if systems::bounds::is_out(&self.ball, &self.tuning.flight) {
            self.ball.flying = false;
            self.resolve(Outcome::Out, at, None);
        }
    }

    fn resolve(&mut self, outcome: Outcome, at: PitchPoint, mouth_point: Option<MouthPoint>) {
        let change = self.score.record(outcome, &self.tuning.scoring);

        match outcome {
            Outcome::Goal => self.events.push(SimEvent::GoalScored {
                points: change.delta,
                streak: change.streak_after,
            }),
            Outcome::Saved => self.events.push(SimEvent::ShotSaved),
            Outcome::Missed => self.events.push(SimEvent::ShotMissed),
            Outcome::Out => self.events.push(SimEvent::BallOut),
            Outcome::Blocked => {}
        }

        self.phase = ShotPhase::Resolved;
        self.reset_timer = if outcome == Outcome::Out {
            self.tuning.scoring.out_display_secs
        } else {
            self.tuning.scoring.result_display_secs
        };
        self.last_outcome = Some(outcome);
        self.result = Some(ShotResult {
            outcome,
            score_delta: change.delta,
            streak_reset: change.streak_reset,
            streak_after: change.streak_after,
            final_position: at,
            mouth_point,
        });

        log::info!(
            "{} at u={:.3} v={:.3} z={:.3} (score {}, streak {})",
            outcome.label(),
            at.u,
            at.v,
            at.z,
            self.score.score,
            self.score.streak
        );
    }

    fn count_down(&mut self, dt: f64) {
        if !self.auto_reset {
            return;
        }
        self.reset_timer -= dt;
        if self.reset_timer <= 0.0 {
            self.reset();
        }
    }
}
