//! Running score, streak and per-outcome counters.

use serde::{Deserialize, Serialize};

use freekick_core::enums::Outcome;
use freekick_core::state::ScoreView;
use freekick_core::tuning::ScoringConfig;

/// Running score state tracked by the simulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: i64,
    pub streak: u32,
    pub shots: u32,
    pub goals: u32,
    pub saves: u32,
    pub blocks: u32,
    pub misses: u32,
    pub outs: u32,
}

/// Effect of one outcome on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChange {
    /// Applied delta, after the zero floor.
    pub delta: i64,
    pub streak_reset: bool,
    pub streak_after: u32,
}

impl ScoreState {
    /// Apply an outcome. Goals pay `base + streak_before * bonus` and extend
    /// the streak; everything else costs its penalty and resets the streak.
    pub fn record(&mut self, outcome: Outcome, scoring: &ScoringConfig) -> ScoreChange {
        self.shots += 1;

        if outcome == Outcome::Goal {
            let points = scoring.goal_points + self.streak as i64 * scoring.streak_bonus;
            self.score += points;
            self.streak += 1;
            self.goals += 1;
            return ScoreChange {
                delta: points,
                streak_reset: false,
                streak_after: self.streak,
            };
        }

        let penalty = match outcome {
            Outcome::Saved => {
                self.saves += 1;
                scoring.save_penalty
            }
            Outcome::Blocked => {
                self.blocks += 1;
                scoring.block_penalty
            }
            Outcome::Missed => {
                self.misses += 1;
                scoring.miss_penalty
            }
            Outcome::Out => {
                self.outs += 1;
                scoring.out_penalty
            }
            Outcome::Goal => 0,
        };

        let before = self.score;
        self.score = (self.score - penalty).max(0);
        self.streak = 0;
        ScoreChange {
            delta: self.score - before,
            streak_reset: true,
            streak_after: 0,
        }
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            streak: self.streak,
            shots: self.shots,
            goals: self.goals,
        }
    }
}
