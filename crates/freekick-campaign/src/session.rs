//! A single attempt at a level.

use serde::{Deserialize, Serialize};

use freekick_core::enums::Outcome;
use freekick_core::events::ShotResult;

use crate::levels::{LevelDef, TargetZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    /// A goal landed in the target.
    Completed,
    /// Shots ran out first.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSession {
    level_id: u32,
    shots_left: u32,
    wind: f64,
    target: TargetZone,
    status: SessionStatus,
}

impl LevelSession {
    pub fn start(level: &LevelDef) -> Self {
        Self {
            level_id: level.id,
            shots_left: level.shots,
            wind: level.wind,
            target: level.target,
            status: SessionStatus::InProgress,
        }
    }

    /// Count one shot. Results arriving after the session ended are ignored.
    pub fn record(&mut self, result: &ShotResult) -> SessionStatus {
        if self.status != SessionStatus::InProgress {
            return self.status;
        }
        self.shots_left = self.shots_left.saturating_sub(1);

        let on_target = result.outcome == Outcome::Goal
            && result
                .mouth_point
                .is_some_and(|p| self.target.contains(&p));

        if on_target {
            self.status = SessionStatus::Completed;
            log::info!("level {} completed", self.level_id);
        } else if self.shots_left == 0 {
            self.status = SessionStatus::Failed;
            log::info!("level {} failed", self.level_id);
        }
        self.status
    }

    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    pub fn shots_left(&self) -> u32 {
        self.shots_left
    }

    pub fn wind(&self) -> f64 {
        self.wind
    }

    pub fn target(&self) -> &TargetZone {
        &self.target
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}
