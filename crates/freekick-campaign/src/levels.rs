//! Level definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use freekick_core::types::MouthPoint;

use crate::progress::Progress;

/// Circular target inside the goal mouth, in mouth coordinates
/// (x left to right, y ground to crossbar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetZone {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl TargetZone {
    pub fn contains(&self, point: &MouthPoint) -> bool {
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// One level: a shot budget, a fixed wind and a target to hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub id: u32,
    pub name: String,
    pub shots: u32,
    /// Lateral wind applied to every shot.
    pub wind: f64,
    pub target: TargetZone,
}

#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("no level with id {0}")]
    Unknown(u32),

    #[error("level {id} is locked (unlocked up to {unlocked})")]
    Locked { id: u32, unlocked: u32 },
}

/// The built-in level list, in play order.
pub fn default_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            id: 1,
            name: "Starter".into(),
            shots: 5,
            wind: 0.0,
            target: TargetZone {
                x: 0.78,
                y: 0.36,
                r: 0.075,
            },
        },
        LevelDef {
            id: 2,
            name: "Pressure".into(),
            shots: 4,
            wind: 0.18,
            target: TargetZone {
                x: 0.72,
                y: 0.30,
                r: 0.060,
            },
        },
        LevelDef {
            id: 3,
            name: "Top Bins".into(),
            shots: 3,
            wind: -0.25,
            target: TargetZone {
                x: 0.12,
                y: 0.80,
                r: 0.055,
            },
        },
    ]
}

/// Look up a level the player is allowed to play.
pub fn select_level<'a>(
    levels: &'a [LevelDef],
    progress: &Progress,
    id: u32,
) -> Result<&'a LevelDef, LevelError> {
    let level = levels
        .iter()
        .find(|l| l.id == id)
        .ok_or(LevelError::Unknown(id))?;
    if !progress.is_unlocked(id) {
        return Err(LevelError::Locked {
            id,
            unlocked: progress.set_pieces.unlocked_level,
        });
    }
    Ok(level)
}
