//! Slingshot-style drag aiming.
//!
//! The pull vector runs from the release point back to the ball: pulling
//! left aims right, pulling toward the goal adds loft.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use freekick_core::commands::{AimDirection, ShotParameters};
use freekick_core::constants::{MAX_LATERAL_AIM, MAX_VERTICAL_AIM, MIN_VERTICAL_AIM};
use freekick_core::enums::ShotMode;

/// Press must land this close to the ball (screen units).
pub const HIT_RADIUS: f64 = 30.0;

/// Releases shorter than this are treated as a cancelled drag.
pub const MIN_DRAG: f64 = 10.0;

/// Pull length for full power.
pub const FULL_POWER_DRAG: f64 = 240.0;

/// Horizontal pull per unit of lateral aim.
pub const LATERAL_DRAG_SCALE: f64 = 540.0;

/// Vertical pull per unit of loft.
pub const VERTICAL_DRAG_SCALE: f64 = 430.0;

/// Horizontal pull for a full curve preview.
pub const CURVE_DRAG_SCALE: f64 = 240.0;

/// Live HUD feedback while dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AimPreview {
    pub power: f64,
    /// Signed curve in [-1, 1].
    pub curve: f64,
}

/// Drag-to-shoot state machine.
#[derive(Debug, Clone, Default)]
pub struct DragAim {
    /// Ball screen position when the drag began.
    anchor: Option<DVec2>,
    current: DVec2,
}

impl DragAim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin aiming if the press hits a ball at rest. Returns whether aiming started.
    pub fn press(&mut self, pointer: DVec2, ball_screen: DVec2, ball_flying: bool) -> bool {
        if ball_flying || pointer.distance(ball_screen) > HIT_RADIUS {
            return false;
        }
        self.anchor = Some(ball_screen);
        self.current = pointer;
        true
    }

    /// Track the pointer. `None` when no drag is active.
    pub fn drag(&mut self, pointer: DVec2) -> Option<AimPreview> {
        let anchor = self.anchor?;
        self.current = pointer;
        let pull = anchor - pointer;
        Some(AimPreview {
            power: power_for(pull),
            curve: (pull.x / CURVE_DRAG_SCALE).clamp(-1.0, 1.0),
        })
    }

    /// Finish the drag. Returns the shot, or `None` if nothing was aimed
    /// or the pull was too short.
    pub fn release(&mut self, pointer: DVec2, mode: ShotMode) -> Option<ShotParameters> {
        let anchor = self.anchor.take()?;
        let pull = anchor - pointer;
        if pull.length() < MIN_DRAG {
            return None;
        }
        Some(ShotParameters {
            power: power_for(pull),
            aim: AimDirection {
                lateral: (pull.x / LATERAL_DRAG_SCALE).clamp(-MAX_LATERAL_AIM, MAX_LATERAL_AIM),
                vertical: (pull.y / VERTICAL_DRAG_SCALE).clamp(MIN_VERTICAL_AIM, MAX_VERTICAL_AIM),
            },
            mode,
        })
    }

    /// Abandon the current drag.
    pub fn cancel(&mut self) {
        self.anchor = None;
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Last pointer position seen, for drawing the aim line.
    pub fn pointer(&self) -> Option<DVec2> {
        self.anchor.map(|_| self.current)
    }
}

fn power_for(pull: DVec2) -> f64 {
    (pull.length() / FULL_POWER_DRAG).clamp(0.0, 1.0)
}
