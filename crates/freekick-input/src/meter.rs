//! Button-driven shot meter: press once to start the power sweep, again
//! to lock power and start the aim sweep, a third time to shoot.

use serde::{Deserialize, Serialize};

use freekick_core::commands::{AimDirection, ShotParameters};
use freekick_core::enums::ShotMode;

/// Power gauge sweep speed (gauge units per second).
pub const POWER_SWEEP_RATE: f64 = 1.35;

/// Aim gauge sweep speed.
pub const AIM_SWEEP_RATE: f64 = 1.15;

/// Lateral aim range covered by the aim sweep (both directions).
pub const AIM_SWEEP_LATERAL: f64 = 0.30;

/// Loft applied to every meter shot.
pub const METER_LOFT: f64 = 0.35;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterPhase {
    #[default]
    Idle,
    Power,
    Aim,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotMeter {
    phase: MeterPhase,
    sweep: f64,
    power: f64,
    lateral: f64,
}

impl ShotMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MeterPhase {
        self.phase
    }

    /// Current (or locked) power.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Current lateral aim.
    pub fn lateral(&self) -> f64 {
        self.lateral
    }

    /// Handle a button press. Returns the shot on the third press.
    pub fn advance(&mut self, mode: ShotMode) -> Option<ShotParameters> {
        match self.phase {
            MeterPhase::Idle => {
                self.phase = MeterPhase::Power;
                self.sweep = 0.0;
                self.power = 0.0;
                None
            }
            MeterPhase::Power => {
                self.phase = MeterPhase::Aim;
                self.sweep = 0.0;
                self.lateral = -AIM_SWEEP_LATERAL;
                None
            }
            MeterPhase::Aim => {
                self.phase = MeterPhase::Idle;
                Some(ShotParameters {
                    power: self.power,
                    aim: AimDirection::new(self.lateral, METER_LOFT),
                    mode,
                })
            }
        }
    }

    /// Sweep the active gauge. Call every frame while the ball is at rest.
    pub fn update(&mut self, dt: f64) {
        match self.phase {
            MeterPhase::Idle => {}
            MeterPhase::Power => {
                self.sweep += dt * POWER_SWEEP_RATE;
                self.power = triangle(self.sweep);
            }
            MeterPhase::Aim => {
                self.sweep += dt * AIM_SWEEP_RATE;
                self.lateral = (triangle(self.sweep) * 2.0 - 1.0) * AIM_SWEEP_LATERAL;
            }
        }
    }
}

/// Triangle wave over [0, 1] with period 2.
fn triangle(t: f64) -> f64 {
    let x = t.rem_euclid(2.0);
    if x < 1.0 {
        x
    } else {
        2.0 - x
    }
}
