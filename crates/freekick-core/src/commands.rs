//! Shot input handed from the input layer to the simulator.

use serde::{Deserialize, Serialize};

use crate::enums::ShotMode;
use crate::tuning::LaunchConfig;

/// Aim offset relative to a straight, flat shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AimDirection {
    /// Negative aims left, positive aims right.
    pub lateral: f64,
    /// Loft. Zero is a driven shot, ~1 a chip.
    pub vertical: f64,
}

/// Everything `launch` needs to strike the ball.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotParameters {
    /// Normalized power in [0, 1].
    pub power: f64,
    pub aim: AimDirection,
    pub mode: ShotMode,
}

impl AimDirection {
    pub fn new(lateral: f64, vertical: f64) -> Self {
        Self { lateral, vertical }
    }

    /// Straight at the goal, no loft.
    pub fn straight() -> Self {
        Self::default()
    }
}

impl ShotParameters {
    pub fn new(power: f64, aim: AimDirection, mode: ShotMode) -> Self {
        Self { power, aim, mode }
    }

    /// Clamp every field into the default accepted range. NaN becomes zero.
    pub fn clamped(&self) -> Self {
        self.clamped_to(&LaunchConfig::default())
    }

    /// Clamp against the aim limits of a specific launch tuning.
    pub fn clamped_to(&self, launch: &LaunchConfig) -> Self {
        Self {
            power: clamp_or_zero(self.power, 0.0, 1.0),
            aim: AimDirection {
                lateral: clamp_or_zero(
                    self.aim.lateral,
                    -launch.max_lateral_aim,
                    launch.max_lateral_aim,
                ),
                vertical: clamp_or_zero(
                    self.aim.vertical,
                    launch.min_vertical_aim,
                    launch.max_vertical_aim,
                ),
            },
            mode: self.mode,
        }
    }
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_clamped_limits_all_fields() {
        let params = ShotParameters::new(1.7, AimDirection::new(-2.0, 3.0), ShotMode::Dip).clamped();
        assert_eq!(params.power, 1.0);
        assert_eq!(params.aim.lateral, -MAX_LATERAL_AIM);
        assert_eq!(params.aim.vertical, MAX_VERTICAL_AIM);
        assert_eq!(params.mode, ShotMode::Dip);
    }

    #[test]
    fn test_clamped_replaces_nan() {
        let params = ShotParameters::new(f64::NAN, AimDirection::new(f64::NAN, -0.05), ShotMode::Curl)
            .clamped();
        assert_eq!(params.power, 0.0);
        assert_eq!(params.aim.lateral, 0.0);
        assert_eq!(params.aim.vertical, -0.05);
    }
}
