//! Runtime tuning for the shot simulator.
//!
//! Every struct deserializes with `#[serde(default)]`, so a tuning file
//! only needs the fields it overrides. Defaults are the Classic profile.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors from loading or validating a tuning file.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Trapezoidal pitch projection parameters (screen units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchConfig {
    pub top_y: f64,
    pub bot_y: f64,
    pub top_w: f64,
    pub bot_w: f64,
    pub cx: f64,
    pub ball_lift: f64,
}

/// Goal frame. The rect is in screen units, the crossbar in height units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    pub cx: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub post: f64,
    pub mouth_pad: f64,
    pub crossbar_z: f64,
}

/// Defensive wall layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub depth_v: f64,
    /// Zero disables the wall.
    pub count: u32,
    pub spread: f64,
    pub center_u: f64,
    pub radius: f64,
    pub height_z: f64,
    pub band: f64,
    /// Max random shift of the wall center, re-rolled on every reset.
    pub jitter: f64,
}

/// Goalkeeper behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperConfig {
    /// Save radius as a fraction of goal width.
    pub reach: f64,
    pub react_delay_secs: f64,
    pub speed: f64,
    pub dive_duration_secs: f64,
    pub idle_return_rate: f64,
    pub prediction_factor: f64,
    pub prediction_noise: f64,
    pub min_target_u: f64,
    pub max_target_u: f64,
    pub high_ball_z: f64,
    pub high_ball_reach: f64,
}

/// Mapping from shot parameters to initial ball state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub kick_spot_u: f64,
    pub kick_spot_v: f64,
    pub strength_baseline: f64,
    pub strength_gain: f64,
    pub lateral_gain: f64,
    pub forward_base: f64,
    pub forward_loft_gain: f64,
    pub max_lateral_aim: f64,
    pub min_vertical_aim: f64,
    pub max_vertical_aim: f64,
    pub loft_gain: f64,
    pub loft_base: f64,
    pub loft_power_base: f64,
    pub loft_power_gain: f64,
    pub min_launch_vz: f64,
    pub max_launch_vz: f64,
    pub spin_per_lateral: f64,
    pub spin_base: f64,
    pub spin_gain: f64,
}

/// Per-step flight forces and resolution thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub curve_base: f64,
    pub curve_depth_gain: f64,
    pub drag_u: f64,
    pub drag_v: f64,
    pub gravity_z: f64,
    pub ground_bounce: f64,
    pub max_height_factor: f64,
    pub forward_bleed: f64,
    pub knuckle_activation_v: f64,
    pub wobble_slow_gain: f64,
    pub wobble_fast_gain: f64,
    pub wobble_freq_base: f64,
    pub wobble_freq_depth_gain: f64,
    pub wobble_jitter: f64,
    pub phase_rate: f64,
    pub wind_gain: f64,
    /// When positive, a fresh wind in [-max, max] is rolled on every reset.
    pub random_wind_max: f64,
    pub goal_line_v: f64,
    pub min_u: f64,
    pub max_u: f64,
    pub min_v: f64,
    pub max_v: f64,
    pub max_step_secs: f64,
}

/// Points and result display timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub goal_points: i64,
    pub streak_bonus: i64,
    pub save_penalty: i64,
    pub miss_penalty: i64,
    pub out_penalty: i64,
    pub block_penalty: i64,
    pub result_display_secs: f64,
    pub out_display_secs: f64,
}

/// Complete simulator tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pitch: PitchConfig,
    pub goal: GoalConfig,
    pub wall: WallConfig,
    pub keeper: KeeperConfig,
    pub launch: LaunchConfig,
    pub flight: FlightConfig,
    pub scoring: ScoringConfig,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            top_y: PITCH_TOP_Y,
            bot_y: PITCH_BOT_Y,
            top_w: PITCH_TOP_W,
            bot_w: PITCH_BOT_W,
            cx: PITCH_CENTER_X,
            ball_lift: BALL_LIFT,
        }
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            cx: GOAL_CENTER_X,
            y: GOAL_TOP_Y,
            w: GOAL_WIDTH,
            h: GOAL_HEIGHT,
            post: GOAL_POST,
            mouth_pad: GOAL_MOUTH_PAD,
            crossbar_z: CROSSBAR_Z,
        }
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            depth_v: WALL_DEPTH_V,
            count: WALL_COUNT,
            spread: WALL_SPREAD,
            center_u: WALL_CENTER_U,
            radius: WALL_RADIUS,
            height_z: WALL_HEIGHT_Z,
            band: WALL_BAND,
            jitter: 0.0,
        }
    }
}

impl WallConfig {
    /// A configuration with no defenders.
    pub fn none() -> Self {
        Self {
            count: 0,
            ..Self::default()
        }
    }
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            reach: KEEPER_REACH,
            react_delay_secs: KEEPER_REACT_DELAY_SECS,
            speed: KEEPER_SPEED,
            dive_duration_secs: KEEPER_DIVE_DURATION_SECS,
            idle_return_rate: KEEPER_IDLE_RETURN_RATE,
            prediction_factor: KEEPER_PREDICTION_FACTOR,
            prediction_noise: KEEPER_PREDICTION_NOISE,
            min_target_u: KEEPER_MIN_TARGET_U,
            max_target_u: KEEPER_MAX_TARGET_U,
            high_ball_z: KEEPER_HIGH_BALL_Z,
            high_ball_reach: KEEPER_HIGH_BALL_REACH,
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            kick_spot_u: KICK_SPOT_U,
            kick_spot_v: KICK_SPOT_V,
            strength_baseline: STRENGTH_BASELINE,
            strength_gain: STRENGTH_GAIN,
            lateral_gain: LATERAL_GAIN,
            forward_base: FORWARD_BASE,
            forward_loft_gain: FORWARD_LOFT_GAIN,
            max_lateral_aim: MAX_LATERAL_AIM,
            min_vertical_aim: MIN_VERTICAL_AIM,
            max_vertical_aim: MAX_VERTICAL_AIM,
            loft_gain: LOFT_GAIN,
            loft_base: LOFT_BASE,
            loft_power_base: LOFT_POWER_BASE,
            loft_power_gain: LOFT_POWER_GAIN,
            min_launch_vz: MIN_LAUNCH_VZ,
            max_launch_vz: MAX_LAUNCH_VZ,
            spin_per_lateral: SPIN_PER_LATERAL,
            spin_base: SPIN_BASE,
            spin_gain: SPIN_GAIN,
        }
    }
}

impl LaunchConfig {
    /// Shot strength for a power in [0, 1].
    pub fn strength(&self, power: f64) -> f64 {
        self.strength_baseline + power * self.strength_gain
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            curve_base: CURVE_BASE,
            curve_depth_gain: CURVE_DEPTH_GAIN,
            drag_u: DRAG_U,
            drag_v: DRAG_V,
            gravity_z: GRAVITY_Z,
            ground_bounce: GROUND_BOUNCE,
            max_height_factor: MAX_HEIGHT_FACTOR,
            forward_bleed: FORWARD_BLEED,
            knuckle_activation_v: KNUCKLE_ACTIVATION_V,
            wobble_slow_gain: WOBBLE_SLOW_GAIN,
            wobble_fast_gain: WOBBLE_FAST_GAIN,
            wobble_freq_base: WOBBLE_FREQ_BASE,
            wobble_freq_depth_gain: WOBBLE_FREQ_DEPTH_GAIN,
            wobble_jitter: WOBBLE_JITTER,
            phase_rate: FLIGHT_PHASE_RATE,
            wind_gain: WIND_GAIN,
            random_wind_max: 0.0,
            goal_line_v: GOAL_LINE_V,
            min_u: MIN_BOUNDS_U,
            max_u: MAX_BOUNDS_U,
            min_v: MIN_BOUNDS_V,
            max_v: MAX_BOUNDS_V,
            max_step_secs: MAX_STEP_SECS,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            goal_points: GOAL_POINTS,
            streak_bonus: STREAK_BONUS,
            save_penalty: SAVE_PENALTY,
            miss_penalty: MISS_PENALTY,
            out_penalty: OUT_PENALTY,
            block_penalty: BLOCK_PENALTY,
            result_display_secs: RESULT_DISPLAY_SECS,
            out_display_secs: OUT_DISPLAY_SECS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulator cannot work with.
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        // Bounds later fed to `f64::clamp`, which panics on an empty range.
        fn range(field: &'static str, min: f64, max: f64) -> Result<(), TuningError> {
            if min.is_finite() && max.is_finite() && min <= max {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: format!("range [{min}, {max}] is empty"),
                })
            }
        }

        if self.pitch.top_y >= self.pitch.bot_y {
            return Err(TuningError::Invalid {
                field: "pitch.top_y",
                reason: format!(
                    "far edge ({}) must be above the near edge ({})",
                    self.pitch.top_y, self.pitch.bot_y
                ),
            });
        }
        positive("pitch.top_w", self.pitch.top_w)?;
        positive("pitch.bot_w", self.pitch.bot_w)?;

        if self.goal.w <= 2.0 * self.goal.mouth_pad || self.goal.h <= 2.0 * self.goal.mouth_pad {
            return Err(TuningError::Invalid {
                field: "goal.mouth_pad",
                reason: "padding leaves no goal mouth".into(),
            });
        }
        positive("goal.crossbar_z", self.goal.crossbar_z)?;

        if self.wall.count > 0 {
            positive("wall.radius", self.wall.radius)?;
            positive("wall.band", self.wall.band)?;
            if self.wall.spread < 0.0 {
                return Err(TuningError::Invalid {
                    field: "wall.spread",
                    reason: format!("must not be negative, got {}", self.wall.spread),
                });
            }
        }

        if self.keeper.reach < 0.0 {
            return Err(TuningError::Invalid {
                field: "keeper.reach",
                reason: format!("must not be negative, got {}", self.keeper.reach),
            });
        }
        positive("keeper.speed", self.keeper.speed)?;
        positive("keeper.dive_duration_secs", self.keeper.dive_duration_secs)?;
        range(
            "keeper.min_target_u",
            self.keeper.min_target_u,
            self.keeper.max_target_u,
        )?;

        positive("launch.strength_gain", self.launch.strength_gain)?;
        range(
            "launch.min_launch_vz",
            self.launch.min_launch_vz,
            self.launch.max_launch_vz,
        )?;
        range(
            "launch.max_lateral_aim",
            -self.launch.max_lateral_aim,
            self.launch.max_lateral_aim,
        )?;
        range(
            "launch.min_vertical_aim",
            self.launch.min_vertical_aim,
            self.launch.max_vertical_aim,
        )?;

        positive("flight.max_step_secs", self.flight.max_step_secs)?;
        positive("flight.goal_line_v", self.flight.goal_line_v)?;

        Ok(())
    }
}

/// Load and validate a tuning file.
pub fn load_tuning(path: &Path) -> Result<Tuning, TuningError> {
    let json = fs::read_to_string(path)?;
    Tuning::from_json_str(&json)
}

/// Write a tuning file (pretty-printed JSON).
pub fn save_tuning(path: &Path, tuning: &Tuning) -> Result<(), TuningError> {
    let json = serde_json::to_string_pretty(tuning)?;
    fs::write(path, json)?;
    Ok(())
}
