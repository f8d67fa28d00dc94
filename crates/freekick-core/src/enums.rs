//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How the ball is struck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotMode {
    /// Sidespin: the ball bends more the deeper it travels.
    #[default]
    Curl,
    /// Topspin: extra downforce late in flight, little bend.
    Dip,
    /// Almost no spin, unpredictable late wobble.
    Knuckle,
}

/// Per-mode coefficients, looked up once at launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeCoefficients {
    /// Multiplier applied to the aim-derived spin.
    pub spin_multiplier: f64,
    /// Knuckle wobble amplitude at zero power.
    pub wobble_base: f64,
    /// Additional wobble amplitude at full power.
    pub wobble_gain: f64,
    /// Extra downward acceleration at the kick spot.
    pub dip_gravity_base: f64,
    /// Extra downward acceleration growth with depth.
    pub dip_gravity_gain: f64,
}

impl ShotMode {
    pub const ALL: [ShotMode; 3] = [ShotMode::Curl, ShotMode::Dip, ShotMode::Knuckle];

    pub fn coefficients(self) -> ModeCoefficients {
        match self {
            ShotMode::Curl => ModeCoefficients {
                spin_multiplier: 1.25,
                wobble_base: 0.0,
                wobble_gain: 0.0,
                dip_gravity_base: 0.0,
                dip_gravity_gain: 0.0,
            },
            ShotMode::Dip => ModeCoefficients {
                spin_multiplier: 0.75,
                wobble_base: 0.0,
                wobble_gain: 0.0,
                dip_gravity_base: 0.85,
                dip_gravity_gain: 0.55,
            },
            ShotMode::Knuckle => ModeCoefficients {
                spin_multiplier: 0.15,
                wobble_base: 0.9,
                wobble_gain: 1.2,
                dip_gravity_base: 0.0,
                dip_gravity_gain: 0.0,
            },
        }
    }

    /// Short uppercase label for HUD and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            ShotMode::Curl => "CURL",
            ShotMode::Dip => "DIP",
            ShotMode::Knuckle => "KNUCKLE",
        }
    }
}

/// Terminal result of one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Goal,
    Saved,
    Blocked,
    Missed,
    Out,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::Goal,
        Outcome::Saved,
        Outcome::Blocked,
        Outcome::Missed,
        Outcome::Out,
    ];

    /// Only goals keep the streak alive.
    pub fn is_success(self) -> bool {
        self == Outcome::Goal
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Goal => "GOAL!",
            Outcome::Saved => "Saved!",
            Outcome::Blocked => "Blocked!",
            Outcome::Missed => "Missed!",
            Outcome::Out => "Out!",
        }
    }
}

/// Lifecycle of the current shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotPhase {
    /// Ball at the kick spot, ready to be struck.
    #[default]
    Idle,
    /// Ball in the air or rolling.
    Flying,
    /// Outcome decided; waiting for the ball to return to the spot.
    Resolved,
}

/// Difficulty preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Casual,
    #[default]
    Classic,
    Elite,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Casual, Difficulty::Classic, Difficulty::Elite];
}
