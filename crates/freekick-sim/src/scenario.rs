//! Difficulty presets.
//!
//! Each preset is a full `Tuning`: Classic is the default tuning, the
//! others adjust shot strength, keeper and wall.

use freekick_core::enums::Difficulty;
use freekick_core::tuning::{Tuning, WallConfig};
use freekick_keeper::profiles::get_profile;

/// Build the tuning for a difficulty preset.
pub fn build_tuning(difficulty: Difficulty) -> Tuning {
    match difficulty {
        Difficulty::Casual => build_casual(),
        Difficulty::Classic => build_classic(),
        Difficulty::Elite => build_elite(),
    }
}

/// Casual: stronger baseline shot, slow keeper, three-man wall.
fn build_casual() -> Tuning {
    let mut tuning = Tuning::default();
    tuning.launch.strength_baseline = 0.95;
    tuning.launch.strength_gain = 1.30;
    tuning.wall = WallConfig {
        count: 3,
        spread: 0.16,
        ..WallConfig::default()
    };
    tuning.keeper = get_profile(Difficulty::Casual);
    tuning
}

fn build_classic() -> Tuning {
    Tuning {
        keeper: get_profile(Difficulty::Classic),
        ..Tuning::default()
    }
}

/// Elite: five-man wall a little closer to goal that shuffles between
/// shots, sharper keeper, random wind.
fn build_elite() -> Tuning {
    let mut tuning = Tuning::default();
    tuning.launch.strength_baseline = 0.70;
    tuning.launch.strength_gain = 2.15;
    tuning.wall = WallConfig {
        depth_v: 0.66,
        count: 5,
        spread: 0.24,
        jitter: 0.04,
        ..WallConfig::default()
    };
    tuning.keeper = get_profile(Difficulty::Elite);
    tuning.flight.random_wind_max = 0.85;
    tuning
}
