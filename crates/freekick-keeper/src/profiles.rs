//! Difficulty-specific keeper profiles.
//!
//! A profile is the keeper section of the runtime tuning, so a tuning file
//! can override any of these values.

use freekick_core::enums::Difficulty;
use freekick_core::tuning::KeeperConfig;

/// Behavioral parameters for the keeper.
pub type KeeperProfile = KeeperConfig;

/// Get the keeper profile for a difficulty.
pub fn get_profile(difficulty: Difficulty) -> KeeperProfile {
    match difficulty {
        Difficulty::Casual => KeeperProfile {
            reach: 0.14,
            react_delay_secs: 0.25,
            speed: 1.6,
            dive_duration_secs: 0.55,
            idle_return_rate: 0.9,
            prediction_factor: 0.50,
            prediction_noise: 0.08,
            ..KeeperProfile::default()
        },
        Difficulty::Classic => KeeperProfile::default(),
        Difficulty::Elite => KeeperProfile {
            reach: 0.21,
            react_delay_secs: 0.10,
            speed: 2.8,
            dive_duration_secs: 0.60,
            idle_return_rate: 1.1,
            prediction_factor: 0.62,
            prediction_noise: 0.03,
            ..KeeperProfile::default()
        },
    }
}
