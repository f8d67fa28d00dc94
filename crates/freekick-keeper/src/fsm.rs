//! Keeper state machine.
//!
//! Pure functions over plain data: the simulator owns the state and the
//! random source, these functions only compute.

use freekick_core::types::lerp;
use serde::{Deserialize, Serialize};

use crate::profiles::KeeperProfile;

/// Keeper lateral position and dive state. Positions are fractions of the
/// goal mouth (0 left post, 1 right post).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeeperState {
    pub u: f64,
    pub target_u: f64,
    pub diving: bool,
    pub dive_elapsed_secs: f64,
}

impl Default for KeeperState {
    fn default() -> Self {
        Self {
            u: 0.5,
            target_u: 0.5,
            diving: false,
            dive_elapsed_secs: 0.0,
        }
    }
}

/// Output of one keeper step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeeperUpdate {
    /// The dive timed out during this step.
    pub dive_ended: bool,
}

/// Guess where the shot is going. `noise_sample` is a uniform draw in [-0.5, 0.5).
pub fn predict_target(lateral: f64, noise_sample: f64, profile: &KeeperProfile) -> f64 {
    let guess = 0.5 + lateral * profile.prediction_factor + noise_sample * profile.prediction_noise;
    guess.clamp(profile.min_target_u, profile.max_target_u)
}

/// Commit to a dive toward `target_u`.
pub fn begin_dive(state: &mut KeeperState, target_u: f64) {
    state.target_u = target_u;
    state.diving = true;
    state.dive_elapsed_secs = 0.0;
}

/// Advance the keeper by `dt` seconds. Runs every frame, flying ball or not.
pub fn advance(state: &mut KeeperState, profile: &KeeperProfile, dt: f64) -> KeeperUpdate {
    if !state.diving {
        let t = (dt * profile.idle_return_rate).clamp(0.0, 1.0);
        state.u = lerp(state.u, 0.5, t);
        return KeeperUpdate { dive_ended: false };
    }

    state.dive_elapsed_secs += dt;
    let speed = if state.dive_elapsed_secs > profile.react_delay_secs {
        profile.speed
    } else {
        0.0
    };
    let t = (dt * speed).clamp(0.0, 1.0);
    state.u = lerp(state.u, state.target_u, t);

    if state.dive_elapsed_secs > profile.dive_duration_secs {
        state.diving = false;
        return KeeperUpdate { dive_ended: true };
    }
    KeeperUpdate { dive_ended: false }
}

/// Save radius in screen units for a ball at height `ball_z`.
pub fn effective_reach(profile: &KeeperProfile, goal_width: f64, ball_z: f64) -> f64 {
    let factor = if ball_z > profile.high_ball_z {
        profile.high_ball_reach
    } else {
        1.0
    };
    goal_width * profile.reach * factor
}
