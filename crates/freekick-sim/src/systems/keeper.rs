//! Keeper system: wires the keeper FSM into the simulator.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use freekick_core::events::SimEvent;
use freekick_keeper::fsm::{self, KeeperState};
use freekick_keeper::profiles::KeeperProfile;

/// Read the shot and commit to a dive.
pub fn on_launch(
    state: &mut KeeperState,
    profile: &KeeperProfile,
    lateral: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    let noise = rng.gen::<f64>() - 0.5;
    let target_u = fsm::predict_target(lateral, noise, profile);
    fsm::begin_dive(state, target_u);
    events.push(SimEvent::KeeperDive { target_u });
}

/// Per-step keeper easing. Runs whatever the ball is doing.
pub fn run(state: &mut KeeperState, profile: &KeeperProfile, dt: f64) {
    let update = fsm::advance(state, profile, dt);
    if update.dive_ended {
        log::debug!("keeper dive ended at u={:.3}", state.u);
    }
}
