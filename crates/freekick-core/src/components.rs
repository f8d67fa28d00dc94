//! Mutable simulation entities.
//!
//! Plain data. Physics lives in the simulator's systems, not here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::ShotMode;
use crate::types::{PitchPoint, PitchVelocity};

/// The ball. Created at the kick spot, mutated every step while flying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: PitchPoint,
    pub velocity: PitchVelocity,
    /// Signed curve strength. Positive bends right.
    pub spin: f64,
    pub mode: ShotMode,
    /// Knuckle wobble amplitude (zero for other modes).
    pub wobble: f64,
    /// Extra downforce at the kick spot (Dip only).
    pub dip_gravity_base: f64,
    /// Extra downforce growth with depth (Dip only).
    pub dip_gravity_gain: f64,
    /// Oscillator driving the knuckle wobble (radians).
    pub flight_phase: f64,
    pub flying: bool,
}

impl Ball {
    /// A ball resting at the kick spot.
    pub fn at_spot(u: f64, v: f64) -> Self {
        Self {
            position: PitchPoint::new(u, v, 0.0),
            ..Self::default()
        }
    }
}

/// One defender standing in the wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    pub u: f64,
    pub v: f64,
}

impl Defender {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    pub fn ground(&self) -> DVec2 {
        DVec2::new(self.u, self.v)
    }
}
