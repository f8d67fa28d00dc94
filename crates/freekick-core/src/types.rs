//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position in pitch space.
/// u = lateral (0 left touchline, 1 right), v = depth (0 near edge,
/// 1 goal line region), z = height above the ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchPoint {
    pub u: f64,
    pub v: f64,
    pub z: f64,
}

/// Velocity in pitch space (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchVelocity {
    pub du: f64,
    pub dv: f64,
    pub vz: f64,
}

/// A projected point on the screen plane, with the pitch width at that depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

/// Where a ball crossed the goal mouth, normalized to the mouth.
/// x = 0 at the left post, 1 at the right post;
/// y = 0 on the ground, 1 at the crossbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouthPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of steps taken.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl PitchPoint {
    pub fn new(u: f64, v: f64, z: f64) -> Self {
        Self { u, v, z }
    }

    /// Position on the ground plane.
    pub fn ground(&self) -> DVec2 {
        DVec2::new(self.u, self.v)
    }

    /// Ground distance to another point (ignores height).
    pub fn ground_distance_to(&self, other: &PitchPoint) -> f64 {
        self.ground().distance(other.ground())
    }

    /// Linear interpolation toward `other`.
    pub fn lerp(&self, other: &PitchPoint, t: f64) -> PitchPoint {
        PitchPoint {
            u: self.u + (other.u - self.u) * t,
            v: self.v + (other.v - self.v) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict interior test. Points on the edge are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.x && x < self.x + self.w && y > self.y && y < self.y + self.h
    }
}

impl SimTime {
    /// Advance by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Linear interpolation between two scalars.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
