//! Pseudo-3D pitch projection and goal frame geometry.
//!
//! The pitch is a trapezoid on screen: narrow at the far (goal) edge,
//! wide at the near (kicker) edge. Depth maps linearly to screen y.

use serde::{Deserialize, Serialize};

use crate::tuning::{GoalConfig, PitchConfig};
use crate::types::{MouthPoint, PitchPoint, Rect, ScreenPoint};

/// Maps pitch coordinates to screen coordinates and back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchProjection {
    config: PitchConfig,
}

impl PitchProjection {
    pub fn new(config: PitchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PitchConfig {
        &self.config
    }

    /// Project a ground point.
    pub fn project(&self, u: f64, v: f64) -> ScreenPoint {
        let c = &self.config;
        let y = c.bot_y + (c.top_y - c.bot_y) * v;
        let w = c.bot_w + (c.top_w - c.bot_w) * v;
        let x = c.cx + (u - 0.5) * w;
        ScreenPoint { x, y, w }
    }

    /// Project a ball, lifting it on screen by its height.
    pub fn project_ball(&self, point: &PitchPoint) -> ScreenPoint {
        let mut screen = self.project(point.u, point.v);
        screen.y -= point.z * screen.w * self.config.ball_lift;
        screen
    }

    /// Inverse of [`project`](Self::project) for a point on the ground.
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let c = &self.config;
        let v = (y - c.bot_y) / (c.top_y - c.bot_y);
        let w = c.bot_w + (c.top_w - c.bot_w) * v;
        let u = 0.5 + (x - c.cx) / w;
        (u, v)
    }
}

impl Default for PitchProjection {
    fn default() -> Self {
        Self::new(PitchConfig::default())
    }
}

/// Goal rectangle, scoring mouth and crossbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFrame {
    config: GoalConfig,
}

impl GoalFrame {
    pub fn new(config: GoalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GoalConfig {
        &self.config
    }

    /// Full goal rectangle including the posts.
    pub fn rect(&self) -> Rect {
        let c = &self.config;
        Rect::new(c.cx - c.w / 2.0, c.y, c.w, c.h)
    }

    /// Scoring aperture: the goal rect shrunk by the mouth padding.
    pub fn mouth(&self) -> Rect {
        let r = self.rect();
        let pad = self.config.mouth_pad;
        Rect::new(r.x + pad, r.y + pad, r.w - 2.0 * pad, r.h - 2.0 * pad)
    }

    /// Screen x of a keeper standing at lateral fraction `keeper_u` of the mouth.
    pub fn keeper_x(&self, keeper_u: f64) -> f64 {
        let mouth = self.mouth();
        mouth.x + mouth.w * keeper_u
    }

    /// Whether a ball at this screen position and height is inside the mouth.
    pub fn in_mouth(&self, screen: &ScreenPoint, z: f64) -> bool {
        self.mouth().contains(screen.x, screen.y) && z <= self.config.crossbar_z
    }

    /// Normalize a crossing into mouth coordinates.
    pub fn mouth_point(&self, screen: &ScreenPoint, z: f64) -> MouthPoint {
        let mouth = self.mouth();
        MouthPoint {
            x: ((screen.x - mouth.x) / mouth.w).clamp(0.0, 1.0),
            y: (z / self.config.crossbar_z).clamp(0.0, 1.0),
        }
    }
}

impl Default for GoalFrame {
    fn default() -> Self {
        Self::new(GoalConfig::default())
    }
}
