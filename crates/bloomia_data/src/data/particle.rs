use serde::{Deserialize, Serialize};

/// A drifting orb on the play field.
///
/// `phase_group` is one of 0, 1 or 2. `parity` is 0 (drawn as a ring) or
/// 1 (drawn as a dot).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
    pub phase: f64,
    pub phase_group: u8,
    pub parity: u8,
}

impl Particle {
    /// A motionless particle, mostly useful for fixtures.
    pub fn at(x: f64, y: f64, phase_group: u8, parity: u8) -> Self {
        Self {
            x,
            y,
            r: 12.0,
            phase_group,
            parity,
            ..Default::default()
        }
    }

    #[inline]
    pub fn dist_sq(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}
