//! The orb field: drifting particles plus the two neighbourhood queries the
//! field-coupled rules depend on.

use crate::config::FieldConfig;
use crate::rng::XorShiftRng;
use bloomia_data::Particle;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Largest neighbour count `parity_at` will consider.
pub const MAX_NEAREST: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeighborhoodStats {
    pub count: usize,
    pub parity_sum: u32,
    pub phase_counts: [usize; 3],
    pub dominant_phase: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParitySample {
    pub in_radius: usize,
    pub nearest_used: usize,
    pub parity_sum_nearest: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    width: f64,
    height: f64,
    wrap_margin: f64,
    particles: Vec<Particle>,
}

impl Field {
    /// Draws `config.particle_count` particles from `rng`.
    ///
    /// Draw order per particle is fixed: radius, phase group, parity, x, y,
    /// vx, vy, phase. Changing it changes every seeded layout.
    pub fn create(rng: &mut XorShiftRng, width: f64, height: f64, config: &FieldConfig) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| {
                let r = 6.0 + rng.next_float() * 24.0;
                let phase_group = ((rng.next_float() * 3.0).floor() as u8) % 3;
                let parity = (rng.next_u32() & 1) as u8;
                Particle {
                    x: rng.next_float() * width,
                    y: rng.next_float() * height,
                    vx: (rng.next_float() - 0.5) * 0.06,
                    vy: (rng.next_float() - 0.5) * 0.06,
                    r,
                    phase: rng.next_float() * PI * 2.0,
                    phase_group,
                    parity,
                }
            })
            .collect();

        Self {
            width,
            height,
            wrap_margin: config.wrap_margin,
            particles,
        }
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            wrap_margin: FieldConfig::default().wrap_margin,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Advances phases and positions. Faster drift under bloom and tension.
    pub fn update(&mut self, dt_ms: f64, bloom: f64, tension: f64) {
        let drift = 1.0 + bloom * 2.0 + tension * 1.8;
        let m = self.wrap_margin;
        for p in &mut self.particles {
            p.phase += dt_ms * 0.0012 * drift;
            p.x += p.vx * dt_ms * drift;
            p.y += p.vy * dt_ms * drift;

            if p.x < -m {
                p.x = self.width + m;
            }
            if p.x > self.width + m {
                p.x = -m;
            }
            if p.y < -m {
                p.y = self.height + m;
            }
            if p.y > self.height + m {
                p.y = -m;
            }
        }
    }

    /// Counts particles with `dx² + dy² <= radius²`.
    ///
    /// On equal phase counts the later group wins.
    pub fn stats_near(&self, x: f64, y: f64, radius: f64) -> NeighborhoodStats {
        let r2 = radius * radius;
        let mut stats = NeighborhoodStats::default();

        for p in &self.particles {
            if p.dist_sq(x, y) > r2 {
                continue;
            }
            stats.count += 1;
            stats.parity_sum += u32::from(p.parity);
            let group = usize::from(p.phase_group.min(2));
            stats.phase_counts[group] += 1;
        }

        let [p0, p1, p2] = stats.phase_counts;
        if p1 >= p0 && p1 >= p2 {
            stats.dominant_phase = 1;
        }
        if p2 >= p0 && p2 >= p1 {
            stats.dominant_phase = 2;
        }
        stats
    }

    /// Parity sum over the `k` nearest particles inside `radius`.
    ///
    /// `k` is clamped to `1..=12`. On equal distances the earlier particle
    /// in scan order is kept.
    pub fn parity_at(&self, x: f64, y: f64, radius: f64, k: usize) -> ParitySample {
        let r2 = radius * radius;
        let k = k.clamp(1, MAX_NEAREST);
        let mut nearest: Vec<(f64, u8)> = Vec::with_capacity(k + 1);
        let mut in_radius = 0;

        for p in &self.particles {
            let d2 = p.dist_sq(x, y);
            if d2 > r2 {
                continue;
            }
            in_radius += 1;

            if nearest.len() == k {
                match nearest.last() {
                    Some(&(worst, _)) if d2 < worst => {
                        nearest.pop();
                    }
                    _ => continue,
                }
            }
            let at = nearest.partition_point(|&(d, _)| d <= d2);
            nearest.insert(at, (d2, p.parity));
        }

        ParitySample {
            in_radius,
            nearest_used: nearest.len(),
            parity_sum_nearest: nearest.iter().map(|&(_, parity)| u32::from(parity)).sum(),
        }
    }
}
