//! Configuration for runs, the orb field and the terminal front end.
//!
//! Maps to `config.toml`. Missing sections fall back to their defaults.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [run]
//! stability_budget = 8
//! moves_per_stage = 10
//!
//! [field]
//! particle_count = 32
//!
//! [display]
//! target_fps = 60
//! ```

use serde::{Deserialize, Serialize};

/// Tuning of a single run: budgets, rule parameters and tension dynamics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub stability_budget: u32,
    pub moves_per_stage: u32,
    pub trail_capacity: usize,
    pub boundary_margin: f64,
    pub cycle_period: usize,
    pub late_edge_margin: u32,
    pub late_edge_stage: usize,
    pub hint_penalty_moves: u32,
    pub tension_relief: f64,
    pub passive_tension_rate: f64,
    pub failure_tension_base: f64,
    pub failure_tension_scale: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            stability_budget: 8,
            moves_per_stage: 10,
            trail_capacity: 96,
            boundary_margin: 26.0,
            cycle_period: 4,
            late_edge_margin: 80,
            late_edge_stage: 3,
            hint_penalty_moves: 3,
            tension_relief: 0.012,
            passive_tension_rate: 0.000_001_2,
            failure_tension_base: 0.045,
            failure_tension_scale: 0.02,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// How far past an edge a particle drifts before wrapping.
    pub wrap_margin: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 32,
            wrap_margin: 80.0,
        }
    }
}

/// Terminal front end settings. Field pixels map onto cells at
/// `px_per_col` by `px_per_row`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub target_fps: u64,
    pub px_per_col: f64,
    pub px_per_row: f64,
    pub leaderboard_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            px_per_col: 8.0,
            px_per_row: 16.0,
            leaderboard_limit: 20,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub run: RunConfig,
    pub field: FieldConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violated constraint as an error.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Run validation
        anyhow::ensure!(
            self.run.stability_budget > 0,
            "Stability budget must be positive"
        );
        anyhow::ensure!(
            self.run.moves_per_stage > 0,
            "Moves per stage must be positive"
        );
        anyhow::ensure!(
            self.run.trail_capacity > 0,
            "Trail capacity must be positive"
        );
        anyhow::ensure!(
            self.run.boundary_margin >= 0.0,
            "Boundary margin must be non-negative"
        );
        anyhow::ensure!(
            self.run.tension_relief >= 0.0 && self.run.tension_relief <= 1.0,
            "Tension relief must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.run.passive_tension_rate >= 0.0,
            "Passive tension rate must be non-negative"
        );
        anyhow::ensure!(
            self.run.failure_tension_base >= 0.0 && self.run.failure_tension_scale >= 0.0,
            "Failure tension terms must be non-negative"
        );

        // Field validation
        anyhow::ensure!(
            self.field.particle_count <= 1024,
            "Particle count too large (max 1024)"
        );
        anyhow::ensure!(
            self.field.wrap_margin >= 0.0,
            "Wrap margin must be non-negative"
        );

        // Display validation
        anyhow::ensure!(self.display.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(
            self.display.target_fps <= 240,
            "Target FPS too high (max 240)"
        );
        anyhow::ensure!(
            self.display.px_per_col > 0.0 && self.display.px_per_row > 0.0,
            "Cell size in pixels must be positive"
        );
        anyhow::ensure!(
            self.display.leaderboard_limit > 0 && self.display.leaderboard_limit <= 100,
            "Leaderboard limit must be in [1, 100]"
        );

        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Digest of the gameplay-affecting sections. Display settings are left out.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.run).as_bytes());
        hasher.update(format!("{:?}", self.field).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml("[run]\nstability_budget = 3\n").unwrap();
        assert_eq!(config.run.stability_budget, 3);
        assert_eq!(config.run.moves_per_stage, 10);
        assert_eq!(config.field, FieldConfig::default());
    }

    #[test]
    fn test_rejects_zero_stage_length() {
        let err = AppConfig::from_toml("[run]\nmoves_per_stage = 0\n").unwrap_err();
        assert!(err.to_string().contains("Moves per stage"));
    }

    #[test]
    fn test_fingerprint_ignores_display() {
        let a = AppConfig::default();
        let mut b = AppConfig::default();
        b.display.target_fps = 30;
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.run.stability_budget = 4;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
