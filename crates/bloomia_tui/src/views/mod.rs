pub mod hint;
pub mod hud;
pub mod overlays;
pub mod rules;
pub mod scoreboard;
