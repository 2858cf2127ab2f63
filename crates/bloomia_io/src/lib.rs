//! # Bloomia IO
//!
//! Everything that leaves the process:
//! - Structured error handling with a custom error type
//! - JSON file helpers and the local settings file
//! - The scoreboard REST client
//! - Text formatting for runs and the leaderboard

/// Error types and result aliases for I/O operations
pub mod error;
/// Leaderboard and run text formatting
pub mod format;
/// Scoreboard backend trait and the Supabase REST client
pub mod scoreboard;
/// JSON file helpers
pub mod serialization;
/// Player name and backend credentials
pub mod settings;

pub use error::{IoError, Result};
pub use format::{format_leaderboard, format_ms, format_run};
pub use scoreboard::{LeaderboardRow, ScoreRecord, ScoreboardBackend, SupabaseRest};
pub use serialization::{from_json, read_json_file, to_json_pretty, write_json_file};
pub use settings::Settings;
