pub use bloomia_core::{RunController, RunEvent, RunSnapshot, SessionMetrics};
pub mod config {
    pub use bloomia_core::config::*;
}
pub mod rules {
    pub use bloomia_core::rules::*;
}
pub mod run {
    pub use bloomia_core::run::*;
}
pub mod snapshot {
    pub use bloomia_core::snapshot::*;
}
pub mod scoreboard {
    pub use bloomia_io::scoreboard::*;
}
pub mod settings {
    pub use bloomia_io::settings::*;
}
