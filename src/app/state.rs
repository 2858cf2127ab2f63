use ratatui::layout::Rect;
use ratatui::style::Color;
use std::collections::VecDeque;
use std::path::Path;

use crate::app::input::SwipeTracker;
use crate::app::scoreboard::{ScoreboardTasks, ScoreboardUpdate};
use crate::model::config::AppConfig;
use crate::model::run::Hint;
use crate::model::{RunController, RunEvent, SessionMetrics};
use bloomia_data::EndReason;
use bloomia_io::format::{format_leaderboard, format_run};
use bloomia_io::settings::Settings;
use bloomia_io::ScoreRecord;
use bloomia_tui::renderer::{CellScale, FieldWidget};
use bloomia_tui::split_screen;

const EVENT_LOG_CAPACITY: usize = 8;

pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub settings: Settings,
    pub controller: RunController,
    pub metrics: SessionMetrics,
    pub scale: CellScale,
    /// Every restart reuses this seed when set.
    pub fixed_seed: Option<u32>,
    pub field_size: (f64, f64),
    pub show_rulebook: bool,
    pub show_help: bool,
    pub show_leaderboard: bool,
    pub hint: Option<Hint>,
    pub swipe: SwipeTracker,
    pub last_field_rect: Rect,
    pub scoreboard: ScoreboardTasks,
    pub leaderboard_text: String,
    pub scoreboard_status: String,
    pub last_run_text: String,
    pub event_log: VecDeque<(String, Color)>,
}

impl App {
    /// Reads `path`, writing the defaults there when the file is missing.
    /// A file that fails to parse or validate is reported and ignored.
    pub fn load_config(path: &Path) -> AppConfig {
        if let Ok(content) = std::fs::read_to_string(path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                }
            }
        }
        let default = AppConfig::default();
        if !path.exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    pub fn new(config: AppConfig, settings: Settings) -> Self {
        let scale = CellScale {
            px_per_col: config.display.px_per_col,
            px_per_row: config.display.px_per_row,
        };
        let scoreboard =
            ScoreboardTasks::from_settings(&settings, config.display.leaderboard_limit);
        let scoreboard_status = if scoreboard.is_enabled() {
            "loading".to_string()
        } else {
            "offline".to_string()
        };
        Self {
            running: true,
            controller: RunController::new(&config),
            config,
            settings,
            metrics: SessionMetrics::new(),
            scale,
            fixed_seed: None,
            field_size: (0.0, 0.0),
            show_rulebook: false,
            show_help: false,
            show_leaderboard: true,
            hint: None,
            swipe: SwipeTracker::default(),
            last_field_rect: Rect::default(),
            scoreboard,
            leaderboard_text: "Scoreboard not configured.".to_string(),
            scoreboard_status,
            last_run_text: format_run(None),
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    /// Field panel for a terminal of `area`; the sidebar takes the rest.
    pub fn field_rect(area: Rect) -> Rect {
        split_screen(area).0
    }

    /// Recomputes the field dimensions for a terminal of `area`.
    pub fn resize(&mut self, area: Rect) {
        self.last_field_rect = Self::field_rect(area);
        self.field_size = FieldWidget::field_size_for(self.last_field_rect, self.scale);
    }

    pub fn restart(&mut self) {
        let (width, height) = self.field_size;
        let seed = match self.fixed_seed {
            Some(seed) => {
                self.controller.restart(seed, width, height);
                seed
            }
            None => self.controller.restart_random(width, height),
        };
        self.hint = None;
        self.swipe.reset();
        self.metrics.record_run_start();
        self.log(format!("New run, seed {seed}"), Color::Cyan);
        self.process_run_events();
    }

    /// Ends a live run without submitting it.
    pub fn abandon(&mut self) {
        if self.controller.stop(EndReason::Abandoned).is_some() {
            self.process_run_events();
        }
    }

    pub fn log(&mut self, msg: String, color: Color) {
        if self.event_log.len() >= EVENT_LOG_CAPACITY {
            self.event_log.pop_front();
        }
        self.event_log.push_back((msg, color));
    }

    pub fn process_run_events(&mut self) {
        for event in self.controller.drain_events() {
            match event {
                RunEvent::RunStarted { .. } => {}
                RunEvent::StageChanged { to, .. } => {
                    self.log(format!("Stage {to}: a new rule joins"), Color::Cyan);
                }
                RunEvent::MoveRejected { label, .. } => {
                    self.log(format!("✗ {label}"), Color::Red);
                }
                RunEvent::HintUsed { legal } => {
                    self.log(format!("Hint: {legal} legal moves"), Color::Yellow);
                }
                RunEvent::RunEnded(summary) => {
                    self.metrics.record_run_end(&summary);
                    self.hint = None;
                    self.last_run_text = format!(
                        "{}\nSubmit: automatic on run end.",
                        format_run(Some(&summary))
                    );
                    self.log(
                        format!("Run over ({}), score {}", summary.end_reason, summary.score),
                        Color::Magenta,
                    );
                    if summary.end_reason != EndReason::Abandoned {
                        match ScoreRecord::from_summary(&summary, self.settings.display_name()) {
                            Some(record) => {
                                if self.scoreboard.submit(record) {
                                    self.scoreboard_status = "submitting".to_string();
                                }
                            }
                            None => self.log("Run has no hash, not submitted".to_string(), Color::Red),
                        }
                    }
                }
            }
        }
    }

    pub fn refresh_leaderboard(&mut self) {
        if self.scoreboard.refresh() {
            self.scoreboard_status = "loading".to_string();
        }
    }

    pub fn process_scoreboard_updates(&mut self) {
        for update in self.scoreboard.poll() {
            match update {
                ScoreboardUpdate::Leaderboard(Ok(rows)) => {
                    self.leaderboard_text = format_leaderboard(&rows);
                    self.scoreboard_status = "ok".to_string();
                }
                ScoreboardUpdate::Leaderboard(Err(e)) => {
                    self.leaderboard_text = e;
                    self.scoreboard_status = "error".to_string();
                }
                ScoreboardUpdate::Submitted(Ok(())) => {
                    self.log("Score submitted".to_string(), Color::Green);
                }
                ScoreboardUpdate::Submitted(Err(e)) => {
                    self.scoreboard_status = "submit failed".to_string();
                    self.log(format!("Submit failed: {e}"), Color::Red);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomia_data::RunPhase;

    fn test_app() -> App {
        let mut app = App::new(AppConfig::default(), Settings::default());
        app.resize(Rect::new(0, 0, 126, 40));
        app.fixed_seed = Some(7);
        app
    }

    #[test]
    fn test_field_rect_leaves_room_for_sidebar() {
        let rect = App::field_rect(Rect::new(0, 0, 126, 40));
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 40);
    }

    #[test]
    fn test_restart_uses_field_size() {
        let mut app = test_app();
        assert_eq!(app.field_size, (624.0, 608.0));
        app.restart();
        assert_eq!(app.controller.seed(), 7);
        assert_eq!(app.controller.phase(), RunPhase::Running);
        assert_eq!(app.metrics.runs_started(), 1);
        assert_eq!(app.event_log.back().map(|(m, _)| m.as_str()), Some("New run, seed 7"));
    }

    #[test]
    fn test_abandon_ends_run_without_submitting() {
        let mut app = test_app();
        app.restart();
        app.abandon();
        assert_eq!(
            app.controller.phase(),
            RunPhase::Ended(EndReason::Abandoned)
        );
        assert!(app.last_run_text.contains("end: abandoned"));
        assert_eq!(app.scoreboard_status, "offline");
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut app = test_app();
        for i in 0..20 {
            app.log(format!("line {i}"), Color::White);
        }
        assert_eq!(app.event_log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(app.event_log.front().map(|(m, _)| m.as_str()), Some("line 12"));
    }
}
