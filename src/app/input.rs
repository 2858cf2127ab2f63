use crate::app::state::App;
use bloomia_data::{Direction, Point};
use bloomia_tui::renderer::FieldWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::Color;

/// Minimum drag distance, in field pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 26.0;

/// Dominant axis of a drag, `None` below the threshold. Ties go vertical.
pub fn swipe_direction(dx: f64, dy: f64) -> Option<Direction> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax.max(ay) < SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if ax > ay {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Fires once the drag from the start point crosses the threshold.
    /// The gesture is spent after firing; a new press starts the next one.
    pub fn track(&mut self, at: Point) -> Option<Direction> {
        let start = self.start?;
        let direction = swipe_direction(at.x - start.x, at.y - start.y)?;
        self.start = None;
        Some(direction)
    }

    pub fn reset(&mut self) {
        self.start = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        if let Some(direction) = direction_for_key(key.code) {
            self.try_move(direction);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => {
                if self.show_rulebook || self.show_help || self.hint.is_some() {
                    self.show_rulebook = false;
                    self.show_help = false;
                    self.hint = None;
                } else {
                    self.running = false;
                }
            }
            KeyCode::Char('h') => {
                if self.hint.is_some() {
                    self.hint = None;
                } else {
                    self.hint = self.controller.request_hint();
                    self.process_run_events();
                }
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('b') => self.show_rulebook = !self.show_rulebook,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('t') => self.show_leaderboard = !self.show_leaderboard,
            KeyCode::Char('l') => {
                self.refresh_leaderboard();
                if !self.scoreboard.is_enabled() {
                    self.log(
                        "Scoreboard not configured (see --scoreboard-url)".to_string(),
                        Color::DarkGray,
                    );
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let at = FieldWidget::screen_to_field(mouse.column, mouse.row, self.last_field_rect, self.scale);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match at {
                Some(p) => self.swipe.begin(p),
                None => self.swipe.reset(),
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(direction) = at.and_then(|p| self.swipe.track(p)) {
                    self.try_move(direction);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.swipe.reset(),
            _ => {}
        }
    }

    /// Directions only reach the controller while a run is live.
    pub fn try_move(&mut self, direction: Direction) {
        if !self.controller.is_running() {
            return;
        }
        if let Some(verdict) = self.controller.attempt_move(direction) {
            self.metrics
                .record_attempt(verdict.rejection().map(|r| r.id));
            self.hint = None;
        }
        self.process_run_events();
    }
}
