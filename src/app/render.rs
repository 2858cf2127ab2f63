use crate::app::state::App;
use bloomia_tui::renderer::FieldWidget;
use bloomia_tui::views::hint::HintWidget;
use bloomia_tui::views::hud::HudWidget;
use bloomia_tui::views::overlays::RulebookWidget;
use bloomia_tui::views::rules::ActiveRulesWidget;
use bloomia_tui::views::scoreboard::ScoreboardWidget;
use bloomia_tui::split_screen;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        let (field_area, sidebar_area) = split_screen(area);
        self.last_field_rect = field_area;

        let snapshot = self.controller.snapshot();
        f.render_widget(FieldWidget::new(&snapshot, self.scale), field_area);

        let rules_height = snapshot.active_rules.len() as u16 + 2;
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints(if self.show_leaderboard {
                vec![
                    Constraint::Length(15),
                    Constraint::Length(rules_height),
                    Constraint::Length(6),
                    Constraint::Min(0),
                ]
            } else {
                vec![
                    Constraint::Length(15),
                    Constraint::Length(rules_height),
                    Constraint::Min(0),
                    Constraint::Length(0),
                ]
            })
            .split(sidebar_area);

        f.render_widget(HudWidget { snapshot: &snapshot }, sidebar[0]);
        f.render_widget(
            ActiveRulesWidget {
                rules: &snapshot.active_rules,
                last_fail: snapshot.last_fail,
            },
            sidebar[1],
        );

        let log_lines: Vec<Line> = self
            .event_log
            .iter()
            .rev()
            .map(|(msg, color)| Line::styled(msg.clone(), Style::default().fg(*color)))
            .collect();
        f.render_widget(
            Paragraph::new(log_lines).block(Block::default().title(" Log ").borders(Borders::ALL)),
            sidebar[2],
        );

        if self.show_leaderboard {
            f.render_widget(
                ScoreboardWidget {
                    leaderboard: &self.leaderboard_text,
                    status: &self.scoreboard_status,
                    run: &self.last_run_text,
                },
                sidebar[3],
            );
        }

        if let Some(hint) = &self.hint {
            f.render_widget(HintWidget { hint }, field_area);
        }
        if self.show_rulebook {
            f.render_widget(
                RulebookWidget {
                    active: &snapshot.active_rules,
                },
                area,
            );
        }
        self.render_help(f);
    }
}

