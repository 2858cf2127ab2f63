use crate::app::state::App;
use bloomia_tui::views::overlays::centered;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const CONTROLS: [(&str, &str); 9] = [
    ("arrows / wasd", "move"),
    ("mouse drag", "swipe"),
    ("h", "hint (tension pinned for a few moves)"),
    ("b", "rulebook"),
    ("r", "new run"),
    ("l", "refresh leaderboard"),
    ("t", "toggle leaderboard panel"),
    ("?", "this help"),
    ("q / esc", "quit"),
];

impl App {
    pub fn render_help(&self, f: &mut Frame) {
        if !self.show_help {
            return;
        }
        let help_area = centered(f.area(), 56, CONTROLS.len() as u16 + 6);
        f.render_widget(Clear, help_area);

        let mut lines = vec![
            Line::from(" Move without breaking the rules in force."),
            Line::from(" A new rule joins every few valid moves."),
            Line::from(""),
        ];
        lines.extend(
            CONTROLS
                .iter()
                .map(|(key, what)| Line::from(format!(" {key:<14} {what}"))),
        );

        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(Color::White))
                .block(Block::default().title(" Help ").borders(Borders::ALL)),
            help_area,
        );
    }
}
