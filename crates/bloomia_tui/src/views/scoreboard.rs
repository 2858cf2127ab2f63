use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Leaderboard and last-run panels. Text arrives preformatted.
pub struct ScoreboardWidget<'a> {
    pub leaderboard: &'a str,
    pub status: &'a str,
    pub run: &'a str,
}

impl<'a> Widget for ScoreboardWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(10)])
            .split(area);

        let title = if self.status.is_empty() {
            " Leaderboard ".to_string()
        } else {
            format!(" Leaderboard ({}) ", self.status)
        };
        Paragraph::new(self.leaderboard)
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(chunks[0], buf);

        Paragraph::new(self.run)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title(" Last run ").borders(Borders::ALL))
            .render(chunks[1], buf);
    }
}
