use bloomia_data::{RuleId, RuleInfo};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Numbered list of the rules in force, the last failure highlighted.
pub struct ActiveRulesWidget<'a> {
    pub rules: &'a [RuleInfo],
    pub last_fail: Option<RuleId>,
}

impl<'a> Widget for ActiveRulesWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let lines: Vec<Line> = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let style = if Some(rule.id) == self.last_fail {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(rule.label.clone(), style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().title(" Rules ").borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
