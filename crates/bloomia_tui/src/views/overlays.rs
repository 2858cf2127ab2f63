use bloomia_core::rules::registry::RULE_DOCS;
use bloomia_data::RuleInfo;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Every rule the game knows, with the active ones marked.
pub struct RulebookWidget<'a> {
    pub active: &'a [RuleInfo],
}

impl<'a> Widget for RulebookWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let book = centered(area, 72, 24);
        Clear.render(book, buf);

        let mut lines = Vec::new();
        for doc in RULE_DOCS.iter() {
            let active = self.active.iter().any(|r| r.id == doc.id);
            let (mark, style) = if active {
                ("●", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(Color::Gray))
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {mark} "), style),
                Span::styled(doc.label, style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", doc.description),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(" [b] close "));

        Paragraph::new(lines)
            .block(Block::default().title(" Rulebook ").borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .render(book, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered(area, 72, 24);
        assert_eq!(r, Rect::new(14, 8, 72, 24));

        let small = Rect::new(0, 0, 30, 10);
        let r = centered(small, 72, 24);
        assert_eq!((r.width, r.height), (26, 8));
    }
}
