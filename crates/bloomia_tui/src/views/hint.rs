use crate::views::overlays::centered;
use bloomia_core::run::Hint;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub struct HintWidget<'a> {
    pub hint: &'a Hint,
}

impl<'a> HintWidget<'a> {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.hint.directions.is_empty() {
            lines.push("no legal move from here".to_string());
        } else {
            for d in &self.hint.directions {
                lines.push(format!(
                    "{:<5}  dots {}/{}",
                    d.direction.as_str(),
                    d.dots,
                    d.nearest
                ));
            }
        }
        lines.push(format!(
            "tension pinned for {} moves",
            self.hint.penalty_moves
        ));
        lines
    }
}

impl<'a> Widget for HintWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let hint_area = centered(area, 36, height);
        Clear.render(hint_area, buf);
        Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title(" Hint ").borders(Borders::ALL))
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomia_core::run::HintDirection;
    use bloomia_data::Direction;

    #[test]
    fn test_hint_lines() {
        let hint = Hint {
            directions: vec![HintDirection {
                direction: Direction::Left,
                dots: 3,
                nearest: 5,
            }],
            penalty_moves: 3,
        };
        let lines = HintWidget { hint: &hint }.lines();
        assert_eq!(lines, vec!["left   dots 3/5", "tension pinned for 3 moves"]);

        let empty = Hint {
            directions: vec![],
            penalty_moves: 3,
        };
        assert_eq!(HintWidget { hint: &empty }.lines()[0], "no legal move from here");
    }
}
