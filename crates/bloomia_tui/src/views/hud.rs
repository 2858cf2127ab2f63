use bloomia_core::snapshot::{RunSnapshot, HUD_DENSITY_RADIUS};
use bloomia_data::RunPhase;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

pub struct HudWidget<'a> {
    pub snapshot: &'a RunSnapshot,
}

impl<'a> HudWidget<'a> {
    pub fn stability_bar(stability: u32, budget: u32) -> String {
        let filled = stability.min(budget) as usize;
        let empty = budget as usize - filled;
        format!("{}{}", "▮".repeat(filled), "▯".repeat(empty))
    }

    pub fn tension_color(tension: f64) -> Color {
        if tension > 0.75 {
            Color::Red
        } else if tension > 0.4 {
            Color::Yellow
        } else {
            Color::Green
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let s = self.snapshot;
        let dim = Style::default().fg(Color::DarkGray);

        let last_input = match &s.last_attempt {
            None => Span::styled("-", dim),
            Some(a) => match &a.rejection {
                None => Span::styled(
                    format!("{} ✓", a.direction),
                    Style::default().fg(Color::Green),
                ),
                Some(r) => Span::styled(
                    format!("{} ✗ {}", a.direction, r.label),
                    Style::default().fg(Color::Red),
                ),
            },
        };

        let parity_word = if s.parity.parity_sum_nearest % 2 == 1 {
            "odd"
        } else {
            "even"
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("stage {}", s.stage),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  score {}  seed {}", s.score, s.seed)),
            ]),
            Line::from(vec![
                Span::raw("tension "),
                Span::styled(
                    format!("{:.3}", s.tension),
                    Style::default().fg(Self::tension_color(s.tension)),
                ),
                Span::styled(format!(" (max {:.3})", s.max_tension), dim),
            ]),
            Line::from(format!(
                "step {:.0}px  Δtension {:+.3}",
                s.step, s.last_tension_delta
            )),
            Line::from(vec![
                Span::raw("stability "),
                Span::styled(
                    Self::stability_bar(s.stability, s.stability_budget),
                    Style::default().fg(Color::Magenta),
                ),
            ]),
            Line::from(format!(
                "valid {}  invalid {}  time {:.1}s",
                s.valid_moves,
                s.invalid_moves,
                s.elapsed_ms / 1000.0
            )),
            Line::from(format!(
                "last move {}",
                s.last_move.map_or("-", |d| d.as_str())
            )),
            Line::from(vec![Span::raw("last input "), last_input]),
            Line::from(format!(
                "orbs@{HUD_DENSITY_RADIUS:.0} {}  phase {}",
                s.local.count, s.local.dominant_phase
            )),
            Line::from(format!(
                "parity@{} {parity_word} (dots {}/{})",
                s.orb_parity_radius, s.parity.parity_sum_nearest, s.parity.nearest_used
            )),
            Line::from(format!(
                "last fail {}",
                s.last_fail.map_or("-", |id| id.as_str())
            )),
        ];

        if s.hint_penalty_remaining > 0 {
            lines.push(Line::from(Span::styled(
                format!("hint penalty: {} moves", s.hint_penalty_remaining),
                Style::default().fg(Color::Yellow),
            )));
        }

        let footer = match s.phase {
            RunPhase::Idle => "[r] start".to_string(),
            RunPhase::Running => "arrows/wasd move  [h] hint  [b] rules".to_string(),
            RunPhase::Ended(reason) => format!("run over: {reason}  [r] restart"),
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(footer, dim)));
        lines
    }
}

impl<'a> Widget for HudWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        Paragraph::new(self.lines())
            .block(Block::default().title(" Run ").borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
