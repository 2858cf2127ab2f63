use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};

use bloomia_core::snapshot::RunSnapshot;
use bloomia_data::{Particle, Point};

/// How many field pixels one terminal cell covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub px_per_col: f64,
    pub px_per_row: f64,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            px_per_col: 8.0,
            px_per_row: 16.0,
        }
    }
}

const BASE_ORB: (f64, f64, f64) = (120.0, 125.0, 140.0);

pub struct FieldWidget<'a> {
    snapshot: &'a RunSnapshot,
    scale: CellScale,
}

impl<'a> FieldWidget<'a> {
    pub fn new(snapshot: &'a RunSnapshot, scale: CellScale) -> Self {
        Self { snapshot, scale }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Field size in pixels that fits inside the bordered `area`.
    pub fn field_size_for(area: Rect, scale: CellScale) -> (f64, f64) {
        let inner = Self::get_inner_area(area);
        (
            f64::from(inner.width) * scale.px_per_col,
            f64::from(inner.height) * scale.px_per_row,
        )
    }

    pub fn field_to_screen(x: f64, y: f64, inner: Rect, scale: CellScale) -> Option<(u16, u16)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / scale.px_per_col).floor();
        let row = (y / scale.px_per_row).floor();
        if col >= f64::from(inner.width) || row >= f64::from(inner.height) {
            return None;
        }
        Some((inner.x + col as u16, inner.y + row as u16))
    }

    /// Centre of the cell under the cursor, in field pixels.
    pub fn screen_to_field(col: u16, row: u16, area: Rect, scale: CellScale) -> Option<Point> {
        let inner = Self::get_inner_area(area);
        if col < inner.left() || col >= inner.right() || row < inner.top() || row >= inner.bottom()
        {
            return None;
        }
        Some(Point::new(
            (f64::from(col - inner.x) + 0.5) * scale.px_per_col,
            (f64::from(row - inner.y) + 0.5) * scale.px_per_row,
        ))
    }

    pub fn background(bloom: f64) -> Color {
        let base = 14 + (bloom * 30.0).floor() as u8;
        Color::Rgb(base, base + 2, base + 6)
    }

    pub fn color_for_particle(particle: &Particle, bloom: f64) -> Color {
        let group = match particle.phase_group {
            0 => (84.0, 240.0, 195.0),
            1 => (124.0, 240.0, 255.0),
            _ => (255.0, 77.0, 109.0),
        };
        let mix = bloom * 0.85;
        let blend = |a: f64, b: f64| (a * (1.0 - mix) + b * mix).round().clamp(0.0, 255.0) as u8;
        Color::Rgb(
            blend(BASE_ORB.0, group.0),
            blend(BASE_ORB.1, group.1),
            blend(BASE_ORB.2, group.2),
        )
    }

    /// Dots (parity 1) and rings (parity 0), larger glyphs while pulsing.
    pub fn symbol_for_particle(particle: &Particle) -> &'static str {
        let pulse = 0.5 + 0.5 * particle.phase.sin();
        match (particle.parity, pulse > 0.5) {
            (1, true) => "●",
            (1, false) => "•",
            (_, true) => "◯",
            (_, false) => "○",
        }
    }

    pub fn player_color(bloom: f64) -> Color {
        Color::Rgb(
            (84.0 + bloom * 40.0) as u8,
            (240.0 - bloom * 40.0) as u8,
            (195.0 + bloom * 40.0) as u8,
        )
    }
}

impl<'a> Widget for FieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        let title = if snap.is_running() {
            format!("Bloomia (seed {})", snap.seed)
        } else {
            format!("Bloomia (seed {}) - run over", snap.seed)
        };
        let border = if snap.shake_offset != (0.0, 0.0) {
            Color::Red
        } else {
            Color::DarkGray
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        let bg = Self::background(snap.bloom);
        buf.set_style(inner, Style::default().bg(bg));

        let (sx, sy) = snap.shake_offset;

        for p in &snap.trail {
            if let Some((x, y)) = Self::field_to_screen(p.x + sx, p.y + sy, inner, self.scale) {
                let cell = &mut buf[(x, y)];
                cell.set_symbol("·");
                cell.set_fg(Color::Rgb(70, 90, 110));
            }
        }

        for particle in &snap.particles {
            if let Some((x, y)) =
                Self::field_to_screen(particle.x + sx, particle.y + sy, inner, self.scale)
            {
                let cell = &mut buf[(x, y)];
                cell.set_symbol(Self::symbol_for_particle(particle));
                cell.set_fg(Self::color_for_particle(particle, snap.bloom));
            }
        }

        if let Some((x, y)) =
            Self::field_to_screen(snap.player.x + sx, snap.player.y + sy, inner, self.scale)
        {
            let cell = &mut buf[(x, y)];
            cell.set_symbol("@");
            cell.set_fg(Self::player_color(snap.bloom));
        }
    }
}
