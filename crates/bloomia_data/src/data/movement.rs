use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds half-way values toward positive infinity.
///
/// Trail positions and step sizes are rounded this way so that `-0.5`
/// becomes `0` rather than `-1`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// One of the four moves a player can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed probing order used by hints and dead-end detection.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset in screen space (y grows downward).
    pub fn delta(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Position on the play field, in field pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            x: round_half_up(self.x),
            y: round_half_up(self.y),
        }
    }

    /// True when both points land on the same integer pixel.
    pub fn same_pixel(self, other: Point) -> bool {
        let a = self.rounded();
        let b = other.rounded();
        a.x == b.x && a.y == b.y
    }

    #[must_use]
    pub fn offset(self, direction: Direction, step: f64) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * step,
            y: self.y + dy * step,
        }
    }
}

/// An accepted move. `t` is milliseconds since the run started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub t: u64,
    pub dir: Direction,
}

/// Any move request, accepted or not. `ok` is 1 for accepted, 0 otherwise.
///
/// Field order and names are part of the run hash input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAttempt {
    pub t: u64,
    pub dir: Direction,
    pub ok: u8,
}

impl MoveAttempt {
    pub fn new(t: u64, dir: Direction, accepted: bool) -> Self {
        Self {
            t,
            dir,
            ok: u8::from(accepted),
        }
    }

    pub fn accepted(&self) -> bool {
        self.ok == 1
    }
}
