use bloomia_data::Point;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Accepted destinations rounded to whole pixels, oldest first.
///
/// Holds at most `capacity` points; pushing past it evicts from the front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<Point>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn starting_at(start: Point, capacity: usize) -> Self {
        let mut trail = Self::new(capacity);
        trail.push(start);
        trail
    }

    pub fn push(&mut self, point: Point) {
        self.points.push_back(point.rounded());
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}
