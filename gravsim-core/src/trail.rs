//! Bounded position history used to draw orbit trails

use crate::vector::Vector2D;
use std::collections::VecDeque;

/// Maximum number of positions kept per body
pub const MAX_TRAIL_LENGTH: usize = 1000;

/// Sliding window over a body's most recent positions, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<Vector2D>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRAIL_LENGTH)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, evicting the oldest one first when full
    pub fn record(&mut self, pos: Vector2D) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(pos);
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

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    pub fn oldest(&self) -> Option<Vector2D> {
        self.points.front().copied()
    }

    pub fn latest(&self) -> Option<Vector2D> {
        self.points.back().copied()
    }

    /// Positions in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &Vector2D> + '_ {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new()
    }
}
