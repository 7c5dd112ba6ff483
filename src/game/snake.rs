use std::collections::VecDeque;

use static_assertions::const_assert;

use crate::basic::{CellPoint, Heading};

pub struct Snake {
    /// Head at the front, tail at the back
    segments: VecDeque<CellPoint>,
    heading: Heading,
}

impl Snake {
    /// A snake needs a neck for the no-reversal rule to mean anything
    pub const MIN_LEN: usize = 2;

    /// Lay out `len` segments in a straight line behind `head`,
    /// facing `heading`
    pub fn new(head: CellPoint, heading: Heading, len: usize) -> Self {
        assert!(len >= Self::MIN_LEN, "snake of length {} is too short", len);
        let segments = (0..len as i32)
            .map(|i| head.translate(-heading, i))
            .collect();
        Self { segments, heading }
    }

    pub fn head(&self) -> CellPoint {
        self.segments[0]
    }

    pub fn tail(&self) -> CellPoint {
        self.segments[self.segments.len() - 1]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Head first
    pub fn segments(&self) -> impl Iterator<Item = CellPoint> + '_ {
        self.segments.iter().copied()
    }

    /// Everything except the head
    pub fn body(&self) -> impl Iterator<Item = CellPoint> + '_ {
        self.segments.iter().skip(1).copied()
    }

    #[cfg(test)]
    pub fn occupies(&self, point: CellPoint) -> bool {
        self.segments.contains(&point)
    }

    /// Returns false and keeps the current heading if `heading` would
    /// turn the snake back onto its own neck
    pub fn change_heading(&mut self, heading: Heading) -> bool {
        if heading.is_reverse_of(self.heading) {
            return false;
        }
        self.heading = heading;
        true
    }

    /// Each segment moves into the cell of the one in front of it and
    /// the head moves one cell forward
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.heading);
        self.segments.pop_back();
        self.segments.push_front(new_head);
    }

    /// The new segment starts on top of the tail and separates from it
    /// on the next advance
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push_back(tail);
    }
}

const_assert!(Snake::MIN_LEN >= 2);
