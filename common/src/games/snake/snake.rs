use std::collections::VecDeque;

use super::types::{Cell, Direction};

/// Head-first list of body segments. Movement is split into `advance`, then
/// `shrink` unless the snake just ate; bounds and self-collision are judged by
/// the game state afterwards.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    step: i32,
}

impl Snake {
    /// All `length` segments start stacked on `start`; they fan out over the
    /// first ticks.
    pub fn new(start: Cell, length: usize, step: i32) -> Self {
        let length = length.max(1);
        Self {
            body: std::iter::repeat_n(start, length).collect(),
            step,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = Cell>, step: i32) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty());
        Self {
            body,
            step,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    /// True when the head overlaps any other segment.
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn advance(&mut self, direction: Direction) -> Cell {
        let new_head = self.head().offset(direction, self.step);
        self.body.push_front(new_head);
        new_head
    }

    pub fn shrink(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}
