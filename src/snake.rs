use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbor one step along `direction`, wrapped into bounds.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Mutable snake state: body segments, heading, and growth target.
///
/// `body[0]` is the head. The snake grows by raising `target_length`;
/// the next `advance` then keeps the tail instead of popping it, so
/// `body.len() == target_length` holds again after every completed step.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    target_length: usize,
    direction: Direction,
    last_tail: Option<Position>,
    start: Position,
}

impl Snake {
    /// Creates a one-cell snake at `start`, heading right.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            target_length: 1,
            direction: Direction::Right,
            last_tail: None,
            start,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length matches the given segments; `start` is where a
    /// later `reset` will re-center the snake.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction, start: Position) -> Self {
        debug_assert!(!segments.is_empty());

        let body = VecDeque::from(segments);
        Self {
            target_length: body.len(),
            body,
            direction,
            last_tail: None,
            start,
        }
    }

    /// Applies a requested heading, ignoring direct reversals.
    ///
    /// This is the sole direction-validity rule: a request equal to the
    /// opposite of the current heading is dropped silently; everything
    /// else, including a repeat of the current heading, is accepted.
    pub fn update_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Raises the growth target by one cell.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Moves the head one cell along the current heading, wrapping at the
    /// grid edges.
    ///
    /// The vacated tail cell is recorded in [`last_tail`](Self::last_tail)
    /// when the body is at target length, or cleared while growing.
    pub fn advance(&mut self, bounds: GridSize) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next_head = self.head().stepped(self.direction, bounds);
        self.body.push_front(next_head);

        self.last_tail = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Returns true if the head overlaps any non-head segment.
    ///
    /// A one-cell snake can never collide with itself.
    #[must_use]
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.target_length > 1 && self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Reinitializes to the start state: one cell at the start position,
    /// heading right. Idempotent.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_front(self.start);
        self.target_length = 1;
        self.direction = Direction::Right;
        self.last_tail = None;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true between ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the growth target in cells.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell vacated by the last advance, if the tail moved.
    #[must_use]
    pub fn last_tail(&self) -> Option<Position> {
        self.last_tail
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
