use std::collections::{HashSet, VecDeque};

use crate::config::GridSize;
use crate::error::SnakeError;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a head that steps off the grid is still
/// representable and can be reported as a wall collision.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Body of a freshly started snake, head first.
pub const START_SEGMENTS: [Position; 3] = [
    Position::new(2, 0),
    Position::new(1, 0),
    Position::new(0, 0),
];

/// Heading of a freshly started snake.
pub const START_DIRECTION: Direction = Direction::Right;

/// Snake body plus the committed and pending headings.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates the three-segment starting snake in the top-left corner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(START_SEGMENTS.to_vec()),
            direction: START_DIRECTION,
            pending_direction: START_DIRECTION,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    pub fn from_segments(
        segments: Vec<Position>,
        direction: Direction,
    ) -> Result<Self, SnakeError> {
        if segments.is_empty() {
            return Err(SnakeError::EmptyBody);
        }

        Ok(Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        })
    }

    /// Commits the pending direction and advances one cell.
    ///
    /// The body length is unchanged: the new head is pushed and the tail popped.
    pub fn move_forward(&mut self) {
        self.direction = self.pending_direction;

        let Some(head) = self.head() else {
            return;
        };

        self.body.push_front(head.offset(self.direction));
        let _ = self.body.pop_back();
    }

    /// Duplicates the tail so the next move leaves the snake one cell longer.
    pub fn grow(&mut self) {
        if let Some(tail) = self.body.back().copied() {
            self.body.push_back(tail);
        }
    }

    /// Buffers a heading for the next move.
    ///
    /// A direct reversal of the committed direction is dropped. Repeated
    /// requests between moves overwrite each other.
    pub fn request_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = direction;
        }
    }

    /// Buffers a heading given by name; unknown names are ignored.
    pub fn request_direction_str(&mut self, name: &str) {
        if let Ok(direction) = name.parse() {
            self.request_direction(direction);
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// Returns the last body segment.
    #[must_use]
    pub fn tail(&self) -> Option<Position> {
        self.body.back().copied()
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the set of cells covered by the body.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next move will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> + Clone {
        self.body.iter()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
