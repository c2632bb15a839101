//! Stateless collision checks over a snapshot of the board.
//!
//! All checks run after the snake has moved, against the new head.

use crate::config::GridSize;
use crate::snake::Position;

/// What the head ran into on the latest move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBody,
    Food,
}

/// Returns true when `head` lies outside `[0, size)` on either axis.
#[must_use]
pub fn is_wall_collision(head: Position, grid: GridSize) -> bool {
    !head.is_within_bounds(grid)
}

/// Returns true when the first segment equals any later segment.
#[must_use]
pub fn is_self_collision<'a, I>(body: I) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    let mut segments = body.into_iter();
    let Some(head) = segments.next() else {
        return false;
    };

    segments.any(|segment| segment == head)
}

#[must_use]
pub fn is_food_collision(head: Position, food: Position) -> bool {
    head == food
}

/// Classifies the head of `body`, checking wall, then self, then food.
///
/// An off-grid head can never equal an on-grid segment, so a wall hit is
/// always reported as `Wall`.
#[must_use]
pub fn detect<'a, I>(body: I, grid: GridSize, food: Position) -> Option<Collision>
where
    I: IntoIterator<Item = &'a Position>,
    I::IntoIter: Clone,
{
    let segments = body.into_iter();
    let head = *segments.clone().next()?;

    if is_wall_collision(head, grid) {
        return Some(Collision::Wall);
    }

    if is_self_collision(segments) {
        return Some(Collision::SelfBody);
    }

    is_food_collision(head, food).then_some(Collision::Food)
}
