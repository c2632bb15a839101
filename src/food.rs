use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Strategy that chooses where the next food appears.
pub trait FoodPlacement {
    /// Picks a cell inside `grid` that is not in `occupied`.
    ///
    /// Returns `None` when every cell is occupied.
    fn place(&mut self, grid: GridSize, occupied: &HashSet<Position>) -> Option<Position>;
}

/// Uniform random placement over the free cells.
#[derive(Debug, Clone)]
pub struct RandomPlacement<R> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPlacement<StdRng> {
    /// Creates a reproducible placement sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FoodPlacement for RandomPlacement<R> {
    fn place(&mut self, grid: GridSize, occupied: &HashSet<Position>) -> Option<Position> {
        spawn_position(&mut self.rng, grid, occupied)
    }
}

/// Picks a free position uniformly, scanning the grid row by row.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(occupied.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
