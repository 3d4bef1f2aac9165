use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// No free cell exists for food placement.
///
/// The legacy behavior was to sample-and-retry forever, which hangs once
/// the body covers the board. Placement reports this state explicitly and
/// leaves the policy to the caller.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on the {width}x{height} board")]
pub struct BoardFull {
    pub width: u16,
    pub height: u16,
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a uniformly random cell not occupied by the snake.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, BoardFull> {
        free_cell(rng, bounds, snake).map(Self::at)
    }
}

/// Draws a uniformly random cell from the complement of the snake's body.
///
/// The complement is materialized so the cost is bounded by the grid size
/// even when almost every cell is occupied.
pub fn free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, BoardFull> {
    let candidates: Vec<Position> = bounds
        .all_cells()
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    if candidates.is_empty() {
        return Err(BoardFull {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
