use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use thiserror::Error;

/// Every cell of the playfield is taken up by the snake
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("no free cell is left in the arena for food")]
pub(crate) struct NoSpaceAvailable;

/// Choose a cell for food that is inside the playfield and not occupied by
/// the snake.
///
/// Random cells are tried first; if none of the first
/// [`FOOD_PLACEMENT_ATTEMPTS`][consts::FOOD_PLACEMENT_ATTEMPTS] is free, a
/// free cell is chosen from a scan of the whole playfield.
pub(super) fn place_food<R: Rng>(
    rng: &mut R,
    grid: &Grid,
    snake: &Snake,
) -> Result<Cell, NoSpaceAvailable> {
    for _ in 0..consts::FOOD_PLACEMENT_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !snake.occupies(cell) {
            return Ok(cell);
        }
    }
    log::debug!(
        "No free cell found after {} random picks; snake covers {} of {} cells",
        consts::FOOD_PLACEMENT_ATTEMPTS,
        snake.len(),
        grid.capacity()
    );
    grid.cells()
        .filter(|&cell| !snake.occupies(cell))
        .choose(rng)
        .ok_or(NoSpaceAvailable)
}
