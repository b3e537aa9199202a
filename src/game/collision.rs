use super::grid::Grid;
use super::snake::Snake;
use std::fmt;

/// What the snake's head ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head left the playfield, either into a wall or past the edge of
    /// the display
    Wall,

    /// The head ran into another part of the snake
    Body,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "You hit the wall!"),
            Collision::Body => write!(f, "You bit yourself!"),
        }
    }
}

/// Check the snake's freshly-moved head against the walls and the rest of
/// the snake
pub(super) fn detect(grid: &Grid, snake: &Snake) -> Option<Collision> {
    if !grid.contains(snake.head()) {
        Some(Collision::Wall)
    } else if snake.bites_itself() {
        Some(Collision::Body)
    } else {
        None
    }
}
