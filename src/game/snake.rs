use super::direction::Direction;
use super::grid::Cell;
use crate::consts;
use std::collections::VecDeque;

/// The snake: where it is and which way it is going
///
/// The snake occupies `head` followed by every cell of `body`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the snake, starting from the cell just
    /// behind the head and ending with the tail
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake will move on the next tick
    pub(super) direction: Direction,

    /// The direction in which the snake moved on the last tick.  Turns are
    /// checked against this rather than `direction` so that two quick turns
    /// between ticks can't double the snake back onto its neck.
    pub(super) heading: Direction,
}

impl Snake {
    /// Create a new one-cell snake at `head` facing in `direction`
    pub(super) fn new(head: Cell, direction: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            direction,
            heading: direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        }
    }

    /// Return the positions of the cells behind the head
    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Return every cell of the snake, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Return the number of cells in the snake
    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Test whether any part of the snake is at `cell`
    pub(super) fn occupies(&self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Change the snake's direction to `direction` unless that would reverse
    /// it.  Returns `false` if the turn was rejected.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.heading.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Return where the head will be after the next move
    pub(super) fn next_head(&self, cell_size: u16) -> Cell {
        self.head.step(self.direction, cell_size)
    }

    /// Move the snake forwards one cell.  If `grow` is true, the tail stays
    /// where it is, lengthening the snake by one.
    pub(super) fn advance(&mut self, cell_size: u16, grow: bool) {
        let next = self.next_head(cell_size);
        self.body.push_front(self.head);
        self.head = next;
        self.heading = self.direction;
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Test whether the head has run into the rest of the snake
    pub(super) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn advance_single_cell() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right);
        snake.advance(20, false);
        assert_eq!(snake.cells().collect::<Vec<_>>(), [Cell::new(120, 100)]);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_and_grow() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Down);
        snake.advance(1, true);
        snake.advance(1, true);
        snake.advance(1, false);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(5, 8), Cell::new(5, 7), Cell::new(5, 6)]
        );
        assert_eq!(snake.len(), 3);
    }

    #[rstest]
    #[case(Direction::Right, Direction::Left, false)]
    #[case(Direction::Right, Direction::Up, true)]
    #[case(Direction::Right, Direction::Down, true)]
    #[case(Direction::Right, Direction::Right, true)]
    #[case(Direction::Up, Direction::Down, false)]
    #[case(Direction::Down, Direction::Up, false)]
    #[case(Direction::Left, Direction::Right, false)]
    #[case(Direction::Left, Direction::Up, true)]
    fn test_turn(#[case] current: Direction, #[case] requested: Direction, #[case] ok: bool) {
        let mut snake = Snake::new(Cell::new(5, 5), current);
        assert_eq!(snake.turn(requested), ok);
        if ok {
            assert_eq!(snake.direction, requested);
        } else {
            assert_eq!(snake.direction, current);
        }
    }

    #[test]
    fn double_turn_cannot_reverse() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        assert!(snake.turn(Direction::Up));
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction, Direction::Up);
        snake.advance(1, false);
        assert!(snake.turn(Direction::Left));
    }

    #[test]
    fn head_symbol_follows_heading() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_RIGHT_SYMBOL);
        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_RIGHT_SYMBOL);
        snake.advance(1, false);
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_UP_SYMBOL);
    }

    #[test]
    fn occupies() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.body = VecDeque::from([Cell::new(4, 5), Cell::new(3, 5)]);
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(3, 5)));
        assert!(!snake.occupies(Cell::new(6, 5)));
        assert!(!snake.bites_itself());
    }
}
