#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Return the displacement of one step in this direction, in cells
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Right)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    fn reverse_cancels_offset(#[case] d: Direction) {
        let (dx, dy) = d.offset();
        let (rx, ry) = d.reverse().offset();
        assert_eq!((dx + rx, dy + ry), (0, 0));
        assert_eq!(dx.abs() + dy.abs(), 1);
        assert_eq!(d.reverse().reverse(), d);
    }
}
