use super::direction::Direction;
use crate::config::SettingsError;
use rand::Rng;
use ratatui::layout::{Rect, Size};

/// A grid-aligned position in display units.  Coordinates are signed so that
/// a head which has run off the edge of the display can still be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell `cell_size` units away in `direction`
    pub(crate) fn step(self, direction: Direction, cell_size: u16) -> Cell {
        let (dx, dy) = direction.offset();
        let size = i32::from(cell_size);
        Cell::new(self.x + dx * size, self.y + dy * size)
    }
}

/// Geometry of the arena: the display, the walls around its edges, and the
/// playfield of whole cells inside them
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Size of the display in display units
    width: u16,
    height: u16,

    /// Size of a cell in display units
    cell_size: u16,

    /// Thickness of the walls in display units
    wall: u16,

    /// Number of cells across & down the playfield
    columns: u16,
    rows: u16,
}

impl Grid {
    /// Lay out a grid of cells `cell_size` units wide on a display of size
    /// `display`, walled off by `wall_thickness` cells on every side.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the playfield would hold fewer than two cells (one for
    /// the snake and one for the food) or would not contain the display's
    /// center.
    pub(crate) fn new(
        display: Size,
        cell_size: u16,
        wall_thickness: u16,
    ) -> Result<Grid, SettingsError> {
        let too_small = SettingsError::PlayfieldTooSmall {
            width: display.width,
            height: display.height,
            cell_size,
            wall_thickness,
        };
        if cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        let wall = cell_size
            .checked_mul(wall_thickness)
            .ok_or_else(|| too_small.clone())?;
        let both_walls = wall.checked_mul(2).ok_or_else(|| too_small.clone())?;
        let columns = display.width.saturating_sub(both_walls) / cell_size;
        let rows = display.height.saturating_sub(both_walls) / cell_size;
        let grid = Grid {
            width: display.width,
            height: display.height,
            cell_size,
            wall,
            columns,
            rows,
        };
        if u32::from(columns) * u32::from(rows) < 2 || !grid.contains(grid.spawn()) {
            return Err(too_small);
        }
        Ok(grid)
    }

    pub(crate) fn cell_size(&self) -> u16 {
        self.cell_size
    }

    pub(crate) fn display_size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Return the number of cells in the playfield
    pub(crate) fn capacity(&self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    /// Return the area inside the walls covered by whole cells
    pub(crate) fn playfield(&self) -> Rect {
        Rect::new(
            self.wall,
            self.wall,
            self.columns * self.cell_size,
            self.rows * self.cell_size,
        )
    }

    /// Test whether `cell` lies inside the playfield.  Everything else is
    /// either wall or beyond the edge of the display.
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        let field = self.playfield();
        let left = i32::from(field.x);
        let top = i32::from(field.y);
        (left..left + i32::from(field.width)).contains(&cell.x)
            && (top..top + i32::from(field.height)).contains(&cell.y)
    }

    /// Return the rectangles making up the walls: top, left, right, and
    /// bottom.  Any strip too narrow to hold a cell between the playfield and
    /// the far edges is counted as part of the right or bottom wall.
    pub(crate) fn walls(&self) -> [Rect; 4] {
        let field = self.playfield();
        let right = field.right();
        let bottom = field.bottom();
        [
            Rect::new(0, 0, self.width, field.y),
            Rect::new(0, 0, field.x, self.height),
            Rect::new(right, 0, self.width.saturating_sub(right), self.height),
            Rect::new(0, bottom, self.width, self.height.saturating_sub(bottom)),
        ]
    }

    /// Return the cell at which a new snake starts: the center of the display,
    /// aligned to the grid
    pub(crate) fn spawn(&self) -> Cell {
        let size = i32::from(self.cell_size);
        Cell::new(
            i32::from(self.width / 2) / size * size,
            i32::from(self.height / 2) / size * size,
        )
    }

    /// Return an iterator over every cell in the playfield, row by row
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + 'static {
        let grid = *self;
        (0..grid.rows).flat_map(move |row| (0..grid.columns).map(move |col| grid.cell_at(col, row)))
    }

    /// Return a uniformly random cell in the playfield
    pub(crate) fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        let col = rng.random_range(0..self.columns);
        let row = rng.random_range(0..self.rows);
        self.cell_at(col, row)
    }

    fn cell_at(&self, col: u16, row: u16) -> Cell {
        let size = i32::from(self.cell_size);
        let wall = i32::from(self.wall);
        Cell::new(wall + i32::from(col) * size, wall + i32::from(row) * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(100, 100), Direction::Right, 20, Cell::new(120, 100))]
    #[case(Cell::new(100, 100), Direction::Left, 20, Cell::new(80, 100))]
    #[case(Cell::new(100, 100), Direction::Up, 20, Cell::new(100, 80))]
    #[case(Cell::new(100, 100), Direction::Down, 20, Cell::new(100, 120))]
    #[case(Cell::new(0, 3), Direction::Left, 1, Cell::new(-1, 3))]
    fn test_step(
        #[case] cell: Cell,
        #[case] direction: Direction,
        #[case] cell_size: u16,
        #[case] r: Cell,
    ) {
        assert_eq!(cell.step(direction, cell_size), r);
    }

    #[test]
    fn layout() {
        let grid = Grid::new(Size::new(200, 140), 20, 1).unwrap();
        assert_eq!(grid.playfield(), Rect::new(20, 20, 160, 100));
        assert_eq!(grid.capacity(), 8 * 5);
        assert_eq!(grid.spawn(), Cell::new(100, 60));
        assert_eq!(
            grid.walls(),
            [
                Rect::new(0, 0, 200, 20),
                Rect::new(0, 0, 20, 140),
                Rect::new(180, 0, 20, 140),
                Rect::new(0, 120, 200, 20),
            ]
        );
    }

    #[test]
    fn leftover_strip_is_wall() {
        let grid = Grid::new(Size::new(25, 13), 2, 1).unwrap();
        assert_eq!(grid.playfield(), Rect::new(2, 2, 20, 8));
        assert_eq!(grid.walls()[2], Rect::new(22, 0, 3, 13));
        assert_eq!(grid.walls()[3], Rect::new(0, 10, 25, 3));
        assert!(grid.contains(Cell::new(20, 8)));
        assert!(!grid.contains(Cell::new(22, 8)));
        assert!(!grid.contains(Cell::new(20, 10)));
    }

    #[rstest]
    #[case(Cell::new(1, 1), true)]
    #[case(Cell::new(8, 3), true)]
    #[case(Cell::new(0, 1), false)]
    #[case(Cell::new(1, 0), false)]
    #[case(Cell::new(9, 3), false)]
    #[case(Cell::new(8, 4), false)]
    #[case(Cell::new(-1, 2), false)]
    #[case(Cell::new(4, 17), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        let grid = Grid::new(Size::new(10, 5), 1, 1).unwrap();
        assert_eq!(grid.contains(cell), inside);
    }

    #[test]
    fn no_walls() {
        let grid = Grid::new(Size::new(6, 4), 1, 0).unwrap();
        assert_eq!(grid.playfield(), Rect::new(0, 0, 6, 4));
        assert!(grid.walls().iter().all(|r| r.is_empty()));
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(!grid.contains(Cell::new(6, 0)));
    }

    #[test]
    fn cells() {
        let grid = Grid::new(Size::new(5, 4), 1, 1).unwrap();
        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            [
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(3, 1),
                Cell::new(1, 2),
                Cell::new(2, 2),
                Cell::new(3, 2),
            ]
        );
    }

    #[test]
    fn random_cells_are_in_playfield() {
        let grid = Grid::new(Size::new(47, 31), 3, 2).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell), "{cell:?} outside playfield");
            assert_eq!(cell.x % 3, 0, "{cell:?} not aligned");
            assert_eq!(cell.y % 3, 0, "{cell:?} not aligned");
        }
    }

    #[rstest]
    #[case(Size::new(4, 3), 1, 2)]
    #[case(Size::new(3, 3), 1, 1)]
    #[case(Size::new(80, 24), 1, 12)]
    #[case(Size::new(80, 24), 30, 0)]
    #[case(Size::new(80, 24), 1000, 1000)]
    fn too_small(#[case] display: Size, #[case] cell_size: u16, #[case] wall_thickness: u16) {
        assert_eq!(
            Grid::new(display, cell_size, wall_thickness),
            Err(SettingsError::PlayfieldTooSmall {
                width: display.width,
                height: display.height,
                cell_size,
                wall_thickness,
            })
        );
    }

    #[test]
    fn zero_cell_size() {
        assert_eq!(
            Grid::new(Size::new(80, 24), 0, 1),
            Err(SettingsError::ZeroCellSize)
        );
    }
}
