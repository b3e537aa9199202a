mod collision;
mod direction;
mod food;
mod grid;
mod snake;
mod speed;
mod state;
pub(crate) use self::collision::Collision;
pub(crate) use self::direction::Direction;
pub(crate) use self::food::NoSpaceAvailable;
pub(crate) use self::grid::{Cell, Grid};
use self::food::place_food;
use self::snake::Snake;
use self::state::GameState;
use crate::config::GameConfig;
use crate::consts;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};
use std::fmt;
use std::time::{Duration, Instant};

/// A single game session: the snake, the food, and the score, on a fixed
/// grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Cell,
    /// Number of ticks since the food was last placed
    food_age: u32,
    state: GameState,
    ending: Option<Ending>,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        config: GameConfig,
        grid: Grid,
        mut rng: R,
    ) -> Result<Game<R>, NoSpaceAvailable> {
        let snake = Snake::new(grid.spawn(), Direction::Right);
        let food = place_food(&mut rng, &grid, &snake)?;
        let state = GameState::new(&config);
        log::info!(
            "New game on a {}x{} display; snake starts at {:?}",
            grid.display_size().width,
            grid.display_size().height,
            snake.head()
        );
        Ok(Game {
            rng,
            config,
            grid,
            snake,
            food,
            food_age: 0,
            state,
            ending: None,
        })
    }

    /// Put everything back the way it was at the start of the first game
    pub(crate) fn restart(&mut self) -> Result<(), NoSpaceAvailable> {
        self.snake = Snake::new(self.grid.spawn(), Direction::Right);
        self.state = GameState::new(&self.config);
        self.ending = None;
        self.relocate_food()?;
        log::info!("Game restarted");
        Ok(())
    }

    /// Advance the game by one step.  Returns `Some` if the game has ended.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<Ending> {
        if self.ending.is_some() {
            return self.ending;
        }
        self.state.update(now, &self.config);
        let cell_size = self.grid.cell_size();
        let ate = self.snake.next_head(cell_size) == self.food;
        self.snake.advance(cell_size, ate);
        if ate {
            if self.state.eat(&self.config) {
                log::info!(
                    "Reached level {} at score {}; speed is now {}",
                    self.state.level,
                    self.state.score,
                    self.state.speed
                );
            }
            if self.relocate_food().is_err() {
                return self.end(Ending::Exhausted);
            }
        }
        self.food_age += 1;
        if self.food_age >= self.config.food_refresh_ticks {
            log::debug!("Food at {:?} went stale", self.food);
            if self.relocate_food().is_err() {
                return self.end(Ending::Exhausted);
            }
        }
        if let Some(c) = collision::detect(&self.grid, &self.snake) {
            return self.end(Ending::Collision(c));
        }
        None
    }

    fn relocate_food(&mut self) -> Result<(), NoSpaceAvailable> {
        self.food = place_food(&mut self.rng, &self.grid, &self.snake)?;
        self.food_age = 0;
        log::trace!("Food placed at {:?}", self.food);
        Ok(())
    }
}

impl<R> Game<R> {
    /// Point the snake in `direction` for the next tick, unless that would
    /// reverse it
    pub(crate) fn turn(&mut self, direction: Direction) {
        if !self.snake.turn(direction) {
            log::trace!("Ignoring reversal to {direction:?}");
        }
    }

    /// Start a boost at `now` if one is available.  Returns `true` if the
    /// boost started.
    pub(crate) fn trigger_boost(&mut self, now: Instant) -> bool {
        self.state.trigger_boost(now, &self.config)
    }

    pub(crate) fn boost_enabled(&self) -> bool {
        self.config.boost.is_some()
    }

    /// Return the time to wait between ticks at the current speed
    pub(crate) fn tick_period(&self) -> Duration {
        self.state.tick_period()
    }

    pub(crate) fn score(&self) -> u32 {
        self.state.score
    }

    pub(crate) fn level(&self) -> u32 {
        self.state.level
    }

    fn end(&mut self, ending: Ending) -> Option<Ending> {
        log::info!(
            "Game over ({ending:?}) with score {} at level {}; snake length {}",
            self.state.score,
            self.state.level,
            self.snake.len()
        );
        self.ending = Some(ending);
        self.ending
    }

    fn status_line(&self) -> String {
        let mut s = format!(
            " Score: {}  Level: {}  Speed: {}",
            self.state.score, self.state.level, self.state.speed
        );
        if self.boost_enabled() {
            let boost = if self.state.boost.active() {
                "Active"
            } else if self.state.boost.cooling_down() {
                "Cooling down"
            } else {
                "Ready"
            };
            s.push_str("  Boost: ");
            s.push_str(boost);
        }
        s
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, arena_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(self.status_line(), consts::STATUS_BAR_STYLE).render(status_area, buf);

        let mut canvas = Canvas {
            area: arena_area,
            cell_size: self.grid.cell_size(),
            buf,
        };
        for wall in self.grid.walls() {
            canvas.fill_rect(wall, consts::WALL_SYMBOL, consts::WALL_STYLE);
        }
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        let snake_style = if self.state.boost.active() {
            consts::BOOSTED_SNAKE_STYLE
        } else {
            consts::SNAKE_STYLE
        };
        for &cell in self.snake.body() {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, snake_style);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if matches!(self.ending, Some(Ending::Collision(_))) {
            canvas.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.snake.head(), self.snake.head_symbol(), snake_style);
        }
    }
}

/// A view of the arena in which positions are display units relative to the
/// arena's top-left corner.  Nothing is drawn outside of `area`.
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    cell_size: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn put(&mut self, x: i32, y: i32, symbol: char, style: Style) {
        let Ok(x) = u16::try_from(i32::from(self.area.x) + x) else {
            return;
        };
        let Ok(y) = u16::try_from(i32::from(self.area.y) + y) else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let size = i32::from(self.cell_size);
        for dy in 0..size {
            for dx in 0..size {
                self.put(cell.x + dx, cell.y + dy, symbol, style);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, symbol: char, style: Style) {
        for pos in rect.positions() {
            self.put(i32::from(pos.x), i32::from(pos.y), symbol, style);
        }
    }
}

/// How a game came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    Collision(Collision),
    /// The snake has filled the playfield and there is nowhere left to place
    /// food
    Exhausted,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Collision(c) => write!(f, "{c}"),
            Ending::Exhausted => write!(f, "The snake fills the whole arena!"),
        }
    }
}
