//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default number of display units along each side of a cell
pub(crate) const DEFAULT_CELL_SIZE: u16 = 1;

/// Default thickness of the wall around the arena, in cells
pub(crate) const DEFAULT_WALL_THICKNESS: u16 = 1;

/// Default number of ticks per second at level 1
pub(crate) const DEFAULT_BASE_SPEED: u32 = 10;

/// Default number of ticks per second added for each level gained
pub(crate) const DEFAULT_SPEED_INCREMENT: u32 = 2;

/// Default number of points awarded per food eaten
pub(crate) const DEFAULT_POINTS_PER_FOOD: u32 = 1;

/// Default number of points needed to gain a level
pub(crate) const DEFAULT_POINTS_PER_LEVEL: u32 = 2;

/// Default number of ticks per second added while boosting
pub(crate) const DEFAULT_BOOST_SPEED: u32 = 10;

/// Default length of a boost, in milliseconds
pub(crate) const DEFAULT_BOOST_DURATION_MS: u64 = 5000;

/// Default time from triggering a boost until another can be triggered, in
/// milliseconds
pub(crate) const DEFAULT_COOLDOWN_DURATION_MS: u64 = 10000;

/// Default number of ticks after which uneaten food is moved elsewhere
pub(crate) const DEFAULT_FOOD_REFRESH_TICKS: u32 = 100;

/// Number of random cells to try when placing food before falling back to
/// scanning the whole arena for a free cell
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for walls
pub(crate) const WALL_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the snake while a boost is active
pub(crate) const BOOSTED_SNAKE_STYLE: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for walls
pub(crate) const WALL_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
