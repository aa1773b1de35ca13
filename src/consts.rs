//! Assorted constants & hard-coded configuration
use crate::game::{Grid, Heading};
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::num::NonZeroU32;

/// Playing field size when the configuration does not give one
pub(crate) const DEFAULT_GRID: Grid = Grid::new(30, 20);

/// Smallest playing field that leaves the starting snake a tile to move into
pub(crate) const MIN_GRID: Grid = Grid::new(7, 6);

/// Default number of terminal columns per tile.  Terminal cells are about
/// twice as tall as they are wide, so two columns make a roughly square tile.
pub(crate) const DEFAULT_TILE_WIDTH: u16 = 2;

pub(crate) const DEFAULT_TICKS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

pub(crate) const MAX_TICKS_PER_SECOND: u32 = 1000;

/// Random draws made when placing food before scanning for a free tile
pub(crate) const DEFAULT_SPAWN_ATTEMPTS: u32 = 64;

/// The snake at the start of every session, head first
pub(crate) const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 5, y: 5 },
    Position { x: 4, y: 5 },
    Position { x: 3, y: 5 },
];

pub(crate) const INITIAL_HEADING: Heading = Heading::Right;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window, unless fullscreen mode is on.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '@';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the "AI" in the title banner while the autopilot is engaged
pub(crate) const AUTOPILOT_ON_STYLE: Style = Style::new()
    .fg(Color::LightCyan)
    .add_modifier(Modifier::BOLD);

/// Style for the "AI" in the title banner while steering manually
pub(crate) const AUTOPILOT_OFF_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the high score in the score bar and on the game-over popup
pub(crate) const HIGH_SCORE_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the "GAME OVER" heading
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
