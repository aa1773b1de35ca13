use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake.
///
/// The tiles run from the head at the front to the tail at the back.  The
/// sequence is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    tiles: VecDeque<Position>,
}

impl Snake {
    /// Create the snake every session starts with:
    /// [`INITIAL_SNAKE`][consts::INITIAL_SNAKE]
    pub(crate) fn new() -> Snake {
        Snake::from_tiles(consts::INITIAL_SNAKE)
    }

    /// Create a snake from explicit tiles, head first.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` is empty.
    pub(crate) fn from_tiles<I: IntoIterator<Item = Position>>(tiles: I) -> Snake {
        let tiles = tiles.into_iter().collect::<VecDeque<_>>();
        assert!(!tiles.is_empty(), "a snake needs at least one tile");
        Snake { tiles }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        *self
            .tiles
            .front()
            .expect("snake should always have at least one tile")
    }

    /// Return the position of the snake's tail
    pub(crate) fn tail(&self) -> Position {
        *self
            .tiles
            .back()
            .expect("snake should always have at least one tile")
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.tiles.contains(&pos)
    }

    pub(crate) fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over the snake's tiles from head to tail
    pub(crate) fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().copied()
    }

    /// Add a new head.  The caller is responsible for checking that `pos` is
    /// adjacent to the current head and free.
    pub(super) fn push_head(&mut self, pos: Position) {
        self.tiles.push_front(pos);
    }

    /// Drop the tail tile, unless it is the only tile left
    pub(super) fn pop_tail(&mut self) {
        if self.tiles.len() > 1 {
            let _ = self.tiles.pop_back();
        }
    }
}
