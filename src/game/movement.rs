use super::grid::Grid;
use super::heading::Heading;
use super::snake::Snake;
use ratatui::layout::Position;
use serde::Deserialize;

/// The result of moving the snake one tile
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake moved.  If `ate_food` is true, it grew by one tile and the
    /// caller must place new food and bump the score.
    Continue { ate_food: bool },

    /// The move was fatal.  The snake has not been changed.
    GameOver(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The edge of the grid
    Wall,

    /// Its own body
    Body,
}

/// How to treat a move into the tile currently occupied by the snake's tail
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TailPolicy {
    /// The tail tile counts as occupied, even though the tail would leave it
    /// during the same move
    #[default]
    Strict,

    /// The tail tile counts as free, since the tail always moves on a tick
    /// in which no food is eaten
    Vacating,
}

/// Advance `snake` one tile in direction `heading`.
///
/// A move off the grid is a [`Collision::Wall`], which takes precedence over
/// a move onto the snake's own body.  The body check is made against the
/// tiles as they were before the move, so under [`TailPolicy::Strict`] the
/// tail tile is fatal too.
pub(crate) fn step(
    snake: &mut Snake,
    food: Position,
    heading: Heading,
    grid: Grid,
    tail_policy: TailPolicy,
) -> Outcome {
    let Some(new_head) = grid.neighbor(snake.head(), heading) else {
        return Outcome::GameOver(Collision::Wall);
    };
    let hits_body = match tail_policy {
        TailPolicy::Strict => grid.is_occupied(new_head, snake),
        TailPolicy::Vacating => {
            new_head != snake.tail() && grid.is_occupied(new_head, snake)
        }
    };
    if hits_body {
        return Outcome::GameOver(Collision::Body);
    }
    let ate_food = new_head == food;
    snake.push_head(new_head);
    if !ate_food {
        snake.pop_tail();
    }
    Outcome::Continue { ate_food }
}
