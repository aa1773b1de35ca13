//! The autopilot: a greedy, one-step-lookahead steering heuristic
use super::grid::Grid;
use super::heading::Heading;
use super::snake::Snake;
use ratatui::layout::Position;

/// Pick a heading that moves the snake towards `food`.
///
/// The horizontal distance is closed first, then the vertical.  If that move
/// would leave the grid or hit the snake, the first safe heading in
/// [`Heading::iter()`] order is used instead.  If no heading is safe, the
/// greedy choice is returned anyway and the snake will die on the next step.
pub(crate) fn choose_heading(snake: &Snake, food: Position, grid: Grid) -> Heading {
    let head = snake.head();
    let greedy = if food.x > head.x {
        Heading::Right
    } else if food.x < head.x {
        Heading::Left
    } else if food.y > head.y {
        Heading::Down
    } else {
        Heading::Up
    };
    if grid.is_safe(head, greedy, snake) {
        return greedy;
    }
    Heading::iter()
        .find(|&h| grid.is_safe(head, h, snake))
        .unwrap_or(greedy)
}
