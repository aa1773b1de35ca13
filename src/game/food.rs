use super::grid::Grid;
use super::snake::Snake;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;

/// Choose a tile for the next piece of food, uniformly at random among the
/// tiles not covered by `snake`.
///
/// Up to `attempts` random tiles are drawn from the whole grid, and the first
/// free one is used.  If every draw lands on the snake, the free tiles are
/// enumerated and one of them is chosen instead.  Returns `None` only if the
/// snake covers the entire grid.
pub(crate) fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    grid: Grid,
    attempts: u32,
) -> Option<Position> {
    if grid.area() == 0 {
        return None;
    }
    for _ in 0..attempts {
        let pos = Position {
            x: rng.random_range(0..grid.width),
            y: rng.random_range(0..grid.height),
        };
        if !grid.is_occupied(pos, snake) {
            return Some(pos);
        }
    }
    log::debug!("No free tile after {attempts} draws; scanning the grid");
    grid.positions()
        .filter(|&p| !grid.is_occupied(p, snake))
        .choose(rng)
}
