use super::heading::Heading;
use super::snake::Snake;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The playing field: a `width` × `height` grid of tiles with the origin in
/// the top-left corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub(crate) fn is_occupied(self, pos: Position, snake: &Snake) -> bool {
        snake.contains(pos)
    }

    /// The tile one step from `pos` in direction `heading`, if it is on the
    /// grid
    pub(crate) fn neighbor(self, pos: Position, heading: Heading) -> Option<Position> {
        heading.advance(pos, self)
    }

    /// Whether the tile one step from `pos` in direction `heading` is on the
    /// grid and not covered by `snake`
    pub(crate) fn is_safe(self, pos: Position, heading: Heading, snake: &Snake) -> bool {
        self.neighbor(pos, heading)
            .is_some_and(|p| !self.is_occupied(p, snake))
    }

    /// Total number of tiles
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every tile in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(29, 19), true)]
    #[case(Position::new(30, 5), false)]
    #[case(Position::new(5, 20), false)]
    #[case(Position::new(30, 20), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Grid::new(30, 20).contains(pos), inside);
    }

    #[test]
    fn occupancy() {
        let snake = Snake::from_tiles([Position::new(5, 5), Position::new(4, 5)]);
        let grid = Grid::new(30, 20);
        assert!(grid.is_occupied(Position::new(4, 5), &snake));
        assert!(!grid.is_occupied(Position::new(3, 5), &snake));
    }

    #[test]
    fn safety() {
        let snake = Snake::from_tiles([Position::new(0, 1), Position::new(1, 1)]);
        let grid = Grid::new(4, 4);
        assert!(!grid.is_safe(snake.head(), Heading::Left, &snake));
        assert!(!grid.is_safe(snake.head(), Heading::Right, &snake));
        assert!(grid.is_safe(snake.head(), Heading::Up, &snake));
        assert!(grid.is_safe(snake.head(), Heading::Down, &snake));
    }

    #[test]
    fn positions_cover_grid() {
        let grid = Grid::new(3, 2);
        let all = grid.positions().collect::<Vec<_>>();
        assert_eq!(all.len(), grid.area());
        assert_eq!(all.first(), Some(&Position::new(0, 0)));
        assert_eq!(all.get(1), Some(&Position::new(1, 0)));
        assert_eq!(all.last(), Some(&Position::new(2, 1)));
    }
}
