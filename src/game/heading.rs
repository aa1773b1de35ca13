use super::grid::Grid;
use enum_map::Enum;
use ratatui::layout::Position;

/// Direction of travel.  The declaration order is the order in which the
/// autopilot falls back through headings, so it must stay Up, Down, Left,
/// Right.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub(crate) fn iter() -> impl Iterator<Item = Heading> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Unit displacement `(dx, dy)` for this heading.  `y` grows downwards.
    pub(crate) fn delta(self) -> (i8, i8) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// Return the tile one step from `pos` in this heading, or `None` if that
    /// tile lies outside `grid`.
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let (dx, dy) = self.delta();
        let x = pos.x.checked_add_signed(dx.into())?;
        let y = pos.y.checked_add_signed(dy.into())?;
        let next = Position { x, y };
        grid.contains(next).then_some(next)
    }

    pub(crate) fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}
