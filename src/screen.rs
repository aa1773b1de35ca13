use crate::consts;
use crate::game::{Collision, Ending, Pilot, Session, SessionState};
use crate::logo::Logo;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Widget},
};

/// Everything drawn on the terminal for the current state of a [`Session`]
#[derive(Debug)]
pub(crate) struct Screen<'a, R> {
    pub(crate) session: &'a Session<R>,

    /// Number of terminal columns per tile
    pub(crate) tile_width: u16,

    pub(crate) fullscreen: bool,
}

impl<R> Screen<'_, R> {
    const POPUP_WIDTH: u16 = 32;
    const POPUP_HEIGHT: u16 = 7;

    fn render_title(&self, display: Rect, buf: &mut Buffer) {
        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(display);
        Logo {
            autopilot: self.session.pilot() == Pilot::Autopilot,
        }
        .render(
            Rect {
                y: display.y.saturating_add(2),
                height: Logo::HEIGHT,
                ..logo_area
            },
            buf,
        );
        let autopilot = format!("Autopilot ({})", pilot_label(self.session.pilot()));
        let text = Text::from_iter([
            Line::from_iter([
                Span::raw("Steer with "),
                Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
                Span::raw(", "),
                Span::styled("h j k l", consts::KEY_STYLE),
                Span::raw(", or "),
                Span::styled("a s w d", consts::KEY_STYLE),
            ]),
            Line::from("Eat the food, but don't hit the walls or yourself!"),
            Line::default(),
            Line::from_iter([
                Span::raw("High score: "),
                Span::styled(self.session.high_score().to_string(), consts::HIGH_SCORE_STYLE),
            ]),
            Line::default(),
            key_hints(&[
                ("Space", "Start"),
                ("i", autopilot.as_str()),
                ("f", "Fullscreen"),
                ("q", "Quit"),
            ]),
        ])
        .centered();
        let top = Logo::HEIGHT.saturating_add(4);
        text.render(
            Rect {
                y: display.y.saturating_add(top),
                height: display.height.saturating_sub(top),
                ..display
            },
            buf,
        );
    }

    fn render_board(&self, display: Rect, buf: &mut Buffer) {
        let [score_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::from_iter([
            Span::raw(format!(" Score: {}", self.session.score())),
            Span::raw("   High score: "),
            Span::styled(self.session.high_score().to_string(), consts::HIGH_SCORE_STYLE),
            Span::raw("   Pilot: "),
            Span::raw(pilot_label(self.session.pilot())),
            Span::raw(format!("   Length: {}", self.session.snake().len())),
        ])
        .style(consts::SCORE_BAR_STYLE)
        .render(score_area, buf);

        let grid = self.session.grid();
        let block_size = Size {
            width: grid
                .width
                .saturating_mul(self.tile_width)
                .saturating_add(2),
            height: grid.height.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            tile_width: self.tile_width,
            buf,
        };
        let snake = self.session.snake();
        for pos in snake.tiles().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.session.food() {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // The head goes last so that a collision is drawn over whatever was
        // hit
        if matches!(
            self.session.state(),
            SessionState::GameOver(Ending::Collision(_))
        ) {
            canvas.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(snake.head(), consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_STYLE);
        }

        if self.session.playing() {
            let mut hints = key_hints(&[
                ("i", "Toggle autopilot"),
                ("f", "Fullscreen"),
                ("q", "Quit"),
            ]);
            hints.spans.insert(0, Span::raw(" "));
            hints.render(hint_area, buf);
        }
    }

    fn render_game_over(&self, ending: Ending, display: Rect, buf: &mut Buffer) {
        let popup_area = center_rect(
            display,
            Size {
                width: Self::POPUP_WIDTH,
                height: Self::POPUP_HEIGHT,
            },
        );
        Clear.render(popup_area, buf);
        let block = Block::bordered().title(
            Line::styled(" GAME OVER ", consts::GAME_OVER_STYLE).centered(),
        );
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);
        let reason = match ending {
            Ending::Collision(Collision::Wall) => "You hit a wall!",
            Ending::Collision(Collision::Body) => "You ran into yourself!",
            Ending::BoardFilled => "You filled the board!",
        };
        Text::from_iter([
            Line::from(reason),
            Line::default(),
            Line::from(format!("Score: {}", self.session.score())),
            Line::from_iter([
                Span::raw("High score: "),
                Span::styled(self.session.high_score().to_string(), consts::HIGH_SCORE_STYLE),
            ]),
            key_hints(&[("r", "Restart"), ("q", "Quit")]),
        ])
        .centered()
        .render(inner, buf);
    }
}

impl<R> Widget for Screen<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area, self.fullscreen);
        match self.session.state() {
            SessionState::Start => self.render_title(display, buf),
            SessionState::Playing => self.render_board(display, buf),
            SessionState::GameOver(ending) => {
                self.render_board(display, buf);
                self.render_game_over(ending, display, buf);
            }
        }
    }
}

fn pilot_label(pilot: Pilot) -> &'static str {
    match pilot {
        Pilot::Manual => "manual",
        Pilot::Autopilot => "autopilot",
    }
}

/// Render a list of key bindings as `key: action` pairs with the keys
/// highlighted
fn key_hints<'a>(pairs: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (i, &(key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(key, consts::KEY_STYLE));
        spans.push(Span::raw(format!(": {action}")));
    }
    Line::from(spans)
}

/// Draws tiles of the playing field into a region of a buffer.  Each tile is
/// `tile_width` cells wide, with the glyph in the leftmost one.
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    tile_width: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(self.tile_width)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for dx in 0..self.tile_width {
            let Some(cx) = x.checked_add(dx) else {
                return;
            };
            if !self.area.contains(Position::new(cx, y)) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((cx, y)) {
                cell.set_char(if dx == 0 { symbol } else { ' ' });
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
