use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
};

/// The "AI Snake" banner on the title screen.  The "AI" half is lit while the
/// autopilot is engaged and dimmed otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo {
    pub(crate) autopilot: bool,
}

impl Logo {
    const AI_WIDTH: u16 = 13;
    const SNAKE_WIDTH: u16 = 28;
    pub(crate) const HEIGHT: u16 = 5;
    pub(crate) const WIDTH: u16 = Self::AI_WIDTH + Self::SNAKE_WIDTH;

    /// The banner's pieces from left to right, each with its width and style
    fn parts(self) -> [(&'static [&'static str], u16, Style); 2] {
        let ai_style = if self.autopilot {
            consts::AUTOPILOT_ON_STYLE
        } else {
            consts::AUTOPILOT_OFF_STYLE
        };
        [
            (AI, Self::AI_WIDTH, ai_style),
            (SNAKE, Self::SNAKE_WIDTH, consts::SNAKE_STYLE),
        ]
    }
}

#[rustfmt::skip]
static AI: &[&str] = &[
     "    _    ___ ",
    r"   / \  |_ _|",
    r"  / _ \  | | ",
    r" / ___ \ | | ",
    r"/_/   \_\___|",
];

#[rustfmt::skip]
static SNAKE: &[&str] = &[
     " ____              _        ",
     "/ ___| _ __   __ _| | _____ ",
    r"\___ \| '_ \ / _` | |/ / _ \",
     " ___) | | | | (_| |   <  __/",
    r"|____/|_| |_|\__,_|_|\_\___|",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height.min(Self::HEIGHT);
        let mut x = area.x;
        for (lines, width, style) in self.parts() {
            let width = width.min(area.right().saturating_sub(x));
            if width == 0 || height == 0 {
                break;
            }
            for (y, &line) in (area.y..area.y.saturating_add(height)).zip(lines) {
                Line::styled(line, style).render(Rect::new(x, y, width, 1), buf);
            }
            x = x.saturating_add(width);
        }
    }
}
