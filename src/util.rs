use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the region of the terminal to draw in.  In fullscreen mode this is
/// the whole buffer; otherwise it is a [`consts::DISPLAY_SIZE`] rectangle in
/// the middle of it.
pub(crate) fn get_display_area(buffer_area: Rect, fullscreen: bool) -> Rect {
    if fullscreen {
        buffer_area
    } else {
        center_rect(buffer_area, consts::DISPLAY_SIZE)
    }
}

/// Return a rectangle of the given size centered in `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}
