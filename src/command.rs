use crate::game::Heading;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A player request, translated from a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Heading),
    Start,
    Restart,
    ToggleFullscreen,
    ToggleAutopilot,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Command::Turn(Heading::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Turn(Heading::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Turn(Heading::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Turn(Heading::Right))
            }
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Start),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('f')) => Some(Command::ToggleFullscreen),
            (KeyModifiers::NONE, KeyCode::Char('i')) => Some(Command::ToggleAutopilot),
            _ => None,
        }
    }
}
