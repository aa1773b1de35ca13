use crate::command::Command;
use crate::game::{Flow, Session};
use crate::screen::Screen;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::{Duration, Instant};

/// The terminal front end: draws the session and feeds it key presses and
/// clock ticks
#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    session: Session<R>,
    tick_period: Duration,
    tile_width: u16,
    fullscreen: bool,
    next_tick: Option<Instant>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(session: Session<R>, tick_period: Duration, tile_width: u16) -> App<R> {
        App {
            session,
            tick_period,
            tile_width,
            fullscreen: false,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> anyhow::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next key press or, while a session is being
    /// played, the next tick, whichever comes first
    fn process_input(&mut self) -> anyhow::Result<()> {
        if self.session.playing() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + self.tick_period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.session.tick()?;
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.next_tick = None;
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        if cmd == Command::ToggleFullscreen {
            self.fullscreen = !self.fullscreen;
            log::debug!("Fullscreen mode: {}", self.fullscreen);
        } else if self.session.handle_command(cmd) == Flow::Quit {
            self.quitting = true;
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(
            Screen {
                session: &self.session,
                tile_width: self.tile_width,
                fullscreen: self.fullscreen,
            },
            frame.area(),
        );
    }
}
