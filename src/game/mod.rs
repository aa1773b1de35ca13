mod food;
mod grid;
mod heading;
mod movement;
mod planner;
mod score;
mod snake;
pub(crate) use self::grid::Grid;
pub(crate) use self::heading::Heading;
pub(crate) use self::movement::{Collision, TailPolicy};
use self::movement::Outcome;
use self::score::ScoreTracker;
use self::snake::Snake;
use crate::command::Command;
use crate::config::GameConfig;
use crate::consts;
use crate::highscore::{HighScoreFile, SaveError};
use rand::{rngs::StdRng, Rng};
use ratatui::layout::Position;

/// One game of Snake, from the title screen through any number of sessions.
///
/// The snake, food and score are reset each time a session starts; the high
/// score and the choice of pilot carry over.
#[derive(Clone, Debug)]
pub(crate) struct Session<R = StdRng> {
    rng: R,
    config: GameConfig,
    snake: Snake,
    food: Option<Position>,

    /// The heading used for the most recent move
    heading: Heading,

    /// The heading to use for the next move when steering manually
    requested: Heading,

    pilot: Pilot,
    score: ScoreTracker,
    high_score: u32,
    state: SessionState,
    store: HighScoreFile,
}

impl<R: Rng> Session<R> {
    /// Create a session on the title screen.  `high_score` is the value
    /// previously loaded from `store`.
    pub(crate) fn new(config: GameConfig, rng: R, store: HighScoreFile, high_score: u32) -> Self {
        let pilot = if config.autopilot {
            Pilot::Autopilot
        } else {
            Pilot::Manual
        };
        let mut session = Session {
            rng,
            config,
            snake: Snake::new(),
            food: None,
            heading: consts::INITIAL_HEADING,
            requested: consts::INITIAL_HEADING,
            pilot,
            score: ScoreTracker::new(),
            high_score,
            state: SessionState::Start,
            store,
        };
        session.reset();
        session
    }

    /// Apply a player command.  Returns [`Flow::Quit`] if the program should
    /// exit.  Commands that make no sense in the current state are ignored.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Flow {
        match (self.state, cmd) {
            (_, Command::Quit) => {
                log::info!("Quitting with high score {}", self.high_score);
                return Flow::Quit;
            }
            (_, Command::ToggleAutopilot) => {
                self.pilot = self.pilot.toggle();
                log::info!("Pilot switched to {:?}", self.pilot);
            }
            (SessionState::Start, Command::Start) => self.begin(),
            (SessionState::GameOver(_), Command::Restart) => {
                self.reset();
                self.begin();
            }
            (SessionState::Playing, Command::Turn(heading)) => {
                if heading != self.heading.reverse() {
                    self.requested = heading;
                }
            }
            _ => (),
        }
        Flow::Continue
    }

    /// Advance the session by one tick.  Does nothing unless a session is
    /// being played.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the session ended and the high score could not be
    /// written to disk.  The in-memory high score is updated regardless.
    pub(crate) fn tick(&mut self) -> Result<(), SaveError> {
        if self.state != SessionState::Playing {
            return Ok(());
        }
        let Some(food) = self.food else {
            return self.end(Ending::BoardFilled);
        };
        let heading = match self.pilot {
            Pilot::Manual => self.requested,
            Pilot::Autopilot => planner::choose_heading(&self.snake, food, self.config.grid),
        };
        match movement::step(
            &mut self.snake,
            food,
            heading,
            self.config.grid,
            self.config.tail_collision,
        ) {
            Outcome::Continue { ate_food } => {
                self.heading = heading;
                self.requested = heading;
                if ate_food {
                    self.score.increment();
                    log::debug!(
                        "Ate food at ({}, {}); score is now {}",
                        food.x,
                        food.y,
                        self.score.current()
                    );
                    self.food = self.place_food();
                    if self.food.is_none() {
                        return self.end(Ending::BoardFilled);
                    }
                }
                Ok(())
            }
            Outcome::GameOver(collision) => self.end(Ending::Collision(collision)),
        }
    }

    fn place_food(&mut self) -> Option<Position> {
        food::spawn(
            &mut self.rng,
            &self.snake,
            self.config.grid,
            self.config.spawn_attempts,
        )
    }

    /// Put the snake, food, and score back to how they are at the start of a
    /// session
    fn reset(&mut self) {
        self.snake = Snake::new();
        self.heading = consts::INITIAL_HEADING;
        self.requested = consts::INITIAL_HEADING;
        self.score.reset();
        self.food = self.place_food();
    }

    fn begin(&mut self) {
        log::info!("Starting session (pilot: {:?})", self.pilot);
        self.state = SessionState::Playing;
    }

    fn end(&mut self, ending: Ending) -> Result<(), SaveError> {
        self.state = SessionState::GameOver(ending);
        let final_score = self.score.current();
        log::info!("Game over ({ending:?}) with score {final_score}");
        let high = self.score.finalize_high_score(self.high_score);
        if high > self.high_score {
            log::info!("New high score: {high}");
        }
        self.high_score = high;
        self.store.save(high)?;
        log::debug!("Saved high score to {}", self.store.path().display());
        Ok(())
    }
}

impl<R> Session<R> {
    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score.current()
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn pilot(&self) -> Pilot {
        self.pilot
    }

    pub(crate) fn grid(&self) -> Grid {
        self.config.grid
    }

    pub(crate) fn playing(&self) -> bool {
        self.state == SessionState::Playing
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionState {
    /// Showing the title screen, waiting for the player to start
    Start,

    Playing,

    /// A session has ended; waiting for the player to restart or quit
    GameOver(Ending),
}

/// Why a session ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    Collision(Collision),

    /// The snake covers the whole grid and there is nowhere left to put
    /// food.  The player has won.
    BoardFilled,
}

/// Who is steering the snake
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Pilot {
    Manual,
    Autopilot,
}

impl Pilot {
    fn toggle(self) -> Pilot {
        match self {
            Pilot::Manual => Pilot::Autopilot,
            Pilot::Autopilot => Pilot::Manual,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use tempfile::{tempdir, TempDir};

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn session_with(config: GameConfig, high_score: u32) -> (Session<ChaCha12Rng>, TempDir) {
        let tmp = tempdir().unwrap();
        let store = HighScoreFile::new(tmp.path().join("high_score.txt"));
        let session = Session::new(
            config,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            store,
            high_score,
        );
        (session, tmp)
    }

    fn new_session() -> (Session<ChaCha12Rng>, TempDir) {
        session_with(GameConfig::default(), 0)
    }

    fn stored(tmp: &TempDir) -> String {
        fs_err::read_to_string(tmp.path().join("high_score.txt")).unwrap()
    }

    fn assert_invariants<R>(session: &Session<R>) {
        let tiles = session.snake().tiles().collect::<Vec<_>>();
        for (i, a) in tiles.iter().enumerate() {
            assert!(!tiles[i + 1..].contains(a), "duplicate tile {a:?}");
        }
        for pair in tiles.windows(2) {
            let dist = pair[0].x.abs_diff(pair[1].x) + pair[0].y.abs_diff(pair[1].y);
            assert_eq!(dist, 1, "{:?} and {:?} not adjacent", pair[0], pair[1]);
        }
        if let Some(food) = session.food() {
            assert!(!session.snake().contains(food), "food under the snake");
        }
    }

    #[test]
    fn starts_on_title_screen() {
        let (mut session, _tmp) = new_session();
        assert_eq!(session.state(), SessionState::Start);
        assert_eq!(session.score(), 0);
        assert_eq!(session.pilot(), Pilot::Manual);
        assert_invariants(&session);
        let before = session.snake().clone();
        session.tick().unwrap();
        assert_eq!(session.snake(), &before, "ticks are ignored before starting");
        assert_eq!(session.handle_command(Command::Restart), Flow::Continue);
        assert_eq!(session.state(), SessionState::Start);
        assert_eq!(session.handle_command(Command::Start), Flow::Continue);
        assert_eq!(session.state(), SessionState::Playing);
    }

    #[test]
    fn quit_from_any_state() {
        let (mut session, _tmp) = new_session();
        assert_eq!(session.handle_command(Command::Quit), Flow::Quit);
        session.handle_command(Command::Start);
        assert_eq!(session.handle_command(Command::Quit), Flow::Quit);
        session.food = Some(Position::new(20, 15));
        session.handle_command(Command::Turn(Heading::Up));
        for _ in 0..6 {
            session.tick().unwrap();
        }
        assert!(matches!(session.state(), SessionState::GameOver(_)));
        assert_eq!(session.handle_command(Command::Quit), Flow::Quit);
    }

    #[test]
    fn eat_food() {
        let (mut session, _tmp) = new_session();
        session.handle_command(Command::Start);
        session.food = Some(Position::new(6, 5));
        session.tick().unwrap();
        assert_eq!(
            session.snake().tiles().collect::<Vec<_>>(),
            [
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
        assert_eq!(session.score(), 1);
        assert!(session.food().is_some());
        assert_invariants(&session);
    }

    #[test]
    fn wall_ends_session() {
        let (mut session, tmp) = new_session();
        session.handle_command(Command::Start);
        session.food = Some(Position::new(20, 15));
        session.handle_command(Command::Turn(Heading::Up));
        for _ in 0..5 {
            session.tick().unwrap();
            assert!(session.playing());
        }
        assert_eq!(session.snake().head(), Position::new(5, 0));
        session.tick().unwrap();
        assert_eq!(
            session.state(),
            SessionState::GameOver(Ending::Collision(Collision::Wall))
        );
        assert_eq!(stored(&tmp), "0");
        // Further ticks change nothing
        let snake = session.snake().clone();
        session.tick().unwrap();
        assert_eq!(session.snake(), &snake);
    }

    #[test]
    fn reversal_is_ignored() {
        let (mut session, _tmp) = new_session();
        session.handle_command(Command::Start);
        session.food = Some(Position::new(20, 15));
        session.handle_command(Command::Turn(Heading::Left));
        session.tick().unwrap();
        assert!(session.playing());
        assert_eq!(session.snake().head(), Position::new(6, 5));
    }

    #[test]
    fn turns_ignored_outside_play() {
        let (mut session, _tmp) = new_session();
        session.handle_command(Command::Turn(Heading::Down));
        session.handle_command(Command::Start);
        session.food = Some(Position::new(20, 15));
        session.tick().unwrap();
        assert_eq!(session.snake().head(), Position::new(6, 5));
    }

    #[test]
    fn self_collision() {
        let (mut session, _tmp) = new_session();
        session.handle_command(Command::Start);
        session.snake = Snake::from_tiles([
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
            Position::new(7, 5),
        ]);
        session.heading = Heading::Up;
        session.requested = Heading::Up;
        session.food = Some(Position::new(20, 15));
        session.handle_command(Command::Turn(Heading::Right));
        session.tick().unwrap();
        assert_eq!(
            session.state(),
            SessionState::GameOver(Ending::Collision(Collision::Body))
        );
    }

    #[test]
    fn high_score_across_sessions() {
        let (mut session, tmp) = session_with(GameConfig::default(), 3);
        session.handle_command(Command::Start);
        // Eat seven pieces of food in a row along row 5, then hit the wall.
        for x in 6..13 {
            session.food = Some(Position::new(x, 5));
            session.tick().unwrap();
        }
        assert_eq!(session.score(), 7);
        session.food = Some(Position::new(0, 19));
        while session.playing() {
            session.tick().unwrap();
        }
        assert_eq!(session.high_score(), 7);
        assert_eq!(stored(&tmp), "7");

        session.handle_command(Command::Restart);
        assert!(session.playing());
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake(), &Snake::new());
        for x in 6..8 {
            session.food = Some(Position::new(x, 5));
            session.tick().unwrap();
        }
        assert_eq!(session.score(), 2);
        session.food = Some(Position::new(0, 19));
        while session.playing() {
            session.tick().unwrap();
        }
        assert_eq!(session.high_score(), 7);
        assert_eq!(stored(&tmp), "7");
    }

    #[test]
    fn save_failure_keeps_high_score() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs_err::write(&blocker, "").unwrap();
        let store = HighScoreFile::new(blocker.join("high_score.txt"));
        let mut session = Session::new(
            GameConfig::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            store,
            0,
        );
        session.handle_command(Command::Start);
        session.food = Some(Position::new(6, 5));
        session.tick().unwrap();
        session.food = Some(Position::new(0, 19));
        session.handle_command(Command::Turn(Heading::Up));
        let mut result = Ok(());
        while session.playing() {
            result = session.tick();
        }
        assert!(result.is_err());
        assert_eq!(session.high_score(), 1);
    }

    #[test]
    fn autopilot_plays() {
        let mut config = GameConfig::default();
        config.autopilot = true;
        let (mut session, _tmp) = session_with(config, 0);
        assert_eq!(session.pilot(), Pilot::Autopilot);
        session.handle_command(Command::Start);
        let mut ticks = 0;
        while session.playing() && ticks < 2000 {
            session.tick().unwrap();
            assert_invariants(&session);
            ticks += 1;
        }
        assert!(session.score() > 0, "autopilot should eat something");
        assert_eq!(
            usize::try_from(session.score()).unwrap() + 3,
            session.snake().len()
        );
    }

    #[test]
    fn autopilot_heads_for_food() {
        let (mut session, _tmp) = new_session();
        session.handle_command(Command::ToggleAutopilot);
        session.handle_command(Command::Start);
        session.food = Some(Position::new(5, 10));
        session.tick().unwrap();
        assert_eq!(session.snake().head(), Position::new(5, 6));
        // Switching back to manual keeps going the way the autopilot went
        session.handle_command(Command::ToggleAutopilot);
        assert_eq!(session.pilot(), Pilot::Manual);
        session.tick().unwrap();
        assert_eq!(session.snake().head(), Position::new(5, 7));
    }

    #[test]
    fn board_filled() {
        let mut config = GameConfig::default();
        config.grid = Grid::new(7, 6);
        let (mut session, tmp) = session_with(config, 0);
        session.handle_command(Command::Start);
        // Fill everything except (6, 5), then eat the last piece of food there.
        let mut tiles = Vec::new();
        for y in 0..6 {
            if y % 2 == 0 {
                tiles.extend((0..7).rev().map(|x| Position::new(x, y)));
            } else {
                tiles.extend((0..7).map(|x| Position::new(x, y)));
            }
        }
        // Row 5 runs left to right, so (6, 5) is the last tile; make it the
        // next head by reversing the order.
        tiles.reverse();
        let last = tiles.remove(0);
        assert_eq!(last, Position::new(6, 5));
        session.snake = Snake::from_tiles(tiles);
        session.heading = Heading::Right;
        session.requested = Heading::Right;
        session.food = Some(last);
        session.tick().unwrap();
        assert_eq!(session.state(), SessionState::GameOver(Ending::BoardFilled));
        assert_eq!(session.food(), None);
        assert_eq!(session.score(), 1);
        assert_eq!(stored(&tmp), "1");
    }
}
