mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod logo;
mod screen;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Session;
use crate::highscore::{HighScoreFile, LoadError};
use anyhow::Context;
use lexopt::prelude::*;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: autosnake [--config <path>] [--high-score-file <path>] [--autopilot] [--seed <u64>]\n",
    "\n",
    "Play Snake in the terminal, or watch the autopilot play it\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>         Read configuration from the given file\n",
    "      --high-score-file <path>\n",
    "                              Store the high score in the given file\n",
    "  -a, --autopilot             Start with the autopilot steering\n",
    "      --seed <u64>            Seed the random number generator used to place food\n",
    "  -h, --help                  Display this help message and exit\n",
    "  -V, --version               Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: lexopt::Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('h') | Long("help") => return Ok(Command::Help),
                Short('V') | Long("version") => return Ok(Command::Version),
                Short('c') | Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Long("high-score-file") => {
                    args.high_score_file = Some(PathBuf::from(parser.value()?));
                }
                Short('a') | Long("autopilot") => args.autopilot = true,
                Long("seed") => args.seed = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    high_score_file: Option<PathBuf>,
    autopilot: bool,
    seed: Option<u64>,
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::default_path().and_then(|path| Config::load(&path, true)),
        }
        .context("failed to load configuration")?;
        if self.autopilot {
            config.game.autopilot = true;
        }
        init_logging(&config)?;
        log::info!("Starting autosnake {}", env!("CARGO_PKG_VERSION"));
        log::debug!("Configuration: {config:?}");

        let store = self
            .high_score_file
            .or(config.files.high_score_file)
            .or_else(HighScoreFile::default_path)
            .map(HighScoreFile::new)
            .ok_or_else(LoadError::no_path)?;
        let high_score = store.load()?;
        log::info!(
            "Loaded high score {high_score} from {}",
            store.path().display()
        );

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = Session::new(config.game, rng, store, high_score);
        let app = App::new(session, config.game.tick_period(), config.game.tile_width);
        let terminal = ratatui::init();
        let r = app.run(terminal);
        ratatui::restore();
        r
    }
}

/// Send log messages to the configured log file.  Nothing is logged if
/// logging is turned off or there is nowhere to put the file.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    if config.logging.level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = config.files.log_file.clone().or_else(default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::File::create(&path).context("failed to open log file")?;
    simplelog::WriteLogger::init(config.logging.level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("autosnake").join("autosnake.log"))
}

fn main() -> ExitCode {
    match Command::from_parser(lexopt::Parser::from_env()) {
        Ok(Command::Run(args)) => exit(args.run()),
        Ok(Command::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("autosnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("autosnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            eprintln!("autosnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
