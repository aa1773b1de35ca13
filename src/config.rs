use crate::consts;
use crate::game::{Grid, TailPolicy};
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("autosnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(Into::into)
    }
}

/// Gameplay settings.  These are fixed for the lifetime of the process.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Size of the playing field in tiles
    pub(crate) grid: Grid,

    /// Number of terminal columns used to draw one tile
    pub(crate) tile_width: u16,

    pub(crate) ticks_per_second: NonZeroU32,

    /// Whether sessions start with the autopilot steering
    pub(crate) autopilot: bool,

    pub(crate) tail_collision: TailPolicy,

    /// How many random draws to make when placing food before falling back
    /// to scanning the grid for free tiles
    pub(crate) spawn_attempts: u32,
}

impl GameConfig {
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.get()
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid: consts::DEFAULT_GRID,
            tile_width: consts::DEFAULT_TILE_WIDTH,
            ticks_per_second: consts::DEFAULT_TICKS_PER_SECOND,
            autopilot: false,
            tail_collision: TailPolicy::default(),
            spawn_attempts: consts::DEFAULT_SPAWN_ATTEMPTS,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    grid_width: u16,
    grid_height: u16,
    tile_width: u16,
    ticks_per_second: u32,
    autopilot: bool,
    tail_collision: TailPolicy,
    spawn_attempts: u32,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let game = GameConfig::default();
        RawGameConfig {
            grid_width: game.grid.width,
            grid_height: game.grid.height,
            tile_width: game.tile_width,
            ticks_per_second: game.ticks_per_second.get(),
            autopilot: game.autopilot,
            tail_collision: game.tail_collision,
            spawn_attempts: game.spawn_attempts,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidGameConfig;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidGameConfig> {
        let grid = Grid::new(value.grid_width, value.grid_height);
        if grid.width < consts::MIN_GRID.width || grid.height < consts::MIN_GRID.height {
            return Err(InvalidGameConfig::GridTooSmall(grid));
        }
        if value.tile_width == 0 {
            return Err(InvalidGameConfig::ZeroTileWidth);
        }
        let ticks_per_second = NonZeroU32::new(value.ticks_per_second)
            .filter(|tps| tps.get() <= consts::MAX_TICKS_PER_SECOND)
            .ok_or(InvalidGameConfig::TickRate(value.ticks_per_second))?;
        Ok(GameConfig {
            grid,
            tile_width: value.tile_width,
            ticks_per_second,
            autopilot: value.autopilot,
            tail_collision: value.tail_collision,
            spawn_attempts: value.spawn_attempts,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidGameConfig {
    #[error(
        "grid of {}×{} tiles is too small; it must be at least {}×{}",
        .0.width,
        .0.height,
        consts::MIN_GRID.width,
        consts::MIN_GRID.height
    )]
    GridTooSmall(Grid),
    #[error("tile-width must be at least 1")]
    ZeroTileWidth,
    #[error(
        "ticks-per-second must be between 1 and {max}, got {0}",
        max = consts::MAX_TICKS_PER_SECOND
    )]
    TickRate(u32),
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score is stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Path to write log messages to
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct LogConfig {
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
