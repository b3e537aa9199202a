use crate::consts;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("boostsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized, including when a gameplay setting is out of
    /// range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Validated gameplay settings
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of display units along each side of a cell
    pub(crate) cell_size: u16,

    /// Thickness of the wall around the arena, in cells
    pub(crate) wall_thickness: u16,

    /// Ticks per second at level 1
    pub(crate) base_speed: u32,

    /// Ticks per second added for each level above 1
    pub(crate) speed_increment: u32,

    /// Points awarded for each food eaten
    pub(crate) points_per_food: u32,

    /// Points needed to gain a level
    pub(crate) points_per_level: u32,

    /// Boost settings, or `None` if boosting is disabled
    pub(crate) boost: Option<BoostConfig>,

    /// Number of ticks after which uneaten food is relocated
    pub(crate) food_refresh_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            cell_size: consts::DEFAULT_CELL_SIZE,
            wall_thickness: consts::DEFAULT_WALL_THICKNESS,
            base_speed: consts::DEFAULT_BASE_SPEED,
            speed_increment: consts::DEFAULT_SPEED_INCREMENT,
            points_per_food: consts::DEFAULT_POINTS_PER_FOOD,
            points_per_level: consts::DEFAULT_POINTS_PER_LEVEL,
            boost: Some(BoostConfig::default()),
            food_refresh_ticks: consts::DEFAULT_FOOD_REFRESH_TICKS,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BoostConfig {
    /// Ticks per second added while a boost is active
    pub(crate) speed: u32,

    /// How long a boost lasts after being triggered
    pub(crate) duration: Duration,

    /// How long after a boost is triggered before another can be triggered.
    /// Never shorter than `duration`.
    pub(crate) cooldown: Duration,
}

impl Default for BoostConfig {
    fn default() -> BoostConfig {
        BoostConfig {
            speed: consts::DEFAULT_BOOST_SPEED,
            duration: Duration::from_millis(consts::DEFAULT_BOOST_DURATION_MS),
            cooldown: Duration::from_millis(consts::DEFAULT_COOLDOWN_DURATION_MS),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawGameConfig {
    cell_size: u16,
    wall_thickness: u16,
    base_speed: u32,
    speed_increment: u32,
    points_per_food: u32,
    points_per_level: u32,
    boost: bool,
    boost_speed: u32,
    boost_duration_ms: u64,
    cooldown_duration_ms: u64,
    food_refresh_ticks: u32,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            cell_size: consts::DEFAULT_CELL_SIZE,
            wall_thickness: consts::DEFAULT_WALL_THICKNESS,
            base_speed: consts::DEFAULT_BASE_SPEED,
            speed_increment: consts::DEFAULT_SPEED_INCREMENT,
            points_per_food: consts::DEFAULT_POINTS_PER_FOOD,
            points_per_level: consts::DEFAULT_POINTS_PER_LEVEL,
            boost: true,
            boost_speed: consts::DEFAULT_BOOST_SPEED,
            boost_duration_ms: consts::DEFAULT_BOOST_DURATION_MS,
            cooldown_duration_ms: consts::DEFAULT_COOLDOWN_DURATION_MS,
            food_refresh_ticks: consts::DEFAULT_FOOD_REFRESH_TICKS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = SettingsError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, SettingsError> {
        if value.cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        if value.base_speed == 0 {
            return Err(SettingsError::ZeroBaseSpeed);
        }
        if value.points_per_food == 0 {
            return Err(SettingsError::ZeroPointsPerFood);
        }
        if value.points_per_level == 0 {
            return Err(SettingsError::ZeroPointsPerLevel);
        }
        if value.food_refresh_ticks == 0 {
            return Err(SettingsError::ZeroFoodRefresh);
        }
        if value.boost && value.boost_duration_ms > value.cooldown_duration_ms {
            return Err(SettingsError::BoostOutlastsCooldown {
                boost_ms: value.boost_duration_ms,
                cooldown_ms: value.cooldown_duration_ms,
            });
        }
        let boost = value.boost.then(|| BoostConfig {
            speed: value.boost_speed,
            duration: Duration::from_millis(value.boost_duration_ms),
            cooldown: Duration::from_millis(value.cooldown_duration_ms),
        });
        Ok(GameConfig {
            cell_size: value.cell_size,
            wall_thickness: value.wall_thickness,
            base_speed: value.base_speed,
            speed_increment: value.speed_increment,
            points_per_food: value.points_per_food,
            points_per_level: value.points_per_level,
            boost,
            food_refresh_ticks: value.food_refresh_ticks,
        })
    }
}

/// Logging settings
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// File to write log messages to; if not set, a file in the local state
    /// directory is used
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level of message to log.  `off` disables logging.
    pub(crate) level: LevelFilter,
}

impl LogConfig {
    /// Return the path of the log file: the file given in the configuration
    /// or, if that is not set, the default log file path.  Returns `None` if
    /// no path is configured and no default could be determined.
    pub(crate) fn path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .map(|p| p.join("boostsnake").join("boostsnake.log"))
        })
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
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

/// Error for gameplay settings that cannot produce a playable game
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub(crate) enum SettingsError {
    #[error("cell-size must be greater than zero")]
    ZeroCellSize,
    #[error("base-speed must be greater than zero")]
    ZeroBaseSpeed,
    #[error("points-per-food must be greater than zero")]
    ZeroPointsPerFood,
    #[error("points-per-level must be greater than zero")]
    ZeroPointsPerLevel,
    #[error("food-refresh-ticks must be greater than zero")]
    ZeroFoodRefresh,
    #[error(
        "boost-duration-ms ({boost_ms}) must not be greater than cooldown-duration-ms ({cooldown_ms})"
    )]
    BoostOutlastsCooldown { boost_ms: u64, cooldown_ms: u64 },
    #[error("a {width}x{height} display with cell-size {cell_size} and wall-thickness {wall_thickness} leaves too little room to play")]
    PlayfieldTooSmall {
        width: u16,
        height: u16,
        cell_size: u16,
        wall_thickness: u16,
    },
}
