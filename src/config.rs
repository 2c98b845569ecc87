// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Tunable game parameters.

use crate::{BoardSize, DimensionError, Ratio, Spawner};
use core::error::Error;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// The parameters a game is played with. Every field has a default, so hosts may deserialize a
/// partial record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Tiles per axis for a fresh game.
    pub size: usize,
    /// How many tiles a fresh board starts with.
    pub initial_tiles: usize,
    /// The probability that a spawned tile is a 4 rather than a 2.
    pub four_chance: Ratio,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 4,
            initial_tiles: 1,
            four_chance: Spawner::DEFAULT_FOUR_CHANCE,
        }
    }
}

/// An error which denotes an unusable [`Config`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The board size is not playable.
    Size(DimensionError),
    /// The initial tile count is zero or exceeds the number of cells.
    InitialTiles {
        /// The configured count.
        requested: usize,
        /// The number of cells on the board.
        cells: usize,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Size(e) => Display::fmt(e, f),
            ConfigError::InitialTiles { requested, cells } => f.write_fmt(format_args!(
                "cannot start with {requested} tiles on a board of {cells} cells"
            )),
        }
    }
}

impl Error for ConfigError {}

impl From<DimensionError> for ConfigError {
    fn from(value: DimensionError) -> Self {
        ConfigError::Size(value)
    }
}

impl Config {
    /// Check that a game could be started with these parameters on a board of `size`. The ratio
    /// is well-formed by construction.
    pub fn validate_for(&self, size: usize) -> Result<BoardSize, ConfigError> {
        let size = BoardSize::try_from(size)?;
        if self.initial_tiles == 0 || self.initial_tiles > size.area() {
            return Err(ConfigError::InitialTiles {
                requested: self.initial_tiles,
                cells: size.area(),
            });
        }
        Ok(size)
    }

    /// Check that a game could be started with these parameters.
    pub fn validate(&self) -> Result<BoardSize, ConfigError> {
        self.validate_for(self.size)
    }

    /// A spawner using the configured tile odds.
    pub fn spawner(&self) -> Spawner {
        Spawner::new(self.four_chance)
    }
}

#[cfg(test)]
mod test {
    use crate::{Config, ConfigError, DimensionErrorKind, Ratio};

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(4, config.validate().unwrap().get());
        assert_eq!(Ratio::new(1, 4), Some(config.spawner().four_chance()));
    }

    #[test]
    fn rejects_unplayable_parameters() {
        let config = Config {
            size: 1,
            ..Config::default()
        };
        match config.validate() {
            Err(ConfigError::Size(e)) => assert_eq!(DimensionErrorKind::TooSmall, e.kind()),
            s => unreachable!("Expected a size error, got {s:?}"),
        }

        let config = Config {
            initial_tiles: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialTiles { requested: 0, .. })
        ));

        let config = Config {
            initial_tiles: 5,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            Err(ConfigError::InitialTiles {
                requested: 5,
                cells: 4
            }),
            config.validate_for(2)
        );
    }
}
