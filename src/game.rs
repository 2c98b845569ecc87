// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The game state machine: a board, its scores, and the rules for moving between
//! [`Status::NotStarted`], [`Status::Active`] and [`Status::Over`].
//!
//! A [`Game`] is not reentrant. Each call to [`Game::apply_direction`] finishes the whole turn
//! (slide, score, spawn, terminal check) before returning, so hosts animating the returned
//! events must queue or drop input until they are done.

use crate::{
    Board, BoardSize, Config, ConfigError, Direction, MoveEvent, Resolution, Snapshot,
    SpawnOutcome, Spawner, TileValue, is_over, resolve,
};
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Status {
    /// No game has been started yet.
    NotStarted,
    /// Swipes are accepted.
    Active,
    /// No swipe can change the board; only a restart or resize continues.
    Over,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Status::NotStarted => "not started",
            Status::Active => "active",
            Status::Over => "over",
        })
    }
}

/// An error which describes a refused lifecycle operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// The operation is not allowed from the current status.
    InvalidTransition {
        /// The status at the time of the call.
        from: Status,
        /// The refused operation.
        operation: &'static str,
    },
    /// The requested parameters are unusable.
    Config(ConfigError),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidTransition { from, operation } => f.write_fmt(format_args!(
                "cannot {operation} while the game is {from}"
            )),
            GameError::Config(e) => Display::fmt(e, f),
        }
    }
}

impl Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(value: ConfigError) -> Self {
        GameError::Config(value)
    }
}

/// What happened during one accepted swipe. The resulting board is available from
/// [`Game::board`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Turn<V> {
    /// The tiles which moved.
    pub events: Vec<MoveEvent<V>>,
    /// Points added to the score.
    pub score_delta: u64,
    /// Whether any tile moved. A swipe into a wall does not consume a turn.
    pub moved: bool,
    /// The tile placed after the move, or `None` if nothing moved.
    pub spawned: Option<SpawnOutcome<V>>,
    /// Whether this turn ended the game.
    pub over: bool,
}

/// A single game of a sliding-tile merge puzzle, with its own source of randomness.
#[derive(Clone, Debug)]
pub struct Game<R, V = u32> {
    config: Config,
    spawner: Spawner,
    rng: R,
    status: Status,
    board: Board<V>,
    score: u64,
    best_score: u64,
}

impl<R, V> Game<R, V> {
    /// The lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The current board.
    pub fn board(&self) -> &Board<V> {
        &self.board
    }

    /// The score of the current game.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The best score seen at the current board size.
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// The current board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// The parameters this game was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }
}

impl<R, V> Game<R, V>
where
    R: Rng,
    V: TileValue,
{
    /// Create a game which has not started yet, using `rng` for every spawn.
    pub fn new(config: Config, rng: R) -> Result<Self, ConfigError> {
        let size = config.validate()?;
        Ok(Self {
            config,
            spawner: config.spawner(),
            rng,
            status: Status::NotStarted,
            board: Board::empty(size),
            score: 0,
            best_score: 0,
        })
    }

    /// Bring back a saved game. Without a snapshot, or with a corrupt one, a fresh game is started
    /// at the configured size instead. A restored board is used as-is, without spawning.
    pub fn restore(
        config: Config,
        rng: R,
        snapshot: Option<Snapshot<V>>,
    ) -> Result<Self, ConfigError> {
        let mut game = Self::new(config, rng)?;
        let Some(snapshot) = snapshot else {
            game.begin(game.size());
            return Ok(game);
        };
        match snapshot.validate() {
            Ok(board) => {
                game.board = board;
                game.score = snapshot.score;
                game.best_score = snapshot.best_score;
                game.status = if is_over(&game.board) {
                    Status::Over
                } else {
                    Status::Active
                };
                info!(
                    "restored a {}x{} game with score {} ({})",
                    snapshot.tile_nums_per_axis,
                    snapshot.tile_nums_per_axis,
                    game.score,
                    game.status
                );
            }
            Err(e) => {
                warn!("discarding saved game: {e}");
                game.begin(game.size());
            }
        }
        Ok(game)
    }

    /// The persistable form of this game.
    pub fn snapshot(&self) -> Snapshot<V> {
        Snapshot::capture(&self.board, self.score, self.best_score)
    }

    fn begin(&mut self, size: BoardSize) {
        if size != self.board.size() {
            self.best_score = 0;
        }
        self.board = Board::empty(size);
        self.score = 0;
        self.status = Status::Active;
        for _ in 0..self.config.initial_tiles {
            self.spawner
                .spawn(&self.board, &mut self.rng)
                .apply_to(&mut self.board);
        }
        if is_over(&self.board) {
            self.status = Status::Over;
        }
        info!(
            "started a {}x{} game with {} tiles",
            size.get(),
            size.get(),
            self.board.tile_count()
        );
    }

    /// Start the first game on a board of `size` tiles per axis.
    pub fn start(&mut self, size: usize) -> Result<(), GameError> {
        if self.status != Status::NotStarted {
            return Err(GameError::InvalidTransition {
                from: self.status,
                operation: "start",
            });
        }
        let size = self.config.validate_for(size)?;
        self.begin(size);
        Ok(())
    }

    /// Throw away the current game and start again at the same size. The best score is kept.
    pub fn restart(&mut self) {
        debug!("restarting from score {}", self.score);
        self.begin(self.size());
    }

    /// Start again on a board of `size` tiles per axis. Only allowed before the first game or
    /// once a game is over. A different size has its own best score.
    pub fn change_board_size(&mut self, size: usize) -> Result<(), GameError> {
        if self.status == Status::Active {
            return Err(GameError::InvalidTransition {
                from: self.status,
                operation: "change the board size",
            });
        }
        let size = self.config.validate_for(size)?;
        self.begin(size);
        Ok(())
    }

    /// Whether a swipe in `direction` would move anything.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.status == Status::Active && crate::can_move(&self.board, direction)
    }

    /// Play a swipe. Returns `None` without touching anything if the game is not active. A swipe
    /// which moves nothing leaves the game untouched and reports `moved == false`.
    pub fn apply_direction(&mut self, direction: Direction) -> Option<Turn<V>> {
        if self.status != Status::Active {
            debug!("ignoring {direction} swipe while the game is {}", self.status);
            return None;
        }
        let Resolution {
            board,
            events,
            score_delta,
            moved,
        } = resolve(&self.board, direction);
        if !moved {
            return Some(Turn {
                events,
                score_delta: 0,
                moved: false,
                spawned: None,
                over: false,
            });
        }

        self.board = board;
        self.score = self.score.saturating_add(score_delta);
        self.best_score = self.best_score.max(self.score);

        let spawned = self.spawner.spawn(&self.board, &mut self.rng);
        spawned.apply_to(&mut self.board);
        debug!(
            "{direction}: {} tiles moved, +{score_delta} points, spawned {spawned:?}",
            events.len()
        );

        let over = is_over(&self.board);
        if over {
            self.status = Status::Over;
            info!("game over with score {} (best {})", self.score, self.best_score);
        }
        Some(Turn {
            events,
            score_delta,
            moved,
            spawned: Some(spawned),
            over,
        })
    }
}
