// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! tile-merge: a simulation engine for sliding-tile merge puzzles in the 2048 family.
//!
//! The premise of the game is simple: an N×N board holds numbered tiles, all powers of two. A
//! swipe slides every tile as far as it can towards one edge; two equal tiles which meet merge
//! into one of twice the value, and that value is added to the score. After every swipe which
//! moved something, a new 2 or 4 appears in a random empty cell. The game ends once the board is
//! full and no neighbouring tiles are equal.
//!
//! This library implements the rules only, with no notion of rendering, input or storage. The
//! slide and merge step ([`resolve`]) is a pure function of the board and the direction; the
//! [`Game`] type layers scoring, spawning, the terminal check and a persistable [`Snapshot`] on
//! top of it.

#![no_std]

pub use board::{Board, InvalidBoardError};
pub use config::{Config, ConfigError};
pub use game::{Game, GameError, Status, Turn};
pub use geometry::{BoardSize, DimensionError, DimensionErrorKind, Direction, Position};
pub use over::is_over;
pub use resolve::{MoveEvent, Resolution, available_directions, can_move, resolve};
pub use snapshot::{Snapshot, SnapshotError};
pub use spawn::{Ratio, RatioError, SpawnOutcome, Spawner};

use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_traits::{PrimInt, Unsigned};
use serde::Serialize;
use serde::de::DeserializeOwned;

extern crate alloc;

mod board;
mod config;
mod game;
mod geometry;
mod over;
mod resolve;
mod snapshot;
mod spawn;

/// Marker trait: specifies that a numeric type may hold tile values.
pub trait TileValue:
    PrimInt + Unsigned + Into<u64> + Hash + Debug + Display + DeserializeOwned + Serialize + 'static
{
}

impl<V> TileValue for V where
    V: PrimInt
        + Unsigned
        + Into<u64>
        + Hash
        + Debug
        + Display
        + DeserializeOwned
        + Serialize
        + 'static
{
}

/// Whether `value` may sit on a board: a power of two, at least two.
pub fn is_tile<V>(value: V) -> bool
where
    V: TileValue,
{
    value > V::one() && value.count_ones() == 1
}

/// The tile two copies of `value` merge into, or `None` if `V` cannot hold it.
pub(crate) fn merged_value<V>(value: V) -> Option<V>
where
    V: TileValue,
{
    value.checked_add(&value)
}
