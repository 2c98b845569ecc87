// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The persisted form of a game. Storage is the host's business; this module only fixes what is
//! stored and what counts as corrupt.

use crate::{Board, InvalidBoardError, TileValue};
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// A saved game. Serializes with the field names `tileNumsPerAxis`, `score`, `bestScore` and
/// `board`, the latter being a list of rows of integers or nulls.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<V = u32> {
    /// Tiles per axis.
    pub tile_nums_per_axis: usize,
    /// The score of the saved game.
    pub score: u64,
    /// The best score seen for this board size.
    pub best_score: u64,
    /// The cells, row by row.
    pub board: Vec<Vec<Option<V>>>,
}

/// An error which denotes a corrupt [`Snapshot`].
#[derive(Debug)]
pub enum SnapshotError<V> {
    /// The stored grid is not a valid board.
    Board(InvalidBoardError<V>),
    /// The stored grid does not have the declared number of rows.
    SizeMismatch {
        /// `tileNumsPerAxis` as stored.
        declared: usize,
        /// The number of rows actually stored.
        actual: usize,
    },
    /// The score exceeds the best score.
    ScoreAboveBest {
        /// The stored score.
        score: u64,
        /// The stored best score.
        best_score: u64,
    },
    /// The stored board holds no tiles, so no move could ever be made.
    NoTiles,
}

impl<V> Display for SnapshotError<V>
where
    V: TileValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SnapshotError::Board(e) => f.write_fmt(format_args!("stored board is invalid: {e}")),
            SnapshotError::SizeMismatch { declared, actual } => f.write_fmt(format_args!(
                "stored board has {actual} rows but declares {declared} tiles per axis"
            )),
            SnapshotError::ScoreAboveBest { score, best_score } => f.write_fmt(format_args!(
                "stored score {score} exceeds the stored best score {best_score}"
            )),
            SnapshotError::NoTiles => f.write_str("stored board holds no tiles"),
        }
    }
}

impl<V> Error for SnapshotError<V> where V: TileValue {}

impl<V> From<InvalidBoardError<V>> for SnapshotError<V> {
    fn from(value: InvalidBoardError<V>) -> Self {
        SnapshotError::Board(value)
    }
}

impl<V> Snapshot<V>
where
    V: TileValue,
{
    /// Capture a board and its scores.
    pub fn capture(board: &Board<V>, score: u64, best_score: u64) -> Self {
        Self {
            tile_nums_per_axis: board.size().get(),
            score,
            best_score,
            board: board.rows(),
        }
    }

    /// Check this snapshot for corruption and rebuild its board. Nothing is repaired: any defect
    /// rejects the whole snapshot.
    pub fn validate(&self) -> Result<Board<V>, SnapshotError<V>> {
        if self.board.len() != self.tile_nums_per_axis {
            return Err(SnapshotError::SizeMismatch {
                declared: self.tile_nums_per_axis,
                actual: self.board.len(),
            });
        }
        if self.score > self.best_score {
            return Err(SnapshotError::ScoreAboveBest {
                score: self.score,
                best_score: self.best_score,
            });
        }
        let board = Board::from_rows(self.board.clone())?;
        if board.tile_count() == 0 {
            return Err(SnapshotError::NoTiles);
        }
        Ok(board)
    }
}
