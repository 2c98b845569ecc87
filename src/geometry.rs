// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Directions, positions and board dimensions.

use core::error::Error;
use core::fmt::{Display, Formatter};
use core::ops::Neg;
use serde::{Deserialize, Serialize};

/// A swipe direction. Tiles slide towards the edge named by the direction. A direction may be
/// flipped with [`Neg`] (i.e. `-`).
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Direction {
    /// Tiles slide towards row zero.
    Up,
    /// Tiles slide towards the last row.
    Down,
    /// Tiles slide towards column zero.
    Left,
    /// Tiles slide towards the last column.
    Right,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Whether tiles moving in this direction travel along rows.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A cell coordinate in the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// The row of the position.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of the position.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the position `by` cells away from this position in the direction `dir`, or `None` if
    /// that would leave the non-negative quadrant. Upper bounds are the board's concern.
    pub fn shift(&self, dir: Direction, by: usize) -> Option<Self> {
        let (row, column) = match dir {
            Direction::Up => (self.row.checked_sub(by)?, self.column),
            Direction::Down => (self.row.checked_add(by)?, self.column),
            Direction::Left => (self.row, self.column.checked_sub(by)?),
            Direction::Right => (self.row, self.column.checked_add(by)?),
        };
        Some(Self { row, column })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The number of tiles along each axis of a square board. Always at least two.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// The smallest playable board.
    pub const MIN: usize = 2;

    /// Tiles per axis.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.0 * self.0
    }
}

/// The reason a board size was refused.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DimensionErrorKind {
    /// Fewer than [`BoardSize::MIN`] tiles per axis.
    TooSmall,
    /// The cell count does not fit in a `usize`.
    TooLarge,
}

/// An error associated with the creation of a [`BoardSize`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DimensionError {
    requested: usize,
    kind: DimensionErrorKind,
}

impl DimensionError {
    /// The size that was asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Why it was refused.
    pub fn kind(&self) -> DimensionErrorKind {
        self.kind
    }
}

impl Display for DimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let reason = match self.kind {
            DimensionErrorKind::TooSmall => "boards need at least two tiles per axis",
            DimensionErrorKind::TooLarge => "the board would have too many cells",
        };
        f.write_fmt(format_args!(
            "board size {} could not be used: {reason}",
            self.requested
        ))
    }
}

impl Error for DimensionError {}

impl TryFrom<usize> for BoardSize {
    type Error = DimensionError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n < Self::MIN {
            Err(DimensionError {
                requested: n,
                kind: DimensionErrorKind::TooSmall,
            })
        } else if n.checked_mul(n).is_none() {
            Err(DimensionError {
                requested: n,
                kind: DimensionErrorKind::TooLarge,
            })
        } else {
            Ok(Self(n))
        }
    }
}
