// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The square grid of tiles.

use crate::{BoardSize, DimensionError, Position, TileValue, is_tile};
use alloc::vec;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};

/// A passive N×N grid of cells, each either empty or holding a tile (a power of two, at least
/// two). The board does not know the rules of the game; see [`crate::resolve`] for those.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board<V = u32> {
    size: BoardSize,
    cells: Vec<Option<V>>,
}

/// An error which denotes that a grid could not be used as a board.
#[derive(Debug)]
pub enum InvalidBoardError<V> {
    /// The number of rows is not a usable board size.
    Dimension(DimensionError),
    /// The row with the provided index has a different length than the number of rows.
    RaggedRow {
        /// The offending row.
        row: usize,
        /// Its length.
        length: usize,
    },
    /// The cell at the provided position holds a value which is not a tile.
    NotATile {
        /// Where the value was found.
        position: Position,
        /// The value itself.
        value: V,
    },
}

impl<V> Display for InvalidBoardError<V>
where
    V: TileValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidBoardError::Dimension(e) => Display::fmt(e, f),
            InvalidBoardError::RaggedRow { row, length } => f.write_fmt(format_args!(
                "row {row} has {length} cells, which does not match the number of rows"
            )),
            InvalidBoardError::NotATile { position, value } => f.write_fmt(format_args!(
                "cell {position} holds {value}, which is not a power of two of at least two"
            )),
        }
    }
}

impl<V> Error for InvalidBoardError<V> where V: TileValue {}

impl<V> From<DimensionError> for InvalidBoardError<V> {
    fn from(value: DimensionError) -> Self {
        InvalidBoardError::Dimension(value)
    }
}

impl<V> Board<V> {
    /// The dimension of this board.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[Option<V>] {
        &self.cells
    }

    fn index(&self, position: Position) -> usize {
        let n = self.size.get();
        assert!(
            position.row() < n && position.column() < n,
            "position {position} is outside of a {n}x{n} board"
        );
        position.row() * n + position.column()
    }
}

impl<V> Board<V>
where
    V: TileValue,
{
    /// Produce a board without any tiles.
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![None; size.area()],
        }
    }

    /// Build a board from a list of rows. The grid must be square, at least 2×2, and every value
    /// present must be a tile.
    pub fn from_rows(rows: Vec<Vec<Option<V>>>) -> Result<Self, InvalidBoardError<V>> {
        let size = BoardSize::try_from(rows.len())?;
        let mut cells = Vec::with_capacity(size.area());
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size.get() {
                return Err(InvalidBoardError::RaggedRow {
                    row: r,
                    length: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                if let Some(value) = cell.filter(|v| !is_tile(*v)) {
                    return Err(InvalidBoardError::NotATile {
                        position: Position::from((r, c)),
                        value,
                    });
                }
                cells.push(cell);
            }
        }
        Ok(Self { size, cells })
    }

    /// The board as a list of rows.
    pub fn rows(&self) -> Vec<Vec<Option<V>>> {
        self.cells
            .chunks(self.size.get())
            .map(|row| row.to_vec())
            .collect()
    }

    /// The tile at the requested position, if any.
    ///
    /// # Panics
    ///
    /// If the position lies outside of the board.
    pub fn get<P: Into<Position>>(&self, position: P) -> Option<V> {
        self.cells[self.index(position.into())]
    }

    /// Place a tile at (or clear) the requested position.
    ///
    /// # Panics
    ///
    /// If the position lies outside of the board or the value is not a tile.
    pub fn set<P: Into<Position>>(&mut self, position: P, value: Option<V>) {
        if let Some(v) = value {
            assert!(is_tile(v), "{v} is not a power of two of at least two");
        }
        let idx = self.index(position.into());
        self.cells[idx] = value;
    }

    /// The empty cells, scanned in row-major order. Recomputed on every call.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| Position::from((idx / n, idx % n)))
    }

    /// The occupied cells and their tiles, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, V)> + '_ {
        let n = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|v| (Position::from((idx / n, idx % n)), v)))
    }

    /// Whether every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// The number of tiles.
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// The largest tile, or `None` for an empty board.
    pub fn max_tile(&self) -> Option<V> {
        self.cells.iter().flatten().copied().max()
    }
}

impl<V> Display for Board<V>
where
    V: TileValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let width = self.max_tile().map_or(1, |v| {
            let v: u64 = v.into();
            v.checked_ilog10().unwrap_or(0) as usize + 1
        });
        let n = self.size.get();
        let side = width + 2;
        writeln!(f, "{:#>1$}", "", n * side)?;
        for row in self.cells.chunks(n) {
            for cell in row {
                match cell {
                    Some(v) => write!(f, "#{v:>width$}#")?,
                    None => write!(f, "#{:.>width$}#", "")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{:#>1$}", "", n * side)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use crate::{Board, BoardSize, InvalidBoardError, Position};
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::error::Error;
    use std::println;

    #[test]
    fn get_and_set() -> Result<(), Box<dyn Error>> {
        let mut board: Board = Board::empty(BoardSize::try_from(3)?);
        assert_eq!(9, board.empty_count());
        assert!(!board.is_full());

        board.set((1, 2), Some(8));
        println!("{board}");
        assert_eq!(Some(8), board.get((1, 2)));
        assert_eq!(None, board.get((2, 1)));
        assert_eq!(1, board.tile_count());
        assert_eq!(Some(8), board.max_tile());

        board.set((1, 2), None);
        assert_eq!(None, board.get((1, 2)));
        assert_eq!(None, board.max_tile());
        Ok(())
    }

    #[test]
    fn empty_cells_are_row_major_and_fresh() -> Result<(), Box<dyn Error>> {
        let mut board = Board::from_rows(vec![vec![Some(2u32), None], vec![None, Some(4)]])?;
        let empty: Vec<Position> = board.empty_cells().collect();
        assert_eq!(vec![Position::from((0, 1)), Position::from((1, 0))], empty);

        board.set((0, 1), Some(2));
        let empty: Vec<Position> = board.empty_cells().collect();
        assert_eq!(vec![Position::from((1, 0))], empty);

        board.set((1, 0), Some(16));
        assert!(board.is_full());
        assert_eq!(0, board.empty_cells().count());
        Ok(())
    }

    #[test]
    fn rows_round_trip() -> Result<(), Box<dyn Error>> {
        let rows = vec![
            vec![Some(2u32), None, Some(2048)],
            vec![None, None, None],
            vec![Some(4), Some(8), None],
        ];
        let board = Board::from_rows(rows.clone())?;
        println!("{board}");
        assert_eq!(rows, board.rows());
        Ok(())
    }

    #[test]
    fn rejects_malformed_grids() {
        match Board::from_rows(vec![vec![Some(2u32)]]) {
            Err(InvalidBoardError::Dimension(e)) => assert_eq!(1, e.requested()),
            s => unreachable!("Expected a dimension error, got {s:?}"),
        }

        match Board::from_rows(vec![vec![Some(2u32), None], vec![None]]) {
            Err(InvalidBoardError::RaggedRow { row, length }) => {
                assert_eq!(1, row);
                assert_eq!(1, length);
            }
            s => unreachable!("Expected a ragged row, got {s:?}"),
        }

        match Board::from_rows(vec![vec![Some(2u32), None], vec![None, Some(6)]]) {
            Err(InvalidBoardError::NotATile { position, value }) => {
                assert_eq!(Position::from((1, 1)), position);
                assert_eq!(6, value);
            }
            s => unreachable!("Expected an invalid tile, got {s:?}"),
        }

        assert!(matches!(
            Board::from_rows(vec![vec![Some(1u32), None], vec![None, None]]),
            Err(InvalidBoardError::NotATile { .. })
        ));
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let board: Board = Board::empty(BoardSize::try_from(2).unwrap());
        let _ = board.get((2, 0));
    }

    #[test]
    #[should_panic]
    fn setting_a_non_tile_panics() {
        let mut board: Board = Board::empty(BoardSize::try_from(2).unwrap());
        board.set((0, 0), Some(3));
    }
}
