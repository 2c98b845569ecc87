// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Terminal-state detection.

use crate::{Board, TileValue, merged_value};

/// Whether no swipe can change the board: every cell holds a tile and no two neighbouring tiles
/// could merge. Only immediate neighbours matter, as tiles further apart cannot meet in one swipe.
/// Each pair is checked once, against the tile to its right and the tile below it.
pub fn is_over<V>(board: &Board<V>) -> bool
where
    V: TileValue,
{
    if !board.is_full() {
        return false;
    }
    let n = board.size().get();
    let mergeable = |a: Option<V>, b: Option<V>| match (a, b) {
        (Some(a), Some(b)) => a == b && merged_value(a).is_some(),
        _ => false,
    };
    for row in 0..n {
        for column in 0..n {
            let here = board.get((row, column));
            if column + 1 < n && mergeable(here, board.get((row, column + 1))) {
                return false;
            }
            if row + 1 < n && mergeable(here, board.get((row + 1, column))) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use crate::{Board, BoardSize, available_directions, is_over};
    use alloc::boxed::Box;
    use alloc::vec;
    use core::error::Error;

    #[test]
    fn full_board_without_pairs_is_over() -> Result<(), Box<dyn Error>> {
        let mut board = Board::from_rows(vec![
            vec![Some(2u32), Some(4), Some(2), Some(4)],
            vec![Some(4), Some(2), Some(4), Some(2)],
            vec![Some(2), Some(4), Some(2), Some(4)],
            vec![Some(4), Some(2), Some(4), Some(2)],
        ])?;
        assert!(is_over(&board));
        assert_eq!(0, available_directions(&board).count());

        // swapping (1, 1) and (1, 2) puts two 4s side by side
        board.set((1, 1), Some(4));
        board.set((1, 2), Some(2));
        assert!(!is_over(&board));
        assert!(available_directions(&board).count() > 0);
        Ok(())
    }

    #[test]
    fn vertical_pairs_keep_the_game_going() -> Result<(), Box<dyn Error>> {
        let board = Board::from_rows(vec![
            vec![Some(2u32), Some(4), Some(8)],
            vec![Some(16), Some(32), Some(8)],
            vec![Some(2), Some(4), Some(2)],
        ])?;
        assert!(!is_over(&board));
        Ok(())
    }

    #[test]
    fn empty_cells_keep_the_game_going() -> Result<(), Box<dyn Error>> {
        let board: Board = Board::empty(BoardSize::try_from(2)?);
        assert!(!is_over(&board));

        let board = Board::from_rows(vec![vec![Some(2u32), Some(4)], vec![Some(8), None]])?;
        assert!(!is_over(&board));
        Ok(())
    }

    #[test]
    fn saturated_pairs_cannot_merge() -> Result<(), Box<dyn Error>> {
        let board = Board::from_rows(vec![
            vec![Some(128u8), Some(128)],
            vec![Some(2), Some(4)],
        ])?;
        assert!(is_over(&board));
        assert_eq!(0, available_directions(&board).count());
        Ok(())
    }
}
