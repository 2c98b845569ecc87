// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Slide and merge resolution.
//!
//! A swipe is resolved one line at a time (a row for [`Direction::Left`] and
//! [`Direction::Right`], a column for [`Direction::Up`] and [`Direction::Down`]). Each line is
//! viewed from its leading edge, the end that tiles travel towards, so that the same reduction
//! serves all four directions. Tiles are visited from the one just behind the edge towards the
//! trailing end; each either slides up to its blocker, merges into it, or stays put. A slot which
//! absorbed a merge cannot absorb another during the same swipe, so `[2, 2, 2, 2]` becomes
//! `[4, 4, _, _]` and never `[8, _, _, _]`.

use crate::{Board, BoardSize, Direction, Position, TileValue, merged_value};
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One tile's transition during a swipe. Tiles which stay where they are produce no event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct MoveEvent<V> {
    from: Position,
    to: Position,
    value: V,
    merged: bool,
}

impl<V> MoveEvent<V>
where
    V: Copy,
{
    /// Where the tile started.
    pub fn from(&self) -> Position {
        self.from
    }

    /// Where the tile ended up.
    pub fn to(&self) -> Position {
        self.to
    }

    /// The value now held at [`MoveEvent::to`]. For a merge, this is the doubled value.
    pub fn value(&self) -> V {
        self.value
    }

    /// Whether this tile was consumed by merging into the tile at [`MoveEvent::to`].
    pub fn merged(&self) -> bool {
        self.merged
    }
}

/// The outcome of resolving a swipe against a board.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Resolution<V> {
    /// The board after every line was resolved.
    pub board: Board<V>,
    /// The tiles which moved, line by line, in resolution order.
    pub events: Vec<MoveEvent<V>>,
    /// The sum of every value produced by a merge.
    pub score_delta: u64,
    /// Whether any tile left its cell.
    pub moved: bool,
}

impl<V> Resolution<V> {
    /// Whether the swipe had no effect at all.
    pub fn is_noop(&self) -> bool {
        !self.moved
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Slide<V> {
    from: usize,
    to: usize,
    value: V,
    merged: bool,
}

/// The cells of line `line`, ordered from the leading edge of `dir` to the trailing edge.
fn line_cells(size: BoardSize, dir: Direction, line: usize) -> impl Iterator<Item = Position> {
    let last = size.get() - 1;
    let edge = Position::from(match dir {
        Direction::Up => (0, line),
        Direction::Down => (last, line),
        Direction::Left => (line, 0),
        Direction::Right => (line, last),
    });
    (0..size.get()).filter_map(move |offset| edge.shift(-dir, offset))
}

/// Reduce a single line towards index zero in place, recording each slide. `merged` must be
/// all-false on entry and as long as `line`. Returns the points earned.
fn resolve_line<V>(line: &mut [Option<V>], merged: &mut [bool], slides: &mut Vec<Slide<V>>) -> u64
where
    V: TileValue,
{
    let mut score = 0;
    for p in 1..line.len() {
        let Some(value) = line[p] else {
            continue;
        };
        let (target, result, merge) = match (0..p).rev().find(|&k| line[k].is_some()) {
            None => (0, value, false),
            Some(k) => match line[k]
                .filter(|&blocker| blocker == value && !merged[k])
                .and_then(merged_value)
            {
                Some(doubled) => (k, doubled, true),
                None => (k + 1, value, false),
            },
        };
        if target == p {
            continue;
        }
        line[p] = None;
        line[target] = Some(result);
        if merge {
            merged[target] = true;
            score += Into::<u64>::into(result);
        }
        slides.push(Slide {
            from: p,
            to: target,
            value: result,
            merged: merge,
        });
    }
    score
}

/// Resolve a swipe in `direction`. Pure: the same board and direction always give the same
/// resolution. No tile is spawned.
pub fn resolve<V>(board: &Board<V>, direction: Direction) -> Resolution<V>
where
    V: TileValue,
{
    let size = board.size();
    let n = size.get();
    let mut next = Board::empty(size);
    let mut events = Vec::new();
    let mut score_delta = 0;

    let mut line = vec![None; n];
    let mut merged = vec![false; n];
    let mut slides = Vec::with_capacity(n);
    for idx in 0..n {
        let cells: Vec<Position> = line_cells(size, direction, idx).collect();
        for (slot, &position) in line.iter_mut().zip(&cells) {
            *slot = board.get(position);
        }
        merged.fill(false);
        slides.clear();

        score_delta += resolve_line(&mut line, &mut merged, &mut slides);

        events.extend(slides.iter().map(|slide| MoveEvent {
            from: cells[slide.from],
            to: cells[slide.to],
            value: slide.value,
            merged: slide.merged,
        }));
        for (slot, &position) in line.iter().zip(&cells) {
            next.set(position, *slot);
        }
    }

    let moved = !events.is_empty();
    Resolution {
        board: next,
        events,
        score_delta,
        moved,
    }
}

/// Whether a swipe in `direction` would move at least one tile.
pub fn can_move<V>(board: &Board<V>, direction: Direction) -> bool
where
    V: TileValue,
{
    resolve(board, direction).moved
}

/// The directions in which a swipe would move at least one tile.
pub fn available_directions<V>(board: &Board<V>) -> impl Iterator<Item = Direction> + '_
where
    V: TileValue,
{
    Direction::ALL
        .into_iter()
        .filter(move |&dir| can_move(board, dir))
}
