// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Placement of new tiles into empty cells.

use crate::{Board, Position, TileValue};
use core::error::Error;
use core::fmt::{Display, Formatter};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A probability expressed as `numerator / denominator`. Always within `[0, 1]` with a non-zero
/// denominator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct Ratio {
    numerator: u32,
    denominator: u32,
}

impl Ratio {
    /// A ratio of `numerator / denominator`, or `None` if the denominator is zero or the ratio
    /// exceeds one.
    pub const fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 || numerator > denominator {
            None
        } else {
            Some(Self {
                numerator,
                denominator,
            })
        }
    }

    /// The numerator.
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// The denominator.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }
}

/// An error which denotes a malformed [`Ratio`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RatioError(u32, u32);

impl Display for RatioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{}/{} is not a probability: the denominator must be non-zero and at least the numerator",
            self.0, self.1
        ))
    }
}

impl Error for RatioError {}

impl TryFrom<(u32, u32)> for Ratio {
    type Error = RatioError;

    fn try_from((numerator, denominator): (u32, u32)) -> Result<Self, Self::Error> {
        Ratio::new(numerator, denominator).ok_or(RatioError(numerator, denominator))
    }
}

impl From<Ratio> for (u32, u32) {
    fn from(value: Ratio) -> Self {
        (value.numerator, value.denominator)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The result of trying to add a tile to a board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum SpawnOutcome<V> {
    /// A tile of `value` belongs at `position`.
    Spawned {
        /// The chosen empty cell.
        position: Position,
        /// Either 2 or 4.
        value: V,
    },
    /// The board was full; nothing was placed.
    NoEmptyCell,
}

impl<V> SpawnOutcome<V>
where
    V: TileValue,
{
    /// Write this outcome into the board. A [`SpawnOutcome::NoEmptyCell`] leaves it untouched.
    pub fn apply_to(&self, board: &mut Board<V>) {
        if let SpawnOutcome::Spawned { position, value } = *self {
            board.set(position, Some(value));
        }
    }
}

/// Chooses where new tiles appear and what they are worth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Spawner {
    four_chance: Ratio,
}

impl Spawner {
    /// The chance of spawning a 4 unless configured otherwise.
    pub const DEFAULT_FOUR_CHANCE: Ratio = Ratio {
        numerator: 1,
        denominator: 4,
    };

    /// Create a spawner which produces a 4 with probability `four_chance` and a 2 otherwise.
    pub fn new(four_chance: Ratio) -> Self {
        Self { four_chance }
    }

    /// The probability of spawning a 4.
    pub fn four_chance(&self) -> Ratio {
        self.four_chance
    }

    /// Pick an empty cell uniformly at random and a value for it. The board itself is not
    /// modified; see [`SpawnOutcome::apply_to`].
    pub fn spawn<V, R>(&self, board: &Board<V>, rng: &mut R) -> SpawnOutcome<V>
    where
        V: TileValue,
        R: Rng + ?Sized,
    {
        let empty = board.empty_count();
        if empty == 0 {
            return SpawnOutcome::NoEmptyCell;
        }
        let Some(position) = board.empty_cells().nth(rng.gen_range(0..empty)) else {
            return SpawnOutcome::NoEmptyCell;
        };
        let two = V::one() + V::one();
        let value = if rng.gen_ratio(self.four_chance.numerator, self.four_chance.denominator) {
            two + two
        } else {
            two
        };
        SpawnOutcome::Spawned { position, value }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FOUR_CHANCE)
    }
}

#[cfg(test)]
mod test {
    use crate::{Board, BoardSize, Ratio, SpawnOutcome, Spawner};
    use alloc::boxed::Box;
    use alloc::vec;
    use core::error::Error;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn full_board_is_a_no_op() -> Result<(), Box<dyn Error>> {
        let board = Board::from_rows(vec![vec![Some(2u32), Some(4)], vec![Some(8), Some(16)]])?;
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(
            SpawnOutcome::NoEmptyCell,
            Spawner::default().spawn(&board, &mut rng)
        );
        Ok(())
    }

    #[test]
    fn spawns_only_into_empty_cells() -> Result<(), Box<dyn Error>> {
        let mut rng = SmallRng::seed_from_u64(42);
        let spawner = Spawner::default();
        let mut board: Board = Board::empty(BoardSize::try_from(4)?);
        for placed in 1..=16 {
            let outcome = spawner.spawn(&board, &mut rng);
            match outcome {
                SpawnOutcome::Spawned { position, value } => {
                    assert_eq!(None, board.get(position));
                    assert!(value == 2 || value == 4);
                }
                SpawnOutcome::NoEmptyCell => unreachable!("board still had room"),
            }
            outcome.apply_to(&mut board);
            assert_eq!(placed, board.tile_count());
        }
        assert!(board.is_full());
        assert_eq!(SpawnOutcome::NoEmptyCell, spawner.spawn(&board, &mut rng));
        Ok(())
    }

    #[test]
    fn four_chance_is_honoured() -> Result<(), Box<dyn Error>> {
        let board: Board<u16> = Board::empty(BoardSize::try_from(2)?);
        let mut rng = SmallRng::seed_from_u64(3);

        let always_two = Spawner::new(Ratio::new(0, 1).ok_or("ratio")?);
        let always_four = Spawner::new(Ratio::new(5, 5).ok_or("ratio")?);
        for _ in 0..64 {
            assert!(matches!(
                always_two.spawn(&board, &mut rng),
                SpawnOutcome::Spawned { value: 2, .. }
            ));
            assert!(matches!(
                always_four.spawn(&board, &mut rng),
                SpawnOutcome::Spawned { value: 4, .. }
            ));
        }

        let spawner = Spawner::default();
        let fours = (0..4000)
            .filter(|_| {
                matches!(
                    spawner.spawn(&board, &mut rng),
                    SpawnOutcome::Spawned { value: 4, .. }
                )
            })
            .count();
        assert!((800..1200).contains(&fours), "got {fours} fours");
        Ok(())
    }

    #[test]
    fn ratios_are_validated() {
        assert!(Ratio::new(1, 0).is_none());
        assert!(Ratio::new(3, 2).is_none());
        assert_eq!(Some(Spawner::DEFAULT_FOUR_CHANCE), Ratio::new(1, 4));
        assert!(Ratio::try_from((2, 1)).is_err());
    }
}
