//! Selectable bet denominations.

use crate::money::Money;
use thiserror::Error;

/// Index preferred once the server supplies a ladder (clamped to its length).
pub const PREFERRED_BET_INDEX: usize = 5;

/// Fallback ladder used until the server sends one.
pub const DEFAULT_BET_LEVELS: [i64; 1] = [1_000_000];

#[derive(Debug, Eq, Error, PartialEq)]
pub enum LadderError {
    #[error("bet ladder is empty")]
    Empty,
    #[error("bet ladder must be strictly increasing (level {index} is {value})")]
    NotIncreasing { index: usize, value: i64 },
    #[error("bet level {index} must be positive (got {value})")]
    NonPositive { index: usize, value: i64 },
}

/// Direction of a bet adjustment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BetDirection {
    Increase,
    Decrease,
}

/// A non-empty, strictly increasing list of bets and the selected position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetLadder {
    levels: Vec<Money>,
    index: usize,
}

impl Default for BetLadder {
    fn default() -> Self {
        Self {
            levels: DEFAULT_BET_LEVELS
                .iter()
                .copied()
                .map(Money::from_minor_units)
                .collect(),
            index: 0,
        }
    }
}

impl BetLadder {
    /// Build a ladder, clamping `index` into range.
    pub fn new(levels: &[i64], index: usize) -> Result<Self, LadderError> {
        if levels.is_empty() {
            return Err(LadderError::Empty);
        }
        for (i, &value) in levels.iter().enumerate() {
            if value <= 0 {
                return Err(LadderError::NonPositive { index: i, value });
            }
            if i > 0 && value <= levels[i - 1] {
                return Err(LadderError::NotIncreasing { index: i, value });
            }
        }
        let levels: Vec<Money> = levels.iter().copied().map(Money::from_minor_units).collect();
        let index = index.min(levels.len() - 1);
        Ok(Self { levels, index })
    }

    #[must_use]
    pub fn current(&self) -> Money {
        self.levels[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn levels(&self) -> &[Money] {
        &self.levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; a ladder cannot be built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Step one level. Returns false (and changes nothing) at either end.
    pub fn step(&mut self, direction: BetDirection) -> bool {
        match direction {
            BetDirection::Increase if self.index + 1 < self.levels.len() => {
                self.index += 1;
                true
            }
            BetDirection::Decrease if self.index > 0 => {
                self.index -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_ladder() {
        let ladder = BetLadder::default();
        assert_eq!(ladder.len(), 1);
        assert_eq!(ladder.current(), Money::from_minor_units(1_000_000));
    }

    #[test]
    fn test_index_is_clamped() {
        let ladder = BetLadder::new(&[1_000_000, 2_000_000], PREFERRED_BET_INDEX).unwrap();
        assert_eq!(ladder.index(), 1);
        assert_eq!(ladder.current().to_display(), 2.0);
    }

    #[test]
    fn test_rejects_invalid_levels() {
        assert_eq!(BetLadder::new(&[], 0), Err(LadderError::Empty));
        assert_eq!(
            BetLadder::new(&[2, 2], 0),
            Err(LadderError::NotIncreasing { index: 1, value: 2 })
        );
        assert_eq!(
            BetLadder::new(&[3, 1], 0),
            Err(LadderError::NotIncreasing { index: 1, value: 1 })
        );
        assert_eq!(
            BetLadder::new(&[0, 1], 0),
            Err(LadderError::NonPositive { index: 0, value: 0 })
        );
    }

    #[test]
    fn test_step_is_noop_at_ends() {
        let mut ladder = BetLadder::new(&[1, 2, 3], 0).unwrap();
        assert!(!ladder.step(BetDirection::Decrease));
        assert_eq!(ladder.index(), 0);
        assert!(ladder.step(BetDirection::Increase));
        assert!(ladder.step(BetDirection::Increase));
        assert!(!ladder.step(BetDirection::Increase));
        assert_eq!(ladder.current(), Money::from_minor_units(3));
    }

    proptest! {
        #[test]
        fn step_never_leaves_bounds(
            len in 1usize..20,
            start in 0usize..40,
            moves in proptest::collection::vec(any::<bool>(), 0..100),
        ) {
            let levels: Vec<i64> = (1..=len as i64).map(|n| n * 100_000).collect();
            let mut ladder = BetLadder::new(&levels, start).unwrap();
            prop_assert!(ladder.index() < len);
            for up in moves {
                let before = ladder.index();
                let direction = if up { BetDirection::Increase } else { BetDirection::Decrease };
                let moved = ladder.step(direction);
                prop_assert!(ladder.index() < len);
                if !moved {
                    prop_assert_eq!(ladder.index(), before);
                }
            }
        }
    }
}
