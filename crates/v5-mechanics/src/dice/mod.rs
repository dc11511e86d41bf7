//! Dice values, die sources, and pools.
//!
//! Every die in a V5 pool is a d10. Dice are either normal or hunger dice;
//! the distinction only matters during resolution and for which dice a
//! willpower reroll may touch.

pub mod pool;

pub use pool::DicePool;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// Number of faces on a V5 die.
pub const DIE_SIDES: u8 = 10;

/// The value shown on a single d10, always in 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    /// Create a die value, rejecting anything outside 1-10.
    pub fn new(value: u8) -> DiceResult<Self> {
        if (1..=DIE_SIDES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DiceError::InvalidDieValue(value))
        }
    }

    /// The face value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// True for 6-10, the faces that score a success.
    pub fn is_success(self) -> bool {
        self.0 >= 6
    }

    /// True for a 10.
    pub fn is_ten(self) -> bool {
        self.0 == DIE_SIDES
    }

    /// True for a 1.
    pub fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = DiceError;

    fn try_from(value: u8) -> DiceResult<Self> {
        Self::new(value)
    }
}

impl From<DiceValue> for u8 {
    fn from(value: DiceValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DiceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two pools a die belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DieKind {
    /// A regular die.
    Normal,
    /// A hunger die.
    Hunger,
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Hunger => write!(f, "hunger"),
        }
    }
}

/// How a single die face reads on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DieFace {
    /// A hunger die showing 1.
    Bestial,
    /// No success (1-5, or 2-5 on a hunger die).
    Failure,
    /// A single success (6-9).
    Success,
    /// A 10, which can pair into a critical.
    Critical,
}

impl DieFace {
    /// Classify a die value for a die of the given kind.
    pub fn classify(value: DiceValue, kind: DieKind) -> Self {
        match (value.get(), kind) {
            (1, DieKind::Hunger) => Self::Bestial,
            (10, _) => Self::Critical,
            (6..=9, _) => Self::Success,
            _ => Self::Failure,
        }
    }
}

/// A source of d10 rolls.
///
/// Implementations must return each of 1-10 with equal probability, except
/// for deliberately scripted sources such as [`FixedDice`].
pub trait DieSource {
    /// Roll one d10.
    fn roll_die(&mut self) -> DiceValue;
}

fn roll_with<R: Rng + ?Sized>(rng: &mut R) -> DiceValue {
    DiceValue(rng.random_range(1..=DIE_SIDES))
}

impl DieSource for StdRng {
    fn roll_die(&mut self) -> DiceValue {
        roll_with(self)
    }
}

impl<S: DieSource + ?Sized> DieSource for &mut S {
    fn roll_die(&mut self) -> DiceValue {
        (**self).roll_die()
    }
}

/// A scripted die source that replays a fixed sequence, cycling when it
/// runs out.
#[derive(Debug, Clone)]
pub struct FixedDice {
    values: Vec<DiceValue>,
    next: usize,
}

impl FixedDice {
    /// Build a source from raw values. Fails on an empty sequence or a value
    /// outside 1-10.
    pub fn new(values: impl IntoIterator<Item = u8>) -> DiceResult<Self> {
        let values = values
            .into_iter()
            .map(DiceValue::new)
            .collect::<DiceResult<Vec<_>>>()?;
        if values.is_empty() {
            return Err(DiceError::EmptyDiceSequence);
        }
        Ok(Self { values, next: 0 })
    }

    /// A source that always rolls the same value.
    pub fn constant(value: u8) -> DiceResult<Self> {
        Self::new([value])
    }

    /// How many dice have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl DieSource for FixedDice {
    fn roll_die(&mut self) -> DiceValue {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
