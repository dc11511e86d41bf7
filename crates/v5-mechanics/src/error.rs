//! Error types for the dice engine.

/// Errors that can occur during dice operations.
///
/// Every error leaves the state it was raised against untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A roll was requested with an invalid combination of dice counts.
    #[error("invalid pool request: {0}")]
    InvalidPoolRequest(PoolViolation),

    /// A willpower reroll was started with no normal dice in the pool.
    #[error("no normal dice to reroll")]
    RejectedEmptyPool,

    /// Selecting another die would exceed the reroll limit.
    #[error("you can only reroll up to 3 dice with willpower")]
    RejectedCapacity,

    /// A reroll was executed without any dice selected.
    #[error("select at least one die to reroll")]
    NoSelection,

    /// A hunger die was added to a full hunger pool.
    #[error("cannot have more than 5 hunger dice")]
    HungerPoolFull,

    /// A die value outside 1-10 was supplied.
    #[error("die value {0} is outside 1-10")]
    InvalidDieValue(u8),

    /// An index does not address a normal die.
    #[error("die {index} does not exist (pool has {len} normal dice)")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of normal dice in the pool.
        len: usize,
    },

    /// A selection operation was attempted outside reroll mode.
    #[error("no willpower reroll in progress")]
    NotSelecting,

    /// A fixed die source was built from an empty sequence.
    #[error("fixed dice need at least one value")]
    EmptyDiceSequence,
}

/// The constraint broken by an invalid pool request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolViolation {
    /// Fewer than one die was requested.
    #[error("you must roll at least 1 die")]
    NoDice,

    /// More dice than the pool ceiling were requested.
    #[error("cannot roll more than 20 dice (requested {total})")]
    TooManyDice {
        /// Requested total.
        total: u32,
    },

    /// More hunger dice than the hunger ceiling were requested.
    #[error("hunger dice cannot exceed 5 (requested {hunger})")]
    TooManyHunger {
        /// Requested hunger dice.
        hunger: u32,
    },

    /// More hunger dice than total dice were requested.
    #[error("hunger dice ({hunger}) cannot exceed total dice ({total})")]
    HungerExceedsTotal {
        /// Requested hunger dice.
        hunger: u32,
        /// Requested total.
        total: u32,
    },
}

impl From<PoolViolation> for DiceError {
    fn from(violation: PoolViolation) -> Self {
        Self::InvalidPoolRequest(violation)
    }
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
