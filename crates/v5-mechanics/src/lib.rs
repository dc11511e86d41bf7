//! Rules engine for V5 hunger dice pools.
//!
//! Rolls pools of d10s split into normal and hunger dice, tallies successes
//! with critical pairing, classifies the result (messy criticals, bestial
//! failures, Rouse Checks), and runs willpower rerolls of up to three normal
//! dice. Every operation is synchronous and works on state the caller owns;
//! the crate performs no I/O.

pub mod config;
pub mod dice;
pub mod error;
pub mod reroll;
pub mod resolution;
pub mod session;

pub use config::RollerConfig;
pub use dice::{DicePool, DiceValue, DieFace, DieKind, DieSource, FixedDice};
pub use error::{DiceError, DiceResult, PoolViolation};
pub use reroll::{RerollState, Selection, Toggle};
pub use resolution::{Difficulty, Outcome, OutcomeCategory, evaluate, is_rouse_check};
pub use session::RollerSession;
