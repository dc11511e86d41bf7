//! Rouse Check preset and classification.
//!
//! A Rouse Check is one hunger die against difficulty 1. The evaluator does
//! not receive a mode flag: any pool with no normal dice, exactly one hunger
//! die, and difficulty 1 is classified as a Rouse Check.

use crate::dice::DicePool;
use crate::resolution::Difficulty;

/// Total dice rolled for a Rouse Check.
pub const ROUSE_TOTAL_DICE: u32 = 1;

/// Hunger dice rolled for a Rouse Check.
pub const ROUSE_HUNGER_DICE: u32 = 1;

/// The difficulty a Rouse Check is judged against.
pub const ROUSE_DIFFICULTY: Difficulty = Difficulty::ONE;

/// True if the pool and difficulty have the shape of a Rouse Check.
pub fn is_rouse_check(pool: &DicePool, difficulty: Option<Difficulty>) -> bool {
    pool.normal().is_empty() && pool.hunger().len() == 1 && difficulty == Some(ROUSE_DIFFICULTY)
}
