//! Outcome evaluation for V5 pools.
//!
//! Each die showing 6-10 scores one success. Every two 10s across both pools
//! form a critical pair worth two extra successes; a pair involving a hunger
//! 10 makes the critical messy. Hunger dice showing 1 turn failures bestial
//! and raise the compulsion warning on successes.

pub mod rouse;

pub use rouse::{ROUSE_DIFFICULTY, is_rouse_check};

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::dice::DicePool;

/// Number of successes a roll must reach. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(NonZeroU32);

impl Difficulty {
    /// Difficulty 1.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Build a difficulty. Zero means "no difficulty" and yields `None`.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// The number of successes required.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an evaluated roll is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    /// Rouse Check scored a success.
    RouseSuccess,
    /// Rouse Check failed.
    RouseFailure,
    /// Rouse Check failed on a hunger 1.
    RouseBestialFailure,
    /// Met the difficulty with a critical pair including a hunger 10.
    MessyCriticalSuccess,
    /// Met the difficulty with a critical pair of normal 10s.
    CriticalSuccess,
    /// Met the difficulty.
    PlainSuccess,
    /// Missed the difficulty with at least one hunger 1.
    BestialFailure,
    /// Missed the difficulty.
    PlainFailure,
    /// No difficulty given; only the tally is reported.
    UndifferentiatedTally,
}

impl OutcomeCategory {
    /// True for every category that met its difficulty.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            Self::RouseSuccess
                | Self::MessyCriticalSuccess
                | Self::CriticalSuccess
                | Self::PlainSuccess
        )
    }

    /// True for every category that missed its difficulty.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Self::RouseFailure
                | Self::RouseBestialFailure
                | Self::BestialFailure
                | Self::PlainFailure
        )
    }

    /// True for the Rouse Check categories.
    pub fn is_rouse(self) -> bool {
        matches!(
            self,
            Self::RouseSuccess | Self::RouseFailure | Self::RouseBestialFailure
        )
    }
}

impl std::fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RouseSuccess => write!(f, "Rouse Check Success - No Hunger gained"),
            Self::RouseFailure => write!(f, "Rouse Check Failed - Hunger increases by 1"),
            Self::RouseBestialFailure => write!(
                f,
                "Rouse Check Bestial Failure - Hunger increases & Compulsion check"
            ),
            Self::MessyCriticalSuccess => write!(f, "Messy Critical Success"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::PlainSuccess => write!(f, "Success"),
            Self::BestialFailure => write!(f, "Bestial Failure"),
            Self::PlainFailure => write!(f, "Failure"),
            Self::UndifferentiatedTally => write!(f, "Total Successes"),
        }
    }
}

/// The evaluated result of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Successes including critical pair bonuses.
    pub success_count: u32,
    /// Number of pairs of 10s.
    pub critical_pair_count: u32,
    /// At least one critical pair was rolled.
    pub has_critical: bool,
    /// A critical pair was rolled and at least one 10 was on a hunger die.
    pub is_messy_critical: bool,
    /// Hunger dice showing 1.
    pub hunger_ones_count: u32,
    /// The difficulty the roll was judged against.
    pub difficulty: Option<Difficulty>,
    /// The classification.
    pub category: OutcomeCategory,
}

impl Outcome {
    /// True when a hunger die shows 1 and the roll still reached its
    /// difficulty (or no difficulty was set).
    ///
    /// This is advisory and independent of [`Outcome::category`].
    pub fn bestial_compulsion(&self) -> bool {
        let needed = self.difficulty.map_or(0, Difficulty::get);
        self.hunger_ones_count > 0 && self.success_count >= needed
    }
}

/// Evaluate a pool against an optional difficulty.
///
/// Pure: the result depends only on the multiset of values in each pool and
/// the difficulty.
pub fn evaluate(pool: &DicePool, difficulty: Option<Difficulty>) -> Outcome {
    let mut success_count: u32 = 0;
    let mut normal_tens: u32 = 0;
    let mut hunger_tens: u32 = 0;
    let mut hunger_ones_count: u32 = 0;

    for die in pool.normal() {
        if die.is_success() {
            success_count += 1;
        }
        if die.is_ten() {
            normal_tens += 1;
        }
    }

    for die in pool.hunger() {
        if die.is_success() {
            success_count += 1;
        }
        if die.is_ten() {
            hunger_tens += 1;
        }
        if die.is_one() {
            hunger_ones_count += 1;
        }
    }

    let critical_pair_count = (normal_tens + hunger_tens) / 2;
    success_count += critical_pair_count * 2;

    let has_critical = critical_pair_count >= 1;
    let is_messy_critical = has_critical && hunger_tens > 0;

    let category = if is_rouse_check(pool, difficulty) {
        if success_count >= 1 {
            OutcomeCategory::RouseSuccess
        } else if hunger_ones_count > 0 {
            OutcomeCategory::RouseBestialFailure
        } else {
            OutcomeCategory::RouseFailure
        }
    } else if let Some(difficulty) = difficulty {
        if success_count >= difficulty.get() {
            if is_messy_critical {
                OutcomeCategory::MessyCriticalSuccess
            } else if has_critical {
                OutcomeCategory::CriticalSuccess
            } else {
                OutcomeCategory::PlainSuccess
            }
        } else if hunger_ones_count > 0 {
            OutcomeCategory::BestialFailure
        } else {
            OutcomeCategory::PlainFailure
        }
    } else {
        OutcomeCategory::UndifferentiatedTally
    };

    Outcome {
        success_count,
        critical_pair_count,
        has_critical,
        is_messy_critical,
        hunger_ones_count,
        difficulty,
        category,
    }
}
