//! Willpower rerolls.
//!
//! A reroll moves through two states. [`RerollState::begin`] enters selection
//! mode with an empty selection, [`RerollState::toggle`] marks or unmarks up
//! to [`MAX_REROLL_SELECTION`] normal dice, and [`RerollState::execute`]
//! redraws exactly the marked dice before returning to idle.
//! [`RerollState::cancel`] returns to idle without touching the pool.
//!
//! Hunger dice can never be rerolled.

use crate::dice::{DicePool, DieSource};
use crate::error::{DiceError, DiceResult};

/// Most normal dice a single willpower reroll may redraw.
pub const MAX_REROLL_SELECTION: usize = 3;

/// Normal-die indices marked for reroll, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Selected indices in pick order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns true if `index` is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of selected dice.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The die was added to the selection.
    Selected,
    /// The die was removed from the selection.
    Deselected,
}

/// Where a willpower reroll stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RerollState {
    /// No reroll in progress.
    #[default]
    Idle,
    /// Dice are being picked for a reroll.
    Selecting(Selection),
}

impl RerollState {
    /// Returns true while dice are being picked.
    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }

    /// The current selection, if a reroll is in progress.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Idle => None,
            Self::Selecting(selection) => Some(selection),
        }
    }

    /// Enter selection mode with an empty selection.
    ///
    /// Rejected if the pool has no normal dice. Starting again while already
    /// selecting discards the previous picks.
    pub fn begin(&mut self, pool: &DicePool) -> DiceResult<()> {
        if pool.normal().is_empty() {
            return Err(DiceError::RejectedEmptyPool);
        }
        *self = Self::Selecting(Selection::default());
        Ok(())
    }

    /// Select or deselect the normal die at `index`.
    ///
    /// `normal_len` is the number of normal dice currently in the pool.
    pub fn toggle(&mut self, index: usize, normal_len: usize) -> DiceResult<Toggle> {
        let Self::Selecting(selection) = self else {
            return Err(DiceError::NotSelecting);
        };
        if index >= normal_len {
            return Err(DiceError::IndexOutOfRange {
                index,
                len: normal_len,
            });
        }
        if let Some(pos) = selection.indices.iter().position(|&i| i == index) {
            selection.indices.remove(pos);
            return Ok(Toggle::Deselected);
        }
        if selection.indices.len() >= MAX_REROLL_SELECTION {
            return Err(DiceError::RejectedCapacity);
        }
        selection.indices.push(index);
        Ok(Toggle::Selected)
    }

    /// Redraw every selected normal die and return to idle.
    ///
    /// Returns the rerolled indices in ascending order. On error neither the
    /// pool nor the selection changes.
    pub fn execute(
        &mut self,
        pool: &mut DicePool,
        source: &mut impl DieSource,
    ) -> DiceResult<Vec<usize>> {
        let Self::Selecting(selection) = self else {
            return Err(DiceError::NotSelecting);
        };
        if selection.is_empty() {
            return Err(DiceError::NoSelection);
        }
        let len = pool.normal().len();
        if let Some(&index) = selection.indices.iter().find(|&&i| i >= len) {
            return Err(DiceError::IndexOutOfRange { index, len });
        }

        let mut indices = selection.indices.clone();
        indices.sort_unstable();
        for &index in &indices {
            pool.set_normal(index, source.roll_die());
        }
        *self = Self::Idle;
        Ok(indices)
    }

    /// Leave selection mode without rerolling anything.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
