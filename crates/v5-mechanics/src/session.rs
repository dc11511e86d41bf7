//! Roller session state.
//!
//! `RollerSession` owns everything a single player's roller needs: the
//! current pool, the difficulty it is judged against, the willpower reroll
//! state, and the die source. Independent sessions share nothing.

use rand::rngs::StdRng;

use crate::config::RollerConfig;
use crate::dice::pool::DicePool;
use crate::dice::{DiceValue, DieKind, DieSource};
use crate::error::DiceResult;
use crate::reroll::{RerollState, Toggle};
use crate::resolution::rouse::{ROUSE_DIFFICULTY, ROUSE_HUNGER_DICE, ROUSE_TOTAL_DICE};
use crate::resolution::{Difficulty, Outcome, evaluate};

/// A roller with its current pool and reroll state.
#[derive(Debug, Clone)]
pub struct RollerSession<S = StdRng> {
    pool: DicePool,
    difficulty: Option<Difficulty>,
    reroll: RerollState,
    source: S,
}

impl RollerSession<StdRng> {
    /// Create a session using the RNG described by `config`.
    pub fn new(config: &RollerConfig) -> Self {
        Self::with_source(config.rng())
    }
}

impl<S: DieSource> RollerSession<S> {
    /// Create a session drawing from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            pool: DicePool::new(),
            difficulty: None,
            reroll: RerollState::Idle,
            source,
        }
    }

    /// The current pool.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// The difficulty of the current roll.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// The willpower reroll state.
    pub fn reroll_state(&self) -> &RerollState {
        &self.reroll
    }

    /// Evaluate the current pool, or `None` if nothing has been rolled.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.pool.is_empty() {
            None
        } else {
            Some(evaluate(&self.pool, self.difficulty))
        }
    }

    /// Replace the pool with a fresh roll.
    ///
    /// Ends any reroll in progress. An invalid request leaves the session
    /// untouched.
    pub fn roll(
        &mut self,
        total: u32,
        hunger: u32,
        difficulty: Option<Difficulty>,
    ) -> DiceResult<Outcome> {
        let pool = DicePool::roll(total, hunger, &mut self.source)?;
        self.pool = pool;
        self.difficulty = difficulty;
        self.reroll.cancel();
        Ok(evaluate(&self.pool, self.difficulty))
    }

    /// Roll a Rouse Check: one hunger die against difficulty 1.
    pub fn rouse_check(&mut self) -> DiceResult<Outcome> {
        self.roll(ROUSE_TOTAL_DICE, ROUSE_HUNGER_DICE, Some(ROUSE_DIFFICULTY))
    }

    /// Empty the pool, forget the difficulty and end any reroll.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.difficulty = None;
        self.reroll.cancel();
    }

    /// Roll one extra die onto the pool.
    pub fn add_die(&mut self, kind: DieKind) -> DiceResult<DiceValue> {
        self.pool.add_die(kind, &mut self.source)
    }

    /// Start picking normal dice for a willpower reroll.
    pub fn begin_reroll(&mut self) -> DiceResult<()> {
        self.reroll.begin(&self.pool)
    }

    /// Select or deselect the normal die at `index`.
    pub fn toggle_selection(&mut self, index: usize) -> DiceResult<Toggle> {
        self.reroll.toggle(index, self.pool.normal().len())
    }

    /// Redraw the selected dice and return the new outcome together with the
    /// rerolled indices.
    pub fn execute_reroll(&mut self) -> DiceResult<(Vec<usize>, Outcome)> {
        let rerolled = self.reroll.execute(&mut self.pool, &mut self.source)?;
        Ok((rerolled, evaluate(&self.pool, self.difficulty)))
    }

    /// Abandon the reroll in progress.
    pub fn cancel_reroll(&mut self) {
        self.reroll.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;
    use crate::error::{DiceError, PoolViolation};
    use crate::resolution::OutcomeCategory;

    fn session(values: &[u8]) -> RollerSession<FixedDice> {
        RollerSession::with_source(FixedDice::new(values.iter().copied()).unwrap())
    }

    fn normal_values(s: &RollerSession<FixedDice>) -> Vec<u8> {
        s.pool().normal().iter().map(|d| d.get()).collect()
    }

    #[test]
    fn new_session_is_empty() {
        let s = RollerSession::new(&RollerConfig::default().with_seed(1));
        assert!(s.pool().is_empty());
        assert_eq!(s.difficulty(), None);
        assert_eq!(s.outcome(), None);
        assert!(!s.reroll_state().is_selecting());
    }

    #[test]
    fn roll_evaluates() {
        let mut s = session(&[6, 7, 10, 10]);
        let outcome = s.roll(4, 0, Difficulty::new(6)).unwrap();
        assert_eq!(outcome.success_count, 6);
        assert_eq!(outcome.category, OutcomeCategory::CriticalSuccess);
        assert_eq!(s.outcome(), Some(outcome));
    }

    #[test]
    fn rouse_check() {
        let mut s = session(&[1]);
        let outcome = s.rouse_check().unwrap();
        assert_eq!(outcome.category, OutcomeCategory::RouseBestialFailure);
        assert_eq!(s.pool().hunger().len(), 1);
        assert!(s.pool().normal().is_empty());
        assert_eq!(s.difficulty(), Difficulty::new(1));
    }

    #[test]
    fn failed_roll_keeps_state() {
        let mut s = session(&[5]);
        s.roll(3, 1, Difficulty::new(2)).unwrap();
        s.begin_reroll().unwrap();
        s.toggle_selection(0).unwrap();
        let before = (s.pool().clone(), s.reroll_state().clone());

        assert_eq!(
            s.roll(0, 0, None),
            Err(DiceError::InvalidPoolRequest(PoolViolation::NoDice))
        );
        assert_eq!(s.pool(), &before.0);
        assert_eq!(s.reroll_state(), &before.1);
        assert_eq!(s.difficulty(), Difficulty::new(2));
    }

    #[test]
    fn fresh_roll_ends_reroll() {
        let mut s = session(&[5]);
        s.roll(3, 0, None).unwrap();
        s.begin_reroll().unwrap();
        s.toggle_selection(1).unwrap();
        s.roll(2, 0, None).unwrap();
        assert_eq!(s.reroll_state(), &RerollState::Idle);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = session(&[5]);
        s.roll(3, 1, Difficulty::new(3)).unwrap();
        s.begin_reroll().unwrap();
        s.clear();
        assert!(s.pool().is_empty());
        assert_eq!(s.difficulty(), None);
        assert_eq!(s.reroll_state(), &RerollState::Idle);
        assert_eq!(s.outcome(), None);
    }

    #[test]
    fn willpower_reroll_flow() {
        let mut s = session(&[2, 3, 4, 5, 9]);
        s.roll(4, 0, Difficulty::new(2)).unwrap();
        assert_eq!(normal_values(&s), vec![2, 3, 4, 5]);

        s.begin_reroll().unwrap();
        s.toggle_selection(0).unwrap();
        s.toggle_selection(2).unwrap();
        let (rerolled, outcome) = s.execute_reroll().unwrap();

        assert_eq!(rerolled, vec![0, 2]);
        assert_eq!(normal_values(&s), vec![9, 3, 2, 5]);
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.category, OutcomeCategory::PlainFailure);
        assert_eq!(s.reroll_state(), &RerollState::Idle);
    }

    #[test]
    fn reroll_rejected_with_only_hunger_dice() {
        let mut s = session(&[5]);
        s.rouse_check().unwrap();
        assert_eq!(s.begin_reroll(), Err(DiceError::RejectedEmptyPool));
    }

    #[test]
    fn cancel_keeps_dice() {
        let mut s = session(&[2, 3, 4]);
        s.roll(3, 0, None).unwrap();
        s.begin_reroll().unwrap();
        s.toggle_selection(0).unwrap();
        s.cancel_reroll();
        assert_eq!(normal_values(&s), vec![2, 3, 4]);
        assert_eq!(s.execute_reroll(), Err(DiceError::NotSelecting));
    }

    #[test]
    fn add_dice() {
        let mut s = session(&[7]);
        s.roll(1, 0, None).unwrap();
        assert_eq!(s.add_die(DieKind::Normal).unwrap().get(), 7);
        for _ in 0..5 {
            s.add_die(DieKind::Hunger).unwrap();
        }
        assert_eq!(s.add_die(DieKind::Hunger), Err(DiceError::HungerPoolFull));
        assert_eq!(s.pool().hunger().len(), 5);
        assert_eq!(s.pool().normal().len(), 2);
    }

    #[test]
    fn add_die_while_selecting_keeps_selection() {
        let mut s = session(&[4]);
        s.roll(2, 0, None).unwrap();
        s.begin_reroll().unwrap();
        s.toggle_selection(1).unwrap();
        s.add_die(DieKind::Normal).unwrap();
        assert!(s.reroll_state().selection().unwrap().contains(1));
        assert_eq!(s.toggle_selection(2), Ok(Toggle::Selected));
    }
}
