//! Dice pool construction and rolling.

use serde::Serialize;

use super::{DiceValue, DieKind, DieSource};
use crate::error::{DiceError, DiceResult, PoolViolation};

/// Largest pool a single roll may request.
pub const MAX_TOTAL_DICE: u32 = 20;

/// Largest number of hunger dice a pool may hold.
pub const MAX_HUNGER_DICE: usize = 5;

/// Check a roll request against the pool limits.
///
/// Constraints are checked in order: at least one die, at most
/// [`MAX_TOTAL_DICE`], at most [`MAX_HUNGER_DICE`] hunger dice, and no more
/// hunger dice than total dice.
pub fn validate_request(total: u32, hunger: u32) -> Result<(), PoolViolation> {
    if total < 1 {
        return Err(PoolViolation::NoDice);
    }
    if total > MAX_TOTAL_DICE {
        return Err(PoolViolation::TooManyDice { total });
    }
    if hunger as usize > MAX_HUNGER_DICE {
        return Err(PoolViolation::TooManyHunger { hunger });
    }
    if hunger > total {
        return Err(PoolViolation::HungerExceedsTotal { hunger, total });
    }
    Ok(())
}

/// The rolled dice: normal dice and hunger dice, each in draw order.
///
/// The hunger pool never holds more than [`MAX_HUNGER_DICE`] dice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DicePool {
    normal: Vec<DiceValue>,
    hunger: Vec<DiceValue>,
}

impl DicePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll `total` dice, `hunger` of which are hunger dice.
    ///
    /// Normal dice are drawn first. Nothing is drawn if the request is
    /// invalid.
    pub fn roll(total: u32, hunger: u32, source: &mut impl DieSource) -> DiceResult<Self> {
        validate_request(total, hunger)?;
        let normal = (0..total - hunger).map(|_| source.roll_die()).collect();
        let hunger = (0..hunger).map(|_| source.roll_die()).collect();
        Ok(Self { normal, hunger })
    }

    /// Build a pool from literal face values.
    pub fn from_values(normal: &[u8], hunger: &[u8]) -> DiceResult<Self> {
        if hunger.len() > MAX_HUNGER_DICE {
            return Err(DiceError::HungerPoolFull);
        }
        let to_values = |raw: &[u8]| {
            raw.iter()
                .map(|&v| DiceValue::new(v))
                .collect::<DiceResult<Vec<_>>>()
        };
        Ok(Self {
            normal: to_values(normal)?,
            hunger: to_values(hunger)?,
        })
    }

    /// Normal dice in draw order.
    pub fn normal(&self) -> &[DiceValue] {
        &self.normal
    }

    /// Hunger dice in draw order.
    pub fn hunger(&self) -> &[DiceValue] {
        &self.hunger
    }

    /// Dice of one kind.
    pub fn dice(&self, kind: DieKind) -> &[DiceValue] {
        match kind {
            DieKind::Normal => &self.normal,
            DieKind::Hunger => &self.hunger,
        }
    }

    /// Total number of dice in the pool.
    pub fn len(&self) -> usize {
        self.normal.len() + self.hunger.len()
    }

    /// Returns true if the pool holds no dice at all.
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.hunger.is_empty()
    }

    /// Roll one more die onto the end of the given pool and return it.
    ///
    /// A full hunger pool is rejected before anything is drawn.
    pub fn add_die(&mut self, kind: DieKind, source: &mut impl DieSource) -> DiceResult<DiceValue> {
        if kind == DieKind::Hunger && self.hunger.len() >= MAX_HUNGER_DICE {
            return Err(DiceError::HungerPoolFull);
        }
        let value = source.roll_die();
        match kind {
            DieKind::Normal => self.normal.push(value),
            DieKind::Hunger => self.hunger.push(value),
        }
        Ok(value)
    }

    /// Overwrite the normal die at `index`. Callers check the index.
    pub(crate) fn set_normal(&mut self, index: usize, value: DiceValue) {
        self.normal[index] = value;
    }

    /// Remove every die.
    pub fn clear(&mut self) {
        self.normal.clear();
        self.hunger.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn values(dice: &[DiceValue]) -> Vec<u8> {
        dice.iter().map(|d| d.get()).collect()
    }

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.len(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn roll_splits_normal_and_hunger() {
        let mut dice = FixedDice::new(1..=10).unwrap();
        let pool = DicePool::roll(7, 2, &mut dice).unwrap();
        assert_eq!(values(pool.normal()), vec![1, 2, 3, 4, 5]);
        assert_eq!(values(pool.hunger()), vec![6, 7]);
        assert_eq!(pool.len(), 7);
        assert_eq!(dice.drawn(), 7);
    }

    #[test]
    fn roll_all_hunger() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::roll(3, 3, &mut rng).unwrap();
        assert!(pool.normal().is_empty());
        assert_eq!(pool.hunger().len(), 3);
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::roll(20, 5, &mut rng).unwrap();
        assert_eq!(pool.normal().len(), 15);
        assert_eq!(pool.hunger().len(), 5);
        for die in pool.normal().iter().chain(pool.hunger()) {
            assert!((1..=10).contains(&die.get()));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let a = DicePool::roll(6, 2, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = DicePool::roll(6, 2, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_requests_rejected() {
        let mut dice = FixedDice::constant(5).unwrap();
        assert_eq!(
            DicePool::roll(0, 0, &mut dice),
            Err(DiceError::InvalidPoolRequest(PoolViolation::NoDice))
        );
        assert_eq!(
            DicePool::roll(5, 6, &mut dice),
            Err(DiceError::InvalidPoolRequest(PoolViolation::TooManyHunger {
                hunger: 6
            }))
        );
        assert_eq!(
            DicePool::roll(2, 3, &mut dice),
            Err(DiceError::InvalidPoolRequest(
                PoolViolation::HungerExceedsTotal { hunger: 3, total: 2 }
            ))
        );
        assert_eq!(
            DicePool::roll(21, 0, &mut dice),
            Err(DiceError::InvalidPoolRequest(PoolViolation::TooManyDice {
                total: 21
            }))
        );
        assert_eq!(dice.drawn(), 0);
    }

    #[test]
    fn validate_boundaries() {
        assert!(validate_request(1, 0).is_ok());
        assert!(validate_request(1, 1).is_ok());
        assert!(validate_request(20, 5).is_ok());
        assert!(validate_request(5, 5).is_ok());
        assert!(validate_request(20, 6).is_err());
    }

    #[test]
    fn from_values() {
        let pool = DicePool::from_values(&[6, 7], &[1]).unwrap();
        assert_eq!(values(pool.dice(DieKind::Normal)), vec![6, 7]);
        assert_eq!(values(pool.dice(DieKind::Hunger)), vec![1]);
        assert_eq!(
            DicePool::from_values(&[0], &[]),
            Err(DiceError::InvalidDieValue(0))
        );
        assert_eq!(
            DicePool::from_values(&[], &[1, 2, 3, 4, 5, 6]),
            Err(DiceError::HungerPoolFull)
        );
    }

    #[test]
    fn add_normal_die() {
        let mut dice = FixedDice::constant(9).unwrap();
        let mut pool = DicePool::from_values(&[2], &[]).unwrap();
        let added = pool.add_die(DieKind::Normal, &mut dice).unwrap();
        assert_eq!(added.get(), 9);
        assert_eq!(values(pool.normal()), vec![2, 9]);
    }

    #[test]
    fn add_hunger_die_until_full() {
        let mut dice = FixedDice::constant(4).unwrap();
        let mut pool = DicePool::from_values(&[], &[1, 2, 3, 4]).unwrap();
        pool.add_die(DieKind::Hunger, &mut dice).unwrap();
        assert_eq!(pool.hunger().len(), 5);

        let before = pool.clone();
        assert_eq!(
            pool.add_die(DieKind::Hunger, &mut dice),
            Err(DiceError::HungerPoolFull)
        );
        assert_eq!(pool, before);
        assert_eq!(dice.drawn(), 1);

        // Normal dice have no ceiling once rolled.
        pool.add_die(DieKind::Normal, &mut dice).unwrap();
        assert_eq!(pool.normal().len(), 1);
    }

    #[test]
    fn clear_empties_pool() {
        let mut pool = DicePool::from_values(&[6, 7], &[10]).unwrap();
        pool.clear();
        assert!(pool.is_empty());
    }

    #[test]
    fn serializes_as_plain_numbers() {
        let pool = DicePool::from_values(&[6, 10], &[1]).unwrap();
        let json = serde_json::to_value(&pool).unwrap();
        assert_eq!(json, serde_json::json!({"normal": [6, 10], "hunger": [1]}));
    }
}
