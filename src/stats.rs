//! Player stats: capped resource pools, attributes, and experience
//!
//! Health and mana share one `Pool` type so damage, spending, and
//! restoration are always capped the same way. Experience accumulates into
//! level-ups which raise both pool maximums.
//!
//! # Design Philosophy
//!
//! Pools use f32 so percentage-based UI bars and fractional restores fall
//! out naturally; attributes stay integral because nothing ever scales them
//! smoothly.

use serde::{Deserialize, Serialize};

/// A capped resource pool (health, mana)
///
/// Tracks current alongside max so depletion can never underflow and
/// restoration can never overshoot.
///
/// # Example
///
/// ```
/// let mut hp = Pool::new(100.0);
/// hp.deplete(30.0);
/// assert_eq!(hp.current(), 70.0);
/// assert_eq!(hp.fraction(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    current: f32,
    max: f32,
}

impl Pool {
    /// Creates a full pool with the given maximum
    pub fn new(max: f32) -> Self {
        Pool { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Fill level as 0.0..=1.0, for UI bars
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    #[allow(dead_code)] // Used by the combat stub
    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Removes up to `amount`, clamping at zero. Returns what was actually
    /// removed.
    pub fn deplete(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current - amount).max(0.0);
        before - self.current
    }

    /// Adds up to `amount`, clamping at max. Returns what was actually
    /// restored.
    pub fn restore(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }

    /// Refills to max
    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Raises the maximum by `amount` without touching current
    pub fn raise_max(&mut self, amount: f32) {
        self.max += amount;
    }

    /// Returns true if at least `amount` is available and removes it;
    /// leaves the pool untouched otherwise. Used for mana costs.
    pub fn try_spend(&mut self, amount: f32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }
}

/// Experience needed for the first level-up
const BASE_EXPERIENCE: f32 = 100.0;
/// Each level-up raises the next threshold by this much
const EXPERIENCE_STEP: f32 = 50.0;
/// Pool growth per level-up
const POOL_GROWTH: f32 = 10.0;

/// The player's RPG sheet
///
/// Starting values mirror the Seeker class: 100 HP, 100 MP, level 1,
/// strength 15, intelligence 12, dexterity 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: Pool,
    pub mana: Pool,
    pub level: u32,
    pub experience: f32,
    pub max_experience: f32,
    pub strength: u32,
    pub intelligence: u32,
    pub dexterity: u32,
    pub class_name: String,
}

impl PlayerStats {
    pub fn new() -> Self {
        PlayerStats {
            health: Pool::new(100.0),
            mana: Pool::new(100.0),
            level: 1,
            experience: 0.0,
            max_experience: BASE_EXPERIENCE,
            strength: 15,
            intelligence: 12,
            dexterity: 10,
            class_name: "Seeker".to_string(),
        }
    }

    /// Adds experience, resolving any level-ups it triggers
    ///
    /// Each level-up raises the next threshold by 50 and grows both pools
    /// by 10, refilled. Returns the number of levels gained (usually 0).
    pub fn gain_experience(&mut self, amount: f32) -> u32 {
        self.experience += amount;
        let mut levels_gained = 0;

        while self.experience >= self.max_experience {
            self.experience -= self.max_experience;
            self.max_experience += EXPERIENCE_STEP;
            self.level += 1;
            levels_gained += 1;

            self.health.raise_max(POOL_GROWTH);
            self.mana.raise_max(POOL_GROWTH);
            self.health.refill();
            self.mana.refill();
        }

        levels_gained
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_deplete_clamps_at_zero() {
        let mut pool = Pool::new(100.0);
        let removed = pool.deplete(150.0);

        assert_eq!(removed, 100.0);
        assert_eq!(pool.current(), 0.0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_restore_caps_at_max() {
        let mut pool = Pool::new(100.0);
        pool.deplete(50.0);

        let restored = pool.restore(80.0);
        assert_eq!(restored, 50.0);
        assert_eq!(pool.current(), 100.0);
    }

    #[test]
    fn test_pool_fraction() {
        let mut pool = Pool::new(100.0);
        pool.deplete(25.0);
        assert_eq!(pool.fraction(), 0.75);
    }

    #[test]
    fn test_try_spend_requires_full_amount() {
        let mut mana = Pool::new(100.0);
        mana.deplete(95.0);

        assert!(!mana.try_spend(10.0));
        assert_eq!(mana.current(), 5.0);
        assert!(mana.try_spend(5.0));
        assert_eq!(mana.current(), 0.0);
    }

    #[test]
    fn test_starting_stats_match_seeker_class() {
        let stats = PlayerStats::new();
        assert_eq!(stats.health.current(), 100.0);
        assert_eq!(stats.mana.current(), 100.0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.max_experience, 100.0);
        assert_eq!(stats.strength, 15);
        assert_eq!(stats.intelligence, 12);
        assert_eq!(stats.dexterity, 10);
        assert_eq!(stats.class_name, "Seeker");
    }

    #[test]
    fn test_experience_below_threshold_does_not_level() {
        let mut stats = PlayerStats::new();
        assert_eq!(stats.gain_experience(99.0), 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.experience, 99.0);
    }

    #[test]
    fn test_level_up_grows_and_refills_pools() {
        let mut stats = PlayerStats::new();
        stats.health.deplete(60.0);

        let gained = stats.gain_experience(110.0);
        assert_eq!(gained, 1);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.experience, 10.0);
        assert_eq!(stats.max_experience, 150.0);
        assert_eq!(stats.health.max(), 110.0);
        assert_eq!(stats.health.current(), 110.0);
        assert_eq!(stats.mana.max(), 110.0);
    }

    #[test]
    fn test_multiple_level_ups_in_one_gain() {
        let mut stats = PlayerStats::new();
        // 100 + 150 = 250 crosses two thresholds
        let gained = stats.gain_experience(260.0);
        assert_eq!(gained, 2);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.experience, 10.0);
        assert_eq!(stats.max_experience, 200.0);
    }
}
