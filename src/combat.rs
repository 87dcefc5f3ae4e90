//! Turn-based combat stub
//!
//! Carried over from an exploratory iteration: a minimal encounter system
//! with three attack kinds and a flat enemy counterattack. Nothing in the
//! main loop starts an encounter yet — the module is kept compiling and
//! tested so a future overworld trigger can wire it in.

use crate::stats::PlayerStats;

/// Note played when an encounter begins
pub const ENCOUNTER_NOTE: &str = "C4";

/// Mana cost of a magic attack
const MAGIC_MANA_COST: f32 = 10.0;
/// Damage dealt by the enemy's turn
const ENEMY_DAMAGE: f32 = 15.0;

/// Player attack options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Melee,
    Magic,
    Ranged,
}

impl AttackKind {
    pub fn damage(&self) -> f32 {
        match self {
            AttackKind::Melee => 20.0,
            AttackKind::Magic => 30.0,
            AttackKind::Ranged => 15.0,
        }
    }
}

/// How an encounter ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// An opponent in a turn-based encounter
#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub health: f32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: f32) -> Self {
        Enemy {
            name: name.into(),
            health,
        }
    }
}

/// Turn-based encounter state
pub struct CombatSystem {
    pub in_combat: bool,
    enemy: Option<Enemy>,
}

impl CombatSystem {
    pub fn new() -> Self {
        CombatSystem {
            in_combat: false,
            enemy: None,
        }
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Starts an encounter against `enemy`
    pub fn initiate(&mut self, enemy: Enemy) {
        self.in_combat = true;
        self.enemy = Some(enemy);
    }

    /// Resolves one player attack
    ///
    /// Magic refuses to fire without enough mana. Returns the outcome if
    /// this attack ended the encounter.
    pub fn player_attack(
        &mut self,
        kind: AttackKind,
        stats: &mut PlayerStats,
    ) -> Option<CombatOutcome> {
        if !self.in_combat {
            return None;
        }
        if kind == AttackKind::Magic && !stats.mana.try_spend(MAGIC_MANA_COST) {
            return None;
        }

        if let Some(enemy) = self.enemy.as_mut() {
            enemy.health -= kind.damage();
        }
        self.check_end(stats)
    }

    /// Resolves the enemy's counterattack
    pub fn enemy_turn(&mut self, stats: &mut PlayerStats) -> Option<CombatOutcome> {
        if !self.in_combat {
            return None;
        }
        stats.health.deplete(ENEMY_DAMAGE);
        self.check_end(stats)
    }

    fn check_end(&mut self, stats: &PlayerStats) -> Option<CombatOutcome> {
        if let Some(enemy) = &self.enemy {
            if enemy.health <= 0.0 {
                self.in_combat = false;
                self.enemy = None;
                return Some(CombatOutcome::Victory);
            }
        }
        if stats.health.is_empty() {
            self.in_combat = false;
            return Some(CombatOutcome::Defeat);
        }
        None
    }
}

impl Default for CombatSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_damage_table() {
        assert_eq!(AttackKind::Melee.damage(), 20.0);
        assert_eq!(AttackKind::Magic.damage(), 30.0);
        assert_eq!(AttackKind::Ranged.damage(), 15.0);
    }

    #[test]
    fn test_attacks_ignored_outside_combat() {
        let mut combat = CombatSystem::new();
        let mut stats = PlayerStats::new();

        assert_eq!(combat.player_attack(AttackKind::Melee, &mut stats), None);
        assert_eq!(stats.mana.current(), 100.0);
    }

    #[test]
    fn test_melee_until_victory() {
        let mut combat = CombatSystem::new();
        let mut stats = PlayerStats::new();
        combat.initiate(Enemy::new("Echo Cultist", 40.0));

        assert_eq!(combat.player_attack(AttackKind::Melee, &mut stats), None);
        assert_eq!(
            combat.player_attack(AttackKind::Melee, &mut stats),
            Some(CombatOutcome::Victory)
        );
        assert!(!combat.in_combat);
        assert!(combat.enemy().is_none());
    }

    #[test]
    fn test_magic_spends_mana() {
        let mut combat = CombatSystem::new();
        let mut stats = PlayerStats::new();
        combat.initiate(Enemy::new("Echo Cultist", 100.0));

        combat.player_attack(AttackKind::Magic, &mut stats);
        assert_eq!(stats.mana.current(), 90.0);
        assert_eq!(combat.enemy().unwrap().health, 70.0);
    }

    #[test]
    fn test_magic_without_mana_does_nothing() {
        let mut combat = CombatSystem::new();
        let mut stats = PlayerStats::new();
        stats.mana.deplete(95.0);
        combat.initiate(Enemy::new("Echo Cultist", 100.0));

        assert_eq!(combat.player_attack(AttackKind::Magic, &mut stats), None);
        assert_eq!(combat.enemy().unwrap().health, 100.0);
        assert_eq!(stats.mana.current(), 5.0);
    }

    #[test]
    fn test_enemy_turn_can_defeat_player() {
        let mut combat = CombatSystem::new();
        let mut stats = PlayerStats::new();
        stats.health.deplete(90.0); // 10 left
        combat.initiate(Enemy::new("Shardwalker", 100.0));

        assert_eq!(
            combat.enemy_turn(&mut stats),
            Some(CombatOutcome::Defeat)
        );
        assert!(!combat.in_combat);
        assert!(stats.health.is_empty());
    }
}
