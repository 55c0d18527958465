use models::Side;
use tracing::Level;

use crate::BattleEvent;

use super::Health;

/// One side's health state. Mutations go through `take_damage`,
/// `heal` and `set_max_health` only, and each returns the
/// notifications it produced. Depletion is terminal: once at 0 every
/// further mutation is a no-op, so `Death` fires exactly once.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub side: Side,
    pub health: Health,
}

impl Combatant {
    pub fn new(side: Side, max_health: i64) -> Self {
        Self {
            side,
            health: Health::new_full(max_health),
        }
    }

    pub fn take_damage(&mut self, amount: i64) -> Vec<BattleEvent> {
        if amount <= 0 || self.health.is_depleted() {
            return vec![];
        }
        self.health -= amount;
        let mut events = vec![BattleEvent::HealthChanged(
            self.side,
            self.health.current(),
            self.health.max(),
        )];
        if self.health.is_depleted() {
            tracing::event!(Level::INFO, side = %self.side, "combatant defeated");
            events.push(BattleEvent::Death(self.side));
        }
        events
    }

    pub fn heal(&mut self, amount: i64) -> Vec<BattleEvent> {
        if amount <= 0 || self.health.is_depleted() {
            return vec![];
        }
        self.health += amount;
        vec![BattleEvent::HealthChanged(
            self.side,
            self.health.current(),
            self.health.max(),
        )]
    }

    pub fn set_max_health(&mut self, max_health: i64) -> Vec<BattleEvent> {
        self.health = self.health.with_max(max_health);
        vec![BattleEvent::HealthChanged(
            self.side,
            self.health.current(),
            self.health.max(),
        )]
    }

    /// Restore a persisted current-health value, clamped into range.
    pub fn restore_health(&mut self, current: i64) -> Vec<BattleEvent> {
        self.health = self.health.with_current(current);
        vec![BattleEvent::HealthChanged(
            self.side,
            self.health.current(),
            self.health.max(),
        )]
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Combatant<{}>(❤️ {}/{})",
            self.side,
            self.health.current(),
            self.health.max(),
        )
    }
}
