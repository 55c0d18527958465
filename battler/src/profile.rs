use indexmap::IndexMap;

use crate::CardUpgrade;

/// Persistence collaborator. The engine only reads at battle start
/// and writes at explicit save/reset boundaries; the storage format
/// behind the keys is the caller's business.
pub trait Profile {
    fn load_upgrade(&self, card_name: &str) -> CardUpgrade;
    fn store_upgrade(&mut self, card_name: &str, upgrade: CardUpgrade);
    fn load_player_health(&self) -> Option<i64>;
    fn store_player_health(&mut self, health: i64);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryProfile {
    pub upgrades: IndexMap<String, CardUpgrade>,
    pub player_health: Option<i64>,
}

impl Profile for MemoryProfile {
    fn load_upgrade(&self, card_name: &str) -> CardUpgrade {
        self.upgrades.get(card_name).copied().unwrap_or_default()
    }

    fn store_upgrade(&mut self, card_name: &str, upgrade: CardUpgrade) {
        self.upgrades.insert(card_name.to_string(), upgrade);
    }

    fn load_player_health(&self) -> Option<i64> {
        self.player_health
    }

    fn store_player_health(&mut self, health: i64) {
        self.player_health = Some(health);
    }
}
