use indexmap::IndexMap;

/// Persistent per-card upgrade record. `base_value_bonus` is additive
/// for every card kind; `damage_multiplier` only ever applies to
/// Attack cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardUpgrade {
    pub base_value_bonus: f32,
    pub damage_multiplier: f32,
}

impl Default for CardUpgrade {
    fn default() -> Self {
        Self {
            base_value_bonus: 0.0,
            damage_multiplier: 1.0,
        }
    }
}

impl std::fmt::Display for CardUpgrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CardUpgrade<+{} x{}>",
            self.base_value_bonus, self.damage_multiplier
        )
    }
}

/// Card identity (name) → upgrade record. Cards share upgrades by
/// name wherever they appear, without shared mutable card objects.
#[derive(Clone, Debug, Default)]
pub struct UpgradeLedger(pub IndexMap<String, CardUpgrade>);

impl UpgradeLedger {
    pub fn for_card(&self, name: &str) -> CardUpgrade {
        self.0.get(name).copied().unwrap_or_default()
    }

    pub fn set(&mut self, name: impl Into<String>, upgrade: CardUpgrade) {
        self.0.insert(name.into(), upgrade);
    }

    pub fn reset(&mut self) {
        for (_, upgrade) in &mut self.0 {
            *upgrade = CardUpgrade::default();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CardUpgrade)> {
        self.0.iter()
    }
}
