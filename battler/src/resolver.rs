use models::{CardSpec, Percentage};

use crate::{
    CardUpgrade, INITIAL_BLOCK_MULTIPLIER, INITIAL_DAMAGE_MULTIPLIER, INITIAL_HEAL_MULTIPLIER,
};

/// Session-scoped global multipliers, bumped by shop upgrades and
/// reset with the rest of the game state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multipliers {
    pub damage: f32,
    pub block: f32,
    pub heal: f32,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            damage: *INITIAL_DAMAGE_MULTIPLIER,
            block: *INITIAL_BLOCK_MULTIPLIER,
            heal: *INITIAL_HEAL_MULTIPLIER,
        }
    }
}

impl Multipliers {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Multipliers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Multipliers(⚔️ x{}, 🛡️ x{}, 🌱 x{})",
            self.damage, self.block, self.heal
        )
    }
}

/// Half-up rounding: `.5` always rounds towards the next integer up.
pub fn round_half_up(value: f32) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn upgraded_base(spec: &CardSpec, upgrade: &CardUpgrade) -> f32 {
    spec.base_value + upgrade.base_value_bonus
}

/// Damage dealt by playing an Attack card. The per-card damage
/// multiplier applies here and nowhere else.
pub fn attack_damage(spec: &CardSpec, upgrade: &CardUpgrade, multipliers: &Multipliers) -> i64 {
    round_half_up(upgraded_base(spec, upgrade) * multipliers.damage * upgrade.damage_multiplier)
}

/// Block magnitude as a percentage of the next enemy attack.
pub fn block_value(spec: &CardSpec, upgrade: &CardUpgrade, multipliers: &Multipliers) -> Percentage {
    Percentage::from_percentage_value(upgraded_base(spec, upgrade) * multipliers.block)
}

/// Scale applied to the enemy's next attack: `1 - value/100`. Not
/// clamped; non-positive damage amounts are dropped by the health
/// model.
pub fn block_reduction(spec: &CardSpec, upgrade: &CardUpgrade, multipliers: &Multipliers) -> f32 {
    1.0 - block_value(spec, upgrade, multipliers).as_fraction()
}

pub fn heal_amount(spec: &CardSpec, upgrade: &CardUpgrade, multipliers: &Multipliers) -> i64 {
    round_half_up(upgraded_base(spec, upgrade) * multipliers.heal)
}

/// Damage of an enemy action after the player's active
/// block-reduction scale.
pub fn enemy_damage(value: f32, block_reduction: f32) -> i64 {
    round_half_up(value * block_reduction)
}

pub fn enemy_heal(value: f32) -> i64 {
    round_half_up(value)
}
