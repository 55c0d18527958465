use models::{CardSpec, EnemyActionSpec};
use serde::Deserialize;

use crate::DEFAULT_MAX_HEALTH;

fn default_health() -> i64 {
    *DEFAULT_MAX_HEALTH
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerTemplate {
    #[serde(default = "default_health")]
    pub health: i64,
    #[serde(default, rename = "cards")]
    pub card_specs: Vec<CardSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnemyTemplate {
    #[serde(default = "default_health")]
    pub health: i64,
    #[serde(default)]
    pub actions: Vec<EnemyActionSpec>,
}

/// Declarative battle setup, usually read from toml. `seed` pins the
/// shuffle and enemy-selection rng for reproducible battles.
#[derive(Clone, Debug, Deserialize)]
pub struct BattleTemplate {
    pub player: PlayerTemplate,
    pub enemy: EnemyTemplate,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(skip, default)]
    pub source: Option<String>,
}
