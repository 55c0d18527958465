use serde::Deserialize;

use super::Side;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum CardKind {
    Attack,
    Block,
    Heal,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Attack => write!(f, "CardKind::Attack"),
            CardKind::Block => write!(f, "CardKind::Block"),
            CardKind::Heal => write!(f, "CardKind::Heal"),
        }
    }
}

/// Immutable catalog entry for a card. Runtime state (ownership,
/// per-battle placement, upgrades) lives in the engine; this is the
/// part that gets authored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CardSpec {
    pub name: String,
    pub kind: CardKind,
    pub base_value: f32,
    #[serde(default)]
    pub description: String,
}

impl CardSpec {
    /// The only side a card of this kind may be played on. Attacks hit
    /// the enemy, everything else applies to the player.
    pub fn valid_target(&self) -> Side {
        match self.kind {
            CardKind::Attack => Side::Enemy,
            CardKind::Block | CardKind::Heal => Side::Player,
        }
    }
}

impl std::fmt::Display for CardSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{} {}>", self.name, self.kind, self.base_value)
    }
}
