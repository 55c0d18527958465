use serde::Deserialize;

/// One side of a battle. Every combatant, target and notification is
/// tagged with this.
#[derive(Copy, PartialEq, Eq, Hash, Deserialize, Debug, Clone)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn inverse(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Side::Player"),
            Side::Enemy => write!(f, "Side::Enemy"),
        }
    }
}
