use models::CardKind;

use crate::{BattleEvent, Card, CardId};

#[derive(Clone, Debug)]
pub struct CardSummary {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
}

impl std::fmt::Display for CardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card<id={}, name={}, kind={}>",
            self.id, self.name, self.kind
        )
    }
}

impl From<&Card> for CardSummary {
    fn from(value: &Card) -> Self {
        Self {
            id: value.id,
            name: value.spec.name.to_string(),
            kind: value.spec.kind,
        }
    }
}

/// Diagnostics side channel. `Notify` mirrors the battle events that
/// transitions also return, so a frontend can consume everything from
/// one receiver.
#[derive(Clone, Debug)]
pub enum DispatchableEvent {
    Log(String),
    Warning(String),
    Error(String),
    Notify(BattleEvent),
}
