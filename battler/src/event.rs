use models::Side;

use crate::{CardSummary, TurnState};

/// Fire-and-forget notifications produced by state transitions. The
/// presentation layer reacts to these; the engine never depends on
/// anyone listening.
#[derive(Clone, Debug)]
pub enum BattleEvent {
    HandChanged(Vec<CardSummary>),
    HealthChanged(Side, i64, i64),
    Death(Side),
    TurnChanged(TurnState),
    BlockApplied(f32),
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::HandChanged(hand) => {
                let names = hand
                    .iter()
                    .map(|c| c.name.clone())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "HandChanged [{names}]")
            }
            BattleEvent::HealthChanged(side, current, max) => {
                write!(f, "HealthChanged {side} {current}/{max}")
            }
            BattleEvent::Death(side) => write!(f, "Death {side}"),
            BattleEvent::TurnChanged(state) => write!(f, "TurnChanged {state}"),
            BattleEvent::BlockApplied(reduction) => write!(f, "BlockApplied x{reduction}"),
        }
    }
}
