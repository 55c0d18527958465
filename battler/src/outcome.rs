use crate::{BattleEvent, CardSummary};

/// Why an input was ignored. Rejections are ordinary outcomes rather
/// than errors; the state machine is total over player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    WrongTurn,
    CardNotInHand,
    NoSelection,
}

#[derive(Clone, Debug)]
pub enum OutcomeKind {
    Selected(CardSummary),
    Cancelled,
    Attack(CardSummary, i64),
    Block(CardSummary, f32),
    Heal(CardSummary, i64),
    EnemyDamage(i64),
    EnemyHeal(i64),
    Rejected(RejectReason),
}

/// The result of one state-machine transition: what happened, plus
/// the notifications it produced, in the order they occurred.
#[derive(Clone, Debug)]
pub struct ActionOutcome {
    pub kind: OutcomeKind,
    pub events: Vec<BattleEvent>,
}

impl ActionOutcome {
    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            kind: OutcomeKind::Rejected(reason),
            events: vec![],
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.kind, OutcomeKind::Rejected(..))
    }

    pub fn short_str(&self) -> String {
        match &self.kind {
            OutcomeKind::Selected(card) => format!("Selected {}", card.name),
            OutcomeKind::Cancelled => "Cancelled".to_string(),
            OutcomeKind::Attack(card, damage) => format!("Attack {} ({damage})", card.name),
            OutcomeKind::Block(card, reduction) => format!("Block {} (x{reduction})", card.name),
            OutcomeKind::Heal(card, amount) => format!("Heal {} ({amount})", card.name),
            OutcomeKind::EnemyDamage(damage) => format!("EnemyDamage ({damage})"),
            OutcomeKind::EnemyHeal(amount) => format!("EnemyHeal ({amount})"),
            OutcomeKind::Rejected(reason) => format!("Rejected ({reason:?})"),
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut res = format!("{}\n", self.short_str());
        for event in &self.events {
            res.push_str(&format!("  {event}\n"));
        }
        write!(f, "{res}")
    }
}
