use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum EnemyActionKind {
    Damage,
    Heal,
}

/// One entry in an enemy's scripted action list. `Damage` is dealt to
/// the player, `Heal` is applied to the enemy itself.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnemyActionSpec {
    pub kind: EnemyActionKind,
    pub value: f32,
}

impl std::fmt::Display for EnemyActionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EnemyActionKind::Damage => write!(f, "EnemyAction::Damage({})", self.value),
            EnemyActionKind::Heal => write!(f, "EnemyAction::Heal({})", self.value),
        }
    }
}
