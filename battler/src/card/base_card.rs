use models::{CardSpec, Side};

use super::CardId;

/// A card as it exists inside one battle: a unique id plus its
/// catalog spec. Upgrades live in the session's `UpgradeLedger`,
/// keyed by card name, never on the card itself.
#[derive(Clone, Debug)]
pub struct Card {
    pub id: CardId,
    pub spec: CardSpec,
}

impl Card {
    pub fn from_spec(spec: CardSpec, id: CardId) -> anyhow::Result<Self> {
        if spec.name.trim().is_empty() {
            anyhow::bail!("card spec has an empty name");
        }
        if spec.base_value < 0.0 {
            anyhow::bail!(
                "card {:?} has a negative base value ({})",
                spec.name,
                spec.base_value
            );
        }
        Ok(Self { id, spec })
    }

    pub fn valid_target(&self) -> Side {
        self.spec.valid_target()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}
