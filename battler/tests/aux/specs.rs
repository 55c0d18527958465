use models::{CardKind, CardSpec};

lazy_static::lazy_static! {
    pub static ref STRIKE_SPEC: CardSpec = CardSpec {
        name: "Strike".to_string(),
        kind: CardKind::Attack,
        base_value: 10.0,
        description: String::new(),
    };
    pub static ref GUARD_SPEC: CardSpec = CardSpec {
        name: "Guard".to_string(),
        kind: CardKind::Block,
        base_value: 50.0,
        description: String::new(),
    };
    pub static ref MEND_SPEC: CardSpec = CardSpec {
        name: "Mend".to_string(),
        kind: CardKind::Heal,
        base_value: 15.0,
        description: String::new(),
    };
}
