use std::path::PathBuf;

use battler::{Battle, BattleTemplate, CardId};
use models::CardKind;

#[allow(unused)]
pub static SEED: u64 = 0x51ab8e1fd141a0b7;

#[allow(unused)]
pub fn read_battle(path: &PathBuf) -> Result<BattleTemplate, Box<dyn std::error::Error>> {
    let battle_str = std::fs::read_to_string(path)?;
    let template = toml::from_str::<BattleTemplate>(&battle_str)?;
    Ok(template)
}

#[allow(unused)]
pub fn start_battle(mut template: BattleTemplate) -> Result<Battle, Box<dyn std::error::Error>> {
    template.seed = template.seed.or(Some(SEED));
    let battle: Battle = template.try_into()?;
    Ok(battle)
}

#[allow(unused)]
pub fn duel_template() -> BattleTemplate {
    toml::from_str::<BattleTemplate>(include_str!("../battles/valid/duel.toml")).expect("bad TOML")
}

#[allow(unused)]
pub fn healer_template() -> BattleTemplate {
    toml::from_str::<BattleTemplate>(include_str!("../battles/valid/healer.toml"))
        .expect("bad TOML")
}

#[allow(unused)]
pub fn card_in_hand(battle: &Battle, kind: CardKind) -> CardId {
    battle
        .hand()
        .iter()
        .find(|card| card.spec.kind == kind)
        .map(|card| card.id)
        .expect("no card of requested kind in hand")
}

#[allow(unused)]
pub fn card_named(battle: &Battle, name: &str) -> CardId {
    battle
        .hand()
        .iter()
        .find(|card| card.spec.name == name)
        .map(|card| card.id)
        .expect("no card of requested name in hand")
}
