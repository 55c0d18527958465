mod aux;

use std::path::PathBuf;

use aux::{card_named, duel_template, healer_template, read_battle, start_battle};
use battler::{
    Battle, BattleEvent, CardUpgrade, DispatchableEvent, MemoryProfile, Multipliers, OutcomeKind,
    Profile, TurnState,
};
use models::Side;
use rstest::rstest;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
fn test_valid_battle_templates(
    #[files("tests/battles/valid/*.toml")] path: PathBuf,
) -> TestResult {
    let template = read_battle(&path)?;
    let battle = start_battle(template)?;
    assert_eq!(battle.turn(), TurnState::PlayerTurn);
    assert!(!battle.hand().is_empty());
    Ok(())
}

#[rstest]
fn test_invalid_battle_templates(
    #[files("tests/battles/invalid/*.toml")] path: PathBuf,
) -> TestResult {
    let template = read_battle(&path)?;
    let result: Result<Battle, _> = template.try_into();
    assert!(
        result.is_err(),
        "battle setup `{:?}` succeeded: expected a configuration error",
        path.file_name().unwrap(),
    );
    Ok(())
}

#[rstest]
fn test_attack_then_enemy_damage_round() -> TestResult {
    let mut battle = start_battle(duel_template())?;
    let id = card_named(&battle, "Strike");
    battle.select_card(id);

    let outcome = battle.confirm_target(Side::Enemy);
    assert!(matches!(outcome.kind, OutcomeKind::Attack(_, 10)));
    assert_eq!(battle.enemy.health.current(), 90);
    assert_eq!(battle.turn(), TurnState::EnemyTurn);
    assert!(!battle.deck.in_hand(id));

    let outcome = battle.resolve_enemy_turn();
    assert!(matches!(outcome.kind, OutcomeKind::EnemyDamage(10)));
    assert_eq!(battle.player.health.current(), 90);
    assert_eq!(battle.turn(), TurnState::PlayerTurn);
    Ok(())
}

#[rstest]
fn test_block_covers_exactly_one_enemy_attack() -> TestResult {
    let mut battle = start_battle(duel_template())?;
    let id = card_named(&battle, "Guard");
    battle.select_card(id);

    let outcome = battle.confirm_target(Side::Player);
    let OutcomeKind::Block(_, reduction) = outcome.kind else {
        panic!("expected a block outcome, got {}", outcome.short_str());
    };
    assert!((reduction - 0.5).abs() < f32::EPSILON);
    assert!(
        outcome
            .events
            .iter()
            .any(|e| matches!(e, BattleEvent::BlockApplied(..)))
    );

    // 10-damage action halved
    let outcome = battle.resolve_enemy_turn();
    assert!(matches!(outcome.kind, OutcomeKind::EnemyDamage(5)));
    assert_eq!(battle.player.health.current(), 95);
    assert!((battle.block_reduction() - 1.0).abs() < f32::EPSILON);

    // the next attack lands in full
    let id = card_named(&battle, "Strike");
    battle.select_card(id);
    battle.confirm_target(Side::Enemy);
    let outcome = battle.resolve_enemy_turn();
    assert!(matches!(outcome.kind, OutcomeKind::EnemyDamage(10)));
    assert_eq!(battle.player.health.current(), 85);
    Ok(())
}

#[rstest]
fn test_heal_restores_player() -> TestResult {
    let mut battle = start_battle(duel_template())?;
    let id = card_named(&battle, "Strike");
    battle.select_card(id);
    battle.confirm_target(Side::Enemy);
    battle.resolve_enemy_turn();
    assert_eq!(battle.player.health.current(), 90);

    let id = card_named(&battle, "Mend");
    battle.select_card(id);
    let outcome = battle.confirm_target(Side::Player);
    assert!(matches!(outcome.kind, OutcomeKind::Heal(_, 15)));
    // clamped at max
    assert_eq!(battle.player.health.current(), 100);
    Ok(())
}

#[rstest]
fn test_hand_replenishes_after_last_card() -> TestResult {
    let mut battle = start_battle(duel_template())?;
    for _ in 0..4 {
        let (id, target) = {
            let card = battle.hand()[0];
            (card.id, card.valid_target())
        };
        battle.select_card(id);
        assert!(!battle.confirm_target(target).is_rejected());
        battle.resolve_enemy_turn();
    }
    // all four cards played; hand came back fresh
    assert_eq!(battle.hand().len(), 4);
    assert_eq!(battle.turn(), TurnState::PlayerTurn);
    Ok(())
}

#[rstest]
fn test_death_is_reported() -> TestResult {
    let mut template = duel_template();
    template.enemy.health = 15;
    let mut battle = start_battle(template)?;
    let id = card_named(&battle, "Heavy Strike");
    battle.select_card(id);
    let outcome = battle.confirm_target(Side::Enemy);
    assert_eq!(battle.enemy.health.current(), 0);
    assert!(
        outcome
            .events
            .iter()
            .any(|e| matches!(e, BattleEvent::Death(Side::Enemy)))
    );
    Ok(())
}

#[rstest]
fn test_profile_upgrades_and_health_apply() -> TestResult {
    let mut profile = MemoryProfile::default();
    profile.store_upgrade(
        "Strike",
        CardUpgrade {
            base_value_bonus: 5.0,
            damage_multiplier: 2.0,
        },
    );
    profile.store_player_health(80);

    let mut battle = start_battle(duel_template())?;
    battle.apply_profile(&profile);
    assert_eq!(battle.player.health.current(), 80);

    let id = card_named(&battle, "Strike");
    battle.select_card(id);
    let outcome = battle.confirm_target(Side::Enemy);
    // (10 + 5) * 1.0 * 2.0
    assert!(matches!(outcome.kind, OutcomeKind::Attack(_, 30)));
    assert_eq!(battle.enemy.health.current(), 70);

    let mut saved = MemoryProfile::default();
    battle.save_profile(&mut saved);
    assert_eq!(saved.load_player_health(), Some(80));
    assert_eq!(saved.load_upgrade("Strike").damage_multiplier, 2.0);
    Ok(())
}

#[rstest]
fn test_reset_game_state() -> TestResult {
    let mut profile = MemoryProfile::default();
    profile.store_upgrade(
        "Strike",
        CardUpgrade {
            base_value_bonus: 5.0,
            damage_multiplier: 2.0,
        },
    );

    let mut battle = start_battle(duel_template())?;
    battle.apply_profile(&profile);
    battle.upgrade_damage(0.5);
    battle.upgrade_block(0.25);
    assert_ne!(battle.multipliers, Multipliers::default());

    battle.reset_game_state(&mut profile);
    assert_eq!(battle.multipliers, Multipliers::default());
    assert_eq!(battle.upgrades.for_card("Strike"), CardUpgrade::default());
    assert_eq!(profile.load_upgrade("Strike"), CardUpgrade::default());
    assert_eq!(battle.turn(), TurnState::PlayerTurn);
    assert_eq!(battle.hand().len(), 4);
    Ok(())
}

#[rstest]
fn test_events_mirrored_over_channel() -> TestResult {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut battle = start_battle(duel_template())?.with_channel(tx);
    let id = card_named(&battle, "Strike");
    battle.select_card(id);
    battle.confirm_target(Side::Enemy);

    let received: Vec<DispatchableEvent> = rx.try_iter().collect();
    assert!(received.iter().any(|e| matches!(
        e,
        DispatchableEvent::Notify(BattleEvent::TurnChanged(TurnState::EnemyTurn))
    )));
    assert!(
        received
            .iter()
            .any(|e| matches!(e, DispatchableEvent::Notify(BattleEvent::HandChanged(..))))
    );
    assert!(received.iter().any(|e| matches!(
        e,
        DispatchableEvent::Notify(BattleEvent::HealthChanged(Side::Enemy, 90, 100))
    )));
    Ok(())
}

#[rstest]
fn test_seeded_battles_are_reproducible() {
    let run = || -> Vec<String> {
        let mut battle = start_battle(healer_template()).unwrap();
        let mut log = Vec::new();
        for _ in 0..6 {
            let (id, target) = {
                let card = battle.hand()[0];
                (card.id, card.valid_target())
            };
            battle.select_card(id);
            log.push(battle.confirm_target(target).short_str());
            log.push(battle.resolve_enemy_turn().short_str());
        }
        log
    };
    assert_eq!(run(), run());
}
