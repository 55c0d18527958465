use indexmap::IndexMap;
use models::{CardKind, EnemyActionKind, Side};
use rand::{SeedableRng, rngs::StdRng};
use tracing::Level;

use crate::{
    ActionOutcome, BattleEvent, BattleTemplate, Card, CardId, CardSummary, Combatant, Deck,
    DispatchableEvent, EnemyActionSet, Multipliers, NEUTRAL_BLOCK_REDUCTION, OutcomeKind, Profile,
    RejectReason, UpgradeLedger, resolver,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    PlayerTurn,
    SelectingTarget,
    EnemyTurn,
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::PlayerTurn => write!(f, "TurnState::PlayerTurn"),
            TurnState::SelectingTarget => write!(f, "TurnState::SelectingTarget"),
            TurnState::EnemyTurn => write!(f, "TurnState::EnemyTurn"),
        }
    }
}

/// One battle: both combatants, the deck rotation, the enemy's action
/// script and the turn state machine. Every transition is a single
/// synchronous computation returning an `ActionOutcome`; timing and
/// animation sequencing belong to whoever calls us.
#[derive(Clone, Debug)]
pub struct Battle {
    pub player: Combatant,
    pub enemy: Combatant,
    pub cards: IndexMap<CardId, Card>,
    pub deck: Deck,
    pub upgrades: UpgradeLedger,
    pub multipliers: Multipliers,
    pub enemy_actions: EnemyActionSet,
    pub source: Option<String>,
    pub event_sender: Option<std::sync::mpsc::Sender<DispatchableEvent>>,
    pub stdout_enabled: bool,
    turn: TurnState,
    selected: Option<CardId>,
    block_reduction: f32,
    rng: StdRng,
}

impl TryFrom<BattleTemplate> for Battle {
    type Error = anyhow::Error;

    fn try_from(template: BattleTemplate) -> Result<Self, Self::Error> {
        if template.player.card_specs.is_empty() {
            anyhow::bail!("player has no cards configured");
        }
        if template.player.health <= 0 {
            anyhow::bail!("player health must be positive ({})", template.player.health);
        }
        if template.enemy.health <= 0 {
            anyhow::bail!("enemy health must be positive ({})", template.enemy.health);
        }
        let enemy_actions = EnemyActionSet::new(template.enemy.actions.clone())?;

        let mut cards: IndexMap<CardId, Card> = IndexMap::new();
        for spec in &template.player.card_specs {
            let id = CardId::default();
            let card = Card::from_spec(spec.clone(), id)
                .map_err(|error| anyhow::anyhow!("unable to use card spec {spec:?}: {error}"))?;
            cards.insert(id, card);
        }

        let rng = match template.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut battle = Self {
            player: Combatant::new(Side::Player, template.player.health),
            enemy: Combatant::new(Side::Enemy, template.enemy.health),
            deck: Deck::new(cards.keys().cloned().collect()),
            cards,
            upgrades: UpgradeLedger::default(),
            multipliers: Multipliers::default(),
            enemy_actions,
            source: template.source,
            event_sender: None,
            stdout_enabled: false,
            turn: TurnState::PlayerTurn,
            selected: None,
            block_reduction: *NEUTRAL_BLOCK_REDUCTION,
            rng,
        };
        battle.deck.initialize(&mut battle.rng);
        Ok(battle)
    }
}

impl Battle {
    pub fn with_channel(mut self, sender: std::sync::mpsc::Sender<DispatchableEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    pub fn with_stdout(mut self) -> Self {
        self.stdout_enabled = true;
        self
    }

    fn dispatch_log(&self, s: String) {
        let event = &DispatchableEvent::Log(s);
        self.dispatch_event(event)
    }

    fn dispatch_event(&self, event: &DispatchableEvent) {
        if let Some(ref tx) = self.event_sender {
            let _ = tx.send(event.clone());
        }
        if self.stdout_enabled {
            eprintln!("EVENT: {:?}", event);
        }
    }

    fn emit(&self, events: &[BattleEvent]) {
        for event in events {
            self.dispatch_event(&DispatchableEvent::Notify(event.clone()));
        }
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn block_reduction(&self) -> f32 {
        self.block_reduction
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|id| self.cards.get(&id))
    }

    pub fn hand(&self) -> Vec<&Card> {
        self.deck
            .hand()
            .iter()
            .filter_map(|id| self.cards.get(id))
            .collect()
    }

    fn hand_summaries(&self) -> Vec<CardSummary> {
        self.hand().into_iter().map(CardSummary::from).collect()
    }

    fn set_turn(&mut self, turn: TurnState, events: &mut Vec<BattleEvent>) {
        tracing::event!(Level::DEBUG, from = %self.turn, to = %turn, "turn transition");
        self.turn = turn;
        events.push(BattleEvent::TurnChanged(turn));
    }

    /// `PlayerTurn -> SelectingTarget`. Re-selecting the already
    /// selected card cancels instead; anything else outside the
    /// player's turn is ignored.
    pub fn select_card(&mut self, id: CardId) -> ActionOutcome {
        match self.turn {
            TurnState::SelectingTarget if self.selected == Some(id) => {
                return self.cancel_selection();
            }
            TurnState::PlayerTurn => {}
            _ => {
                self.dispatch_event(&DispatchableEvent::Warning(format!(
                    "card {id} selected during {}",
                    self.turn
                )));
                return ActionOutcome::rejected(RejectReason::WrongTurn);
            }
        }
        if !self.deck.in_hand(id) {
            self.dispatch_event(&DispatchableEvent::Warning(format!(
                "attempt to select card {id} which is not in hand"
            )));
            return ActionOutcome::rejected(RejectReason::CardNotInHand);
        }
        let Some(card) = self.cards.get(&id) else {
            return ActionOutcome::rejected(RejectReason::CardNotInHand);
        };
        let summary = CardSummary::from(card);
        self.dispatch_log(format!("selected {summary}, targets {}", card.valid_target()));
        self.selected = Some(id);
        let mut events = Vec::new();
        self.set_turn(TurnState::SelectingTarget, &mut events);
        self.emit(&events);
        ActionOutcome {
            kind: OutcomeKind::Selected(summary),
            events,
        }
    }

    /// `SelectingTarget -> PlayerTurn`, clearing the selection only.
    pub fn cancel_selection(&mut self) -> ActionOutcome {
        if self.turn != TurnState::SelectingTarget {
            return ActionOutcome::rejected(RejectReason::WrongTurn);
        }
        self.selected = None;
        let mut events = Vec::new();
        self.set_turn(TurnState::PlayerTurn, &mut events);
        self.emit(&events);
        ActionOutcome {
            kind: OutcomeKind::Cancelled,
            events,
        }
    }

    /// Resolves the selected card against `target`, recycles it into
    /// the draw pile and hands the turn to the enemy. A wrong-side
    /// target cancels the selection instead of resolving.
    pub fn confirm_target(&mut self, target: Side) -> ActionOutcome {
        if self.turn != TurnState::SelectingTarget {
            return ActionOutcome::rejected(RejectReason::WrongTurn);
        }
        let Some(id) = self.selected else {
            return ActionOutcome::rejected(RejectReason::NoSelection);
        };
        let Some(card) = self.cards.get(&id) else {
            self.dispatch_event(&DispatchableEvent::Warning(format!(
                "selected card {id} is unknown"
            )));
            return ActionOutcome::rejected(RejectReason::CardNotInHand);
        };
        if card.valid_target() != target {
            self.dispatch_log(format!(
                "invalid target {target} for {}, cancelling",
                card.spec
            ));
            return self.cancel_selection();
        }

        let spec = card.spec.clone();
        let summary = CardSummary::from(card);
        let upgrade = self.upgrades.for_card(&spec.name);
        let mut events = Vec::new();
        let kind = match spec.kind {
            CardKind::Attack => {
                let damage = resolver::attack_damage(&spec, &upgrade, &self.multipliers);
                events.extend(self.enemy.take_damage(damage));
                OutcomeKind::Attack(summary, damage)
            }
            CardKind::Block => {
                let reduction = resolver::block_reduction(&spec, &upgrade, &self.multipliers);
                tracing::event!(Level::INFO, %reduction, card = %spec, "block applied");
                self.block_reduction = reduction;
                events.push(BattleEvent::BlockApplied(reduction));
                OutcomeKind::Block(summary, reduction)
            }
            CardKind::Heal => {
                let amount = resolver::heal_amount(&spec, &upgrade, &self.multipliers);
                events.extend(self.player.heal(amount));
                OutcomeKind::Heal(summary, amount)
            }
        };

        self.selected = None;
        self.deck.remove_from_hand(id, &mut self.rng);
        events.push(BattleEvent::HandChanged(self.hand_summaries()));
        self.set_turn(TurnState::EnemyTurn, &mut events);
        self.emit(&events);
        ActionOutcome { kind, events }
    }

    /// `EnemyTurn -> PlayerTurn`. Picks an enemy action, applies it
    /// (player damage scaled by the active block reduction, or a
    /// self-heal) and consumes the block reduction.
    pub fn resolve_enemy_turn(&mut self) -> ActionOutcome {
        if self.turn != TurnState::EnemyTurn {
            return ActionOutcome::rejected(RejectReason::WrongTurn);
        }
        let action = self.enemy_actions.select(&mut self.rng);
        self.dispatch_log(format!("enemy acts: {action}"));
        let mut events = Vec::new();
        let kind = match action.kind {
            EnemyActionKind::Damage => {
                let damage = resolver::enemy_damage(action.value, self.block_reduction);
                events.extend(self.player.take_damage(damage));
                OutcomeKind::EnemyDamage(damage)
            }
            EnemyActionKind::Heal => {
                let amount = resolver::enemy_heal(action.value);
                events.extend(self.enemy.heal(amount));
                OutcomeKind::EnemyHeal(amount)
            }
        };
        // Block only ever covers one enemy action.
        self.block_reduction = *NEUTRAL_BLOCK_REDUCTION;
        self.set_turn(TurnState::PlayerTurn, &mut events);
        self.emit(&events);
        ActionOutcome { kind, events }
    }

    /// Load per-card upgrades and the persisted player health. Call
    /// once at battle start.
    pub fn apply_profile(&mut self, profile: &dyn Profile) {
        let names: Vec<String> = self.cards.values().map(|c| c.spec.name.clone()).collect();
        for name in names {
            let upgrade = profile.load_upgrade(&name);
            self.upgrades.set(name, upgrade);
        }
        if let Some(health) = profile.load_player_health() {
            let events = self.player.restore_health(health);
            self.emit(&events);
        }
    }

    pub fn save_profile(&self, profile: &mut dyn Profile) {
        for (name, upgrade) in self.upgrades.iter() {
            profile.store_upgrade(name, *upgrade);
        }
        profile.store_player_health(self.player.health.current());
    }

    /// Full reset: multipliers and upgrades back to their initial
    /// values (persisted), deck rebuilt, selection cleared.
    pub fn reset_game_state(&mut self, profile: &mut dyn Profile) {
        self.multipliers.reset();
        self.upgrades.reset();
        for (name, upgrade) in self.upgrades.iter() {
            profile.store_upgrade(name, *upgrade);
        }
        self.deck.initialize(&mut self.rng);
        self.selected = None;
        self.block_reduction = *NEUTRAL_BLOCK_REDUCTION;
        let mut events = vec![BattleEvent::HandChanged(self.hand_summaries())];
        self.set_turn(TurnState::PlayerTurn, &mut events);
        self.emit(&events);
    }

    pub fn upgrade_damage(&mut self, upgrade: f32) {
        self.multipliers.damage += upgrade;
    }

    pub fn upgrade_block(&mut self, upgrade: f32) {
        self.multipliers.block += upgrade;
    }

    pub fn upgrade_heal(&mut self, upgrade: f32) {
        self.multipliers.heal += upgrade;
    }
}

impl std::fmt::Display for Battle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Battle({} vs {}, {}, {})",
            self.player, self.enemy, self.deck, self.turn
        )
    }
}
