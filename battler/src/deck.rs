use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{CardId, HAND_SIZE};

/// Draw-pile/hand rotation over a fixed catalog. Cards are never
/// consumed: a played card goes back under the draw pile, and every
/// catalog card is in exactly one of {draw pile, hand} at all times.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    catalog: Vec<CardId>,
    draw_pile: Vec<CardId>,
    hand: Vec<CardId>,
}

impl Deck {
    pub fn new(catalog: Vec<CardId>) -> Self {
        Self {
            catalog,
            draw_pile: Vec::new(),
            hand: Vec::new(),
        }
    }

    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    pub fn catalog(&self) -> &[CardId] {
        &self.catalog
    }

    pub fn in_hand(&self, id: CardId) -> bool {
        self.hand.contains(&id)
    }

    /// Clears all per-battle state, shuffles the catalog into the
    /// draw pile and draws a fresh hand.
    pub fn initialize(&mut self, rng: &mut StdRng) {
        self.hand.clear();
        self.draw_pile = self.catalog.clone();
        self.shuffle(rng);
        self.draw_hand(*HAND_SIZE, rng);
    }

    /// Fisher–Yates, in place.
    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.draw_pile.shuffle(rng);
    }

    // Rebuilds the pile from the catalog minus whatever is still held,
    // so recycling never duplicates a card.
    fn replenish(&mut self, rng: &mut StdRng) {
        self.draw_pile = self
            .catalog
            .iter()
            .filter(|id| !self.hand.contains(id))
            .cloned()
            .collect();
        self.shuffle(rng);
    }

    /// Moves up to `n` cards from the top of the draw pile into the
    /// hand, replenishing the pile if it is empty before or after.
    pub fn draw_hand(&mut self, n: usize, rng: &mut StdRng) {
        if self.draw_pile.is_empty() {
            self.replenish(rng);
        }
        let count = n.min(self.draw_pile.len());
        for _ in 0..count {
            if let Some(id) = self.draw_pile.pop() {
                self.hand.push(id);
            }
        }
        if self.draw_pile.is_empty() {
            self.replenish(rng);
        }
    }

    /// Recycles a played card from the hand back into the draw pile.
    /// Returns false if the card was not in hand. An emptied hand
    /// triggers a reshuffle and redraw.
    pub fn remove_from_hand(&mut self, id: CardId, rng: &mut StdRng) -> bool {
        let Some(index) = self.hand.iter().position(|held| *held == id) else {
            return false;
        };
        self.hand.remove(index);
        self.draw_pile.insert(0, id);
        if self.hand.is_empty() {
            self.shuffle(rng);
            self.draw_hand(*HAND_SIZE, rng);
        }
        true
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Deck(hand: {}, pile: {}, catalog: {})",
            self.hand.len(),
            self.draw_pile.len(),
            self.catalog.len(),
        )
    }
}
