//! Ordered card piles: decks and hands.
//!
//! Decks are drawn from the front. Hands append drawn cards at the back and
//! give up cards by index when they are placed on the board.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Creature;
use crate::core::GameRng;

/// An ordered pile of creature cards.
///
/// Backed by `im::Vector` so duel states can be snapshotted cheaply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardPile {
    cards: Vector<Creature>,
}

impl CardPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `idx`, or `None`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Creature> {
        self.cards.get(idx)
    }

    /// Take the first card.
    pub fn draw_front(&mut self) -> Option<Creature> {
        self.cards.pop_front()
    }

    /// Append a card at the back.
    pub fn push_back(&mut self, creature: Creature) {
        self.cards.push_back(creature);
    }

    /// Remove and return the card at `idx`, shifting later cards down.
    pub fn remove(&mut self, idx: usize) -> Option<Creature> {
        if idx < self.cards.len() {
            Some(self.cards.remove(idx))
        } else {
            None
        }
    }

    /// Insert a card at `idx`, shifting later cards up. Appends if `idx` is
    /// past the end.
    pub fn insert(&mut self, idx: usize, creature: Creature) {
        let idx = idx.min(self.cards.len());
        self.cards.insert(idx, creature);
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Creature> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.cards.iter()
    }
}

impl FromIterator<Creature> for CardPile {
    fn from_iter<I: IntoIterator<Item = Creature>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
