//! A single board row.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Creature;

/// Ordered, capacity-bounded creature sequence.
///
/// Slots are compacted on removal: removing slot 1 moves slot 2 to slot 1.
/// Inline storage covers the default capacity of 5 without allocating.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    cards: SmallVec<[Creature; 5]>,
    capacity: usize,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Creature at `slot`, or `None` past the end of the row.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Creature> {
        self.cards.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Creature> {
        self.cards.get_mut(slot)
    }

    /// Append a creature. Gives it back if the row is full.
    pub fn place(&mut self, creature: Creature) -> Result<(), Creature> {
        if self.is_full() {
            return Err(creature);
        }
        self.cards.push(creature);
        Ok(())
    }

    /// Remove the creature at `slot`, shifting later slots down.
    pub fn remove_at(&mut self, slot: usize) -> Option<Creature> {
        if slot < self.cards.len() {
            Some(self.cards.remove(slot))
        } else {
            None
        }
    }

    /// Remove every creature whose health dropped to 0 or below.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| !c.is_dead());
        before - self.cards.len()
    }

    #[must_use]
    pub fn has_tank(&self) -> bool {
        self.cards.iter().any(Creature::is_tank)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.cards.iter_mut()
    }
}
