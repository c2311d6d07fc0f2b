//! Creature instances - runtime card state.
//!
//! `Creature` represents a specific creature card during a duel, whether it
//! sits in a deck, a hand or a board row. It pairs the immutable
//! `CardDefinition` with mutable combat state.

use serde::{Deserialize, Serialize};

use super::ability::CreatureKind;
use super::definition::CardDefinition;
use crate::core::RowAffinity;

/// A creature card in a duel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    /// Immutable base stats.
    pub definition: CardDefinition,

    /// Variant (plain, tank, ability-bearer).
    pub kind: CreatureKind,

    /// Current attack damage.
    pub attack: i32,

    /// Current health. A creature at or below 0 is removed from the board
    /// before the next action is validated.
    pub health: i32,

    /// Frozen creatures cannot attack or use abilities.
    pub frozen: bool,

    /// Set once the creature attacked or used its ability this round.
    pub has_attacked: bool,

    /// Set once the creature used its ability this round.
    pub has_used_ability: bool,
}

impl Creature {
    /// Create a fresh creature from its definition.
    #[must_use]
    pub fn new(definition: CardDefinition, kind: CreatureKind) -> Self {
        Self {
            attack: definition.base_attack,
            health: definition.base_health,
            definition,
            kind,
            frozen: false,
            has_attacked: false,
            has_used_ability: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn mana_cost(&self) -> u32 {
        self.definition.mana_cost
    }

    #[must_use]
    pub fn is_tank(&self) -> bool {
        self.kind.is_tank()
    }

    #[must_use]
    pub fn mandatory_row(&self) -> RowAffinity {
        self.kind.mandatory_row()
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `amount` from health.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Clear the per-round action flags.
    pub fn reset_action_flags(&mut self) {
        self.has_attacked = false;
        self.has_used_ability = false;
    }

    /// Projection used by the debug queries.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            mana: self.definition.mana_cost,
            attack_damage: self.attack,
            health: self.health,
            description: self.definition.description.clone(),
            colors: self.definition.colors.clone(),
            name: self.definition.name.clone(),
        }
    }
}

/// Serialized form of a creature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub mana: u32,
    pub attack_damage: i32,
    pub health: i32,
    pub description: String,
    pub colors: Vec<String>,
    pub name: String,
}
