//! Hero instances.
//!
//! A hero is owned by exactly one player for the whole duel. It has no
//! board position and no mandatory row; its ability affects a whole row.

use serde::{Deserialize, Serialize};

use super::ability::HeroAbility;
use super::definition::CardDefinition;

/// A player's hero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    /// Immutable base stats. `mana_cost` is the price of the ability.
    pub definition: CardDefinition,

    /// Row-wide ability.
    pub ability: HeroAbility,

    /// Current health. The duel ends when it reaches 0.
    pub health: i32,

    /// Set once the hero used its ability this round.
    pub has_attacked: bool,
}

impl Hero {
    /// Create a hero with the configured starting health.
    #[must_use]
    pub fn new(definition: CardDefinition, ability: HeroAbility, starting_health: i32) -> Self {
        Self {
            definition,
            ability,
            health: starting_health,
            has_attacked: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Mana needed to use the ability.
    #[must_use]
    pub fn ability_cost(&self) -> u32 {
        self.definition.mana_cost
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Projection used by the debug queries.
    #[must_use]
    pub fn view(&self) -> HeroView {
        HeroView {
            mana: self.definition.mana_cost,
            description: self.definition.description.clone(),
            colors: self.definition.colors.clone(),
            name: self.definition.name.clone(),
            health: self.health,
        }
    }
}

/// Serialized form of a hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroView {
    pub mana: u32,
    pub description: String,
    pub colors: Vec<String>,
    pub name: String,
    pub health: i32,
}
