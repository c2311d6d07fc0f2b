//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable base stats of a card as supplied by
//! the setup record: mana cost, base attack, base health, name and
//! descriptive tags. Combat state (current attack / health, status flags)
//! lives on the runtime instance, see `Creature` and `Hero`.

use serde::{Deserialize, Serialize};

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_duel::cards::CardDefinition;
///
/// let goliath = CardDefinition::new("Goliath", 2, 1, 3)
///     .with_description("A towering wall of muscle")
///     .with_colors(["Brown"]);
///
/// assert_eq!(goliath.mana_cost, 2);
/// assert_eq!(goliath.colors, vec!["Brown".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Card name; also the catalog key.
    pub name: String,

    /// Mana needed to place the card (or to use a hero's ability).
    #[serde(rename = "mana")]
    pub mana_cost: u32,

    /// Base attack damage. Heroes carry 0.
    #[serde(rename = "attackDamage", default)]
    pub base_attack: i32,

    /// Base health. Heroes ignore this and use the configured hero health.
    #[serde(rename = "health", default)]
    pub base_health: i32,

    /// Flavor text.
    #[serde(default)]
    pub description: String,

    /// Color tags.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl CardDefinition {
    /// Create a new card definition without descriptive tags.
    #[must_use]
    pub fn new(name: impl Into<String>, mana_cost: u32, base_attack: i32, base_health: i32) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            base_attack,
            base_health,
            description: String::new(),
            colors: Vec::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the color tags (builder pattern).
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }
}
