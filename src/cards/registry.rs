//! Card catalog for name lookup.
//!
//! The `CardCatalog` maps card names from the setup record to their
//! concrete variant: creature kind for creatures, ability for heroes.
//! Base stats are not stored here; they travel with each card's
//! `CardDefinition`.

use log::warn;
use rustc_hash::FxHashMap;

use super::ability::{CreatureAbility, CreatureKind, HeroAbility};
use super::definition::CardDefinition;
use super::hero::Hero;
use super::instance::Creature;
use crate::core::SetupError;

/// Registry of named creatures and heroes.
///
/// ## Example
///
/// ```
/// use ccg_duel::cards::{CardCatalog, CardDefinition, CreatureKind};
///
/// let catalog = CardCatalog::standard();
///
/// let goliath = catalog.creature(CardDefinition::new("Goliath", 2, 1, 3));
/// assert_eq!(goliath.kind, CreatureKind::Tank);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    creatures: FxHashMap<String, CreatureKind>,
    heroes: FxHashMap<String, HeroAbility>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the game.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register_creature("Sentinel", CreatureKind::Plain);
        catalog.register_creature("Berserker", CreatureKind::Plain);
        catalog.register_creature("Goliath", CreatureKind::Tank);
        catalog.register_creature("Warden", CreatureKind::Tank);
        catalog.register_creature("The Ripper", CreatureKind::Ability(CreatureAbility::DamageReducer));
        catalog.register_creature("Miraj", CreatureKind::Ability(CreatureAbility::HealthSwap));
        catalog.register_creature("The Cursed One", CreatureKind::Ability(CreatureAbility::StatSwap));
        catalog.register_creature("Disciple", CreatureKind::Ability(CreatureAbility::Healer));

        catalog.register_hero("Lord Royce", HeroAbility::FreezeRow);
        catalog.register_hero("Empress Thorina", HeroAbility::DestroyHighestHealth);
        catalog.register_hero("King Mudface", HeroAbility::HealthBuff);
        catalog.register_hero("General Kocioraw", HeroAbility::AttackBuff);

        catalog
    }

    /// Register a creature name.
    ///
    /// Panics if the name is already registered.
    pub fn register_creature(&mut self, name: impl Into<String>, kind: CreatureKind) {
        let name = name.into();
        if self.creatures.contains_key(&name) {
            panic!("Creature {:?} already registered", name);
        }
        self.creatures.insert(name, kind);
    }

    /// Register a hero name.
    ///
    /// Panics if the name is already registered.
    pub fn register_hero(&mut self, name: impl Into<String>, ability: HeroAbility) {
        let name = name.into();
        if self.heroes.contains_key(&name) {
            panic!("Hero {:?} already registered", name);
        }
        self.heroes.insert(name, ability);
    }

    /// Look up a creature variant by name.
    #[must_use]
    pub fn creature_kind(&self, name: &str) -> Option<CreatureKind> {
        self.creatures.get(name).copied()
    }

    /// Look up a hero ability by name.
    #[must_use]
    pub fn hero_ability(&self, name: &str) -> Option<HeroAbility> {
        self.heroes.get(name).copied()
    }

    /// Build a creature instance.
    ///
    /// Names missing from the catalog become plain back-row creatures.
    #[must_use]
    pub fn creature(&self, definition: CardDefinition) -> Creature {
        let kind = self.creature_kind(&definition.name).unwrap_or_else(|| {
            warn!("unknown creature {:?}, treating it as a plain creature", definition.name);
            CreatureKind::Plain
        });
        Creature::new(definition, kind)
    }

    /// Build a hero instance with the given starting health.
    pub fn hero(&self, definition: CardDefinition, starting_health: i32) -> Result<Hero, SetupError> {
        let ability = self
            .hero_ability(&definition.name)
            .ok_or_else(|| SetupError::UnknownHero(definition.name.clone()))?;
        Ok(Hero::new(definition, ability, starting_health))
    }

    /// Number of registered creatures and heroes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len() + self.heroes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty() && self.heroes.is_empty()
    }
}
