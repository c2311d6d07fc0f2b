//! Creature variants and ability behaviors.
//!
//! The card model is a closed set of variants:
//! - `CreatureKind::Plain` and `CreatureKind::Tank`
//! - `CreatureKind::Ability(CreatureAbility)` for the four single-target
//!   special abilities
//! - `HeroAbility` for the four row-wide hero abilities
//!
//! Each variant decides tank status, mandatory row and which side of the
//! board its ability may target. Ability effects only touch the cards they
//! are handed.

use serde::{Deserialize, Serialize};

use super::instance::Creature;
use crate::core::RowAffinity;
use crate::zones::Row;

/// Which side of the board an ability may target, relative to its user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSide {
    /// The acting player's own rows.
    Own,
    /// The opponent's rows.
    Enemy,
}

/// Creature variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    /// No ability, back row.
    Plain,
    /// Must be attacked before any non-tank ally. Front row.
    Tank,
    /// Carries a single-target ability.
    Ability(CreatureAbility),
}

impl CreatureKind {
    #[must_use]
    pub fn is_tank(self) -> bool {
        matches!(self, CreatureKind::Tank)
    }

    /// The row this variant must be placed into.
    #[must_use]
    pub fn mandatory_row(self) -> RowAffinity {
        match self {
            CreatureKind::Tank
            | CreatureKind::Ability(CreatureAbility::DamageReducer)
            | CreatureKind::Ability(CreatureAbility::HealthSwap) => RowAffinity::Front,
            CreatureKind::Plain
            | CreatureKind::Ability(CreatureAbility::StatSwap)
            | CreatureKind::Ability(CreatureAbility::Healer) => RowAffinity::Back,
        }
    }

    /// The ability, if this variant has one.
    #[must_use]
    pub fn ability(self) -> Option<CreatureAbility> {
        match self {
            CreatureKind::Ability(ability) => Some(ability),
            _ => None,
        }
    }
}

/// Single-target creature abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureAbility {
    /// Target loses 2 attack, floored at 0.
    DamageReducer,
    /// Caster and target exchange health.
    HealthSwap,
    /// Target's own health and attack are exchanged.
    StatSwap,
    /// Target gains 2 health.
    Healer,
}

impl CreatureAbility {
    /// Side of the board the ability may target.
    #[must_use]
    pub fn target_side(self) -> TargetSide {
        match self {
            CreatureAbility::Healer => TargetSide::Own,
            _ => TargetSide::Enemy,
        }
    }

    /// Apply the ability to `target`.
    ///
    /// `caster_health` is the caster's health before the ability. Returns the
    /// caster's new health when the ability changes it, so callers can
    /// write it back without holding two mutable borrows on the board.
    pub fn apply(self, caster_health: i32, target: &mut Creature) -> Option<i32> {
        match self {
            CreatureAbility::DamageReducer => {
                target.attack = (target.attack - 2).max(0);
                None
            }
            CreatureAbility::HealthSwap => {
                let previous = target.health;
                target.health = caster_health;
                Some(previous)
            }
            CreatureAbility::StatSwap => {
                std::mem::swap(&mut target.health, &mut target.attack);
                None
            }
            CreatureAbility::Healer => {
                target.health += 2;
                None
            }
        }
    }
}

/// Row-wide hero abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroAbility {
    /// Freeze every creature in the row.
    FreezeRow,
    /// +1 attack to every creature in the row.
    AttackBuff,
    /// +1 health to every creature in the row.
    HealthBuff,
    /// Destroy the creature with the highest health (first one on ties).
    DestroyHighestHealth,
}

impl HeroAbility {
    /// Side of the board the ability may target.
    #[must_use]
    pub fn target_side(self) -> TargetSide {
        match self {
            HeroAbility::FreezeRow | HeroAbility::DestroyHighestHealth => TargetSide::Enemy,
            HeroAbility::AttackBuff | HeroAbility::HealthBuff => TargetSide::Own,
        }
    }

    /// Apply the ability to every creature of `row`.
    pub fn apply(self, row: &mut Row) {
        match self {
            HeroAbility::FreezeRow => row.iter_mut().for_each(|c| c.frozen = true),
            HeroAbility::AttackBuff => row.iter_mut().for_each(|c| c.attack += 1),
            HeroAbility::HealthBuff => row.iter_mut().for_each(|c| c.health += 1),
            HeroAbility::DestroyHighestHealth => {
                let mut strongest: Option<(usize, i32)> = None;
                for (slot, creature) in row.iter().enumerate() {
                    if creature.health > strongest.map_or(0, |(_, h)| h) {
                        strongest = Some((slot, creature.health));
                    }
                }
                if let Some((slot, _)) = strongest {
                    row.remove_at(slot);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn creature(attack: i32, health: i32) -> Creature {
        Creature::new(CardDefinition::new("Sentinel", 1, attack, health), CreatureKind::Plain)
    }

    #[test]
    fn test_mandatory_rows() {
        assert_eq!(CreatureKind::Plain.mandatory_row(), RowAffinity::Back);
        assert_eq!(CreatureKind::Tank.mandatory_row(), RowAffinity::Front);
        assert_eq!(
            CreatureKind::Ability(CreatureAbility::DamageReducer).mandatory_row(),
            RowAffinity::Front
        );
        assert_eq!(
            CreatureKind::Ability(CreatureAbility::HealthSwap).mandatory_row(),
            RowAffinity::Front
        );
        assert_eq!(
            CreatureKind::Ability(CreatureAbility::StatSwap).mandatory_row(),
            RowAffinity::Back
        );
        assert_eq!(
            CreatureKind::Ability(CreatureAbility::Healer).mandatory_row(),
            RowAffinity::Back
        );
    }

    #[test]
    fn test_only_tank_is_tank() {
        assert!(CreatureKind::Tank.is_tank());
        assert!(!CreatureKind::Plain.is_tank());
        assert!(!CreatureKind::Ability(CreatureAbility::Healer).is_tank());
    }

    #[test]
    fn test_damage_reducer_floors_at_zero() {
        let mut target = creature(3, 5);
        CreatureAbility::DamageReducer.apply(4, &mut target);
        assert_eq!(target.attack, 1);

        CreatureAbility::DamageReducer.apply(4, &mut target);
        assert_eq!(target.attack, 0);
    }

    #[test]
    fn test_health_swap_exchanges_with_caster() {
        let mut target = creature(2, 7);
        let caster_health = CreatureAbility::HealthSwap.apply(3, &mut target);

        assert_eq!(target.health, 3);
        assert_eq!(caster_health, Some(7));
    }

    #[test]
    fn test_stat_swap_only_touches_target() {
        let mut target = creature(6, 2);
        let caster_health = CreatureAbility::StatSwap.apply(9, &mut target);

        assert_eq!(target.health, 6);
        assert_eq!(target.attack, 2);
        assert_eq!(caster_health, None);
    }

    #[test]
    fn test_healer() {
        let mut target = creature(1, 1);
        CreatureAbility::Healer.apply(1, &mut target);
        assert_eq!(target.health, 3);
    }

    #[test]
    fn test_target_sides() {
        assert_eq!(CreatureAbility::Healer.target_side(), TargetSide::Own);
        assert_eq!(CreatureAbility::StatSwap.target_side(), TargetSide::Enemy);
        assert_eq!(HeroAbility::FreezeRow.target_side(), TargetSide::Enemy);
        assert_eq!(HeroAbility::DestroyHighestHealth.target_side(), TargetSide::Enemy);
        assert_eq!(HeroAbility::AttackBuff.target_side(), TargetSide::Own);
        assert_eq!(HeroAbility::HealthBuff.target_side(), TargetSide::Own);
    }

    #[test]
    fn test_hero_buffs_and_freeze() {
        let mut row = Row::new(5);
        row.place(creature(1, 1)).unwrap();
        row.place(creature(2, 2)).unwrap();

        HeroAbility::AttackBuff.apply(&mut row);
        HeroAbility::HealthBuff.apply(&mut row);
        HeroAbility::FreezeRow.apply(&mut row);

        let stats: Vec<_> = row.iter().map(|c| (c.attack, c.health, c.frozen)).collect();
        assert_eq!(stats, vec![(2, 2, true), (3, 3, true)]);
    }

    #[test]
    fn test_destroy_highest_health_breaks_ties_by_first() {
        let mut row = Row::new(5);
        row.place(creature(1, 2)).unwrap();
        row.place(creature(7, 5)).unwrap();
        row.place(creature(9, 5)).unwrap();

        HeroAbility::DestroyHighestHealth.apply(&mut row);

        let attacks: Vec<_> = row.iter().map(|c| c.attack).collect();
        assert_eq!(attacks, vec![1, 9]);
    }

    #[test]
    fn test_destroy_highest_health_on_empty_row() {
        let mut row = Row::new(5);
        HeroAbility::DestroyHighestHealth.apply(&mut row);
        assert!(row.is_empty());
    }
}
