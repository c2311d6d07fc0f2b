//! Action validation.
//!
//! Pure decision logic: `(state, action) -> Ok | ActionError`. Each action
//! kind runs its checks in a fixed order and the first failing check is
//! the one reported.

use log::trace;

use crate::cards::{Creature, TargetSide};
use crate::core::{Action, ActionError, Coordinates, DuelState, PlayerId};

/// Validate `action` for the current player.
pub fn validate(state: &DuelState, action: &Action) -> Result<(), ActionError> {
    let result = match *action {
        Action::PlaceCard { hand_idx } => check_place_card(state, hand_idx),
        Action::CardUsesAttack { attacker, attacked } => check_card_attack(state, attacker, attacked),
        Action::CardUsesAbility { attacker, attacked } => check_card_ability(state, attacker, attacked),
        Action::UseAttackHero { attacker } => check_hero_attack(state, attacker),
        Action::UseHeroAbility { affected_row } => check_hero_ability(state, affected_row),
        Action::EndPlayerTurn => Ok(()),
    };

    if let Err(err) = result {
        trace!("{} {} rejected ({:?}): {}", state.current_player(), action.command(), err.category(), err);
    }
    result
}

fn creature_at(state: &DuelState, pos: Coordinates) -> Result<&Creature, ActionError> {
    state
        .board
        .creature_at(pos.x, pos.y)
        .ok_or(ActionError::NoCardAtPosition)
}

fn check_place_card(state: &DuelState, hand_idx: i64) -> Result<(), ActionError> {
    let player = state.current_player();
    let owner = state.player(player);
    let card = usize::try_from(hand_idx)
        .ok()
        .and_then(|idx| owner.hand.get(idx))
        .ok_or(ActionError::NoCardInHand)?;

    if owner.mana < card.mana_cost() {
        return Err(ActionError::NotEnoughManaToPlace);
    }

    let row = state.config.layout.row(player, card.mandatory_row());
    if state.board.row(row).is_full() {
        return Err(ActionError::RowFull);
    }
    Ok(())
}

fn check_card_attack(state: &DuelState, attacker: Coordinates, attacked: Coordinates) -> Result<(), ActionError> {
    let source = creature_at(state, attacker)?;
    let target = creature_at(state, attacked)?;
    let enemy = state.opponent();

    if !state.config.layout.belongs_to(attacked.x, enemy) {
        return Err(ActionError::TargetNotEnemy);
    }
    if source.has_attacked || source.has_used_ability {
        return Err(ActionError::AlreadyAttacked);
    }
    if source.frozen {
        return Err(ActionError::Frozen);
    }
    check_tank_priority(state, enemy, target)
}

fn check_card_ability(state: &DuelState, attacker: Coordinates, attacked: Coordinates) -> Result<(), ActionError> {
    let source = creature_at(state, attacker)?;
    let target = creature_at(state, attacked)?;
    let enemy = state.opponent();

    // Ability use checks frozen first and ignores `has_used_ability`.
    if source.frozen {
        return Err(ActionError::Frozen);
    }
    if source.has_attacked {
        return Err(ActionError::AlreadyAttacked);
    }

    let side = source
        .kind
        .ability()
        .map_or(TargetSide::Enemy, |ability| ability.target_side());

    match side {
        TargetSide::Own => {
            if state.config.layout.belongs_to(attacked.x, enemy) {
                return Err(ActionError::TargetNotOwn);
            }
            Ok(())
        }
        TargetSide::Enemy => {
            if !state.config.layout.belongs_to(attacked.x, enemy) {
                return Err(ActionError::TargetNotEnemy);
            }
            check_tank_priority(state, enemy, target)
        }
    }
}

fn check_hero_attack(state: &DuelState, attacker: Coordinates) -> Result<(), ActionError> {
    let source = creature_at(state, attacker)?;

    if source.frozen {
        return Err(ActionError::Frozen);
    }
    if source.has_attacked {
        return Err(ActionError::AlreadyAttacked);
    }
    if state.has_front_tank(state.opponent()) {
        return Err(ActionError::NotTank);
    }
    Ok(())
}

fn check_hero_ability(state: &DuelState, affected_row: i64) -> Result<(), ActionError> {
    let player = state.current_player();
    let owner = state.player(player);

    if owner.hero.ability_cost() > owner.mana {
        return Err(ActionError::NotEnoughManaForHero);
    }
    if owner.hero.has_attacked {
        return Err(ActionError::HeroAlreadyAttacked);
    }

    match owner.hero.ability.target_side() {
        TargetSide::Enemy if !state.config.layout.belongs_to(affected_row, player.opponent()) => {
            Err(ActionError::RowNotEnemy)
        }
        TargetSide::Own if !state.config.layout.belongs_to(affected_row, player) => Err(ActionError::RowNotOwn),
        _ => Ok(()),
    }
}

/// A non-tank target is off limits while its owner keeps a tank in front.
fn check_tank_priority(state: &DuelState, enemy: PlayerId, target: &Creature) -> Result<(), ActionError> {
    if !target.is_tank() && state.has_front_tank(enemy) {
        return Err(ActionError::NotTank);
    }
    Ok(())
}
