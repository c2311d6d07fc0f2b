//! Action resolution.
//!
//! Applies a validated action to the duel. Lookups that validation already
//! guaranteed are still written as fallible, so a misuse leaves the state
//! unchanged instead of panicking.

use log::{debug, info};

use super::engine::GameResult;
use super::turn;
use crate::core::{Action, Coordinates, DuelState, PlayerId};

/// Apply `action` for the current player.
///
/// Returns `Some(result)` if the action killed the enemy hero.
pub fn resolve(state: &mut DuelState, action: &Action) -> Option<GameResult> {
    let player = state.current_player();

    match *action {
        Action::PlaceCard { hand_idx } => place_card(state, player, hand_idx),
        Action::CardUsesAttack { attacker, attacked } => card_attack(state, attacker, attacked),
        Action::CardUsesAbility { attacker, attacked } => card_ability(state, attacker, attacked),
        Action::UseAttackHero { attacker } => return hero_attack(state, player, attacker),
        Action::UseHeroAbility { affected_row } => hero_ability(state, player, affected_row),
        Action::EndPlayerTurn => turn::end_turn(state),
    }
    None
}

fn place_card(state: &mut DuelState, player: PlayerId, hand_idx: i64) {
    let Ok(hand_idx) = usize::try_from(hand_idx) else {
        return;
    };
    let Some(card) = state.player_mut(player).hand.remove(hand_idx) else {
        return;
    };
    let cost = card.mana_cost();
    let row = state.config.layout.row(player, card.mandatory_row());
    let name = card.name().to_string();

    match state.board.place(row, card) {
        Ok(()) => {
            state.player_mut(player).mana -= cost;
            debug!("{} places {} into {}", player, name, row);
        }
        Err(card) => state.player_mut(player).hand.insert(hand_idx, card),
    }
}

fn card_attack(state: &mut DuelState, attacker: Coordinates, attacked: Coordinates) {
    let Some(source) = state.board.creature_at_mut(attacker.x, attacker.y) else {
        return;
    };
    source.has_attacked = true;
    let damage = source.attack;

    if let Some(target) = state.board.creature_at_mut(attacked.x, attacked.y) {
        target.take_damage(damage);
        debug!("creature at {} hits {} for {}", attacker, attacked, damage);
    }
    remove_dead(state, attacked.x);
}

fn card_ability(state: &mut DuelState, attacker: Coordinates, attacked: Coordinates) {
    let Some(source) = state.board.creature_at_mut(attacker.x, attacker.y) else {
        return;
    };
    source.has_attacked = true;
    source.has_used_ability = true;
    let ability = source.kind.ability();
    let caster_health = source.health;

    let swapped = match (ability, state.board.creature_at_mut(attacked.x, attacked.y)) {
        (Some(ability), Some(target)) => {
            debug!("creature at {} uses {:?} on {}", attacker, ability, attacked);
            ability.apply(caster_health, target)
        }
        _ => None,
    };
    if let Some(health) = swapped {
        if let Some(source) = state.board.creature_at_mut(attacker.x, attacker.y) {
            source.health = health;
        }
    }
    remove_dead(state, attacked.x);
}

fn hero_attack(state: &mut DuelState, player: PlayerId, attacker: Coordinates) -> Option<GameResult> {
    let source = state.board.creature_at_mut(attacker.x, attacker.y)?;
    source.has_attacked = true;
    let damage = source.attack;

    let hero = &mut state.player_mut(player.opponent()).hero;
    hero.take_damage(damage);
    debug!("creature at {} hits {}'s hero for {}", attacker, player.opponent(), damage);

    if !hero.is_dead() {
        return None;
    }
    state.turn.end_game(player);
    let result = GameResult::Winner(player);
    info!("{}", result.message());
    Some(result)
}

fn hero_ability(state: &mut DuelState, player: PlayerId, affected_row: i64) {
    let hero = &state.player(player).hero;
    let (ability, cost) = (hero.ability, hero.ability_cost());

    let Some(row) = state.board.row_at_mut(affected_row) else {
        return;
    };
    ability.apply(row);

    let owner = state.player_mut(player);
    owner.hero.has_attacked = true;
    owner.mana -= cost;
    debug!("{} uses {:?} on row {}", player, ability, affected_row);
}

/// Drop the creatures killed in row `x`.
fn remove_dead(state: &mut DuelState, x: i64) {
    if let Some(row) = state.board.row_at_mut(x) {
        let removed = row.remove_dead();
        if removed > 0 {
            debug!("{} creature(s) die in row {}", removed, x);
        }
    }
}
