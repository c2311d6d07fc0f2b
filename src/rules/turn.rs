//! Round and turn bookkeeping.

use log::{debug, trace};

use crate::core::DuelState;

/// Run round-start bookkeeping and hand the turn to the starting player.
///
/// Both players draw one card if their deck is non-empty and gain
/// `min(round, mana_cap)` mana. Every creature's and hero's action flags
/// are cleared.
pub fn begin_round(state: &mut DuelState) {
    let round = state.turn.round;
    let mana = state.config.mana_for_round(round);

    for (player, owner) in state.players.iter_mut() {
        if let Some(name) = owner.draw_card() {
            trace!("{} draws {}", player, name);
        }
        owner.mana += mana;
        owner.hero.has_attacked = false;
    }
    state.board.reset_action_flags();
    state.turn.finish_round_start();

    debug!("round {} begins, +{} mana each", round, mana);
}

/// End the current player's turn.
///
/// The departing player's rows are unfrozen. If control returns to the
/// starting player a new round begins.
pub fn end_turn(state: &mut DuelState) {
    let departing = state.current_player();
    let rows = state.config.layout.rows_of(departing);
    state.board.unfreeze_rows(&rows);

    if state.turn.end_turn() {
        begin_round(state);
    }
    trace!("{} ends turn, {} to act", departing, state.current_player());
}
