//! Read-only debug projections.

use serde_json::Value;

use super::stats::Stats;
use crate::core::{DuelState, PlayerId, Query};
use crate::zones::{CardPile, Row};

/// Answer for a position that holds no creature.
pub const NO_CARD_AT_POSITION: &str = "No card available at that position.";

/// Project `query` against the duel and the session counters.
pub fn answer(state: &DuelState, stats: &Stats, query: Query) -> serde_json::Result<Value> {
    let value = match query {
        Query::PlayerDeck(player) => pile(&state.player(player).deck)?,
        Query::PlayerHero(player) => serde_json::to_value(state.player(player).hero.view())?,
        Query::CardsInHand(player) => pile(&state.player(player).hand)?,
        Query::CardsOnTable => Value::Array(
            state
                .board
                .rows()
                .map(row)
                .collect::<serde_json::Result<Vec<_>>>()?,
        ),
        Query::PlayerTurn => state.current_player().input_index().into(),
        Query::TotalGamesPlayed => stats.total_games_played.into(),
        Query::PlayerOneWins => stats.wins(PlayerId::ONE).into(),
        Query::PlayerTwoWins => stats.wins(PlayerId::TWO).into(),
        Query::PlayerMana(player) => state.player(player).mana.into(),
        Query::CardAtPosition { x, y } => match state.board.creature_at(x, y) {
            Some(creature) => serde_json::to_value(creature.view())?,
            None => NO_CARD_AT_POSITION.into(),
        },
        Query::FrozenCardsOnTable => {
            let views: Vec<_> = state.board.frozen_creatures().map(|c| c.view()).collect();
            serde_json::to_value(views)?
        }
    };
    Ok(value)
}

fn pile(cards: &CardPile) -> serde_json::Result<Value> {
    let views: Vec<_> = cards.iter().map(|c| c.view()).collect();
    serde_json::to_value(views)
}

fn row(cards: &Row) -> serde_json::Result<Value> {
    let views: Vec<_> = cards.iter().map(|c| c.view()).collect();
    serde_json::to_value(views)
}
