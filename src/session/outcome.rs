//! Outcome records.
//!
//! Successful mutating actions produce no outcome. Everything else becomes
//! an `Outcome`, rendered to JSON with keys in a fixed order: `command`,
//! the echoed parameters, then `error` or `output`.

use serde_json::{Map, Value};

use crate::core::{Action, ActionError, Coordinates, Query};
use crate::rules::GameResult;

/// Message used for records that name no known command.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Printable result of one action record.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A mutating action failed validation.
    Rejected { action: Action, error: ActionError },
    /// A hero was killed.
    GameEnded(GameResult),
    /// A read-only query and its projection.
    Answered { query: Query, output: Value },
    /// The record could not be parsed. Query-like records report through
    /// `output`, others through `error`.
    InvalidCommand { command: String, query: bool },
}

impl Outcome {
    /// Render as a JSON object.
    ///
    /// ## Example
    ///
    /// ```
    /// use ccg_duel::core::{Action, ActionError};
    /// use ccg_duel::session::Outcome;
    ///
    /// let outcome = Outcome::Rejected {
    ///     action: Action::PlaceCard { hand_idx: 1 },
    ///     error: ActionError::NotEnoughManaToPlace,
    /// };
    ///
    /// assert_eq!(
    ///     outcome.to_json().to_string(),
    ///     r#"{"command":"placeCard","handIdx":1,"error":"Not enough mana to place card on table."}"#
    /// );
    /// ```
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut node = Map::new();
        match self {
            Outcome::Rejected { action, error } => {
                node.insert("command".into(), action.command().into());
                echo_action(&mut node, action, *error);
                node.insert("error".into(), error.to_string().into());
            }
            Outcome::GameEnded(result) => {
                node.insert("gameEnded".into(), result.message().into());
            }
            Outcome::Answered { query, output } => {
                node.insert("command".into(), query.command().into());
                echo_query(&mut node, query);
                node.insert("output".into(), output.clone());
            }
            Outcome::InvalidCommand { command, query } => {
                node.insert("command".into(), command.clone().into());
                let key = if *query { "output" } else { "error" };
                node.insert(key.into(), INVALID_COMMAND.into());
            }
        }
        Value::Object(node)
    }
}

fn coordinates(pos: Coordinates) -> Value {
    let mut node = Map::new();
    node.insert("x".into(), pos.x.into());
    node.insert("y".into(), pos.y.into());
    Value::Object(node)
}

/// Echo the parameters of a rejected action. A full row is reported
/// without the hand index.
fn echo_action(node: &mut Map<String, Value>, action: &Action, error: ActionError) {
    match *action {
        Action::PlaceCard { .. } if error == ActionError::RowFull => {}
        Action::PlaceCard { hand_idx } => {
            node.insert("handIdx".into(), hand_idx.into());
        }
        Action::CardUsesAttack { attacker, attacked } | Action::CardUsesAbility { attacker, attacked } => {
            node.insert("cardAttacker".into(), coordinates(attacker));
            node.insert("cardAttacked".into(), coordinates(attacked));
        }
        Action::UseAttackHero { attacker } => {
            node.insert("cardAttacker".into(), coordinates(attacker));
        }
        Action::UseHeroAbility { affected_row } => {
            node.insert("affectedRow".into(), affected_row.into());
        }
        Action::EndPlayerTurn => {}
    }
}

fn echo_query(node: &mut Map<String, Value>, query: &Query) {
    match *query {
        Query::PlayerDeck(player) | Query::PlayerHero(player) | Query::CardsInHand(player) | Query::PlayerMana(player) => {
            node.insert("playerIdx".into(), player.input_index().into());
        }
        Query::CardAtPosition { x, y } => {
            node.insert("x".into(), x.into());
            node.insert("y".into(), y.into());
        }
        Query::CardsOnTable
        | Query::PlayerTurn
        | Query::TotalGamesPlayed
        | Query::PlayerOneWins
        | Query::PlayerTwoWins
        | Query::FrozenCardsOnTable => {}
    }
}
