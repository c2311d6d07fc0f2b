//! Multi-duel session driver.
//!
//! A `Session` plays the duels of an `Input` in order. Each duel gets a
//! fresh board, players and turn state; the `Stats` counters carry over.
//! Every action record is fed through `Session::process`, which returns
//! the printable outcome, if any.
//!
//! ## Example
//!
//! ```
//! use ccg_duel::session::{Input, Session};
//!
//! let input: Input = serde_json::from_str(r#"{
//!     "playerOneDecks": {"decks": [[{"mana": 1, "attackDamage": 2, "health": 2, "name": "Sentinel"}]]},
//!     "playerTwoDecks": {"decks": [[{"mana": 1, "attackDamage": 2, "health": 2, "name": "Sentinel"}]]},
//!     "games": [{
//!         "startGame": {
//!             "playerOneDeckIdx": 0, "playerTwoDeckIdx": 0,
//!             "shuffleSeed": 7, "startingPlayer": 1,
//!             "playerOneHero": {"mana": 1, "name": "Lord Royce"},
//!             "playerTwoHero": {"mana": 1, "name": "General Kocioraw"}
//!         },
//!         "actions": [
//!             {"command": "placeCard", "handIdx": 3},
//!             {"command": "getPlayerMana", "playerIdx": 1}
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let output = Session::default().run(&input).unwrap();
//!
//! assert_eq!(output.len(), 2);
//! assert_eq!(output[0]["error"], "No card available at that hand index.");
//! assert_eq!(output[1]["output"], 1);
//! ```

pub mod input;
pub mod outcome;
pub mod query;
pub mod stats;

pub use input::{DecksInput, GameInput, Input, StartGameInput};
pub use outcome::{Outcome, INVALID_COMMAND};
pub use query::NO_CARD_AT_POSITION;
pub use stats::Stats;

use log::{info, warn};
use serde_json::Value;

use crate::cards::CardCatalog;
use crate::core::{ActionRecord, Command, DuelConfig, DuelState, PlayerId, PlayerMap, PlayerState, Result, SetupError};
use crate::rules::{DuelRules, RulesEngine};

/// Plays duels and keeps the cross-duel counters.
#[derive(Clone, Debug)]
pub struct Session {
    rules: DuelRules,
    catalog: CardCatalog,
    stats: Stats,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DuelConfig::default())
    }
}

impl Session {
    /// A session with the standard catalog.
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        Self {
            rules: DuelRules::new(config),
            catalog: CardCatalog::standard(),
            stats: Stats::new(),
        }
    }

    /// Replace the card catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &DuelRules {
        &self.rules
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Build a duel from its setup record, with round 1 already begun.
    pub fn start_duel(&self, input: &Input, game: &GameInput) -> std::result::Result<DuelState, SetupError> {
        let start = &game.start_game;
        let starting_player = start.starting_player()?;
        let hero_health = self.rules.config().hero_health;
        let shuffle = self.rules.config().shuffle;

        let build = |player: PlayerId| -> std::result::Result<PlayerState, SetupError> {
            let deck = start.build_deck(input, &self.catalog, player, shuffle)?;
            let hero = self.catalog.hero(start.hero(player).clone(), hero_health)?;
            Ok(PlayerState::new(deck, hero))
        };
        let players = PlayerMap::from_pair(build(PlayerId::ONE)?, build(PlayerId::TWO)?);

        Ok(self.rules.new_duel(players, starting_player))
    }

    /// Feed one action record into `duel`.
    ///
    /// Returns `None` for a successful mutating action, and for any
    /// mutating record once the duel is over. Queries are always answered.
    pub fn process(&mut self, duel: &mut DuelState, record: &ActionRecord) -> Result<Option<Outcome>> {
        let command = match record.parse() {
            Ok(command) => command,
            Err(err) => {
                if duel.is_over() && !record.is_query() {
                    return Ok(None);
                }
                warn!("{:?} error: {}", err.category(), err);
                return Ok(Some(Outcome::InvalidCommand {
                    command: record.command.clone(),
                    query: record.is_query(),
                }));
            }
        };

        let outcome = match command {
            Command::Query(query) => Some(Outcome::Answered {
                query,
                output: query::answer(duel, &self.stats, query)?,
            }),
            Command::Play(action) => match self.rules.apply_action(duel, &action) {
                Ok(Some(result)) => {
                    self.stats.record(result);
                    Some(Outcome::GameEnded(result))
                }
                Ok(None) => None,
                Err(error) => Some(Outcome::Rejected { action, error }),
            },
        };
        Ok(outcome)
    }

    /// Play one duel to the end of its action list.
    pub fn play(&mut self, input: &Input, game: &GameInput) -> Result<Vec<Outcome>> {
        let mut duel = self.start_duel(input, game)?;
        let mut outcomes = Vec::new();

        for record in &game.actions {
            if let Some(outcome) = self.process(&mut duel, record)? {
                outcomes.push(outcome);
            }
        }
        if !duel.is_over() {
            info!("duel left unfinished after {} actions", game.actions.len());
        }
        Ok(outcomes)
    }

    /// Play every duel of `input` and render all outcomes.
    pub fn run(&mut self, input: &Input) -> Result<Vec<Value>> {
        let mut output = Vec::new();
        for game in &input.games {
            output.extend(self.play(input, game)?.iter().map(Outcome::to_json));
        }
        Ok(output)
    }

    /// Parse a JSON input document, play it, and return the JSON array of
    /// outcomes.
    pub fn run_json(&mut self, json: &str) -> Result<Value> {
        let input: Input = serde_json::from_str(json)?;
        Ok(Value::Array(self.run(&input)?))
    }
}
