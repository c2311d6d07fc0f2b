//! Setup and action input records.
//!
//! ```text
//! Input
//! ├── playerOneDecks / playerTwoDecks: DecksInput
//! │     └── decks: [[CardDefinition]]
//! └── games: [GameInput]
//!       ├── startGame: StartGameInput
//!       └── actions: [ActionRecord]
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardDefinition};
use crate::core::{ActionRecord, GameRng, PlayerId, SetupError, ShuffleAlgorithm};
use crate::zones::CardPile;

/// A full session: both players' deck pools and the duels to play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub player_one_decks: DecksInput,
    pub player_two_decks: DecksInput,
    #[serde(default)]
    pub games: Vec<GameInput>,
}

impl Input {
    /// The deck pool of `player`.
    #[must_use]
    pub fn decks(&self, player: PlayerId) -> &DecksInput {
        match player {
            PlayerId::ONE => &self.player_one_decks,
            _ => &self.player_two_decks,
        }
    }
}

/// One player's pool of candidate decks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecksInput {
    #[serde(default)]
    pub nr_cards_in_deck: usize,
    #[serde(default)]
    pub nr_decks: usize,
    pub decks: Vec<Vec<CardDefinition>>,
}

/// One duel: how it starts and what is played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub start_game: StartGameInput,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

/// Duel setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameInput {
    pub player_one_deck_idx: usize,
    pub player_two_deck_idx: usize,
    pub shuffle_seed: i64,
    /// 1-based.
    pub starting_player: i64,
    pub player_one_hero: CardDefinition,
    pub player_two_hero: CardDefinition,
}

impl StartGameInput {
    #[must_use]
    pub fn deck_idx(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::ONE => self.player_one_deck_idx,
            _ => self.player_two_deck_idx,
        }
    }

    #[must_use]
    pub fn hero(&self, player: PlayerId) -> &CardDefinition {
        match player {
            PlayerId::ONE => &self.player_one_hero,
            _ => &self.player_two_hero,
        }
    }

    pub fn starting_player(&self) -> Result<PlayerId, SetupError> {
        PlayerId::from_input_index(self.starting_player).ok_or(SetupError::InvalidStartingPlayer(self.starting_player))
    }

    /// Build `player`'s shuffled deck.
    ///
    /// Every deck is shuffled by a fresh generator seeded with
    /// `shuffle_seed`, so equal decks end up in equal order.
    pub fn build_deck(
        &self,
        input: &Input,
        catalog: &CardCatalog,
        player: PlayerId,
        shuffle: ShuffleAlgorithm,
    ) -> Result<CardPile, SetupError> {
        let index = self.deck_idx(player);
        let cards = input
            .decks(player)
            .decks
            .get(index)
            .ok_or(SetupError::DeckIndexOutOfRange {
                player: player.input_index(),
                index,
            })?;

        let mut deck: CardPile = cards.iter().cloned().map(|def| catalog.creature(def)).collect();
        deck.shuffle(&mut GameRng::from_setup_seed(self.shuffle_seed, shuffle));
        Ok(deck)
    }
}
