//! The duel's `RulesEngine` implementation.

use log::info;

use super::engine::{GameResult, RulesEngine};
use super::{resolver, turn, validator};
use crate::core::{Action, ActionError, Coordinates, DuelConfig, DuelState, PlayerId, PlayerMap, PlayerState, ROW_COUNT};

/// Rules of the two-player creature duel.
///
/// ## Example
///
/// ```
/// use ccg_duel::cards::{CardCatalog, CardDefinition};
/// use ccg_duel::core::{Action, PlayerId, PlayerMap, PlayerState};
/// use ccg_duel::rules::{DuelRules, RulesEngine};
/// use ccg_duel::zones::CardPile;
///
/// let catalog = CardCatalog::standard();
/// let rules = DuelRules::default();
/// let players = PlayerMap::new(|_| {
///     let deck: CardPile = (0..3)
///         .map(|_| catalog.creature(CardDefinition::new("Sentinel", 1, 2, 2)))
///         .collect();
///     let hero = catalog.hero(CardDefinition::new("King Mudface", 2, 0, 0), 30).unwrap();
///     PlayerState::new(deck, hero)
/// });
///
/// let mut duel = rules.new_duel(players, PlayerId::ONE);
/// assert_eq!(duel.players[PlayerId::ONE].mana, 1);
///
/// rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: 0 }).unwrap();
/// assert_eq!(duel.board.creature_at(3, 0).map(|c| c.name()), Some("Sentinel"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DuelRules {
    config: DuelConfig,
}

impl DuelRules {
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        Self { config }
    }

    /// Start a duel: round 1, `starting_player` to act, round-start
    /// bookkeeping already done.
    #[must_use]
    pub fn new_duel(&self, players: PlayerMap<PlayerState>, starting_player: PlayerId) -> DuelState {
        let mut state = DuelState::new(self.config.clone(), players, starting_player);
        turn::begin_round(&mut state);
        info!(
            "duel starts: {} ({}) vs {} ({}), {} first",
            PlayerId::ONE,
            state.players[PlayerId::ONE].hero.name(),
            PlayerId::TWO,
            state.players[PlayerId::TWO].hero.name(),
            starting_player
        );
        state
    }
}

impl RulesEngine for DuelRules {
    fn config(&self) -> &DuelConfig {
        &self.config
    }

    fn validate(&self, state: &DuelState, action: &Action) -> Result<(), ActionError> {
        validator::validate(state, action)
    }

    fn resolve(&self, state: &mut DuelState, action: &Action) -> Option<GameResult> {
        resolver::resolve(state, action)
    }

    /// Every hand index, every own creature against every board position,
    /// every row for the hero, and the turn end.
    fn candidate_actions(&self, state: &DuelState) -> Vec<Action> {
        let player = state.current_player();
        let mut actions: Vec<Action> = (0..state.player(player).hand.len() as i64)
            .map(|hand_idx| Action::PlaceCard { hand_idx })
            .collect();

        let targets: Vec<Coordinates> = (0..ROW_COUNT as i64)
            .flat_map(|x| {
                let len = state.board.row_at(x).map_or(0, |row| row.len() as i64);
                (0..len).map(move |y| Coordinates::new(x, y))
            })
            .collect();

        for row in state.config.layout.rows_of(player) {
            for (y, creature) in state.board.row(row).iter().enumerate() {
                let attacker = Coordinates::new(row.index() as i64, y as i64);
                for &attacked in &targets {
                    actions.push(Action::CardUsesAttack { attacker, attacked });
                    if creature.kind.ability().is_some() {
                        actions.push(Action::CardUsesAbility { attacker, attacked });
                    }
                }
                actions.push(Action::UseAttackHero { attacker });
            }
        }

        actions.extend((0..ROW_COUNT as i64).map(|affected_row| Action::UseHeroAbility { affected_row }));
        actions.push(Action::EndPlayerTurn);
        actions
    }

    fn is_terminal(&self, state: &DuelState) -> Option<GameResult> {
        state.turn.winner().map(GameResult::Winner)
    }
}
