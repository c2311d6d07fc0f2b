//! Duel configuration types.
//!
//! A duel is configured once at setup and the configuration is fixed for
//! the duel's lifetime:
//! - `RowLayout`: which board row belongs to which player, and which of a
//!   player's rows is the front and which is the back
//! - `DuelConfig`: numeric rules (hero health, row capacity, mana cap)
//!   plus the layout and the deck shuffle algorithm

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::rng::ShuffleAlgorithm;

/// Number of rows on the board.
pub const ROW_COUNT: usize = 4;

/// Board row identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(pub u8);

impl RowId {
    /// Create a new row ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw row index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row({})", self.0)
    }
}

/// Front/back placement affinity of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowAffinity {
    /// Row facing the enemy. Tanks live here.
    Front,
    /// Row behind the front row.
    Back,
}

/// Table mapping (player, affinity) to a board row.
///
/// ## Example
///
/// ```
/// use ccg_duel::core::{PlayerId, RowAffinity, RowId, RowLayout};
///
/// let layout = RowLayout::standard();
/// assert_eq!(layout.row(PlayerId::ONE, RowAffinity::Front), RowId::new(2));
/// assert_eq!(layout.row(PlayerId::TWO, RowAffinity::Back), RowId::new(0));
/// assert_eq!(layout.owner_of(3), Some(PlayerId::ONE));
/// assert_eq!(layout.owner_of(7), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLayout {
    front: PlayerMap<RowId>,
    back: PlayerMap<RowId>,
}

impl RowLayout {
    /// Rows 0 and 1 are player two's back and front; rows 2 and 3 are
    /// player one's front and back.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            front: PlayerMap::from_pair(RowId::new(2), RowId::new(1)),
            back: PlayerMap::from_pair(RowId::new(3), RowId::new(0)),
        }
    }

    /// Build a custom layout.
    ///
    /// Panics unless the four rows are distinct and on the board.
    #[must_use]
    pub fn new(front: PlayerMap<RowId>, back: PlayerMap<RowId>) -> Self {
        let mut seen = [false; ROW_COUNT];
        for row in [front[PlayerId::ONE], front[PlayerId::TWO], back[PlayerId::ONE], back[PlayerId::TWO]] {
            assert!(row.index() < ROW_COUNT, "Row {} is off the board", row);
            assert!(!seen[row.index()], "Row {} assigned twice", row);
            seen[row.index()] = true;
        }
        Self { front, back }
    }

    /// The row a player places creatures with the given affinity into.
    #[must_use]
    pub fn row(&self, player: PlayerId, affinity: RowAffinity) -> RowId {
        match affinity {
            RowAffinity::Front => self.front[player],
            RowAffinity::Back => self.back[player],
        }
    }

    /// Both rows of a player, front first.
    #[must_use]
    pub fn rows_of(&self, player: PlayerId) -> [RowId; 2] {
        [self.front[player], self.back[player]]
    }

    /// The player owning a raw row index, or `None` if it is off the board.
    #[must_use]
    pub fn owner_of(&self, row: i64) -> Option<PlayerId> {
        let row = usize::try_from(row).ok()?;
        PlayerId::all().find(|&p| self.rows_of(p).iter().any(|r| r.index() == row))
    }

    /// Check if a raw row index belongs to `player`.
    #[must_use]
    pub fn belongs_to(&self, row: i64, player: PlayerId) -> bool {
        self.owner_of(row) == Some(player)
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete duel configuration.
///
/// ## Example
///
/// ```
/// use ccg_duel::core::DuelConfig;
///
/// let config = DuelConfig::default().with_hero_health(10);
/// assert_eq!(config.hero_health, 10);
/// assert_eq!(config.row_capacity, 5);
/// assert_eq!(config.mana_cap, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Starting health of every hero.
    pub hero_health: i32,

    /// Maximum creatures per row.
    pub row_capacity: usize,

    /// Upper bound on mana gained per round.
    pub mana_cap: u32,

    /// Row ownership table.
    pub layout: RowLayout,

    /// Generator used for the starting deck shuffle.
    #[serde(default)]
    pub shuffle: ShuffleAlgorithm,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            hero_health: 30,
            row_capacity: 5,
            mana_cap: 10,
            layout: RowLayout::standard(),
            shuffle: ShuffleAlgorithm::default(),
        }
    }
}

impl DuelConfig {
    /// Set hero starting health.
    #[must_use]
    pub fn with_hero_health(mut self, health: i32) -> Self {
        self.hero_health = health;
        self
    }

    /// Set row capacity.
    #[must_use]
    pub fn with_row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    /// Set per-round mana cap.
    #[must_use]
    pub fn with_mana_cap(mut self, cap: u32) -> Self {
        self.mana_cap = cap;
        self
    }

    /// Set the row layout.
    #[must_use]
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the deck shuffle algorithm.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleAlgorithm) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Mana both players gain at the start of `round`.
    #[must_use]
    pub fn mana_for_round(&self, round: u32) -> u32 {
        round.min(self.mana_cap)
    }
}
