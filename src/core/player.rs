//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two duelists.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a duel.
pub const PLAYER_COUNT: usize = 2;

/// Identifier of one of the two duelists.
///
/// Player indices are 0-based internally: the first player is `PlayerId(0)`.
/// Action records and projections use the 1-based numbering (`1`, `2`),
/// see [`PlayerId::from_input_index`] and [`PlayerId::input_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player one.
    pub const ONE: PlayerId = PlayerId(0);
    /// Player two.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid duelist index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player index out of range");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert a 1-based player index from an action record.
    ///
    /// ```
    /// use ccg_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_input_index(1), Some(PlayerId::ONE));
    /// assert_eq!(PlayerId::from_input_index(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::from_input_index(3), None);
    /// ```
    #[must_use]
    pub fn from_input_index(idx: i64) -> Option<Self> {
        match idx {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// The 1-based index used in action records and projections.
    #[must_use]
    pub const fn input_index(self) -> u8 {
        self.0 + 1
    }

    /// The other duelist.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }

    /// Ordinal name used in game-end messages ("one" / "two").
    #[must_use]
    pub const fn ordinal(self) -> &'static str {
        match self.0 {
            0 => "one",
            _ => "two",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.ordinal())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ccg_duel::core::{PlayerId, PlayerMap};
///
/// let mut mana: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// mana[PlayerId::TWO] += 3;
///
/// assert_eq!(mana[PlayerId::ONE], 0);
/// assert_eq!(mana[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a PlayerMap from explicit values for player one and two.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(PlayerId::ONE.input_index(), 1);
        assert_eq!(PlayerId::TWO.input_index(), 2);
        assert_eq!(format!("{}", PlayerId::ONE), "Player one");
        assert_eq!(format!("{}", PlayerId::TWO), "Player two");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
    }

    #[test]
    fn test_from_input_index() {
        assert_eq!(PlayerId::from_input_index(0), None);
        assert_eq!(PlayerId::from_input_index(-1), None);
        assert_eq!(PlayerId::from_input_index(2), Some(PlayerId::TWO));
    }

    #[test]
    #[should_panic(expected = "Player index out of range")]
    fn test_new_rejects_third_player() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::ONE], 0);
        assert_eq!(map[PlayerId::TWO], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();

        map[PlayerId::ONE] = 10;
        map[PlayerId::TWO] = 20;

        assert_eq!(map[PlayerId::ONE], 10);
        assert_eq!(map[PlayerId::TWO], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::from_pair(4, 7);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &4), (PlayerId::TWO, &7)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::from_pair(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
