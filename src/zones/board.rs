//! The four-row board.
//!
//! The `Board` addresses creatures by (row index, slot index), taken as the
//! signed values the input carries. Addressing never fails loudly: a
//! negative index, an out-of-range row, or a slot past the end of its row
//! simply yields `None`.

use serde::{Deserialize, Serialize};

use super::row::Row;
use crate::cards::Creature;
use crate::core::config::{RowId, ROW_COUNT};

/// Board rows, indexed 0..4.
///
/// ## Usage
///
/// ```
/// use ccg_duel::cards::{CardDefinition, Creature, CreatureKind};
/// use ccg_duel::core::RowId;
/// use ccg_duel::zones::Board;
///
/// let mut board = Board::new(5);
/// let sentinel = Creature::new(CardDefinition::new("Sentinel", 1, 1, 3), CreatureKind::Plain);
///
/// board.place(RowId::new(3), sentinel).unwrap();
///
/// assert_eq!(board.creature_at(3, 0).map(|c| c.name()), Some("Sentinel"));
/// assert!(board.creature_at(3, 1).is_none());
/// assert!(board.creature_at(9, 0).is_none());
/// assert!(board.creature_at(-1, 0).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; ROW_COUNT],
}

impl Board {
    /// Create an empty board whose rows hold at most `row_capacity` creatures.
    #[must_use]
    pub fn new(row_capacity: usize) -> Self {
        Self {
            rows: std::array::from_fn(|_| Row::new(row_capacity)),
        }
    }

    #[must_use]
    pub fn row(&self, row: RowId) -> &Row {
        &self.rows[row.index()]
    }

    /// Row by raw index, or `None` if off the board.
    #[must_use]
    pub fn row_at(&self, x: i64) -> Option<&Row> {
        self.rows.get(usize::try_from(x).ok()?)
    }

    pub fn row_at_mut(&mut self, x: i64) -> Option<&mut Row> {
        self.rows.get_mut(usize::try_from(x).ok()?)
    }

    /// Creature at (x, y), or `None`.
    #[must_use]
    pub fn creature_at(&self, x: i64, y: i64) -> Option<&Creature> {
        self.row_at(x)?.get(usize::try_from(y).ok()?)
    }

    pub fn creature_at_mut(&mut self, x: i64, y: i64) -> Option<&mut Creature> {
        self.row_at_mut(x)?.get_mut(usize::try_from(y).ok()?)
    }

    /// Append a creature to a row. Gives it back if the row is full.
    pub fn place(&mut self, row: RowId, creature: Creature) -> Result<(), Creature> {
        self.rows[row.index()].place(creature)
    }

    /// Clear every creature's per-round action flags.
    pub fn reset_action_flags(&mut self) {
        self.rows
            .iter_mut()
            .flat_map(Row::iter_mut)
            .for_each(Creature::reset_action_flags);
    }

    /// Unfreeze every creature in the given rows.
    pub fn unfreeze_rows(&mut self, rows: &[RowId]) {
        for &row in rows {
            self.rows[row.index()].iter_mut().for_each(|c| c.frozen = false);
        }
    }

    /// Frozen creatures in row-major order.
    pub fn frozen_creatures(&self) -> impl Iterator<Item = &Creature> {
        self.rows.iter().flat_map(Row::iter).filter(|c| c.frozen)
    }

    /// All rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}
