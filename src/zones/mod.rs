//! Card containers.
//!
//! ## Key Types
//!
//! - `Row`: Ordered, capacity-bounded creature sequence
//! - `Board`: The four rows, addressed by (row, slot)
//! - `CardPile`: Ordered deck or hand

pub mod board;
pub mod pile;
pub mod row;

pub use board::Board;
pub use pile::CardPile;
pub use row::Row;
