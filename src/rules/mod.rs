//! Duel rules.
//!
//! - `engine`: the `RulesEngine` trait and `GameResult`
//! - `validator`: ordered legality checks per action kind
//! - `resolver`: applies validated actions and detects the hero kill
//! - `turn`: round-start and end-of-turn bookkeeping
//! - `duel`: `DuelRules`, the engine wiring the above together

pub mod duel;
pub mod engine;
pub mod resolver;
pub mod turn;
pub mod validator;

pub use duel::DuelRules;
pub use engine::{GameResult, RulesEngine};
