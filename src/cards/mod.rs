//! Card system: definitions, variants, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Immutable base stats from the setup record
//! - `CreatureKind` / `CreatureAbility` / `HeroAbility`: Closed variant set
//! - `Creature`: Runtime creature state (current stats, status flags)
//! - `Hero`: Runtime hero state
//! - `CardCatalog`: Name to variant lookup

pub mod ability;
pub mod definition;
pub mod hero;
pub mod instance;
pub mod registry;

pub use ability::{CreatureAbility, CreatureKind, HeroAbility, TargetSide};
pub use definition::CardDefinition;
pub use hero::{Hero, HeroView};
pub use instance::{CardView, Creature};
pub use registry::CardCatalog;
