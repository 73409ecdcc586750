//! dice_core - dice-pool valued stats for game entities
//!
//! This library provides:
//! - DicePool: a multiset of dice with scalar conversion and greedy
//!   damage reduction
//! - Modifier: provenance-tagged dice contributions from gear, buffs
//!   and abilities
//! - Stat: aggregated pool + damage counter with change notification
//! - Config: TOML-loaded stat definitions

pub mod config;
pub mod dice;
pub mod modifier;
pub mod prelude;
pub mod stat;
pub mod types;

// Re-export core types for convenience
pub use config::{default_definitions, ConfigError, StatDefinition, StatDefinitions};
pub use dice::{Dice, DicePool, DieKind, ReduceOutcome, Reduction};
pub use modifier::{Modifier, ModifierOp};
pub use stat::{Signal, Stat, StatError, SubscriptionToken};
pub use types::SourceId;
