//! Prelude module for convenient imports
//!
//! ```rust
//! use dice_core::prelude::*;
//! ```

// Core types
pub use crate::dice::{Dice, DicePool, DieKind, ReduceOutcome, Reduction};
pub use crate::modifier::{Modifier, ModifierOp};
pub use crate::stat::{Stat, StatError, SubscriptionToken};
pub use crate::types::SourceId;

// Config
pub use crate::config::{default_definitions, StatDefinition, StatDefinitions};
