//! Dice, die kinds and pools

mod kind;
mod pool;
mod reduce;

pub use kind::DieKind;
pub use pool::{Dice, DicePool};
pub use reduce::{ReduceOutcome, Reduction};
