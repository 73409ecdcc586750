//! Stat modifiers: provenance-tagged dice contributions

use crate::dice::Dice;
use crate::types::SourceId;
use serde::{Deserialize, Serialize};

/// How a modifier combines into the aggregated pool.
///
/// Declaration order is the aggregation order: additive modifiers fold
/// first, then multiplicative, then overrides. Only `Additive` is
/// implemented today; [`Stat::add_modifier`](crate::stat::Stat::add_modifier)
/// rejects the other two.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ModifierOp {
    Additive,
    Multiplicative,
    Override,
}

/// A single dice contribution granted by an external source.
///
/// Immutable once attached; the stat identifies it for removal by its
/// `source`, not by the modifier's own identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub source: SourceId,
    pub dice: Dice,
    pub operation: ModifierOp,
}

impl Modifier {
    pub fn new(source: impl Into<SourceId>, dice: Dice, operation: ModifierOp) -> Self {
        Modifier {
            source: source.into(),
            dice,
            operation,
        }
    }

    /// Additive contribution from `source`
    pub fn additive(source: impl Into<SourceId>, dice: Dice) -> Self {
        Modifier::new(source, dice, ModifierOp::Additive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DieKind;

    #[test]
    fn test_operation_aggregation_order() {
        assert!(ModifierOp::Additive < ModifierOp::Multiplicative);
        assert!(ModifierOp::Multiplicative < ModifierOp::Override);
    }

    #[test]
    fn test_additive_constructor() {
        let m = Modifier::additive("sword_01", Dice::new(1, DieKind::D6));
        assert_eq!(m.source, SourceId::from("sword_01"));
        assert_eq!(m.operation, ModifierOp::Additive);
    }
}
