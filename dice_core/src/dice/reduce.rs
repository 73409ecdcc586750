//! Greedy damage reduction: peel the cheapest non-flat dice first

use super::{DicePool, DieKind};

/// How a [`DicePool::reduce_by`] call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOutcome {
    /// The budget was consumed exactly
    BudgetSpent,
    /// Non-flat dice remain, but the cheapest costs more than the
    /// leftover budget
    ShortBudget { unspent: i32 },
    /// Every non-flat die was peeled before the budget ran out
    DiceExhausted { unspent: i32 },
}

impl ReduceOutcome {
    /// Budget left over after the reduction stopped
    pub fn unspent(self) -> i32 {
        match self {
            ReduceOutcome::BudgetSpent => 0,
            ReduceOutcome::ShortBudget { unspent } => unspent,
            ReduceOutcome::DiceExhausted { unspent } => unspent,
        }
    }
}

/// Result of reducing a pool by a damage budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub pool: DicePool,
    pub outcome: ReduceOutcome,
}

impl DicePool {
    /// Remove up to `budget` worth of face capacity from the pool,
    /// cheapest non-flat kind first, one die at a time. A die is peeled
    /// only while its maximal value fits the remaining budget, so the
    /// reduction never spends past `budget`. Flat entries are never
    /// touched.
    ///
    /// The outcome reports any unspent remainder instead of dropping it
    /// silently: either the pool ran out of non-flat dice, or the
    /// cheapest remaining die costs more than what is left.
    pub fn reduce_by(&self, budget: i32) -> Reduction {
        let mut pool = self.clone();
        let mut remaining = budget.max(0);

        loop {
            if remaining == 0 {
                return Reduction {
                    pool,
                    outcome: ReduceOutcome::BudgetSpent,
                };
            }
            let kind = match pool.smallest_non_flat() {
                Some(kind) => kind,
                None => {
                    return Reduction {
                        pool,
                        outcome: ReduceOutcome::DiceExhausted { unspent: remaining },
                    }
                }
            };
            if kind.maximal_value() > remaining {
                return Reduction {
                    pool,
                    outcome: ReduceOutcome::ShortBudget { unspent: remaining },
                };
            }
            pool.remove_one(kind);
            remaining -= kind.maximal_value();
        }
    }
}
