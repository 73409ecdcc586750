//! DicePool - a multiset of dice, stored as kind -> count

use super::DieKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A number of dice of a single kind, e.g. "2d6" or "3 flat"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub count: i32,
    pub kind: DieKind,
}

impl Dice {
    pub fn new(count: i32, kind: DieKind) -> Self {
        Dice { count, kind }
    }

    /// Total face capacity: count x largest face value
    pub fn maximal_value(&self) -> i32 {
        self.count * self.kind.maximal_value()
    }
}

/// Multiset of dice keyed by kind.
///
/// Invariant: a kind present in the map has count > 0. Equality is
/// structural over the (kind, count) pairs; insertion order never
/// matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicePool {
    counts: HashMap<DieKind, i32>,
}

impl DicePool {
    pub fn new() -> Self {
        DicePool::default()
    }

    /// Build a pool from a single dice group
    pub fn from_dice(dice: Dice) -> Self {
        let mut pool = DicePool::new();
        pool.add(dice.kind, dice.count);
        pool
    }

    /// Merge `count` dice of `kind` into the pool.
    ///
    /// Counts are non-negative by caller contract; `count <= 0` is
    /// ignored so zero-count entries are never created.
    pub fn add(&mut self, kind: DieKind, count: i32) {
        if count <= 0 {
            return;
        }
        *self.counts.entry(kind).or_insert(0) += count;
    }

    pub fn count(&self, kind: DieKind) -> i32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct kinds present
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DieKind, i32)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }

    /// Scalar capacity of the pool: sum of count x maximal face value
    /// over every entry. Flat dice have a maximal value of 1, so they
    /// contribute their count.
    pub fn scalar_value(&self) -> i32 {
        self.counts
            .iter()
            .map(|(kind, count)| count * kind.maximal_value())
            .sum()
    }

    /// Scalar capacity of the non-flat entries only
    pub fn non_flat_scalar_value(&self) -> i32 {
        self.counts
            .iter()
            .filter(|(kind, _)| **kind != DieKind::Flat)
            .map(|(kind, count)| count * kind.maximal_value())
            .sum()
    }

    /// The present non-flat kind with the smallest maximal value, if any
    pub(crate) fn smallest_non_flat(&self) -> Option<DieKind> {
        self.counts
            .keys()
            .copied()
            .filter(|kind| *kind != DieKind::Flat)
            .min_by_key(|kind| kind.maximal_value())
    }

    pub(crate) fn remove_one(&mut self, kind: DieKind) {
        if let Some(count) = self.counts.get_mut(&kind) {
            if *count <= 1 {
                self.counts.remove(&kind);
            } else {
                *count -= 1;
            }
        }
    }

    /// Collapse the pool to its dominant dice group: the entry whose
    /// count x maximal value is largest, with the count re-expressed as
    /// that capacity divided by the kind's maximal value. An empty pool
    /// collapses to 0 flat.
    pub fn dominant_die(&self) -> Dice {
        let mut max_value = 0;
        let mut max_kind = DieKind::Flat;

        for (kind, count) in &self.counts {
            if count * kind.maximal_value() > max_value {
                max_value = count * kind.maximal_value();
                max_kind = *kind;
            }
        }

        Dice {
            count: max_value / max_kind.maximal_value(),
            kind: max_kind,
        }
    }
}

impl std::fmt::Display for DicePool {
    /// Conventional notation, largest die first, flat last: "2d6 + 1d4 + 3"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.counts.is_empty() {
            return write!(f, "0");
        }

        let mut entries: Vec<(DieKind, i32)> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| {
            let flat_last = (*a == DieKind::Flat).cmp(&(*b == DieKind::Flat));
            flat_last.then(b.maximal_value().cmp(&a.maximal_value()))
        });

        for (i, (kind, count)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match kind {
                DieKind::Flat => write!(f, "{}", count)?,
                kind => write!(f, "{}{}", count, kind)?,
            }
        }
        Ok(())
    }
}
