//! Stat - a dice-pool valued stat with modifiers and damage

mod signal;

pub use signal::{Signal, SubscriptionToken};

use crate::config::StatDefinition;
use crate::dice::{Dice, DicePool};
use crate::modifier::{Modifier, ModifierOp};
use crate::types::SourceId;
use std::sync::Arc;
use thiserror::Error;

/// Stat mutation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("modifier operation {0:?} is not supported yet; only additive modifiers aggregate")]
    UnsupportedOperation(ModifierOp),
}

/// A stat whose magnitude is a pool of dice.
///
/// The stat owns two eagerly recomputed derived pools: the aggregated
/// pool (`final_value`, base plus every additive modifier) and the
/// damage-reduced pool (`max_dice`, the aggregated pool with the damage
/// counter peeled off its cheapest non-flat dice). Neither is ever
/// stale after a mutating call returns.
///
/// Expected to be owned and mutated by a single logical owner; there is
/// no internal synchronization.
pub struct Stat {
    definition: Arc<StatDefinition>,
    modifiers: Vec<Modifier>,
    final_value: DicePool,
    damage: i32,
    max_dice: DicePool,
    value_changed: Signal,
    damage_changed: Signal,
}

impl Stat {
    pub fn new(definition: Arc<StatDefinition>) -> Self {
        let final_value = DicePool::from_dice(definition.base);
        let max_dice = final_value.clone();
        Stat {
            definition,
            modifiers: Vec::new(),
            final_value,
            damage: 0,
            max_dice,
            value_changed: Signal::new(),
            damage_changed: Signal::new(),
        }
    }

    // === Definition passthrough ===

    pub fn definition(&self) -> &StatDefinition {
        &self.definition
    }

    pub fn base_value(&self) -> Dice {
        self.definition.base
    }

    pub fn cap(&self) -> i32 {
        self.definition.cap
    }

    pub fn floor(&self) -> i32 {
        self.definition.floor
    }

    pub fn median(&self) -> i32 {
        self.definition.median
    }

    pub fn max_damage(&self) -> i32 {
        self.definition.max_damage
    }

    // === Derived state ===

    /// Aggregated pool: base plus every additive modifier
    pub fn final_value(&self) -> &DicePool {
        &self.final_value
    }

    /// Aggregated pool with the damage counter peeled off
    pub fn max_dice(&self) -> &DicePool {
        &self.max_dice
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Scalar capacity of the aggregated pool
    pub fn intensity(&self) -> i32 {
        self.final_value.scalar_value()
    }

    /// Intensity minus accumulated damage, floored at 0
    pub fn current_value(&self) -> i32 {
        (self.intensity() - self.damage).max(0)
    }

    /// Scalar capacity of the damage-reduced pool
    pub fn max_value(&self) -> i32 {
        self.max_dice.scalar_value()
    }

    // === Mutation ===

    /// Attach a modifier and recompute both derived pools.
    ///
    /// Multiplicative and override modifiers have no aggregation
    /// semantics yet and are rejected so they cannot silently change
    /// nothing.
    pub fn add_modifier(&mut self, modifier: Modifier) -> Result<(), StatError> {
        if modifier.operation != ModifierOp::Additive {
            return Err(StatError::UnsupportedOperation(modifier.operation));
        }
        self.modifiers.push(modifier);
        self.recompute_final_value();
        self.reclamp_damage();
        self.recompute_max_dice();
        Ok(())
    }

    /// Drop every modifier granted by `source` and recompute both
    /// derived pools. A source with no attached modifiers is a no-op.
    pub fn remove_modifiers_from_source(&mut self, source: &SourceId) {
        self.modifiers.retain(|m| m.source != *source);
        self.recompute_final_value();
        self.reclamp_damage();
        self.recompute_max_dice();
    }

    /// Accumulate damage (negative `delta` heals), clamped into
    /// `[0, intensity]`, and recompute the damage-reduced pool. The
    /// aggregated pool is untouched.
    pub fn apply_damage(&mut self, delta: i32) {
        let clamped = (self.damage + delta).clamp(0, self.intensity());
        if clamped != self.damage {
            self.damage = clamped;
            self.recompute_max_dice();
            self.damage_changed.notify();
        }
    }

    // === Change notification ===

    /// Observe changes to the aggregated pool. Fires only when the
    /// recomputed pool differs by value from the previous one.
    pub fn on_value_changed(&mut self, observer: impl FnMut() + 'static) -> SubscriptionToken {
        self.value_changed.subscribe(observer)
    }

    pub fn unsubscribe_value_changed(&mut self, token: SubscriptionToken) {
        self.value_changed.unsubscribe(token);
    }

    /// Observe changes to the damage counter. Fires only when the
    /// clamped counter actually moved.
    pub fn on_damage_changed(&mut self, observer: impl FnMut() + 'static) -> SubscriptionToken {
        self.damage_changed.subscribe(observer)
    }

    pub fn unsubscribe_damage_changed(&mut self, token: SubscriptionToken) {
        self.damage_changed.unsubscribe(token);
    }

    // === Recomputation ===

    fn recompute_final_value(&mut self) {
        let mut totals = DicePool::from_dice(self.definition.base);

        // Additive < Multiplicative < Override; stable, so attachment
        // order is preserved within an operation kind.
        self.modifiers.sort_by_key(|m| m.operation);

        for modifier in &self.modifiers {
            match modifier.operation {
                ModifierOp::Additive => totals.add(modifier.dice.kind, modifier.dice.count),
                // Rejected at add_modifier.
                ModifierOp::Multiplicative | ModifierOp::Override => {}
            }
        }

        if totals != self.final_value {
            self.final_value = totals;
            self.value_changed.notify();
        }
    }

    /// A shrinking aggregated pool can leave the damage counter above
    /// the new intensity; pull it back inside `[0, intensity]`.
    fn reclamp_damage(&mut self) {
        let clamped = self.damage.clamp(0, self.intensity());
        if clamped != self.damage {
            self.damage = clamped;
            self.damage_changed.notify();
        }
    }

    fn recompute_max_dice(&mut self) {
        // Residual unspent budget is intentionally dropped here: damage
        // has no effect beyond pool exhaustion. reduce_by reports it
        // for callers that care.
        self.max_dice = self.final_value.reduce_by(self.damage).pool;
    }
}

impl std::fmt::Debug for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stat")
            .field("definition", &self.definition)
            .field("modifiers", &self.modifiers)
            .field("final_value", &self.final_value)
            .field("damage", &self.damage)
            .field("max_dice", &self.max_dice)
            .finish()
    }
}
