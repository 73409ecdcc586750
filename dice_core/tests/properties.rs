//! Property tests for pool aggregation and damage reduction

use dice_core::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn die_kind() -> impl Strategy<Value = DieKind> {
    prop_oneof![
        Just(DieKind::D2),
        Just(DieKind::D4),
        Just(DieKind::D6),
        Just(DieKind::D8),
        Just(DieKind::D10),
        Just(DieKind::D12),
        Just(DieKind::D20),
        Just(DieKind::D100),
        Just(DieKind::Flat),
    ]
}

fn pool_entries() -> impl Strategy<Value = Vec<(DieKind, i32)>> {
    prop::collection::vec((die_kind(), 1..5i32), 0..8)
}

fn build_pool(entries: &[(DieKind, i32)]) -> DicePool {
    let mut pool = DicePool::new();
    for (kind, count) in entries {
        pool.add(*kind, *count);
    }
    pool
}

fn test_definition() -> Arc<StatDefinition> {
    Arc::new(StatDefinition {
        base: Dice::new(2, DieKind::D6),
        cap: 20,
        floor: 0,
        median: 10,
        max_damage: 18,
    })
}

proptest! {
    #[test]
    fn scalar_value_matches_sum_of_entries(entries in pool_entries()) {
        let pool = build_pool(&entries);
        let expected: i32 = pool
            .iter()
            .map(|(kind, count)| count * kind.maximal_value())
            .sum();
        prop_assert_eq!(pool.scalar_value(), expected);
    }

    #[test]
    fn aggregation_is_commutative(entries in pool_entries()) {
        let mut forward = Stat::new(test_definition());
        for (i, (kind, count)) in entries.iter().enumerate() {
            forward
                .add_modifier(Modifier::additive(
                    format!("src_{}", i),
                    Dice::new(*count, *kind),
                ))
                .unwrap();
        }

        let mut backward = Stat::new(test_definition());
        for (i, (kind, count)) in entries.iter().enumerate().rev() {
            backward
                .add_modifier(Modifier::additive(
                    format!("src_{}", i),
                    Dice::new(*count, *kind),
                ))
                .unwrap();
        }

        prop_assert_eq!(forward.final_value(), backward.final_value());
        prop_assert_eq!(forward.intensity(), backward.intensity());
    }

    #[test]
    fn reduction_never_grows_and_preserves_flat(
        entries in pool_entries(),
        budget in 0..300i32,
    ) {
        let pool = build_pool(&entries);
        let reduction = pool.reduce_by(budget);

        for kind in DieKind::all() {
            prop_assert!(reduction.pool.count(*kind) <= pool.count(*kind));
        }
        prop_assert_eq!(
            reduction.pool.count(DieKind::Flat),
            pool.count(DieKind::Flat)
        );
    }

    #[test]
    fn reduction_by_zero_is_identity(entries in pool_entries()) {
        let pool = build_pool(&entries);
        prop_assert_eq!(pool.reduce_by(0).pool, pool);
    }

    #[test]
    fn reduction_past_capacity_wipes_non_flat(entries in pool_entries()) {
        let pool = build_pool(&entries);
        let reduction = pool.reduce_by(pool.non_flat_scalar_value());
        prop_assert_eq!(reduction.pool.non_flat_scalar_value(), 0);
        for kind in DieKind::all() {
            if *kind != DieKind::Flat {
                prop_assert_eq!(reduction.pool.count(*kind), 0);
            }
        }
    }

    #[test]
    fn reduction_accounts_for_every_budget_unit(
        entries in pool_entries(),
        budget in 0..300i32,
    ) {
        let pool = build_pool(&entries);
        let reduction = pool.reduce_by(budget);
        let spent = budget - reduction.outcome.unspent();
        prop_assert_eq!(
            pool.non_flat_scalar_value() - reduction.pool.non_flat_scalar_value(),
            spent
        );
    }

    #[test]
    fn damage_stays_clamped_under_any_sequence(
        deltas in prop::collection::vec(-40..40i32, 0..20),
    ) {
        let mut stat = Stat::new(test_definition());
        for delta in deltas {
            stat.apply_damage(delta);
            prop_assert!(stat.damage() >= 0);
            prop_assert!(stat.damage() <= stat.intensity());
            prop_assert!(stat.current_value() >= 0);
        }
    }
}
