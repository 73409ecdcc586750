//! Example Game - a minimal CLI fight demonstrating dice_core
//!
//! This demo shows:
//! - Loading stat definitions from the built-in TOML config
//! - Equipping and unequipping modifier sources
//! - Applying damage against the pool and watching it shrink
//! - Rolling the surviving pool (rolling lives out here, not in the
//!   library)

use dice_core::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Roll every die in a pool; flat entries contribute their count.
fn roll_pool(pool: &DicePool, rng: &mut ChaCha8Rng) -> i32 {
    let mut total = 0;
    for (kind, count) in pool.iter() {
        match kind {
            DieKind::Flat => total += count,
            kind => {
                for _ in 0..count {
                    total += rng.gen_range(1..=kind.maximal_value());
                }
            }
        }
    }
    total
}

fn print_stat(name: &str, stat: &Stat) {
    println!(
        "  {:<8} pool {:<16} intensity {:<3} current {:<3} max {:<3} (damage {})",
        name,
        stat.final_value().to_string(),
        stat.intensity(),
        stat.current_value(),
        stat.max_value(),
        stat.damage(),
    );
}

fn main() {
    let definitions = default_definitions();
    let mut might = Stat::new(definitions["might"].clone());
    let mut rng = ChaCha8Rng::seed_from_u64(0xD1CE);

    let changes = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&changes);
    might.on_value_changed(move || counter.set(counter.get() + 1));

    println!("== A fresh hero ==");
    print_stat("might", &might);

    println!("\n== Equipping gear ==");
    might
        .add_modifier(Modifier::additive("sword#381", Dice::new(1, DieKind::D6)))
        .expect("additive modifiers are always accepted");
    might
        .add_modifier(Modifier::additive("charm#92", Dice::new(1, DieKind::D4)))
        .expect("additive modifiers are always accepted");
    might
        .add_modifier(Modifier::additive("charm#92", Dice::new(2, DieKind::Flat)))
        .expect("additive modifiers are always accepted");
    print_stat("might", &might);
    println!("  dominant die: {:?}", might.final_value().dominant_die());

    println!("\n== Taking 7 damage ==");
    might.apply_damage(7);
    print_stat("might", &might);
    println!(
        "  rollable pool after damage: {}",
        might.max_dice()
    );

    println!("\n== Three attack rolls with the surviving pool ==");
    for round in 1..=3 {
        println!("  round {}: rolled {}", round, roll_pool(might.max_dice(), &mut rng));
    }

    println!("\n== The charm breaks ==");
    might.remove_modifiers_from_source(&SourceId::from("charm#92"));
    print_stat("might", &might);
    println!("  aggregated-pool changes observed so far: {}", changes.get());

    println!("\n== Snapshot ==");
    match serde_json::to_string_pretty(might.final_value()) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("snapshot failed: {}", err),
    }
}
