//! Turnstile State Machine
//!
//! This example demonstrates the generic engine with custom state and
//! condition types.
//!
//! Key concepts:
//! - Edges registered from bare condition values
//! - Observable vs. swallowed inputs via the `process` return value
//! - `process_outcome` reporting the pre-call state
//!
//! Run with: cargo run --example turnstile
//! Engine logs: RUST_LOG=edgewise=debug cargo run --example turnstile

use edgewise::{EdgeFlags, Machine};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Turnstile {
    Locked,
    Unlocked,
}

#[derive(Clone, Debug, PartialEq)]
enum Input {
    Coin,
    Push,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let mut machine = Machine::new(Turnstile::Locked);
    machine.add_edge(
        Turnstile::Locked,
        Turnstile::Unlocked,
        Input::Coin,
        "coin",
        EdgeFlags::NONE,
    );
    machine.add_edge(
        Turnstile::Unlocked,
        Turnstile::Locked,
        Input::Push,
        "push",
        EdgeFlags::NONE,
    );

    println!("Initial state: {:?}\n", machine.current_state());

    for input in [Input::Push, Input::Coin, Input::Coin, Input::Push] {
        let label = format!("{input:?}");
        let outcome = machine.process_outcome(input);
        println!(
            "  {label:>4}: {:?} -> {:?} ({})",
            outcome.ended_state,
            machine.current_state(),
            if outcome.changed { "moved" } else { "swallowed" }
        );
    }

    println!("\nFinal state: {:?}", machine.current_state());
    println!("\n=== Example Complete ===");
}
