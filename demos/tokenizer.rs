//! Expression Tokenizer
//!
//! This example demonstrates the character layer: a small tokenizer wired
//! from pattern edges.
//!
//! Key concepts:
//! - Pattern edges (`\w`, `\d`, escaped metacharacters)
//! - A silent global whitespace edge as the token delimiter
//! - Token boundaries read off `process_outcome`
//!
//! Run with: cargo run --example tokenizer

use edgewise::{EdgeFlags, TextMachine};
use tracing_subscriber::EnvFilter;

const READY: u32 = 0;
const WORD: u32 = 1;
const NUMBER: u32 = 2;
const SYMBOL: u32 = 3;

fn build_tokenizer() -> TextMachine<u32> {
    let mut machine = TextMachine::new(READY);
    machine.set_state_name(READY, "Ready");
    machine.set_state_name(WORD, "Word");
    machine.set_state_name(NUMBER, "Number");
    machine.set_state_name(SYMBOL, "Symbol");

    machine
        .add_pattern_edge(READY, WORD, "\\w", EdgeFlags::NONE)
        .unwrap();
    machine
        .add_pattern_edge(WORD, WORD, "\\w\\d", EdgeFlags::NONE)
        .unwrap();
    machine
        .add_pattern_edge(READY, NUMBER, "\\d", EdgeFlags::NONE)
        .unwrap();
    machine
        .add_pattern_edge(NUMBER, NUMBER, "\\d", EdgeFlags::NONE)
        .unwrap();
    machine
        .add_pattern_edge(READY, SYMBOL, "+\\-*/=", EdgeFlags::NONE)
        .unwrap();
    machine
        .add_pattern_edge(SYMBOL, SYMBOL, "+\\-*/=", EdgeFlags::NONE)
        .unwrap();
    machine
        .add_pattern_global_edge(READY, "\\s\\n", EdgeFlags::SILENT)
        .unwrap();

    machine
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Expression Tokenizer ===\n");

    let input = "sum = ab1 + 42";
    let mut machine = build_tokenizer();
    let mut buffer = String::new();

    println!("Input: {input:?}\n");

    for sym in input.chars() {
        let outcome = machine.process_outcome(sym);

        if outcome.ended_state != READY && machine.current_state() == &READY {
            println!(
                "  {:>6}  {buffer:?}",
                machine.state_name(&outcome.ended_state)
            );
            buffer.clear();
        }
        if machine.current_state() != &READY {
            buffer.push(sym);
        }
    }

    // Flush the token still open at end of input.
    if machine.current_state() != &READY {
        println!(
            "  {:>6}  {buffer:?}",
            machine.state_name(machine.current_state())
        );
    }

    println!("\n=== Example Complete ===");
}
