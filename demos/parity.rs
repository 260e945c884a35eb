//! Parity Check
//!
//! This example decides whether numbers are even with a five-state machine.
//!
//! Key concepts:
//! - Wildcard rules expanded when the table is built
//! - Running a table under a step budget
//! - Reading the verdict of a halted run
//!
//! Run with: cargo run --example parity -- 10 7 1024

use tape_machine::core::MachineConfig;
use tape_machine::engine::DEFAULT_STEP_BUDGET;
use tape_machine::programs::ParityCheck;

fn main() -> tape_machine::Result<()> {
    println!("=== Parity Check Example ===\n");

    let parity = ParityCheck::new(MachineConfig::default())?;
    println!("Transition table ({} rules):", parity.table().len());
    for transition in parity.table().iter() {
        println!("  {}", transition.describe(parity.table().names()));
    }
    println!();

    let numbers: Vec<u64> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let numbers = if numbers.is_empty() {
        vec![0, 1, 9, 10, 1024]
    } else {
        numbers
    };

    for number in numbers {
        let even = parity.is_even(number, DEFAULT_STEP_BUDGET)?;
        println!("{number:>6} ({number:b}) is {}", if even { "even" } else { "odd" });
    }

    println!("\nKey Takeaways:");
    println!("- A wildcard rule stands for every symbol its state does not handle");
    println!("- The executable table only ever contains concrete symbols");
    Ok(())
}
