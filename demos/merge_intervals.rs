//! Merge Intervals
//!
//! This example merges overlapping intervals with a generated machine, pauses
//! and resumes a run from a checkpoint, and writes the same machine as a Vim
//! script.
//!
//! Key concepts:
//! - Composing generated fragments into one table
//! - Step budgets and checkpoint/resume
//! - Emitting a Vim macro script
//!
//! Run with: cargo run --example merge_intervals -- '[[1,2],[2,3],[5,7]]' 3

use tape_machine::checkpoint::Checkpoint;
use tape_machine::codec;
use tape_machine::core::MachineConfig;
use tape_machine::engine::{RunError, DEFAULT_STEP_BUDGET};
use tape_machine::generators::FieldWidth;
use tape_machine::programs::IntervalMerge;
use tape_machine::vim::{self, VimOptions, MACHINE_FILENAME};
use tape_machine::Machine;

fn main() -> tape_machine::Result<()> {
    println!("=== Merge Intervals Example ===\n");

    let mut args = std::env::args().skip(1);
    let json = args.next().unwrap_or_else(|| "[[1,2],[2,3],[5,7]]".to_string());
    let bits = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(3);

    let intervals = codec::parse_intervals(&json)?;
    let merge = IntervalMerge::new(MachineConfig::vim(), FieldWidth::new(bits)?)?;
    println!(
        "Generated {} transitions for {}-bit fields",
        merge.table().len(),
        bits
    );

    // Run 1: straight through
    let merged = merge.merge(&intervals, DEFAULT_STEP_BUDGET)?;
    println!("{json} -> {}\n", codec::intervals_to_json(&merged)?);

    // Run 2: interrupted by a small budget, then resumed from a checkpoint
    println!("Checkpoint and resume");
    println!("----------------------------------------");
    let mut machine = Machine::new(merge.table());
    match machine.run(merge.initial_tape(&intervals)?, 0, 100) {
        Err(RunError::StepBudgetExceeded { steps, state, .. }) => {
            println!("Paused after {steps} steps in state '{state}'");
        }
        other => println!("Run finished early: {other:?}"),
    }
    let saved = machine.checkpoint().to_json()?;
    let mut resumed = Machine::new(merge.table());
    resumed.restore(&Checkpoint::from_json(&saved)?)?;
    let outcome = resumed.resume(DEFAULT_STEP_BUDGET)?;
    println!(
        "Resumed to {:?} after {} steps: {}\n",
        outcome.verdict,
        outcome.steps,
        codec::intervals_to_json(&merge.decode(&outcome.tape)?)?
    );

    // Run 3: the same machine inside Vim
    let path = std::env::temp_dir().join(MACHINE_FILENAME);
    vim::write(
        merge.table(),
        &merge.initial_tape(&intervals)?,
        VimOptions::default(),
        &path,
    )?;
    println!("Vim machine written to {}", path.display());
    println!("Open it and launch with ggyy@\"");

    println!("\nKey Takeaways:");
    println!("- Table size depends on the field width, never on the input length");
    println!("- A paused run is just a state name, a tape and a cursor");
    Ok(())
}
