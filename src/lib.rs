//! Tape machine: deterministic bounded-tape state machines with generated
//! transition tables.
//!
//! Programs are plain lookup tables from `(state, symbol)` to
//! `(state, symbol, move)`. Writing such tables by hand does not scale, so
//! the crate splits the work in two:
//!
//! - **Generators** synthesize fragments for bit-level primitives (moving,
//!   scanning, copying, comparing, erasing and replacing fixed-width fields).
//! - **Composers** chain fragments into complete programs, such as a parity
//!   check and an interval merge.
//!
//! Tables are validated once when built and are immutable afterwards. The
//! engine executes them under a step budget, and a table can also be emitted
//! as a Vim macro script that runs the same machine inside the editor.
//!
//! # Core Concepts
//!
//! - **Scope**: hands out state names that are unique across nested generators
//! - **TransitionTable**: a validated, deterministic program
//! - **Machine**: one run of a table over a tape
//!
//! # Example
//!
//! ```rust
//! use tape_machine::codec::Interval;
//! use tape_machine::core::MachineConfig;
//! use tape_machine::engine::DEFAULT_STEP_BUDGET;
//! use tape_machine::generators::FieldWidth;
//! use tape_machine::programs::IntervalMerge;
//!
//! let merge = IntervalMerge::new(MachineConfig::default(), FieldWidth::new(3)?)?;
//! let merged = merge.merge(
//!     &[Interval::new(1, 2), Interval::new(2, 3), Interval::new(5, 7)],
//!     DEFAULT_STEP_BUDGET,
//! )?;
//!
//! assert_eq!(merged, vec![Interval::new(1, 3), Interval::new(5, 7)]);
//! # Ok::<(), tape_machine::Error>(())
//! ```

pub mod checkpoint;
pub mod codec;
pub mod core;
pub mod engine;
mod error;
pub mod generators;
pub mod programs;
pub mod table;
pub mod vim;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export commonly used types
pub use crate::core::{Alphabet, Direction, MachineConfig, Scope, StateId, StateTransition, Symbol};
pub use crate::engine::{Machine, RunOutcome, Tape};
pub use crate::table::{TableBuilder, TransitionTable, Verdict};
