//! Core value types shared by every other module.
//!
//! - Symbols, the alphabet and head directions
//! - The immutable machine configuration
//! - State identities and hierarchical naming scopes
//! - The transition rule itself
//!
//! Nothing in this module executes a machine; it only describes one.

mod config;
mod state;
mod symbol;
mod transition;

pub use config::{ConfigError, MachineConfig};
pub use state::{Scope, StateId, StateNames, PATH_SEPARATOR};
pub use symbol::{Alphabet, Direction, Symbol};
pub use transition::{pass_over_data, StateTransition};
