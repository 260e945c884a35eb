//! Rendering a table as a runnable Vim macro script.
//!
//! The script holds the tape, the current state and one record per
//! transition. Opening it in Vim and running `ggyy@"` executes the machine
//! with Vim's own motions. Tape cells are separated by spaces, so neither
//! symbols nor state names may contain whitespace: use
//! [`MachineConfig::vim`](crate::core::MachineConfig::vim), whose blank is
//! `X`. Records are found with a literal search, which also rules out `\`
//! and `/`.

mod template;

pub use template::TAPE_WRAP_POSITION;

use crate::core::StateTransition;
use crate::engine::Tape;
use crate::table::TransitionTable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name the script is conventionally written to.
pub const MACHINE_FILENAME: &str = "machine.vim";

#[derive(Debug, Error)]
pub enum VimError {
    #[error("symbol {symbol:?} cannot be addressed by Vim word motions or searches")]
    UnsearchableSymbol { symbol: char },

    #[error("state '{state}' contains whitespace, '\\' or '/'")]
    UnsearchableStateName { state: String },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VimOptions {
    /// Chain every step into the next; without it each step must be
    /// triggered by hand.
    pub auto_step: bool,
    /// Append the tape and state to the buffer before every step.
    pub log_steps: bool,
}

impl Default for VimOptions {
    fn default() -> Self {
        Self {
            auto_step: true,
            log_steps: false,
        }
    }
}

/// Render the script that runs `table` on `tape` from its first cell.
pub fn render(table: &TransitionTable, tape: &Tape, options: VimOptions) -> Result<String, VimError> {
    check(table)?;

    let transitions = table
        .iter()
        .map(|t| record(table, t))
        .collect::<Vec<_>>()
        .join("\n");
    let pointers = template::pointers();
    let script = template::script(&template::Sections {
        initial_state: table.state_name(table.initial()),
        tape: &wrap_tape(tape, table.alphabet().blank),
        pointers: &pointers,
        blank: table.alphabet().blank,
        logging: if options.auto_step && options.log_steps {
            template::LOG_TAPE_AND_STATE
        } else {
            ""
        },
        transitions: &transitions,
    });

    if options.auto_step {
        Ok(script)
    } else {
        Ok(script.replace(template::RUN_REGISTER, ""))
    }
}

/// Render the script and write it to `path`.
pub fn write(
    table: &TransitionTable,
    tape: &Tape,
    options: VimOptions,
    path: impl AsRef<Path>,
) -> Result<(), VimError> {
    let path = path.as_ref();
    let script = render(table, tape, options)?;
    fs::write(path, script).map_err(|source| VimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), transitions = table.len(), "machine written");
    Ok(())
}

fn unsearchable(c: char) -> bool {
    c.is_whitespace() || c == '\\' || c == '/'
}

fn check(table: &TransitionTable) -> Result<(), VimError> {
    for symbol in table.alphabet().symbols() {
        if unsearchable(symbol.as_char()) {
            return Err(VimError::UnsearchableSymbol {
                symbol: symbol.as_char(),
            });
        }
    }
    for transition in table.iter() {
        for state in [transition.from_state, transition.to_state] {
            let name = table.state_name(state);
            if name.chars().any(unsearchable) {
                return Err(VimError::UnsearchableStateName {
                    state: name.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn record(table: &TransitionTable, transition: &StateTransition) -> String {
    format!(
        "_{}-{}:`k\"_C{}{esc}`t\"_cw{}{esc}{}{}",
        table.state_name(transition.from_state),
        transition.from_symbol,
        table.state_name(transition.to_state),
        transition.to_symbol,
        template::move_head(transition.direction),
        template::NEXT_STATE,
        esc = template::ESCAPE,
    )
}

/// Pad to whole rows and lay the cells out space separated.
fn wrap_tape(tape: &Tape, blank: char) -> String {
    let mut cells: Vec<char> = tape.cells().iter().map(|s| s.as_char()).collect();
    let padding = TAPE_WRAP_POSITION - cells.len() % TAPE_WRAP_POSITION;
    cells.extend(std::iter::repeat(blank).take(padding));

    cells
        .chunks(TAPE_WRAP_POSITION)
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
