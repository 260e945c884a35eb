//! Text of the generated Vim script.
//!
//! The script is a self-modifying buffer: marks point at the tape cell under
//! the head (`t`), the current state (`k`) and the transition records (`s`).
//! Each step yanks the current `state-symbol` key, searches for its record
//! and executes the record as a macro. The search pastes the key with
//! Ctrl-R under `\V`, so only a backslash or the `/` delimiter in a name
//! would be read as search syntax.

use crate::core::Direction;

/// Cells per tape row.
pub const TAPE_WRAP_POSITION: usize = 40;

/// Continue with the next transition.
pub(crate) const NEXT_STATE: &str = "`ny$@\"";

/// Execute the yanked register.
pub(crate) const RUN_REGISTER: &str = "@\"";

/// Append the tape and state to the end of the buffer.
pub(crate) const LOG_TAPE_AND_STATE: &str = "`ly$@\"";

/// Leave insert mode.
pub(crate) const ESCAPE: char = '\x1b';

pub(crate) fn move_head(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "`tWmt",
        Direction::Backward => "`tBmt",
        Direction::Stay => "",
    }
}

/// Jump to the `_{name}:` section and leave mark `name` on the line found
/// after `motion`.
fn pointer(name: char, motion: &str) -> String {
    format!("`h/_{name}:\rn{motion}m{name}")
}

pub(crate) fn pointers() -> String {
    [
        pointer('t', "j"),
        pointer('l', "j"),
        pointer('k', "j"),
        pointer('o', "j"),
        pointer('p', "j"),
        pointer('s', ""),
        pointer('n', "j"),
        pointer('e', "k"),
    ]
    .concat()
}

pub(crate) struct Sections<'a> {
    pub initial_state: &'a str,
    pub tape: &'a str,
    pub pointers: &'a str,
    pub blank: char,
    pub logging: &'a str,
    pub transitions: &'a str,
}

pub(crate) fn script(sections: &Sections<'_>) -> String {
    format!(
        "0/_v1\rnf-ly$@\"

### launch with ggyy@\" ###

# Init pointers
_v1-gg0mh{pointers}`ny$@\"

_o:  # Output


_k:  # Current state
{initial_state}

_t:  # Current tape
{tape}
notvalid\\|--addlinetotape
_e:  # End of tape. Pointer is 1 line above this

_n:  # Next state transition. Usage: `ny$@\"
{logging}`t\"tyiW`ky$`s/\\V_\x12\"-\x12t\\|---\rf:ly$@\"

_p:  # Print state. Usage: `py$@\"
`ky$`op

_l:  # Log the tape and state Usage: `ly$@\"
`tyipGo\x1bpdd`kyyGp

_s:  # State transitions
{transitions}
# End State transitions
# Add an extra line to the end of the tape
_--addlinetotape: `eO\x1b{width}i{blank} \x1b0mt`ny$@\"

# Print state when unknown transition
_---: `py$@\"

# vim: set whichwrap+=b,s
",
        pointers = sections.pointers,
        initial_state = sections.initial_state,
        tape = sections.tape,
        logging = sections.logging,
        transitions = sections.transitions,
        width = TAPE_WRAP_POSITION,
        blank = sections.blank,
    )
}
