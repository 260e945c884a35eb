//! Crate-level error type.

use crate::checkpoint::CheckpointError;
use crate::codec::CodecError;
use crate::core::ConfigError;
use crate::engine::RunError;
use crate::table::TableError;
use crate::vim::VimError;
use thiserror::Error;

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error(transparent)]
    Vim(#[from] VimError),
}

impl Error {
    /// Whether retrying with a larger step budget could succeed.
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, Error::Run(RunError::StepBudgetExceeded { .. }))
    }
}
