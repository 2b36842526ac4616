//! Error types surfaced by the engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, LedgerError};
use crate::stats::AptitudeError;

/// Errors raised while recomputing a character's maximums.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecomputeError {
    #[error(transparent)]
    Aptitude(#[from] AptitudeError),

    #[error("ledger rejected recomputed maximum: {0}")]
    Ledger(#[from] LedgerError),
}

impl GameError for RecomputeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Aptitude(err) => err.severity(),
            Self::Ledger(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Aptitude(err) => err.error_code(),
            Self::Ledger(err) => err.error_code(),
        }
    }
}

/// Errors raised by the recover command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecoverError {
    #[error("{0} is not a known actor")]
    ActorNotFound(ActorId),

    #[error("recover command needs an actor id or `All`")]
    MissingTarget,

    #[error("`{0}` is neither an actor id nor `All`")]
    InvalidTarget(String),
}

impl GameError for RecoverError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Recoverable,
            Self::MissingTarget | Self::InvalidTarget(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "RECOVER_ACTOR_NOT_FOUND",
            Self::MissingTarget => "RECOVER_MISSING_TARGET",
            Self::InvalidTarget(_) => "RECOVER_INVALID_TARGET",
        }
    }
}
