//! Shared error classification.
//!
//! Each concern owns its error enum next to the code that raises it
//! (`LedgerError` in the ledger, `ConfigurationError` with the config, ...).
//! They all implement [`GameError`] so hosts can sort failures without
//! matching on every variant. Skills outside the managed ranges never produce
//! an error; they resolve to "unmanaged" and the host's own accounting applies.

/// How a caller should treat a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Pick something else and carry on (e.g. a spell level with uses left).
    Recoverable,
    /// Bad input such as an unknown actor id in a recover command.
    Validation,
    /// Ledger shape does not match the active configuration.
    Internal,
    /// Broken content: malformed aptitude annotation, missing oracle.
    Fatal,
}

impl ErrorSeverity {
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for bugs in code or content rather than in the request.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum of the crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `LEDGER_INSUFFICIENT_USES`.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
