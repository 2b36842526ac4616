//! Classification of command failures.

use magic_core::{
    AptitudeError, ConfigurationError, ErrorSeverity, GameError, LedgerError, OracleError,
    RecomputeError, RecoverError,
};

/// Code and severity of the first rules-layer error in the chain, if any.
///
/// Loader and I/O failures carry no code and yield `None`.
pub fn classify(err: &anyhow::Error) -> Option<(&'static str, ErrorSeverity)> {
    err.chain().find_map(|cause| {
        let game: &dyn GameError = if let Some(e) = cause.downcast_ref::<RecoverError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<LedgerError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<RecomputeError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<AptitudeError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<ConfigurationError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<OracleError>() {
            e
        } else {
            return None;
        };
        Some((game.error_code(), game.severity()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use magic_core::{ActorId, Coordinate, SpellLevel, SpellType};

    #[test]
    fn finds_rules_errors_behind_context() {
        let err = Err::<(), _>(RecoverError::ActorNotFound(ActorId(5)))
            .context("step 1")
            .unwrap_err();
        assert_eq!(
            classify(&err),
            Some(("RECOVER_ACTOR_NOT_FOUND", ErrorSeverity::Recoverable))
        );

        let coordinate = Coordinate::new(SpellType(0), SpellLevel(1));
        let err = anyhow::Error::from(LedgerError::InsufficientUses(coordinate));
        assert_eq!(
            classify(&err),
            Some(("LEDGER_INSUFFICIENT_USES", ErrorSeverity::Recoverable))
        );
    }

    #[test]
    fn plain_errors_are_unclassified() {
        assert_eq!(classify(&anyhow::anyhow!("Failed to read file")), None);
    }
}
