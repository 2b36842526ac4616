//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ClassId, SkillId};

/// Errors that occur when accessing oracle data.
///
/// The tables are authored content; a missing oracle or a dangling reference
/// means the host wired things up wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ClassOracle is not available in the environment.
    #[error("ClassOracle not available")]
    ClassesNotAvailable,

    /// SkillOracle is not available in the environment.
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    /// Class record was not found by id.
    #[error("class {0} not found")]
    ClassNotFound(ClassId),

    /// Skill record was not found by id.
    #[error("skill {0} not found")]
    SkillNotFound(SkillId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ClassesNotAvailable | SkillsNotAvailable => ErrorSeverity::Fatal,
            ClassNotFound(_) | SkillNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ClassesNotAvailable => "ORACLE_CLASSES_NOT_AVAILABLE",
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
        }
    }
}
