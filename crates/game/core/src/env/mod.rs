//! Traits describing read-only host data.
//!
//! Oracles expose the class and skill tables. The [`Env`] aggregate bundles
//! them so the engine can access everything it needs without hard coupling to
//! concrete implementations. The party roster is mutable and travels
//! separately (see [`PartyRoster`]).
mod annotation;
mod classes;
mod error;
mod party;
mod skills;
mod snapshot;

pub use annotation::{APTITUDE_SLOTS, AptitudeAnnotations, AptitudeTag};
pub use classes::{ClassOracle, ClassRecord};
pub use error::OracleError;
pub use party::PartyRoster;
pub use skills::{SkillOracle, SkillRecord};
pub use snapshot::{ClassesSnapshot, SkillsSnapshot};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, C, S>
where
    C: ClassOracle + ?Sized,
    S: SkillOracle + ?Sized,
{
    classes: Option<&'a C>,
    skills: Option<&'a S>,
}

pub type MagicEnv<'a> = Env<'a, dyn ClassOracle + 'a, dyn SkillOracle + 'a>;

impl<C, S> Clone for Env<'_, C, S>
where
    C: ClassOracle + ?Sized,
    S: SkillOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, S> Copy for Env<'_, C, S>
where
    C: ClassOracle + ?Sized,
    S: SkillOracle + ?Sized,
{
}

impl<'a, C, S> Env<'a, C, S>
where
    C: ClassOracle + ?Sized,
    S: SkillOracle + ?Sized,
{
    pub fn new(classes: Option<&'a C>, skills: Option<&'a S>) -> Self {
        Self { classes, skills }
    }

    pub fn with_all(classes: &'a C, skills: &'a S) -> Self {
        Self::new(Some(classes), Some(skills))
    }

    pub fn empty() -> Self {
        Self {
            classes: None,
            skills: None,
        }
    }

    /// Returns the ClassOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClassesNotAvailable` if no class oracle was provided.
    pub fn classes(&self) -> Result<&'a C, OracleError> {
        self.classes.ok_or(OracleError::ClassesNotAvailable)
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a S, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Looks up a class record.
    ///
    /// # Errors
    ///
    /// Missing oracle or unknown id.
    pub fn class(&self, id: crate::state::ClassId) -> Result<&'a ClassRecord, OracleError> {
        self.classes()?
            .class(id)
            .ok_or(OracleError::ClassNotFound(id))
    }

    /// Looks up a skill record.
    ///
    /// # Errors
    ///
    /// Missing oracle or unknown id.
    pub fn skill(&self, id: crate::state::SkillId) -> Result<&'a SkillRecord, OracleError> {
        self.skills()?
            .skill(id)
            .ok_or(OracleError::SkillNotFound(id))
    }
}

impl<'a, C, S> Env<'a, C, S>
where
    C: ClassOracle + 'a,
    S: SkillOracle + 'a,
{
    /// Converts this environment into a trait-object based `MagicEnv`.
    pub fn into_magic_env(self) -> MagicEnv<'a> {
        let classes: Option<&'a dyn ClassOracle> = self.classes.map(|classes| classes as _);
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        Env::new(classes, skills)
    }
}
