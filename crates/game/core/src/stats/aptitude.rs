//! Aptitude resolution.
//!
//! A character's aptitude for a spell family scales every maximum count of
//! that family. Two sources contribute:
//!
//! - the character's class record
//! - every skill the character knows (passive annotations)
//!
//! Each source multiplies the matching annotation slots together, starting
//! from 1.0. The effective aptitude is the larger of the two, so a sub-1.0
//! skill annotation never lowers a neutral class.

use crate::config::{ConfigurationError, MagicConfig};
use crate::env::{ClassRecord, MagicEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::spell::SpellType;
use crate::state::LearnableSkillHolder;

/// Multiplier used when no annotation matches.
pub const NEUTRAL_APTITUDE: f64 = 1.0;

/// Looks up and combines aptitude multipliers.
#[derive(Clone, Copy)]
pub struct AptitudeResolver<'a> {
    config: &'a MagicConfig,
    env: MagicEnv<'a>,
}

impl<'a> AptitudeResolver<'a> {
    pub fn new(config: &'a MagicConfig, env: MagicEnv<'a>) -> Self {
        Self { config, env }
    }

    /// Multiplier contributed by `class` for `spell_type`.
    pub fn class_aptitude(
        &self,
        class: &ClassRecord,
        spell_type: SpellType,
    ) -> Result<f64, ConfigurationError> {
        let skill_type = self.config.skill_type_of_family(spell_type.0);
        class.aptitudes.multiplier_for(skill_type)
    }

    /// Multiplier contributed by every skill `holder` knows, for `spell_type`.
    pub fn skill_aptitude<H>(&self, holder: &H, spell_type: SpellType) -> Result<f64, AptitudeError>
    where
        H: LearnableSkillHolder + ?Sized,
    {
        let skill_type = self.config.skill_type_of_family(spell_type.0);
        let mut aptitude = NEUTRAL_APTITUDE;
        for &id in holder.learned_skills() {
            let skill = self.env.skill(id)?;
            aptitude *= skill.aptitudes.multiplier_for(skill_type)?;
        }
        Ok(aptitude)
    }

    /// Effective aptitude: the larger of the class and skill multipliers.
    pub fn aptitude<H>(&self, holder: &H, spell_type: SpellType) -> Result<f64, AptitudeError>
    where
        H: LearnableSkillHolder + ?Sized,
    {
        let class = self.env.class(holder.class_id())?;
        let from_class = self.class_aptitude(class, spell_type)?;
        let from_skills = self.skill_aptitude(holder, spell_type)?;
        Ok(from_class.max(from_skills))
    }
}

/// Errors raised while resolving aptitude.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AptitudeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for AptitudeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        AptitudeAnnotations, ClassesSnapshot, Env, SkillRecord, SkillsSnapshot,
    };
    use crate::state::{ActorId, CasterState, ClassId, SkillId, SkillTypeId};

    fn tables() -> (ClassesSnapshot, SkillsSnapshot) {
        let classes = ClassesSnapshot::new([
            ClassRecord::new(ClassId(1), "Priest").with_aptitudes(
                AptitudeAnnotations::empty()
                    .with_slot(0, "1,1.4")
                    .with_slot(1, "2,1.2"),
            ),
            ClassRecord::new(ClassId(2), "Fighter"),
            ClassRecord::new(ClassId(3), "Broken")
                .with_aptitudes(AptitudeAnnotations::empty().with_slot(0, "1;1.4")),
        ]);
        let skills = SkillsSnapshot::new([
            SkillRecord::new(SkillId(10), "Spark", SkillTypeId(1)),
            SkillRecord::new(SkillId(2), "Arcane Focus", SkillTypeId(5))
                .with_aptitudes(AptitudeAnnotations::empty().with_slot(0, "1,1.2")),
            SkillRecord::new(SkillId(3), "Dull Mind", SkillTypeId(5))
                .with_aptitudes(AptitudeAnnotations::empty().with_slot(0, "1,0.5")),
        ]);
        (classes, skills)
    }

    fn caster(class: u32, skills: &[u32]) -> CasterState {
        CasterState::actor(ActorId(1), "Test", &MagicConfig::default())
            .with_class(ClassId(class))
            .with_skills(skills.iter().copied().map(SkillId))
    }

    #[test]
    fn class_beats_weaker_skill_source() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let env = Env::with_all(&classes, &skills).into_magic_env();
        let resolver = AptitudeResolver::new(&config, env);

        let priest = caster(1, &[10, 2]);
        assert_eq!(resolver.aptitude(&priest, SpellType(0)), Ok(1.4));
        assert_eq!(resolver.aptitude(&priest, SpellType(1)), Ok(1.2));
        assert_eq!(resolver.aptitude(&priest, SpellType(2)), Ok(1.0));
    }

    #[test]
    fn skill_source_beats_neutral_class() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let env = Env::with_all(&classes, &skills).into_magic_env();
        let resolver = AptitudeResolver::new(&config, env);

        assert_eq!(resolver.aptitude(&caster(2, &[2]), SpellType(0)), Ok(1.2));
        // a sub-neutral skill never drags a neutral class down
        assert_eq!(resolver.aptitude(&caster(2, &[3]), SpellType(0)), Ok(1.0));
        // skills compound across records: 1.2 * 0.5
        assert_eq!(
            resolver.skill_aptitude(&caster(2, &[2, 3]), SpellType(0)),
            Ok(0.6)
        );
    }

    #[test]
    fn malformed_class_annotation_is_a_configuration_error() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let env = Env::with_all(&classes, &skills).into_magic_env();
        let resolver = AptitudeResolver::new(&config, env);

        let err = resolver.aptitude(&caster(3, &[]), SpellType(0)).unwrap_err();
        assert!(matches!(err, AptitudeError::Configuration(_)));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn unknown_records_are_oracle_errors() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let env = Env::with_all(&classes, &skills).into_magic_env();
        let resolver = AptitudeResolver::new(&config, env);

        assert_eq!(
            resolver.aptitude(&caster(9, &[]), SpellType(0)),
            Err(AptitudeError::Oracle(OracleError::ClassNotFound(ClassId(9))))
        );
        assert_eq!(
            resolver.skill_aptitude(&caster(1, &[99]), SpellType(0)),
            Err(AptitudeError::Oracle(OracleError::SkillNotFound(SkillId(99))))
        );
    }
}
