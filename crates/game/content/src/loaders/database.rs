//! Class and skill database loader.
//!
//! Records keep their editor note verbatim; aptitude slots are extracted from
//! it while building the snapshots.
//!
//! ```ron
//! DatabaseFile(
//!     classes: [
//!         (id: 2, name: "Priest", note: "<magicAptitude1:1,1.4><magicAptitude2:2,1.2>"),
//!     ],
//!     skills: [
//!         (id: 10, name: "Spark", skill_type: 1),
//!     ],
//! )
//! ```

use std::path::Path;

use magic_core::{
    ClassId, ClassRecord, ClassesSnapshot, SkillId, SkillRecord, SkillTypeId, SkillsSnapshot,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::notes::NoteMeta;

/// One class row as written in the database file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: ClassId,
    pub name: String,
    #[serde(default)]
    pub note: String,
}

/// One skill row as written in the database file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: SkillId,
    pub name: String,
    pub skill_type: SkillTypeId,
    #[serde(default)]
    pub note: String,
}

/// Database structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseFile {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

/// Oracle snapshots built from a database file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    pub classes: ClassesSnapshot,
    pub skills: SkillsSnapshot,
}

impl Database {
    pub fn from_file(file: DatabaseFile) -> LoadResult<Self> {
        let mut database = Self::default();
        for entry in file.classes {
            let aptitudes = NoteMeta::parse(&entry.note).aptitudes();
            let record = ClassRecord::new(entry.id, entry.name).with_aptitudes(aptitudes);
            warn_malformed(&record.name, &record.aptitudes);
            if database.classes.insert(record).is_some() {
                anyhow::bail!("duplicate class id {}", entry.id);
            }
        }
        for entry in file.skills {
            let aptitudes = NoteMeta::parse(&entry.note).aptitudes();
            let record =
                SkillRecord::new(entry.id, entry.name, entry.skill_type).with_aptitudes(aptitudes);
            warn_malformed(&record.name, &record.aptitudes);
            if database.skills.insert(record).is_some() {
                anyhow::bail!("duplicate skill id {}", entry.id);
            }
        }
        Ok(database)
    }
}

/// Malformed tags stay in place and fail when used; flag them early in the log.
fn warn_malformed(name: &str, aptitudes: &magic_core::AptitudeAnnotations) {
    for error in aptitudes.tags().filter_map(Result::err) {
        tracing::warn!(record = name, %error, "malformed aptitude tag");
    }
}

/// Loader for the class and skill database from RON files.
pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load(path: &Path) -> LoadResult<Database> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid database {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Database> {
        let file: DatabaseFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse database RON: {}", e))?;
        let database = Database::from_file(file)?;
        tracing::info!(
            classes = database.classes.len(),
            skills = database.skills.len(),
            "loaded database"
        );
        Ok(database)
    }
}
