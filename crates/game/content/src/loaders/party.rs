//! Actor roster loader.
//!
//! ```ron
//! PartyFile(
//!     actors: [
//!         (id: 1, name: "Aria", class: 1, level: 5, params: {"magic_attack": 24}, skills: [10, 13]),
//!         (id: 9, name: "Slime", kind: Enemy),
//!     ],
//!     members: [1],
//! )
//! ```
//!
//! Parameter keys are [`ParamId`] names in snake case. Ledgers start empty;
//! run the engine's setup on each actor after loading.

use std::collections::BTreeMap;
use std::path::Path;

use magic_core::{ActorId, CasterKind, CasterState, ClassId, MagicConfig, ParamId, Party, SkillId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

fn default_level() -> u32 {
    1
}

/// One actor as written in the roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorEntry {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub kind: CasterKind,
    #[serde(default)]
    pub class: ClassId,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub params: BTreeMap<String, i32>,
    #[serde(default)]
    pub skills: Vec<SkillId>,
}

impl ActorEntry {
    pub fn to_caster(&self, config: &MagicConfig) -> LoadResult<CasterState> {
        let mut caster = match self.kind {
            CasterKind::Actor => CasterState::actor(self.id, self.name.as_str(), config),
            CasterKind::Enemy => CasterState::enemy(self.id, self.name.as_str(), config),
        }
        .with_class(self.class)
        .with_level(self.level)
        .with_skills(self.skills.iter().copied());

        for (key, &value) in &self.params {
            let param: ParamId = key
                .parse()
                .map_err(|_| anyhow::anyhow!("{}: unknown parameter '{}'", self.id, key))?;
            caster.set_param(param, value);
        }
        Ok(caster)
    }
}

/// Roster structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartyFile {
    pub actors: Vec<ActorEntry>,
    /// Active party, in order.
    #[serde(default)]
    pub members: Vec<ActorId>,
}

/// Loader for actor rosters from RON files.
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path, config: &MagicConfig) -> LoadResult<Party> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Invalid party {}: {}", path.display(), e))
    }

    pub fn parse(content: &str, config: &MagicConfig) -> LoadResult<Party> {
        let file: PartyFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;

        let mut party = Party::new();
        for entry in &file.actors {
            if party.insert_actor(entry.to_caster(config)?).is_some() {
                anyhow::bail!("duplicate actor id {}", entry.id);
            }
        }
        for &id in &file.members {
            if party.actor(id).is_none() {
                anyhow::bail!("party member {} is not in the roster", id);
            }
            if !party.add_member(id) {
                anyhow::bail!("{} is listed twice in the party", id);
            }
        }
        tracing::info!(
            actors = file.actors.len(),
            members = party.members().len(),
            "loaded party"
        );
        Ok(party)
    }
}
