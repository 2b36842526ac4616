//! Text and JSON renderings of ledgers, coordinates and menus.

use std::fmt::Write as _;

use magic_core::{
    CasterState, Coordinate, CoordinateResolver, LearnableSkillHolder, LedgerHolder, MagicConfig,
    Payment, SkillId, SpellType,
};
use serde_json::{Value, json};

use crate::config::OutputFormat;
use crate::session::{CastOutcome, MenuView};

/// A rendered result, printable in either output format.
pub struct Report {
    pub summary: String,
    pub json: Value,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => self.summary.clone(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.json).unwrap_or_else(|_| self.json.to_string())
            }
        }
    }
}

/// Skill-id ranges of every coordinate.
pub fn coordinates(config: &MagicConfig) -> Report {
    let resolver = CoordinateResolver::new(config);
    let mut summary = String::new();
    let mut families = Vec::new();

    for spell_type in resolver.spell_types() {
        let stype = config.skill_type_of_family(spell_type.0);
        let _ = writeln!(summary, "type {} ({stype})", spell_type.0);
        let mut levels = Vec::new();
        for level in resolver.levels() {
            let range = resolver.skill_range(Coordinate::new(spell_type, level));
            let _ = writeln!(summary, "  {level}: {}..={}", range.start(), range.end());
            levels.push(json!({
                "level": level.0,
                "first": range.start(),
                "last": range.end(),
            }));
        }
        families.push(json!({
            "spell_type": spell_type.0,
            "skill_type": stype.0,
            "levels": levels,
        }));
    }

    Report {
        summary,
        json: json!({ "families": families }),
    }
}

/// Positional coordinate of one skill id.
pub fn locate(config: &MagicConfig, skill: SkillId) -> Report {
    match CoordinateResolver::new(config).coordinate_by_position(skill) {
        Some(coordinate) => Report {
            summary: format!("{skill}: {coordinate}"),
            json: json!({
                "skill": skill.0,
                "spell_type": coordinate.spell_type.0,
                "level": coordinate.level.0,
            }),
        },
        None => Report {
            summary: format!("{skill}: outside the usage-count scheme"),
            json: json!({ "skill": skill.0, "spell_type": null, "level": null }),
        },
    }
}

/// Ledger table of one character, one line per family.
pub fn ledger(caster: &CasterState) -> Report {
    let ledger = caster.ledger();
    let (types, _) = ledger.shape();
    let mut summary = format!("{} ({}) Lv {}\n", caster.name, caster.id, caster.level);
    let mut rows = Vec::with_capacity(types);

    for t in 0..types {
        let row = ledger.row(SpellType(t as u8));
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        let _ = writeln!(summary, "  type {t}: {}", cells.join(" "));
        rows.push(
            row.iter()
                .map(|count| json!({ "current": count.current, "maximum": count.maximum }))
                .collect::<Vec<_>>(),
        );
    }

    Report {
        summary,
        json: json!({
            "id": caster.id.0,
            "name": caster.name,
            "level": caster.level,
            "skills": caster.learned_skills().iter().map(|id| id.0).collect::<Vec<_>>(),
            "ledger": rows,
        }),
    }
}

pub fn cast(caster: &CasterState, skill: SkillId, outcomes: &[CastOutcome]) -> Report {
    let lines: Vec<String> = outcomes
        .iter()
        .map(|outcome| match outcome {
            CastOutcome::Paid(Payment::Spent {
                coordinate,
                remaining,
            }) => format!("{skill}: paid at {coordinate}, {remaining} left"),
            CastOutcome::Paid(Payment::Unmanaged) => {
                format!("{skill}: cast (no usage count)")
            }
            CastOutcome::Refused => format!("{skill}: refused"),
        })
        .collect();
    let casts: Vec<Value> = outcomes
        .iter()
        .map(|outcome| match outcome {
            CastOutcome::Paid(payment) => json!({
                "paid": true,
                "remaining": payment.remaining(),
            }),
            CastOutcome::Refused => json!({ "paid": false }),
        })
        .collect();
    let after = ledger(caster);

    Report {
        summary: format!("{}\n{}", lines.join("\n"), after.summary),
        json: json!({
            "skill": skill.0,
            "casts": casts,
            "actor": after.json,
        }),
    }
}

pub fn recovered(actors: &[&CasterState]) -> Report {
    let mut summary = String::new();
    for caster in actors {
        let _ = writeln!(summary, "recovered {} ({})", caster.name, caster.id);
    }
    if actors.is_empty() {
        summary.push_str("nobody to recover\n");
    }
    Report {
        summary,
        json: json!({
            "recovered": actors.iter().map(|caster| caster.id.0).collect::<Vec<_>>(),
        }),
    }
}

pub fn menu(caster: &CasterState, view: &MenuView) -> Report {
    let mut summary = format!("{} ({})\n", caster.name, caster.id);
    let row = view.row.as_ref().map(|row| {
        let labels: Vec<String> = row.labels().collect();
        let _ = writeln!(summary, "  levels: {}", labels.join(" "));
        row.entries
            .iter()
            .map(|entry| {
                json!({
                    "level": entry.level.0,
                    "current": entry.count.current,
                    "maximum": entry.count.maximum,
                    "enabled": entry.enabled,
                })
            })
            .collect::<Vec<_>>()
    });
    let skills: Vec<String> = view.skills.iter().map(ToString::to_string).collect();
    let _ = writeln!(summary, "  skills: {}", skills.join(", "));

    Report {
        summary,
        json: json!({
            "actor": caster.id.0,
            "levels": row,
            "skills": view.skills.iter().map(|id| id.0).collect::<Vec<_>>(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magic_core::{ActorId, Env, MagicEngine, ParamId};

    #[test]
    fn coordinate_table_lists_default_ranges() {
        let report = coordinates(&MagicConfig::default());
        assert!(report.summary.contains("  Lv.1: 10..=12"));
        assert!(report.summary.contains("type 2 (stype#3)"));
        assert_eq!(report.json["families"][1]["levels"][0]["first"], 32);
        assert_eq!(report.json["families"][2]["levels"][6]["last"], 74);
    }

    #[test]
    fn locate_uses_id_position_only() {
        let config = MagicConfig::default();
        assert_eq!(locate(&config, SkillId(35)).summary, "skill#35: type 1 Lv.2");
        assert_eq!(locate(&config, SkillId(31)).json["level"], Value::Null);
    }

    #[test]
    fn ledger_renders_current_over_maximum() {
        let config = MagicConfig::default();
        let engine = MagicEngine::new(&config, Env::empty());
        let mut slime = CasterState::enemy(ActorId(7), "Slime", &config)
            .with_param(ParamId::MagicAttack, 10);
        engine.setup_enemy(&mut slime);

        let report = ledger(&slime);
        assert!(report.summary.starts_with("Slime (actor#7) Lv 1"));
        assert!(report.summary.contains("type 0: 9/9 9/9"));
        assert_eq!(report.json["ledger"][2][6]["maximum"], 9);
        assert!(report.render(OutputFormat::Json).contains("\"name\": \"Slime\""));
    }
}
