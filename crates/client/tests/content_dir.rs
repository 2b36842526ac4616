use std::fs;

use magic_client::{OutputFormat, Session, script};
use magic_content::ContentFactory;
use magic_core::{ActorId, Coordinate, LedgerHolder, SpellLevel, SpellType};
use tempfile::TempDir;

const DATABASE: &str = r#"DatabaseFile(
    classes: [
        (id: 1, name: "Wizard"),
        (id: 2, name: "Priest", note: "<magicAptitude1:2,1.4>"),
    ],
    skills: [
        (id: 10, name: "Spark", skill_type: 1),
        (id: 32, name: "Heal", skill_type: 2),
    ],
)"#;

const PARTY: &str = r#"PartyFile(
    actors: [
        (id: 1, name: "Aria", class: 1, params: {"magic_attack": 20}, skills: [10]),
        (id: 2, name: "Bram", class: 2, params: {"magic_attack": 20}, skills: [32]),
        (id: 100, name: "Lich", kind: Enemy),
    ],
    members: [1, 2],
)"#;

fn content_dir(config: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(ContentFactory::DATABASE_FILE), DATABASE).expect("write database");
    fs::write(dir.path().join(ContentFactory::PARTY_FILE), PARTY).expect("write party");
    if let Some(config) = config {
        fs::write(dir.path().join(ContentFactory::CONFIG_FILE), config).expect("write config");
    }
    dir
}

fn lv1(t: u8) -> Coordinate {
    Coordinate::new(SpellType(t), SpellLevel(1))
}

/// Loading sets actors up from the formula and pins enemies to the ceiling.
#[test]
fn loaded_session_is_set_up() {
    let dir = content_dir(None);
    let session = Session::load(&ContentFactory::new(dir.path())).expect("load session");

    let aria = session.actor(ActorId(1)).expect("aria");
    assert_eq!(aria.ledger().maximum(lv1(0)), 7);
    // (20 * 0.28 + 1.6) * 1.4 = 10.08, capped at 9
    let bram = session.actor(ActorId(2)).expect("bram");
    assert_eq!(bram.ledger().maximum(lv1(1)), 9);
    assert_eq!(bram.ledger().maximum(lv1(0)), 0);

    let lich = session.actor(ActorId(100)).expect("lich");
    assert!(lich.ledger().iter().all(|(_, count)| count.current == 9));
}

/// A config file reshapes the formula before any ledger is filled.
#[test]
fn config_file_overrides_defaults() {
    let dir = content_dir(Some("max_count = 5\nminimum_count = 1\n"));
    let session = Session::load(&ContentFactory::new(dir.path())).expect("load session");

    assert_eq!(session.config().max_count, 5);
    let aria = session.actor(ActorId(1)).expect("aria");
    assert_eq!(aria.ledger().maximum(lv1(0)), 5);
}

/// A script drains a level, gets refused, and the recover line refills it.
#[test]
fn script_drains_and_recovers() {
    let dir = content_dir(None);
    let mut session = Session::load(&ContentFactory::new(dir.path())).expect("load session");
    let steps = script::parse(
        "cast 1 10 8\n\
         ledger 1\n\
         GR_MagicRecover All\n\
         ledger 1\n",
    )
    .expect("parse script");

    let reports = script::run(&mut session, &steps).expect("run script");
    assert_eq!(reports.len(), 4);

    let casts = &reports[0].json["casts"];
    assert_eq!(casts[6]["remaining"], 0);
    assert_eq!(casts[7]["paid"], false);
    assert!(reports[1].summary.contains("type 0: 0/7"));
    assert_eq!(reports[2].json["recovered"], serde_json::json!([1, 2]));
    assert!(reports[3].render(OutputFormat::Summary).contains("type 0: 7/7"));
}

/// Missing content files fail the load with the file named.
#[test]
fn missing_party_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(ContentFactory::DATABASE_FILE), DATABASE).expect("write database");

    let err = Session::load(&ContentFactory::new(dir.path()))
        .err()
        .expect("load should fail");
    assert!(format!("{err:#}").contains("party.ron"));
}
