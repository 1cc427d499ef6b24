// tests/identity_resolve.rs
//
// Sidecar lookup order against real files in a temp dir.
//
use std::fs;

use pkm_autofill::config::options::IdentityOptions;
use pkm_autofill::identity::{
    apply_identity, legacy_from_wide, ApplyOutcome, Gender, IdentityResolver, IdentitySource,
    LoadedSave, Mode, PkmRecord, Regions, Resolved, SaveTrainer, TrainerIdentity, TrainerRecord,
};
use tempfile::TempDir;

const WIDE_WARNING: &str = "Force converting Gen 7 TID/SID to TID/SID";

struct Save {
    game: u32,
    trainer: Option<SaveTrainer>,
}

impl LoadedSave for Save {
    fn game(&self) -> u32 {
        self.game
    }
    fn trainer(&self) -> Result<SaveTrainer, String> {
        self.trainer.clone().ok_or_else(|| "no trainer block".to_string())
    }
}

fn save(game: u32) -> Save {
    Save {
        game,
        trainer: Some(SaveTrainer {
            tid: 4242,
            sid: 2424,
            ot: "Misty".into(),
            gender: 1,
            regions: Regions::default(),
        }),
    }
}

fn dir_with(json: Option<&str>, txt: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(json) = json {
        fs::write(dir.path().join("trainerdata.json"), json).unwrap();
    }
    if let Some(txt) = txt {
        fs::write(dir.path().join("trainerdata.txt"), txt).unwrap();
    }
    dir
}

fn resolve(dir: &TempDir, save: &Save, origin: Option<u32>) -> (Resolved, Vec<String>) {
    let opts = IdentityOptions::with_dir(dir.path());
    let mut alerts = Vec::new();
    let r = IdentityResolver::new(&opts).resolve(save, origin, &mut alerts);
    (r, alerts)
}

fn entry(tid: &str, sid: &str, ot: &str) -> String {
    format!(
        r#"{{"TID":"{tid}","SID":"{sid}","OT":"{ot}","Gender":"F","Country":"Japan","SubRegion":"Tokyo","3DSRegion":"Japan"}}"#
    )
}

#[test]
fn nothing_on_disk_gives_defaults() {
    let dir = dir_with(None, None);
    let (r, alerts) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::Defaults);
    assert_eq!(r.identity, TrainerIdentity::default());
    assert!(alerts.is_empty());
}

#[test]
fn structured_entry_for_save_game() {
    let json = format!(r#"{{"mode":"save","30":{},"21":{}}}"#, entry("11111", "22222", "Ash"), entry("1", "2", "Gold"));
    let dir = dir_with(Some(&json), None);
    let (r, alerts) = resolve(&dir, &save(30), Some(21));
    assert_eq!(r.source, IdentitySource::Structured);
    assert_eq!((r.identity.tid, r.identity.sid, r.identity.name.as_str()), (11111, 22222, "Ash"));
    assert_eq!(r.identity.gender, Gender::Female);
    assert_eq!(r.identity.regions.country, "Japan");
    assert!(alerts.is_empty());
}

#[test]
fn game_mode_keys_on_origin_game() {
    let json = format!(r#"{{"mode":"game","30":{},"21":{}}}"#, entry("11111", "22222", "Ash"), entry("1", "2", "Gold"));
    let dir = dir_with(Some(&json), None);
    let (r, _) = resolve(&dir, &save(30), Some(21));
    assert_eq!(r.mode, Mode::Game);
    assert_eq!(r.game, 21);
    assert_eq!(r.identity.name, "Gold");
}

#[test]
fn unknown_mode_behaves_as_save() {
    let json = format!(r#"{{"mode":"sideways","30":{},"21":{}}}"#, entry("11111", "22222", "Ash"), entry("1", "2", "Gold"));
    let dir = dir_with(Some(&json), None);
    let (r, _) = resolve(&dir, &save(30), Some(21));
    assert_eq!(r.mode, Mode::Save);
    assert_eq!(r.identity.name, "Ash");
}

#[test]
fn missing_game_key_falls_back_to_line_file() {
    let json = format!(r#"{{"mode":"save","25":{}}}"#, entry("11111", "22222", "Ash"));
    let dir = dir_with(Some(&json), Some("TID: 33333\nSID: 44444\nOT: Brock\nGender: M\n"));
    let (r, alerts) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::LineFile);
    assert_eq!((r.identity.tid, r.identity.sid, r.identity.name.as_str()), (33333, 44444, "Brock"));
    assert!(alerts.is_empty());
}

#[test]
fn malformed_entry_alerts_and_falls_back() {
    let json = r#"{"30":{"TID":"11111","SID":"22222"}}"#;
    let dir = dir_with(Some(json), Some("OT: Brock\n"));
    let (r, alerts) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::LineFile);
    assert_eq!(r.identity.name, "Brock");
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("missing OT"));
}

#[test]
fn bad_entry_value_alerts_and_falls_back() {
    let json = format!(r#"{{"30":{}}}"#, entry("abc", "22222", "Ash"));
    let dir = dir_with(Some(&json), None);
    let (r, alerts) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::Defaults);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("malformed"));
}

#[test]
fn empty_json_alerts() {
    let dir = dir_with(Some("   \n"), None);
    let (r, alerts) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::Defaults);
    assert_eq!(alerts, vec!["Empty trainerdata.json file".to_string()]);
}

#[test]
fn unparsable_json_alerts() {
    let dir = dir_with(Some("{\"mode\": "), Some("OT: Brock\n"));
    let (r, alerts) = resolve(&dir, &save(30), None);
    assert_eq!(r.identity.name, "Brock");
    assert_eq!(alerts.len(), 1);
}

#[test]
fn structured_auto_uses_save() {
    let json = format!(r#"{{"mode":"auto","30":{}}}"#, entry("11111", "22222", "Ash"));
    let dir = dir_with(Some(&json), None);
    let (r, _) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::Save);
    assert_eq!(r.mode, Mode::Auto);
    assert_eq!((r.identity.tid, r.identity.sid, r.identity.name.as_str()), (4242, 2424, "Misty"));
    assert_eq!(r.identity.gender, Gender::Female);
}

#[test]
fn line_file_auto_uses_save() {
    let dir = dir_with(None, Some("auto\nTID: 33333\nOT: Brock\n"));
    let (r, _) = resolve(&dir, &save(30), None);
    assert_eq!(r.source, IdentitySource::Save);
    assert_eq!(r.identity.name, "Misty");
}

#[test]
fn auto_with_unreadable_save_falls_back_silently() {
    let dir = dir_with(None, Some("auto\nTID: 33333\nSID: 1\nOT: Brock\n"));
    let broken = Save { game: 30, trainer: None };
    let (r, alerts) = resolve(&dir, &broken, None);
    assert_eq!(r.source, IdentitySource::LineFile);
    assert_eq!((r.identity.tid, r.identity.name.as_str()), (33333, "Brock"));
    assert!(alerts.is_empty());
}

#[test]
fn wide_ids_convert_quietly_in_gen7() {
    let dir = dir_with(None, Some("TID: 123456\nSID: 1234\nOT: Lillie\n"));
    let (r, alerts) = resolve(&dir, &save(30), None);
    let (tid, sid) = legacy_from_wide(123456, 1234);
    assert_eq!((r.identity.tid, r.identity.sid), (tid, sid));
    assert!(alerts.is_empty());
}

#[test]
fn wide_ids_warn_outside_gen7() {
    let dir = dir_with(None, Some("TID: 123456\nSID: 1234\nOT: Lillie\n"));
    let (r, alerts) = resolve(&dir, &save(26), None);
    let (tid, sid) = legacy_from_wide(123456, 1234);
    assert_eq!((r.identity.tid, r.identity.sid), (tid, sid));
    assert_eq!(alerts, vec![WIDE_WARNING.to_string()]);
}

#[test]
fn wide_ids_in_json_warn_too() {
    let json = format!(r#"{{"26":{}}}"#, entry("123456", "1234", "Lillie"));
    let dir = dir_with(Some(&json), None);
    let (r, alerts) = resolve(&dir, &save(26), None);
    assert_eq!(r.source, IdentitySource::Structured);
    assert_eq!(alerts, vec![WIDE_WARNING.to_string()]);
}

#[test]
fn bad_line_values_keep_defaults() {
    let dir = dir_with(None, Some("TID: lots\nSID: 5\nOT:   \nGender: X\n"));
    let (r, alerts) = resolve(&dir, &save(30), None);
    let d = TrainerIdentity::default();
    assert_eq!((r.identity.tid, r.identity.sid), (d.tid, d.sid));
    assert_eq!(r.identity.name, d.name);
    assert_eq!(r.identity.gender, Gender::Male);
    assert!(alerts.is_empty());
}

#[test]
fn resolved_identity_replaces_placeholder_and_keeps_shiny() {
    let dir = dir_with(None, Some("TID: 11111\nSID: 22222\nOT: Ash\nGender: F\n"));
    let (r, _) = resolve(&dir, &save(30), None);

    let mut rec = PkmRecord { tid: 12345, sid: 999, ot_name: "PKHeX".into(), pid: 0x0BAD_F00D, ..Default::default() };
    rec.set_shiny(true);
    assert_eq!(apply_identity(&mut rec, &r.identity, true), ApplyOutcome::ReplacedPlaceholder);
    assert_eq!((rec.tid, rec.sid, rec.ot_name.as_str()), (11111, 22222, "Ash"));
    assert_eq!(rec.ot_gender, Gender::Female);
    assert!(rec.is_shiny());
    assert_eq!(rec.pid & 0xFFFF, 0xF00D);
}

#[test]
fn auto_mode_gender_only_promoted_to_female_by_save() {
    let male_save = Save {
        game: 30,
        trainer: Some(SaveTrainer { gender: 0, ..save(30).trainer.unwrap() }),
    };

    let dir = dir_with(None, Some("auto\nGender: F\n"));
    let (r, _) = resolve(&dir, &male_save, None);
    assert_eq!(r.source, IdentitySource::Save);
    assert_eq!(r.identity.gender, Gender::Female);

    let dir = dir_with(None, Some("auto\nOT: Brock\n"));
    let (r, _) = resolve(&dir, &male_save, None);
    assert_eq!(r.identity.gender, Gender::Male);

    let (r, _) = resolve(&dir, &save(30), None);
    assert_eq!(r.identity.gender, Gender::Female);
}
