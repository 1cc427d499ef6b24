// src/identity/sidecar.rs
// trainerdata.json and trainerdata.txt readers.
//
// trainerdata.json:
//   { "mode": "save", "30": { "TID": "123456", "SID": "1234", "OT": "Ash", ... } }
// trainerdata.txt:
//   auto            <- optional first line
//   TID: 12345
//   OT: Ash
//   ...

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::config::consts::*;

pub const KEY_TID: &str = "TID";
pub const KEY_SID: &str = "SID";
pub const KEY_OT: &str = "OT";
pub const KEY_GENDER: &str = "Gender";
pub const KEY_COUNTRY: &str = "Country";
pub const KEY_SUBREGION: &str = "SubRegion";
pub const KEY_CONSOLE_REGION: &str = "3DSRegion";

#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed trainer sidecar: {0}")]
    MalformedSidecar(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keyed by the loaded save's game.
    #[default]
    Save,
    /// Keyed by the record's origin game.
    Game,
    /// Read from the loaded save, sidecar values as fallback.
    Auto,
}

impl Mode {
    /// Case-insensitive; anything unrecognised is `Save`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "game" => Mode::Game,
            "auto" => Mode::Auto,
            _ => Mode::Save,
        }
    }
}

/// Trainer fields as text, before any validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTrainer {
    pub tid: String,
    pub sid: String,
    pub ot: String,
    pub gender: String,
    pub country: String,
    pub subregion: String,
    pub console_region: String,
}

impl Default for RawTrainer {
    fn default() -> Self {
        Self {
            tid: DEFAULT_TID.to_string(),
            sid: DEFAULT_SID.to_string(),
            ot: s!(DEFAULT_OT),
            gender: s!("M"),
            country: s!(DEFAULT_COUNTRY),
            subregion: s!(DEFAULT_SUBREGION),
            console_region: s!(DEFAULT_CONSOLE_REGION),
        }
    }
}

impl RawTrainer {
    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            KEY_TID => Some(&mut self.tid),
            KEY_SID => Some(&mut self.sid),
            KEY_OT => Some(&mut self.ot),
            KEY_GENDER => Some(&mut self.gender),
            KEY_COUNTRY => Some(&mut self.country),
            KEY_SUBREGION => Some(&mut self.subregion),
            KEY_CONSOLE_REGION => Some(&mut self.console_region),
            _ => None,
        }
    }
}

/// `Ok(None)` when the file does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>, SidecarError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SidecarError::Io { path: path.to_path_buf(), source }),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSidecar {
    pub force_auto: bool,
    pub fields: RawTrainer,
}

/// Missing keys keep their defaults; unknown keys and lines without `:` are ignored.
pub fn parse_line_sidecar(text: &str) -> LineSidecar {
    let text = text.trim_start_matches('\u{feff}');
    let force_auto = text.lines().next().is_some_and(|l| l.trim() == "auto");
    let mut fields = RawTrainer::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line == "auto" {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            logd!("trainerdata.txt: ignoring {line:?}");
            continue;
        };
        match fields.field_mut(key.trim()) {
            Some(slot) => *slot = value.trim().to_string(),
            None => logd!("trainerdata.txt: unknown key {:?}", key.trim()),
        }
    }
    LineSidecar { force_auto, fields }
}

#[derive(Clone, Debug)]
pub struct StructuredSidecar {
    doc: Value,
}

impl StructuredSidecar {
    pub fn parse(text: &str) -> Result<Self, SidecarError> {
        let doc: Value = serde_json::from_str(text.trim_start_matches('\u{feff}'))
            .map_err(|e| SidecarError::MalformedSidecar(format!("trainerdata.json: {e}")))?;
        if !doc.is_object() {
            return Err(SidecarError::MalformedSidecar(s!("trainerdata.json: top level is not an object")));
        }
        Ok(Self { doc })
    }

    /// Top-level `"mode"`; absent or non-string means `Save`.
    pub fn mode(&self) -> Mode {
        self.doc
            .get("mode")
            .and_then(Value::as_str)
            .map(Mode::parse)
            .unwrap_or_default()
    }

    /// The entry for `game`, or `None` when that game has no entry.
    /// An entry missing any of the seven keys is malformed.
    pub fn entry(&self, game: u32) -> Option<Result<RawTrainer, SidecarError>> {
        let entry = self.doc.get(game.to_string())?;
        Some(read_entry(entry, game))
    }
}

fn read_entry(entry: &Value, game: u32) -> Result<RawTrainer, SidecarError> {
    let Some(obj) = entry.as_object() else {
        return Err(SidecarError::MalformedSidecar(format!("game {game}: entry is not an object")));
    };
    let mut raw = RawTrainer::default();
    for key in [KEY_TID, KEY_SID, KEY_OT, KEY_GENDER, KEY_COUNTRY, KEY_SUBREGION, KEY_CONSOLE_REGION] {
        let value = match obj.get(key) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => {
                return Err(SidecarError::MalformedSidecar(format!("game {game}: {key} is not a string or number")));
            }
            None => return Err(SidecarError::MalformedSidecar(format!("game {game}: missing {key}"))),
        };
        if let Some(slot) = raw.field_mut(key) {
            *slot = value;
        }
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_normalises() {
        assert_eq!(Mode::parse("weird"), Mode::Save);
        assert_eq!(Mode::parse("GAME"), Mode::Game);
        assert_eq!(Mode::parse(" auto "), Mode::Auto);
        assert_eq!(Mode::parse(""), Mode::Save);
    }

    #[test]
    fn line_file_keys_and_defaults() {
        let side = parse_line_sidecar("TID: 11111\nOT: Ash\n\nGender: F\nNoise line\nFoo: bar\n3DSRegion: Europe\n");
        assert!(!side.force_auto);
        assert_eq!(side.fields.tid, "11111");
        assert_eq!(side.fields.sid, DEFAULT_SID.to_string());
        assert_eq!(side.fields.ot, "Ash");
        assert_eq!(side.fields.gender, "F");
        assert_eq!(side.fields.console_region, "Europe");
        assert_eq!(side.fields.country, DEFAULT_COUNTRY);
    }

    #[test]
    fn line_file_auto_first_line() {
        assert!(parse_line_sidecar("auto\r\nTID: 1\r\n").force_auto);
        assert!(!parse_line_sidecar("TID: 1\nauto\n").force_auto);
    }

    #[test]
    fn line_value_keeps_colons() {
        let side = parse_line_sidecar("OT: A:B\n");
        assert_eq!(side.fields.ot, "A:B");
    }

    #[test]
    fn structured_mode_and_entry() {
        let s = StructuredSidecar::parse(r#"{"mode":"Weird","30":{"TID":"123456","SID":1234,"OT":"Ash","Gender":"M","Country":"Japan","SubRegion":"Tokyo","3DSRegion":"Japan"}}"#).unwrap();
        assert_eq!(s.mode(), Mode::Save);
        let raw = s.entry(30).unwrap().unwrap();
        assert_eq!(raw.tid, "123456");
        assert_eq!(raw.sid, "1234");
        assert_eq!(raw.country, "Japan");
        assert!(s.entry(31).is_none());
    }

    #[test]
    fn structured_missing_key_is_malformed() {
        let s = StructuredSidecar::parse(r#"{"30":{"TID":"1","SID":"2"}}"#).unwrap();
        assert!(matches!(s.entry(30), Some(Err(SidecarError::MalformedSidecar(_)))));
    }

    #[test]
    fn structured_rejects_garbage() {
        assert!(StructuredSidecar::parse("{not json").is_err());
        assert!(StructuredSidecar::parse("[1,2]").is_err());
    }
}
