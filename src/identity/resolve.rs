// src/identity/resolve.rs
// trainerdata.json → trainerdata.txt → built-in defaults, with auto mode on top.

use crate::config::consts::WIDE_ID_GAMES;
use crate::config::options::IdentityOptions;
use crate::host::AlertSink;

use super::sidecar::{parse_line_sidecar, read_optional, Mode, RawTrainer, SidecarError, StructuredSidecar};
use super::trainer::{parse_id_pair, Gender, Regions, TrainerIdentity};

/// Trainer fields of the save currently open in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveTrainer {
    pub tid: u16,
    pub sid: u16,
    pub ot: String,
    pub gender: u8,
    pub regions: Regions,
}

/// The editor's loaded save, as far as identity resolution cares.
pub trait LoadedSave {
    /// Game id of the save (e.g. 30 for Sun).
    fn game(&self) -> u32;

    /// May fail when the save has no usable trainer block.
    fn trainer(&self) -> Result<SaveTrainer, String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentitySource {
    Structured,
    LineFile,
    Defaults,
    Save,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub identity: TrainerIdentity,
    pub source: IdentitySource,
    pub mode: Mode,
    pub game: u32,
}

pub struct IdentityResolver<'a> {
    opts: &'a IdentityOptions,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(opts: &'a IdentityOptions) -> Self {
        Self { opts }
    }

    /// Resolve the identity to stamp on a record.
    ///
    /// `origin_game` is the record's own game; only `game` mode uses it.
    /// Problems with the sidecars are reported through `alerts` and never
    /// fail the call: the next source in line is used instead.
    pub fn resolve(
        &self,
        save: &dyn LoadedSave,
        origin_game: Option<u32>,
        alerts: &mut dyn AlertSink,
    ) -> Resolved {
        let structured = self.load_structured(alerts);
        let mode = structured.as_ref().map(StructuredSidecar::mode).unwrap_or_default();
        let game = match mode {
            Mode::Game => origin_game.unwrap_or_else(|| save.game()),
            Mode::Save | Mode::Auto => save.game(),
        };
        logd!("identity: mode={mode:?} game={game}");

        if let Some(doc) = structured.as_ref().filter(|_| mode != Mode::Auto) {
            match doc.entry(game) {
                Some(Ok(raw)) => match strict_identity(&raw, game, alerts) {
                    Ok(identity) => {
                        logf!("identity: trainerdata.json entry for game {game}");
                        return Resolved { identity, source: IdentitySource::Structured, mode, game };
                    }
                    Err(e) => alert!(alerts, "{e}. Falling back to trainerdata.txt."),
                },
                Some(Err(e)) => alert!(alerts, "{e}. Falling back to trainerdata.txt."),
                None => logd!("identity: no trainerdata.json entry for game {game}"),
            }
        }

        let (raw, line_auto, source) = match read_optional(&self.opts.line_path()) {
            Ok(Some(text)) => {
                let side = parse_line_sidecar(&text);
                (side.fields, side.force_auto, IdentitySource::LineFile)
            }
            Ok(None) => (RawTrainer::default(), false, IdentitySource::Defaults),
            Err(e) => {
                alert!(alerts, "{e}");
                (RawTrainer::default(), false, IdentitySource::Defaults)
            }
        };

        if mode == Mode::Auto || line_auto {
            match save.trainer() {
                Ok(t) => {
                    logf!("identity: taken from loaded save");
                    let identity = TrainerIdentity {
                        tid: t.tid,
                        sid: t.sid,
                        name: t.ot,
                        gender: auto_gender(t.gender, &raw),
                        regions: t.regions,
                    };
                    return Resolved { identity, source: IdentitySource::Save, mode: Mode::Auto, game };
                }
                Err(e) => logd!("identity: auto mode fell back, save unreadable: {e}"),
            }
        }

        let identity = lenient_identity(&raw, game, alerts);
        Resolved { identity, source, mode, game }
    }

    /// `None` when the file is absent, empty, unreadable or not valid JSON.
    fn load_structured(&self, alerts: &mut dyn AlertSink) -> Option<StructuredSidecar> {
        let text = match read_optional(&self.opts.structured_path()) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                alert!(alerts, "{e}");
                return None;
            }
        };
        if text.trim().is_empty() {
            alert!(alerts, "Empty trainerdata.json file");
            return None;
        }
        match StructuredSidecar::parse(&text) {
            Ok(doc) => Some(doc),
            Err(e) => {
                alert!(alerts, "{e}. Falling back to trainerdata.txt.");
                None
            }
        }
    }
}

fn warn_if_wide(wide: bool, game: u32, alerts: &mut dyn AlertSink) {
    if wide && !WIDE_ID_GAMES.contains(&game) {
        alert!(alerts, "Force converting Gen 7 TID/SID to TID/SID");
    }
}

/// trainerdata.json entries: any bad field rejects the whole entry.
fn strict_identity(raw: &RawTrainer, game: u32, alerts: &mut dyn AlertSink) -> Result<TrainerIdentity, SidecarError> {
    let malformed = |what: String| SidecarError::MalformedSidecar(format!("game {game}: {what}"));

    let (tid, sid, wide) = parse_id_pair(&raw.tid, &raw.sid).map_err(|e| malformed(format!("TID/SID {e}")))?;
    let gender = Gender::parse(&raw.gender).ok_or_else(|| malformed(format!("unknown Gender {:?}", raw.gender)))?;
    if raw.ot.trim().is_empty() {
        return Err(malformed(s!("empty OT")));
    }
    warn_if_wide(wide, game, alerts);
    Ok(TrainerIdentity {
        tid,
        sid,
        name: raw.ot.trim().to_string(),
        gender,
        regions: regions_of(raw),
    })
}

/// trainerdata.txt and defaults: a bad field keeps the built-in default.
fn lenient_identity(raw: &RawTrainer, game: u32, alerts: &mut dyn AlertSink) -> TrainerIdentity {
    let default = TrainerIdentity::default();
    let (tid, sid) = match parse_id_pair(&raw.tid, &raw.sid) {
        Ok((tid, sid, wide)) => {
            warn_if_wide(wide, game, alerts);
            (tid, sid)
        }
        Err(e) => {
            logw!("trainerdata.txt: TID/SID {e}, using defaults");
            (default.tid, default.sid)
        }
    };
    let gender = Gender::parse(&raw.gender).unwrap_or_else(|| {
        logw!("trainerdata.txt: unknown Gender {:?}, using M", raw.gender);
        Gender::Male
    });
    let name = match raw.ot.trim() {
        "" => default.name,
        ot => ot.to_string(),
    };
    TrainerIdentity { tid, sid, name, gender, regions: regions_of(raw) }
}

/// The save only ever promotes the gender to female; otherwise the sidecar's
/// value stands.
fn auto_gender(save_code: u8, raw: &RawTrainer) -> Gender {
    match Gender::from_code(save_code) {
        Gender::Female => Gender::Female,
        Gender::Male => Gender::parse(&raw.gender).unwrap_or_default(),
    }
}

fn regions_of(raw: &RawTrainer) -> Regions {
    Regions {
        country: raw.country.clone(),
        subregion: raw.subregion.clone(),
        console_region: raw.console_region.clone(),
    }
}
