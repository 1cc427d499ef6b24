// src/identity/trainer.rs
// Trainer identity and the two ID encodings.
//
// Legacy: TID and SID, two u16 halves of one u32.
// Wide (Gen 7 display): the same u32 printed as SID7 (4 digits) and TID7 (6 digits),
// u32 = SID7 * 1_000_000 + TID7.

use std::fmt;

use thiserror::Error;

use crate::config::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("not a number: {0:?}")]
    NotNumeric(String),
    #[error("out of range: {0}")]
    OutOfRange(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Save/record encoding: 0 = male, 1 = female. Anything else reads as male.
    pub fn from_code(code: u8) -> Self {
        if code == 1 { Gender::Female } else { Gender::Male }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "0" | "♂" => Some(Gender::Male),
            "f" | "female" | "1" | "♀" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self { Gender::Male => "M", Gender::Female => "F" }
    }
}

/// Country / subregion / 3DS region, as the sidecar or save wrote them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Regions {
    pub country: String,
    pub subregion: String,
    pub console_region: String,
}

impl Default for Regions {
    fn default() -> Self {
        Self {
            country: s!(DEFAULT_COUNTRY),
            subregion: s!(DEFAULT_SUBREGION),
            console_region: s!(DEFAULT_CONSOLE_REGION),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerIdentity {
    pub tid: u16,
    pub sid: u16,
    pub name: String,
    pub gender: Gender,
    pub regions: Regions,
}

impl Default for TrainerIdentity {
    fn default() -> Self {
        Self {
            tid: DEFAULT_TID,
            sid: DEFAULT_SID,
            name: s!(DEFAULT_OT),
            gender: Gender::Male,
            regions: Regions::default(),
        }
    }
}

impl TrainerIdentity {
    /// The same IDs in the Gen 7 (TID7, SID7) display form.
    pub fn wide(&self) -> (u32, u32) {
        wide_from_legacy(self.tid, self.sid)
    }
}

/// Same `Key: Value` layout as trainerdata.txt.
impl fmt::Display for TrainerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TID: {:05}", self.tid)?;
        writeln!(f, "SID: {:05}", self.sid)?;
        writeln!(f, "OT: {}", self.name)?;
        writeln!(f, "Gender: {}", self.gender.as_str())?;
        writeln!(f, "Country: {}", self.regions.country)?;
        writeln!(f, "SubRegion: {}", self.regions.subregion)?;
        write!(f, "3DSRegion: {}", self.regions.console_region)
    }
}

/// (TID, SID) → (TID7, SID7)
pub fn wide_from_legacy(tid: u16, sid: u16) -> (u32, u32) {
    let packed = (u32::from(sid) << 16) | u32::from(tid);
    (packed % 1_000_000, packed / 1_000_000)
}

/// (TID7, SID7) → (TID, SID). Inputs beyond u32 wrap, as the games do.
pub fn legacy_from_wide(tid7: u32, sid7: u32) -> (u16, u16) {
    let packed = u64::from(sid7) * 1_000_000 + u64::from(tid7);
    ((packed & 0xFFFF) as u16, ((packed >> 16) & 0xFFFF) as u16)
}

/// A 6-digit TID next to a 4-digit SID means the wide form.
pub fn looks_wide(tid: &str, sid: &str) -> bool {
    let (tid, sid) = (tid.trim(), sid.trim());
    tid.len() == 6
        && sid.len() == 4
        && tid.bytes().all(|b| b.is_ascii_digit())
        && sid.bytes().all(|b| b.is_ascii_digit())
}

fn parse_u16(s: &str) -> Result<u16, IdError> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdError::NotNumeric(s.to_string()));
    }
    s.parse::<u16>().map_err(|_| IdError::OutOfRange(s.to_string()))
}

/// Parse a sidecar TID/SID pair into legacy form.
/// Returns whether the input was in wide form so the caller can warn.
pub fn parse_id_pair(tid: &str, sid: &str) -> Result<(u16, u16, bool), IdError> {
    if looks_wide(tid, sid) {
        // looks_wide guarantees ASCII digits that fit in u32
        let tid7: u32 = tid.trim().parse().map_err(|_| IdError::NotNumeric(tid.to_string()))?;
        let sid7: u32 = sid.trim().parse().map_err(|_| IdError::NotNumeric(sid.to_string()))?;
        let (t, s) = legacy_from_wide(tid7, sid7);
        return Ok((t, s, true));
    }
    Ok((parse_u16(tid)?, parse_u16(sid)?, false))
}
