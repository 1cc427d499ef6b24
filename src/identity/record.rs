// src/identity/record.rs
// Writing a resolved identity onto a record.

use crate::config::consts::SHINY_XOR_THRESHOLD;

use super::trainer::{Gender, Regions, TrainerIdentity};

/// The identity-bearing part of a stored creature record.
///
/// Only the accessors are required; shiny handling is derived from TID/SID/PID.
pub trait TrainerRecord {
    fn tid(&self) -> u16;
    fn sid(&self) -> u16;
    fn ot_name(&self) -> &str;
    fn ot_gender(&self) -> Gender;
    fn pid(&self) -> u32;

    fn set_tid(&mut self, tid: u16);
    fn set_sid(&mut self, sid: u16);
    fn set_ot_name(&mut self, name: &str);
    fn set_ot_gender(&mut self, gender: Gender);
    fn set_pid(&mut self, pid: u32);
    fn set_regions(&mut self, regions: &Regions);

    /// Gen 6+ uses 16; Gen 3-5 records override with 8.
    fn shiny_threshold(&self) -> u16 {
        SHINY_XOR_THRESHOLD
    }

    fn shiny_xor(&self) -> u16 {
        let pid = self.pid();
        self.tid() ^ self.sid() ^ (pid >> 16) as u16 ^ (pid & 0xFFFF) as u16
    }

    fn is_shiny(&self) -> bool {
        self.shiny_xor() < self.shiny_threshold()
    }

    /// Adjust the PID's upper half so `is_shiny() == shiny`. The lower half is
    /// never touched. No-op when the state already matches.
    fn set_shiny(&mut self, shiny: bool) {
        if self.is_shiny() == shiny {
            return;
        }
        let pid = self.pid();
        let lo = (pid & 0xFFFF) as u16;
        let hi = if shiny {
            self.tid() ^ self.sid() ^ lo
        } else {
            // xor was below the threshold; flipping bit 15 lifts it to >= 0x8000
            (pid >> 16) as u16 ^ 0x8000
        };
        self.set_pid((u32::from(hi) << 16) | u32::from(lo));
    }
}

/// Plain in-memory record.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PkmRecord {
    pub tid: u16,
    pub sid: u16,
    pub ot_name: String,
    pub ot_gender: Gender,
    pub pid: u32,
    pub regions: Option<Regions>,
}

impl TrainerRecord for PkmRecord {
    fn tid(&self) -> u16 { self.tid }
    fn sid(&self) -> u16 { self.sid }
    fn ot_name(&self) -> &str { &self.ot_name }
    fn ot_gender(&self) -> Gender { self.ot_gender }
    fn pid(&self) -> u32 { self.pid }

    fn set_tid(&mut self, tid: u16) { self.tid = tid; }
    fn set_sid(&mut self, sid: u16) { self.sid = sid; }
    fn set_ot_name(&mut self, name: &str) { self.ot_name = name.to_string(); }
    fn set_ot_gender(&mut self, gender: Gender) { self.ot_gender = gender; }
    fn set_pid(&mut self, pid: u32) { self.pid = pid; }
    fn set_regions(&mut self, regions: &Regions) { self.regions = Some(regions.clone()); }
}

/// Identity stamped by an automated legality pass. Safe to replace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub tid: u16,
    /// `None` matches any SID.
    pub sid: Option<u16>,
    pub name: &'static str,
}

impl Placeholder {
    pub fn matches<R: TrainerRecord + ?Sized>(&self, record: &R) -> bool {
        record.tid() == self.tid
            && self.sid.is_none_or(|sid| record.sid() == sid)
            && record.ot_name() == self.name
    }
}

pub const PLACEHOLDERS: &[Placeholder] = &[
    Placeholder { tid: 12345, sid: None, name: "PKHeX" },
    Placeholder { tid: 34567, sid: Some(0), name: "TCD" },
];

pub fn is_placeholder<R: TrainerRecord + ?Sized>(record: &R) -> bool {
    PLACEHOLDERS.iter().any(|p| p.matches(record))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Placeholder replaced; shiny state carried over.
    ReplacedPlaceholder,
    /// Legalized record with a user-assigned identity; left alone.
    Preserved,
    /// Not legalized; TID/SID/OT written unconditionally.
    Overwritten,
}

/// Write `id` onto `record`.
///
/// With `api_legalized` only placeholder identities are replaced (gender
/// included) and the shiny flag survives the ID change. Without it TID, SID
/// and OT name are always written and gender is left as is.
pub fn apply_identity<R: TrainerRecord + ?Sized>(
    record: &mut R,
    id: &TrainerIdentity,
    api_legalized: bool,
) -> ApplyOutcome {
    if api_legalized {
        if !is_placeholder(record) {
            logd!("apply: {} ({:05}) is user-assigned, kept", record.ot_name(), record.tid());
            return ApplyOutcome::Preserved;
        }
        let shiny = record.is_shiny();
        record.set_tid(id.tid);
        record.set_sid(id.sid);
        record.set_ot_name(&id.name);
        record.set_ot_gender(id.gender);
        record.set_shiny(shiny);
        logd!("apply: placeholder replaced by {} ({:05}), shiny={shiny}", id.name, id.tid);
        return ApplyOutcome::ReplacedPlaceholder;
    }
    record.set_tid(id.tid);
    record.set_sid(id.sid);
    record.set_ot_name(&id.name);
    ApplyOutcome::Overwritten
}

pub fn apply_regions<R: TrainerRecord + ?Sized>(record: &mut R, id: &TrainerIdentity) {
    record.set_regions(&id.regions);
}
