// src/sets/fragment.rs
// Per-set records pulled out of the dex page's embedded JSON blob.
//
// The blob is not parsed as JSON. A set starts at `","abilities":` and ends at the
// first `"]}` (the end of its natures list). The leading `",` matters: moveset
// entries have a string field right before "abilities", while the species
// basics dump on the same page has `],"abilities":` and must not match. Inside a set we look for the known
// keys; anything missing falls back to a default instead of dropping the set.

use std::fmt;

use crate::core::sanitize::clean_text;
use crate::core::slice::{after, between_or_end, segments};

pub const FRAGMENT_OPEN: &str = "\",\"abilities\":";
pub const FRAGMENT_CLOSE: &str = "\"]}";

const MAX_MOVES: usize = 4;

pub const STAT_KEYS: [&str; 6] = ["hp", "atk", "def", "spa", "spd", "spe"];
pub const STAT_LABELS: [&str; 6] = ["HP", "Atk", "Def", "SpA", "SpD", "Spe"];

/// Six per-stat values in HP/Atk/Def/SpA/SpD/Spe order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTable(pub [u16; 6]);

impl StatTable {
    pub const EV_DEFAULT: StatTable = StatTable([0; 6]);
    pub const IV_DEFAULT: StatTable = StatTable([31; 6]);
}

impl fmt::Display for StatTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (v, label)) in self.0.iter().zip(STAT_LABELS).enumerate() {
            if i > 0 { f.write_str(" / ")?; }
            write!(f, "{v} {label}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitiveSetFragment {
    pub ability: String,
    pub item: Option<String>,
    pub moves: Vec<String>,
    pub nature: Option<String>,
    pub evs: StatTable,
    pub ivs: StatTable,
}

/// First string of a JSON-ish list body. Tolerates the closing quote having
/// been cut off by the fragment boundary.
fn first_item(body: &str) -> Option<String> {
    let rest = after(body, "\"")?;
    let end = rest.find('"').unwrap_or(rest.len());
    let item = clean_text(&rest[..end]);
    (!item.is_empty()).then_some(item)
}

fn list_first(frag: &str, key: &str) -> Option<String> {
    first_item(between_or_end(frag, key, "]")?)
}

fn parse_moves(frag: &str) -> Vec<String> {
    let Some(rest) = after(frag, "\"moveslots\":").map(str::trim_start) else {
        return Vec::new();
    };
    if rest.starts_with("[]") {
        return Vec::new();
    }
    let end = ["]]", "\"evconfigs\""]
        .iter()
        .filter_map(|p| rest.find(p))
        .min()
        .unwrap_or(rest.len());
    let body = &rest[..end];
    // Each slot is a list of alternatives; the first one is the main pick.
    // Newer pages wrap each move as {"move":"X","type":null}.
    body.split('[')
        .skip(1)
        .filter_map(|slot| match after(slot, "\"move\":") {
            Some(rest) => first_item(rest),
            None => first_item(slot.split(']').next().unwrap_or(slot)),
        })
        .take(MAX_MOVES)
        .collect()
}

/// First config object of an `evconfigs`/`ivconfigs` list.
/// No object at all, or a missing/garbled stat, falls back to `default`.
fn parse_stats(body: Option<&str>, default: StatTable) -> StatTable {
    let Some(obj) = body.and_then(|b| between_or_end(b, "{", "}")) else {
        return default;
    };
    let mut out = default;
    for (slot, key) in out.0.iter_mut().zip(STAT_KEYS) {
        let pat = format!("\"{key}\":");
        let Some(rest) = after(obj, &pat) else { continue };
        let digits: String = rest
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if let Ok(v) = digits.parse::<u16>() {
            *slot = v;
        }
    }
    out
}

/// Parse one fragment (the text after `","abilities":`).
/// `None` when no ability can be found, since a set without one is not usable.
pub fn parse_fragment(frag: &str) -> Option<CompetitiveSetFragment> {
    let ability = first_item(frag.split(']').next().unwrap_or(frag))?;
    let item = list_first(frag, "\"items\":");
    let moves = parse_moves(frag);
    let nature = list_first(frag, "\"natures\":");
    let evs = parse_stats(
        between_or_end(frag, "\"evconfigs\":", "\"ivconfigs\":"),
        StatTable::EV_DEFAULT,
    );
    let ivs = parse_stats(
        between_or_end(frag, "\"ivconfigs\":", "\"natures\":"),
        StatTable::IV_DEFAULT,
    );
    Some(CompetitiveSetFragment { ability, item, moves, nature, evs, ivs })
}

pub fn extract_fragments(payload: &str) -> Vec<CompetitiveSetFragment> {
    let raw = segments(payload, FRAGMENT_OPEN, FRAGMENT_CLOSE);
    let mut out = Vec::with_capacity(raw.len());
    for (i, frag) in raw.iter().enumerate() {
        match parse_fragment(frag) {
            Some(f) => out.push(f),
            None => logd!("fragment {i}: no ability, skipped"),
        }
    }
    logd!("fragments: {} found, {} usable", raw.len(), out.len());
    out
}
