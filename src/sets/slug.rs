// src/sets/slug.rs
// Species/form names as the dex spells them in URLs.

use crate::config::options::{FormGuard, ImportOptions};

// Display names the generic rule below would mangle.
const SPECIES_SLUGS: &[(&str, &str)] = &[
    ("Nidoran♂", "nidoran-m"),
    ("Nidoran♀", "nidoran-f"),
    ("Farfetch’d", "farfetchd"),
    ("Flabébé", "flabebe"),
];

// (species, form, slug)
const FORM_SLUGS: &[(&str, &str, &str)] = &[
    ("Necrozma", "Dusk", "dusk_mane"),
    ("Necrozma", "Dawn", "dawn_wings"),
    ("Oricorio", "Pa'u", "pau"),
];

/// Lowercase ASCII slug: spaces become `_`, anything else non-alphanumeric
/// (apostrophes, periods, colons) is dropped. `-` and `_` survive.
fn generic_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() {
            if !out.ends_with('_') { out.push('_'); }
        }
    }
    out
}

pub fn species_slug(species: &str) -> String {
    let species = species.trim();
    SPECIES_SLUGS
        .iter()
        .find(|(name, _)| *name == species)
        .map(|(_, slug)| s!(*slug))
        .unwrap_or_else(|| generic_slug(species))
}

pub fn form_slug(species: &str, form: &str) -> String {
    let (species, form) = (species.trim(), form.trim());
    FORM_SLUGS
        .iter()
        .find(|(sp, f, _)| *sp == species && *f == form)
        .map(|(_, _, slug)| s!(*slug))
        .unwrap_or_else(|| generic_slug(form))
}

/// What the user asked for: a species display name plus an optional form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetTarget {
    pub species: String,
    pub form: Option<String>,
}

impl SetTarget {
    pub fn new(species: &str, form: Option<&str>) -> Self {
        Self {
            species: species.trim().to_string(),
            form: form.map(|f| f.trim().to_string()),
        }
    }

    pub fn slug(&self, guard: FormGuard) -> String {
        let base = species_slug(&self.species);
        match guard.effective(self.form.as_deref()) {
            Some(form) => join!(base, "-", &form_slug(&self.species, form)),
            None => base,
        }
    }

    /// Header label for the set text, e.g. `Necrozma-Dusk`.
    pub fn label(&self, guard: FormGuard) -> String {
        match guard.effective(self.form.as_deref()) {
            Some(form) => join!(&self.species, "-", form),
            None => self.species.clone(),
        }
    }

    pub fn url(&self, opts: &ImportOptions) -> String {
        format!(
            "{}/dex/{}/pokemon/{}/",
            opts.base_url.trim_end_matches('/'),
            opts.dex_gen,
            self.slug(opts.form_guard)
        )
    }
}
