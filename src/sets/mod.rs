// src/sets/mod.rs
mod fragment;
mod import;
mod showdown;
mod slug;
mod titles;

pub use fragment::{extract_fragments, parse_fragment, CompetitiveSetFragment, StatTable, FRAGMENT_CLOSE, FRAGMENT_OPEN};
pub use import::{import_and_report, summary_text, ImportError, ImportReport, MovesetImporter};
pub use showdown::{aggregate, CanonicalSetText};
pub use slug::{form_slug, species_slug, SetTarget};
pub use titles::{extract_titles, FormatTitles};
