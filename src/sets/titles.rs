// src/sets/titles.rs
// Strategy titles per competitive format, for the post-import summary.

use crate::core::sanitize::clean_text;
use crate::core::slice::{after, between_or_end, first_quoted};

const STRATEGIES_OPEN: &str = "\"strategies\":[{\"format\"";
const STRATEGIES_CLOSE: &str = "</script>";
const FORMAT_KEY: &str = "\"format\"";
const NAME_KEY: &str = "\"name\"";
const CREDITS_KEY: &str = "\"credits\"";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatTitles {
    pub format: String,
    pub titles: Vec<String>,
}

/// Formats in page order, each with the names of its sets.
/// A format listed twice is merged into its first entry.
pub fn extract_titles(payload: &str) -> Vec<FormatTitles> {
    let Some(section) = between_or_end(payload, STRATEGIES_OPEN, STRATEGIES_CLOSE) else {
        return Vec::new();
    };

    // The opening anchor already consumed the first `"format"`, so the first
    // chunk belongs to the first format just like the rest.
    let mut out: Vec<FormatTitles> = Vec::new();
    for chunk in section.split(FORMAT_KEY) {
        let Some(format) = first_quoted(chunk).map(clean_text).filter(|f| !f.is_empty()) else {
            continue;
        };
        // Credits carry "name" keys of their own (authors); stop before them.
        let sets = chunk.split(CREDITS_KEY).next().unwrap_or(chunk);
        let titles: Vec<String> = sets
            .split(NAME_KEY)
            .skip(1)
            .filter_map(first_quoted)
            .map(clean_text)
            .filter(|t| !t.is_empty())
            .collect();

        match out.iter_mut().find(|ft| ft.format == format) {
            Some(existing) => existing.titles.extend(titles),
            None => out.push(FormatTitles { format, titles }),
        }
    }
    logd!("titles: {} formats", out.len());
    out
}

/// Whether a page has a strategies section at all.
pub fn has_strategies(payload: &str) -> bool {
    after(payload, STRATEGIES_OPEN).is_some()
}
