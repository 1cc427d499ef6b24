// src/core/slice.rs
// Anchor-based slicing over semi-structured text (embedded JSON in a page).
// Nothing here understands JSON; callers pick anchors that are stable enough.

/// Text after the first occurrence of `pat`.
pub fn after<'a>(s: &'a str, pat: &str) -> Option<&'a str> {
    let i = s.find(pat)?;
    Some(&s[i + pat.len()..])
}

/// Text between the first `open` and the next `close` after it.
/// A missing `close` runs to the end of `s`.
pub fn between_or_end<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let rest = after(s, open)?;
    Some(rest.find(close).map_or(rest, |end| &rest[..end]))
}

/// Every segment that starts right after an `open` anchor.
///
/// A segment stops at the first `close` inside it, or at the next `open`,
/// or at the end of the input, whichever comes first. Segments never overlap.
pub fn segments<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = s.get(pos..).and_then(|t| t.find(open)) {
        let start = pos + rel + open.len();
        let rest = &s[start..];
        let mut end = rest.find(open).unwrap_or(rest.len());
        if let Some(c) = rest[..end].find(close) {
            end = c;
        }
        out.push(&rest[..end]);
        pos = start + end;
    }
    out
}

/// Contents of the first double-quoted run, e.g. `["Levitate"]` -> `Levitate`.
/// Backslash-escaped quotes are skipped over.
pub fn first_quoted(s: &str) -> Option<&str> {
    let open = s.find('"')? + 1;
    let b = s.as_bytes();
    let mut i = open;
    while i < b.len() {
        match b[i] {
            b'\\' => i += 2,
            b'"' => return Some(&s[open..i]),
            _ => i += 1,
        }
    }
    None
}
