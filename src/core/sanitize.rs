// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Undo JSON string escapes (`\"`, `\\`, `\/`, `\uXXXX`, ...).
/// Malformed escapes are kept verbatim.
pub fn unescape_json(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => {}
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => { out.push_str("\\u"); out.push_str(&hex); }
                }
            }
            Some(other) => { out.push('\\'); out.push(other); }
            None => out.push('\\'),
        }
    }
    out
}

/// Scraped display text: JSON escapes, HTML entities and stray whitespace removed.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&normalize_entities(&unescape_json(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_handles_common_escapes() {
        assert_eq!(unescape_json(r#"King\u0027s Rock"#), "King's Rock");
        assert_eq!(unescape_json(r#"a\/b \"c\""#), "a/b \"c\"");
        assert_eq!(unescape_json(r#"bad \uZZZZ"#), r#"bad \uZZZZ"#);
        assert_eq!(unescape_json("plain"), "plain");
    }

    #[test]
    fn clean_text_collapses() {
        assert_eq!(clean_text("  Swords&nbsp;Dance \\n "), "Swords Dance");
    }
}
