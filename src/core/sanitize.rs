// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
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

/// Card identity for deck codes: plain and full-width spaces removed, nothing else.
pub fn normalize_card_name(name: &str) -> String {
    name.chars().filter(|&c| c != ' ' && c != '\u{3000}').collect()
}

/// File stem from a deck name. Keeps letters/digits of any script so
/// Japanese deck names survive; falls back to `deck_<n>`.
pub fn sanitize_filename(name: &str, fallback: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("deck_{}", fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_names_lose_both_space_kinds() {
        assert_eq!(normalize_card_name("Sky　Dragon Knight"), "SkyDragonKnight");
        // tabs are not spaces for card identity
        assert_eq!(normalize_card_name("a\tb"), "a\tb");
    }

    #[test]
    fn entities_decode_amp_last() {
        assert_eq!(normalize_entities("&amp;lt;&nbsp;x"), "&lt; x");
    }

    #[test]
    fn filename_keeps_non_ascii() {
        assert_eq!(sanitize_filename("秘術 W/2", 0), "秘術_W2");
        assert_eq!(sanitize_filename("***", 3), "deck_3");
    }
}
