// src/core/html.rs
// Naive, case-insensitive tag scanning tailored to the svlabo page layout.
// Same-name nesting is not tracked: an element ends at the first matching
// closing tag, which holds for the table/select/row/cell blocks read here.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    // ASCII-only so byte offsets stay aligned with the original text
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Position of the next `<tag` opener at or after `from` in an already
/// lowercased document. `<th` does not match `<thead`.
fn find_open(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = format!("<{tag}");
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        let after = lc[at + pat.len()..].chars().next();
        match after {
            Some(c) if c.is_whitespace() || c == '>' || c == '/' => return Some(at),
            Some(_) => pos = at + pat.len(),
            None => return None,
        }
    }
}

/// Next complete `<tag ...>...</tag>` block from `from` onwards, as
/// (start of opening tag, end of closing tag).
fn next_element_lc(s: &str, lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_open(lc, tag, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close = format!("</{tag}");
    let close_at = lc[open_end..].find(&close)? + open_end;
    let end = s[close_at..].find('>')? + close_at + 1;
    Some((start, end))
}

/// All `<tag>` blocks in document order.
pub fn elements<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_element_lc(s, &lc, tag, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

/// The opening tag of a block, `<td class="x">` in `<td class="x">..</td>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Attribute value from an opening tag. Handles `a="v"`, `a='v'` and `a=v`.
pub fn attr(open: &str, name: &str) -> Option<String> {
    let lc = to_lower(open);
    let pat = format!("{}=", to_lower(name));
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&pat) {
        let at = pos + rel;
        pos = at + pat.len();

        // must be a whole attribute name
        let boundary = lc[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_whitespace());
        if !boundary {
            continue;
        }

        let rest = &open[pos..];
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &rest[1..];
                &body[..body.find(q)?]
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                &rest[..end]
            }
            None => return None,
        };
        return Some(normalize_entities(value));
    }
    None
}

/// Boolean attribute present, e.g. `<option selected>`.
pub fn has_attr(open: &str, name: &str) -> bool {
    let lc = to_lower(open);
    let name = to_lower(name);
    lc.trim_start_matches('<')
        .trim_end_matches('>')
        .split(|c: char| c.is_whitespace() || c == '/')
        .any(|tok| tok == name || tok.starts_with(&format!("{name}=")))
}

pub fn has_class(open: &str, class: &str) -> bool {
    attr(open, "class")
        .map(|v| v.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// First `<tag>` carrying `class`, also when nested in another `<tag>`.
pub fn element_by_class<'a>(doc: &'a str, tag: &str, class: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let mut pos = 0usize;
    loop {
        let start = find_open(&lc, tag, pos)?;
        let open_end = doc[start..].find('>')? + start + 1;
        if has_class(&doc[start..open_end], class) {
            let (b, e) = next_element_lc(doc, &lc, tag, start)?;
            return Some(&doc[b..e]);
        }
        pos = open_end;
    }
}

/// Whole block of the first element whose `id` attribute equals `id`.
pub fn element_by_id<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find("id=") {
        let at = pos + rel;
        pos = at + 3;

        let Some(lt) = doc[..at].rfind('<') else { continue };
        let Some(gt) = doc[at..].find('>').map(|g| g + at) else { continue };
        if doc[lt..at].contains('>') {
            continue; // text, not inside a tag
        }
        let open = &doc[lt..=gt];
        if attr(open, "id").as_deref() != Some(id) {
            continue;
        }

        let tag: String = lc[lt + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag.is_empty() {
            continue;
        }
        let (b, e) = next_element_lc(doc, &lc, &tag, lt)?;
        return Some(&doc[b..e]);
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellTag {
    Th,
    Td,
}

/// One `<th>` or `<td>` of a row.
#[derive(Clone, Copy, Debug)]
pub struct Cell<'a> {
    pub tag: CellTag,
    pub block: &'a str,
}

impl<'a> Cell<'a> {
    pub fn open(&self) -> &'a str {
        open_tag(self.block)
    }
    pub fn text(&self) -> String {
        text(self.block)
    }
}

/// `<th>`/`<td>` cells of a row, in document order.
pub fn cells(row: &str) -> Vec<Cell<'_>> {
    let lc = to_lower(row);
    let mut out = Vec::new();
    let mut pos = 0usize;
    loop {
        let th = next_element_lc(row, &lc, "th", pos);
        let td = next_element_lc(row, &lc, "td", pos);
        let (tag, (b, e)) = match (th, td) {
            (Some(h), Some(d)) if h.0 < d.0 => (CellTag::Th, h),
            (_, Some(d)) => (CellTag::Td, d),
            (Some(h), None) => (CellTag::Th, h),
            (None, None) => break,
        };
        out.push(Cell { tag, block: &row[b..e] });
        pos = e;
    }
    out
}

/// Visible text of a block: tags removed, then entities decoded, whitespace collapsed.
/// Escaped `&lt;..&gt;` stays literal text.
pub fn text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
