// src/specs/decks.rs
// Reader for the deck <select> of a comparison post.

use crate::config::consts::DECK_SELECT_ID;
use crate::core::html;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckSelect {
    pub names: Vec<String>,
    /// Option marked `selected`; the browser shows the first one otherwise.
    pub selected: Option<usize>,
}

impl DeckSelect {
    /// Deck whose table the server rendered into the page.
    pub fn current(&self) -> Option<&str> {
        self.names.get(self.selected.unwrap_or(0)).map(String::as_str)
    }
}

pub fn parse_select(doc: &str) -> Option<DeckSelect> {
    let select = html::element_by_id(doc, DECK_SELECT_ID)?;
    let mut out = DeckSelect::default();
    for (i, opt) in html::elements(select, "option").into_iter().enumerate() {
        if out.selected.is_none() && html::has_attr(html::open_tag(opt), "selected") {
            out.selected = Some(i);
        }
        out.names.push(html::text(opt));
    }
    Some(out)
}
