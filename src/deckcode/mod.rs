// src/deckcode/mod.rs
// Deck list → share URL. Each card id is four symbols of a 64-letter alphabet.

pub mod catalog;

use std::collections::HashMap;

use thiserror::Error;

pub use catalog::{CardCatalog, CatalogError};

use crate::config::consts::{CODE_SEPARATOR, SHARE_ENDPOINT, SHARE_FORMAT_VERSION, SHARE_LANG};

const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

pub const CODE_LEN: usize = 4;
pub const ID_LIMIT: i64 = 1 << 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckCodeError {
    #[error("card id {0} must be a 24-bit integer")]
    InvalidArgument(i64),
    #[error("no card id for {0:?}")]
    NotFound(String),
    #[error("{0:?} is not a deck code symbol")]
    InvalidSymbol(char),
    #[error("deck code must be 4 symbols, got {0}")]
    InvalidLength(usize),
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 36),
        '-' => Some(62),
        '_' => Some(63),
        _ => None,
    }
}

/// Four 6-bit groups, most significant first.
pub fn encode_id(id: i64) -> Result<String, DeckCodeError> {
    if !(0..ID_LIMIT).contains(&id) {
        return Err(DeckCodeError::InvalidArgument(id));
    }
    Ok((0..CODE_LEN)
        .map(|i| {
            let group = (id >> (6 * (CODE_LEN - 1 - i))) & 0x3F;
            ALPHABET[group as usize] as char
        })
        .collect())
}

pub fn decode_id(code: &str) -> Result<i64, DeckCodeError> {
    let n = code.chars().count();
    if n != CODE_LEN {
        return Err(DeckCodeError::InvalidLength(n));
    }
    code.chars().try_fold(0i64, |acc, c| {
        let v = symbol_value(c).ok_or(DeckCodeError::InvalidSymbol(c))?;
        Ok((acc << 6) | v as i64)
    })
}

/// One code per physical copy, grouped by card and ordered by card id.
pub fn deck_hashes<S: AsRef<str>>(
    names: &[S],
    catalog: &CardCatalog,
) -> Result<Vec<String>, DeckCodeError> {
    // distinct names in first-seen order, with copy counts
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for name in names {
        let name = name.as_ref();
        match seen.get(name) {
            Some(&at) => order[at].1 += 1,
            None => {
                seen.insert(name, order.len());
                order.push((name, 1));
            }
        }
    }

    let mut entries = Vec::with_capacity(order.len());
    for (name, count) in order {
        let id = catalog
            .lookup(name)
            .ok_or_else(|| DeckCodeError::NotFound(s!(name)))?;
        entries.push((id, count, encode_id(id)?));
    }
    entries.sort_by_key(|&(id, _, _)| id);

    Ok(entries
        .into_iter()
        .flat_map(|(_, count, code)| std::iter::repeat_n(code, count))
        .collect())
}

pub fn share_url(class_id: u32, hashes: &[String]) -> String {
    let mut hash = format!("{SHARE_FORMAT_VERSION}{CODE_SEPARATOR}{class_id}");
    for h in hashes {
        hash.push_str(CODE_SEPARATOR);
        hash.push_str(h);
    }
    format!("{SHARE_ENDPOINT}?hash={hash}&lang={SHARE_LANG}")
}

/// Share URL for a deck given as one name per copy.
pub fn build_deck_code<S: AsRef<str>>(
    names: &[S],
    class_id: u32,
    catalog: &CardCatalog,
) -> Result<String, DeckCodeError> {
    let hashes = deck_hashes(names, catalog)?;
    logd!("Deck code: {} copies, class {class_id}", hashes.len());
    Ok(share_url(class_id, &hashes))
}

/// Class markers found in deck names, checked in this order.
const CLASS_MARKERS: [(&str, u32); 7] = [
    ("E", 1),
    ("R", 2),
    ("W", 3),
    ("D", 4),
    ("Ni", 5),
    ("B", 6),
    ("Nm", 7),
];

/// Guess the class id from a deck name such as `秘術W` or `進化R`.
pub fn class_from_deck_name(deck: &str) -> Option<u32> {
    CLASS_MARKERS
        .iter()
        .find(|(marker, _)| deck.contains(marker))
        .map(|&(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_values() {
        assert_eq!(encode_id(0).unwrap(), "0000");
        assert_eq!(encode_id(63).unwrap(), "000_");
        assert_eq!(encode_id(64).unwrap(), "0010");
        assert_eq!(encode_id(ID_LIMIT - 1).unwrap(), "____");
        assert_eq!(encode_id(10 << 18).unwrap(), "A000");
    }

    #[test]
    fn encode_rejects_out_of_range() {
        assert_eq!(encode_id(ID_LIMIT), Err(DeckCodeError::InvalidArgument(1 << 24)));
        assert_eq!(encode_id(-1), Err(DeckCodeError::InvalidArgument(-1)));
        assert!(encode_id(-1).unwrap_err().to_string().contains("24-bit"));
    }

    #[test]
    fn decode_inverts_encode() {
        for id in [0, 1, 62, 4095, 123_456, ID_LIMIT - 1] {
            assert_eq!(decode_id(&encode_id(id).unwrap()).unwrap(), id);
        }
        assert_eq!(decode_id("00+0"), Err(DeckCodeError::InvalidSymbol('+')));
        assert_eq!(decode_id("000"), Err(DeckCodeError::InvalidLength(3)));
    }

    #[test]
    fn hashes_sorted_by_id_and_repeated() {
        let catalog = CardCatalog::from_pairs([("A", 5), ("B", 2)]);
        let hashes = deck_hashes(&["B", "A", "B"], &catalog).unwrap();
        assert_eq!(hashes, vec!["0002", "0002", "0005"]);
        assert_eq!(
            share_url(1, &hashes),
            "https://shadowverse-wb.com/web/Deck/share?hash=2.1.0002.0002.0005&lang=ko"
        );
    }

    #[test]
    fn unknown_card_aborts() {
        let catalog = CardCatalog::from_pairs([("A", 5)]);
        let err = build_deck_code(&["A", "Z"], 2, &catalog).unwrap_err();
        assert_eq!(err, DeckCodeError::NotFound(s!("Z")));
    }

    #[test]
    fn names_match_without_spaces() {
        let catalog = CardCatalog::from_pairs([("Sky Dragon", 300)]);
        let url = build_deck_code(&["Sky　Dragon", "SkyDragon"], 3, &catalog).unwrap();
        assert!(url.ends_with("hash=2.3.004i.004i&lang=ko"));
    }

    #[test]
    fn empty_deck_has_bare_prefix() {
        let url = build_deck_code::<&str>(&[], 2, &CardCatalog::default()).unwrap();
        assert!(url.ends_with("hash=2.2&lang=ko"));
    }

    #[test]
    fn class_markers_in_order() {
        assert_eq!(class_from_deck_name("秘術W"), Some(3));
        assert_eq!(class_from_deck_name("Nm"), Some(7));
        assert_eq!(class_from_deck_name("Ni"), Some(5));
        assert_eq!(class_from_deck_name("ER"), Some(1));
        assert_eq!(class_from_deck_name("アグロ"), None);
    }
}
