// src/specs/mod.rs
//! # Page readers ("specs")
//!
//! One reader per page kind of the statistics blog. Each knows *where the data
//! lives in the HTML* and turns it into a small typed shape; none of them fetch,
//! cache, or interpret numbers.
//!
//! ## Readers
//! - `posts` – index pages: links to deck-list comparison posts and the pager's
//!   next link.
//! - `decks` – the deck `<select>` of a post: option names and which one the
//!   server rendered.
//! - `table` – the comparison table of a post: raw header cells (text + colspan)
//!   and body rows (label, name cell, `<td>` texts) as a `TableSnapshot`.
//!
//! ## Call chain
//! ```text
//! source::{HttpSource, SnapshotSource} → specs::<page>::parse*(doc)
//!                                      ↘ typed result (Post, DeckSelect, TableSnapshot)
//! analysis::Analysis::run(snapshot)    (outside of specs)
//! ```
//!
//! ## Conventions
//! - Case-insensitive tag detection through `core::html`; scan inside known
//!   blocks (`#table_header`, `#decklist_body`, `#deckname_select_elm`).
//! - Missing blocks are not errors here: readers return `None`/empty and the
//!   caller decides.
//! - Readers are pure functions of the document, testable offline against saved HTML.

pub mod decks;
pub mod posts;
pub mod table;
