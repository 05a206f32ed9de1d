// src/session.rs
//! One open connection to a data source plus the card catalog.
//!
//! Opened once by a front end, shared read-only afterwards (`Session` is
//! `Send + Sync`, the GUI keeps it in an `Arc` for its worker thread).
//! `close` releases the source and logs; dropping works too.

use chrono::{Local, NaiveDateTime};

use crate::analysis::{Analysis, CardResult};
use crate::config::options::{AppOptions, WeightingOptions};
use crate::deckcode::{self, CardCatalog, DeckCodeError};
use crate::progress::Progress;
use crate::source::{self, DataSource, Post, SourceError};

pub struct Session {
    source: Box<dyn DataSource>,
    catalog: CardCatalog,
    weighting: WeightingOptions,
    post_pages: usize,
}

impl Session {
    pub fn open(options: &AppOptions) -> Result<Self, SourceError> {
        let source = source::open_source(&options.source)?;
        let catalog = CardCatalog::load_or_empty(&options.catalog_path);
        logf!("Session: open ({}, {} cards)", source.name(), catalog.len());
        Ok(Self::with_parts(source, catalog, options))
    }

    /// Session over an already built source and catalog.
    pub fn with_parts(source: Box<dyn DataSource>, catalog: CardCatalog, options: &AppOptions) -> Self {
        Self {
            source,
            catalog,
            weighting: options.weighting.clone(),
            post_pages: options.source.post_pages,
        }
    }

    pub fn close(self) {
        logf!("Session: closed ({})", self.source.name());
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn posts(&self, progress: &mut dyn Progress) -> Result<Vec<Post>, SourceError> {
        self.source.list_posts(self.post_pages, progress)
    }

    pub fn deck_names(&self, post_url: &str) -> Result<Vec<String>, SourceError> {
        self.source.deck_names(post_url)
    }

    /// Typed analysis of one deck at `now`. `Ok(None)` means no data.
    pub fn analysis_at(
        &self,
        post_url: &str,
        deck: &str,
        now: NaiveDateTime,
    ) -> Result<Option<Analysis>, SourceError> {
        let snapshot = self.source.fetch_table(post_url, deck)?;
        Ok(Analysis::run(&snapshot, &self.weighting, now))
    }

    pub fn analysis(&self, post_url: &str, deck: &str) -> Result<Option<Analysis>, SourceError> {
        self.analysis_at(post_url, deck, Local::now().naive_local())
    }

    /// Rendered rows with the summary row; empty when there is no data.
    pub fn analyze(&self, post_url: &str, deck: &str) -> Result<Vec<CardResult>, SourceError> {
        Ok(self
            .analysis(post_url, deck)?
            .map(|a| a.results())
            .unwrap_or_default())
    }

    pub fn build_deck_code<S: AsRef<str>>(
        &self,
        card_names: &[S],
        class_id: u32,
    ) -> Result<String, DeckCodeError> {
        deckcode::build_deck_code(card_names, class_id, &self.catalog)
    }
}
