// src/analysis/mod.rs
//! # Deck analysis
//!
//! Turns a scraped comparison table into a 40-card recommendation.
//!
//! ## Pipeline
//! ```text
//! TableSnapshot ─ samples() ─▶ SampleTable
//!                               │ weights::sample_weights (recency × rating)
//!                               ▼
//!                           Vec<CardStat>  (weighted mean / variance, rounded)
//!                               │ reconcile::reconcile   (Σ → 40)
//!                               │ scoring::score_swaps   (removal / addition)
//!                               ▼
//!                            Analysis ─ results() ─▶ Vec<CardResult> + summary row
//! ```
//!
//! Everything here is pure: no I/O, no clocks (the caller passes `now`), no
//! shared state between runs. "No data" is `None`, never an error.
//!
//! `editor` picks up where the pipeline stops and lets a user trade copies
//! between cards while keeping the total fixed.

pub mod card;
pub mod editor;
pub mod reconcile;
pub mod scoring;
pub mod snapshot;
pub mod weights;

use chrono::NaiveDateTime;

pub use card::{CardResult, CardStat, SlotKind, SwapScore};
pub use editor::{Change, DeckEditor, SortKey};
pub use reconcile::ReconcileReport;
pub use snapshot::{HeaderShape, SampleTable, TableSnapshot};

use crate::config::consts::DECK_SIZE;
use crate::config::options::WeightingOptions;

/// Weighted statistics per surviving card row, in table order.
pub fn card_stats(table: &SampleTable, opts: &WeightingOptions, now: NaiveDateTime) -> Vec<CardStat> {
    let weights = weights::sample_weights(
        table.samples(),
        &table.dates,
        table.shape.ratings(),
        opts,
        now,
    );
    let total = weights::total_weight(&weights);

    table
        .rows
        .iter()
        .map(|row| {
            let (avg, var) = weights::weighted_moments(&row.counts, &weights, total);
            CardStat::new(row.name.as_str(), avg, var)
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct Analysis {
    pub cards: Vec<CardStat>,
    /// Σ of the rounded averages before reconciling.
    pub round_sum: i32,
    pub report: ReconcileReport,
}

impl Analysis {
    pub fn run(snapshot: &TableSnapshot, opts: &WeightingOptions, now: NaiveDateTime) -> Option<Self> {
        let Some(table) = snapshot.samples() else {
            logf!("Analysis: no data");
            return None;
        };
        let cards = card_stats(&table, opts, now);
        let analysis = Self::from_cards(cards)?;
        logf!(
            "Analysis: {} cards over {} samples, {} → {}",
            analysis.cards.len(),
            table.samples(),
            analysis.round_sum,
            analysis.total()
        );
        Some(analysis)
    }

    /// Reconcile and score already computed card statistics.
    pub fn from_cards(mut cards: Vec<CardStat>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        let round_sum = cards.iter().map(|c| c.rounded_average).sum();
        let report = reconcile::reconcile(&mut cards);
        scoring::score_swaps(&mut cards);
        Some(Self { cards, round_sum, report })
    }

    pub fn total(&self) -> i32 {
        self.cards.iter().map(|c| c.adjusted_count).sum()
    }

    /// Rendered rows followed by the summary row.
    pub fn results(&self) -> Vec<CardResult> {
        let mut out: Vec<CardResult> = self.cards.iter().map(CardStat::to_result).collect();
        out.push(CardResult::summary(DECK_SIZE));
        out
    }

    pub fn editor(&self) -> DeckEditor {
        DeckEditor::new(self.cards.clone())
    }
}
