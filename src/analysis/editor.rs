// src/analysis/editor.rs
//! Interactive tweaking of a recommended deck.
//!
//! Every edit moves one copy of the chosen card and one copy of the partner
//! card that keeps the penalty lowest, so the total never changes. Scores are
//! recomputed after each edit.

use std::cmp::Ordering;

use super::card::{CardResult, CardStat};
use super::reconcile::{can_step, penalty};
use super::scoring::score_swaps;
use crate::config::consts::DECK_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Average,
    Recommended,
    Current,
    Removability,
    Addability,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Average,
        SortKey::Recommended,
        SortKey::Current,
        SortKey::Removability,
        SortKey::Addability,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortKey::Name => "카드",
            SortKey::Average => "평균",
            SortKey::Recommended => "추천",
            SortKey::Current => "현재",
            SortKey::Removability => "제거",
            SortKey::Addability => "추가",
        }
    }
}

/// Count of a card relative to the recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Same,
    Increased,
    Decreased,
}

#[derive(Clone, Debug, Default)]
pub struct DeckEditor {
    cards: Vec<CardStat>,
    recommended: Vec<i32>,
}

impl DeckEditor {
    pub fn new(mut cards: Vec<CardStat>) -> Self {
        score_swaps(&mut cards);
        let recommended = cards.iter().map(|c| c.adjusted_count).collect();
        Self { cards, recommended }
    }

    pub fn cards(&self) -> &[CardStat] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn recommended(&self, i: usize) -> i32 {
        self.recommended.get(i).copied().unwrap_or(0)
    }

    pub fn count(&self, i: usize) -> i32 {
        self.cards.get(i).map(|c| c.adjusted_count).unwrap_or(0)
    }

    pub fn total(&self) -> i32 {
        self.cards.iter().map(|c| c.adjusted_count).sum()
    }

    /// `총 N / 40 장`
    pub fn total_label(&self) -> String {
        format!("총 {} / {DECK_SIZE} 장", self.total())
    }

    pub fn change(&self, i: usize) -> Change {
        match self.count(i).cmp(&self.recommended(i)) {
            Ordering::Greater => Change::Increased,
            Ordering::Less => Change::Decreased,
            Ordering::Equal => Change::Same,
        }
    }

    /// One more copy of card `i`, one fewer of the best partner.
    /// Returns the partner, or `None` when nothing changed.
    pub fn increase(&mut self, i: usize) -> Option<usize> {
        self.trade(i, 1)
    }

    /// One fewer copy of card `i`, one more of the best partner.
    pub fn decrease(&mut self, i: usize) -> Option<usize> {
        self.trade(i, -1)
    }

    fn trade(&mut self, target: usize, step: i32) -> Option<usize> {
        let mut counts: Vec<i32> = self.cards.iter().map(|c| c.adjusted_count).collect();
        if !can_step(*counts.get(target)?, step) {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for j in 0..counts.len() {
            if j == target || !can_step(counts[j], -step) {
                continue;
            }
            counts[target] += step;
            counts[j] -= step;
            let p = penalty(&self.cards, &counts);
            counts[target] -= step;
            counts[j] += step;

            if best.is_none_or(|(_, b)| p < b) {
                best = Some((j, p));
            }
        }

        let (partner, _) = best?;
        self.cards[target].adjusted_count += step;
        self.cards[partner].adjusted_count -= step;
        score_swaps(&mut self.cards);
        logd!(
            "Editor: {} {:+}, {} {:+}",
            self.cards[target].name,
            step,
            self.cards[partner].name,
            -step
        );
        Some(partner)
    }

    /// Back to the recommended counts.
    pub fn reset(&mut self) {
        for (card, &n) in self.cards.iter_mut().zip(&self.recommended) {
            card.adjusted_count = n;
        }
        score_swaps(&mut self.cards);
    }

    /// Card order for display. Stable, so equal keys keep table order.
    pub fn sorted_order(&self, key: SortKey, ascending: bool) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cards.len()).collect();
        order.sort_by(|&a, &b| {
            let ord = self.compare(key, a, b);
            if ascending { ord } else { ord.reverse() }
        });
        order
    }

    fn compare(&self, key: SortKey, a: usize, b: usize) -> Ordering {
        let (ca, cb) = (&self.cards[a], &self.cards[b]);
        let num = |x: f64, y: f64| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
        match key {
            SortKey::Name => ca.name.cmp(&cb.name),
            SortKey::Average => num(ca.weighted_average, cb.weighted_average),
            SortKey::Recommended => self.recommended(a).cmp(&self.recommended(b)),
            SortKey::Current => ca.adjusted_count.cmp(&cb.adjusted_count),
            SortKey::Removability => num(ca.removability.sort_value(), cb.removability.sort_value()),
            SortKey::Addability => num(ca.addability.sort_value(), cb.addability.sort_value()),
        }
    }

    /// Current counts rendered like an analysis result, summary row last.
    pub fn results(&self) -> Vec<CardResult> {
        let mut out: Vec<CardResult> = self.cards.iter().map(CardStat::to_result).collect();
        out.push(CardResult::summary(DECK_SIZE));
        out
    }

    /// One entry per copy, in table order, ready for the deck-code encoder.
    pub fn card_names(&self) -> Vec<String> {
        self.cards
            .iter()
            .flat_map(|c| std::iter::repeat_n(c.name.clone(), c.adjusted_count.max(0) as usize))
            .collect()
    }
}
