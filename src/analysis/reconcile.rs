// src/analysis/reconcile.rs
// Greedy single-copy steps until the deck holds exactly DECK_SIZE cards.

use super::card::CardStat;
use crate::config::consts::{DECK_SIZE, MAX_COPIES, PENALTY_EPSILON};

/// Weighted least-squares distance of `counts` from the cards' averages.
pub fn penalty(cards: &[CardStat], counts: &[i32]) -> f64 {
    cards
        .iter()
        .zip(counts)
        .map(|(card, &n)| {
            let z = (n as f64 - card.weighted_average) / (card.std_dev + PENALTY_EPSILON);
            z * z
        })
        .sum()
}

/// Penalty after moving card `i` by `step` copies. `counts` is restored.
pub fn step_penalty(cards: &[CardStat], counts: &mut [i32], i: usize, step: i32) -> f64 {
    counts[i] += step;
    let p = penalty(cards, counts);
    counts[i] -= step;
    p
}

/// Whether card `i` may move one copy in direction `step` (+1 / -1).
pub fn can_step(count: i32, step: i32) -> bool {
    if step > 0 { count < MAX_COPIES } else { count > 0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Σ of the starting counts.
    pub start_sum: i32,
    pub steps: usize,
    /// Cards still missing (negative) or in excess (positive) when no card could move.
    pub remaining: i32,
}

impl ReconcileReport {
    pub fn is_balanced(&self) -> bool {
        self.remaining == 0
    }
}

/// Adjust `adjusted_count` in place until the total is `DECK_SIZE` or no card can move.
pub fn reconcile(cards: &mut [CardStat]) -> ReconcileReport {
    let mut counts: Vec<i32> = cards.iter().map(|c| c.adjusted_count).collect();
    let start_sum: i32 = counts.iter().sum();
    let mut excess = start_sum - DECK_SIZE;
    let mut steps = 0usize;

    if excess == 0 {
        return ReconcileReport { start_sum, steps, remaining: 0 };
    }
    let step = if excess > 0 { -1 } else { 1 };

    while excess != 0 {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..counts.len() {
            if !can_step(counts[i], step) {
                continue;
            }
            let p = step_penalty(cards, &mut counts, i, step);
            if best.is_none_or(|(_, b)| p < b) {
                best = Some((i, p));
            }
        }

        let Some((i, _)) = best else {
            logw!("Reconcile: stopped {excess:+} off {DECK_SIZE}, no card can move");
            break;
        };
        counts[i] += step;
        excess += step;
        steps += 1;
    }

    for (card, n) in cards.iter_mut().zip(counts) {
        card.adjusted_count = n;
    }
    logd!("Reconcile: {start_sum} → {} in {steps} steps", start_sum + (steps as i32) * step);

    ReconcileReport { start_sum, steps, remaining: excess }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(n: usize) -> Vec<CardStat> {
        (0..n).map(|i| CardStat::new(format!("F{i}"), 3.0, 0.0)).collect()
    }

    fn total(cards: &[CardStat]) -> i32 {
        cards.iter().map(|c| c.adjusted_count).sum()
    }

    #[test]
    fn balanced_deck_is_untouched() {
        let mut cards = filler(13);
        cards.push(CardStat::new("A", 1.2, 0.3));
        let before = cards.clone();
        let report = reconcile(&mut cards);
        assert_eq!(report, ReconcileReport { start_sum: 40, steps: 0, remaining: 0 });
        assert_eq!(cards, before);
    }

    #[test]
    fn two_additions_follow_penalty() {
        // 12 × 3 + A(1) + B(0) + C(1) = 38
        let mut cards = filler(12);
        cards.push(CardStat::new("A", 0.6, 0.24));
        cards.push(CardStat::new("B", 0.4, 0.24));
        cards.push(CardStat::new("C", 1.4, 0.16));
        let report = reconcile(&mut cards);

        assert_eq!(report.steps, 2);
        assert!(report.is_balanced());
        assert_eq!(total(&cards), 40);
        let tail: Vec<i32> = cards[12..].iter().map(|c| c.adjusted_count).collect();
        assert_eq!(tail, vec![1, 1, 2]);
    }

    #[test]
    fn ties_go_to_first_index() {
        let mut cards = filler(13);
        cards.push(CardStat::new("D", 0.4, 0.24));
        cards.push(CardStat::new("E", 0.4, 0.24));
        reconcile(&mut cards);
        assert_eq!(cards[13].adjusted_count, 1);
        assert_eq!(cards[14].adjusted_count, 0);
    }

    #[test]
    fn removal_prefers_cheapest_card() {
        // 14 × 3 = 42; the volatile card absorbs both removals
        let mut cards = filler(13);
        cards.push(CardStat::new("Loose", 2.6, 1.0));
        let report = reconcile(&mut cards);
        assert!(report.is_balanced());
        assert_eq!(cards[13].adjusted_count, 1);
    }

    #[test]
    fn starved_deck_stops_early() {
        let mut cards = filler(10);
        let report = reconcile(&mut cards);
        assert_eq!(report.steps, 0);
        assert_eq!(report.remaining, -10);
        assert_eq!(total(&cards), 30);
    }

    #[test]
    fn penalty_of_exact_fit_is_zero() {
        let cards = filler(3);
        assert_eq!(penalty(&cards, &[3, 3, 3]), 0.0);
        let mut counts = vec![3, 3, 3];
        assert!(step_penalty(&cards, &mut counts, 1, -1) > 1e11);
        assert_eq!(counts, vec![3, 3, 3]);
    }
}
