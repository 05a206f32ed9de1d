// src/analysis/scoring.rs
use super::card::{CardStat, SwapScore};
use super::reconcile::{can_step, step_penalty};

/// Score each card's single-copy removal and addition against the current
/// counts. Directions a card cannot take are reset to `Unscored`.
pub fn score_swaps(cards: &mut [CardStat]) {
    let mut counts: Vec<i32> = cards.iter().map(|c| c.adjusted_count).collect();

    let mut scores = Vec::with_capacity(cards.len());
    for i in 0..cards.len() {
        let mut score = |step: i32| {
            if can_step(counts[i], step) {
                SwapScore::from_penalty(step_penalty(cards, &mut counts, i, step))
            } else {
                SwapScore::Unscored
            }
        };
        let removability = score(-1);
        let addability = score(1);
        scores.push((removability, addability));
    }

    for (card, (removability, addability)) in cards.iter_mut().zip(scores) {
        card.removability = removability;
        card.addability = addability;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_directions_stay_unscored() {
        let mut cards = vec![
            CardStat::new("Zero", 0.2, 0.16),
            CardStat::new("Full", 2.9, 0.09),
            CardStat::new("Mid", 1.2, 0.5),
        ];
        score_swaps(&mut cards);

        assert_eq!(cards[0].removability, SwapScore::Unscored);
        assert!(matches!(cards[0].addability, SwapScore::Finite(_)));
        assert_eq!(cards[1].addability, SwapScore::Unscored);
        assert!(matches!(cards[1].removability, SwapScore::Finite(_)));
        assert!(matches!(cards[2].removability, SwapScore::Finite(_)));
        assert!(matches!(cards[2].addability, SwapScore::Finite(_)));
    }

    #[test]
    fn score_is_inverse_penalty() {
        // 1 copy at average 1.5, std 0.5: removing gives z = 3, rest stays exact
        let mut cards = vec![CardStat::new("A", 1.5, 0.25)];
        cards[0].adjusted_count = 1;
        score_swaps(&mut cards);
        let eps = 1e-6;
        let z_down = 1.5 / (0.5 + eps);
        let z_up = 0.5 / (0.5 + eps);
        assert_eq!(cards[0].removability, SwapScore::Finite(1.0 / (z_down * z_down)));
        assert_eq!(cards[0].addability, SwapScore::Finite(1.0 / (z_up * z_up)));
    }

    #[test]
    fn zero_penalty_scores_infinite() {
        // the step lands every card exactly on its average
        let mut cards = vec![CardStat::new("A", 2.0, 0.0), CardStat::new("B", 1.0, 0.0)];
        cards[0].adjusted_count = 3;
        score_swaps(&mut cards);
        assert_eq!(cards[0].removability, SwapScore::Infinite);
        assert_eq!(cards[0].addability, SwapScore::Unscored);
    }

    #[test]
    fn rescoring_clears_stale_scores() {
        let mut cards = vec![CardStat::new("A", 1.0, 0.25)];
        score_swaps(&mut cards);
        assert!(matches!(cards[0].addability, SwapScore::Finite(_)));
        cards[0].adjusted_count = 3;
        score_swaps(&mut cards);
        assert_eq!(cards[0].addability, SwapScore::Unscored);
    }
}
