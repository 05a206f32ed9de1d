// tests/properties.rs
use proptest::prelude::*;

use deck_scrape::analysis::{reconcile, scoring, weights, CardStat, SwapScore};
use deck_scrape::deckcode::{decode_id, encode_id, ID_LIMIT};

fn card() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..=3.0, 0.0f64..=2.25)
}

fn deck(min: usize, max: usize) -> impl Strategy<Value = Vec<CardStat>> {
    prop::collection::vec(card(), min..=max).prop_map(|v| {
        v.into_iter()
            .enumerate()
            .map(|(i, (avg, var))| CardStat::new(format!("c{i}"), avg, var))
            .collect()
    })
}

proptest! {
    #[test]
    fn card_ids_survive_the_code(id in 0i64..ID_LIMIT) {
        let code = encode_id(id).unwrap();
        prop_assert_eq!(code.len(), 4);
        prop_assert_eq!(decode_id(&code).unwrap(), id);
    }

    #[test]
    fn ids_outside_24_bits_are_rejected(id in prop_oneof![i64::MIN..0, ID_LIMIT..i64::MAX]) {
        prop_assert!(encode_id(id).is_err());
    }

    #[test]
    fn reconciled_counts_stay_legal(mut cards in deck(1, 30)) {
        let report = reconcile::reconcile(&mut cards);
        let total: i32 = cards.iter().map(|c| c.adjusted_count).sum();
        prop_assert!(cards.iter().all(|c| (0..=3).contains(&c.adjusted_count)));
        prop_assert_eq!(total - 40, report.remaining);

        if report.is_balanced() {
            prop_assert_eq!(total, 40);

            // a balanced deck is left alone
            let before: Vec<i32> = cards.iter().map(|c| c.adjusted_count).collect();
            let again = reconcile::reconcile(&mut cards);
            prop_assert_eq!(again.steps, 0);
            prop_assert!(again.is_balanced());
            let after: Vec<i32> = cards.iter().map(|c| c.adjusted_count).collect();
            prop_assert_eq!(before, after);
        } else if report.remaining > 0 {
            // too many copies, nothing left to remove
            prop_assert!(cards.iter().all(|c| c.adjusted_count == 0));
        } else {
            // too few copies, nothing left to add
            prop_assert!(cards.iter().all(|c| c.adjusted_count == 3));
        }
    }

    #[test]
    fn weighted_mean_recovers_the_numerator(
        samples in prop::collection::vec((0i64..=3, 0.05f64..5.0), 1..=30)
    ) {
        let (counts, ws): (Vec<i64>, Vec<f64>) = samples.into_iter().unzip();
        let total = weights::total_weight(&ws);
        let (avg, var) = weights::weighted_moments(&counts, &ws, total);

        let numerator: f64 = counts.iter().zip(&ws).map(|(&c, &w)| c as f64 * w).sum();
        prop_assert!((avg * total - numerator).abs() < 1e-9);
        prop_assert!(avg >= 0.0 && avg <= 3.0 + 1e-12);
        prop_assert!(var >= 0.0);
    }

    #[test]
    fn fourteen_cards_always_reach_forty(mut cards in deck(14, 40)) {
        let report = reconcile::reconcile(&mut cards);
        prop_assert!(report.is_balanced());
        prop_assert_eq!(cards.iter().map(|c| c.adjusted_count).sum::<i32>(), 40);
    }

    #[test]
    fn scores_exist_only_for_legal_moves(mut cards in deck(1, 20)) {
        reconcile::reconcile(&mut cards);
        scoring::score_swaps(&mut cards);
        for c in &cards {
            prop_assert_eq!(c.removability != SwapScore::Unscored, c.adjusted_count > 0);
            prop_assert_eq!(c.addability != SwapScore::Unscored, c.adjusted_count < 3);
        }
    }
}
