// src/analysis/weights.rs
// Per-sample weights from recency and rating, and weighted moments.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::config::options::WeightingOptions;

/// One weight per sample. Dates and ratings may be shorter than `samples`,
/// unparseable entries leave their position untouched.
pub fn sample_weights(
    samples: usize,
    dates: &[String],
    ratings: &[String],
    opts: &WeightingOptions,
    now: NaiveDateTime,
) -> Vec<f64> {
    let mut weights = vec![1.0; samples];

    for (w, date) in weights.iter_mut().zip(dates) {
        if let Some(f) = recency_factor(date, opts, now) {
            *w *= f;
        }
    }
    for (w, rating) in weights.iter_mut().zip(ratings) {
        if let Some(f) = rating_factor(rating, opts) {
            *w *= f;
        }
    }
    weights
}

/// Linear decay from 1.0 today down to the floor after `2 * half_life_days`.
pub fn recency_factor(date: &str, opts: &WeightingOptions, now: NaiveDateTime) -> Option<f64> {
    let day = infer_date(date, now)?;
    let days_ago = (now.date() - day).num_days() as f64;
    let decayed = 1.0 - days_ago / (opts.half_life_days * 2.0);
    Some(decayed.max(opts.min_recency_weight))
}

pub fn rating_factor(rating: &str, opts: &WeightingOptions) -> Option<f64> {
    let r: i64 = rating.trim().parse().ok()?;
    let steps = (r - opts.rating_baseline) as f64 / opts.rating_step;
    Some(1.0 + (steps * opts.rating_bonus_per_step).max(0.0))
}

/// `month/day` without a year: this year, or last year if that lands in the future.
/// Feb 29 that does not exist in the chosen year is unparseable.
pub fn infer_date(md: &str, now: NaiveDateTime) -> Option<NaiveDate> {
    let (m, d) = parse_month_day(md)?;
    let today = now.date();
    let this_year = NaiveDate::from_ymd_opt(today.year(), m, d)?;
    if this_year > today {
        NaiveDate::from_ymd_opt(today.year() - 1, m, d)
    } else {
        Some(this_year)
    }
}

fn parse_month_day(s: &str) -> Option<(u32, u32)> {
    let (m, d) = s.trim().split_once('/')?;
    Some((small_number(m)?, small_number(d)?))
}

fn small_number(s: &str) -> Option<u32> {
    let ok = (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if ok { s.parse().ok() } else { None }
}

/// Sum of weights, with an exact zero replaced by 1.
pub fn total_weight(weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    if total == 0.0 { 1.0 } else { total }
}

/// Weighted mean and variance of `counts` (same length as `weights`).
pub fn weighted_moments(counts: &[i64], weights: &[f64], total: f64) -> (f64, f64) {
    let numerator: f64 = counts.iter().zip(weights).map(|(&c, &w)| c as f64 * w).sum();
    let average = numerator / total;
    let spread: f64 = counts
        .iter()
        .zip(weights)
        .map(|(&c, &w)| w * (c as f64 - average).powi(2))
        .sum();
    (average, spread / total)
}
