//! Churn risk heuristic.
//!
//! Not a learned model: a fixed additive score over two behavioral signals.
//! Kept next to the forecaster so both prediction surfaces live in one
//! place, but deliberately trivial.

/// Baseline probability assigned to every customer.
const BASE_PROBABILITY: f64 = 0.1;

/// Added when the customer has any paused subscription.
const PAUSE_WEIGHT: f64 = 0.4;

/// Added when missed deliveries in the window exceed [`MISSED_THRESHOLD`].
const MISSED_WEIGHT: f64 = 0.3;

/// Missed deliveries tolerated before the missed-delivery signal fires.
const MISSED_THRESHOLD: i64 = 2;

/// Upper cap on the reported probability.
const MAX_PROBABILITY: f64 = 0.99;

/// Combine pause and missed-delivery counts into a churn probability.
///
/// Always in `[0.1, 0.99]`, and monotone in both inputs: pausing a
/// subscription or missing more deliveries never lowers the score.
pub fn churn_probability(pause_count: i64, missed_count: i64) -> f64 {
    let mut probability = BASE_PROBABILITY;
    if pause_count > 0 {
        probability += PAUSE_WEIGHT;
    }
    if missed_count > MISSED_THRESHOLD {
        probability += MISSED_WEIGHT;
    }
    probability.min(MAX_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_customer_scores_baseline() {
        assert!((churn_probability(0, 0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn one_pause_no_misses_scores_half() {
        assert!((churn_probability(1, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pause_plus_many_misses_scores_point_eight() {
        assert!((churn_probability(1, 5) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn misses_at_threshold_do_not_fire_the_signal() {
        assert!((churn_probability(0, 2) - 0.1).abs() < 1e-12);
        assert!((churn_probability(0, 3) - 0.4).abs() < 1e-12);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: probability stays inside [0.1, 0.99].
            #[test]
            fn probability_is_bounded(pauses in 0i64..10_000, misses in 0i64..10_000) {
                let p = churn_probability(pauses, misses);
                prop_assert!((0.1..=0.99).contains(&p));
            }

            /// Property: adding a pause never lowers the score.
            #[test]
            fn monotone_in_pauses(pauses in 0i64..10_000, misses in 0i64..10_000) {
                prop_assert!(churn_probability(pauses + 1, misses) >= churn_probability(pauses, misses));
            }

            /// Property: missing more deliveries never lowers the score.
            #[test]
            fn monotone_in_misses(pauses in 0i64..10_000, misses in 0i64..10_000) {
                prop_assert!(churn_probability(pauses, misses + 1) >= churn_probability(pauses, misses));
            }
        }
    }
}
