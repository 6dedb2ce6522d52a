//! Consumption trend forecasting.
//!
//! Model:
//! - Map each delivery date to its ordinal day number.
//! - Fit a least-squares line of quantity against ordinal day.
//! - Project the line over the 30 days following the last observation,
//!   floor each projection at zero, and sum.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum number of observations before a regression is attempted.
///
/// Fixed policy, not configuration: below this the forecast reports
/// `InsufficientData` without fitting anything.
pub const MIN_HISTORY_POINTS: usize = 5;

/// Number of future days projected and summed into the forecast total.
pub const FORECAST_HORIZON_DAYS: u32 = 30;

/// One delivered (or out-for-delivery) quantity on a calendar date.
///
/// Produced by the store, immutable, scoped to a single request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub date: NaiveDate,
    pub quantity: f64,
}

impl DeliveryRecord {
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self { date, quantity }
    }
}

/// Outcome classification of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    Success,
    InsufficientData,
}

/// Forecast output: total projected liters over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionForecast {
    /// Always >= 0, rounded to 2 decimals.
    pub predicted_liters: f64,
    pub status: ForecastStatus,
}

impl ConsumptionForecast {
    fn insufficient_data() -> Self {
        Self {
            predicted_liters: 0.0,
            status: ForecastStatus::InsufficientData,
        }
    }
}

/// Forecast total consumption over the next [`FORECAST_HORIZON_DAYS`] days.
///
/// The input series is expected in ascending date order (the store returns it
/// that way), but the fit only depends on the (date, quantity) pairs, not
/// their order.
pub fn forecast_consumption(history: &[DeliveryRecord]) -> ConsumptionForecast {
    if history.len() < MIN_HISTORY_POINTS {
        return ConsumptionForecast::insufficient_data();
    }

    let days: Vec<f64> = history
        .iter()
        .map(|r| f64::from(r.date.num_days_from_ce()))
        .collect();
    let quantities: Vec<f64> = history.iter().map(|r| r.quantity).collect();

    let line = TrendLine::fit(&days, &quantities);

    let last_day = days.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let total: f64 = (1..=FORECAST_HORIZON_DAYS)
        .map(|offset| line.value_at(last_day + f64::from(offset)).max(0.0))
        .sum();

    ConsumptionForecast {
        predicted_liters: round2(total),
        status: ForecastStatus::Success,
    }
}

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TrendLine {
    slope: f64,
    intercept: f64,
}

impl TrendLine {
    /// Ordinary least squares over paired samples.
    ///
    /// If the independent variable has (near-)zero variance the slope is
    /// undefined; we fall back to a flat line at the mean quantity so a
    /// same-day series still forecasts instead of producing NaN.
    fn fit(xs: &[f64], ys: &[f64]) -> Self {
        debug_assert_eq!(xs.len(), ys.len());

        let x_mean = mean(xs);
        let y_mean = mean(ys);

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - x_mean;
            sxx += dx * dx;
            sxy += dx * (y - y_mean);
        }

        if sxx <= f64::EPSILON {
            return Self {
                slope: 0.0,
                intercept: y_mean,
            };
        }

        let slope = sxy / sxx;
        Self {
            slope,
            intercept: y_mean - slope * x_mean,
        }
    }

    fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset)
    }

    fn series(quantities: &[f64]) -> Vec<DeliveryRecord> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| DeliveryRecord::new(day(i as u64), q))
            .collect()
    }

    #[test]
    fn fewer_than_five_points_reports_insufficient_data() {
        let history = series(&[2.0, 2.0, 2.0]);
        let forecast = forecast_consumption(&history);
        assert_eq!(forecast.status, ForecastStatus::InsufficientData);
        assert_eq!(forecast.predicted_liters, 0.0);
    }

    #[test]
    fn empty_history_reports_insufficient_data() {
        let forecast = forecast_consumption(&[]);
        assert_eq!(forecast.status, ForecastStatus::InsufficientData);
        assert_eq!(forecast.predicted_liters, 0.0);
    }

    #[test]
    fn constant_series_projects_flat_line_over_horizon() {
        // 10 days at 2.0 L/day: a flat trend forecasts 30 * 2.0.
        let history = series(&[2.0; 10]);
        let forecast = forecast_consumption(&history);
        assert_eq!(forecast.status, ForecastStatus::Success);
        assert!((forecast.predicted_liters - 60.0).abs() < 1e-6);
    }

    #[test]
    fn rising_trend_forecasts_more_than_flat_continuation() {
        let history = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let forecast = forecast_consumption(&history);
        assert_eq!(forecast.status, ForecastStatus::Success);
        // Last observed is 6.0/day; a rising line must beat 30 * 6.0.
        assert!(forecast.predicted_liters > 180.0);
    }

    #[test]
    fn steep_negative_trend_is_floored_at_zero() {
        let history = series(&[50.0, 40.0, 30.0, 20.0, 10.0, 0.0]);
        let forecast = forecast_consumption(&history);
        assert_eq!(forecast.status, ForecastStatus::Success);
        assert!(forecast.predicted_liters >= 0.0);
    }

    #[test]
    fn same_day_series_falls_back_to_mean_flat_line() {
        // All observations on one calendar day: zero variance in x.
        let d = day(0);
        let history: Vec<_> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .map(|&q| DeliveryRecord::new(d, q))
            .collect();
        let forecast = forecast_consumption(&history);
        assert_eq!(forecast.status, ForecastStatus::Success);
        // Mean is 3.0, so the flat projection sums to 90.0.
        assert!((forecast.predicted_liters - 90.0).abs() < 1e-6);
    }

    #[test]
    fn forecast_is_a_pure_function_of_the_series() {
        let history = series(&[2.5, 3.0, 2.0, 3.5, 2.5, 3.0, 2.0]);
        assert_eq!(forecast_consumption(&history), forecast_consumption(&history));
    }

    #[test]
    fn result_rounds_to_two_decimals() {
        let history = series(&[1.111, 1.111, 1.111, 1.111, 1.111]);
        let forecast = forecast_consumption(&history);
        let scaled = forecast.predicted_liters * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ForecastStatus::InsufficientData).unwrap(),
            serde_json::json!("insufficient_data")
        );
        assert_eq!(
            serde_json::to_value(ForecastStatus::Success).unwrap(),
            serde_json::json!("success")
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: forecasts never go negative, whatever the trend.
            #[test]
            fn predicted_liters_is_never_negative(
                quantities in prop::collection::vec(0.0f64..1000.0, 5..90)
            ) {
                let history = series(&quantities);
                let forecast = forecast_consumption(&history);
                prop_assert_eq!(forecast.status, ForecastStatus::Success);
                prop_assert!(forecast.predicted_liters >= 0.0);
            }

            /// Property: short series always report insufficient data.
            #[test]
            fn short_series_never_fits(
                quantities in prop::collection::vec(0.0f64..1000.0, 0..5)
            ) {
                let history = series(&quantities);
                let forecast = forecast_consumption(&history);
                prop_assert_eq!(forecast.status, ForecastStatus::InsufficientData);
                prop_assert_eq!(forecast.predicted_liters, 0.0);
            }
        }
    }
}
