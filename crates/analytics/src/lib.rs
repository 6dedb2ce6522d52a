//! `dairysense-analytics`
//!
//! **Responsibility:** the pure statistics layer of the engine.
//!
//! This crate is deliberately free of infrastructure:
//! - No I/O, no async, no connection handles.
//! - Inputs are plain values supplied by callers (store/API).
//! - Every function is deterministic: same input, same output.

pub mod churn;
pub mod forecast;

pub use churn::churn_probability;
pub use forecast::{
    forecast_consumption, ConsumptionForecast, DeliveryRecord, ForecastStatus,
    FORECAST_HORIZON_DAYS, MIN_HISTORY_POINTS,
};
