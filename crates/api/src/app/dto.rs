//! Request/response DTOs and JSON mapping.

use serde::{Deserialize, Serialize};

use dairysense_analytics::{ConsumptionForecast, ForecastStatus};
use dairysense_core::UserId;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct ConsumptionResponse {
    pub user_id: UserId,
    pub predicted_liters: f64,
    pub status: ForecastStatus,
}

impl ConsumptionResponse {
    pub fn new(user_id: UserId, forecast: ConsumptionForecast) -> Self {
        Self {
            user_id,
            predicted_liters: forecast.predicted_liters,
            status: forecast.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChurnResponse {
    pub user_id: UserId,
    pub churn_probability: f64,
    pub status: &'static str,
}

impl ChurnResponse {
    pub fn new(user_id: UserId, churn_probability: f64) -> Self {
        Self {
            user_id,
            churn_probability,
            status: "success",
        }
    }
}
