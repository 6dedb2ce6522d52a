use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use dairysense_analytics::{churn_probability, forecast_consumption};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/consumption", post(predict_consumption))
        .route("/churn", post(predict_churn))
}

pub async fn predict_consumption(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::PredictRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(json) => json,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let history = match services.store().delivery_history(body.user_id).await {
        Ok(h) => h,
        Err(e) => return errors::analytics_error_to_response(e),
    };

    let forecast = forecast_consumption(&history);

    tracing::debug!(
        user_id = %body.user_id,
        points = history.len(),
        predicted_liters = forecast.predicted_liters,
        "consumption forecast computed"
    );

    Json(dto::ConsumptionResponse::new(body.user_id, forecast)).into_response()
}

pub async fn predict_churn(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::PredictRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(json) => json,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let pause_count = match services.store().paused_subscription_count(body.user_id).await {
        Ok(n) => n,
        Err(e) => return errors::analytics_error_to_response(e),
    };
    let missed_count = match services.store().missed_delivery_count(body.user_id).await {
        Ok(n) => n,
        Err(e) => return errors::analytics_error_to_response(e),
    };

    let probability = churn_probability(pause_count, missed_count);

    tracing::debug!(
        user_id = %body.user_id,
        pause_count,
        missed_count,
        churn_probability = probability,
        "churn score computed"
    );

    Json(dto::ChurnResponse::new(body.user_id, probability)).into_response()
}
