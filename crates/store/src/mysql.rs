//! MySQL-backed analytics store.
//!
//! Three read-only queries over the subscription schema:
//! - delivery history: `daily_deliveries` joined to `subscriptions` for the
//!   per-subscription quantity, windowed to the lookback range.
//! - paused-subscription count.
//! - missed-delivery count, windowed to the missed-delivery range.
//!
//! The pool is created once at startup and shared; sqlx handles per-request
//! connection acquisition.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::mysql::MySqlPool;
use sqlx::Row;

use dairysense_analytics::DeliveryRecord;
use dairysense_core::{AnalyticsError, AnalyticsResult, UserId};

use crate::{AnalyticsStore, StoreConfig, LOOKBACK_DAYS, MISSED_WINDOW_DAYS};

/// Production [`AnalyticsStore`] over a sqlx MySQL pool.
#[derive(Debug, Clone)]
pub struct MySqlAnalyticsStore {
    pool: MySqlPool,
}

impl MySqlAnalyticsStore {
    /// Connect using the given configuration.
    pub async fn connect(config: &StoreConfig) -> AnalyticsResult<Self> {
        let pool = MySqlPool::connect(&config.mysql_url())
            .await
            .map_err(data_access)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used when the caller owns pool construction).
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsStore for MySqlAnalyticsStore {
    async fn delivery_history(&self, user_id: UserId) -> AnalyticsResult<Vec<DeliveryRecord>> {
        let rows = sqlx::query(&delivery_history_sql())
            .bind(user_id.as_u64())
            .fetch_all(&self.pool)
            .await
            .map_err(data_access)?;

        let mut history = Vec::with_capacity(rows.len());
        for row in rows {
            let date: NaiveDate = row.try_get("date").map_err(data_access)?;
            let quantity: f64 = row.try_get("quantity").map_err(data_access)?;
            history.push(DeliveryRecord::new(date, quantity));
        }

        tracing::debug!(user_id = %user_id, rows = history.len(), "loaded delivery history");
        Ok(history)
    }

    async fn paused_subscription_count(&self, user_id: UserId) -> AnalyticsResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM subscriptions WHERE user_id = ? AND status = 'PAUSED'",
        )
        .bind(user_id.as_u64())
        .fetch_one(&self.pool)
        .await
        .map_err(data_access)?;

        row.try_get("count").map_err(data_access)
    }

    async fn missed_delivery_count(&self, user_id: UserId) -> AnalyticsResult<i64> {
        let row = sqlx::query(&missed_delivery_count_sql())
            .bind(user_id.as_u64())
            .fetch_one(&self.pool)
            .await
            .map_err(data_access)?;

        row.try_get("count").map_err(data_access)
    }
}

fn data_access(e: sqlx::Error) -> AnalyticsError {
    AnalyticsError::data_access(e.to_string())
}

// `subscriptions.quantity` is an INT column; the MySQL driver only decodes
// FLOAT/DOUBLE columns into f64, so the query casts it before it hits the wire.
fn delivery_history_sql() -> String {
    format!(
        r#"
        SELECT dd.date AS date, CAST(s.quantity AS DOUBLE) AS quantity
        FROM daily_deliveries dd
        JOIN subscriptions s ON dd.subscription_id = s.id
        WHERE dd.user_id = ?
          AND dd.status IN ('DELIVERED', 'OUT_FOR_DELIVERY')
          AND dd.date >= CURDATE() - INTERVAL {LOOKBACK_DAYS} DAY
        ORDER BY dd.date ASC
        "#
    )
}

fn missed_delivery_count_sql() -> String {
    format!(
        r#"
        SELECT COUNT(*) AS count
        FROM daily_deliveries
        WHERE user_id = ?
          AND status = 'MISSED'
          AND date >= CURDATE() - INTERVAL {MISSED_WINDOW_DAYS} DAY
        "#
    )
}
