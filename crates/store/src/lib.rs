//! `dairysense-store` — data access for the analytics engine.
//!
//! Everything the engine knows about persistence lives here:
//! - [`config::StoreConfig`]: connection parameters, built from the
//!   environment once at startup and passed in explicitly.
//! - [`AnalyticsStore`]: the read-only query surface the API depends on.
//! - [`mysql::MySqlAnalyticsStore`]: the production implementation.
//! - [`in_memory::InMemoryAnalyticsStore`]: test double.
//!
//! All reads are side-effect free; failures surface as
//! [`AnalyticsError::DataAccess`](dairysense_core::AnalyticsError) with no
//! retry or partial-result handling.

use async_trait::async_trait;

use dairysense_analytics::DeliveryRecord;
use dairysense_core::{AnalyticsResult, UserId};

pub mod config;
pub mod in_memory;
pub mod mysql;

pub use config::StoreConfig;
pub use in_memory::InMemoryAnalyticsStore;
pub use mysql::MySqlAnalyticsStore;

/// Historical range (days) of delivery data fed into the forecaster.
pub const LOOKBACK_DAYS: u32 = 90;

/// Window (days) over which missed deliveries count toward churn.
pub const MISSED_WINDOW_DAYS: u32 = 30;

/// Read-only query surface over the subscription data store.
///
/// One implementation per backing store; handlers only see this trait so
/// router tests can run against the in-memory double.
#[async_trait]
pub trait AnalyticsStore: Send + Sync + 'static {
    /// Ordered (date, quantity) pairs for the user's deliveries in the most
    /// recent [`LOOKBACK_DAYS`], restricted to delivered / out-for-delivery
    /// statuses, ascending by date. Empty when nothing matches.
    async fn delivery_history(&self, user_id: UserId) -> AnalyticsResult<Vec<DeliveryRecord>>;

    /// Number of the user's subscriptions currently paused.
    async fn paused_subscription_count(&self, user_id: UserId) -> AnalyticsResult<i64>;

    /// Number of the user's missed deliveries in the last
    /// [`MISSED_WINDOW_DAYS`].
    async fn missed_delivery_count(&self, user_id: UserId) -> AnalyticsResult<i64>;
}
