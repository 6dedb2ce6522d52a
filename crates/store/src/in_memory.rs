//! In-memory analytics store.
//!
//! Intended for tests. Seeded per user; can also be told to fail so the
//! API's data-access error path is exercisable without a database.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use dairysense_analytics::DeliveryRecord;
use dairysense_core::{AnalyticsError, AnalyticsResult, UserId};

use crate::AnalyticsStore;

#[derive(Debug, Default, Clone)]
struct UserData {
    history: Vec<DeliveryRecord>,
    pause_count: i64,
    missed_count: i64,
}

/// Test double for [`AnalyticsStore`].
#[derive(Debug, Default)]
pub struct InMemoryAnalyticsStore {
    users: RwLock<HashMap<UserId, UserData>>,
    failure: Option<String>,
}

impl InMemoryAnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every query fails with the given data-access message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            failure: Some(message.into()),
        }
    }

    // Seeding writes through a poisoned lock; every write replaces the
    // user's fields whole, so the map stays coherent either way.
    pub fn seed_history(&self, user_id: UserId, history: Vec<DeliveryRecord>) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.entry(user_id).or_default().history = history;
    }

    pub fn seed_counts(&self, user_id: UserId, pause_count: i64, missed_count: i64) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let data = users.entry(user_id).or_default();
        data.pause_count = pause_count;
        data.missed_count = missed_count;
    }

    fn check_failure(&self) -> AnalyticsResult<()> {
        match &self.failure {
            Some(msg) => Err(AnalyticsError::data_access(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AnalyticsStore for InMemoryAnalyticsStore {
    async fn delivery_history(&self, user_id: UserId) -> AnalyticsResult<Vec<DeliveryRecord>> {
        self.check_failure()?;
        let users = self
            .users
            .read()
            .map_err(|_| AnalyticsError::data_access("lock poisoned"))?;
        let mut history = users
            .get(&user_id)
            .map(|d| d.history.clone())
            .unwrap_or_default();
        // Match the loader contract: ascending by date.
        history.sort_by_key(|r| r.date);
        Ok(history)
    }

    async fn paused_subscription_count(&self, user_id: UserId) -> AnalyticsResult<i64> {
        self.check_failure()?;
        let users = self
            .users
            .read()
            .map_err(|_| AnalyticsError::data_access("lock poisoned"))?;
        Ok(users.get(&user_id).map(|d| d.pause_count).unwrap_or(0))
    }

    async fn missed_delivery_count(&self, user_id: UserId) -> AnalyticsResult<i64> {
        self.check_failure()?;
        let users = self
            .users
            .read()
            .map_err(|_| AnalyticsError::data_access("lock poisoned"))?;
        Ok(users.get(&user_id).map(|d| d.missed_count).unwrap_or(0))
    }
}
