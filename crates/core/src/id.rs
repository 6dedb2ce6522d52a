//! Strongly-typed identifiers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Identifier of a subscription customer.
///
/// The upstream schema keys users by integer id, so this wraps `u64` rather
/// than a UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<u64>()
            .map_err(|e| AnalyticsError::validation(format!("UserId: {e}")))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_from_decimal_string() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id, UserId::new(42));
    }

    #[test]
    fn user_id_rejects_non_numeric_input() {
        let err = "abc".parse::<UserId>().unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation(_)));
    }
}
