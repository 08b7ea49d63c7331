//! Rate limit snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rate limit state as returned by `GET rate_limit`.
///
/// A snapshot only; nothing in the crate keeps it around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Per-resource limits (`core`, `search`, `graphql`, ...).
    #[serde(default)]
    pub resources: BTreeMap<String, RateLimit>,

    /// Limit of the core REST resource.
    pub rate: RateLimit,
}

/// One rate limit window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// When the window resets.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub reset: DateTime<Utc>,
    #[serde(default)]
    pub used: u64,
}

impl RateLimitStatus {
    /// Limit for a named resource, if the server reported one.
    pub fn resource(&self, name: &str) -> Option<&RateLimit> {
        self.resources.get(name)
    }
}

impl RateLimit {
    /// Returns true when no calls remain in this window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_limit() {
        let status: RateLimitStatus = serde_json::from_value(serde_json::json!({
            "resources": {
                "core": { "limit": 5000, "remaining": 4999, "reset": 1372700873, "used": 1 },
                "search": { "limit": 30, "remaining": 0, "reset": 1372697452, "used": 30 }
            },
            "rate": { "limit": 5000, "remaining": 4999, "reset": 1372700873, "used": 1 }
        }))
        .unwrap();

        assert_eq!(status.rate.remaining, 4999);
        assert_eq!(status.rate.reset.timestamp(), 1372700873);
        assert!(status.resource("search").unwrap().is_exhausted());
        assert!(status.resource("graphql").is_none());
    }
}
