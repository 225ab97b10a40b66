//! Notification delivery configuration.

use serde::{Deserialize, Serialize};

/// Notification delivery settings.
///
/// Delivery is pull-based: clients re-query on a fixed interval. The
/// interval is surfaced through the API so clients and server agree on
/// the staleness bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Recommended client polling interval in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: default_poll_interval(),
        }
    }
}

fn default_poll_interval() -> u64 {
    30
}
