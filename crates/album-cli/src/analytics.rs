//! Tracing-backed analytics sink.

use album_core::{AnalyticsEvent, AnalyticsSink};
use tracing::info;

/// Logs every analytics event under the `analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl TracingAnalytics {
    pub const fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for TracingAnalytics {
    fn log_event(&self, event: &AnalyticsEvent) {
        let params = event
            .params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        info!(target: "analytics", event = event.name(), "{params}");
    }
}
