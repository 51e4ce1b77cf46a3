//! Analytics sink trait.
//!
//! View-models report user interactions through this abstraction.
//! Implementations decide where events go (a tracing log, a vendor SDK,
//! a test recorder).

use crate::events::AnalyticsEvent;

/// Trait for receiving analytics events.
///
/// `log_event` is called synchronously from view-model operations and
/// must not block.
pub trait AnalyticsSink: Send + Sync {
    /// Record one named event.
    fn log_event(&self, event: &AnalyticsEvent);
}

/// An analytics sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl NoopAnalytics {
    pub const fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for NoopAnalytics {
    fn log_event(&self, _event: &AnalyticsEvent) {}
}

/// An analytics sink that keeps every event in memory.
///
/// Used by tests to assert which events a flow produced.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: std::sync::Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn log_event(&self, event: &AnalyticsEvent) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event.clone());
    }
}
