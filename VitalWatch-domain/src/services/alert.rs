use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::warn;

/// Trait for alert delivery.
///
/// `send` is infallible at the contract level: delivery-failure handling
/// (retry, drop, log) is the notifier's internal concern and must not leak
/// into the caller's decision logic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertNotifierTrait: Send + Sync {
    /// Deliver an alert message
    async fn send(&self, message: &str);
}

/// Alert notifier that emits alerts through the tracing pipeline.
///
/// Downstream delivery (pager, dashboard, on-call rotation) is expected to
/// consume the emitted events; the decision logic never waits on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertNotifier;

impl TracingAlertNotifier {
    /// Create a new tracing-backed notifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertNotifierTrait for TracingAlertNotifier {
    async fn send(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Alert notifier that buffers dispatched messages in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to a
/// service and inspect delivered alerts through another.
#[derive(Debug, Clone, Default)]
pub struct BufferedAlertNotifier {
    sent: Arc<Mutex<Vec<String>>>,
}

impl BufferedAlertNotifier {
    /// Create a new notifier with an empty buffer
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Messages delivered so far, in dispatch order
    pub fn sent_messages(&self) -> Vec<String> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl AlertNotifierTrait for BufferedAlertNotifier {
    async fn send(&self, message: &str) {
        match self.sent.lock() {
            Ok(mut sent) => sent.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
