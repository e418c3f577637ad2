//! In-memory collaborator implementations
//!
//! Used by tests and by embedders that have not wired a real backend yet.

use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::aggregates::InquiryRecord;
use crate::domain::value_objects::EntityId;
use crate::ports::{DeliveryReceipt, Notifier, Severity, Transmitter, TransmitError};

/// In-memory transmitter holding every delivered inquiry, with a failure
/// switch for exercising the error path
#[derive(Default)]
pub struct InMemoryTransmitter {
    delivered: DashMap<String, InquiryRecord>,
    order: Mutex<Vec<String>>,
    fail_with: RwLock<Option<String>>,
}

impl InMemoryTransmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `send` fail with the given reason
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.fail_with.write().unwrap() = Some(reason.into());
    }

    /// Restore normal delivery
    pub fn succeed(&self) {
        *self.fail_with.write().unwrap() = None;
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered.len()
    }

    pub fn find(&self, id: &EntityId) -> Option<InquiryRecord> {
        self.delivered.get(id.as_str()).map(|e| e.value().clone())
    }

    pub fn last_delivered(&self) -> Option<InquiryRecord> {
        let order = self.order.lock().unwrap();
        let id = order.last()?;
        self.delivered.get(id).map(|e| e.value().clone())
    }
}

#[async_trait]
impl Transmitter for InMemoryTransmitter {
    async fn send(&self, record: &InquiryRecord) -> Result<DeliveryReceipt, TransmitError> {
        if let Some(reason) = self.fail_with.read().unwrap().clone() {
            return Err(TransmitError::Transport(reason));
        }

        let receipt = DeliveryReceipt {
            inquiry_id: EntityId::new(),
            accepted_at: Utc::now(),
        };
        self.delivered
            .insert(receipt.inquiry_id.to_string(), record.clone());
        self.order.lock().unwrap().push(receipt.inquiry_id.to_string());
        Ok(receipt)
    }
}

/// One captured user-facing message
#[derive(Clone, Debug)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

/// Notifier that buffers messages for inspection
#[derive(Default)]
pub struct BufferedNotifier {
    messages: Mutex<Vec<Notification>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the captured messages
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.messages.lock().unwrap())
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, severity: Severity, title: &str, description: &str) {
        self.messages.lock().unwrap().push(Notification {
            severity,
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

/// Notifier that forwards messages onto the log, for headless embeddings
#[derive(Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, title: &str, description: &str) {
        match severity {
            Severity::Info => tracing::info!(title = %title, "{}", description),
            Severity::Error => tracing::error!(title = %title, "{}", description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transmitter_stores_delivered_records() {
        let transmitter = InMemoryTransmitter::new();

        let mut record = InquiryRecord::default();
        record
            .set_field(
                crate::domain::aggregates::FieldId::Name,
                crate::domain::aggregates::FieldValue::Text("Ada".into()),
            )
            .unwrap();

        let receipt = transmitter.send(&record).await.unwrap();

        assert_eq!(transmitter.delivered_count(), 1);
        let stored = transmitter.find(&receipt.inquiry_id).unwrap();
        assert_eq!(stored.name(), "Ada");
    }

    #[tokio::test]
    async fn test_transmitter_failure_mode() {
        let transmitter = InMemoryTransmitter::new();
        transmitter.fail_with("backend down");

        let outcome = transmitter.send(&InquiryRecord::default()).await;
        assert!(matches!(outcome, Err(TransmitError::Transport(_))));
        assert_eq!(transmitter.delivered_count(), 0);

        transmitter.succeed();
        assert!(transmitter.send(&InquiryRecord::default()).await.is_ok());
    }

    #[test]
    fn test_buffered_notifier_drains() {
        let notifier = BufferedNotifier::new();
        notifier.notify(Severity::Info, "Hello", "world");

        let messages = notifier.take();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].title, "Hello");
        assert!(notifier.take().is_empty());
    }
}
