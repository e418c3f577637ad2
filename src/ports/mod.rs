//! Ports module (Hexagonal Architecture)
//!
//! Interfaces to the two injected collaborators the core depends on, plus
//! the subscription seam exposed to the presentation layer. The core never
//! lets a collaborator fault escape: transmission failures are absorbed
//! into notifications at the store boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::aggregates::InquiryRecord;
use crate::domain::events::StoreEvent;
use crate::domain::value_objects::EntityId;

/// Weight of a user-facing message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Transient user-facing messaging port. Fire-and-forget; the core expects
/// no answer.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, description: &str);
}

/// Proof that an inquiry reached the backend
#[derive(Clone, Debug)]
pub struct DeliveryReceipt {
    pub inquiry_id: EntityId,
    pub accepted_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    pub fn new() -> Self {
        Self {
            inquiry_id: EntityId::new(),
            accepted_at: Utc::now(),
        }
    }
}

impl Default for DeliveryReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Inquiry transmission port
#[async_trait]
pub trait Transmitter: Send + Sync {
    /// Deliver a validated inquiry. The core treats every error variant
    /// uniformly; there is no differentiated retry policy.
    async fn send(&self, record: &InquiryRecord) -> Result<DeliveryReceipt, TransmitError>;
}

/// Transmission error type
#[derive(Debug, Clone, Error)]
pub enum TransmitError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("inquiry rejected by backend: {0}")]
    Rejected(String),
}

/// Subscription seam: observers receive every store event
pub trait StoreObserver: Send + Sync {
    fn on_event(&self, event: &StoreEvent);
}
