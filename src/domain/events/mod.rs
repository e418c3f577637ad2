//! Store Events
//!
//! Every state transition in the inquiry store is published to subscribers
//! so a presentation layer can re-render, and independent derivations stay
//! decoupled from the mutation path.

use crate::domain::aggregates::{FieldId, Material, Tab};
use crate::domain::services::EstimatedCost;
use crate::ports::DeliveryReceipt;

/// State-change notification emitted by the inquiry store
#[derive(Clone, Debug)]
pub enum StoreEvent {
    FieldChanged { field: FieldId },
    MaterialToggled { material: Material, selected: bool },
    ErrorsChanged { count: usize },
    EstimateChanged { estimate: Option<EstimatedCost> },
    TabChanged { tab: Tab },
    SubmissionStarted,
    SubmissionRejected { error_count: usize },
    SubmissionDelivered { receipt: DeliveryReceipt },
    SubmissionFailed,
    FormReset,
}

impl StoreEvent {
    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FieldChanged { .. } => "inquiry.field_changed",
            Self::MaterialToggled { .. } => "inquiry.material_toggled",
            Self::ErrorsChanged { .. } => "inquiry.errors_changed",
            Self::EstimateChanged { .. } => "inquiry.estimate_changed",
            Self::TabChanged { .. } => "inquiry.tab_changed",
            Self::SubmissionStarted => "inquiry.submission_started",
            Self::SubmissionRejected { .. } => "inquiry.submission_rejected",
            Self::SubmissionDelivered { .. } => "inquiry.submission_delivered",
            Self::SubmissionFailed => "inquiry.submission_failed",
            Self::FormReset => "inquiry.form_reset",
        }
    }
}
