//! Artisan Inquiry Intake Core
//!
//! Form state, validation, and indicative pricing for commission inquiries
//! on the ArtisanCraft marketplace. Visitors describe the piece they want
//! across four form sections and see a live price range before submitting.
//!
//! ## Architecture
//!
//! - **Domain Layer**: inquiry aggregate, value objects, store events, and
//!   the pure estimation and validation services
//! - **Application Layer**: the `InquiryStore` single source of truth with
//!   its submission lifecycle
//! - **Ports Layer**: `Notifier` and `Transmitter` collaborator interfaces
//! - **Infrastructure Layer**: in-memory implementations for tests and
//!   unwired embeddings
//!
//! ## Key flows
//!
//! - Field edits clear that field's error immediately and retrigger the
//!   cost estimator when a pricing input changed
//! - Submission validates first; nothing leaves the store until the record
//!   passes, and a failed delivery preserves every field for retry
//! - At most one submission is in flight per store; a duplicate call is a
//!   no-op
//! - Every state transition is published to subscribers so a presentation
//!   layer can re-render

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{InquiryStore, IntakeSettings, StoreSnapshot};
pub use domain::aggregates::{
    BudgetRange, FieldError, FieldId, FieldValue, InquiryRecord, InquiryType, Material,
    PackagingStyle, ProjectType, ShippingMethod, Tab, Timeline, Urgency, MESSAGE_LIMIT,
};
pub use domain::catalog::{field_options, ChoiceOption, SectionItem, MATERIAL_CATALOG, SECTIONS};
pub use domain::events::StoreEvent;
pub use domain::services::{
    CostEstimator, EstimatedCost, InquiryValidator, ValidationErrors, MIN_MESSAGE_CHARS,
};
pub use domain::value_objects::{Email, EmailError, EntityId, Money, Quantity};
pub use infrastructure::{BufferedNotifier, InMemoryTransmitter, Notification, TracingNotifier};
pub use ports::{
    DeliveryReceipt, Notifier, Severity, StoreObserver, Transmitter, TransmitError,
};
