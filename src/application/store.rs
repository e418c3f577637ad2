//! Inquiry Store
//!
//! Single source of truth for one form session: the inquiry record, the
//! per-field error map, the active tab, the derived cost estimate, and the
//! submission lifecycle. State lives behind interior locks so a store can be
//! shared between a rendering task and a submission task; the lock is never
//! held across the transmission await.

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use crate::application::settings::IntakeSettings;
use crate::domain::aggregates::{FieldError, FieldId, FieldValue, InquiryRecord, Material, Tab};
use crate::domain::events::StoreEvent;
use crate::domain::services::{CostEstimator, EstimatedCost, InquiryValidator, ValidationErrors};
use crate::ports::{Notifier, Severity, StoreObserver, Transmitter};

/// Submission lifecycle: idle -> validating -> (rejected -> idle |
/// submitting -> (succeeded -> idle | failed -> idle))
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
}

/// Outcome of the admission check at the front door of `submit`
enum Admission {
    InFlight,
    Rejected { error_count: usize },
    Cleared(InquiryRecord),
}

struct StoreState {
    record: InquiryRecord,
    errors: ValidationErrors,
    active_tab: Tab,
    estimate: Option<EstimatedCost>,
    phase: SubmissionPhase,
}

/// Point-in-time copy of the store for a rendering pass
#[derive(Clone, Debug)]
pub struct StoreSnapshot {
    pub record: InquiryRecord,
    pub errors: ValidationErrors,
    pub active_tab: Tab,
    pub estimate: Option<EstimatedCost>,
    pub submitting: bool,
}

/// Form state store for one inquiry session
pub struct InquiryStore {
    state: RwLock<StoreState>,
    observers: RwLock<Vec<Arc<dyn StoreObserver>>>,
    notifier: Arc<dyn Notifier>,
    transmitter: Arc<dyn Transmitter>,
    settings: IntakeSettings,
}

impl InquiryStore {
    pub fn new(notifier: Arc<dyn Notifier>, transmitter: Arc<dyn Transmitter>) -> Self {
        Self::with_settings(notifier, transmitter, IntakeSettings::default())
    }

    pub fn with_settings(
        notifier: Arc<dyn Notifier>,
        transmitter: Arc<dyn Transmitter>,
        settings: IntakeSettings,
    ) -> Self {
        Self {
            state: RwLock::new(StoreState {
                record: InquiryRecord::default(),
                errors: ValidationErrors::new(),
                active_tab: Tab::General,
                estimate: None,
                phase: SubmissionPhase::Idle,
            }),
            observers: RwLock::new(Vec::new()),
            notifier,
            transmitter,
            settings,
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    pub fn subscribe(&self, observer: Arc<dyn StoreObserver>) {
        self.observers.write().unwrap().push(observer);
    }

    fn publish(&self, events: &[StoreEvent]) {
        let observers = self.observers.read().unwrap();
        for event in events {
            for observer in observers.iter() {
                observer.on_event(event);
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn record(&self) -> InquiryRecord {
        self.state.read().unwrap().record.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.state.read().unwrap().errors.clone()
    }

    pub fn active_tab(&self) -> Tab {
        self.state.read().unwrap().active_tab
    }

    pub fn estimate(&self) -> Option<EstimatedCost> {
        self.state.read().unwrap().estimate
    }

    pub fn is_submitting(&self) -> bool {
        self.state.read().unwrap().phase == SubmissionPhase::Submitting
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().unwrap();
        StoreSnapshot {
            record: state.record.clone(),
            errors: state.errors.clone(),
            active_tab: state.active_tab,
            estimate: state.estimate,
            submitting: state.phase == SubmissionPhase::Submitting,
        }
    }

    /// Validate the current record without mutating anything
    pub fn validate(&self) -> ValidationErrors {
        InquiryValidator::validate(&self.state.read().unwrap().record)
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Update one field. Clears that field's error the instant it is
    /// edited, and recomputes the estimate when an estimation input
    /// changed.
    pub fn set_field(&self, field: FieldId, value: FieldValue) -> Result<(), FieldError> {
        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            state.record.set_field(field, value)?;
            debug!(field = field.as_str(), "field updated");
            events.push(StoreEvent::FieldChanged { field });

            if state.errors.remove(&field).is_some() {
                events.push(StoreEvent::ErrorsChanged {
                    count: state.errors.len(),
                });
            }

            if field.affects_estimate() {
                let estimate = CostEstimator::estimate(&state.record);
                debug!(estimate = ?estimate, "estimate recomputed");
                state.estimate = estimate;
                events.push(StoreEvent::EstimateChanged { estimate });
            }
        }
        self.publish(&events);
        Ok(())
    }

    /// Toggle one material; an estimation input, so the estimate always
    /// recomputes
    pub fn toggle_material(&self, material: Material) {
        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            let selected = state.record.toggle_material(material);
            debug!(material = material.as_str(), selected, "material toggled");
            events.push(StoreEvent::MaterialToggled { material, selected });

            let estimate = CostEstimator::estimate(&state.record);
            state.estimate = estimate;
            events.push(StoreEvent::EstimateChanged { estimate });
        }
        self.publish(&events);
    }

    pub fn set_active_tab(&self, tab: Tab) {
        {
            let mut state = self.state.write().unwrap();
            state.active_tab = tab;
        }
        self.publish(&[StoreEvent::TabChanged { tab }]);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Run full validation and, if it passes, deliver the inquiry through
    /// the transmitter. A second call while a submission is in flight is a
    /// no-op. The submitting flag is cleared on every completion path.
    pub async fn submit(&self) {
        let record = match self.admit() {
            Admission::InFlight => {
                warn!("submission already in flight, ignoring");
                return;
            }
            Admission::Rejected { error_count } => {
                warn!(error_count, "inquiry rejected by validation");
                self.notifier.notify(
                    Severity::Error,
                    "Please check your form",
                    "Some required fields are missing or invalid.",
                );
                self.publish(&[
                    StoreEvent::ErrorsChanged { count: error_count },
                    StoreEvent::SubmissionRejected { error_count },
                ]);
                return;
            }
            Admission::Cleared(record) => record,
        };
        self.publish(&[StoreEvent::SubmissionStarted]);

        let outcome = self.transmitter.send(&record).await;

        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            // Cleared exactly once, success or failure
            state.phase = SubmissionPhase::Idle;
            if outcome.is_ok() {
                state.record.reset();
                state.errors.clear();
                state.active_tab = Tab::General;
                state.estimate = None;
                events.push(StoreEvent::FormReset);
                events.push(StoreEvent::EstimateChanged { estimate: None });
            }
        }

        match outcome {
            Ok(receipt) => {
                info!(inquiry_id = %receipt.inquiry_id, "inquiry delivered");
                self.notifier.notify(
                    Severity::Info,
                    "Message sent successfully!",
                    &format!(
                        "Thank you {}! We'll get back to you within {} hours with a detailed response.",
                        record.name(),
                        self.settings.response_hours
                    ),
                );
                events.push(StoreEvent::SubmissionDelivered { receipt });
            }
            Err(e) => {
                warn!(error = %e, "inquiry transmission failed");
                self.notifier.notify(
                    Severity::Error,
                    "Oops! Something went wrong",
                    &format!(
                        "Please try again or contact us directly at {}.",
                        self.settings.contact_email
                    ),
                );
                events.push(StoreEvent::SubmissionFailed);
            }
        }
        self.publish(&events);
    }

    /// Front-door admission: re-entrancy guard, then full validation, under
    /// one lock so no edit interleaves mid-check
    fn admit(&self) -> Admission {
        let mut state = self.state.write().unwrap();
        if state.phase != SubmissionPhase::Idle {
            return Admission::InFlight;
        }
        state.phase = SubmissionPhase::Validating;

        let errors = InquiryValidator::validate(&state.record);
        if !errors.is_empty() {
            let error_count = errors.len();
            state.errors = errors;
            state.phase = SubmissionPhase::Idle;
            return Admission::Rejected { error_count };
        }

        state.phase = SubmissionPhase::Submitting;
        Admission::Cleared(state.record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use crate::domain::aggregates::ProjectType;
    use crate::infrastructure::memory::{BufferedNotifier, InMemoryTransmitter};
    use crate::ports::{DeliveryReceipt, TransmitError};

    /// Counts deliveries and holds each one open briefly, so a test can
    /// overlap a second submit with the first.
    #[derive(Default)]
    struct SlowTransmitter {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transmitter for SlowTransmitter {
        async fn send(&self, _record: &InquiryRecord) -> Result<DeliveryReceipt, TransmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(DeliveryReceipt::new())
        }
    }

    #[derive(Default)]
    struct CollectingObserver {
        events: Mutex<Vec<StoreEvent>>,
    }

    impl StoreObserver for CollectingObserver {
        fn on_event(&self, event: &StoreEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    impl CollectingObserver {
        fn event_types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.event_type()).collect()
        }
    }

    fn store_with(
        transmitter: Arc<dyn Transmitter>,
    ) -> (InquiryStore, Arc<BufferedNotifier>) {
        let notifier = Arc::new(BufferedNotifier::new());
        let store = InquiryStore::new(notifier.clone(), transmitter);
        (store, notifier)
    }

    fn fill_valid(store: &InquiryStore) {
        store
            .set_field(FieldId::Name, FieldValue::Text("Ada Lovelace".into()))
            .unwrap();
        store
            .set_field(FieldId::Email, FieldValue::Text("ada@example.com".into()))
            .unwrap();
        store
            .set_field(FieldId::Subject, FieldValue::Text("Custom ring".into()))
            .unwrap();
        store
            .set_field(
                FieldId::Message,
                FieldValue::Text("I would like a custom engraved silver ring.".into()),
            )
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejected_submit_performs_no_io() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        let (store, notifier) = store_with(transmitter.clone());

        store.submit().await;

        assert_eq!(transmitter.delivered_count(), 0);
        assert_eq!(store.errors().len(), 4);
        assert!(!store.is_submitting());

        let messages = notifier.take();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Error);
        assert_eq!(messages[0].title, "Please check your form");
    }

    #[tokio::test]
    async fn test_edit_clears_only_that_error() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        let (store, _notifier) = store_with(transmitter);

        store.submit().await;
        assert_eq!(store.errors().len(), 4);

        store
            .set_field(FieldId::Name, FieldValue::Text("Ada".into()))
            .unwrap();

        let errors = store.errors();
        assert_eq!(errors.len(), 3);
        assert!(!errors.contains_key(&FieldId::Name));
        assert!(errors.contains_key(&FieldId::Email));
        assert!(errors.contains_key(&FieldId::Subject));
        assert!(errors.contains_key(&FieldId::Message));
    }

    #[tokio::test]
    async fn test_successful_submit_delivers_and_resets() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        let (store, notifier) = store_with(transmitter.clone());

        fill_valid(&store);
        store.set_active_tab(Tab::Project);
        store
            .set_field(FieldId::ProjectType, FieldValue::Project(ProjectType::Pottery))
            .unwrap();
        assert!(store.estimate().is_some());

        store.submit().await;

        assert_eq!(transmitter.delivered_count(), 1);
        let delivered = transmitter.last_delivered().unwrap();
        assert_eq!(delivered.name(), "Ada Lovelace");

        // everything back to documented defaults
        assert_eq!(store.record(), InquiryRecord::default());
        assert_eq!(store.active_tab(), Tab::General);
        assert!(store.errors().is_empty());
        assert!(store.estimate().is_none());
        assert!(!store.is_submitting());

        let messages = notifier.take();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Info);
        assert!(messages[0].description.contains("Thank you Ada Lovelace"));
        assert!(messages[0].description.contains("24 hours"));
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_state() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        transmitter.fail_with("backend unreachable");
        let (store, notifier) = store_with(transmitter.clone());

        fill_valid(&store);
        store.set_active_tab(Tab::Services);
        store.submit().await;

        // record and tab intact for retry, flag cleared
        assert_eq!(store.record().name(), "Ada Lovelace");
        assert_eq!(store.active_tab(), Tab::Services);
        assert!(store.errors().is_empty());
        assert!(!store.is_submitting());
        assert_eq!(transmitter.delivered_count(), 0);

        let messages = notifier.take();
        assert_eq!(messages[0].severity, Severity::Error);
        assert_eq!(messages[0].title, "Oops! Something went wrong");
        assert!(messages[0].description.contains("hello@artisancraft.com"));

        // the store accepts a retry once the failure is resolved
        transmitter.succeed();
        store.submit().await;
        assert_eq!(transmitter.delivered_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_submit_while_in_flight_is_noop() {
        let transmitter = Arc::new(SlowTransmitter::default());
        let (store, _notifier) = store_with(transmitter.clone());

        fill_valid(&store);
        tokio::join!(store.submit(), store.submit());

        assert_eq!(transmitter.calls.load(Ordering::SeqCst), 1);
        assert!(!store.is_submitting());
    }

    #[tokio::test]
    async fn test_submitting_flag_spans_the_transmission() {
        let transmitter = Arc::new(SlowTransmitter::default());
        let notifier = Arc::new(BufferedNotifier::new());
        let store = Arc::new(InquiryStore::new(notifier, transmitter));
        fill_valid(&store);

        let handle = tokio::spawn({
            let store = store.clone();
            async move { store.submit().await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.is_submitting());

        handle.await.unwrap();
        assert!(!store.is_submitting());
    }

    #[tokio::test]
    async fn test_estimate_recomputes_on_relevant_edits() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        let (store, _notifier) = store_with(transmitter);

        store
            .set_field(FieldId::ProjectType, FieldValue::Project(ProjectType::Jewelry))
            .unwrap();
        store
            .set_field(FieldId::Quantity, FieldValue::Text("2".into()))
            .unwrap();
        store.toggle_material(Material::Gold);
        store.toggle_material(Material::Silver);

        let estimate = store.estimate().unwrap();
        assert_eq!(estimate.point().amount(), Decimal::from(280));

        // non-estimation edits leave it untouched
        store
            .set_field(FieldId::Colors, FieldValue::Text("warm tones".into()))
            .unwrap();
        assert_eq!(store.estimate().unwrap().point().amount(), Decimal::from(280));
    }

    #[tokio::test]
    async fn test_observers_see_transitions() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        let (store, _notifier) = store_with(transmitter);
        let observer = Arc::new(CollectingObserver::default());
        store.subscribe(observer.clone());

        store
            .set_field(FieldId::ProjectType, FieldValue::Project(ProjectType::Pottery))
            .unwrap();
        store.set_active_tab(Tab::Project);
        fill_valid(&store);
        store.submit().await;

        let types = observer.event_types();
        assert!(types.contains(&"inquiry.field_changed"));
        assert!(types.contains(&"inquiry.estimate_changed"));
        assert!(types.contains(&"inquiry.tab_changed"));
        assert!(types.contains(&"inquiry.submission_started"));
        assert!(types.contains(&"inquiry.submission_delivered"));
        assert!(types.contains(&"inquiry.form_reset"));
    }

    #[tokio::test]
    async fn test_snapshot_reflects_state() {
        let transmitter = Arc::new(InMemoryTransmitter::new());
        let (store, _notifier) = store_with(transmitter);

        fill_valid(&store);
        store.set_active_tab(Tab::Preferences);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.record.name(), "Ada Lovelace");
        assert_eq!(snapshot.active_tab, Tab::Preferences);
        assert!(snapshot.errors.is_empty());
        assert!(!snapshot.submitting);
    }
}
