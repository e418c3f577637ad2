//! Application layer
//!
//! The inquiry store and its deployment settings.

pub mod settings;
pub mod store;

pub use settings::IntakeSettings;
pub use store::{InquiryStore, StoreSnapshot};
