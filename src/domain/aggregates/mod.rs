//! Aggregates module
//!
//! The inquiry record and the closed field/option catalogs it is built from.

pub mod inquiry;
pub mod options;

pub use inquiry::{FieldError, FieldId, FieldValue, InquiryRecord, MESSAGE_LIMIT};
pub use options::{
    BudgetRange, InquiryType, Material, PackagingStyle, ProjectType, ShippingMethod, Tab,
    Timeline, Urgency,
};
