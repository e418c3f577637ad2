//! Domain module
//!
//! The inquiry aggregate, value objects, store events, and the pure
//! estimation and validation services.

pub mod aggregates;
pub mod catalog;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use events::*;
pub use services::{CostEstimator, EstimatedCost, InquiryValidator, ValidationErrors};
pub use value_objects::*;
